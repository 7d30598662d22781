//! Shared helpers for the single-file render commands.

use anyhow::{bail, Context, Result};
use colored::Colorize;
use fauxvox_audio::{render_to_file, RenderConfig, RenderRequest, VoiceProfile};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Machine-readable result of a single render.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderReport {
    /// Output file.
    pub path: String,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Channel count.
    pub channels: u16,
    /// Bits per sample.
    pub bit_depth: u16,
    /// Frames written.
    pub num_samples: usize,
    /// Duration in seconds.
    pub duration_seconds: f64,
    /// BLAKE3 hash of the PCM payload.
    pub pcm_hash: String,
}

/// Resolves `--voice`: a preset name, or a path to a JSON profile.
pub(crate) fn resolve_voice(voice: Option<&str>) -> Result<VoiceProfile> {
    match voice {
        None => Ok(VoiceProfile::default()),
        Some(name) => match VoiceProfile::preset(name) {
            Some(preset) => Ok(preset),
            None => VoiceProfile::from_json_file(name)
                .with_context(|| format!("failed to load voice profile {}", name)),
        },
    }
}

/// Normalizes an output path to `.wav` and creates its parent directory.
pub(crate) fn prepare_output_path(output: &str) -> Result<PathBuf> {
    let mut path = PathBuf::from(output);
    match path.extension().and_then(|e| e.to_str()) {
        None => {
            path.set_extension("wav");
        }
        Some(ext) if ext.eq_ignore_ascii_case("wav") => {}
        Some(ext) => bail!(
            "unsupported container extension '.{}' (only .wav is supported)",
            ext
        ),
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }
    Ok(path)
}

/// Renders `request` to `output` and prints the result.
pub(crate) fn render_and_report(
    label: &str,
    request: &RenderRequest,
    config: &RenderConfig,
    output: &str,
    json: bool,
) -> Result<ExitCode> {
    let path = prepare_output_path(output)?;
    let rendered = render_to_file(request, config, &path)
        .with_context(|| format!("failed to render {}", path.display()))?;

    let report = RenderReport {
        path: path.display().to_string(),
        sample_rate: config.format.sample_rate,
        channels: config.format.channels,
        bit_depth: config.format.bits_per_sample,
        num_samples: rendered.num_samples,
        duration_seconds: rendered.duration_seconds,
        pcm_hash: rendered.pcm_hash,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(label, &report, &path);
    }
    Ok(ExitCode::SUCCESS)
}

fn print_report(label: &str, report: &RenderReport, path: &Path) {
    println!("{} {}", format!("{label}:").cyan().bold(), path.display());
    println!(
        "  {} {} Hz, {} ch, {}-bit",
        "format".dimmed(),
        report.sample_rate,
        report.channels,
        report.bit_depth
    );
    println!(
        "  {} {} samples ({:.3}s)",
        "length".dimmed(),
        report.num_samples,
        report.duration_seconds
    );
    println!("  {} {}", "pcm hash".dimmed(), report.pcm_hash);
    println!("{} wrote {}", "ok".green(), path.display());
}
