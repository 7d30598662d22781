//! Inspect command implementation
//!
//! Prints header information and the PCM hash of a WAV file.

use anyhow::{Context, Result};
use colored::Colorize;
use fauxvox_audio::read_wav_file;
use serde::Serialize;
use std::process::ExitCode;

/// WAV file details.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InspectReport {
    /// Inspected file.
    pub path: String,
    /// Channel count.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bits per sample.
    pub bit_depth: u16,
    /// Number of frames.
    pub num_frames: usize,
    /// Duration in seconds.
    pub duration_seconds: f64,
    /// Peak absolute sample value.
    pub peak: u16,
    /// BLAKE3 hash of the PCM payload.
    pub pcm_hash: String,
}

/// Reads `input` and builds its report.
pub fn inspect(input: &str) -> Result<InspectReport> {
    let (info, pcm) = read_wav_file(input).with_context(|| format!("failed to read {}", input))?;
    let peak = pcm
        .samples
        .iter()
        .map(|s| s.unsigned_abs())
        .max()
        .unwrap_or(0);

    Ok(InspectReport {
        path: input.to_string(),
        channels: info.channels,
        sample_rate: info.sample_rate,
        bit_depth: info.bits_per_sample,
        num_frames: info.num_frames,
        duration_seconds: info.duration_seconds(),
        peak,
        pcm_hash: pcm.pcm_hash(),
    })
}

/// Run the inspect command
pub fn run(input: &str, json: bool) -> Result<ExitCode> {
    let report = inspect(input)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(ExitCode::SUCCESS);
    }

    println!("{} {}", "Inspecting:".cyan().bold(), report.path);
    println!(
        "  {} {} Hz, {} ch, {}-bit PCM",
        "format".dimmed(),
        report.sample_rate,
        report.channels,
        report.bit_depth
    );
    println!(
        "  {} {} frames ({:.3}s)",
        "length".dimmed(),
        report.num_frames,
        report.duration_seconds
    );
    println!("  {} {}", "peak".dimmed(), report.peak);
    println!("  {} {}", "pcm hash".dimmed(), report.pcm_hash);
    Ok(ExitCode::SUCCESS)
}
