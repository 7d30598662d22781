//! Fixtures command implementation
//!
//! Renders the whole fixture catalog (or selected groups of it) into an
//! output directory, with transcripts, conversation manifests and a summary.

use anyhow::Result;
use colored::Colorize;
use fauxvox_audio::{RenderConfig, WavFormat};
use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;

use super::reporting::resolve_voice;
use crate::catalog::{generate_fixtures, Catalog, FixtureGroup, FixtureSummary};

/// Run the fixtures command
///
/// # Arguments
/// * `out_root` - Output root directory
/// * `catalog_path` - Catalog JSON replacing the built-in one
/// * `only` - Restrict generation to these groups (all when empty)
/// * `voice` - Default voice preset or JSON profile path
/// * `json` - Print the summary as JSON
pub fn run(
    out_root: &str,
    catalog_path: Option<&str>,
    only: &[FixtureGroup],
    voice: Option<&str>,
    json: bool,
) -> Result<ExitCode> {
    let start = Instant::now();
    let catalog = match catalog_path {
        Some(path) => Catalog::from_file(Path::new(path))?,
        None => Catalog::builtin()?,
    };
    let groups: Vec<FixtureGroup> = if only.is_empty() {
        FixtureGroup::ALL.to_vec()
    } else {
        only.to_vec()
    };
    let config = RenderConfig {
        voice: resolve_voice(voice)?,
        format: WavFormat::fixture(),
    };

    if !json {
        println!("{} {}", "Output root:".cyan().bold(), out_root);
        if let Some(path) = catalog_path {
            println!("{} {}", "Catalog:".cyan().bold(), path);
        }
    }

    let summary = generate_fixtures(&catalog, Path::new(out_root), &groups, &config)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_summary(&summary, &groups, start.elapsed().as_secs_f64());
    }
    Ok(ExitCode::SUCCESS)
}

fn print_summary(summary: &FixtureSummary, groups: &[FixtureGroup], elapsed: f64) {
    for group in groups {
        println!();
        println!("{}", format!("{}:", group).bold());
        for fixture in summary.fixtures.iter().filter(|f| f.group == *group) {
            println!(
                "  {} {} {}",
                "ok".green(),
                fixture.path,
                format!("({:.2}s)", fixture.duration_seconds).dimmed()
            );
        }
    }
    println!();
    println!(
        "{} {} files, {:.1}s of audio in {:.2}s",
        "Generated".green().bold(),
        summary.fixtures.len(),
        summary.total_duration_seconds(),
        elapsed
    );
}
