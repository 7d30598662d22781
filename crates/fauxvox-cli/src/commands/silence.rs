//! Silence command implementation

use anyhow::Result;
use fauxvox_audio::{RenderConfig, RenderRequest};
use std::process::ExitCode;

use super::reporting::render_and_report;

/// Run the silence command. A zero duration writes a header-only file.
pub fn run(duration: f64, output: &str, json: bool) -> Result<ExitCode> {
    let request = RenderRequest::Silence { duration };
    render_and_report("Silence", &request, &RenderConfig::default(), output, json)
}
