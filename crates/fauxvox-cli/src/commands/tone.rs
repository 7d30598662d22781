//! Tone command implementation

use anyhow::Result;
use fauxvox_audio::{RenderConfig, RenderRequest};
use std::process::ExitCode;

use super::reporting::render_and_report;

/// Run the tone command: a pure sine at `frequency` Hz.
pub fn run(
    frequency: f64,
    duration: f64,
    amplitude: f64,
    output: &str,
    json: bool,
) -> Result<ExitCode> {
    let request = RenderRequest::Tone {
        frequency,
        duration,
        amplitude,
    };
    render_and_report("Tone", &request, &RenderConfig::default(), output, json)
}
