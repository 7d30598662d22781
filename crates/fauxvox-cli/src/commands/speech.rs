//! Speech command implementation
//!
//! Renders speech-like audio for a text string.

use anyhow::Result;
use fauxvox_audio::{RenderConfig, RenderRequest, WavFormat};
use std::process::ExitCode;

use super::reporting::{render_and_report, resolve_voice};

/// Run the speech command
///
/// # Arguments
/// * `text` - Text whose word count sets the duration
/// * `output` - Output WAV path
/// * `noise` - Optional background noise ratio in [0, 1]
/// * `voice` - Voice preset name or JSON profile path
/// * `json` - Print a JSON report instead of colored output
pub fn run(
    text: &str,
    output: &str,
    noise: Option<f64>,
    voice: Option<&str>,
    json: bool,
) -> Result<ExitCode> {
    let config = RenderConfig {
        voice: resolve_voice(voice)?,
        format: WavFormat::fixture(),
    };
    let request = RenderRequest::Speech {
        text: text.to_string(),
        noise_ratio: noise,
    };
    render_and_report("Speech", &request, &config, output, json)
}
