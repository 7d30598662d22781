//! Transcript records written next to each fixture.

use fauxvox_audio::WavFormat;
use serde::{Deserialize, Serialize};

use super::Metadata;

/// Companion JSON for a fixture WAV.
///
/// Format fields come from the `WavFormat` the audio was written with, so the
/// record always agrees with the file header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranscriptRecord {
    /// Fixture name.
    pub name: String,
    /// Spoken text.
    pub transcript: String,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Channel count.
    pub channels: u16,
    /// Bits per sample.
    pub bit_depth: u16,
    /// Container format tag.
    pub format: String,
    /// Free-form metadata.
    pub metadata: Metadata,
}

impl TranscriptRecord {
    /// Creates a record for audio written with `format`.
    pub fn new(
        name: impl Into<String>,
        transcript: impl Into<String>,
        format: &WavFormat,
        metadata: Metadata,
    ) -> Self {
        Self {
            name: name.into(),
            transcript: transcript.into(),
            sample_rate: format.sample_rate,
            channels: format.channels,
            bit_depth: format.bits_per_sample,
            format: "wav".to_string(),
            metadata,
        }
    }
}
