//! Render pipeline: request -> signal -> (noise) -> PCM -> file.

use std::path::Path;

use crate::error::AudioResult;
use crate::mixer::mix_noise;
use crate::quantize::PcmBuffer;
use crate::signal::AudioSignal;
use crate::synthesis::{silence, synthesize_speech, tone, VoiceProfile};
use crate::wav::{write_wav_file, WavFormat};

/// What to render.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderRequest {
    /// Speech-like audio for `text`, optionally mixed with background noise.
    Speech {
        /// Source text; only its word count shapes the duration.
        text: String,
        /// Noise ratio in [0, 1].
        noise_ratio: Option<f64>,
    },
    /// Digital silence.
    Silence {
        /// Length in seconds.
        duration: f64,
    },
    /// A pure tone.
    Tone {
        /// Frequency in Hz.
        frequency: f64,
        /// Length in seconds.
        duration: f64,
        /// Peak amplitude in [0, 1].
        amplitude: f64,
    },
    /// Parts rendered in order and concatenated.
    Sequence(Vec<RenderRequest>),
}

impl RenderRequest {
    /// Clean speech for `text`.
    pub fn speech(text: impl Into<String>) -> Self {
        Self::Speech {
            text: text.into(),
            noise_ratio: None,
        }
    }

    /// Speech for `text` mixed with noise at `ratio`.
    pub fn noisy_speech(text: impl Into<String>, ratio: f64) -> Self {
        Self::Speech {
            text: text.into(),
            noise_ratio: Some(ratio),
        }
    }
}

/// Voice and container settings shared by every render.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderConfig {
    /// Voice used for speech requests.
    pub voice: VoiceProfile,
    /// Output container format.
    pub format: WavFormat,
}

/// Summary of a rendered file.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOutput {
    /// Number of frames written.
    pub num_samples: usize,
    /// Duration in seconds.
    pub duration_seconds: f64,
    /// BLAKE3 hash of the PCM payload.
    pub pcm_hash: String,
}

/// Renders a request to a float signal at the configured rate.
pub fn render_signal(request: &RenderRequest, config: &RenderConfig) -> AudioResult<AudioSignal> {
    config.format.validate()?;
    render_validated(request, config)
}

fn render_validated(request: &RenderRequest, config: &RenderConfig) -> AudioResult<AudioSignal> {
    let rate = config.format.sample_rate;
    match request {
        RenderRequest::Speech { text, noise_ratio } => {
            let speech = synthesize_speech(text, &config.voice, rate)?;
            match noise_ratio {
                Some(ratio) => mix_noise(&speech, *ratio),
                None => Ok(speech),
            }
        }
        RenderRequest::Silence { duration } => silence(*duration, rate),
        RenderRequest::Tone {
            frequency,
            duration,
            amplitude,
        } => tone(*frequency, *duration, *amplitude, rate),
        RenderRequest::Sequence(parts) => {
            parts
                .iter()
                .try_fold(AudioSignal::new(Vec::new(), rate), |acc, part| {
                    acc.concat(&render_validated(part, config)?)
                })
        }
    }
}

/// Renders a request to quantized PCM.
pub fn render_pcm(request: &RenderRequest, config: &RenderConfig) -> AudioResult<PcmBuffer> {
    let signal = render_signal(request, config)?;
    Ok(PcmBuffer::from_signal(&signal))
}

/// Renders a request and writes it to `path`.
pub fn render_to_file(
    request: &RenderRequest,
    config: &RenderConfig,
    path: impl AsRef<Path>,
) -> AudioResult<RenderOutput> {
    let pcm = render_pcm(request, config)?;
    write_wav_file(path, &config.format, &pcm)?;
    Ok(RenderOutput {
        num_samples: pcm.len(),
        duration_seconds: pcm.duration_seconds(),
        pcm_hash: pcm.pcm_hash(),
    })
}
