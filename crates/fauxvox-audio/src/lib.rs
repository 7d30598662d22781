//! fauxvox audio core
//!
//! Deterministic, dependency-light generation of speech-like audio for voice
//! pipeline test fixtures. Given only a text string, the synthesizer produces a
//! signal with speech-like duration, syllabic loudness rhythm and formant
//! structure, good enough to exercise voice-activity detection and endpointing
//! without a network TTS service.
//!
//! # Pipeline
//!
//! ```text
//! text / silence / tone -> AudioSignal -> [mix_noise] -> PcmBuffer -> WAV file
//! ```
//!
//! Every stage is a pure function over owned buffers. There is no global
//! state, so independent renders can run on separate threads freely.
//!
//! # Determinism
//!
//! The breath and background noise come from an index-driven linear
//! congruential recurrence rather than a seeded RNG. Identical text always
//! produces bit-identical PCM, and [`PcmBuffer::pcm_hash`] gives a stable
//! BLAKE3 fingerprint for regression checks.
//!
//! # Example
//!
//! ```no_run
//! use fauxvox_audio::{render_to_file, RenderConfig, RenderRequest};
//!
//! let config = RenderConfig::default(); // 16 kHz mono 16-bit, default voice
//! let out = render_to_file(&RenderRequest::speech("Hello world."), &config, "hello.wav")?;
//! println!("{} samples, hash {}", out.num_samples, out.pcm_hash);
//! # Ok::<(), fauxvox_audio::AudioError>(())
//! ```
//!
//! # Crate Structure
//!
//! - [`synthesis`] - Speech-envelope synthesizer, tones, silence, voice profiles
//! - [`mixer`] - Background-noise mixing
//! - [`noise`] - The deterministic noise recurrence
//! - [`quantize`] - Float to 16-bit PCM conversion
//! - [`wav`] - WAV container writer and reader
//! - [`render`] - The end-to-end pipeline

pub mod error;
pub mod mixer;
pub mod noise;
pub mod quantize;
pub mod render;
pub mod signal;
pub mod synthesis;
pub mod wav;

// Re-export main types at crate root
pub use error::{AudioError, AudioResult, ErrorCategory};
pub use mixer::mix_noise;
pub use quantize::{dequantize_sample, quantize_sample, PcmBuffer};
pub use render::{
    render_pcm, render_signal, render_to_file, RenderConfig, RenderOutput, RenderRequest,
};
pub use signal::{samples_for_duration, AudioSignal, DEFAULT_SAMPLE_RATE};
pub use synthesis::{silence, synthesize_speech, tone, VoiceProfile};
pub use wav::{read_wav_file, read_wav_info, write_wav_file, WavFormat, WavInfo};
