//! Signal generators.
//!
//! - `speech` - Speech-envelope synthesis from text
//! - `oscillators` - Pure tones and silence
//! - `voice` - Voice profiles parameterizing the speech synthesizer

pub mod oscillators;
pub mod speech;
pub mod voice;

pub use oscillators::{silence, tone, DEFAULT_TONE_AMPLITUDE};
pub use speech::{speech_duration, synthesize_speech, syllable_envelope, word_count};
pub use voice::{Formant, VoiceProfile};

use crate::error::{AudioError, AudioResult};

pub(crate) fn check_sample_rate(sample_rate: u32) -> AudioResult<()> {
    if sample_rate == 0 {
        return Err(AudioError::InvalidSampleRate { rate: sample_rate });
    }
    Ok(())
}
