//! Speech-envelope synthesis.
//!
//! Produces a signal with the duration, syllabic loudness rhythm and broad
//! spectral shape of speech, derived from the input text alone. Output is not
//! intelligible; it only needs to look like speech to VAD and endpointing code.

use std::f64::consts::TAU;

use crate::error::AudioResult;
use crate::noise::breath_noise;
use crate::signal::{samples_for_duration, AudioSignal};

use super::check_sample_rate;
use super::voice::VoiceProfile;

/// Number of whitespace-delimited tokens in `text`.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Utterance length in seconds: `max(min_duration, words * seconds_per_word)`.
pub fn speech_duration(text: &str, voice: &VoiceProfile) -> f64 {
    (word_count(text) as f64 * voice.seconds_per_word).max(voice.min_duration)
}

/// Syllabic loudness envelope, in [0, 1].
#[inline]
pub fn syllable_envelope(t: f64, syllable_rate: f64) -> f64 {
    0.5 + 0.5 * (TAU * syllable_rate * t).sin()
}

/// Weighted sum of the voice's formant partials at time `t`.
pub fn formant_sum(t: f64, voice: &VoiceProfile) -> f64 {
    voice.formants.iter().fold(0.0, |acc, formant| {
        let freq = voice.base_frequency * formant.harmonic
            + formant.wobble_depth * (TAU * formant.wobble_rate * t).sin();
        acc + formant.weight * (TAU * freq * t).sin()
    })
}

/// Synthesizes a speech-like signal for `text`.
///
/// Duration depends only on the word count. The same text, voice and rate
/// always yield bit-identical samples.
pub fn synthesize_speech(
    text: &str,
    voice: &VoiceProfile,
    sample_rate: u32,
) -> AudioResult<AudioSignal> {
    check_sample_rate(sample_rate)?;
    voice.validate()?;

    let duration = speech_duration(text, voice);
    let num_samples = samples_for_duration(duration, sample_rate);
    let rate = sample_rate as f64;

    let samples = (0..num_samples)
        .map(|i| {
            let t = i as f64 / rate;
            let envelope = syllable_envelope(t, voice.syllable_rate);
            let noise = breath_noise(i as u64, voice.breath_noise);
            (formant_sum(t, voice) * envelope + noise) * voice.output_gain
        })
        .collect();

    tracing::debug!(
        words = word_count(text),
        duration_seconds = duration,
        num_samples,
        "synthesized speech signal"
    );

    Ok(AudioSignal::new(samples, sample_rate))
}
