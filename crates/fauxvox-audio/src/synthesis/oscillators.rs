//! Non-speech primitives: pure tones and silence.

use std::f64::consts::TAU;

use crate::error::{AudioError, AudioResult};
use crate::signal::{samples_for_duration, AudioSignal};

use super::check_sample_rate;

/// Default tone amplitude.
pub const DEFAULT_TONE_AMPLITUDE: f64 = 0.5;

/// Generates a pure sine tone with no envelope or noise.
///
/// # Arguments
/// * `frequency` - Tone frequency in Hz, must be positive
/// * `duration` - Length in seconds, must be positive
/// * `amplitude` - Peak amplitude in [0, 1]
/// * `sample_rate` - Audio sample rate in Hz
pub fn tone(
    frequency: f64,
    duration: f64,
    amplitude: f64,
    sample_rate: u32,
) -> AudioResult<AudioSignal> {
    check_sample_rate(sample_rate)?;
    if !(frequency.is_finite() && frequency > 0.0) {
        return Err(AudioError::InvalidFrequency { freq: frequency });
    }
    if !(duration.is_finite() && duration > 0.0) {
        return Err(AudioError::InvalidDuration { duration });
    }
    if !(0.0..=1.0).contains(&amplitude) {
        return Err(AudioError::invalid_param(
            "amplitude",
            format!("must be between 0 and 1, got {amplitude}"),
        ));
    }

    let num_samples = samples_for_duration(duration, sample_rate);
    let rate = sample_rate as f64;
    let samples = (0..num_samples)
        .map(|i| amplitude * (TAU * frequency * i as f64 / rate).sin())
        .collect();

    tracing::debug!(frequency, duration, num_samples, "generated tone");
    Ok(AudioSignal::new(samples, sample_rate))
}

/// Generates `duration` seconds of digital silence.
///
/// A zero duration yields an empty signal.
pub fn silence(duration: f64, sample_rate: u32) -> AudioResult<AudioSignal> {
    check_sample_rate(sample_rate)?;
    if !(duration.is_finite() && duration >= 0.0) {
        return Err(AudioError::InvalidDuration { duration });
    }
    let num_samples = samples_for_duration(duration, sample_rate);
    tracing::debug!(duration, num_samples, "generated silence");
    Ok(AudioSignal::new(vec![0.0; num_samples], sample_rate))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tone_length_and_start() {
        let signal = tone(440.0, 0.5, DEFAULT_TONE_AMPLITUDE, 16000).unwrap();
        assert_eq!(signal.len(), 8000);
        assert_eq!(signal.samples()[0], 0.0);
        assert!(signal.samples().iter().all(|s| s.abs() <= 0.5));
    }

    #[test]
    fn test_tone_quarter_period_peak() {
        // 1 kHz at 16 kHz: sample 4 is a quarter period in.
        let signal = tone(1000.0, 0.01, 1.0, 16000).unwrap();
        assert!((signal.samples()[4] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_tone_rejects_bad_parameters() {
        assert!(matches!(
            tone(0.0, 1.0, 0.5, 16000),
            Err(AudioError::InvalidFrequency { .. })
        ));
        assert!(matches!(
            tone(-440.0, 1.0, 0.5, 16000),
            Err(AudioError::InvalidFrequency { .. })
        ));
        assert!(matches!(
            tone(440.0, 0.0, 0.5, 16000),
            Err(AudioError::InvalidDuration { .. })
        ));
        assert!(matches!(
            tone(440.0, 1.0, 1.5, 16000),
            Err(AudioError::InvalidParameter { .. })
        ));
        assert!(matches!(
            tone(440.0, 1.0, 0.5, 0),
            Err(AudioError::InvalidSampleRate { .. })
        ));
    }

    #[test]
    fn test_silence() {
        let signal = silence(3.0, 16000).unwrap();
        assert_eq!(signal.len(), 48000);
        assert!(signal.samples().iter().all(|&s| s == 0.0));
    }

    #[test]
    fn test_zero_silence_is_empty() {
        let signal = silence(0.0, 16000).unwrap();
        assert!(signal.is_empty());
        assert_eq!(signal.sample_rate(), 16000);
    }

    #[test]
    fn test_negative_silence_rejected() {
        let err = silence(-0.1, 16000).unwrap_err();
        assert!(err.is_configuration());
    }
}
