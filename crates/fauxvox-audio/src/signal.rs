//! Floating-point audio signal container.

use crate::error::{AudioError, AudioResult};

/// Sample rate used by every fixture, in Hz.
pub const DEFAULT_SAMPLE_RATE: u32 = 16000;

/// Converts a duration to a sample count at `sample_rate`.
///
/// Rounds to the nearest sample so products like `20 * 0.4 * 16000` never lose
/// a sample to floating-point truncation.
pub fn samples_for_duration(duration_seconds: f64, sample_rate: u32) -> usize {
    (duration_seconds * sample_rate as f64).round().max(0.0) as usize
}

/// A mono signal with samples nominally in [-1.0, 1.0].
#[derive(Debug, Clone, PartialEq)]
pub struct AudioSignal {
    samples: Vec<f64>,
    sample_rate: u32,
}

impl AudioSignal {
    /// Wraps samples produced at `sample_rate`.
    pub fn new(samples: Vec<f64>, sample_rate: u32) -> Self {
        Self {
            samples,
            sample_rate,
        }
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Borrowed sample slice.
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Consumes the signal and returns its samples.
    pub fn into_samples(self) -> Vec<f64> {
        self.samples
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the signal holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Duration in seconds, derived from length and rate.
    pub fn duration_seconds(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.samples.len() as f64 / self.sample_rate as f64
    }

    /// Returns a new signal with `other` appended after `self`.
    pub fn concat(&self, other: &AudioSignal) -> AudioResult<AudioSignal> {
        if self.sample_rate != other.sample_rate {
            return Err(AudioError::SampleRateMismatch {
                expected: self.sample_rate,
                found: other.sample_rate,
            });
        }
        let mut samples = Vec::with_capacity(self.len() + other.len());
        samples.extend_from_slice(&self.samples);
        samples.extend_from_slice(&other.samples);
        Ok(AudioSignal::new(samples, self.sample_rate))
    }
}
