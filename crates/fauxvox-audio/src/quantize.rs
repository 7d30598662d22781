//! Float to 16-bit PCM quantization.

use crate::signal::AudioSignal;

/// Full-scale multiplier for 16-bit PCM.
pub const PCM16_SCALE: f64 = 32767.0;

/// Quantizes one amplitude to a 16-bit sample.
///
/// Rounds to nearest, then clamps to the `i16` range. NaN maps to 0.
#[inline]
pub fn quantize_sample(amplitude: f64) -> i16 {
    if amplitude.is_nan() {
        return 0;
    }
    (amplitude * PCM16_SCALE)
        .round()
        .clamp(i16::MIN as f64, i16::MAX as f64) as i16
}

/// Maps a 16-bit sample back to a float amplitude.
#[inline]
pub fn dequantize_sample(sample: i16) -> f64 {
    sample as f64 / PCM16_SCALE
}

/// Mono 16-bit PCM samples at a known rate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PcmBuffer {
    /// Samples, one per frame.
    pub samples: Vec<i16>,
    /// Sample rate in Hz.
    pub sample_rate: u32,
}

impl PcmBuffer {
    /// Wraps existing samples.
    pub fn new(samples: Vec<i16>, sample_rate: u32) -> Self {
        Self {
            samples,
            sample_rate,
        }
    }

    /// Quantizes a float signal elementwise.
    pub fn from_signal(signal: &AudioSignal) -> Self {
        let samples = signal.samples().iter().map(|&a| quantize_sample(a)).collect();
        Self::new(samples, signal.sample_rate())
    }

    /// Decodes back to a float signal.
    pub fn to_signal(&self) -> AudioSignal {
        let samples = self.samples.iter().map(|&s| dequantize_sample(s)).collect();
        AudioSignal::new(samples, self.sample_rate)
    }

    /// Number of frames.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.samples.len() as f64 / self.sample_rate as f64
    }

    /// Little-endian byte serialization.
    pub fn to_le_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.samples.len() * 2);
        for &sample in &self.samples {
            bytes.extend_from_slice(&sample.to_le_bytes());
        }
        bytes
    }

    /// BLAKE3 hash of the little-endian PCM bytes.
    pub fn pcm_hash(&self) -> String {
        blake3::hash(&self.to_le_bytes()).to_hex().to_string()
    }
}
