//! WAV file format parameters.

use crate::error::{AudioError, AudioResult};
use crate::signal::DEFAULT_SAMPLE_RATE;

/// Size of the canonical RIFF/WAVE header written by this crate.
pub const WAV_HEADER_LEN: usize = 44;

/// WAV file format parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavFormat {
    /// Number of channels. Only 1 (mono) is accepted by the writer.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bits per sample. Only 16 is accepted by the writer.
    pub bits_per_sample: u16,
}

impl WavFormat {
    /// The fixture format: mono, 16-bit, 16 kHz.
    pub fn fixture() -> Self {
        Self::mono(DEFAULT_SAMPLE_RATE)
    }

    /// Creates a mono 16-bit format.
    pub fn mono(sample_rate: u32) -> Self {
        Self {
            channels: 1,
            sample_rate,
            bits_per_sample: 16,
        }
    }

    /// Rejects anything but mono 16-bit PCM at a positive rate.
    pub fn validate(&self) -> AudioResult<()> {
        if self.channels != 1 {
            return Err(AudioError::UnsupportedChannels {
                channels: self.channels,
            });
        }
        if self.bits_per_sample != 16 {
            return Err(AudioError::UnsupportedSampleWidth {
                bits: self.bits_per_sample,
            });
        }
        if self.sample_rate == 0 {
            return Err(AudioError::InvalidSampleRate {
                rate: self.sample_rate,
            });
        }
        Ok(())
    }

    /// Bytes per sample (per channel).
    pub fn bytes_per_sample(&self) -> u16 {
        self.bits_per_sample / 8
    }

    /// Block align (bytes per sample frame).
    pub fn block_align(&self) -> u16 {
        self.channels * self.bytes_per_sample()
    }

    /// Byte rate (bytes per second).
    pub fn byte_rate(&self) -> u32 {
        self.sample_rate * self.block_align() as u32
    }
}

impl Default for WavFormat {
    fn default() -> Self {
        Self::fixture()
    }
}
