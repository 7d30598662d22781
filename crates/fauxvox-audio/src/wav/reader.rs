//! WAV header parsing for verifying written fixtures.

use std::fs;
use std::path::Path;

use crate::error::{AudioError, AudioResult};
use crate::quantize::PcmBuffer;

use super::format::WavFormat;
use super::pcm::extract_pcm_data;

/// Information extracted from a WAV file header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavInfo {
    /// Number of audio channels.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bits per sample.
    pub bits_per_sample: u16,
    /// Number of sample frames in the data chunk.
    pub num_frames: usize,
    /// Audio format code (1 = PCM).
    pub audio_format: u16,
    /// Byte rate (sample_rate * channels * bits_per_sample / 8).
    pub byte_rate: u32,
    /// Block alignment (channels * bits_per_sample / 8).
    pub block_align: u16,
}

impl WavInfo {
    /// Format parameters as a [`WavFormat`].
    pub fn format(&self) -> WavFormat {
        WavFormat {
            channels: self.channels,
            sample_rate: self.sample_rate,
            bits_per_sample: self.bits_per_sample,
        }
    }

    /// Duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.num_frames as f64 / self.sample_rate as f64
    }
}

fn read_u16(data: &[u8], at: usize) -> u16 {
    u16::from_le_bytes([data[at], data[at + 1]])
}

fn read_u32(data: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([data[at], data[at + 1], data[at + 2], data[at + 3]])
}

/// Parses the RIFF/WAVE header structure.
///
/// Checks the RIFF and WAVE identifiers, then walks chunks until the `fmt `
/// and `data` chunks are found.
pub fn read_wav_info(data: &[u8]) -> AudioResult<WavInfo> {
    if data.len() < 12 {
        return Err(AudioError::malformed(
            0,
            format!("file too short: {} bytes", data.len()),
        ));
    }
    if &data[0..4] != b"RIFF" {
        return Err(AudioError::malformed(0, "missing RIFF identifier"));
    }
    if &data[8..12] != b"WAVE" {
        return Err(AudioError::malformed(8, "missing WAVE identifier"));
    }

    let mut offset = 12;
    let mut fmt: Option<(u16, u16, u32, u32, u16, u16)> = None;

    while offset + 8 <= data.len() {
        let chunk_id = &data[offset..offset + 4];
        let chunk_size = read_u32(data, offset + 4) as usize;

        if chunk_id == b"fmt " {
            if chunk_size < 16 {
                return Err(AudioError::malformed(
                    offset,
                    format!("fmt chunk too small: {chunk_size} bytes"),
                ));
            }
            if offset + 8 + 16 > data.len() {
                return Err(AudioError::malformed(offset, "truncated fmt chunk"));
            }
            let at = offset + 8;
            fmt = Some((
                read_u16(data, at),
                read_u16(data, at + 2),
                read_u32(data, at + 4),
                read_u32(data, at + 8),
                read_u16(data, at + 12),
                read_u16(data, at + 14),
            ));
        }

        if chunk_id == b"data" {
            let Some((audio_format, channels, sample_rate, byte_rate, block_align, bits)) = fmt
            else {
                return Err(AudioError::malformed(
                    offset,
                    "data chunk found before fmt chunk",
                ));
            };
            if offset + 8 + chunk_size > data.len() {
                return Err(AudioError::malformed(offset, "truncated data chunk"));
            }
            let num_frames = if block_align > 0 {
                chunk_size / block_align as usize
            } else {
                0
            };
            return Ok(WavInfo {
                channels,
                sample_rate,
                bits_per_sample: bits,
                num_frames,
                audio_format,
                byte_rate,
                block_align,
            });
        }

        // Chunks are word-aligned
        offset += 8 + chunk_size + (chunk_size % 2);
    }

    if fmt.is_none() {
        return Err(AudioError::malformed(offset, "missing fmt chunk"));
    }
    Err(AudioError::malformed(offset, "missing data chunk"))
}

/// Reads a mono 16-bit WAV file into its header info and samples.
pub fn read_wav_file(path: impl AsRef<Path>) -> AudioResult<(WavInfo, PcmBuffer)> {
    let path = path.as_ref();
    let data = fs::read(path).map_err(|e| AudioError::storage(path, e))?;
    let info = read_wav_info(&data)?;
    info.format().validate()?;

    let pcm_bytes =
        extract_pcm_data(&data).ok_or_else(|| AudioError::malformed(12, "missing data chunk"))?;
    let samples = pcm_bytes
        .chunks_exact(2)
        .map(|pair| i16::from_le_bytes([pair[0], pair[1]]))
        .collect();

    Ok((info, PcmBuffer::new(samples, info.sample_rate)))
}
