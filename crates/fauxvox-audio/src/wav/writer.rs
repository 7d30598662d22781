//! Core WAV writing functions.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::error::{AudioError, AudioResult};
use crate::quantize::PcmBuffer;

use super::format::{WavFormat, WAV_HEADER_LEN};

/// Builds the canonical RIFF/WAVE header for `data_size` bytes of PCM.
pub fn wav_header(format: &WavFormat, data_size: u32) -> [u8; WAV_HEADER_LEN] {
    // Total file size minus 8 bytes for the RIFF header
    let file_size = 36u32.saturating_add(data_size);
    let mut header = [0u8; WAV_HEADER_LEN];

    // RIFF header
    header[0..4].copy_from_slice(b"RIFF");
    header[4..8].copy_from_slice(&file_size.to_le_bytes());
    header[8..12].copy_from_slice(b"WAVE");

    // fmt chunk
    header[12..16].copy_from_slice(b"fmt ");
    header[16..20].copy_from_slice(&16u32.to_le_bytes()); // Chunk size (16 for PCM)
    header[20..22].copy_from_slice(&1u16.to_le_bytes()); // Audio format (1 = PCM)
    header[22..24].copy_from_slice(&format.channels.to_le_bytes());
    header[24..28].copy_from_slice(&format.sample_rate.to_le_bytes());
    header[28..32].copy_from_slice(&format.byte_rate().to_le_bytes());
    header[32..34].copy_from_slice(&format.block_align().to_le_bytes());
    header[34..36].copy_from_slice(&format.bits_per_sample.to_le_bytes());

    // data chunk
    header[36..40].copy_from_slice(b"data");
    header[40..44].copy_from_slice(&data_size.to_le_bytes());

    header
}

/// Writes a complete WAV file to a writer.
///
/// # Arguments
/// * `writer` - Output writer
/// * `format` - WAV format parameters
/// * `pcm_data` - Raw little-endian PCM bytes
pub fn write_wav<W: Write>(writer: &mut W, format: &WavFormat, pcm_data: &[u8]) -> io::Result<()> {
    let data_size = data_chunk_size(pcm_data.len())?;
    writer.write_all(&wav_header(format, data_size))?;
    writer.write_all(pcm_data)?;
    Ok(())
}

/// Size field for a data chunk of `len` bytes.
///
/// The RIFF size field (`36 + len`) must also fit in 32 bits.
pub(crate) fn data_chunk_size(len: usize) -> io::Result<u32> {
    u32::try_from(len)
        .ok()
        .filter(|size| *size <= u32::MAX - 36)
        .ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                "PCM data too large for a RIFF container",
            )
        })
}

/// Writes a WAV file to a byte vector.
pub fn write_wav_to_vec(format: &WavFormat, pcm_data: &[u8]) -> io::Result<Vec<u8>> {
    let mut buffer = Vec::with_capacity(WAV_HEADER_LEN + pcm_data.len());
    write_wav(&mut buffer, format, pcm_data)?;
    Ok(buffer)
}

/// Validates `format`, then writes `pcm` to `path`, replacing any existing file.
///
/// An empty buffer produces a header-only file with zero frames. The parent
/// directory must already exist.
pub fn write_wav_file(
    path: impl AsRef<Path>,
    format: &WavFormat,
    pcm: &PcmBuffer,
) -> AudioResult<()> {
    let path = path.as_ref();
    format.validate()?;
    if pcm.sample_rate != format.sample_rate {
        return Err(AudioError::SampleRateMismatch {
            expected: format.sample_rate,
            found: pcm.sample_rate,
        });
    }

    let bytes = pcm.to_le_bytes();
    let file = File::create(path).map_err(|e| AudioError::storage(path, e))?;
    let mut writer = BufWriter::new(file);
    write_wav(&mut writer, format, &bytes).map_err(|e| AudioError::storage(path, e))?;
    writer.flush().map_err(|e| AudioError::storage(path, e))?;

    tracing::debug!(
        path = %path.display(),
        frames = pcm.len(),
        sample_rate = format.sample_rate,
        "wrote wav file"
    );
    Ok(())
}
