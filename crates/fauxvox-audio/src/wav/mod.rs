//! Deterministic WAV container writer and reader.
//!
//! Writes canonical 44-byte-header 16-bit PCM mono files with no timestamps or
//! optional chunks, so identical PCM always yields identical files. The reader
//! side exists to verify written fixtures.

mod format;
mod pcm;
mod reader;
mod writer;


// Re-export public API
pub use format::{WavFormat, WAV_HEADER_LEN};
pub use pcm::{compute_pcm_hash, extract_pcm_data};
pub use reader::{read_wav_file, read_wav_info, WavInfo};
pub use writer::{wav_header, write_wav, write_wav_file, write_wav_to_vec};
