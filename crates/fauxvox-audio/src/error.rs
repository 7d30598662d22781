//! Error types for fixture audio generation.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type for audio operations.
pub type AudioResult<T> = Result<T, AudioError>;

/// Broad error category, used by callers to decide how to report a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Invalid format or primitive parameters. Raised before any synthesis work.
    Configuration,
    /// The destination could not be written (or a source could not be read).
    Storage,
    /// A container could not be parsed.
    Format,
}

/// Errors that can occur while synthesizing, writing, or reading fixture audio.
#[derive(Debug, Error)]
pub enum AudioError {
    /// Channel count other than mono.
    #[error("unsupported channel count: {channels} (only mono is supported)")]
    UnsupportedChannels {
        /// The rejected channel count.
        channels: u16,
    },

    /// Sample width other than 16-bit.
    #[error("unsupported sample width: {bits} bits (only 16-bit PCM is supported)")]
    UnsupportedSampleWidth {
        /// The rejected bit depth.
        bits: u16,
    },

    /// Invalid sample rate.
    #[error("invalid sample rate: {rate}")]
    InvalidSampleRate {
        /// The invalid sample rate.
        rate: u32,
    },

    /// Two sides of an operation disagree on the sample rate.
    #[error("sample rate mismatch: expected {expected} Hz, found {found} Hz")]
    SampleRateMismatch {
        /// Rate required by the receiving side (format or leading signal).
        expected: u32,
        /// Rate actually carried by the incoming buffer.
        found: u32,
    },

    /// Invalid duration.
    #[error("invalid duration: {duration} seconds")]
    InvalidDuration {
        /// The invalid duration.
        duration: f64,
    },

    /// Invalid frequency.
    #[error("invalid frequency: {freq} Hz")]
    InvalidFrequency {
        /// The invalid frequency.
        freq: f64,
    },

    /// Invalid parameter value.
    #[error("invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Parameter name.
        name: String,
        /// Error message.
        message: String,
    },

    /// Destination unwritable, parent directory missing, or source unreadable.
    #[error("storage error at {}: {source}", path.display())]
    Storage {
        /// Path that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Malformed RIFF/WAVE container.
    #[error("malformed WAV at byte {offset}: {message}")]
    MalformedWav {
        /// Byte offset where parsing failed.
        offset: usize,
        /// Error message.
        message: String,
    },
}

impl AudioError {
    /// Creates an invalid parameter error.
    pub fn invalid_param(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Creates a storage error for `path`.
    pub fn storage(path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::Storage {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Creates a malformed container error.
    pub fn malformed(offset: usize, message: impl Into<String>) -> Self {
        Self::MalformedWav {
            offset,
            message: message.into(),
        }
    }

    /// Returns the category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            AudioError::Storage { .. } => ErrorCategory::Storage,
            AudioError::MalformedWav { .. } => ErrorCategory::Format,
            _ => ErrorCategory::Configuration,
        }
    }

    /// Returns a stable error code.
    pub fn code(&self) -> &'static str {
        match self {
            AudioError::UnsupportedChannels { .. } => "FAUXVOX_001",
            AudioError::UnsupportedSampleWidth { .. } => "FAUXVOX_002",
            AudioError::InvalidSampleRate { .. } => "FAUXVOX_003",
            AudioError::SampleRateMismatch { .. } => "FAUXVOX_004",
            AudioError::InvalidDuration { .. } => "FAUXVOX_005",
            AudioError::InvalidFrequency { .. } => "FAUXVOX_006",
            AudioError::InvalidParameter { .. } => "FAUXVOX_007",
            AudioError::Storage { .. } => "FAUXVOX_008",
            AudioError::MalformedWav { .. } => "FAUXVOX_009",
        }
    }

    /// Returns true for errors raised by parameter or format validation.
    pub fn is_configuration(&self) -> bool {
        self.category() == ErrorCategory::Configuration
    }
}
