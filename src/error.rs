//! Error types for compression and decompression.

use std::io;

use thiserror::Error;

/// Result type alias for codec operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Underlying read or write fault. The operation aborts; no retry.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The compressed stream is inconsistent with its own header.
    #[error("corrupt stream: {message}")]
    CorruptStream { message: String },

    /// The byte-count header field is 32 bits wide; longer inputs are
    /// rejected up front rather than silently truncated.
    #[error("input too large for the 32-bit byte-count header: {0} bytes")]
    InputTooLarge(u64),
}

impl Error {
    /// Create a corrupt-stream error.
    pub fn corrupt(message: impl Into<String>) -> Self {
        Error::CorruptStream {
            message: message.into(),
        }
    }

    /// Classify a failed bit read: an unexpected EOF means the stream
    /// declared more content than it holds, anything else is a real
    /// I/O fault.
    pub(crate) fn from_read(err: io::Error, stage: &str) -> Self {
        if err.kind() == io::ErrorKind::UnexpectedEof {
            Error::corrupt(format!("{stage}: bit stream ended early"))
        } else {
            Error::Io(err)
        }
    }

    pub fn is_corrupt(&self) -> bool {
        matches!(self, Error::CorruptStream { .. })
    }
}
