//! Error types for archive operations

use thiserror::Error;

/// Result type for archive operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced while opening an archive or extracting a file.
///
/// Absent files and encrypted blocks are not errors; they are reported
/// through [`Extraction`](crate::Extraction).
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error from the underlying reader
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The byte stream is not a well-formed archive
    #[error("invalid archive format: {0}")]
    InvalidFormat(String),

    /// A compressed payload could not be decompressed
    #[error("decompression failed: {0}")]
    Compression(String),
}

impl Error {
    /// Create an invalid format error from any message
    pub fn invalid_format(msg: impl Into<String>) -> Self {
        Error::InvalidFormat(msg.into())
    }

    /// Create a compression error from any message
    pub fn compression(msg: impl Into<String>) -> Self {
        Error::Compression(msg.into())
    }
}
