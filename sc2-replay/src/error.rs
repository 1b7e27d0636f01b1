//! Error types for replay parsing

use thiserror::Error;

/// Result type for replay parsing
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced while reading a replay.
#[derive(Error, Debug)]
pub enum Error {
    /// The container layer could not produce the member's bytes
    #[error("archive error: {0}")]
    Archive(#[from] sc2_mpq::Error),

    /// A serialized section did not decode
    #[error("serialization error: {0}")]
    Decode(#[from] sc2_sdata::Error),

    /// A member file every replay carries is not in this archive
    #[error("replay has no {0} member")]
    MissingFile(String),

    /// A member decoded, but its shape is not what a replay contains
    #[error("malformed replay: {0}")]
    Malformed(String),

    /// An attribute value this library has no name for
    #[error("unrecognized {kind} code {code:?}")]
    UnknownCode {
        /// Which attribute carried the code
        kind: &'static str,
        /// The four-character code as stored
        code: String,
    },
}

impl Error {
    /// Create a malformed-replay error from any message
    pub fn malformed(msg: impl Into<String>) -> Self {
        Error::Malformed(msg.into())
    }

    pub(crate) fn missing(name: &str) -> Self {
        Error::MissingFile(name.to_string())
    }
}
