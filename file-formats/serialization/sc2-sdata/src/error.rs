//! Error types for decoding

use thiserror::Error;

/// Result type for decode operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced while decoding a tagged byte stream.
///
/// Unknown tags are not errors; they decode to
/// [`Value::Unknown`](crate::Value::Unknown) so that one unrecognized
/// field does not discard an otherwise readable payload.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The input ended in the middle of a value
    #[error("input truncated at offset {offset}: {needed} more byte(s) required")]
    Truncated {
        /// Position of the read that ran past the end
        offset: usize,
        /// How many bytes past the end the read extended
        needed: usize,
    },

    /// A length or element count decoded to a negative number
    #[error("negative length {0} at offset {1}")]
    NegativeLength(i64, usize),

    /// A variable-length integer ran past the widest supported magnitude
    #[error("integer at offset {0} exceeds 63 bits")]
    OverlongInteger(usize),

    /// Containers nested deeper than the decoder is willing to follow
    #[error("container nesting too deep at offset {0}")]
    NestedTooDeep(usize),
}

/// Maximum container nesting the decoder follows before giving up.
///
/// Real replay payloads nest a handful of levels; the cap exists so
/// that adversarial input cannot exhaust the call stack.
pub const MAX_DEPTH: usize = 64;
