//! # sc2_sdata - Tagged Serialization Decoder
//!
//! Decoder for the compact tagged binary format StarCraft II uses for
//! the structured sections of a replay archive: byte strings, nested
//! sequences and integer-keyed maps, and three integer widths, each
//! announced by a one-byte tag.
//!
//! The format is decode-only here. Tags this crate does not recognize
//! become [`Value::Unknown`] instead of failing the surrounding parse,
//! because newer game builds add tags faster than readers learn them.
//!
//! ## Examples
//!
//! ```
//! use sc2_sdata::{decode, Value};
//!
//! # fn main() -> Result<(), sc2_sdata::Error> {
//! // A one-entry map: key 0 holds the string "hi".
//! let value = decode(&[0x05, 0x02, 0x00, 0x02, 0x04, 0x68, 0x69])?;
//!
//! assert_eq!(value.field(0).and_then(Value::as_str), Some("hi"));
//! # Ok(())
//! # }
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]

pub mod decoder;
pub mod error;
pub mod value;

// Re-export commonly used types
pub use decoder::{Decoder, decode, tag};
pub use error::{Error, MAX_DEPTH, Result};
pub use value::Value;
