//! Keyed hashing and the table cipher
//!
//! Everything here derives from one 1280-word lookup table: the filename
//! hashes used for table lookups, the cipher keys named files decrypt
//! under, and the word-stream cipher the hash and block tables are stored
//! with.
//!
//! ```
//! use sc2_mpq::crypto::{hash_string, hash_type};
//!
//! let key = hash_string("(hash table)", hash_type::FILE_KEY);
//! assert_eq!(key, 0xC3AF_3770);
//! ```

mod decrypt;
mod encrypt;
mod hash;
mod table;

pub use decrypt::decrypt_block;
pub use encrypt::encrypt_block;
pub use hash::{hash_string, hash_type};
