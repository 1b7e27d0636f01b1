//! # sc2_mpq - Replay Archive Reader
//!
//! Reader for the MPQ container format as StarCraft II replay files use
//! it: a leading user-data header, encrypted hash and block tables, and
//! bzip2-compressed file payloads.
//!
//! The scope is deliberately the replay profile of the format. Archives
//! are opened read-only, file-content encryption is detected but not
//! decrypted, and bzip2 is the only compression method expanded.
//!
//! ## Examples
//!
//! ```no_run
//! use sc2_mpq::{Archive, Extraction};
//!
//! # fn main() -> Result<(), sc2_mpq::Error> {
//! let mut archive = Archive::open("example.SC2Replay")?;
//!
//! // Members the archive knows about
//! if let Some(names) = archive.list()? {
//!     for name in names {
//!         println!("{name}");
//!     }
//! }
//!
//! // Extract a member file
//! match archive.read_file("replay.details")? {
//!     Extraction::Data(bytes) => println!("{} bytes", bytes.len()),
//!     Extraction::Absent => println!("not in this archive"),
//!     Extraction::Encrypted => println!("stored encrypted"),
//! }
//! # Ok(())
//! # }
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]

pub mod archive;
pub mod compression;
pub mod crypto;
pub mod error;
pub mod header;
pub mod listfile;
pub mod tables;

#[cfg(any(test, feature = "test-utils", doc))]
pub mod test_utils;

// Re-export commonly used types
pub use archive::{Archive, Extraction};
pub use error::{Error, Result};
pub use header::{ArchiveHeader, UserHeader};
pub use listfile::parse_listfile;
pub use tables::{BlockEntry, BlockTable, HashEntry, HashTable};

// Re-export the hash and cipher primitives; consumers key fixtures and
// diagnostics off them
pub use crypto::{decrypt_block, encrypt_block, hash_string, hash_type};

/// Archive signature constants
pub mod signatures {
    /// Archive header signature (`MPQ\x1A`)
    pub const MPQ_ARCHIVE: u32 = 0x1A51_504D;

    /// User data header signature (`MPQ\x1B`)
    pub const MPQ_USERDATA: u32 = 0x1B51_504D;
}
