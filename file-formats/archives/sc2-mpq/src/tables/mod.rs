//! Hash and block table parsing
//!
//! Both tables are stored encrypted with keys derived from their
//! conventional names and decrypt into arrays of 16-byte entries.

mod block;
mod hash;

pub use block::{BlockEntry, BlockTable};
pub use hash::{BLOCK_INDEX_DELETED, BLOCK_INDEX_EMPTY, HashEntry, HashTable};

use crate::Result;
use crate::crypto::decrypt_block;
use byteorder::{ByteOrder, LittleEndian};
use std::io::{Read, Seek, SeekFrom};

/// Size of one entry in either table.
pub(crate) const TABLE_ENTRY_SIZE: usize = 16;

/// Read `count` encrypted entries at `offset` and return them decrypted.
///
/// Table bytes are a whole number of little-endian words; decryption runs
/// over the word view and the bytes are re-serialized for entry parsing.
pub(crate) fn read_encrypted_table<R: Read + Seek>(
    reader: &mut R,
    offset: u64,
    count: u32,
    key: u32,
) -> Result<Vec<u8>> {
    reader.seek(SeekFrom::Start(offset))?;

    let mut data = vec![0u8; count as usize * TABLE_ENTRY_SIZE];
    reader.read_exact(&mut data)?;

    let mut words = vec![0u32; data.len() / 4];
    LittleEndian::read_u32_into(&data, &mut words);
    decrypt_block(&mut words, key);
    LittleEndian::write_u32_into(&words, &mut data);

    Ok(data)
}
