//! Hash table: the filename index of the archive

use super::{TABLE_ENTRY_SIZE, read_encrypted_table};
use crate::Result;
use crate::crypto::{hash_string, hash_type};
use byteorder::{ByteOrder, LittleEndian};
use log::debug;
use std::io::{Read, Seek};

/// Block index sentinel for a slot that never held a file.
pub const BLOCK_INDEX_EMPTY: u32 = 0xFFFF_FFFF;
/// Block index sentinel for a slot whose file was deleted.
pub const BLOCK_INDEX_DELETED: u32 = 0xFFFF_FFFE;

/// One hash table slot (16 bytes).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashEntry {
    /// First check hash of the filename
    pub hash_a: u32,
    /// Second check hash of the filename
    pub hash_b: u32,
    /// Locale code; parsed but never consulted for replays
    pub locale: u16,
    /// Platform code; parsed but never consulted
    pub platform: u16,
    /// Index into the block table, or a sentinel
    pub block_index: u32,
}

impl HashEntry {
    fn from_bytes(chunk: &[u8]) -> Self {
        Self {
            hash_a: LittleEndian::read_u32(&chunk[0..4]),
            hash_b: LittleEndian::read_u32(&chunk[4..8]),
            locale: LittleEndian::read_u16(&chunk[8..10]),
            platform: LittleEndian::read_u16(&chunk[10..12]),
            block_index: LittleEndian::read_u32(&chunk[12..16]),
        }
    }

    /// Slot was never used.
    pub fn is_empty(&self) -> bool {
        self.block_index == BLOCK_INDEX_EMPTY
    }

    /// Slot held a file that was later deleted.
    pub fn is_deleted(&self) -> bool {
        self.block_index == BLOCK_INDEX_DELETED
    }

    /// Slot points at a live block entry.
    pub fn is_valid(&self) -> bool {
        !self.is_empty() && !self.is_deleted()
    }
}

/// Decrypted hash table.
#[derive(Debug)]
pub struct HashTable {
    entries: Vec<HashEntry>,
}

impl HashTable {
    /// Read and decrypt a hash table of `count` entries at `offset`.
    pub fn read<R: Read + Seek>(reader: &mut R, offset: u64, count: u32) -> Result<Self> {
        let key = hash_string("(hash table)", hash_type::FILE_KEY);
        let data = read_encrypted_table(reader, offset, count, key)?;

        let entries = data
            .chunks_exact(TABLE_ENTRY_SIZE)
            .map(HashEntry::from_bytes)
            .collect::<Vec<_>>();

        debug!(
            "hash table: {} slots, {} live",
            entries.len(),
            entries.iter().filter(|e| e.is_valid()).count()
        );

        Ok(Self { entries })
    }

    /// All slots in table order.
    pub fn entries(&self) -> &[HashEntry] {
        &self.entries
    }

    /// Find the live slot whose check hashes match `filename`.
    ///
    /// Replay hash tables are tiny, so the lookup is a full linear scan
    /// rather than bucketed probing from the offset hash.
    pub fn find_entry(&self, filename: &str) -> Option<&HashEntry> {
        let hash_a = hash_string(filename, hash_type::NAME_A);
        let hash_b = hash_string(filename, hash_type::NAME_B);

        self.entries
            .iter()
            .find(|e| e.is_valid() && e.hash_a == hash_a && e.hash_b == hash_b)
    }
}
