//! Block table: file placement and storage flags

use super::{TABLE_ENTRY_SIZE, read_encrypted_table};
use crate::Result;
use crate::crypto::{hash_string, hash_type};
use byteorder::{ByteOrder, LittleEndian};
use log::debug;
use std::io::{Read, Seek};

/// One block table entry (16 bytes).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockEntry {
    /// File data offset, relative to the archive header
    pub block_offset: u32,
    /// Stored (possibly compressed) size in bytes
    pub archived_size: u32,
    /// Logical size in bytes after decompression
    pub file_size: u32,
    /// Storage flags
    pub flags: u32,
}

impl BlockEntry {
    /// File data is compressed
    pub const FLAG_COMPRESS: u32 = 0x0000_0200;
    /// File data is encrypted
    pub const FLAG_ENCRYPTED: u32 = 0x0001_0000;
    /// File is stored whole instead of split into sectors
    pub const FLAG_SINGLE_UNIT: u32 = 0x0100_0000;
    /// Each sector is followed by a checksum sector
    pub const FLAG_SECTOR_CRC: u32 = 0x0400_0000;
    /// Entry describes a present file
    pub const FLAG_EXISTS: u32 = 0x8000_0000;

    fn from_bytes(chunk: &[u8]) -> Self {
        Self {
            block_offset: LittleEndian::read_u32(&chunk[0..4]),
            archived_size: LittleEndian::read_u32(&chunk[4..8]),
            file_size: LittleEndian::read_u32(&chunk[8..12]),
            flags: LittleEndian::read_u32(&chunk[12..16]),
        }
    }

    /// Entry describes a present file.
    pub fn exists(&self) -> bool {
        (self.flags & Self::FLAG_EXISTS) != 0
    }

    /// File data is compressed.
    pub fn is_compressed(&self) -> bool {
        (self.flags & Self::FLAG_COMPRESS) != 0
    }

    /// File data is encrypted.
    pub fn is_encrypted(&self) -> bool {
        (self.flags & Self::FLAG_ENCRYPTED) != 0
    }

    /// File is stored whole instead of in sectors.
    pub fn is_single_unit(&self) -> bool {
        (self.flags & Self::FLAG_SINGLE_UNIT) != 0
    }

    /// File carries a trailing checksum sector.
    pub fn has_sector_crc(&self) -> bool {
        (self.flags & Self::FLAG_SECTOR_CRC) != 0
    }
}

/// Decrypted block table.
#[derive(Debug)]
pub struct BlockTable {
    entries: Vec<BlockEntry>,
}

impl BlockTable {
    /// Read and decrypt a block table of `count` entries at `offset`.
    pub fn read<R: Read + Seek>(reader: &mut R, offset: u64, count: u32) -> Result<Self> {
        let key = hash_string("(block table)", hash_type::FILE_KEY);
        let data = read_encrypted_table(reader, offset, count, key)?;

        let entries = data
            .chunks_exact(TABLE_ENTRY_SIZE)
            .map(BlockEntry::from_bytes)
            .collect::<Vec<_>>();

        debug!("block table: {} entries", entries.len());

        Ok(Self { entries })
    }

    /// Entry at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<&BlockEntry> {
        self.entries.get(index)
    }

    /// All entries in table order.
    pub fn entries(&self) -> &[BlockEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
