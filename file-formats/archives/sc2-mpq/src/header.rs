//! User header and archive header parsing

use crate::{Error, Result, signatures};
use byteorder::{LittleEndian, ReadBytesExt};
use log::debug;
use std::io::Read;

/// Leading user-data block of a replay file.
///
/// Replays always begin with one of these at offset zero. The payload is
/// the serialized protocol header carrying game version and length; the
/// archive proper starts at [`archive_header_offset`](Self::archive_header_offset).
#[derive(Debug, Clone)]
pub struct UserHeader {
    /// Space the writer reserved for user data
    pub user_data_max_length: u32,
    /// Absolute offset of the archive header in the stream
    pub archive_header_offset: u32,
    /// Payload bytes actually present
    pub user_data_length: u32,
    /// The payload itself
    pub user_data: Vec<u8>,
}

impl UserHeader {
    /// Read a user header from the current stream position.
    pub fn read<R: Read>(reader: &mut R) -> Result<Self> {
        let magic = reader.read_u32::<LittleEndian>()?;
        if magic != signatures::MPQ_USERDATA {
            return Err(Error::invalid_format(format!(
                "bad user header magic 0x{magic:08X}"
            )));
        }

        let user_data_max_length = reader.read_u32::<LittleEndian>()?;
        let archive_header_offset = reader.read_u32::<LittleEndian>()?;
        let user_data_length = reader.read_u32::<LittleEndian>()?;

        if user_data_length > user_data_max_length {
            return Err(Error::invalid_format(format!(
                "user data length {user_data_length} exceeds reserved {user_data_max_length}"
            )));
        }

        let mut user_data = vec![0u8; user_data_length as usize];
        reader.read_exact(&mut user_data)?;

        debug!(
            "user header: archive at 0x{archive_header_offset:X}, {user_data_length} payload bytes"
        );

        Ok(Self {
            user_data_max_length,
            archive_header_offset,
            user_data_length,
            user_data,
        })
    }
}

/// Archive header describing table geometry and sector size.
///
/// The extended fields exist in the layout and are parsed, but replay
/// archives never need them for lookup.
#[derive(Debug, Clone)]
pub struct ArchiveHeader {
    /// Header size recorded by the writer
    pub header_size: u32,
    /// Archive data size in bytes
    pub archive_size: u32,
    /// Format revision
    pub format_version: u16,
    /// Sector size exponent; sectors are `512 << shift` bytes
    pub sector_size_shift: u8,
    /// Hash table offset, relative to the archive header
    pub hash_table_offset: u32,
    /// Block table offset, relative to the archive header
    pub block_table_offset: u32,
    /// Number of hash table entries
    pub hash_table_entries: u32,
    /// Number of block table entries
    pub block_table_entries: u32,
    /// Extended block table offset (retained, unused)
    pub extended_block_table_offset: u64,
    /// High 16 bits of the hash table offset (retained, unused)
    pub hash_table_offset_high: u16,
    /// High 16 bits of the block table offset (retained, unused)
    pub block_table_offset_high: u16,
}

impl ArchiveHeader {
    /// Read an archive header from the current stream position.
    pub fn read<R: Read>(reader: &mut R) -> Result<Self> {
        let magic = reader.read_u32::<LittleEndian>()?;
        if magic != signatures::MPQ_ARCHIVE {
            return Err(Error::invalid_format(format!(
                "bad archive header magic 0x{magic:08X}"
            )));
        }

        let header_size = reader.read_u32::<LittleEndian>()?;
        let archive_size = reader.read_u32::<LittleEndian>()?;
        let format_version = reader.read_u16::<LittleEndian>()?;
        let sector_size_shift = reader.read_u8()?;
        let _reserved = reader.read_u8()?;
        let hash_table_offset = reader.read_u32::<LittleEndian>()?;
        let block_table_offset = reader.read_u32::<LittleEndian>()?;
        let hash_table_entries = reader.read_u32::<LittleEndian>()?;
        let block_table_entries = reader.read_u32::<LittleEndian>()?;
        let extended_block_table_offset = reader.read_u64::<LittleEndian>()?;
        let hash_table_offset_high = reader.read_u16::<LittleEndian>()?;
        let block_table_offset_high = reader.read_u16::<LittleEndian>()?;

        // 512 << 23 no longer fits in u32, so 22 is the largest usable shift.
        if sector_size_shift > 22 {
            return Err(Error::invalid_format(format!(
                "sector size exponent {sector_size_shift} out of range"
            )));
        }

        debug!(
            "archive header: v{format_version}, {hash_table_entries} hash / {block_table_entries} block entries, sector size {}",
            512u32 << sector_size_shift
        );

        Ok(Self {
            header_size,
            archive_size,
            format_version,
            sector_size_shift,
            hash_table_offset,
            block_table_offset,
            hash_table_entries,
            block_table_entries,
            extended_block_table_offset,
            hash_table_offset_high,
            block_table_offset_high,
        })
    }

    /// Sector size in bytes for files stored in sectors.
    pub fn sector_size(&self) -> u32 {
        512 << self.sector_size_shift
    }
}
