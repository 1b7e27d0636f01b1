//! Archive opening and file extraction

use crate::compression;
use crate::header::{ArchiveHeader, UserHeader};
use crate::listfile::parse_listfile;
use crate::tables::{BlockEntry, BlockTable, HashTable};
use crate::{Error, Result};
use byteorder::{ByteOrder, LittleEndian};
use log::debug;
use std::fs::File;
use std::io::{BufReader, Read, Seek, SeekFrom};
use std::path::Path;

/// Outcome of a file extraction.
///
/// Absence and encryption are expected states of real archives, not
/// failures, so they travel in the success channel and leave `Err` for
/// I/O and format problems.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    /// File found and reassembled
    Data(Vec<u8>),
    /// No entry for that name
    Absent,
    /// Entry exists but its data is encrypted, which this reader does
    /// not support
    Encrypted,
}

impl Extraction {
    /// Extracted bytes, if any.
    pub fn data(&self) -> Option<&[u8]> {
        match self {
            Self::Data(data) => Some(data),
            Self::Absent | Self::Encrypted => None,
        }
    }

    /// Consume into extracted bytes, if any.
    pub fn into_data(self) -> Option<Vec<u8>> {
        match self {
            Self::Data(data) => Some(data),
            Self::Absent | Self::Encrypted => None,
        }
    }
}

/// An opened replay archive.
///
/// Headers and both tables are read eagerly at open; file payloads are
/// read on demand through [`read_file`](Self::read_file). The reader's
/// cursor is shared mutable state, so extraction takes `&mut self`;
/// callers wanting parallel extraction open one archive per thread.
#[derive(Debug)]
pub struct Archive<R> {
    reader: R,
    user_header: UserHeader,
    header: ArchiveHeader,
    hash_table: HashTable,
    block_table: BlockTable,
}

impl Archive<BufReader<File>> {
    /// Open an archive file from disk.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        Self::new(BufReader::new(file))
    }
}

impl<R: Read + Seek> Archive<R> {
    /// Read an archive from any seekable byte stream.
    ///
    /// The stream must begin with the user header replay files carry at
    /// offset zero.
    pub fn new(mut reader: R) -> Result<Self> {
        reader.seek(SeekFrom::Start(0))?;
        let user_header = UserHeader::read(&mut reader)?;

        let archive_offset = u64::from(user_header.archive_header_offset);
        reader.seek(SeekFrom::Start(archive_offset))?;
        let header = ArchiveHeader::read(&mut reader)?;

        let hash_table = HashTable::read(
            &mut reader,
            archive_offset + u64::from(header.hash_table_offset),
            header.hash_table_entries,
        )?;
        let block_table = BlockTable::read(
            &mut reader,
            archive_offset + u64::from(header.block_table_offset),
            header.block_table_entries,
        )?;

        debug!(
            "archive open: {} block entries, sector size {}",
            block_table.len(),
            header.sector_size()
        );

        Ok(Self {
            reader,
            user_header,
            header,
            hash_table,
            block_table,
        })
    }

    /// The user header at the start of the stream.
    pub fn user_header(&self) -> &UserHeader {
        &self.user_header
    }

    /// The archive header.
    pub fn header(&self) -> &ArchiveHeader {
        &self.header
    }

    /// Payload of the user header. For replays this is the serialized
    /// protocol header carrying game version and length.
    pub fn user_data(&self) -> &[u8] {
        &self.user_header.user_data
    }

    /// Sector size for files stored in sectors.
    pub fn sector_size(&self) -> u32 {
        self.header.sector_size()
    }

    fn archive_offset(&self) -> u64 {
        u64::from(self.user_header.archive_header_offset)
    }

    /// Extract a file by name.
    ///
    /// Lookup is case-insensitive. Absent files and encrypted blocks are
    /// reported through [`Extraction`], not as errors; anything that
    /// leaves the archive untrustworthy (short reads, bad sector
    /// boundaries, corrupt bzip2 streams) is an `Err`.
    pub fn read_file(&mut self, name: &str) -> Result<Extraction> {
        let Some(hash_entry) = self.hash_table.find_entry(name) else {
            debug!("{name}: no hash entry");
            return Ok(Extraction::Absent);
        };

        let Some(&block) = self.block_table.get(hash_entry.block_index as usize) else {
            debug!(
                "{name}: block index {} out of range",
                hash_entry.block_index
            );
            return Ok(Extraction::Absent);
        };

        if !block.exists() {
            return Ok(Extraction::Absent);
        }
        if block.is_encrypted() {
            debug!("{name}: stored encrypted");
            return Ok(Extraction::Encrypted);
        }
        if block.file_size == 0 {
            return Ok(Extraction::Data(Vec::new()));
        }

        let offset = self.archive_offset() + u64::from(block.block_offset);
        self.reader.seek(SeekFrom::Start(offset))?;
        let mut raw = vec![0u8; block.archived_size as usize];
        self.reader.read_exact(&mut raw)?;

        let data = if block.is_single_unit() {
            self.read_single_unit(&block, raw)?
        } else {
            self.read_sectors(&block, &raw)?
        };

        Ok(Extraction::Data(data))
    }

    /// Names from the archive's own `(listfile)` manifest, when present.
    pub fn list(&mut self) -> Result<Option<Vec<String>>> {
        match self.read_file("(listfile)")? {
            Extraction::Data(data) => Ok(Some(parse_listfile(&data))),
            Extraction::Absent | Extraction::Encrypted => Ok(None),
        }
    }

    fn read_single_unit(&self, block: &BlockEntry, raw: Vec<u8>) -> Result<Vec<u8>> {
        if block.is_compressed() && !raw.is_empty() {
            return compression::decompress(&raw, block.file_size as usize);
        }
        Ok(raw)
    }

    /// Reassemble a sectored file from its boundary table.
    ///
    /// The boundary table at the start of the raw block holds
    /// `sector_count + 1` little-endian offsets delimiting `sector_count`
    /// spans. The sector count uses the format's tolerant
    /// `file_size / sector_size + 1` rule; a resulting empty trailing
    /// span is skipped.
    fn read_sectors(&self, block: &BlockEntry, raw: &[u8]) -> Result<Vec<u8>> {
        let sector_size = self.header.sector_size();
        let mut sector_count = (block.file_size / sector_size + 1) as usize;
        if block.has_sector_crc() {
            sector_count += 1;
        }

        let boundary_bytes = (sector_count + 1) * 4;
        if raw.len() < boundary_bytes {
            return Err(Error::invalid_format(format!(
                "sector boundary table needs {boundary_bytes} bytes, block holds {}",
                raw.len()
            )));
        }

        let mut boundaries = Vec::with_capacity(sector_count + 1);
        for chunk in raw[..boundary_bytes].chunks_exact(4) {
            boundaries.push(LittleEndian::read_u32(chunk) as usize);
        }

        // When the block carries sector checksums the final span is the
        // checksum sector: covered by the boundary table, not part of
        // the file, and never verified here.
        let data_spans = if block.has_sector_crc() {
            sector_count - 1
        } else {
            sector_count
        };

        let shrunk = block.archived_size < block.file_size;
        let mut result = Vec::with_capacity(block.file_size as usize);

        for i in 0..data_spans {
            let (start, end) = (boundaries[i], boundaries[i + 1]);
            if start > end || end > raw.len() {
                return Err(Error::invalid_format(format!(
                    "sector span {i} [{start}, {end}) outside block of {} bytes",
                    raw.len()
                )));
            }

            let span = &raw[start..end];
            if span.is_empty() {
                continue;
            }

            if block.is_compressed() && shrunk {
                // Hint only; spans of a hostile block may expand past file_size.
                let remaining = (block.file_size as usize).saturating_sub(result.len());
                let expected = remaining.min(sector_size as usize);
                let expanded = compression::decompress(span, expected)?;
                result.extend_from_slice(&expanded);
            } else {
                result.extend_from_slice(span);
            }
        }

        Ok(result)
    }
}
