//! Fixture archives for this workspace's test suites
//!
//! Builds small but fully valid archives in memory: user header,
//! archive header, file payloads, and properly encrypted hash and block
//! tables. This exists so tests can exercise the reader without shipping
//! binary fixtures; it is test tooling, not an archive-writing API.

use crate::crypto::{encrypt_block, hash_string, hash_type};
use crate::tables::BlockEntry;
use byteorder::{ByteOrder, LittleEndian};
use bzip2::Compression;
use bzip2::write::BzEncoder;
use std::io::Write;

const ARCHIVE_HEADER_SIZE: u32 = 44;

#[derive(Debug, Clone)]
struct FixtureFile {
    name: String,
    /// Bytes as they sit on disk, boundary tables included
    raw: Vec<u8>,
    file_size: u32,
    flags: u32,
}

/// Builder for in-memory fixture archives.
///
/// ```ignore
/// use sc2_mpq::test_utils::FixtureArchive;
/// use sc2_mpq::{Archive, Extraction};
/// use std::io::Cursor;
///
/// let bytes = FixtureArchive::new()
///     .with_stored_file("hello.txt", b"hi")
///     .build();
/// let mut archive = Archive::new(Cursor::new(bytes)).unwrap();
/// assert!(matches!(archive.read_file("hello.txt"), Ok(Extraction::Data(_))));
/// ```
#[derive(Debug, Clone)]
pub struct FixtureArchive {
    user_data: Vec<u8>,
    sector_size_shift: u8,
    files: Vec<FixtureFile>,
    /// Hash entries pointing at arbitrary block indices, for
    /// dangling-reference tests
    dangling: Vec<(String, u32)>,
}

impl Default for FixtureArchive {
    fn default() -> Self {
        Self::new()
    }
}

impl FixtureArchive {
    /// Start an empty fixture with the sector size replays use.
    pub fn new() -> Self {
        Self {
            user_data: Vec::new(),
            sector_size_shift: 3,
            files: Vec::new(),
            dangling: Vec::new(),
        }
    }

    /// Set the user header payload.
    #[must_use]
    pub fn with_user_data(mut self, data: &[u8]) -> Self {
        self.user_data = data.to_vec();
        self
    }

    /// Override the sector size exponent.
    #[must_use]
    pub fn with_sector_size_shift(mut self, shift: u8) -> Self {
        self.sector_size_shift = shift;
        self
    }

    /// Add a single-unit file stored without compression.
    #[must_use]
    pub fn with_stored_file(mut self, name: &str, content: &[u8]) -> Self {
        self.files.push(FixtureFile {
            name: name.to_string(),
            raw: content.to_vec(),
            file_size: content.len() as u32,
            flags: BlockEntry::FLAG_EXISTS | BlockEntry::FLAG_SINGLE_UNIT,
        });
        self
    }

    /// Add a bzip2-compressed single-unit file.
    #[must_use]
    pub fn with_compressed_file(mut self, name: &str, content: &[u8]) -> Self {
        self.files.push(FixtureFile {
            name: name.to_string(),
            raw: compress_span(content),
            file_size: content.len() as u32,
            flags: BlockEntry::FLAG_EXISTS
                | BlockEntry::FLAG_SINGLE_UNIT
                | BlockEntry::FLAG_COMPRESS,
        });
        self
    }

    /// Add a multi-sector bzip2-compressed file.
    ///
    /// Content should be larger than one sector and compressible, as
    /// real replay members are.
    #[must_use]
    pub fn with_sectored_file(mut self, name: &str, content: &[u8]) -> Self {
        let sector_size = 512u32 << self.sector_size_shift;
        self.files.push(FixtureFile {
            name: name.to_string(),
            raw: sectored_payload(content, sector_size, false),
            file_size: content.len() as u32,
            flags: BlockEntry::FLAG_EXISTS | BlockEntry::FLAG_COMPRESS,
        });
        self
    }

    /// Add a multi-sector file carrying a trailing checksum sector.
    #[must_use]
    pub fn with_checksummed_file(mut self, name: &str, content: &[u8]) -> Self {
        let sector_size = 512u32 << self.sector_size_shift;
        self.files.push(FixtureFile {
            name: name.to_string(),
            raw: sectored_payload(content, sector_size, true),
            file_size: content.len() as u32,
            flags: BlockEntry::FLAG_EXISTS
                | BlockEntry::FLAG_COMPRESS
                | BlockEntry::FLAG_SECTOR_CRC,
        });
        self
    }

    /// Add a file flagged encrypted. Its payload is junk; readers are
    /// expected to refuse it before touching the data.
    #[must_use]
    pub fn with_encrypted_file(mut self, name: &str) -> Self {
        self.files.push(FixtureFile {
            name: name.to_string(),
            raw: vec![0xA5; 16],
            file_size: 16,
            flags: BlockEntry::FLAG_EXISTS
                | BlockEntry::FLAG_SINGLE_UNIT
                | BlockEntry::FLAG_ENCRYPTED,
        });
        self
    }

    /// Add a hash entry whose block index points nowhere, for
    /// dangling-reference tests.
    #[must_use]
    pub fn with_dangling_entry(mut self, name: &str, block_index: u32) -> Self {
        self.dangling.push((name.to_string(), block_index));
        self
    }

    /// Add a file with caller-controlled raw bytes, logical size, and
    /// flags, for malformed-input tests.
    #[must_use]
    pub fn with_prebuilt_file(
        mut self,
        name: &str,
        raw: &[u8],
        file_size: u32,
        flags: u32,
    ) -> Self {
        self.files.push(FixtureFile {
            name: name.to_string(),
            raw: raw.to_vec(),
            file_size,
            flags,
        });
        self
    }

    /// Emit the archive bytes.
    pub fn build(&self) -> Vec<u8> {
        // File payloads sit directly after the archive header.
        let mut file_data = Vec::new();
        let mut block_records = Vec::with_capacity(self.files.len());
        for file in &self.files {
            block_records.push((
                ARCHIVE_HEADER_SIZE + file_data.len() as u32,
                file.raw.len() as u32,
                file.file_size,
                file.flags,
            ));
            file_data.extend_from_slice(&file.raw);
        }

        // Place hash entries the way real writers do, by offset hash
        // with forward probing; the reader's linear scan finds them
        // regardless.
        let named: Vec<(String, u32)> = self
            .files
            .iter()
            .enumerate()
            .map(|(i, f)| (f.name.clone(), i as u32))
            .chain(self.dangling.iter().cloned())
            .collect();

        let hash_count = (named.len().max(1) * 2).next_power_of_two() as u32;
        let mut slots: Vec<Option<(u32, u32, u32)>> = vec![None; hash_count as usize];
        for (name, block_index) in &named {
            let hash_a = hash_string(name, hash_type::NAME_A);
            let hash_b = hash_string(name, hash_type::NAME_B);
            let mut slot =
                (hash_string(name, hash_type::TABLE_OFFSET) & (hash_count - 1)) as usize;
            while slots[slot].is_some() {
                slot = (slot + 1) % hash_count as usize;
            }
            slots[slot] = Some((hash_a, hash_b, *block_index));
        }

        let mut hash_bytes = Vec::with_capacity(slots.len() * 16);
        for slot in &slots {
            match slot {
                Some((hash_a, hash_b, block_index)) => {
                    hash_bytes.extend_from_slice(&hash_a.to_le_bytes());
                    hash_bytes.extend_from_slice(&hash_b.to_le_bytes());
                    hash_bytes.extend_from_slice(&0u16.to_le_bytes()); // locale
                    hash_bytes.extend_from_slice(&0u16.to_le_bytes()); // platform
                    hash_bytes.extend_from_slice(&block_index.to_le_bytes());
                }
                None => hash_bytes.extend_from_slice(&[0xFF; 16]),
            }
        }
        encrypt_table_bytes(&mut hash_bytes, hash_string("(hash table)", hash_type::FILE_KEY));

        let mut block_bytes = Vec::with_capacity(block_records.len() * 16);
        for (offset, archived, size, flags) in &block_records {
            block_bytes.extend_from_slice(&offset.to_le_bytes());
            block_bytes.extend_from_slice(&archived.to_le_bytes());
            block_bytes.extend_from_slice(&size.to_le_bytes());
            block_bytes.extend_from_slice(&flags.to_le_bytes());
        }
        encrypt_table_bytes(
            &mut block_bytes,
            hash_string("(block table)", hash_type::FILE_KEY),
        );

        let hash_table_offset = ARCHIVE_HEADER_SIZE + file_data.len() as u32;
        let block_table_offset = hash_table_offset + hash_bytes.len() as u32;
        let archive_size = block_table_offset + block_bytes.len() as u32;
        let archive_offset = 16 + self.user_data.len() as u32;

        let mut out = Vec::new();

        // User header
        out.extend_from_slice(b"MPQ\x1B");
        out.extend_from_slice(&(self.user_data.len() as u32).to_le_bytes());
        out.extend_from_slice(&archive_offset.to_le_bytes());
        out.extend_from_slice(&(self.user_data.len() as u32).to_le_bytes());
        out.extend_from_slice(&self.user_data);

        // Archive header
        out.extend_from_slice(b"MPQ\x1A");
        out.extend_from_slice(&ARCHIVE_HEADER_SIZE.to_le_bytes());
        out.extend_from_slice(&archive_size.to_le_bytes());
        out.extend_from_slice(&1u16.to_le_bytes()); // format_version
        out.push(self.sector_size_shift);
        out.push(0); // reserved
        out.extend_from_slice(&hash_table_offset.to_le_bytes());
        out.extend_from_slice(&block_table_offset.to_le_bytes());
        out.extend_from_slice(&hash_count.to_le_bytes());
        out.extend_from_slice(&(block_records.len() as u32).to_le_bytes());
        out.extend_from_slice(&0u64.to_le_bytes()); // extended block table
        out.extend_from_slice(&0u16.to_le_bytes()); // hash offset high
        out.extend_from_slice(&0u16.to_le_bytes()); // block offset high

        out.extend_from_slice(&file_data);
        out.extend_from_slice(&hash_bytes);
        out.extend_from_slice(&block_bytes);
        out
    }
}

/// Compress one span: method byte, then the bzip2 stream.
fn compress_span(content: &[u8]) -> Vec<u8> {
    let mut encoder = BzEncoder::new(vec![crate::compression::BZIP2], Compression::default());
    encoder
        .write_all(content)
        .expect("bzip2 into memory cannot fail");
    encoder.finish().expect("bzip2 into memory cannot fail")
}

/// Build a sectored payload: boundary table followed by compressed
/// spans, mirroring the reader's tolerant span count (phantom spans are
/// empty) and appending a junk checksum span when asked.
fn sectored_payload(content: &[u8], sector_size: u32, with_crc: bool) -> Vec<u8> {
    let file_size = content.len() as u32;
    let mut spans: Vec<Vec<u8>> = content
        .chunks(sector_size as usize)
        .map(compress_span)
        .collect();

    let data_span_count = (file_size / sector_size + 1) as usize;
    while spans.len() < data_span_count {
        spans.push(Vec::new());
    }
    if with_crc {
        spans.push(vec![0u8; 4 * data_span_count]);
    }

    let mut payload = Vec::new();
    let mut offset = ((spans.len() + 1) * 4) as u32;
    payload.extend_from_slice(&offset.to_le_bytes());
    for span in &spans {
        offset += span.len() as u32;
        payload.extend_from_slice(&offset.to_le_bytes());
    }
    for span in &spans {
        payload.extend_from_slice(span);
    }
    payload
}

fn encrypt_table_bytes(data: &mut [u8], key: u32) {
    let mut words = vec![0u32; data.len() / 4];
    LittleEndian::read_u32_into(data, &mut words);
    encrypt_block(&mut words, key);
    LittleEndian::write_u32_into(&words, data);
}
