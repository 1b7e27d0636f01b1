//! Malformed archives must fail loudly at open or extraction

use crate::common::compressible_text;
use sc2_mpq::test_utils::FixtureArchive;
use sc2_mpq::{Archive, BlockEntry, Error};
use std::io::Cursor;

#[test]
fn wrong_user_magic_is_rejected() {
    let mut bytes = FixtureArchive::new()
        .with_stored_file("replay.details", b"x")
        .build();
    bytes[0] = b'X';

    let err = Archive::new(Cursor::new(bytes)).unwrap_err();
    assert!(matches!(err, Error::InvalidFormat(_)));
}

#[test]
fn wrong_archive_magic_is_rejected() {
    let mut bytes = FixtureArchive::new()
        .with_user_data(b"pad")
        .with_stored_file("replay.details", b"x")
        .build();
    // Archive header starts right after the 16-byte fixed part plus the
    // 3-byte payload.
    bytes[19] += 1;

    let err = Archive::new(Cursor::new(bytes)).unwrap_err();
    assert!(matches!(err, Error::InvalidFormat(_)));
}

#[test]
fn truncated_stream_fails_at_open() {
    let bytes = FixtureArchive::new()
        .with_sectored_file("replay.details", &compressible_text(9_000))
        .build();

    // Cut the stream in the middle of the tables.
    let cut = bytes.len() - 24;
    let err = Archive::new(Cursor::new(bytes[..cut].to_vec())).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn empty_stream_fails_at_open() {
    let err = Archive::new(Cursor::new(Vec::new())).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn short_sector_boundary_table_is_rejected() {
    // Multi-sector file whose raw block cannot even hold its boundary
    // table.
    let bytes = FixtureArchive::new()
        .with_prebuilt_file(
            "replay.broken",
            &[0x08, 0x00],
            9_000,
            BlockEntry::FLAG_EXISTS | BlockEntry::FLAG_COMPRESS,
        )
        .build();

    let mut archive = Archive::new(Cursor::new(bytes)).unwrap();
    let err = archive.read_file("replay.broken").unwrap_err();
    assert!(matches!(err, Error::InvalidFormat(_)));
}

#[test]
fn out_of_bounds_sector_span_is_rejected() {
    // Boundary table claims a span far beyond the raw block.
    let mut raw = Vec::new();
    raw.extend_from_slice(&12u32.to_le_bytes());
    raw.extend_from_slice(&400u32.to_le_bytes());
    raw.extend_from_slice(&800u32.to_le_bytes());
    raw.extend_from_slice(&[0x55; 8]);

    let bytes = FixtureArchive::new()
        .with_prebuilt_file(
            "replay.broken",
            &raw,
            5_000, // 5000 / 4096 + 1 = 2 spans, 3 boundaries
            BlockEntry::FLAG_EXISTS | BlockEntry::FLAG_COMPRESS,
        )
        .build();

    let mut archive = Archive::new(Cursor::new(bytes)).unwrap();
    let err = archive.read_file("replay.broken").unwrap_err();
    assert!(matches!(err, Error::InvalidFormat(_)));
}

#[test]
fn corrupt_bzip2_stream_is_an_error() {
    // Valid method byte, garbage stream.
    let raw = [0x10, b'n', b'o', b't', b'b', b'z'];
    let bytes = FixtureArchive::new()
        .with_prebuilt_file(
            "replay.broken",
            &raw,
            64,
            BlockEntry::FLAG_EXISTS | BlockEntry::FLAG_SINGLE_UNIT | BlockEntry::FLAG_COMPRESS,
        )
        .build();

    let mut archive = Archive::new(Cursor::new(bytes)).unwrap();
    let err = archive.read_file("replay.broken").unwrap_err();
    assert!(matches!(err, Error::Compression(_)));
}

#[test]
fn dangling_block_index_is_absent() {
    // A hash table slot pointing past the block table behaves as an
    // absent file, not a panic or an error.
    let bytes = FixtureArchive::new()
        .with_stored_file("replay.details", b"x")
        .with_dangling_entry("replay.ghost", 999)
        .build();

    let mut archive = Archive::new(Cursor::new(bytes)).unwrap();
    assert_eq!(
        archive.read_file("replay.ghost").unwrap(),
        sc2_mpq::Extraction::Absent
    );
    // The intact member still extracts.
    assert!(archive.read_file("replay.details").unwrap().data().is_some());
}
