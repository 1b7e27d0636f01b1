//! File extraction across storage modes

use crate::common::{compressible_text, write_temp_archive};
use pretty_assertions::assert_eq;
use sc2_mpq::test_utils::FixtureArchive;
use sc2_mpq::{Archive, BlockEntry, Extraction};
use std::io::Cursor;

#[test]
fn extracts_stored_single_unit() {
    let bytes = FixtureArchive::new()
        .with_stored_file("replay.message.events", b"gg")
        .build();

    let mut archive = Archive::new(Cursor::new(bytes)).unwrap();
    let data = archive
        .read_file("replay.message.events")
        .unwrap()
        .into_data()
        .unwrap();
    assert_eq!(data, b"gg");
}

#[test]
fn extracts_compressed_single_unit() {
    let content = compressible_text(900);
    let bytes = FixtureArchive::new()
        .with_compressed_file("replay.details", &content)
        .build();

    let mut archive = Archive::new(Cursor::new(bytes)).unwrap();
    let data = archive
        .read_file("replay.details")
        .unwrap()
        .into_data()
        .unwrap();
    assert_eq!(data, content);
}

#[test]
fn reassembles_multi_sector_file() {
    // Three full sectors plus change at the default 4096-byte sector.
    let content = compressible_text(13_000);
    let bytes = FixtureArchive::new()
        .with_sectored_file("replay.game.events", &content)
        .build();

    let mut archive = Archive::new(Cursor::new(bytes)).unwrap();
    let data = archive
        .read_file("replay.game.events")
        .unwrap()
        .into_data()
        .unwrap();
    assert_eq!(data.len(), content.len());
    assert_eq!(data, content);
}

#[test]
fn excludes_trailing_checksum_sector() {
    let content = compressible_text(9_500);
    let bytes = FixtureArchive::new()
        .with_checksummed_file("replay.sync.events", &content)
        .build();

    let mut archive = Archive::new(Cursor::new(bytes)).unwrap();
    let data = archive
        .read_file("replay.sync.events")
        .unwrap()
        .into_data()
        .unwrap();
    assert_eq!(data, content);
}

#[test]
fn sector_file_at_small_sector_size() {
    let content = compressible_text(2_000);
    let bytes = FixtureArchive::new()
        .with_sector_size_shift(0) // 512-byte sectors
        .with_sectored_file("replay.game.events", &content)
        .build();

    let mut archive = Archive::new(Cursor::new(bytes)).unwrap();
    assert_eq!(archive.sector_size(), 512);
    let data = archive
        .read_file("replay.game.events")
        .unwrap()
        .into_data()
        .unwrap();
    assert_eq!(data, content);
}

#[test]
fn absent_file_reports_absent() {
    let bytes = FixtureArchive::new()
        .with_stored_file("replay.details", b"x")
        .build();

    let mut archive = Archive::new(Cursor::new(bytes)).unwrap();
    assert_eq!(
        archive.read_file("replay.load.info").unwrap(),
        Extraction::Absent
    );
}

#[test]
fn encrypted_file_reports_encrypted() {
    let bytes = FixtureArchive::new()
        .with_encrypted_file("replay.secret")
        .build();

    let mut archive = Archive::new(Cursor::new(bytes)).unwrap();
    assert_eq!(
        archive.read_file("replay.secret").unwrap(),
        Extraction::Encrypted
    );
}

#[test]
fn zero_length_file_is_empty_data() {
    let bytes = FixtureArchive::new()
        .with_stored_file("replay.message.events", b"")
        .build();

    let mut archive = Archive::new(Cursor::new(bytes)).unwrap();
    assert_eq!(
        archive.read_file("replay.message.events").unwrap(),
        Extraction::Data(Vec::new())
    );
}

#[test]
fn unknown_compression_method_passes_through() {
    // 0x02 is the zlib tag in the wider format family; this reader only
    // expands bzip2 and must hand anything else back untouched.
    let raw = [0x02, 0xDE, 0xAD, 0xBE, 0xEF];
    let bytes = FixtureArchive::new()
        .with_prebuilt_file(
            "replay.odd",
            &raw,
            raw.len() as u32,
            BlockEntry::FLAG_EXISTS | BlockEntry::FLAG_SINGLE_UNIT | BlockEntry::FLAG_COMPRESS,
        )
        .build();

    let mut archive = Archive::new(Cursor::new(bytes)).unwrap();
    let data = archive.read_file("replay.odd").unwrap().into_data().unwrap();
    assert_eq!(data, raw);
}

#[test]
fn opens_from_disk() {
    let content = compressible_text(5_000);
    let bytes = FixtureArchive::new()
        .with_user_data(b"protocol header")
        .with_sectored_file("replay.details", &content)
        .build();
    let (_dir, path) = write_temp_archive(&bytes);

    let mut archive = Archive::open(&path).unwrap();
    assert_eq!(archive.user_data(), b"protocol header");
    let data = archive
        .read_file("replay.details")
        .unwrap()
        .into_data()
        .unwrap();
    assert_eq!(data, content);
}

#[test]
fn repeated_reads_are_identical() {
    let content = compressible_text(6_000);
    let bytes = FixtureArchive::new()
        .with_sectored_file("replay.details", &content)
        .build();

    let mut archive = Archive::new(Cursor::new(bytes.clone())).unwrap();
    let first = archive.read_file("replay.details").unwrap();
    let second = archive.read_file("replay.details").unwrap();
    assert_eq!(first, second);

    // A second open over the same bytes agrees as well.
    let mut again = Archive::new(Cursor::new(bytes)).unwrap();
    assert_eq!(again.read_file("replay.details").unwrap(), first);
}

#[test]
fn several_members_coexist() {
    let big = compressible_text(10_000);
    let bytes = FixtureArchive::new()
        .with_stored_file("replay.attributes.events", b"\x00\x00\x00\x00\x00")
        .with_compressed_file("replay.details", &compressible_text(700))
        .with_sectored_file("replay.game.events", &big)
        .build();

    let mut archive = Archive::new(Cursor::new(bytes)).unwrap();
    assert_eq!(
        archive
            .read_file("replay.attributes.events")
            .unwrap()
            .into_data()
            .unwrap(),
        b"\x00\x00\x00\x00\x00"
    );
    assert_eq!(
        archive
            .read_file("replay.details")
            .unwrap()
            .into_data()
            .unwrap(),
        compressible_text(700)
    );
    assert_eq!(
        archive
            .read_file("replay.game.events")
            .unwrap()
            .into_data()
            .unwrap(),
        big
    );
}
