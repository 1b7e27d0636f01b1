//! `(listfile)` manifest behavior

use pretty_assertions::assert_eq;
use sc2_mpq::test_utils::FixtureArchive;
use sc2_mpq::{Archive, Extraction};
use std::io::Cursor;

const MANIFEST: &[u8] =
    b"replay.attributes.events\r\nreplay.details\r\nreplay.game.events\r\nreplay.initData\r\n";

#[test]
fn listfile_contents_name_the_members() {
    let bytes = FixtureArchive::new()
        .with_compressed_file("(listfile)", MANIFEST)
        .with_stored_file("replay.details", b"details bytes")
        .build();

    let mut archive = Archive::new(Cursor::new(bytes)).unwrap();
    let extraction = archive.read_file("(listfile)").unwrap();
    let data = extraction.data().unwrap();

    assert!(!data.is_empty());
    let text = String::from_utf8_lossy(data);
    assert!(text.contains("replay.details"));
}

#[test]
fn list_parses_the_manifest() {
    let bytes = FixtureArchive::new()
        .with_compressed_file("(listfile)", MANIFEST)
        .build();

    let mut archive = Archive::new(Cursor::new(bytes)).unwrap();
    let names = archive.list().unwrap().unwrap();
    assert_eq!(
        names,
        vec![
            "replay.attributes.events",
            "replay.details",
            "replay.game.events",
            "replay.initData"
        ]
    );
}

#[test]
fn archive_without_manifest_lists_none() {
    let bytes = FixtureArchive::new()
        .with_stored_file("replay.details", b"x")
        .build();

    let mut archive = Archive::new(Cursor::new(bytes)).unwrap();
    assert!(archive.list().unwrap().is_none());
    assert_eq!(
        archive.read_file("(listfile)").unwrap(),
        Extraction::Absent
    );
}
