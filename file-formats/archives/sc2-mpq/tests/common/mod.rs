//! Common helpers for integration tests

#![allow(dead_code)]

use std::path::PathBuf;
use tempfile::TempDir;

/// Repetitive text of `size` bytes; compresses well, as replay member
/// payloads do.
pub fn compressible_text(size: usize) -> Vec<u8> {
    let pattern = b"player: ESCGoOdy, race: Terran, color: tc02, map: The Shattered Temple\n";
    let mut data = Vec::with_capacity(size);
    while data.len() < size {
        let take = (size - data.len()).min(pattern.len());
        data.extend_from_slice(&pattern[..take]);
    }
    data
}

/// Write archive bytes into a temp dir and hand back the live dir with
/// the file path. Dropping the dir deletes the file.
pub fn write_temp_archive(bytes: &[u8]) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let path = dir.path().join("fixture.SC2Replay");
    std::fs::write(&path, bytes).expect("failed to write fixture archive");
    (dir, path)
}
