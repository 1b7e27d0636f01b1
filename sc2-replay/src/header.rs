//! The protocol header carried in the archive's user data
//!
//! Replay archives front-load a small serialized map before the
//! container proper. It is readable without touching the hash or block
//! tables and carries the two facts everything else keys off: the game
//! version that wrote the file and the match length in frames.

use std::fmt;
use std::time::Duration;

use sc2_sdata::{Value, decode};

use crate::{Error, Result};

/// Presentation rate the game records frames at.
pub const FRAMES_PER_SECOND: u32 = 16;

/// One frame is 1/16 s.
const NANOS_PER_FRAME: u64 = 1_000_000_000 / FRAMES_PER_SECOND as u64;

/// The four version numbers the game shows in its menus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameVersion {
    /// Major release
    pub major: u32,
    /// Minor release
    pub minor: u32,
    /// Patch level
    pub patch: u32,
    /// Build number; format changes key off this, not the dotted triple
    pub build: u32,
}

impl fmt::Display for GameVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}.{}",
            self.major, self.minor, self.patch, self.build
        )
    }
}

/// Decoded protocol header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplayHeader {
    /// Version of the game that wrote the replay
    pub version: GameVersion,
    /// Match length in frames
    pub game_loops: u64,
}

impl ReplayHeader {
    /// Decode the user-data payload of a replay archive.
    pub fn parse(data: &[u8]) -> Result<Self> {
        let value = decode(data)?;

        let version_fields = value
            .field(1)
            .ok_or_else(|| Error::malformed("protocol header has no version sequence"))?;
        let version = GameVersion {
            major: version_number(version_fields, 1, "major version")?,
            minor: version_number(version_fields, 2, "minor version")?,
            patch: version_number(version_fields, 3, "patch level")?,
            build: version_number(version_fields, 4, "build number")?,
        };

        let frames = value
            .field(3)
            .and_then(Value::as_int)
            .ok_or_else(|| Error::malformed("protocol header has no frame count"))?;
        let game_loops = u64::try_from(frames)
            .map_err(|_| Error::malformed(format!("negative frame count {frames}")))?;

        Ok(ReplayHeader {
            version,
            game_loops,
        })
    }

    /// Wall-clock length of the match at normal presentation rate.
    pub fn game_length(&self) -> Duration {
        Duration::from_nanos(self.game_loops.saturating_mul(NANOS_PER_FRAME))
    }
}

fn version_number(fields: &Value, index: usize, what: &str) -> Result<u32> {
    let number = fields
        .get(index)
        .and_then(Value::as_int)
        .ok_or_else(|| Error::malformed(format!("protocol header has no {what}")))?;
    u32::try_from(number).map_err(|_| Error::malformed(format!("{what} {number} out of range")))
}
