//! # sc2_replay - Replay Metadata Reader
//!
//! Opens a `.SC2Replay` archive and answers the questions people
//! actually ask of one: who played, what race and color, who won, on
//! which map, how long, at what speed, and where it was played.
//!
//! The container work happens in `sc2-mpq` and the serialized sections
//! decode through `sc2-sdata`; this crate extracts the standard member
//! files and turns them into typed facts.
//!
//! ## Examples
//!
//! ```no_run
//! use sc2_replay::Replay;
//!
//! # fn main() -> Result<(), sc2_replay::Error> {
//! let mut replay = Replay::open("ladder.SC2Replay")?;
//!
//! let details = replay.details()?;
//! println!("{} ({:?})", details.map_name, replay.game_length()?);
//!
//! for player in replay.players()? {
//!     println!("{} {:?} {}", player.name, player.race, player.outcome);
//! }
//! # Ok(())
//! # }
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]

pub mod attributes;
pub mod details;
pub mod error;
pub mod header;
pub mod init_data;
pub mod types;

#[cfg(test)]
pub(crate) mod test_support;

use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;
use std::time::Duration;

use log::debug;
use sc2_mpq::{Archive, Extraction};

// Re-export commonly used types
pub use attributes::{AttributeEvent, attribute_id, parse_attributes};
pub use details::{DetailPlayer, Details};
pub use error::{Error, Result};
pub use header::{FRAMES_PER_SECOND, GameVersion, ReplayHeader};
pub use init_data::InitData;
pub use types::{Category, GameSpeed, GameType, Outcome, PlayerKind, Race, TeamColor};

/// Standard member files of a replay archive.
pub mod member {
    /// Roster, map name, start time
    pub const DETAILS: &str = "replay.details";
    /// Lobby attribute records
    pub const ATTRIBUTES: &str = "replay.attributes.events";
    /// Lobby state; the realm is only recorded here
    pub const INIT_DATA: &str = "replay.initData";
}

/// One player with details and attributes joined.
///
/// The typed fields stay `None` when the matching attribute record is
/// absent or carries a code this library has no name for; partial
/// replays still yield a roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// Name from the details roster
    pub name: String,
    /// Result from the details roster
    pub outcome: Outcome,
    /// Human or computer
    pub kind: Option<PlayerKind>,
    /// Race picked in the lobby
    pub race: Option<Race>,
    /// Color assigned to the slot
    pub color: Option<TeamColor>,
}

/// An opened replay.
///
/// Accessors extract and decode the member files they need on each
/// call; the archive tables themselves are parsed once at open.
#[derive(Debug)]
pub struct Replay<R> {
    archive: Archive<R>,
}

impl Replay<BufReader<File>> {
    /// Open a replay file from disk.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Replay {
            archive: Archive::open(path)?,
        })
    }
}

impl<R: Read + Seek> Replay<R> {
    /// Read a replay from any seekable byte stream.
    pub fn new(reader: R) -> Result<Self> {
        Ok(Replay {
            archive: Archive::new(reader)?,
        })
    }

    /// The underlying archive, for members this crate does not model.
    pub fn archive_mut(&mut self) -> &mut Archive<R> {
        &mut self.archive
    }

    /// Protocol header from the archive's user data.
    pub fn header(&self) -> Result<ReplayHeader> {
        ReplayHeader::parse(self.archive.user_data())
    }

    /// Version of the game that recorded this replay.
    pub fn game_version(&self) -> Result<GameVersion> {
        Ok(self.header()?.version)
    }

    /// Match length at normal presentation rate.
    pub fn game_length(&self) -> Result<Duration> {
        Ok(self.header()?.game_length())
    }

    /// Roster, map name, and start moment from `replay.details`.
    pub fn details(&mut self) -> Result<Details> {
        let data = self.read_member(member::DETAILS)?;
        Details::parse(&data)
    }

    /// All records from `replay.attributes.events`.
    pub fn attributes(&mut self) -> Result<Vec<AttributeEvent>> {
        let build = self.header()?.version.build;
        let data = self.read_member(member::ATTRIBUTES)?;
        parse_attributes(&data, build)
    }

    /// Lobby names and realm from `replay.initData`.
    pub fn init_data(&mut self) -> Result<InitData> {
        let data = self.read_member(member::INIT_DATA)?;
        InitData::parse(&data)
    }

    /// Region code the match was played on, such as `EU` or `US`.
    pub fn realm(&mut self) -> Result<Option<String>> {
        Ok(self.init_data()?.realm)
    }

    /// Roster with race, color, and player kind joined in from the
    /// attribute records.
    pub fn players(&mut self) -> Result<Vec<Player>> {
        let details = self.details()?;
        let events = self.attributes()?;

        let mut players: Vec<Player> = details
            .players
            .into_iter()
            .map(|entry| Player {
                name: entry.name,
                outcome: entry.outcome,
                kind: None,
                race: None,
                color: None,
            })
            .collect();

        for event in &events {
            // Slots are one-based; global records point past the roster
            // and fall out of the bounds check.
            let Some(index) = (event.slot as usize).checked_sub(1) else {
                continue;
            };
            let Some(player) = players.get_mut(index) else {
                continue;
            };

            match event.id {
                attribute_id::PLAYER_TYPE => {
                    player.kind = decode_or_log("player type", event, PlayerKind::from_code);
                }
                attribute_id::RACE => {
                    player.race = decode_or_log("race", event, Race::from_code);
                }
                attribute_id::COLOR => {
                    player.color = decode_or_log("color", event, TeamColor::from_code);
                }
                _ => {}
            }
        }

        Ok(players)
    }

    /// Lobby speed setting, when the attributes record one.
    pub fn game_speed(&mut self) -> Result<Option<GameSpeed>> {
        self.global_code(attribute_id::GAME_SPEED, "game speed", GameSpeed::from_code)
    }

    /// Team arrangement, when the attributes record one.
    pub fn game_type(&mut self) -> Result<Option<GameType>> {
        self.global_code(attribute_id::GAME_TYPE, "game type", GameType::from_code)
    }

    /// Match arrangement category, when the attributes record one.
    pub fn category(&mut self) -> Result<Option<Category>> {
        self.global_code(attribute_id::CATEGORY, "category", Category::from_code)
    }

    /// A lobby-global attribute: absent is `None`, present with an
    /// unrecognized code is an error.
    fn global_code<T>(
        &mut self,
        id: u32,
        kind: &'static str,
        parse: impl Fn(&str) -> Option<T>,
    ) -> Result<Option<T>> {
        let events = self.attributes()?;
        let Some(event) = attributes::find_by_id(&events, id) else {
            return Ok(None);
        };

        match parse(&event.code) {
            Some(value) => Ok(Some(value)),
            None => Err(Error::UnknownCode {
                kind,
                code: event.code.clone(),
            }),
        }
    }

    fn read_member(&mut self, name: &str) -> Result<Vec<u8>> {
        match self.archive.read_file(name)? {
            Extraction::Data(data) => Ok(data),
            Extraction::Absent => Err(Error::missing(name)),
            Extraction::Encrypted => Err(Error::malformed(format!(
                "member {name} is stored encrypted"
            ))),
        }
    }
}

fn decode_or_log<T>(
    kind: &str,
    event: &AttributeEvent,
    parse: impl Fn(&str) -> Option<T>,
) -> Option<T> {
    let parsed = parse(&event.code);
    if parsed.is_none() {
        debug!(
            "slot {}: unrecognized {kind} code {:?}",
            event.slot, event.code
        );
    }
    parsed
}
