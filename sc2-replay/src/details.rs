//! The details member: roster, map name, start moment

use chrono::{DateTime, Utc};
use log::debug;
use sc2_sdata::{Value, decode};

use crate::types::Outcome;
use crate::{Error, Result};

/// Tick offset the game uses between its FILETIME-style timestamps and
/// the Unix epoch. Not quite the textbook 1601 offset; this is the
/// constant the game itself writes against.
const FILETIME_UNIX_OFFSET: i64 = 116_444_735_995_904_000;

/// FILETIME ticks are 100 ns.
const TICKS_PER_SECOND: i64 = 10_000_000;

/// One roster entry from the details member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailPlayer {
    /// Name as shown in the lobby
    pub name: String,
    /// Result recorded for this player
    pub outcome: Outcome,
}

/// Decoded details member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Details {
    /// Roster in slot order
    pub players: Vec<DetailPlayer>,
    /// Map name, localized to the recording client
    pub map_name: String,
    /// Wall-clock moment the match started
    pub started_at: DateTime<Utc>,
}

impl Details {
    /// Decode the payload of `replay.details`.
    pub fn parse(data: &[u8]) -> Result<Self> {
        let value = decode(data)?;

        let players = value
            .field(0)
            .and_then(Value::as_seq)
            .ok_or_else(|| Error::malformed("details has no player list"))?
            .iter()
            .map(parse_player)
            .collect::<Result<Vec<_>>>()?;

        let map_name = string_field(&value, 1, "map name")?;

        let filetime = value
            .field(5)
            .and_then(Value::as_int)
            .ok_or_else(|| Error::malformed("details has no start timestamp"))?;
        let started_at = filetime_to_utc(filetime)?;

        Ok(Details {
            players,
            map_name,
            started_at,
        })
    }
}

fn parse_player(entry: &Value) -> Result<DetailPlayer> {
    let name = string_field(entry, 0, "player name")?;

    let outcome = match entry.field(8).and_then(Value::as_int) {
        Some(index) => Outcome::from_index(index),
        None => {
            debug!("player {name:?} carries no outcome field");
            Outcome::Unknown
        }
    };

    Ok(DetailPlayer { name, outcome })
}

/// Fetch a string field, replacing invalid UTF-8 rather than failing.
/// Names and map titles are user text from any locale.
fn string_field(value: &Value, key: i64, what: &str) -> Result<String> {
    let bytes = value
        .field(key)
        .and_then(Value::as_bytes)
        .ok_or_else(|| Error::malformed(format!("details has no {what}")))?;
    Ok(String::from_utf8_lossy(bytes).into_owned())
}

fn filetime_to_utc(filetime: i64) -> Result<DateTime<Utc>> {
    let out_of_range = || Error::malformed(format!("start timestamp {filetime} out of range"));

    let ticks = filetime
        .checked_sub(FILETIME_UNIX_OFFSET)
        .ok_or_else(out_of_range)?;
    let seconds = ticks.div_euclid(TICKS_PER_SECOND);
    let nanos = (ticks.rem_euclid(TICKS_PER_SECOND) * 100) as u32;

    DateTime::from_timestamp(seconds, nanos).ok_or_else(out_of_range)
}
