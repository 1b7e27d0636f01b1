//! The attributes member: lobby settings as id/slot/code records

use bytes::Buf;
use log::debug;

use crate::{Error, Result};

/// Attribute ids this library interprets.
///
/// The member carries many more; unrecognized ids pass through in
/// [`AttributeEvent`] untouched.
pub mod attribute_id {
    /// Occupant of the slot, human or computer
    pub const PLAYER_TYPE: u32 = 0x01F4;
    /// Team arrangement of the match
    pub const GAME_TYPE: u32 = 0x07D1;
    /// Lobby speed setting
    pub const GAME_SPEED: u32 = 0x0BB8;
    /// Race picked in the lobby
    pub const RACE: u32 = 0x0BB9;
    /// Color assigned to the slot
    pub const COLOR: u32 = 0x0BBA;
    /// How the match was arranged
    pub const CATEGORY: u32 = 0x0BC1;
}

/// First build whose attribute header grew to five bytes.
const WIDE_HEADER_BUILD: u32 = 17326;

/// Fixed wire size of one attribute record.
const RECORD_SIZE: usize = 13;

/// One record from the attributes member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeEvent {
    /// Namespace the id lives in
    pub namespace: u32,
    /// Which setting this record carries; see [`attribute_id`]
    pub id: u32,
    /// One-based player slot; global settings use a slot past the roster
    pub slot: u8,
    /// Value code, byte-reversed from the wire and NUL-trimmed
    pub code: String,
}

/// First record carrying `id`, regardless of slot.
pub fn find_by_id(events: &[AttributeEvent], id: u32) -> Option<&AttributeEvent> {
    events.iter().find(|event| event.id == id)
}

/// Parse the attributes member.
///
/// The leading skip depends on the build that wrote the replay, which
/// callers take from the protocol header. Records are fixed-width:
/// namespace, id, slot, then four value bytes stored reversed.
pub fn parse_attributes(data: &[u8], build: u32) -> Result<Vec<AttributeEvent>> {
    let skip = if build >= WIDE_HEADER_BUILD { 5 } else { 4 };
    if data.len() < skip + 4 {
        return Err(Error::malformed(format!(
            "attributes member of {} bytes has no room for its header",
            data.len()
        )));
    }

    let mut buf = &data[skip..];
    let count = buf.get_u32_le() as usize;

    let body = count
        .checked_mul(RECORD_SIZE)
        .ok_or_else(|| Error::malformed(format!("attribute count {count} overflows")))?;
    if buf.remaining() < body {
        return Err(Error::malformed(format!(
            "attributes member declares {count} records but holds {} more bytes",
            buf.remaining()
        )));
    }

    let mut events = Vec::with_capacity(count);
    for _ in 0..count {
        let namespace = buf.get_u32_le();
        let id = buf.get_u32_le();
        let slot = buf.get_u8();

        let mut raw = [0u8; 4];
        buf.copy_to_slice(&mut raw);
        raw.reverse();
        let code = String::from_utf8_lossy(&raw)
            .trim_matches('\0')
            .to_string();

        events.push(AttributeEvent {
            namespace,
            id,
            slot,
            code,
        });
    }

    debug!("attributes member: {} records", events.len());
    Ok(events)
}
