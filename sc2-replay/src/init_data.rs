//! The initData member: lobby names and the hosting realm
//!
//! Almost everything in this member is opaque or better sourced from
//! the details and attributes members. Two things are only here: the
//! raw lobby name list and the region code buried in the map cache
//! handles.

use crate::{Error, Result};

/// Marker in front of each map cache handle.
const CACHE_HANDLE_MAGIC: &[u8] = b"s2ma";

/// Extracted initData fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitData {
    /// Lobby name per slot; open slots carry empty names
    pub player_names: Vec<String>,
    /// Two-letter region code from the first cache handle
    pub realm: Option<String>,
}

impl InitData {
    /// Decode the payload of `replay.initData`.
    pub fn parse(data: &[u8]) -> Result<Self> {
        let mut input = data;

        let slots = take(&mut input, 1, "slot count")?[0];
        let mut player_names = Vec::with_capacity(slots as usize);
        for _ in 0..slots {
            let length = take(&mut input, 1, "name length")?[0] as usize;
            let name = take(&mut input, length, "player name")?;
            take(&mut input, 5, "per-slot fields")?;
            player_names.push(String::from_utf8_lossy(name).into_owned());
        }

        // An opaque block, then the host account name, precede the
        // cache handles the realm is read from.
        take(&mut input, 24, "lobby fields")?;
        let account_length = take(&mut input, 1, "account length")?[0] as usize;
        take(&mut input, account_length, "account name")?;

        Ok(InitData {
            player_names,
            realm: find_realm(input),
        })
    }
}

/// Region code from the first `s2ma` cache handle: four magic bytes,
/// two framing bytes, then two uppercase ASCII letters.
fn find_realm(rest: &[u8]) -> Option<String> {
    let magic = rest
        .windows(CACHE_HANDLE_MAGIC.len())
        .position(|window| window == CACHE_HANDLE_MAGIC)?;
    let code_start = magic + CACHE_HANDLE_MAGIC.len() + 2;
    let code = rest.get(code_start..code_start + 2)?;

    if !code.iter().all(u8::is_ascii_alphanumeric) {
        return None;
    }
    Some(String::from_utf8_lossy(code).into_owned())
}

fn take<'a>(input: &mut &'a [u8], count: usize, what: &str) -> Result<&'a [u8]> {
    if input.len() < count {
        return Err(Error::malformed(format!(
            "initData ended inside {what}"
        )));
    }
    let (head, tail) = input.split_at(count);
    *input = tail;
    Ok(head)
}
