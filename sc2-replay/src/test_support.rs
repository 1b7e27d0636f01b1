//! Builders assembling synthetic member payloads for unit tests

/// Encode one signed variable-length integer.
pub(crate) fn vlq(value: i64) -> Vec<u8> {
    let mut assembled = (value.unsigned_abs() << 1) | u64::from(value < 0);
    let mut out = Vec::new();
    loop {
        let group = (assembled & 0x7F) as u8;
        assembled >>= 7;
        if assembled == 0 {
            out.push(group);
            break;
        }
        out.push(group | 0x80);
    }
    out
}

pub(crate) fn string(text: &[u8]) -> Vec<u8> {
    let mut out = vec![0x02];
    out.extend(vlq(text.len() as i64));
    out.extend_from_slice(text);
    out
}

pub(crate) fn seq(elements: &[Vec<u8>]) -> Vec<u8> {
    let mut out = vec![0x04, 0x00, 0x01];
    out.extend(vlq(elements.len() as i64));
    for element in elements {
        out.extend_from_slice(element);
    }
    out
}

pub(crate) fn map(entries: &[(i64, Vec<u8>)]) -> Vec<u8> {
    let mut out = vec![0x05];
    out.extend(vlq(entries.len() as i64));
    for (key, value) in entries {
        out.extend(vlq(*key));
        out.extend_from_slice(value);
    }
    out
}

pub(crate) fn int(value: i64) -> Vec<u8> {
    let mut out = vec![0x09];
    out.extend(vlq(value));
    out
}

/// Tick value the details member would carry for a Unix timestamp.
pub(crate) fn filetime_for(unix_seconds: i64) -> i64 {
    unix_seconds * 10_000_000 + 116_444_735_995_904_000
}

/// A details member with the given `(name, outcome)` roster.
pub(crate) fn details_member(players: &[(&str, i64)], map_name: &str, filetime: i64) -> Vec<u8> {
    let roster: Vec<Vec<u8>> = players
        .iter()
        .map(|(name, outcome)| {
            map(&[
                (0, string(name.as_bytes())),
                (2, string(b"race text")),
                (8, int(*outcome)),
            ])
        })
        .collect();

    map(&[
        (0, seq(&roster)),
        (1, string(map_name.as_bytes())),
        (5, int(filetime)),
    ])
}

/// One 13-byte attribute record with the value code laid out reversed,
/// as on the wire.
pub(crate) fn attribute_record(namespace: u32, id: u32, slot: u8, code: &str) -> Vec<u8> {
    let mut value = [0u8; 4];
    value[..code.len()].copy_from_slice(code.as_bytes());
    value.reverse();

    let mut out = Vec::with_capacity(13);
    out.extend_from_slice(&namespace.to_le_bytes());
    out.extend_from_slice(&id.to_le_bytes());
    out.push(slot);
    out.extend_from_slice(&value);
    out
}

/// An attributes member for the given writing build.
pub(crate) fn attributes_member(build: u32, records: &[Vec<u8>]) -> Vec<u8> {
    let skip = if build >= 17326 { 5 } else { 4 };
    let mut out = vec![0u8; skip];
    out.extend_from_slice(&(records.len() as u32).to_le_bytes());
    for record in records {
        out.extend_from_slice(record);
    }
    out
}

/// An initData member; when `realm` is given a single cache handle is
/// appended after the account block.
pub(crate) fn init_data_member(names: &[&str], realm: Option<&str>) -> Vec<u8> {
    let mut out = vec![names.len() as u8];
    for name in names {
        out.push(name.len() as u8);
        out.extend_from_slice(name.as_bytes());
        out.extend_from_slice(&[0u8; 5]);
    }
    out.extend_from_slice(&[0u8; 24]);

    let account = b"host";
    out.push(account.len() as u8);
    out.extend_from_slice(account);

    if let Some(code) = realm {
        out.extend_from_slice(&[0xAB, 0xCD]);
        out.extend_from_slice(b"s2ma");
        out.extend_from_slice(&[0x00, 0x00]);
        out.extend_from_slice(code.as_bytes());
    }
    out
}
