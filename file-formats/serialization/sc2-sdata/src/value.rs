//! Decoded value tree

use std::collections::BTreeMap;

/// One decoded value.
///
/// Strings are kept as raw bytes: replay payloads mix UTF-8 player and
/// map names with binary identifiers in the same string slots, so the
/// decoder preserves what it read and [`Value::as_str`] is opt-in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Length-prefixed byte string
    Bytes(Vec<u8>),
    /// Ordered sequence of values
    Seq(Vec<Value>),
    /// Map from integer keys to values
    Map(BTreeMap<i64, Value>),
    /// Single unsigned byte
    U8(u8),
    /// Four-byte little-endian unsigned integer
    U32(u32),
    /// Signed variable-length integer
    Int(i64),
    /// Placeholder for a tag byte this decoder does not recognize
    Unknown(u8),
}

impl Value {
    /// Borrow the raw bytes of a string value.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Bytes(bytes) => Some(bytes),
            _ => None,
        }
    }

    /// View a string value as UTF-8, when it is valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Bytes(bytes) => std::str::from_utf8(bytes).ok(),
            _ => None,
        }
    }

    /// Widen any of the integer shapes to `i64`.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::U8(v) => Some(i64::from(*v)),
            Value::U32(v) => Some(i64::from(*v)),
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Borrow the elements of a sequence value.
    pub fn as_seq(&self) -> Option<&[Value]> {
        match self {
            Value::Seq(elements) => Some(elements),
            _ => None,
        }
    }

    /// Borrow the entries of a map value.
    pub fn as_map(&self) -> Option<&BTreeMap<i64, Value>> {
        match self {
            Value::Map(entries) => Some(entries),
            _ => None,
        }
    }

    /// Index into a sequence value.
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.as_seq()?.get(index)
    }

    /// Look up a key in a map value.
    pub fn field(&self, key: i64) -> Option<&Value> {
        self.as_map()?.get(&key)
    }

    /// Whether this value stands in for an unrecognized tag.
    pub fn is_unknown(&self) -> bool {
        matches!(self, Value::Unknown(_))
    }
}
