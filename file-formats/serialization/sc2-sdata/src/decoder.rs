//! Recursive-descent decoding of tagged byte streams

use std::collections::BTreeMap;

use byteorder::{ByteOrder, LittleEndian};
use log::debug;

use crate::{Error, MAX_DEPTH, Result, Value};

/// Tag bytes assigned to each value shape.
pub mod tag {
    /// Length-prefixed byte string
    pub const BYTES: u8 = 0x02;
    /// Counted sequence of values
    pub const SEQ: u8 = 0x04;
    /// Counted map with vlq keys
    pub const MAP: u8 = 0x05;
    /// Single unsigned byte
    pub const U8: u8 = 0x06;
    /// Four-byte little-endian unsigned integer
    pub const U32: u8 = 0x07;
    /// Standalone signed variable-length integer
    pub const INT: u8 = 0x09;
}

/// Longest accepted vlq, in seven-bit groups. Nine groups assemble 63
/// bits, which covers every value the game writes with room to spare.
const MAX_VLQ_GROUPS: u32 = 9;

/// Decode the first value in `data`.
///
/// Trailing bytes after the value are left untouched; several replay
/// sections carry padding past the payload. Use [`Decoder`] directly
/// when the consumed length matters.
pub fn decode(data: &[u8]) -> Result<Value> {
    Decoder::new(data).decode_value()
}

/// Cursor-based decoder over one immutable byte buffer.
///
/// The cursor only moves forward. Nothing is copied until a string
/// value materializes, so decoding is cheap to restart and safe to
/// nest.
#[derive(Debug)]
pub struct Decoder<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Decoder<'a> {
    /// Wrap `data` with the cursor at offset zero.
    pub fn new(data: &'a [u8]) -> Self {
        Decoder { data, pos: 0 }
    }

    /// Current cursor offset in bytes.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes left between the cursor and the end of the input.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Decode the next value at the cursor.
    pub fn decode_value(&mut self) -> Result<Value> {
        self.decode_nested(0)
    }

    /// Read one signed variable-length integer at the cursor.
    ///
    /// Seven-bit groups accumulate little-endian while each byte's high
    /// bit is set. Bit zero of the assembled number is the sign, the
    /// rest is the magnitude.
    pub fn read_vlq(&mut self) -> Result<i64> {
        let start = self.pos;
        let mut assembled: u64 = 0;
        let mut group: u32 = 0;
        loop {
            if group == MAX_VLQ_GROUPS {
                return Err(Error::OverlongInteger(start));
            }
            let byte = self.take_byte()?;
            assembled += u64::from(byte & 0x7F) << (7 * group);
            group += 1;
            if byte & 0x80 == 0 {
                break;
            }
        }
        let magnitude = (assembled >> 1) as i64;
        Ok(if assembled & 1 == 0 {
            magnitude
        } else {
            -magnitude
        })
    }

    fn decode_nested(&mut self, depth: usize) -> Result<Value> {
        if depth >= MAX_DEPTH {
            return Err(Error::NestedTooDeep(self.pos));
        }
        let tag = self.take_byte()?;
        match tag {
            tag::BYTES => {
                let length = self.read_count()?;
                Ok(Value::Bytes(self.take(length)?.to_vec()))
            }
            tag::SEQ => {
                // Two bytes sit between the tag and the count; their
                // meaning is unrecorded and no known replay varies them.
                self.take(2)?;
                let count = self.read_count()?;
                let mut elements = Vec::new();
                for _ in 0..count {
                    elements.push(self.decode_nested(depth + 1)?);
                }
                Ok(Value::Seq(elements))
            }
            tag::MAP => {
                let count = self.read_count()?;
                let mut entries = BTreeMap::new();
                for _ in 0..count {
                    let key = self.read_vlq()?;
                    let value = self.decode_nested(depth + 1)?;
                    // Well-formed input never repeats a key; if one
                    // does repeat, the later entry wins.
                    entries.insert(key, value);
                }
                Ok(Value::Map(entries))
            }
            tag::U8 => Ok(Value::U8(self.take_byte()?)),
            tag::U32 => Ok(Value::U32(LittleEndian::read_u32(self.take(4)?))),
            tag::INT => Ok(Value::Int(self.read_vlq()?)),
            other => {
                debug!("unknown tag 0x{other:02X} at offset {}", self.pos - 1);
                Ok(Value::Unknown(other))
            }
        }
    }

    /// Read a vlq and require it to be a usable element count.
    fn read_count(&mut self) -> Result<usize> {
        let start = self.pos;
        let count = self.read_vlq()?;
        usize::try_from(count).map_err(|_| Error::NegativeLength(count, start))
    }

    fn take(&mut self, count: usize) -> Result<&'a [u8]> {
        if count > self.remaining() {
            return Err(Error::Truncated {
                offset: self.pos,
                needed: count - self.remaining(),
            });
        }
        let bytes = &self.data[self.pos..self.pos + count];
        self.pos += count;
        Ok(bytes)
    }

    fn take_byte(&mut self) -> Result<u8> {
        Ok(self.take(1)?[0])
    }
}
