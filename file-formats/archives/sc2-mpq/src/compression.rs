//! Payload decompression
//!
//! Replay archives use one compression method in practice. Every
//! compressed payload starts with a method byte; bzip2 is the only method
//! this reader expands, and anything else passes through untouched.

use crate::{Error, Result};
use bzip2::read::BzDecoder;
use log::{debug, warn};
use std::io::Read;

/// Method byte marking a bzip2-compressed payload.
pub const BZIP2: u8 = 0x10;

/// Expand one compressed payload.
///
/// `data` includes the leading method byte. `expected_size` is the
/// logical size from the block table, used as a capacity hint only;
/// checksum and size validation are not this reader's job. Payloads with
/// an unknown method byte come back unchanged.
pub fn decompress(data: &[u8], expected_size: usize) -> Result<Vec<u8>> {
    let Some((&method, payload)) = data.split_first() else {
        return Err(Error::invalid_format("empty compressed payload"));
    };

    match method {
        BZIP2 => {
            let mut decoder = BzDecoder::new(payload);
            let mut result = Vec::with_capacity(expected_size);
            decoder
                .read_to_end(&mut result)
                .map_err(|e| Error::compression(format!("bzip2: {e}")))?;

            if result.len() != expected_size {
                debug!(
                    "bzip2 payload expanded to {} bytes, block table said {expected_size}",
                    result.len()
                );
            }

            Ok(result)
        }
        other => {
            warn!("unknown compression method 0x{other:02X}, passing payload through");
            Ok(data.to_vec())
        }
    }
}
