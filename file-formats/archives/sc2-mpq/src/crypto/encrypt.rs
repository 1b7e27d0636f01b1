//! Word-stream encryption, the inverse of [`decrypt_block`]
//!
//! The public read path never encrypts, but the cipher is symmetric and
//! the fixture writer in `test_utils` needs the forward direction to
//! produce tables the reader can decrypt.
//!
//! [`decrypt_block`]: super::decrypt_block

use super::table::ENCRYPTION_TABLE;

/// Encrypt a block of little-endian words in place.
///
/// Mirrors `decrypt_block` exactly, except the seed schedule must capture
/// the plaintext word before it is overwritten.
pub fn encrypt_block(data: &mut [u32], mut key: u32) {
    if key == 0 {
        return;
    }

    let mut seed: u32 = 0xEEEE_EEEE;

    for value in data.iter_mut() {
        seed = seed.wrapping_add(ENCRYPTION_TABLE[0x400 + (key & 0xFF) as usize]);

        let ch = *value;
        *value = ch ^ key.wrapping_add(seed);

        key = (!key << 0x15).wrapping_add(0x1111_1111) | (key >> 0x0B);
        seed = ch
            .wrapping_add(seed)
            .wrapping_add(seed << 5)
            .wrapping_add(3);
    }
}
