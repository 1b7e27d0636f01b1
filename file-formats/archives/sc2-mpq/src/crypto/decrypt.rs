//! Word-stream decryption for the hash and block tables

use super::table::ENCRYPTION_TABLE;

/// Decrypt a block of little-endian words in place.
///
/// A zero key means the data is stored in the clear and is left alone.
/// The key and seed schedules both advance once per word; all arithmetic
/// wraps at 32 bits.
pub fn decrypt_block(data: &mut [u32], mut key: u32) {
    if key == 0 {
        return;
    }

    let mut seed: u32 = 0xEEEE_EEEE;

    for value in data.iter_mut() {
        seed = seed.wrapping_add(ENCRYPTION_TABLE[0x400 + (key & 0xFF) as usize]);

        let ch = *value ^ key.wrapping_add(seed);
        *value = ch;

        key = (!key << 0x15).wrapping_add(0x1111_1111) | (key >> 0x0B);
        // The seed schedule feeds on plaintext, which on decryption is
        // the output word.
        seed = ch
            .wrapping_add(seed)
            .wrapping_add(seed << 5)
            .wrapping_add(3);
    }
}
