//! Filename hashing for table lookups and cipher keys

use super::table::ENCRYPTION_TABLE;

/// Hash purposes understood by [`hash_string`].
///
/// Each purpose selects a different 256-word group of the table, so the
/// same name yields four independent hashes.
pub mod hash_type {
    /// Table index derivation
    pub const TABLE_OFFSET: u32 = 0;
    /// First filename check hash
    pub const NAME_A: u32 = 1;
    /// Second filename check hash
    pub const NAME_B: u32 = 2;
    /// Cipher key derivation
    pub const FILE_KEY: u32 = 3;
}

/// Hash a filename with the classic MPQ string hash.
///
/// Case-insensitive: every byte is ASCII-uppercased before it enters the
/// state. All arithmetic wraps at 32 bits.
pub fn hash_string(filename: &str, hash_type: u32) -> u32 {
    let mut seed1: u32 = 0x7FED_7FED;
    let mut seed2: u32 = 0xEEEE_EEEE;

    for &byte in filename.as_bytes() {
        let ch = u32::from(byte.to_ascii_uppercase());

        let table_idx = (hash_type * 0x100 + ch) as usize;
        seed1 = ENCRYPTION_TABLE[table_idx] ^ (seed1.wrapping_add(seed2));
        seed2 = ch
            .wrapping_add(seed1)
            .wrapping_add(seed2)
            .wrapping_add(seed2 << 5)
            .wrapping_add(3);
    }

    seed1
}
