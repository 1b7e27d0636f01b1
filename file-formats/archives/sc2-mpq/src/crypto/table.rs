//! Shared lookup table behind hashing and the word cipher

/// Seed the generator starts from.
const TABLE_SEED: u32 = 0x0010_0001;

/// The 1280-word table every hash and cipher operation draws from.
///
/// Five 256-entry groups: one per hash type (offsets `0x000`, `0x100`,
/// `0x200`, `0x300`) plus the group the word cipher indexes at `0x400`.
pub(super) static ENCRYPTION_TABLE: [u32; 1280] = generate_encryption_table();

/// Generate the table with the format's fixed linear-congruential step.
///
/// For each of the 256 byte values, five rounds (one per group) each take
/// two generator steps and pack 16 bits from each into one word.
const fn generate_encryption_table() -> [u32; 1280] {
    let mut table = [0u32; 1280];
    let mut seed: u32 = TABLE_SEED;

    let mut index1 = 0;
    while index1 < 0x100 {
        let mut index2 = index1;
        let mut round = 0;
        while round < 5 {
            seed = (seed * 125 + 3) % 0x2A_AAAB;
            let high = (seed & 0xFFFF) << 16;

            seed = (seed * 125 + 3) % 0x2A_AAAB;
            let low = seed & 0xFFFF;

            table[index2] = high | low;

            index2 += 0x100;
            round += 1;
        }
        index1 += 1;
    }

    table
}
