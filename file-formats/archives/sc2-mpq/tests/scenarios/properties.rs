//! Property tests for the hash and cipher primitives

use proptest::prelude::*;
use sc2_mpq::{decrypt_block, encrypt_block, hash_string, hash_type};

proptest! {
    #[test]
    fn cipher_round_trips(
        words in proptest::collection::vec(any::<u32>(), 0..256),
        key in any::<u32>(),
    ) {
        let mut data = words.clone();
        encrypt_block(&mut data, key);
        decrypt_block(&mut data, key);
        prop_assert_eq!(data, words);
    }

    #[test]
    fn hashing_is_pure(name in "[ -~]{0,64}") {
        prop_assert_eq!(
            hash_string(&name, hash_type::NAME_A),
            hash_string(&name, hash_type::NAME_A)
        );
    }

    #[test]
    fn hashing_ignores_ascii_case(name in "[a-zA-Z0-9. ()_-]{1,48}") {
        prop_assert_eq!(
            hash_string(&name.to_ascii_lowercase(), hash_type::NAME_B),
            hash_string(&name.to_ascii_uppercase(), hash_type::NAME_B)
        );
    }
}
