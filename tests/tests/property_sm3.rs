//! Property-based tests for SM3

use proptest::prelude::*;
use smcrypt_algorithms::hash::{HashFunction, Sm3};
use smcrypt_algorithms::kdf::sm3kdf::derive_key;

proptest! {
    #[test]
    fn digest_is_32_bytes(data in prop::collection::vec(any::<u8>(), 0..512)) {
        prop_assert_eq!(Sm3::digest(&data).unwrap().len(), 32);
    }

    #[test]
    fn chunking_does_not_change_digest(
        data in prop::collection::vec(any::<u8>(), 0..600),
        split in any::<prop::sample::Index>(),
    ) {
        let at = split.index(data.len() + 1);
        let mut hasher = Sm3::new();
        hasher.update(&data[..at]).unwrap();
        hasher.update(&data[at..]).unwrap();
        prop_assert_eq!(hasher.finalize().unwrap(), Sm3::digest(&data).unwrap());
    }

    #[test]
    fn reused_hasher_matches_fresh(
        first in prop::collection::vec(any::<u8>(), 0..200),
        second in prop::collection::vec(any::<u8>(), 0..200),
    ) {
        let mut hasher = Sm3::new();
        hasher.update(&first).unwrap();
        let a = hasher.finalize().unwrap();
        hasher.update(&second).unwrap();
        let b = hasher.finalize().unwrap();
        prop_assert_eq!(a, Sm3::digest(&first).unwrap());
        prop_assert_eq!(b, Sm3::digest(&second).unwrap());
    }

    #[test]
    fn kdf_output_is_prefix_stable(
        z in prop::collection::vec(any::<u8>(), 1..80),
        short in 0usize..64,
        extra in 0usize..64,
    ) {
        let long = derive_key(&z, short + extra).unwrap();
        prop_assert_eq!(long.len(), short + extra);
        prop_assert_eq!(&long[..short], &derive_key(&z, short).unwrap()[..]);
    }
}
