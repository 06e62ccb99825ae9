//! Property-based tests for SM4 and its modes

use proptest::prelude::*;
use smcrypt_algorithms::block::{BlockCipher, Cbc, Ecb, Padding, Sm4};
use smcrypt_algorithms::types::{Nonce, SecretBytes};
use smcrypt_symmetric::{IvCipher, Sm4Cbc, Sm4Iv, Sm4Key};

/// Generate data that's a multiple of 16 bytes (SM4 block size)
fn block_aligned_data() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 16..=256).prop_map(|mut v| {
        v.truncate(v.len() / 16 * 16);
        v
    })
}

proptest! {
    #[test]
    fn block_roundtrip(key in any::<[u8; 16]>(), block in any::<[u8; 16]>()) {
        let cipher = Sm4::new(&SecretBytes::new(key));
        let mut buf = block;
        cipher.encrypt_block(&mut buf).unwrap();
        cipher.decrypt_block(&mut buf).unwrap();
        prop_assert_eq!(buf, block);
    }

    #[test]
    fn cbc_unpadded_roundtrip(
        key in any::<[u8; 16]>(),
        iv in any::<[u8; 16]>(),
        data in block_aligned_data()
    ) {
        let secret_key = SecretBytes::<16>::new(key);
        let nonce = Nonce::<16>::new(iv);

        let cbc = Cbc::new(Sm4::new(&secret_key), &nonce)
            .unwrap()
            .with_padding(Padding::None);
        let ciphertext = cbc.encrypt(&data).unwrap();
        prop_assert_eq!(ciphertext.len(), data.len());
        prop_assert_eq!(cbc.decrypt(&ciphertext).unwrap(), data);
    }

    #[test]
    fn cbc_padded_roundtrip(
        key in any::<[u8; 16]>(),
        iv in any::<[u8; 16]>(),
        data in prop::collection::vec(any::<u8>(), 0..300)
    ) {
        let cbc = <Sm4Cbc as IvCipher>::new(&Sm4Key::new(key)).unwrap();
        let iv = Sm4Iv::new(iv);
        let ciphertext = cbc.encrypt(&iv, &data).unwrap();
        prop_assert_eq!(ciphertext.len(), data.len() / 16 * 16 + 16);
        prop_assert_eq!(cbc.decrypt(&iv, &ciphertext).unwrap(), data);
    }

    #[test]
    fn ecb_padded_roundtrip(
        key in any::<[u8; 16]>(),
        data in prop::collection::vec(any::<u8>(), 0..300)
    ) {
        let ecb = Ecb::new(Sm4::new(&SecretBytes::new(key)));
        let ciphertext = ecb.encrypt(&data).unwrap();
        prop_assert_eq!(ecb.decrypt(&ciphertext).unwrap(), data);
    }

    #[test]
    fn different_ivs_produce_different_ciphertexts(
        key in any::<[u8; 16]>(),
        iv1 in any::<[u8; 16]>(),
        iv2 in any::<[u8; 16]>(),
        data in prop::collection::vec(any::<u8>(), 1..100)
    ) {
        prop_assume!(iv1 != iv2);
        let cbc = <Sm4Cbc as IvCipher>::new(&Sm4Key::new(key)).unwrap();
        let ct1 = cbc.encrypt(&Sm4Iv::new(iv1), &data).unwrap();
        let ct2 = cbc.encrypt(&Sm4Iv::new(iv2), &data).unwrap();
        prop_assert_ne!(&ct1, &ct2);
        prop_assert_eq!(cbc.decrypt(&Sm4Iv::new(iv1), &ct1).unwrap(), data.clone());
        prop_assert_eq!(cbc.decrypt(&Sm4Iv::new(iv2), &ct2).unwrap(), data);
    }

    #[test]
    fn reused_cipher_matches_fresh(
        key in any::<[u8; 16]>(),
        a in prop::collection::vec(any::<u8>(), 0..64),
        b in prop::collection::vec(any::<u8>(), 0..64)
    ) {
        let secret_key = SecretBytes::<16>::new(key);
        let shared = Ecb::new(Sm4::new(&secret_key));
        let ct_a = shared.encrypt(&a).unwrap();
        let ct_b = shared.encrypt(&b).unwrap();
        prop_assert_eq!(ct_a, Ecb::new(Sm4::new(&secret_key)).encrypt(&a).unwrap());
        prop_assert_eq!(ct_b, Ecb::new(Sm4::new(&secret_key)).encrypt(&b).unwrap());
    }
}
