//! SM2 encryption across the public entry points

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use smcrypt_api::error::Error;
use smcrypt_api::Pke;
use smcrypt_pke::sm2::{self, Mode, Sm2KeyPairHex};
use smcrypt_pke::Sm2;

#[test]
fn hex_helpers_roundtrip_test_message() {
    let (public_hex, private_hex) = sm2::generate_keypair_hex().unwrap();
    let ciphertext = sm2::encrypt_hex(&public_hex, b"Test").unwrap();
    assert!(ciphertext.len() >= 97 * 2 + 8);
    assert_eq!(sm2::decrypt_hex(&private_hex, &ciphertext).unwrap(), b"Test");
}

#[test]
fn trait_and_hex_helpers_interoperate() {
    let mut rng = ChaCha20Rng::seed_from_u64(32);
    let (pk, sk) = Sm2::keypair(&mut rng).unwrap();

    let from_trait = Sm2::encrypt(&pk, b"interop", None, &mut rng).unwrap();
    assert_eq!(
        sm2::decrypt_hex(&sk.to_hex(), &hex::encode(&from_trait)).unwrap(),
        b"interop"
    );

    let from_hex = hex::decode(sm2::encrypt_hex(&pk.to_hex(), b"interop").unwrap()).unwrap();
    assert_eq!(Sm2::decrypt(&sk, &from_hex, None).unwrap(), b"interop");
}

#[test]
fn random_messages_roundtrip_in_both_layouts() {
    let mut rng = ChaCha20Rng::seed_from_u64(2);
    for round in 0..8usize {
        let (pk, sk) = sm2::generate_keypair(&mut rng).unwrap();
        let msg: Vec<u8> = (0..round * 37).map(|i| (i * 7 + round) as u8).collect();
        for mode in [Mode::C1C2C3, Mode::C1C3C2] {
            let ct = sm2::encrypt(&pk, &msg, mode, &mut rng).unwrap();
            assert_eq!(sm2::decrypt(&sk, &ct, mode).unwrap(), msg);
        }
    }
}

#[test]
fn mismatched_key_never_yields_plaintext() {
    let mut rng = ChaCha20Rng::seed_from_u64(3);
    let (pk, _) = Sm2::keypair(&mut rng).unwrap();
    for _ in 0..4 {
        let (_, wrong) = Sm2::keypair(&mut rng).unwrap();
        let ct = Sm2::encrypt(&pk, b"for someone else", None, &mut rng).unwrap();
        assert!(matches!(
            Sm2::decrypt(&wrong, &ct, None),
            Err(Error::AuthenticationFailed { .. })
        ));
    }
}

#[test]
fn truncated_ciphertexts_are_rejected() {
    let mut rng = ChaCha20Rng::seed_from_u64(4);
    let (pk, sk) = Sm2::keypair(&mut rng).unwrap();
    let ct = Sm2::encrypt(&pk, b"0123456789", None, &mut rng).unwrap();
    for len in [1, 64, 65, 96, 97] {
        let truncated = ct[..len].to_vec();
        assert!(matches!(
            Sm2::decrypt(&sk, &truncated, None),
            Err(Error::InvalidCiphertext { .. })
        ));
    }
    // dropping a byte from C2 breaks the tag
    let mut short = ct.clone();
    short.remove(70);
    assert!(Sm2::decrypt(&sk, &short, None).is_err());
}

#[test]
fn keypair_hex_survives_decode() {
    let mut rng = ChaCha20Rng::seed_from_u64(5);
    let pair = Sm2KeyPairHex::generate(&mut rng).unwrap();
    let (pk, sk) = pair.decode().unwrap();
    let ct = sm2::encrypt_hex(&pair.public_key, b"pair").unwrap();
    assert_eq!(sm2::decrypt_hex(&pair.private_key, &ct).unwrap(), b"pair");
    assert_eq!(pk.to_hex(), pair.public_key);
    assert_eq!(sk.to_hex(), pair.private_key);
}
