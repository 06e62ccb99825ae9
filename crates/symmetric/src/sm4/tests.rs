use super::*;
use crate::error::Error;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

const STANDARD_HEX: &str = "0123456789abcdeffedcba9876543210";
const TEXT_KEY: &str = "1234567890abcdef";
const TEXT_IV: &str = "fedcba0987654321";

fn standard_key() -> Sm4Key {
    Sm4Key::from_slice(&hex::decode(STANDARD_HEX).unwrap()).unwrap()
}

#[test]
fn test_ecb_standard_vector_unpadded() {
    let cipher = Sm4Ecb::new(&standard_key()).unwrap().with_padding(Padding::None);
    let ciphertext = cipher.encrypt(&hex::decode(STANDARD_HEX).unwrap()).unwrap();
    assert_eq!(hex::encode(&ciphertext), "681edf34d206965e86b3e94f536e4246");
}

#[test]
fn test_ecb_hex_key() {
    let plaintext = hex::decode(STANDARD_HEX).unwrap();
    let ciphertext = encrypt_ecb(STANDARD_HEX, &plaintext, true).unwrap();
    assert_eq!(
        ciphertext,
        "681EDF34D206965E86B3E94F536E4246002A8A4EFA863CCAD024AC0300BB40D2"
    );
    assert_eq!(decrypt_ecb(STANDARD_HEX, &ciphertext, true).unwrap(), plaintext);
}

#[test]
fn test_ecb_text_key() {
    let ciphertext = encrypt_ecb(TEXT_KEY, b"hello world", false).unwrap();
    assert_eq!(ciphertext, "602C73D509F22047C742DED07A10BF08");
    assert_eq!(
        decrypt_ecb(TEXT_KEY, &ciphertext.to_lowercase(), false).unwrap(),
        b"hello world"
    );
}

#[test]
fn test_cbc_text_key() {
    let ciphertext = encrypt_cbc(TEXT_KEY, b"hello world", TEXT_IV, false).unwrap();
    assert_eq!(ciphertext, "E0DFE36C1081D0BF78F8D5145790630F");
    assert_eq!(
        decrypt_cbc(TEXT_KEY, &ciphertext, TEXT_IV, false).unwrap(),
        b"hello world"
    );
}

#[test]
fn test_cbc_hex_key_two_blocks() {
    let iv = "000102030405060708090a0b0c0d0e0f";
    let plaintext: Vec<u8> = (0u8..32).collect();
    let ciphertext = encrypt_cbc(STANDARD_HEX, &plaintext, iv, true).unwrap();
    assert_eq!(
        ciphertext,
        "2677F46B09C122CC975533105BD4A22AD9EE98830E69745C9827F934A19621F8\
         0B38553051D4A47AEC8E4315D21F0C07"
    );
    assert_eq!(decrypt_cbc(STANDARD_HEX, &ciphertext, iv, true).unwrap(), plaintext);
}

#[test]
fn test_cbc_unpadded_iv_equal_to_key() {
    let key = standard_key();
    let iv = Sm4Iv::from_slice(&hex::decode(STANDARD_HEX).unwrap()).unwrap();
    let cbc = <Sm4Cbc as IvCipher>::new(&key)
        .unwrap()
        .with_padding(Padding::None);
    let plaintext = hex::decode(STANDARD_HEX.repeat(2)).unwrap();
    let ciphertext = cbc.encrypt(&iv, &plaintext).unwrap();
    assert_eq!(
        hex::encode(&ciphertext),
        "2677f46b09c122cc975533105bd4a22af6125f7275ce552c3a2bbcf533de8a3b"
    );
    assert_eq!(cbc.decrypt(&iv, &ciphertext).unwrap(), plaintext);
}

#[test]
fn test_empty_plaintext_is_one_padding_block() {
    let zero_iv = "00000000000000000000000000000000";
    let ciphertext = encrypt_cbc(STANDARD_HEX, b"", zero_iv, true).unwrap();
    assert_eq!(ciphertext, "002A8A4EFA863CCAD024AC0300BB40D2");
    assert!(decrypt_cbc(STANDARD_HEX, &ciphertext, zero_iv, true)
        .unwrap()
        .is_empty());
}

#[test]
fn test_roundtrip_lengths() {
    let mut rng = ChaCha20Rng::seed_from_u64(4);
    let key = Sm4Key::generate(&mut rng);
    let ecb = Sm4Ecb::new(&key).unwrap();
    let cbc = <Sm4Cbc as IvCipher>::new(&key).unwrap();
    for len in [0usize, 1, 15, 16, 17, 1000] {
        let mut plaintext = vec![0u8; len];
        rng.fill_bytes(&mut plaintext);
        let iv = Sm4Cbc::generate_iv(&mut rng);

        let ct = ecb.encrypt(&plaintext).unwrap();
        assert_eq!(ct.len(), (len / 16 + 1) * 16);
        assert_eq!(ecb.decrypt(&ct).unwrap(), plaintext);

        let ct = cbc.encrypt(&iv, &plaintext).unwrap();
        assert_eq!(ct.len(), (len / 16 + 1) * 16);
        assert_eq!(cbc.decrypt(&iv, &ct).unwrap(), plaintext);
    }
}

#[test]
fn test_distinct_ivs() {
    let a = encrypt_cbc(TEXT_KEY, b"same plaintext", "aaaaaaaaaaaaaaaa", false).unwrap();
    let b = encrypt_cbc(TEXT_KEY, b"same plaintext", "bbbbbbbbbbbbbbbb", false).unwrap();
    assert_ne!(a, b);
    assert_eq!(
        decrypt_cbc(TEXT_KEY, &a, "aaaaaaaaaaaaaaaa", false).unwrap(),
        b"same plaintext"
    );
    assert_eq!(
        decrypt_cbc(TEXT_KEY, &b, "bbbbbbbbbbbbbbbb", false).unwrap(),
        b"same plaintext"
    );
}

#[test]
fn test_bad_key_and_iv_lengths() {
    assert!(matches!(
        encrypt_ecb("short", b"m", false).unwrap_err(),
        Error::InvalidLength { context: "SM4 key", expected: 16, actual: 5 }
    ));
    assert!(matches!(
        encrypt_ecb("0011", b"m", true).unwrap_err(),
        Error::InvalidLength { context: "SM4 key", expected: 16, actual: 2 }
    ));
    assert!(matches!(
        encrypt_cbc(TEXT_KEY, b"m", "0123456789abcdef0", false).unwrap_err(),
        Error::InvalidLength { context: "SM4 IV", expected: 16, actual: 17 }
    ));
}

#[test]
fn test_bad_hex_input() {
    assert!(matches!(
        encrypt_ecb("not-hex-not-hex-not-hex-not-hex!", b"m", true).unwrap_err(),
        Error::SerializationError { context: "SM4 key", .. }
    ));
    assert!(matches!(
        decrypt_ecb(TEXT_KEY, "xyz", false).unwrap_err(),
        Error::SerializationError { context: "SM4 ciphertext", .. }
    ));
}

#[test]
fn test_corrupted_ciphertext() {
    // truncated to a partial block
    assert!(matches!(
        decrypt_ecb(TEXT_KEY, "602C73D509F22047", false).unwrap_err(),
        Error::InvalidCiphertext { .. }
    ));
    // wrong key leaves garbage padding
    let ciphertext = encrypt_ecb(TEXT_KEY, b"hello world", false).unwrap();
    let result = decrypt_ecb("abcdef1234567890", &ciphertext, false);
    assert!(result.map(|pt| pt != b"hello world").unwrap_or(true));
    // empty ciphertext has no padding block
    assert!(matches!(
        decrypt_ecb(TEXT_KEY, "", false).unwrap_err(),
        Error::InvalidCiphertext { .. }
    ));
}

#[test]
fn test_unpadded_cbc_requires_alignment() {
    let cbc = <Sm4Cbc as IvCipher>::new(&standard_key())
        .unwrap()
        .with_padding(Padding::None);
    let iv = Sm4Iv::zeroed();
    assert!(cbc.encrypt(&iv, &[0u8; 15]).is_err());
    let ct = cbc.encrypt(&iv, &hex::decode(STANDARD_HEX).unwrap()).unwrap();
    assert_eq!(hex::encode(ct), "681edf34d206965e86b3e94f536e4246");
}

#[test]
fn test_names_and_debug() {
    assert_eq!(<Sm4Ecb as SymmetricCipher>::name(), "SM4-ECB");
    assert_eq!(<Sm4Cbc as IvCipher>::name(), "SM4-CBC");
    assert_eq!(format!("{:?}", standard_key()), "Sm4Key([REDACTED])");
    assert_eq!(standard_key().as_bytes(), &hex::decode(STANDARD_HEX).unwrap()[..]);
}
