//! Known-answer tests driven by the bundled vector file

use smcrypt_algorithms::block::{BlockCipher, Cbc, Ecb, Sm4};
use smcrypt_algorithms::hash::{HashFunction, Sm3};
use smcrypt_algorithms::types::{Nonce, SecretBytes};
use smcrypt_pke::sm2::{self, Mode, Sm2PublicKey, Sm2SecretKey};
use smcrypt_tests::vectors::{BlockMode, VECTORS};

#[test]
fn sm3_vectors() {
    for v in &VECTORS.sm3 {
        let digest = Sm3::digest(&v.msg).unwrap();
        assert_eq!(digest.as_ref(), &v.digest[..], "{}", v.name);
    }
}

#[test]
fn sm3_vectors_chunked() {
    for v in &VECTORS.sm3 {
        let mut hasher = Sm3::new();
        for chunk in v.msg.chunks(7) {
            hasher.update(chunk).unwrap();
        }
        assert_eq!(hasher.finalize().unwrap().as_ref(), &v.digest[..], "{}", v.name);
    }
}

#[test]
fn sm4_vectors() {
    for v in &VECTORS.sm4 {
        let key = SecretBytes::<16>::from_slice(&v.key).unwrap();
        let (ct, pt) = match v.mode {
            BlockMode::Ecb => {
                let ecb = Ecb::new(Sm4::new(&key)).with_padding(v.padding.into());
                let ct = ecb.encrypt(&v.pt).unwrap();
                (ct.clone(), ecb.decrypt(&ct).unwrap())
            }
            BlockMode::Cbc => {
                let iv = Nonce::<16>::from_slice(v.iv.as_ref().unwrap()).unwrap();
                let cbc = Cbc::new(Sm4::new(&key), &iv)
                    .unwrap()
                    .with_padding(v.padding.into());
                let ct = cbc.encrypt(&v.pt).unwrap();
                (ct.clone(), cbc.decrypt(&ct).unwrap())
            }
        };
        assert_eq!(ct, v.ct, "{}", v.name);
        assert_eq!(pt, v.pt, "{}", v.name);
    }
}

#[test]
fn sm4_vectors_through_hex_helpers() {
    for v in VECTORS
        .sm4
        .iter()
        .filter(|v| v.padding == smcrypt_tests::vectors::PaddingName::Pkcs7)
    {
        let key = hex::encode(&v.key);
        let expected = hex::encode_upper(&v.ct);
        let ct = match v.mode {
            BlockMode::Ecb => smcrypt_symmetric::encrypt_ecb(&key, &v.pt, true).unwrap(),
            BlockMode::Cbc => {
                let iv = hex::encode(v.iv.as_ref().unwrap());
                smcrypt_symmetric::encrypt_cbc(&key, &v.pt, &iv, true).unwrap()
            }
        };
        assert_eq!(ct, expected, "{}", v.name);
    }
}

#[test]
fn sm2_vectors() {
    for v in &VECTORS.sm2 {
        let sk = Sm2SecretKey::from_hex(&v.d).unwrap();
        let pk = Sm2PublicKey::from_hex(&v.q).unwrap();
        assert_eq!(sk.public_key().unwrap(), pk, "{}", v.name);

        let ct = hex::decode(&v.ct).unwrap();
        assert_eq!(sm2::decrypt(&sk, &ct, Mode::C1C2C3).unwrap(), v.msg, "{}", v.name);
        assert_eq!(sm2::decrypt_hex(&v.d, &v.ct).unwrap(), v.msg, "{}", v.name);
    }
}
