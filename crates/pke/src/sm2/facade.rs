//! Hex-string entry points backed by the operating system RNG

use alloc::string::String;
use alloc::vec::Vec;

use rand::rngs::OsRng;
use tracing::warn;

use super::{decrypt, encrypt, generate_keypair, Mode, Sm2PublicKey, Sm2SecretKey};
use crate::error::Error;
use smcrypt_api::Result;

/// Generate a key pair as `(public_hex, private_hex)`, both uppercase
pub fn generate_keypair_hex() -> Result<(String, String)> {
    let (pk, sk) = generate_keypair(&mut OsRng)?;
    Ok((pk.to_hex(), sk.to_hex()))
}

/// Encrypt to a 130-digit hex public key; returns uppercase `C1 ‖ C2 ‖ C3` hex
pub fn encrypt_hex(public_key_hex: &str, plaintext: &[u8]) -> Result<String> {
    let pk = Sm2PublicKey::from_hex(public_key_hex).map_err(|err| {
        warn!(error = %err, "SM2 public key rejected");
        err
    })?;
    let ciphertext = encrypt(&pk, plaintext, Mode::C1C2C3, &mut OsRng)?;
    Ok(hex::encode_upper(ciphertext))
}

/// Decrypt uppercase or lowercase `C1 ‖ C2 ‖ C3` hex with a 64-digit hex private key
pub fn decrypt_hex(private_key_hex: &str, ciphertext_hex: &str) -> Result<Vec<u8>> {
    let sk = Sm2SecretKey::from_hex(private_key_hex).map_err(|err| {
        warn!(error = %err, "SM2 private key rejected");
        err
    })?;
    let ciphertext = hex::decode(ciphertext_hex).map_err(|_| {
        warn!(hex_len = ciphertext_hex.len(), "SM2 ciphertext is not valid hex");
        Error::SerializationError("ciphertext is not valid hexadecimal")
    })?;
    Ok(decrypt(&sk, &ciphertext, Mode::C1C2C3)?)
}
