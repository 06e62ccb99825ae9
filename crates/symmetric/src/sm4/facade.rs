//! String-oriented SM4 helpers
//!
//! `key` and `iv` are interpreted as raw UTF-8 bytes when `hex_key` is
//! false and hex-decoded otherwise. Either way they must come to exactly
//! 16 bytes. Ciphertext travels as hex: uppercase on output, either case
//! on input.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use tracing::{debug, warn};
use zeroize::Zeroizing;

use super::{Sm4Cbc, Sm4Ecb, Sm4Iv, Sm4Key};
use crate::cipher::{IvCipher, SymmetricCipher};
use crate::error::{validate_material, Error, Result, SymmetricResultExt};
use smcrypt_params::utils::symmetric::SM4_BLOCK_SIZE;

/// SM4-CBC with PKCS#7 padding; returns uppercase hex
pub fn encrypt_cbc(key: &str, plaintext: &[u8], iv: &str, hex_key: bool) -> Result<String> {
    let cipher = Sm4Cbc::new(&parse_key(key, hex_key)?)?;
    let iv = parse_iv(iv, hex_key)?;
    let ciphertext = cipher.encrypt(&iv, plaintext)?;
    debug!(plaintext_len = plaintext.len(), ciphertext_len = ciphertext.len(), "SM4-CBC encrypt");
    Ok(hex::encode_upper(ciphertext))
}

/// Inverse of [`encrypt_cbc`]
pub fn decrypt_cbc(key: &str, ciphertext_hex: &str, iv: &str, hex_key: bool) -> Result<Vec<u8>> {
    let cipher = Sm4Cbc::new(&parse_key(key, hex_key)?)?;
    let iv = parse_iv(iv, hex_key)?;
    let ciphertext = parse_ciphertext(ciphertext_hex)?;
    let plaintext = cipher.decrypt(&iv, &ciphertext).map_err(|err| {
        warn!(error = %err, ciphertext_len = ciphertext.len(), "SM4-CBC decrypt rejected");
        err
    })?;
    debug!(ciphertext_len = ciphertext.len(), plaintext_len = plaintext.len(), "SM4-CBC decrypt");
    Ok(plaintext)
}

/// SM4-ECB with PKCS#7 padding; returns uppercase hex
pub fn encrypt_ecb(key: &str, plaintext: &[u8], hex_key: bool) -> Result<String> {
    let cipher = Sm4Ecb::new(&parse_key(key, hex_key)?)?;
    let ciphertext = cipher.encrypt(plaintext)?;
    debug!(plaintext_len = plaintext.len(), ciphertext_len = ciphertext.len(), "SM4-ECB encrypt");
    Ok(hex::encode_upper(ciphertext))
}

/// Inverse of [`encrypt_ecb`]
pub fn decrypt_ecb(key: &str, ciphertext_hex: &str, hex_key: bool) -> Result<Vec<u8>> {
    let cipher = Sm4Ecb::new(&parse_key(key, hex_key)?)?;
    let ciphertext = parse_ciphertext(ciphertext_hex)?;
    let plaintext = cipher.decrypt(&ciphertext).map_err(|err| {
        warn!(error = %err, ciphertext_len = ciphertext.len(), "SM4-ECB decrypt rejected");
        err
    })?;
    debug!(ciphertext_len = ciphertext.len(), plaintext_len = plaintext.len(), "SM4-ECB decrypt");
    Ok(plaintext)
}

fn material(value: &str, hex_key: bool, context: &'static str) -> Result<Zeroizing<Vec<u8>>> {
    if !hex_key {
        return Ok(Zeroizing::new(value.as_bytes().to_vec()));
    }
    hex::decode(value).map(Zeroizing::new).map_err(|_| {
        warn!(context, "SM4 key material is not valid hex");
        Error::SerializationError {
            context,
            message: "not valid hexadecimal".to_string(),
        }
    })
}

fn parse_key(key: &str, hex_key: bool) -> Result<Sm4Key> {
    let bytes = material(key, hex_key, "SM4 key")?;
    Sm4Key::from_slice(&bytes).map_err(|err| {
        warn!(key_len = bytes.len(), "SM4 key rejected");
        err
    })
}

fn parse_iv(iv: &str, hex_key: bool) -> Result<Sm4Iv> {
    let bytes = material(iv, hex_key, "SM4 IV")?;
    validate_material(bytes.len(), "SM4 IV", SM4_BLOCK_SIZE).map_err(|err| {
        warn!(iv_len = bytes.len(), "SM4 IV rejected");
        err
    })?;
    Sm4Iv::from_slice(&bytes).map_primitive_err()
}

fn parse_ciphertext(ciphertext_hex: &str) -> Result<Vec<u8>> {
    hex::decode(ciphertext_hex).map_err(|_| {
        warn!(hex_len = ciphertext_hex.len(), "SM4 ciphertext is not valid hex");
        Error::SerializationError {
            context: "SM4 ciphertext",
            message: "not valid hexadecimal".to_string(),
        }
    })
}
