//! Known-answer vectors for SM2, SM3 and SM4.
//!
//! The vectors live in `sm_kat.json` next to this file and are parsed once
//! on first use.

use once_cell::sync::Lazy;
use serde::{Deserialize, Deserializer};
use smcrypt_algorithms::block::Padding;

fn from_hex<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    hex::decode(&s).map_err(serde::de::Error::custom)
}

fn from_hex_opt<'de, D>(deserializer: D) -> Result<Option<Vec<u8>>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    s.map(|s| hex::decode(&s).map_err(serde::de::Error::custom))
        .transpose()
}

/// SM3 message and digest
#[derive(Debug, Deserialize)]
pub struct Sm3Vector {
    pub name: String,
    #[serde(deserialize_with = "from_hex")]
    pub msg: Vec<u8>,
    #[serde(deserialize_with = "from_hex")]
    pub digest: Vec<u8>,
}

/// Block chaining mode of an SM4 vector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockMode {
    Ecb,
    Cbc,
}

/// Padding named in an SM4 vector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaddingName {
    None,
    Pkcs7,
}

impl From<PaddingName> for Padding {
    fn from(name: PaddingName) -> Self {
        match name {
            PaddingName::None => Padding::None,
            PaddingName::Pkcs7 => Padding::Pkcs7,
        }
    }
}

/// SM4 encryption under one mode
#[derive(Debug, Deserialize)]
pub struct Sm4Vector {
    pub name: String,
    pub mode: BlockMode,
    pub padding: PaddingName,
    #[serde(deserialize_with = "from_hex")]
    pub key: Vec<u8>,
    #[serde(default, deserialize_with = "from_hex_opt")]
    pub iv: Option<Vec<u8>>,
    #[serde(deserialize_with = "from_hex")]
    pub pt: Vec<u8>,
    #[serde(deserialize_with = "from_hex")]
    pub ct: Vec<u8>,
}

/// SM2 key pair with a ciphertext produced under it
#[derive(Debug, Deserialize)]
pub struct Sm2Vector {
    pub name: String,
    /// Private scalar, hex
    pub d: String,
    /// Uncompressed public point, hex
    pub q: String,
    #[serde(deserialize_with = "from_hex")]
    pub msg: Vec<u8>,
    /// `C1 ‖ C2 ‖ C3`, hex
    pub ct: String,
}

/// Every vector in the bundled file
#[derive(Debug, Deserialize)]
pub struct KatFile {
    pub sm3: Vec<Sm3Vector>,
    pub sm4: Vec<Sm4Vector>,
    pub sm2: Vec<Sm2Vector>,
}

/// Parsed vectors
pub static VECTORS: Lazy<KatFile> = Lazy::new(|| {
    serde_json::from_str(include_str!("sm_kat.json")).expect("bundled vectors are valid JSON")
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vectors_load() {
        assert_eq!(VECTORS.sm3.len(), 3);
        assert!(VECTORS.sm4.iter().any(|v| v.mode == BlockMode::Cbc));
        assert!(VECTORS
            .sm4
            .iter()
            .filter(|v| v.mode == BlockMode::Cbc)
            .all(|v| v.iv.as_ref().map(Vec::len) == Some(16)));
        assert_eq!(VECTORS.sm2[0].msg, b"encryption standard");
    }
}
