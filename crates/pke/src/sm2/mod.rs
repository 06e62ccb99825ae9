//! SM2 public key encryption (GB/T 32918.4)
//!
//! Ciphertext layout is `C1 ‖ C2 ‖ C3` by default:
//! - `C1 = k·G`, the 65-byte uncompressed ephemeral point
//! - `C2 = M ⊕ KDF(x2 ‖ y2, |M|)` where `(x2, y2) = k·Q`
//! - `C3 = SM3(x2 ‖ M ‖ y2)`
//!
//! [`Mode::C1C3C2`] selects the component order of the 2012 revision.

use alloc::string::String;
use alloc::vec::Vec;

use rand::{CryptoRng, RngCore};
use tracing::{debug, warn};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use smcrypt_algorithms::ec::sm2 as ec;
use smcrypt_algorithms::error::validate;
use smcrypt_algorithms::kdf::Sm3Kdf;
use smcrypt_api::error::Error as ApiError;
use smcrypt_api::traits::{Pke, Serialize, SerializeSecret};
use smcrypt_internal::constant_time::ct_eq;

use crate::error::{Error, Result};

#[cfg(feature = "std")]
mod facade;
#[cfg(feature = "std")]
pub use facade::{decrypt_hex, encrypt_hex, generate_keypair_hex};

pub use ec::{SM2_CIPHERTEXT_OVERHEAD, SM2_POINT_UNCOMPRESSED_SIZE, SM2_SCALAR_SIZE, SM2_TAG_SIZE};

/// Component order of a serialized ciphertext
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// `C1 ‖ C2 ‖ C3`
    #[default]
    C1C2C3,
    /// `C1 ‖ C3 ‖ C2`
    C1C3C2,
}

/// Borrowed view of the three ciphertext components
struct Components<'a> {
    c1: &'a [u8],
    c2: &'a [u8],
    c3: &'a [u8],
}

impl Mode {
    fn assemble(self, c1: &[u8], c2: &[u8], c3: &[u8]) -> Vec<u8> {
        let mut out = Vec::with_capacity(c1.len() + c2.len() + c3.len());
        out.extend_from_slice(c1);
        match self {
            Mode::C1C2C3 => {
                out.extend_from_slice(c2);
                out.extend_from_slice(c3);
            }
            Mode::C1C3C2 => {
                out.extend_from_slice(c3);
                out.extend_from_slice(c2);
            }
        }
        out
    }

    fn split(self, ciphertext: &[u8]) -> Result<Components<'_>> {
        if ciphertext.len() < SM2_CIPHERTEXT_OVERHEAD {
            return Err(Error::InvalidCiphertextFormat(
                "ciphertext shorter than C1 and C3",
            ));
        }
        if ciphertext.len() == SM2_CIPHERTEXT_OVERHEAD {
            return Err(Error::InvalidCiphertextFormat("C2 is empty"));
        }
        let (c1, rest) = ciphertext.split_at(SM2_POINT_UNCOMPRESSED_SIZE);
        let (c2, c3) = match self {
            Mode::C1C2C3 => {
                let (c2, c3) = rest.split_at(rest.len() - SM2_TAG_SIZE);
                (c2, c3)
            }
            Mode::C1C3C2 => {
                let (c3, c2) = rest.split_at(SM2_TAG_SIZE);
                (c2, c3)
            }
        };
        Ok(Components { c1, c2, c3 })
    }
}

/// Public key: an uncompressed point `0x04 ‖ x ‖ y` known to lie on the curve
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sm2PublicKey([u8; SM2_POINT_UNCOMPRESSED_SIZE]);

impl Sm2PublicKey {
    /// Encode a curve point
    pub fn from_point(point: &ec::Point) -> Result<Self> {
        if point.is_identity() {
            return Err(Error::InvalidKey("public key is the point at infinity"));
        }
        Ok(Self(point.serialize_uncompressed()))
    }

    /// Decode and validate 65 bytes
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let point = ec::Point::deserialize_uncompressed(bytes)?;
        Self::from_point(&point)
    }

    /// Parse 130 hex digits in either case
    pub fn from_hex(hex_str: &str) -> Result<Self> {
        let bytes = hex::decode(hex_str)?;
        Self::from_slice(&bytes)
    }

    /// Uppercase hex encoding
    pub fn to_hex(&self) -> String {
        hex::encode_upper(self.0)
    }

    /// Decode back into a curve point
    pub fn to_point(&self) -> Result<ec::Point> {
        Ok(ec::Point::deserialize_uncompressed(&self.0)?)
    }
}

impl AsRef<[u8]> for Sm2PublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Serialize for Sm2PublicKey {
    fn from_bytes(bytes: &[u8]) -> smcrypt_api::Result<Self> {
        Ok(Self::from_slice(bytes)?)
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.0.to_vec()
    }
}

/// Secret key: a big-endian scalar d in [1, n − 1]
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Sm2SecretKey([u8; SM2_SCALAR_SIZE]);

impl Sm2SecretKey {
    /// Encode a scalar
    pub fn from_scalar(scalar: &ec::Scalar) -> Self {
        Self(scalar.serialize())
    }

    /// Decode 32 bytes, rejecting zero and values ≥ n
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let scalar = ec::Scalar::deserialize(bytes)
            .map_err(|_| Error::InvalidKey("private scalar must be 32 bytes in [1, n - 1]"))?;
        Ok(Self::from_scalar(&scalar))
    }

    /// Parse 64 hex digits in either case
    pub fn from_hex(hex_str: &str) -> Result<Self> {
        let bytes = Zeroizing::new(hex::decode(hex_str)?);
        Self::from_slice(&bytes)
    }

    /// Uppercase hex encoding
    pub fn to_hex(&self) -> String {
        hex::encode_upper(self.0)
    }

    /// Derive Q = d·G
    pub fn public_key(&self) -> Result<Sm2PublicKey> {
        let d = self.to_scalar()?;
        Sm2PublicKey::from_point(&ec::scalar_mult_base_g(&d))
    }

    fn to_scalar(&self) -> Result<ec::Scalar> {
        ec::Scalar::new(self.0).map_err(|_| Error::InvalidKey("private scalar out of range"))
    }
}

impl AsRef<[u8]> for Sm2SecretKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl core::fmt::Debug for Sm2SecretKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Sm2SecretKey([REDACTED])")
    }
}

impl SerializeSecret for Sm2SecretKey {
    fn from_bytes(bytes: &[u8]) -> smcrypt_api::Result<Self> {
        Ok(Self::from_slice(bytes)?)
    }

    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.0.to_vec())
    }
}

/// Hex-encoded key pair, uppercase
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sm2KeyPairHex {
    /// 130 hex digits
    pub public_key: String,
    /// 64 hex digits
    pub private_key: String,
}

impl Sm2KeyPairHex {
    /// Generate a pair from the given randomness source
    pub fn generate<R: CryptoRng + RngCore>(rng: &mut R) -> Result<Self> {
        let (pk, sk) = generate_keypair(rng)?;
        Ok(Self {
            public_key: pk.to_hex(),
            private_key: sk.to_hex(),
        })
    }

    /// Decode both halves and check that they belong together
    pub fn decode(&self) -> Result<(Sm2PublicKey, Sm2SecretKey)> {
        let pk = Sm2PublicKey::from_hex(&self.public_key)?;
        let sk = Sm2SecretKey::from_hex(&self.private_key)?;
        if sk.public_key()? != pk {
            return Err(Error::InvalidKey("public key does not match private key"));
        }
        Ok((pk, sk))
    }
}

impl core::fmt::Debug for Sm2KeyPairHex {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Sm2KeyPairHex")
            .field("public_key", &self.public_key)
            .field("private_key", &"[REDACTED]")
            .finish()
    }
}

/// Generate a fresh key pair
pub fn generate_keypair<R: CryptoRng + RngCore>(
    rng: &mut R,
) -> Result<(Sm2PublicKey, Sm2SecretKey)> {
    let (d, q) = ec::generate_keypair(rng)?;
    Ok((Sm2PublicKey::from_point(&q)?, Sm2SecretKey::from_scalar(&d)))
}

/// Encrypt `plaintext` to `public_key`, laying out the result per `mode`
///
/// Empty plaintext encrypts to an empty ciphertext.
pub fn encrypt<R: CryptoRng + RngCore>(
    public_key: &Sm2PublicKey,
    plaintext: &[u8],
    mode: Mode,
    rng: &mut R,
) -> Result<Vec<u8>> {
    let q = public_key.to_point()?;
    if plaintext.is_empty() {
        return Ok(Vec::new());
    }
    loop {
        let k = ec::random_scalar(rng);
        if let Some(ciphertext) = encrypt_with_ephemeral(&q, &k, plaintext, mode)? {
            debug!(
                plaintext_len = plaintext.len(),
                ciphertext_len = ciphertext.len(),
                ?mode,
                "SM2 encrypt"
            );
            return Ok(ciphertext);
        }
        warn!("SM2 keystream was all zero, retrying with a fresh ephemeral key");
    }
}

/// Decrypt a ciphertext laid out per `mode`
///
/// Empty ciphertext decrypts to an empty plaintext.
pub fn decrypt(secret_key: &Sm2SecretKey, ciphertext: &[u8], mode: Mode) -> Result<Vec<u8>> {
    match decrypt_components(secret_key, ciphertext, mode) {
        Ok(plaintext) => {
            debug!(
                ciphertext_len = ciphertext.len(),
                plaintext_len = plaintext.len(),
                ?mode,
                "SM2 decrypt"
            );
            Ok(plaintext)
        }
        Err(err) => {
            warn!(error = %err, ciphertext_len = ciphertext.len(), "SM2 decrypt rejected");
            Err(err)
        }
    }
}

/// One encryption attempt under a fixed ephemeral scalar
///
/// Returns `None` when the keystream came out all zero and the caller
/// must draw a new `k`.
pub(crate) fn encrypt_with_ephemeral(
    q: &ec::Point,
    k: &ec::Scalar,
    plaintext: &[u8],
    mode: Mode,
) -> Result<Option<Vec<u8>>> {
    let c1 = ec::scalar_mult_base_g(k).serialize_uncompressed();
    let shared = ec::scalar_mult(k, q);
    if shared.is_identity() {
        return Err(Error::EncryptionFailed("shared point is the point at infinity"));
    }

    let mut session = open_session(&shared);
    let mut c2 = plaintext.to_vec();
    session.encrypt_in_place(&mut c2)?;
    if session.keystream_is_zero() {
        c2.zeroize();
        return Ok(None);
    }
    let c3 = session.finalize_tag()?;
    Ok(Some(mode.assemble(&c1, &c2, c3.as_ref())))
}

fn decrypt_components(secret_key: &Sm2SecretKey, ciphertext: &[u8], mode: Mode) -> Result<Vec<u8>> {
    let d = secret_key.to_scalar()?;
    if ciphertext.is_empty() {
        return Ok(Vec::new());
    }
    let parts = mode.split(ciphertext)?;

    let c1 = ec::Point::deserialize_uncompressed(parts.c1)
        .map_err(|_| Error::InvalidCiphertextFormat("C1 is not a point on the curve"))?;
    let shared = ec::scalar_mult(&d, &c1);
    if shared.is_identity() {
        return Err(Error::DecryptionFailed("shared point is the point at infinity"));
    }

    let mut session = open_session(&shared);
    let mut plaintext = parts.c2.to_vec();
    session.decrypt_in_place(&mut plaintext)?;
    if session.keystream_is_zero() {
        plaintext.zeroize();
        return Err(Error::DecryptionFailed("derived keystream is all zero"));
    }
    let tag = session.finalize_tag()?;
    if let Err(err) = validate::authentication(ct_eq(tag, parts.c3), "SM2") {
        plaintext.zeroize();
        return Err(err.into());
    }
    Ok(plaintext)
}

/// Seed a KDF session with the coordinates of the shared point
fn open_session(shared: &ec::Point) -> Sm3Kdf {
    let mut x2 = shared.x_coordinate_bytes();
    let mut y2 = shared.y_coordinate_bytes();
    let session = Sm3Kdf::new(&x2, &y2);
    x2.zeroize();
    y2.zeroize();
    session
}

/// SM2 encryption with the default `C1 ‖ C2 ‖ C3` layout
pub struct Sm2;

impl Pke for Sm2 {
    type PublicKey = Sm2PublicKey;
    type SecretKey = Sm2SecretKey;
    type Ciphertext = Vec<u8>;

    fn name() -> &'static str {
        "SM2"
    }

    fn keypair<R: CryptoRng + RngCore>(
        rng: &mut R,
    ) -> smcrypt_api::Result<(Self::PublicKey, Self::SecretKey)> {
        generate_keypair(rng).map_err(ApiError::from)
    }

    fn encrypt<R: RngCore + CryptoRng>(
        pk_recipient: &Self::PublicKey,
        plaintext: &[u8],
        aad: Option<&[u8]>,
        rng: &mut R,
    ) -> smcrypt_api::Result<Self::Ciphertext> {
        if aad.is_some() {
            return Err(Error::UnsupportedOperation("SM2 associated data").into());
        }
        encrypt(pk_recipient, plaintext, Mode::default(), rng).map_err(ApiError::from)
    }

    fn decrypt(
        sk_recipient: &Self::SecretKey,
        ciphertext: &Self::Ciphertext,
        aad: Option<&[u8]>,
    ) -> smcrypt_api::Result<Vec<u8>> {
        if aad.is_some() {
            return Err(Error::UnsupportedOperation("SM2 associated data").into());
        }
        decrypt(sk_recipient, ciphertext, Mode::default()).map_err(ApiError::from)
    }
}
