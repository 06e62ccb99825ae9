//! Public key encryption surface

use crate::error::Result;
use alloc::vec::Vec;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

/// A public key encryption scheme with randomized encryption
///
/// Implementors that have no notion of associated data reject
/// `aad = Some(_)` with `Error::NotImplemented` rather than ignoring it.
pub trait Pke {
    /// Encoded recipient public key
    type PublicKey: AsRef<[u8]> + Clone;

    /// Recipient secret key, wiped on drop
    type SecretKey: Zeroize + AsRef<[u8]> + Clone;

    /// Encoded ciphertext
    type Ciphertext: AsRef<[u8]> + Clone;

    /// Scheme name, e.g. `"SM2"`
    fn name() -> &'static str;

    /// Draw a fresh key pair from `rng`
    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> Result<(Self::PublicKey, Self::SecretKey)>;

    /// Encrypt `plaintext` to `pk_recipient`, drawing ephemeral randomness
    /// from `rng`
    fn encrypt<R: RngCore + CryptoRng>(
        pk_recipient: &Self::PublicKey,
        plaintext: &[u8],
        aad: Option<&[u8]>,
        rng: &mut R,
    ) -> Result<Self::Ciphertext>;

    /// Recover the plaintext, failing if the integrity check does not hold
    fn decrypt(
        sk_recipient: &Self::SecretKey,
        ciphertext: &Self::Ciphertext,
        aad: Option<&[u8]>,
    ) -> Result<Vec<u8>>;
}
