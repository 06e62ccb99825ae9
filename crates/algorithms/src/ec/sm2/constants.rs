//! Sizes and byte helpers for SM2 operations

pub use smcrypt_params::traditional::sm2::{
    SM2_CIPHERTEXT_OVERHEAD, SM2_FIELD_ELEMENT_SIZE, SM2_POINT_UNCOMPRESSED_SIZE,
    SM2_SCALAR_SIZE, SM2_TAG_SIZE,
};

use smcrypt_internal::endian::{load_be_words, store_be_words};

/// Number of 32-bit limbs in a field element or scalar
pub(crate) const NLIMBS: usize = 8;

/// Big-endian bytes to little-endian limbs
#[inline]
pub(crate) fn bytes_to_limbs_le(be_bytes: &[u8; 32]) -> [u32; NLIMBS] {
    let mut limbs = [0u32; NLIMBS];
    load_be_words(be_bytes, &mut limbs);
    limbs.reverse();
    limbs
}

/// Little-endian limbs to big-endian bytes
#[inline]
pub(crate) fn limbs_to_bytes_be(limbs: &[u32; NLIMBS]) -> [u8; 32] {
    let mut words = *limbs;
    words.reverse();
    let mut out = [0u8; 32];
    store_be_words(&words, &mut out);
    out
}
