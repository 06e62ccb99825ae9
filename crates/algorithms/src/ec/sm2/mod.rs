//! SM2 elliptic curve primitives
//!
//! The recommended curve sm2p256v1 from GB/T 32918.5:
//! y² = x³ − 3x + b over 𝔽ₚ with p = 2²⁵⁶ − 2²²⁴ − 2⁹⁶ + 2⁶⁴ − 1.
//!
//! Field arithmetic folds products with 2²⁵⁶ ≡ 2²²⁴ + 2⁹⁶ − 2⁶⁴ + 1,
//! points use Jacobian coordinates internally and scalar multiplication
//! is a most-significant-bit-first double-and-add.

mod constants;
mod field;
mod point;
mod scalar;

pub use constants::{
    SM2_CIPHERTEXT_OVERHEAD, SM2_FIELD_ELEMENT_SIZE, SM2_POINT_UNCOMPRESSED_SIZE,
    SM2_SCALAR_SIZE, SM2_TAG_SIZE,
};
pub use field::FieldElement;
pub use point::Point;
pub use scalar::Scalar;

use rand::{CryptoRng, RngCore};
use subtle::Choice;
use zeroize::Zeroize;

use crate::error::Result;
use smcrypt_params::traditional::sm2::SM2_P256V1;

/// The base point G
pub fn base_point_g() -> Point {
    Point {
        is_identity: Choice::from(0),
        x: FieldElement(constants::bytes_to_limbs_le(&SM2_P256V1.g_x)),
        y: FieldElement(constants::bytes_to_limbs_le(&SM2_P256V1.g_y)),
    }
}

/// scalar · G
pub fn scalar_mult_base_g(scalar: &Scalar) -> Point {
    base_point_g().mul(scalar)
}

/// scalar · point
pub fn scalar_mult(scalar: &Scalar, point: &Point) -> Point {
    if point.is_identity() {
        Point::identity()
    } else {
        point.mul(scalar)
    }
}

/// Draw a uniform scalar in [1, n − 1] by rejection sampling
pub fn random_scalar<R: CryptoRng + RngCore>(rng: &mut R) -> Scalar {
    let mut bytes = [0u8; SM2_SCALAR_SIZE];
    loop {
        rng.fill_bytes(&mut bytes);
        if let Ok(scalar) = Scalar::new(bytes) {
            bytes.zeroize();
            return scalar;
        }
    }
}

/// Generate a key pair (d, d·G)
pub fn generate_keypair<R: CryptoRng + RngCore>(rng: &mut R) -> Result<(Scalar, Point)> {
    let d = random_scalar(rng);
    let q = scalar_mult_base_g(&d);
    Ok((d, q))
}
