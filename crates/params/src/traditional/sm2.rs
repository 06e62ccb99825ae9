//! SM2 elliptic curve domain parameters (GB/T 32918.5)
//!
//! Curve equation: y² = x³ + ax + b over 𝔽ₚ with a = p − 3.
//! All values are 32-byte big-endian encodings.

/// Domain parameters of a short-Weierstrass curve over a 256-bit prime field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurveParameters {
    /// Field prime p
    pub p: [u8; 32],
    /// Coefficient a
    pub a: [u8; 32],
    /// Coefficient b
    pub b: [u8; 32],
    /// Order n of the base point
    pub n: [u8; 32],
    /// Base point x-coordinate
    pub g_x: [u8; 32],
    /// Base point y-coordinate
    pub g_y: [u8; 32],
    /// Cofactor
    pub h: u32,
}

/// Size of an SM2 scalar in bytes
pub const SM2_SCALAR_SIZE: usize = 32;

/// Size of an SM2 field element in bytes
pub const SM2_FIELD_ELEMENT_SIZE: usize = 32;

/// Size of an uncompressed SM2 point: 0x04 ‖ x ‖ y
pub const SM2_POINT_UNCOMPRESSED_SIZE: usize = 1 + 2 * SM2_FIELD_ELEMENT_SIZE;

/// Size of the C3 tag appended to SM2 ciphertexts
pub const SM2_TAG_SIZE: usize = 32;

/// Fixed overhead of an SM2 ciphertext: C1 plus C3
pub const SM2_CIPHERTEXT_OVERHEAD: usize = SM2_POINT_UNCOMPRESSED_SIZE + SM2_TAG_SIZE;

/// The recommended SM2 curve (sm2p256v1)
pub const SM2_P256V1: CurveParameters = CurveParameters {
    p: [
        0xFF, 0xFF, 0xFF, 0xFE, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
        0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
        0xFF, 0xFF,
    ],
    a: [
        0xFF, 0xFF, 0xFF, 0xFE, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
        0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
        0xFF, 0xFC,
    ],
    b: [
        0x28, 0xE9, 0xFA, 0x9E, 0x9D, 0x9F, 0x5E, 0x34, 0x4D, 0x5A, 0x9E, 0x4B, 0xCF, 0x65, 0x09,
        0xA7, 0xF3, 0x97, 0x89, 0xF5, 0x15, 0xAB, 0x8F, 0x92, 0xDD, 0xBC, 0xBD, 0x41, 0x4D, 0x94,
        0x0E, 0x93,
    ],
    n: [
        0xFF, 0xFF, 0xFF, 0xFE, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
        0xFF, 0x72, 0x03, 0xDF, 0x6B, 0x21, 0xC6, 0x05, 0x2B, 0x53, 0xBB, 0xF4, 0x09, 0x39, 0xD5,
        0x41, 0x23,
    ],
    g_x: [
        0x32, 0xC4, 0xAE, 0x2C, 0x1F, 0x19, 0x81, 0x19, 0x5F, 0x99, 0x04, 0x46, 0x6A, 0x39, 0xC9,
        0x94, 0x8F, 0xE3, 0x0B, 0xBF, 0xF2, 0x66, 0x0B, 0xE1, 0x71, 0x5A, 0x45, 0x89, 0x33, 0x4C,
        0x74, 0xC7,
    ],
    g_y: [
        0xBC, 0x37, 0x36, 0xA2, 0xF4, 0xF6, 0x77, 0x9C, 0x59, 0xBD, 0xCE, 0xE3, 0x6B, 0x69, 0x21,
        0x53, 0xD0, 0xA9, 0x87, 0x7C, 0xC6, 0x2A, 0x47, 0x40, 0x02, 0xDF, 0x32, 0xE5, 0x21, 0x39,
        0xF0, 0xA0,
    ],
    h: 1,
};
