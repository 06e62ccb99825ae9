//! Elliptic curve primitives
//!
//! Constant-time arithmetic on the SM2 recommended curve, the foundation
//! for SM2 public-key encryption.

pub mod sm2;

pub use sm2::{Point as Sm2Point, Scalar as Sm2Scalar};
