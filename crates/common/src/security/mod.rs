//! Security primitives for handling sensitive material
//!
//! Everything that carries key bytes, round keys or shared secrets is
//! wrapped in one of these types so that it is wiped when dropped.

pub mod secret;

pub use secret::{EphemeralSecret, SecretBuffer, SecureZeroingType, ZeroizeGuard};
