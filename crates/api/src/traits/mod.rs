//! Trait surface shared by the smcrypt crates

pub mod pke;
pub mod serialize;
pub mod symmetric;

pub use pke::Pke;
pub use serialize::{Serialize, SerializeSecret};
pub use symmetric::SymmetricCipher;
