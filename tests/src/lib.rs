//! Test fixtures for the smcrypt workspace
pub mod vectors;
