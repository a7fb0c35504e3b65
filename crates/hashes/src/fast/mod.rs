//! Fast non-cryptographic hashes (**NOT CRYPTO**).
//!
//! This module intentionally requires explicit opt-in. Do not use these hashes
//! for signatures, MACs, key derivation, or anything requiring cryptographic
//! security.

pub mod farmhash;

pub use farmhash::{FarmHash128, Fingerprint128, fingerprint128};
