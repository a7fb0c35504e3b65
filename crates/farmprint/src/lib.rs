//! Pure Rust FarmHash `Fingerprint128`.
//!
//! `farmprint` computes the 128-bit fingerprint from Google's FarmHash suite
//! (bit-identical to CityHash128 v1.1.1) for use as a hash key, checksum,
//! partitioning value, or deduplication identifier. Fingerprints are frozen:
//! the same bytes produce the same value on every platform, forever.
//!
//! **Not for cryptography.** Fingerprints offer no collision resistance
//! against adversarial input.
//!
//! # Quick Start
//!
//! ```
//! use farmprint::{fingerprint128, fingerprint128_bytes};
//!
//! let fp = fingerprint128("hello world");
//! assert_eq!(fp.low64(), 0x28690d39700514ed);
//! assert_eq!(fp.high64(), 0x61196fad02431508);
//!
//! // Fixed 16-byte wire form: low word little-endian, then high word.
//! let wire = fingerprint128_bytes(b"hello world");
//! assert_eq!(wire, fp.to_le_bytes());
//! ```
//!
//! Seeded hashing is available through the [`FastHash`] trait:
//!
//! ```
//! use farmprint::{FarmHash128, FastHash, Fingerprint128};
//!
//! let seed = Fingerprint128::new(1, 2);
//! let h = FarmHash128::hash_with_seed(seed, b"shard me");
//! assert_ne!(h, FarmHash128::hash(b"shard me"));
//! ```
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std` | Yes | Runtime CPU detection for kernel dispatch |
//!
//! Without `std`, kernel selection falls back to compile-time target features.
#![cfg_attr(not(feature = "std"), no_std)]

pub use hashes::fast::{FarmHash128, Fingerprint128};
pub use traits::{FastHash, Fingerprint};

/// Fingerprint any contiguous byte container.
///
/// Accepts `&[u8]`, `&str`, `Vec<u8>`, `String`, arrays, and anything else
/// that dereferences to bytes.
#[inline]
#[must_use]
pub fn fingerprint128<T: AsRef<[u8]>>(data: T) -> Fingerprint128 {
  hashes::fast::fingerprint128(data.as_ref())
}

/// Fingerprint any contiguous byte container, returning the 16-byte wire form.
///
/// Bytes 0-7 are the low word little-endian, bytes 8-15 the high word
/// little-endian, regardless of host byte order.
#[inline]
#[must_use]
pub fn fingerprint128_bytes<T: AsRef<[u8]>>(data: T) -> [u8; 16] {
  fingerprint128(data).to_le_bytes()
}
