//! Core hashing traits for the farmprint workspace.
//!
//! This crate provides the foundational traits that all farmprint hash
//! implementations conform to. It is `no_std` compatible and has zero
//! dependencies.
//!
//! # Trait Hierarchy
//!
//! | Trait | Purpose | Examples |
//! |-------|---------|----------|
//! | [`FastHash`] | Seeded one-shot non-cryptographic hashes | FarmHash128 |
//! | [`Fingerprint`] | Canonical unseeded fingerprints with a stable wire form | FarmHash128 |
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to ensure
//! all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod fast_hash;

pub use fast_hash::{FastHash, Fingerprint};
