//! Platform layer for farmprint: byte-order primitives, CPU capabilities,
//! and dispatch caching.
//!
//! This crate is the **single source of truth** for everything the hashing
//! logic needs from the machine it runs on:
//!
//! - [`bytes`]: byte-order-independent little-endian loads and branch-free
//!   rotates. These are the only primitives the hash kernels consume, so a
//!   hardware-specific kernel can be substituted without touching the hashing
//!   logic itself.
//! - [`Caps`]: what instructions can run on this machine. Kernels declare the
//!   capabilities they require; dispatch checks them once and caches the
//!   selection.
//! - [`OnceCache`]: write-once lazy cache backing that dispatch decision
//!   (`OnceLock` with `std`, an atomic state machine without).
//!
//! # Design Philosophy
//!
//! 1. **One API**: Algorithm crates query [`caps()`] instead of doing ad-hoc
//!    detection.
//! 2. **Portable baseline**: `Caps::NONE` always has a matching kernel; the
//!    portable path is correct on every target and byte order.
//! 3. **Zero-cost when possible**: Without `std`, detection is compile-time
//!    (`cfg!(target_feature)`), avoiding any runtime overhead.
//! 4. **Cached otherwise**: Runtime detection runs once and is cached.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod bytes;
pub mod cache;
pub mod caps;
mod detect;

pub use cache::OnceCache;
pub use caps::Caps;

/// Get detected CPU capabilities.
///
/// This is the main entry point for capability-based kernel dispatch.
///
/// # Caching
///
/// - With `std`: runtime detection runs once and is cached.
/// - Without `std`: capabilities are derived from compile-time target
///   features, which costs nothing per call.
#[inline]
#[must_use]
pub fn caps() -> Caps {
  detect::caps()
}

/// Set or clear the capabilities override.
///
/// When set, [`caps()`] returns the override instead of detecting. Pass
/// `None` to clear the override and resume detection. Intended for forcing
/// the portable kernel in tests and for bare-metal deployments where the CPU
/// is known up front.
#[inline]
pub fn set_caps_override(value: Option<Caps>) {
  detect::set_caps_override(value);
}

/// Check if an override is currently set.
#[inline]
#[must_use]
pub fn has_override() -> bool {
  detect::has_override()
}
