//! CPU capability representation.
//!
//! [`Caps`] is a 64-bit bitset answering one question: "What instructions can
//! I legally run on this machine?" Kernels declare required capabilities;
//! dispatch compares them against the detected set.
//!
//! # Bit Layout
//!
//! - Bits 0-31: x86/x86_64 features
//! - Bits 32-63: aarch64/arm features
//!
//! The portable baseline is [`Caps::NONE`], which every target satisfies.

/// CPU capabilities: a 64-bit feature bitset.
///
/// `Caps` is `Copy`, `Send`, and `Sync` and can be freely shared across
/// threads.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Caps(u64);

impl Caps {
  /// Empty capability set (no features). The portable baseline.
  pub const NONE: Self = Self(0);

  /// Create a capability set from raw bits.
  #[inline]
  #[must_use]
  pub const fn from_raw(bits: u64) -> Self {
    Self(bits)
  }

  /// Access the raw underlying bits.
  #[inline]
  #[must_use]
  pub const fn as_raw(self) -> u64 {
    self.0
  }

  /// Check if all features in `required` are present.
  #[inline(always)]
  #[must_use]
  pub const fn has(self, required: Self) -> bool {
    (self.0 & required.0) == required.0
  }

  /// Union of two capability sets.
  #[inline]
  #[must_use]
  pub const fn union(self, other: Self) -> Self {
    Self(self.0 | other.0)
  }
}

/// x86/x86_64 feature bits.
pub mod x86 {
  use super::Caps;

  /// SSE4.2 (hardware CRC32, useful to future CityHashCrc-style kernels).
  pub const SSE42: Caps = Caps::from_raw(1 << 0);
  /// AVX2 wide integer ops.
  pub const AVX2: Caps = Caps::from_raw(1 << 1);
}

/// aarch64 feature bits.
pub mod arm {
  use super::Caps;

  /// CRC32 extension.
  pub const CRC: Caps = Caps::from_raw(1 << 32);
  /// Advanced SIMD (NEON).
  pub const NEON: Caps = Caps::from_raw(1 << 33);
}
