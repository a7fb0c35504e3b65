//! Runtime CPU detection.
//!
//! Resolution order: user override, then cached detection. With `std`,
//! detection queries the OS/CPU once and caches the result; without `std`,
//! capabilities come from compile-time target features. Under Miri the
//! portable baseline is always reported.

use core::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use crate::{cache::OnceCache, caps::Caps};

static OVERRIDE_SET: AtomicBool = AtomicBool::new(false);
static OVERRIDE_BITS: AtomicU64 = AtomicU64::new(0);

static DETECTED: OnceCache<Caps> = OnceCache::new();

#[inline]
pub fn caps() -> Caps {
  if OVERRIDE_SET.load(Ordering::Acquire) {
    return Caps::from_raw(OVERRIDE_BITS.load(Ordering::Acquire));
  }
  DETECTED.get_or_init(detect)
}

#[inline]
pub fn set_caps_override(value: Option<Caps>) {
  match value {
    Some(caps) => {
      OVERRIDE_BITS.store(caps.as_raw(), Ordering::Release);
      OVERRIDE_SET.store(true, Ordering::Release);
    }
    None => OVERRIDE_SET.store(false, Ordering::Release),
  }
}

#[inline]
pub fn has_override() -> bool {
  OVERRIDE_SET.load(Ordering::Acquire)
}

#[cfg(miri)]
fn detect() -> Caps {
  Caps::NONE
}

#[cfg(all(not(miri), target_arch = "x86_64"))]
fn detect() -> Caps {
  use crate::caps::x86;

  let mut caps = Caps::NONE;
  #[cfg(feature = "std")]
  {
    if std::arch::is_x86_feature_detected!("sse4.2") {
      caps = caps.union(x86::SSE42);
    }
    if std::arch::is_x86_feature_detected!("avx2") {
      caps = caps.union(x86::AVX2);
    }
  }
  #[cfg(not(feature = "std"))]
  {
    if cfg!(target_feature = "sse4.2") {
      caps = caps.union(x86::SSE42);
    }
    if cfg!(target_feature = "avx2") {
      caps = caps.union(x86::AVX2);
    }
  }
  caps
}

#[cfg(all(not(miri), target_arch = "aarch64"))]
fn detect() -> Caps {
  use crate::caps::arm;

  let mut caps = Caps::NONE;
  #[cfg(feature = "std")]
  {
    if std::arch::is_aarch64_feature_detected!("crc") {
      caps = caps.union(arm::CRC);
    }
    if std::arch::is_aarch64_feature_detected!("neon") {
      caps = caps.union(arm::NEON);
    }
  }
  #[cfg(not(feature = "std"))]
  {
    if cfg!(target_feature = "crc") {
      caps = caps.union(arm::CRC);
    }
    if cfg!(target_feature = "neon") {
      caps = caps.union(arm::NEON);
    }
  }
  caps
}

#[cfg(all(not(miri), not(target_arch = "x86_64"), not(target_arch = "aarch64")))]
fn detect() -> Caps {
  Caps::NONE
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn override_takes_precedence_and_clears() {
    let detected = caps();
    set_caps_override(Some(Caps::from_raw(0xdead)));
    assert!(has_override());
    assert_eq!(caps().as_raw(), 0xdead);
    set_caps_override(None);
    assert!(!has_override());
    assert_eq!(caps(), detected);
  }
}
