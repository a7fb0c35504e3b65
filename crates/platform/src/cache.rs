//! Write-once lazy caching for dispatch decisions.
//!
//! [`OnceCache`] has the same semantics as `std::sync::OnceLock` but works on
//! `no_std` targets:
//!
//! - **std**: delegates to `OnceLock` for thread-safe lazy initialization
//! - **no_std with atomics**: atomic state machine over an `UnsafeCell`
//! - **no_std without atomics**: per-call computation (such targets are
//!   single-threaded, so there is nothing to cache against)

#[cfg(all(not(feature = "std"), target_has_atomic = "ptr"))]
use core::cell::UnsafeCell;
#[cfg(all(not(feature = "std"), target_has_atomic = "ptr"))]
use core::mem::MaybeUninit;

/// A lazily initialized, write-once cache holding a `Copy` value.
///
/// Zero-cost after first initialization: subsequent reads are a single load.
pub struct OnceCache<T: Copy> {
  #[cfg(feature = "std")]
  inner: std::sync::OnceLock<T>,

  #[cfg(all(not(feature = "std"), target_has_atomic = "ptr"))]
  state: core::sync::atomic::AtomicU8,
  #[cfg(all(not(feature = "std"), target_has_atomic = "ptr"))]
  value: UnsafeCell<MaybeUninit<T>>,

  // Consumes T on no-atomic targets, where the struct stores nothing.
  #[cfg(all(not(feature = "std"), not(target_has_atomic = "ptr")))]
  _marker: core::marker::PhantomData<*const T>,
}

// SAFETY: On std, OnceLock handles synchronization. On no_std with atomics,
// the state machine below guarantees the value is written exactly once before
// any read. On no-atomic targets the type holds no data.
#[allow(unsafe_code)]
unsafe impl<T: Copy + Send + Sync> Send for OnceCache<T> {}
#[allow(unsafe_code)]
unsafe impl<T: Copy + Send + Sync> Sync for OnceCache<T> {}

impl<T: Copy> OnceCache<T> {
  #[cfg(all(not(feature = "std"), target_has_atomic = "ptr"))]
  const UNINIT: u8 = 0;
  #[cfg(all(not(feature = "std"), target_has_atomic = "ptr"))]
  const INITING: u8 = 1;
  #[cfg(all(not(feature = "std"), target_has_atomic = "ptr"))]
  const READY: u8 = 2;

  /// Create a new empty cache.
  #[must_use]
  pub const fn new() -> Self {
    Self {
      #[cfg(feature = "std")]
      inner: std::sync::OnceLock::new(),

      #[cfg(all(not(feature = "std"), target_has_atomic = "ptr"))]
      state: core::sync::atomic::AtomicU8::new(Self::UNINIT),
      #[cfg(all(not(feature = "std"), target_has_atomic = "ptr"))]
      value: UnsafeCell::new(MaybeUninit::uninit()),

      #[cfg(all(not(feature = "std"), not(target_has_atomic = "ptr")))]
      _marker: core::marker::PhantomData,
    }
  }

  /// Get the cached value, initializing with `f` if not yet set.
  ///
  /// On targets with atomics the initializer runs at most once; on targets
  /// without, it runs on every call.
  #[inline]
  pub fn get_or_init(&self, f: impl FnOnce() -> T) -> T {
    #[cfg(feature = "std")]
    {
      *self.inner.get_or_init(f)
    }

    #[cfg(all(not(feature = "std"), target_has_atomic = "ptr"))]
    {
      use core::sync::atomic::Ordering;

      if self.state.load(Ordering::Acquire) == Self::READY {
        // SAFETY: value is initialized once state is READY.
        #[allow(unsafe_code)]
        return unsafe { (*self.value.get()).assume_init() };
      }

      if self
        .state
        .compare_exchange(Self::UNINIT, Self::INITING, Ordering::AcqRel, Ordering::Acquire)
        .is_ok()
      {
        let value = f();
        // SAFETY: we hold exclusive access while in the INITING state.
        #[allow(unsafe_code)]
        unsafe {
          (*self.value.get()).write(value);
        }
        self.state.store(Self::READY, Ordering::Release);
        return value;
      }

      // Another thread is initializing.
      while self.state.load(Ordering::Acquire) != Self::READY {
        core::hint::spin_loop();
      }
      // SAFETY: value is initialized once state is READY.
      #[allow(unsafe_code)]
      unsafe {
        (*self.value.get()).assume_init()
      }
    }

    #[cfg(all(not(feature = "std"), not(target_has_atomic = "ptr")))]
    {
      f()
    }
  }
}

impl<T: Copy> Default for OnceCache<T> {
  fn default() -> Self {
    Self::new()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn caches_first_value() {
    static CACHE: OnceCache<u64> = OnceCache::new();

    assert_eq!(CACHE.get_or_init(|| 42), 42);
    assert_eq!(CACHE.get_or_init(|| 99), 42);
  }
}
