use platform::{Caps, OnceCache};

use super::{
  Fingerprint128,
  kernels::{FarmHashKernelId, fingerprint_fn, required_caps, seeded_fn},
};

type FingerprintFn = fn(&[u8]) -> Fingerprint128;
type SeededFn = fn(Fingerprint128, &[u8]) -> Fingerprint128;

#[derive(Clone, Copy)]
struct ActiveKernel {
  fingerprint: FingerprintFn,
  seeded: SeededFn,
  name: &'static str,
}

static ACTIVE: OnceCache<ActiveKernel> = OnceCache::new();

#[inline]
#[must_use]
fn resolve(id: FarmHashKernelId, caps: Caps) -> FarmHashKernelId {
  if caps.has(required_caps(id)) {
    id
  } else {
    FarmHashKernelId::Portable
  }
}

#[inline]
#[must_use]
fn active() -> ActiveKernel {
  ACTIVE.get_or_init(|| {
    let caps = platform::caps();
    let id = resolve(FarmHashKernelId::Portable, caps);

    ActiveKernel {
      fingerprint: fingerprint_fn(id),
      seeded: seeded_fn(id),
      name: id.as_str(),
    }
  })
}

#[inline]
#[must_use]
pub fn kernel_name() -> &'static str {
  active().name
}

#[inline]
#[must_use]
pub fn fingerprint128(data: &[u8]) -> Fingerprint128 {
  (active().fingerprint)(data)
}

#[inline]
#[must_use]
pub fn hash128_with_seed(seed: Fingerprint128, data: &[u8]) -> Fingerprint128 {
  (active().seeded)(seed, data)
}
