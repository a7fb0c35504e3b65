use platform::Caps;

use super::Fingerprint128;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum FarmHashKernelId {
  Portable = 0,
}

impl FarmHashKernelId {
  #[inline]
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Portable => "portable",
    }
  }
}

#[allow(dead_code)]
#[must_use]
pub fn id_from_name(name: &str) -> Option<FarmHashKernelId> {
  match name {
    "portable" => Some(FarmHashKernelId::Portable),
    _ => None,
  }
}

#[must_use]
pub fn fingerprint_fn(id: FarmHashKernelId) -> fn(&[u8]) -> Fingerprint128 {
  match id {
    FarmHashKernelId::Portable => super::fingerprint128_portable,
  }
}

#[must_use]
pub fn seeded_fn(id: FarmHashKernelId) -> fn(Fingerprint128, &[u8]) -> Fingerprint128 {
  match id {
    FarmHashKernelId::Portable => super::hash128_with_seed_portable,
  }
}

#[inline]
#[must_use]
pub const fn required_caps(id: FarmHashKernelId) -> Caps {
  match id {
    FarmHashKernelId::Portable => Caps::NONE,
  }
}
