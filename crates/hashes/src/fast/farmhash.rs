//! FarmHash `Fingerprint128` (**NOT CRYPTO**).
//!
//! The 128-bit fingerprint from Google's FarmHash suite, bit-identical to
//! CityHash128 v1.1.1. Fingerprints are frozen: every implementation on every
//! platform returns the same value for the same bytes, so they can be
//! persisted and compared across processes. Portable scalar kernel only.

#![allow(clippy::indexing_slicing)] // Tight short-input byte bands

use platform::bytes::{load_le32, load_le64, rotr64};
use traits::{FastHash, Fingerprint};

#[doc(hidden)]
pub mod dispatch;
pub(crate) mod kernels;

// Primes between 2^63 and 2^64, fixed by the published algorithm.
const K0: u64 = 0xC3A5_C85C_97CB_3127;
const K1: u64 = 0xB492_B66F_BE98_F273;
const K2: u64 = 0x9AE1_6A3B_2F90_404F;

// Murmur-inspired multiplier used by the 128-to-64 compressor.
const K_MUL: u64 = 0x9DDF_EA08_EB38_2D69;

/// A 128-bit fingerprint: an immutable pair of 64-bit words (low, high).
///
/// Equality is structural. The wire form is fixed at 16 bytes: bytes 0-7 are
/// the low word little-endian, bytes 8-15 the high word little-endian,
/// regardless of host byte order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Fingerprint128 {
  lo: u64,
  hi: u64,
}

impl Fingerprint128 {
  /// Build a fingerprint from its (low, high) words.
  #[inline]
  #[must_use]
  pub const fn new(lo: u64, hi: u64) -> Self {
    Self { lo, hi }
  }

  /// The low 64-bit word.
  #[inline]
  #[must_use]
  pub const fn low64(self) -> u64 {
    self.lo
  }

  /// The high 64-bit word.
  #[inline]
  #[must_use]
  pub const fn high64(self) -> u64 {
    self.hi
  }

  /// The fixed 16-byte wire form: low word little-endian, then high word.
  #[inline]
  #[must_use]
  pub const fn to_le_bytes(self) -> [u8; 16] {
    let lo = self.lo.to_le_bytes();
    let hi = self.hi.to_le_bytes();
    let mut out = [0u8; 16];
    let mut i = 0;
    while i < 8 {
      out[i] = lo[i];
      out[i + 8] = hi[i];
      i += 1;
    }
    out
  }

  /// Rebuild a fingerprint from its 16-byte wire form.
  #[inline]
  #[must_use]
  pub const fn from_le_bytes(bytes: [u8; 16]) -> Self {
    let mut lo = [0u8; 8];
    let mut hi = [0u8; 8];
    let mut i = 0;
    while i < 8 {
      lo[i] = bytes[i];
      hi[i] = bytes[i + 8];
      i += 1;
    }
    Self { lo: u64::from_le_bytes(lo), hi: u64::from_le_bytes(hi) }
  }
}

impl From<Fingerprint128> for u128 {
  #[inline]
  fn from(fp: Fingerprint128) -> Self {
    (fp.lo as u128) | ((fp.hi as u128) << 64)
  }
}

impl From<u128> for Fingerprint128 {
  #[inline]
  fn from(value: u128) -> Self {
    Self { lo: value as u64, hi: (value >> 64) as u64 }
  }
}

/// FarmHash `Fingerprint128`.
///
/// [`Fingerprint::fingerprint`] is the canonical published function: for
/// inputs of 16 bytes or more it derives the seed from the first 16 bytes and
/// hashes the remainder, so it is *not* the same as
/// [`FastHash::hash_with_seed`] with any fixed seed.
#[derive(Clone, Default)]
pub struct FarmHash128;

impl FastHash for FarmHash128 {
  const OUTPUT_SIZE: usize = 16;
  type Output = Fingerprint128;
  type Seed = Fingerprint128;

  #[inline]
  fn hash_with_seed(seed: Self::Seed, data: &[u8]) -> Self::Output {
    dispatch::hash128_with_seed(seed, data)
  }
}

impl Fingerprint for FarmHash128 {
  #[inline]
  fn fingerprint(data: &[u8]) -> Self::Output {
    dispatch::fingerprint128(data)
  }
}

/// One-shot FarmHash `Fingerprint128` of `data`.
#[inline]
#[must_use]
pub fn fingerprint128(data: &[u8]) -> Fingerprint128 {
  dispatch::fingerprint128(data)
}

/// Length regime of a seeded 128-bit hash call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Regime {
  /// Inputs shorter than 128 bytes: single-pass City/Murmur mix.
  Murmur,
  /// Inputs of 128 bytes or more: rolling-state main loop.
  Rolling,
}

impl Regime {
  #[inline]
  const fn for_len(len: usize) -> Self {
    if len < 128 { Self::Murmur } else { Self::Rolling }
  }
}

#[inline(always)]
const fn shift_mix(v: u64) -> u64 {
  v ^ (v >> 47)
}

#[inline(always)]
const fn hash_128_to_64(lo: u64, hi: u64) -> u64 {
  let mut a = (lo ^ hi).wrapping_mul(K_MUL);
  a ^= a >> 47;
  let mut b = (hi ^ a).wrapping_mul(K_MUL);
  b ^= b >> 47;
  b.wrapping_mul(K_MUL)
}

#[inline(always)]
const fn hash_len_16(u: u64, v: u64) -> u64 {
  hash_128_to_64(u, v)
}

#[inline(always)]
const fn hash_len_16_mul(u: u64, v: u64, mul: u64) -> u64 {
  let mut a = (u ^ v).wrapping_mul(mul);
  a ^= a >> 47;
  let mut b = (v ^ a).wrapping_mul(mul);
  b ^= b >> 47;
  b.wrapping_mul(mul)
}

#[inline(always)]
const fn weak_hash_len_32_with_seeds(w: u64, x: u64, y: u64, z: u64, mut a: u64, mut b: u64) -> (u64, u64) {
  a = a.wrapping_add(w);
  b = rotr64(b.wrapping_add(a).wrapping_add(z), 21);
  let c = a;
  a = a.wrapping_add(x);
  a = a.wrapping_add(y);
  b = b.wrapping_add(rotr64(a, 44));
  (a.wrapping_add(z), b.wrapping_add(c))
}

#[inline(always)]
fn weak_hash_len_32_at(data: &[u8], offset: usize, a: u64, b: u64) -> (u64, u64) {
  weak_hash_len_32_with_seeds(
    load_le64(data, offset),
    load_le64(data, offset + 8),
    load_le64(data, offset + 16),
    load_le64(data, offset + 24),
    a,
    b,
  )
}

#[inline(always)]
fn hash_len_8_to_16(data: &[u8]) -> u64 {
  let len = data.len() as u64;
  let mul = K2.wrapping_add(len.wrapping_mul(2));
  let a = load_le64(data, 0).wrapping_add(K2);
  let b = load_le64(data, data.len() - 8);
  let c = rotr64(b, 37).wrapping_mul(mul).wrapping_add(a);
  let d = rotr64(a, 25).wrapping_add(b).wrapping_mul(mul);
  hash_len_16_mul(c, d, mul)
}

#[inline(always)]
fn hash_len_4_to_7(data: &[u8]) -> u64 {
  let len = data.len() as u64;
  let mul = K2.wrapping_add(len.wrapping_mul(2));
  let a = load_le32(data, 0) as u64;
  hash_len_16_mul(len.wrapping_add(a << 3), load_le32(data, data.len() - 4) as u64, mul)
}

#[inline(always)]
fn hash_len_1_to_3(data: &[u8]) -> u64 {
  let a = data[0] as u32;
  let b = data[data.len() >> 1] as u32;
  let c = data[data.len() - 1] as u32;
  let y = a.wrapping_add(b << 8);
  let z = (data.len() as u32).wrapping_add(c << 2);
  shift_mix((y as u64).wrapping_mul(K2) ^ (z as u64).wrapping_mul(K0)).wrapping_mul(K2)
}

/// Closed-form hash for inputs of at most 16 bytes.
#[inline(always)]
fn hash_len_0_to_16(data: &[u8]) -> u64 {
  if data.len() >= 8 {
    hash_len_8_to_16(data)
  } else if data.len() >= 4 {
    hash_len_4_to_7(data)
  } else if !data.is_empty() {
    hash_len_1_to_3(data)
  } else {
    K2
  }
}

/// Seeded City/Murmur hash for inputs shorter than 128 bytes.
fn city_murmur(data: &[u8], seed: (u64, u64)) -> (u64, u64) {
  let len = data.len();
  let (mut a, mut b) = seed;
  let mut c: u64;
  let mut d: u64;

  if len <= 16 {
    a = shift_mix(a.wrapping_mul(K1)).wrapping_mul(K1);
    c = b.wrapping_mul(K1).wrapping_add(hash_len_0_to_16(data));
    d = shift_mix(a.wrapping_add(if len >= 8 { load_le64(data, 0) } else { c }));
  } else {
    c = hash_len_16(load_le64(data, len - 8).wrapping_add(K1), a);
    d = hash_len_16(b.wrapping_add(len as u64), c.wrapping_add(load_le64(data, len - 16)));
    a = a.wrapping_add(d);
    // Consumes 16 bytes per round; the loop bound is len - 16, so a final
    // partial block is absorbed without a remainder special case, exactly as
    // published.
    let mut offset = 0;
    let mut remaining = len as isize - 16;
    loop {
      a ^= shift_mix(load_le64(data, offset).wrapping_mul(K1)).wrapping_mul(K1);
      a = a.wrapping_mul(K1);
      b ^= a;
      c ^= shift_mix(load_le64(data, offset + 8).wrapping_mul(K1)).wrapping_mul(K1);
      c = c.wrapping_mul(K1);
      d ^= c;
      offset += 16;
      remaining -= 16;
      if remaining <= 0 {
        break;
      }
    }
  }
  a = hash_len_16(a, c);
  b = hash_len_16(d, b);
  (a ^ b, hash_len_16(b, a))
}

/// The 56 bytes of rolling state carried across 64-byte steps of the
/// long-input loop: two word pairs plus three scalars, seven words total.
struct RollingState {
  v: (u64, u64),
  w: (u64, u64),
  x: u64,
  y: u64,
  z: u64,
}

impl RollingState {
  /// Seed the state from the caller's seed and the input's first 96 bytes.
  fn seed(seed: (u64, u64), data: &[u8]) -> Self {
    let (x, y) = seed;
    let z = (data.len() as u64).wrapping_mul(K1);
    let v0 = rotr64(y ^ K1, 49).wrapping_mul(K1).wrapping_add(load_le64(data, 0));
    let v1 = rotr64(v0, 42).wrapping_mul(K1).wrapping_add(load_le64(data, 8));
    let w0 = rotr64(y.wrapping_add(z), 35).wrapping_mul(K1).wrapping_add(x);
    let w1 = rotr64(x.wrapping_add(load_le64(data, 88)), 53).wrapping_mul(K1);
    Self { v: (v0, v1), w: (w0, w1), x, y, z }
  }

  /// Absorb one 64-byte block at `offset`.
  fn step(&mut self, data: &[u8], offset: usize) {
    self.x = rotr64(
      self
        .x
        .wrapping_add(self.y)
        .wrapping_add(self.v.0)
        .wrapping_add(load_le64(data, offset + 8)),
      37,
    )
    .wrapping_mul(K1);
    self.y = rotr64(
      self.y.wrapping_add(self.v.1).wrapping_add(load_le64(data, offset + 48)),
      42,
    )
    .wrapping_mul(K1);
    self.x ^= self.w.1;
    self.y = self.y.wrapping_add(self.v.0).wrapping_add(load_le64(data, offset + 40));
    self.z = rotr64(self.z.wrapping_add(self.w.0), 33).wrapping_mul(K1);
    self.v = weak_hash_len_32_at(data, offset, self.v.1.wrapping_mul(K1), self.x.wrapping_add(self.w.0));
    self.w = weak_hash_len_32_at(
      data,
      offset + 32,
      self.z.wrapping_add(self.w.1),
      self.y.wrapping_add(load_le64(data, offset + 16)),
    );
    core::mem::swap(&mut self.z, &mut self.x);
  }

  /// Post-loop mixing before the tail is absorbed.
  fn finish_bulk(&mut self) {
    self.x = self.x.wrapping_add(rotr64(self.v.0.wrapping_add(self.z), 49).wrapping_mul(K0));
    self.y = self.y.wrapping_mul(K0).wrapping_add(rotr64(self.w.1, 37));
    self.z = self.z.wrapping_mul(K0).wrapping_add(rotr64(self.w.0, 27));
    self.w.0 = self.w.0.wrapping_mul(9);
    self.v.0 = self.v.0.wrapping_mul(K0);
  }

  /// Absorb one 32-byte tail chunk at `offset`.
  fn absorb_tail(&mut self, data: &[u8], offset: usize) {
    self.y = rotr64(self.x.wrapping_add(self.y), 42).wrapping_mul(K0).wrapping_add(self.v.1);
    self.w.0 = self.w.0.wrapping_add(load_le64(data, offset + 16));
    self.x = self.x.wrapping_mul(K0).wrapping_add(self.w.0);
    self.z = self.z.wrapping_add(self.w.1).wrapping_add(load_le64(data, offset));
    self.w.1 = self.w.1.wrapping_add(self.v.0);
    self.v = weak_hash_len_32_at(data, offset, self.v.0.wrapping_add(self.z), self.v.1);
    self.v.0 = self.v.0.wrapping_mul(K0);
  }

  /// Compress the seven words down to the final (low, high) pair.
  fn combine(self) -> (u64, u64) {
    let x = hash_len_16(self.x, self.v.0);
    let y = hash_len_16(self.y.wrapping_add(self.z), self.w.0);
    (
      hash_len_16(x.wrapping_add(self.v.1), self.w.1).wrapping_add(y),
      hash_len_16(x.wrapping_add(self.w.1), y.wrapping_add(self.v.1)),
    )
  }
}

/// Seeded hash for inputs of 128 bytes or more.
fn hash_long(data: &[u8], seed: (u64, u64)) -> (u64, u64) {
  debug_assert!(data.len() >= 128);

  let mut state = RollingState::seed(seed, data);
  let mut offset = 0;
  let mut remaining = data.len();

  // Two 64-byte steps per round; the published loop is unrolled once.
  loop {
    state.step(data, offset);
    state.step(data, offset + 64);
    offset += 128;
    remaining -= 128;
    if remaining < 128 {
      break;
    }
  }

  state.finish_bulk();

  // Up to four 32-byte chunks anchored to the end of the input. When the
  // remainder is not a multiple of 32 the first chunk processed here overlaps
  // bytes the main loop already consumed; the published outputs depend on
  // that overlap.
  let mut tail_done = 0;
  while tail_done < remaining {
    tail_done += 32;
    state.absorb_tail(data, data.len() - tail_done);
  }

  state.combine()
}

pub(crate) fn hash128_with_seed_portable(seed: Fingerprint128, data: &[u8]) -> Fingerprint128 {
  let seed = (seed.low64(), seed.high64());
  let (lo, hi) = match Regime::for_len(data.len()) {
    Regime::Murmur => city_murmur(data, seed),
    Regime::Rolling => hash_long(data, seed),
  };
  Fingerprint128::new(lo, hi)
}

pub(crate) fn fingerprint128_portable(data: &[u8]) -> Fingerprint128 {
  if data.len() >= 16 {
    let seed = Fingerprint128::new(load_le64(data, 0), load_le64(data, 8).wrapping_add(K0));
    hash128_with_seed_portable(seed, &data[16..])
  } else {
    hash128_with_seed_portable(Fingerprint128::new(K0, K1), data)
  }
}

#[cfg(test)]
mod tests {
  extern crate alloc;

  use alloc::vec::Vec;

  use proptest::prelude::*;

  use super::*;

  fn deterministic_bytes(len: usize) -> Vec<u8> {
    let mut out = alloc::vec![0u8; len];
    let mut x = 0x243f_6a88_85a3_08d3u64;
    for b in &mut out {
      x = x.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
      *b = (x >> 56) as u8;
    }
    out
  }

  #[test]
  fn rolling_state_is_56_bytes() {
    assert_eq!(core::mem::size_of::<RollingState>(), 56);
  }

  #[test]
  fn empty_input_yields_k2_through_short_hash() {
    assert_eq!(hash_len_0_to_16(b""), K2);
    assert_eq!(
      fingerprint128(b""),
      Fingerprint128::new(0x3df0_9dfc_64c0_9a2b, 0x3cb5_40c3_92e5_1e29)
    );
  }

  #[test]
  fn regime_selection_by_length() {
    assert_eq!(Regime::for_len(0), Regime::Murmur);
    assert_eq!(Regime::for_len(127), Regime::Murmur);
    assert_eq!(Regime::for_len(128), Regime::Rolling);
    assert_eq!(Regime::for_len(usize::MAX), Regime::Rolling);
  }

  #[test]
  fn short_bands_route_by_length() {
    for len in 0..=16usize {
      let data = deterministic_bytes(len);
      let expected = match len {
        0 => K2,
        1..=3 => hash_len_1_to_3(&data),
        4..=7 => hash_len_4_to_7(&data),
        _ => hash_len_8_to_16(&data),
      };
      assert_eq!(hash_len_0_to_16(&data), expected, "band mismatch at len={len}");
    }
  }

  #[test]
  fn wire_layout_round_trips() {
    let fp = Fingerprint128::new(0x0123_4567_89ab_cdef, 0xfedc_ba98_7654_3210);
    let bytes = fp.to_le_bytes();
    assert_eq!(&bytes[..8], &fp.low64().to_le_bytes());
    assert_eq!(&bytes[8..], &fp.high64().to_le_bytes());
    assert_eq!(Fingerprint128::from_le_bytes(bytes), fp);
    assert_eq!(Fingerprint128::from(u128::from(fp)), fp);
  }

  #[test]
  fn smoke_known_values() {
    assert_eq!(
      fingerprint128(b"hello world"),
      Fingerprint128::new(0x2869_0d39_7005_14ed, 0x6119_6fad_0243_1508)
    );
    assert_eq!(
      fingerprint128(b"abc"),
      Fingerprint128::new(0x3980_b2af_d212_6c04, 0xa085_f090_1302_9e45)
    );
  }

  #[test]
  fn avalanche_flips_about_half_the_output_bits() {
    for &len in &[3usize, 12, 40, 200, 512] {
      let mut data = deterministic_bytes(len);
      let base = u128::from(fingerprint128(&data));
      let step = if len <= 64 { 1 } else { 7 };
      let mut flipped = 0u64;
      let mut samples = 0u64;
      for bit in (0..len * 8).step_by(step) {
        data[bit >> 3] ^= 1 << (bit & 7);
        let hash = u128::from(fingerprint128(&data));
        data[bit >> 3] ^= 1 << (bit & 7);
        flipped += (base ^ hash).count_ones() as u64;
        samples += 1;
      }
      let mean = flipped as f64 / samples as f64;
      assert!((60.0..=68.0).contains(&mean), "poor diffusion at len={len}: mean={mean}");
    }
  }

  proptest! {
    #[test]
    fn dispatch_seeds_from_first_16_bytes(data in proptest::collection::vec(any::<u8>(), 16..1024)) {
      let seed = Fingerprint128::new(load_le64(&data, 0), load_le64(&data, 8).wrapping_add(K0));
      prop_assert_eq!(fingerprint128(&data), FarmHash128::hash_with_seed(seed, &data[16..]));
    }

    #[test]
    fn short_dispatch_uses_fixed_seed(data in proptest::collection::vec(any::<u8>(), 0..16)) {
      let seed = Fingerprint128::new(K0, K1);
      prop_assert_eq!(fingerprint128(&data), FarmHash128::hash_with_seed(seed, &data));
    }

    #[test]
    fn fingerprint128_is_deterministic(data in proptest::collection::vec(any::<u8>(), 0..512)) {
      prop_assert_eq!(fingerprint128(&data), fingerprint128(&data));
    }

    #[test]
    fn seeded_hash_is_deterministic(
      seed_lo in any::<u64>(),
      seed_hi in any::<u64>(),
      data in proptest::collection::vec(any::<u8>(), 0..512),
    ) {
      let seed = Fingerprint128::new(seed_lo, seed_hi);
      prop_assert_eq!(
        FarmHash128::hash_with_seed(seed, &data),
        FarmHash128::hash_with_seed(seed, &data)
      );
    }
  }
}
