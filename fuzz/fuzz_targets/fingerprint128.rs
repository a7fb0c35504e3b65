//! Invariant fuzzing for FarmHash `Fingerprint128`.
//!
//! Checks that the fixed 16-byte wire form reconstructs the word pair, that
//! the seeded path is deterministic, and that the unseeded fingerprint equals
//! the seeded hash under the published first-16-byte seeding rule, for
//! arbitrary inputs of any length.

#![no_main]

use hashes::fast::{FarmHash128, Fingerprint128, fingerprint128};
use libfuzzer_sys::fuzz_target;
use traits::FastHash as _;

const K0: u64 = 0xc3a5c85c97cb3127;
const K1: u64 = 0xb492b66fbe98f273;

fuzz_target!(|input: &[u8]| {
  let ours = fingerprint128(input);

  // Wire form must reconstruct the word pair on any input.
  let wire = ours.to_le_bytes();
  assert_eq!(Fingerprint128::from_le_bytes(wire), ours);

  // The unseeded entry point is the seeded one with the published seeding rule.
  let expected = if input.len() >= 16 {
    let lo = u64::from_le_bytes(input[..8].try_into().unwrap());
    let hi = u64::from_le_bytes(input[8..16].try_into().unwrap()).wrapping_add(K0);
    FarmHash128::hash_with_seed(Fingerprint128::new(lo, hi), &input[16..])
  } else {
    FarmHash128::hash_with_seed(Fingerprint128::new(K0, K1), input)
  };
  assert_eq!(ours, expected, "seeding rule mismatch at len={}", input.len());

  // The seeded path must be deterministic and total for every length.
  let (seed_bytes, data) = input.split_at(core::cmp::min(16, input.len()));
  let mut seed = [0u8; 16];
  seed[..seed_bytes.len()].copy_from_slice(seed_bytes);
  let seed = Fingerprint128::from_le_bytes(seed);
  assert_eq!(
    FarmHash128::hash_with_seed(seed, data),
    FarmHash128::hash_with_seed(seed, data)
  );
});
