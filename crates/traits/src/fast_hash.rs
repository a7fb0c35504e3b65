//! Fast non-cryptographic hash traits (**NOT CRYPTO**).

use core::fmt::Debug;

/// A fast, seeded, one-shot non-cryptographic hash.
///
/// These hashes are suitable for hash tables, sharding, partitioning, and
/// other non-adversarial settings. They are **not** suitable for signatures,
/// MACs, password hashing, or untrusted inputs where collision attacks matter.
///
/// This trait is intentionally one-shot: the whole input must be resident in
/// memory. Streaming APIs require algorithm-specific buffering and are out of
/// scope here.
pub trait FastHash {
  /// Output size in bytes.
  const OUTPUT_SIZE: usize;

  /// Hash output type.
  type Output: Copy + Eq + Debug + Default;

  /// Seed type (a `u64` or a pair of 64-bit words, depending on the algorithm).
  type Seed: Copy + Debug + Default;

  /// Compute the hash of `data` using a default seed.
  #[inline]
  #[must_use]
  fn hash(data: &[u8]) -> Self::Output {
    Self::hash_with_seed(Self::Seed::default(), data)
  }

  /// Compute the hash of `data` using `seed`.
  #[must_use]
  fn hash_with_seed(seed: Self::Seed, data: &[u8]) -> Self::Output;
}

/// A stable, unseeded fingerprint for identification and deduplication.
///
/// A fingerprint is a published, frozen function of the input bytes: every
/// implementation on every platform must return the same value forever, so it
/// can be persisted, compared across processes, and used as a partitioning or
/// deduplication key.
///
/// Note that [`Fingerprint::fingerprint`] is a distinct operation from
/// [`FastHash::hash`]: algorithms may derive the fingerprint seed from the
/// input itself rather than using the default seed.
pub trait Fingerprint: FastHash {
  /// Compute the canonical fingerprint of `data`.
  #[must_use]
  fn fingerprint(data: &[u8]) -> Self::Output;
}
