//! Hash function trait and implementations for Bloom filters.
//!
//! Hash functions operate on byte slices and produce one 64-bit value.
//! [`DoubleHashing`](super::strategies::DoubleHashing) then splits that value
//! into the `k` probe positions.
//!
//! # Determinism
//!
//! A filter's hasher is fixed when the filter is built. Changing the hash
//! between `insert` and `contains` of the same data would break the
//! no-false-negatives guarantee, so hashers carry no per-process randomness.
//!
//! # Examples
//!
//! ```
//! use bloomguard::hash::{BloomHasher, Fnv1aHasher};
//!
//! let hasher = Fnv1aHasher::new();
//! assert_eq!(hasher.hash_bytes(b""), 0xcbf2_9ce4_8422_2325);
//! assert_eq!(hasher.hash_bytes(b"a"), 0xaf63_dc4c_8601_ec8c);
//! ```

#![allow(clippy::module_name_repetitions)]

/// Base hasher trait for Bloom filter hash functions.
///
/// # Requirements
///
/// - **Determinism**: same input, same output, across calls and processes
/// - **Uniform distribution** over the full `u64` range; both 32-bit halves
///   are used as independent inputs to double hashing
///
/// All implementations must be `Send + Sync` so filters can be shared
/// between threads.
pub trait BloomHasher: Send + Sync {
    /// Hash arbitrary bytes to a 64-bit value.
    fn hash_bytes(&self, bytes: &[u8]) -> u64;

    /// Human-readable name for debugging.
    fn name(&self) -> &'static str;
}

/// FNV-1a 64-bit offset basis.
const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;

/// FNV-1a 64-bit prime.
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// FNV-1a 64-bit hasher (the default).
///
/// Non-cryptographic, byte-at-a-time, and fully deterministic. The output is
/// the standard FNV-1a 64 digest with no seed mixed in, so bit positions are
/// reproducible by any other FNV-1a based filter using the same probe scheme.
///
/// # Performance
///
/// One xor and one multiply per byte. For long keys (hundreds of bytes and
/// up) consider `XxHasher` behind the `xxhash` feature.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Fnv1aHasher;

impl Fnv1aHasher {
    /// Create a new FNV-1a hasher.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

/// Streaming FNV-1a state, usable as a `std::hash::Hasher`.
///
/// # Examples
///
/// ```
/// use bloomguard::hash::hasher::Fnv1aState;
/// use std::hash::Hasher;
///
/// let mut state = Fnv1aState::new();
/// state.write(b"hello ");
/// state.write(b"world");
/// assert_eq!(state.finish(), 0x779a_65e7_023c_d2e7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fnv1aState(u64);

impl Fnv1aState {
    /// Fresh state at the FNV-1a offset basis.
    #[must_use]
    pub const fn new() -> Self {
        Self(FNV_OFFSET_BASIS)
    }
}

impl Default for Fnv1aState {
    fn default() -> Self {
        Self::new()
    }
}

impl std::hash::Hasher for Fnv1aState {
    fn write(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.0 ^= u64::from(byte);
            self.0 = self.0.wrapping_mul(FNV_PRIME);
        }
    }

    fn finish(&self) -> u64 {
        self.0
    }
}

impl BloomHasher for Fnv1aHasher {
    #[inline]
    fn hash_bytes(&self, bytes: &[u8]) -> u64 {
        use std::hash::Hasher;

        let mut state = Fnv1aState::new();
        state.write(bytes);
        state.finish()
    }

    #[inline]
    fn name(&self) -> &'static str {
        "Fnv1a64"
    }
}

/// XXH3 64-bit hasher (feature `xxhash`).
///
/// Faster than FNV-1a on long keys and with stronger avalanche. Produces
/// different bit positions than [`Fnv1aHasher`], so filters built with one
/// cannot be queried with the other.
#[cfg(feature = "xxhash")]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct XxHasher {
    seed: u64,
}

#[cfg(feature = "xxhash")]
impl XxHasher {
    /// Create a new XXH3 hasher with seed 0.
    #[must_use]
    pub const fn new() -> Self {
        Self { seed: 0 }
    }

    /// Create a new XXH3 hasher with an explicit seed.
    #[must_use]
    pub const fn with_seed(seed: u64) -> Self {
        Self { seed }
    }
}

#[cfg(feature = "xxhash")]
impl BloomHasher for XxHasher {
    #[inline]
    fn hash_bytes(&self, bytes: &[u8]) -> u64 {
        if self.seed == 0 {
            xxhash_rust::xxh3::xxh3_64(bytes)
        } else {
            xxhash_rust::xxh3::xxh3_64_with_seed(bytes, self.seed)
        }
    }

    #[inline]
    fn name(&self) -> &'static str {
        "XXH3-64"
    }
}
