//! Standard Bloom filter guarded by a reader-writer lock.
//!
//! # Algorithm
//!
//! The filter owns `m` bits and a probe count `k`. Each element is hashed
//! once to 64 bits; [`DoubleHashing`] turns that hash into `k` positions
//! `(h₁ + i·h₂) mod m`. `insert` sets those bits, `contains` tests them.
//!
//! # Properties
//!
//! - **False negatives**: never. After `insert(x)`, `contains(x)` is `true`.
//! - **False positives**: possible. About `p` once the filter holds the `n`
//!   items it was sized for, and rising beyond that as the bit array
//!   saturates. This is inherent to the structure; [`BloomFilter::health_check`]
//!   reports it.
//! - **Monotonic**: bits are only ever set. There is no remove or clear.
//! - **Time**: one hash plus O(k) bit operations per call.
//! - **Space**: `⌈m/8⌉` bytes.
//!
//! # Concurrency Model
//!
//! A single `parking_lot::RwLock` guards the whole bit array:
//!
//! | Operation          | Lock  | Held for                          |
//! |--------------------|-------|-----------------------------------|
//! | `insert()`         | Write | setting the k bits                |
//! | `insert_batch()`   | Write | setting every item's bits         |
//! | `contains()`       | Read  | testing bits until the first miss |
//! | `contains_batch()` | Read  | testing every item                |
//!
//! Hashing happens before the lock is taken. Concurrent queries proceed in
//! parallel; a query never observes a byte mid-write. `m`, `k` and the hasher
//! are immutable and read without locking. There is one lock and no nested
//! acquisition, so operations cannot deadlock.
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```
//! use bloomguard::BloomFilter;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let filter = BloomFilter::from_estimate(10_000, 0.01)?;
//!
//! filter.insert(b"hello");
//! filter.insert(b"world");
//!
//! assert!(filter.contains(b"hello"));
//! assert!(filter.contains(b"world"));
//! assert!(!filter.contains(b"goodbye"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Concurrent Inserts and Queries
//!
//! ```
//! use bloomguard::BloomFilter;
//! use std::sync::Arc;
//! use std::thread;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let filter = Arc::new(BloomFilter::from_estimate(10_000, 0.01)?);
//!
//! let handles: Vec<_> = (0..4).map(|tid| {
//!     let f = Arc::clone(&filter);
//!     thread::spawn(move || {
//!         for i in 0..1000 {
//!             f.insert(format!("item-{}-{}", tid, i).as_bytes());
//!         }
//!     })
//! }).collect();
//!
//! for h in handles {
//!     h.join().unwrap();
//! }
//!
//! assert!(filter.contains(b"item-0-42"));
//! # Ok(())
//! # }
//! ```
//!
//! # References
//!
//! - Bloom, B. H. (1970). "Space/time trade-offs in hash coding with allowable errors"
//! - Kirsch, A., & Mitzenmacher, M. (2006). "Less Hashing, Same Performance: Building a Better Bloom Filter"

#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

use crate::core::bitvec::BitVec;
use crate::core::filter::SharedBloomFilter;
use crate::core::params::estimate_parameters;
use crate::error::{BloomError, Result};
use crate::hash::{BloomHasher, DoubleHashing, Fnv1aHasher, Probes};
use parking_lot::RwLock;

/// Fill rate below which a filter may be reported healthy.
const HEALTHY_FILL_RATE: f64 = 0.6;

/// Fill rate below which a filter may be reported degraded rather than critical.
const DEGRADED_FILL_RATE: f64 = 0.75;

/// Health status of a Bloom filter for monitoring and alerting.
///
/// # Health States
///
/// - **Healthy**: fill rate < 60% and estimated FPR < 2× target
/// - **Degraded**: fill rate < 75% and estimated FPR < 5× target
/// - **Critical**: the filter is saturated well past its design capacity
///
/// Filters built from explicit `(m, k)` have no target rate; their
/// `fpr_ratio` is `None` and only the fill rate is graded.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterHealth {
    /// Filter is operating within healthy parameters.
    Healthy {
        /// Fill rate of the filter (0.0 to 1.0).
        fill_rate: f64,
        /// Current estimated false positive rate.
        current_fpr: f64,
        /// Estimated number of items in the filter.
        estimated_items: usize,
    },
    /// Filter accuracy is degrading but still usable.
    Degraded {
        /// Fill rate of the filter (0.0 to 1.0).
        fill_rate: f64,
        /// Current estimated false positive rate.
        current_fpr: f64,
        /// Ratio of current FPR to target FPR, when a target is known.
        fpr_ratio: Option<f64>,
        /// Estimated number of items in the filter.
        estimated_items: usize,
        /// Recommended action.
        recommendation: &'static str,
    },
    /// Filter is saturated and answers `true` far too often.
    Critical {
        /// Fill rate of the filter (0.0 to 1.0).
        fill_rate: f64,
        /// Current estimated false positive rate.
        current_fpr: f64,
        /// Ratio of current FPR to target FPR, when a target is known.
        fpr_ratio: Option<f64>,
        /// Estimated number of items in the filter.
        estimated_items: usize,
        /// Recommended action.
        recommendation: &'static str,
    },
}

impl FilterHealth {
    /// Fill rate for this health status.
    #[must_use]
    pub fn fill_rate(&self) -> f64 {
        match self {
            Self::Healthy { fill_rate, .. }
            | Self::Degraded { fill_rate, .. }
            | Self::Critical { fill_rate, .. } => *fill_rate,
        }
    }

    /// Estimated false positive rate for this health status.
    #[must_use]
    pub fn current_fpr(&self) -> f64 {
        match self {
            Self::Healthy { current_fpr, .. }
            | Self::Degraded { current_fpr, .. }
            | Self::Critical { current_fpr, .. } => *current_fpr,
        }
    }

    /// Estimated item count for this health status.
    #[must_use]
    pub fn estimated_items(&self) -> usize {
        match self {
            Self::Healthy { estimated_items, .. }
            | Self::Degraded { estimated_items, .. }
            | Self::Critical { estimated_items, .. } => *estimated_items,
        }
    }

    /// Check if filter is healthy.
    #[must_use]
    pub fn is_healthy(&self) -> bool {
        matches!(self, Self::Healthy { .. })
    }

    /// Check if filter is degraded.
    #[must_use]
    pub fn is_degraded(&self) -> bool {
        matches!(self, Self::Degraded { .. })
    }

    /// Check if filter is critical.
    #[must_use]
    pub fn is_critical(&self) -> bool {
        matches!(self, Self::Critical { .. })
    }
}

impl std::fmt::Display for FilterHealth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FilterHealth::Healthy {
                fill_rate,
                current_fpr,
                estimated_items,
            } => write!(
                f,
                "[OK] Healthy: Fill {:.1}%, FPR {:.4}, Items ~{}",
                fill_rate * 100.0,
                current_fpr,
                estimated_items
            ),
            FilterHealth::Degraded {
                fill_rate,
                current_fpr,
                fpr_ratio,
                recommendation,
                ..
            } => {
                write!(f, "[WARN] Degraded: Fill {:.1}%, ", fill_rate * 100.0)?;
                write_fpr(f, *current_fpr, *fpr_ratio)?;
                write!(f, " - {}", recommendation)
            }
            FilterHealth::Critical {
                fill_rate,
                current_fpr,
                fpr_ratio,
                recommendation,
                ..
            } => {
                write!(f, "[CRIT] Critical: Fill {:.1}%, ", fill_rate * 100.0)?;
                write_fpr(f, *current_fpr, *fpr_ratio)?;
                write!(f, " - {}", recommendation)
            }
        }
    }
}

fn write_fpr(
    f: &mut std::fmt::Formatter<'_>,
    current_fpr: f64,
    fpr_ratio: Option<f64>,
) -> std::fmt::Result {
    match fpr_ratio {
        Some(ratio) => write!(f, "FPR {:.1}× target", ratio),
        None => write!(f, "FPR {:.4}", current_fpr),
    }
}

/// Bloom filter over byte slices.
///
/// # Type Parameters
///
/// * `H` - Hash function (must implement [`BloomHasher`]); defaults to FNV-1a 64
///
/// # Thread Safety
///
/// `BloomFilter` is `Send + Sync`. Share it with `Arc<BloomFilter>`;
/// `insert` and `contains` both take `&self`.
#[derive(Debug)]
pub struct BloomFilter<H = Fnv1aHasher>
where
    H: BloomHasher,
{
    /// Bit array; write-locked by inserts, read-locked by queries
    bits: RwLock<BitVec>,

    /// Number of bits (m)
    m: usize,

    /// Probes per element (k)
    k: usize,

    hasher: H,

    /// Expected number of items, when sized from an estimate
    expected_items: Option<usize>,

    /// Target false positive rate, when sized from an estimate
    target_fpr: Option<f64>,
}

impl<H> Clone for BloomFilter<H>
where
    H: BloomHasher + Clone,
{
    fn clone(&self) -> Self {
        Self {
            bits: RwLock::new(self.bits.read().clone()),
            m: self.m,
            k: self.k,
            hasher: self.hasher.clone(),
            expected_items: self.expected_items,
            target_fpr: self.target_fpr,
        }
    }
}

impl BloomFilter<Fnv1aHasher> {
    /// Create an empty filter of `m` bits probed `k` times per element.
    ///
    /// Allocates exactly `⌈m/8⌉` zeroed bytes.
    ///
    /// # Errors
    ///
    /// - [`BloomError::InvalidFilterSize`] if `m == 0`
    /// - [`BloomError::InvalidHashCount`] if `k == 0`
    ///
    /// # Examples
    ///
    /// ```
    /// use bloomguard::BloomFilter;
    ///
    /// let filter = BloomFilter::new(64, 3).unwrap();
    /// assert_eq!(filter.byte_len(), 8);
    ///
    /// let filter = BloomFilter::new(65, 3).unwrap();
    /// assert_eq!(filter.byte_len(), 9);
    ///
    /// assert!(BloomFilter::new(0, 3).is_err());
    /// assert!(BloomFilter::new(64, 0).is_err());
    /// ```
    pub fn new(m: usize, k: usize) -> Result<Self> {
        Self::with_hasher(m, k, Fnv1aHasher::new())
    }

    /// Create a filter sized for `n` items at false positive rate `p`.
    ///
    /// Equivalent to [`estimate_parameters`] followed by [`BloomFilter::new`],
    /// and additionally records `n` and `p` for [`health_check`](Self::health_check).
    ///
    /// # Errors
    ///
    /// Any error from [`estimate_parameters`].
    ///
    /// # Examples
    ///
    /// ```
    /// use bloomguard::BloomFilter;
    ///
    /// let filter = BloomFilter::from_estimate(1000, 0.01).unwrap();
    /// assert_eq!(filter.bit_count(), 9586);
    /// assert_eq!(filter.hash_count(), 7);
    /// assert_eq!(filter.expected_items(), Some(1000));
    /// ```
    pub fn from_estimate(n: usize, p: f64) -> Result<Self> {
        let (m, k) = estimate_parameters(n, p)?;
        Self::from_parts(m, k, Fnv1aHasher::new(), Some((n, p)))
    }
}

impl<H> BloomFilter<H>
where
    H: BloomHasher,
{
    /// Create an empty filter of `m` bits and `k` probes using a custom hasher.
    ///
    /// # Errors
    ///
    /// Same as [`BloomFilter::new`].
    pub fn with_hasher(m: usize, k: usize, hasher: H) -> Result<Self> {
        Self::from_parts(m, k, hasher, None)
    }

    pub(crate) fn from_parts(
        m: usize,
        k: usize,
        hasher: H,
        design: Option<(usize, f64)>,
    ) -> Result<Self> {
        if m == 0 {
            return Err(BloomError::invalid_filter_size(m));
        }
        if k == 0 {
            return Err(BloomError::invalid_hash_count(k));
        }

        let bits = BitVec::new(m)?;

        tracing::debug!(
            m,
            k,
            bytes = bits.byte_len(),
            hasher = hasher.name(),
            "created bloom filter"
        );

        Ok(Self {
            bits: RwLock::new(bits),
            m,
            k,
            hasher,
            expected_items: design.map(|(n, _)| n),
            target_fpr: design.map(|(_, p)| p),
        })
    }

    /// Derive the `k` probe positions for `data`.
    #[inline]
    fn probes(&self, data: &[u8]) -> Probes {
        self.probes_for_hash(self.hasher.hash_bytes(data))
    }

    #[inline]
    fn probes_for_hash(&self, hash: u64) -> Probes {
        DoubleHashing.probes(hash, self.k, self.m)
    }

    /// Insert an element.
    ///
    /// Sets all `k` probe bits under the write lock. Idempotent: inserting
    /// the same bytes again changes nothing.
    #[inline]
    pub fn insert(&self, data: &[u8]) {
        #[cfg(feature = "trace")]
        tracing::trace!(len = data.len(), "BloomFilter::insert");

        let probes = self.probes(data);
        let mut bits = self.bits.write();
        for pos in probes {
            bits.set(pos);
        }
    }

    /// Check whether an element might be in the filter.
    ///
    /// # Returns
    ///
    /// - `true`: the element might be in the set (or this is a false positive)
    /// - `false`: the element is definitely not in the set
    ///
    /// Stops at the first unset probe bit.
    #[must_use]
    #[inline]
    pub fn contains(&self, data: &[u8]) -> bool {
        #[cfg(feature = "trace")]
        tracing::trace!(len = data.len(), "BloomFilter::contains");

        let mut probes = self.probes(data);
        let bits = self.bits.read();
        probes.all(|pos| bits.get(pos))
    }

    /// Insert many elements under a single write lock acquisition.
    ///
    /// All hashes are computed before the lock is taken.
    pub fn insert_batch<'a, I>(&self, items: I)
    where
        I: IntoIterator<Item = &'a [u8]>,
    {
        let hashes: Vec<u64> = items
            .into_iter()
            .map(|item| self.hasher.hash_bytes(item))
            .collect();

        #[cfg(feature = "trace")]
        tracing::trace!(items = hashes.len(), "BloomFilter::insert_batch");

        let mut bits = self.bits.write();
        for hash in hashes {
            for pos in self.probes_for_hash(hash) {
                bits.set(pos);
            }
        }
    }

    /// Query many elements under a single read lock acquisition.
    #[must_use]
    pub fn contains_batch<'a, I>(&self, items: I) -> Vec<bool>
    where
        I: IntoIterator<Item = &'a [u8]>,
    {
        let hashes: Vec<u64> = items
            .into_iter()
            .map(|item| self.hasher.hash_bytes(item))
            .collect();

        let bits = self.bits.read();
        hashes
            .into_iter()
            .map(|hash| self.probes_for_hash(hash).all(|pos| bits.get(pos)))
            .collect()
    }

    /// Size of the filter in bits (m).
    #[must_use]
    #[inline]
    pub fn bit_count(&self) -> usize {
        self.m
    }

    /// Probes per element (k).
    #[must_use]
    #[inline]
    pub fn hash_count(&self) -> usize {
        self.k
    }

    /// Bytes in the bit array, `⌈m/8⌉`.
    #[must_use]
    pub fn byte_len(&self) -> usize {
        self.m.div_ceil(8)
    }

    /// Expected item count, if the filter was sized from an estimate.
    #[must_use]
    pub fn expected_items(&self) -> Option<usize> {
        self.expected_items
    }

    /// Target false positive rate, if the filter was sized from an estimate.
    #[must_use]
    pub fn target_fpr(&self) -> Option<f64> {
        self.target_fpr
    }

    /// Name of the hash function.
    #[must_use]
    pub fn hasher_name(&self) -> &'static str {
        self.hasher.name()
    }

    /// Number of bits currently set.
    #[must_use]
    pub fn count_set_bits(&self) -> usize {
        self.bits.read().count_ones()
    }

    /// Fraction of bits set, in [0, 1].
    #[must_use]
    pub fn fill_rate(&self) -> f64 {
        self.count_set_bits() as f64 / self.m as f64
    }

    /// `true` if no element has been inserted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count_set_bits() == 0
    }

    /// Estimate the current false positive rate from the fill rate.
    ///
    /// A non-member passes when all `k` probes hit set bits, so the estimate
    /// is `fill_rate^k`. This equals `(1 - e^(-kn/m))^k` with `n` taken from
    /// [`estimate_cardinality`](Self::estimate_cardinality).
    #[must_use]
    pub fn estimate_fpr(&self) -> f64 {
        self.fill_rate().powf(self.k as f64)
    }

    /// Estimate the number of distinct items inserted.
    ///
    /// Uses `n ≈ -(m/k) × ln(1 - X/m)` where `X` is the number of set bits.
    /// Returns `usize::MAX` once every bit is set.
    #[must_use]
    pub fn estimate_cardinality(&self) -> usize {
        let set_bits = self.count_set_bits();
        if set_bits == 0 {
            return 0;
        }
        if set_bits >= self.m {
            return usize::MAX;
        }

        let m = self.m as f64;
        let k = self.k as f64;
        let estimated_n = -(m / k) * (1.0 - set_bits as f64 / m).ln();

        estimated_n.round().max(0.0) as usize
    }

    /// Grade the filter's saturation.
    ///
    /// Logs a warning when the filter is degraded or critical.
    ///
    /// # Examples
    ///
    /// ```
    /// use bloomguard::{BloomFilter, FilterHealth};
    ///
    /// let filter = BloomFilter::from_estimate(1000, 0.01).unwrap();
    /// for i in 0..500u32 {
    ///     filter.insert(&i.to_le_bytes());
    /// }
    ///
    /// match filter.health_check() {
    ///     FilterHealth::Healthy { .. } => {}
    ///     other => panic!("unexpected: {other}"),
    /// }
    /// ```
    #[must_use]
    pub fn health_check(&self) -> FilterHealth {
        let fill_rate = self.fill_rate();
        let current_fpr = self.estimate_fpr();
        let estimated_items = self.estimate_cardinality();

        let fpr_ratio = self.target_fpr.map(|target| current_fpr / target);
        let ratio_below = |limit: f64| fpr_ratio.map_or(true, |ratio| ratio < limit);

        let health = if fill_rate < HEALTHY_FILL_RATE && ratio_below(2.0) {
            FilterHealth::Healthy {
                fill_rate,
                current_fpr,
                estimated_items,
            }
        } else if fill_rate < DEGRADED_FILL_RATE && ratio_below(5.0) {
            FilterHealth::Degraded {
                fill_rate,
                current_fpr,
                fpr_ratio,
                estimated_items,
                recommendation: "Filter is past its design capacity; plan a larger replacement",
            }
        } else {
            FilterHealth::Critical {
                fill_rate,
                current_fpr,
                fpr_ratio,
                estimated_items,
                recommendation: "Filter is saturated; rebuild it with a larger expected item count",
            }
        };

        if !health.is_healthy() {
            tracing::warn!(
                fill_rate,
                current_fpr,
                fpr_ratio,
                estimated_items,
                m = self.m,
                k = self.k,
                "bloom filter saturation"
            );
        }

        health
    }

    /// Copy of the bit array bytes (bit `pos` at byte `pos / 8`, offset `pos % 8`).
    ///
    /// For inspection and comparison only; there is no way to load a filter
    /// from these bytes.
    #[must_use]
    pub fn snapshot(&self) -> Vec<u8> {
        self.bits.read().as_bytes().to_vec()
    }

    /// Approximate memory usage in bytes.
    #[must_use]
    pub fn memory_usage(&self) -> usize {
        self.bits.read().memory_usage() + std::mem::size_of::<Self>()
    }
}

impl<H> SharedBloomFilter for BloomFilter<H>
where
    H: BloomHasher,
{
    fn insert(&self, data: &[u8]) {
        BloomFilter::insert(self, data);
    }

    fn contains(&self, data: &[u8]) -> bool {
        BloomFilter::contains(self, data)
    }

    fn bit_count(&self) -> usize {
        self.m
    }

    fn hash_count(&self) -> usize {
        self.k
    }

    fn false_positive_rate(&self) -> f64 {
        self.estimate_fpr()
    }

    fn insert_batch<'a, I>(&self, items: I)
    where
        I: IntoIterator<Item = &'a [u8]>,
    {
        BloomFilter::insert_batch(self, items);
    }

    fn contains_batch<'a, I>(&self, items: I) -> Vec<bool>
    where
        I: IntoIterator<Item = &'a [u8]>,
    {
        BloomFilter::contains_batch(self, items)
    }
}
