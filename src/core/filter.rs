//! Shared-access Bloom filter trait.
//!
//! Filters in this crate take `&self` for both insertion and query and
//! synchronize internally, so they can be shared through an `Arc` without an
//! outer `Mutex`. The trait operates on byte slices; callers choose how their
//! values are encoded before hashing.

/// Bloom filter operations through a shared reference.
///
/// # Contract
///
/// - **No false negatives**: after `insert(x)` returns, every later
///   `contains(x)` returns `true`, from any thread.
/// - **False positives**: `contains(y)` may return `true` for a `y` that was
///   never inserted. The probability approaches the target rate at the
///   designed capacity and grows as more items are added (saturation).
/// - **Monotonic**: no operation removes an item.
///
/// # Examples
///
/// ```
/// use bloomguard::core::SharedBloomFilter;
/// use bloomguard::BloomFilter;
///
/// fn record<F: SharedBloomFilter>(filter: &F, keys: &[&[u8]]) {
///     filter.insert_batch(keys.iter().copied());
/// }
///
/// let filter = BloomFilter::new(1024, 3).unwrap();
/// record(&filter, &[b"alpha", b"beta"]);
/// assert!(filter.contains_all([b"alpha".as_slice(), b"beta".as_slice()]));
/// ```
pub trait SharedBloomFilter: Send + Sync {
    /// Insert an element. Idempotent and infallible.
    fn insert(&self, data: &[u8]);

    /// Test membership. `false` means definitely absent.
    fn contains(&self, data: &[u8]) -> bool;

    /// Total number of bits (m).
    fn bit_count(&self) -> usize;

    /// Probes per element (k).
    fn hash_count(&self) -> usize;

    /// Estimated false positive rate at the current fill level.
    fn false_positive_rate(&self) -> f64;

    /// Insert every element of `items`.
    fn insert_batch<'a, I>(&self, items: I)
    where
        I: IntoIterator<Item = &'a [u8]>,
    {
        for item in items {
            self.insert(item);
        }
    }

    /// Query every element of `items`, in order.
    fn contains_batch<'a, I>(&self, items: I) -> Vec<bool>
    where
        I: IntoIterator<Item = &'a [u8]>,
    {
        items.into_iter().map(|item| self.contains(item)).collect()
    }

    /// `true` if every element might be present.
    fn contains_all<'a, I>(&self, items: I) -> bool
    where
        I: IntoIterator<Item = &'a [u8]>,
    {
        items.into_iter().all(|item| self.contains(item))
    }

    /// `true` if at least one element might be present.
    fn contains_any<'a, I>(&self, items: I) -> bool
    where
        I: IntoIterator<Item = &'a [u8]>,
    {
        items.into_iter().any(|item| self.contains(item))
    }
}
