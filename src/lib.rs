//! bloomguard: a concurrent Bloom filter with optimal parameter estimation.
//!
//! A Bloom filter is a space-efficient probabilistic set. It can produce:
//! - **False positives**: may report an element present when it isn't
//! - **Zero false negatives**: if it says an element isn't in the set, it definitely isn't
//!
//! # Quick Start
//!
//! ```
//! use bloomguard::{estimate_parameters, BloomFilter};
//!
//! # fn main() -> bloomguard::Result<()> {
//! // Size for 1,000 items at a 1% false positive rate
//! let (m, k) = estimate_parameters(1000, 0.01)?;
//! assert_eq!((m, k), (9586, 7));
//!
//! let filter = BloomFilter::new(m, k)?;
//! filter.insert(b"hello");
//! filter.insert(b"world");
//!
//! assert!(filter.contains(b"hello"));    // true - probably in set
//! assert!(!filter.contains(b"goodbye")); // false - definitely not in set
//! # Ok(())
//! # }
//! ```
//!
//! # Concurrency
//!
//! `insert` and `contains` take `&self`. One `parking_lot::RwLock` guards the
//! bit array: inserts take it for writing, queries for reading. Share a filter
//! with `Arc` and no outer `Mutex`:
//!
//! ```
//! use bloomguard::BloomFilter;
//! use std::sync::Arc;
//!
//! let filter = Arc::new(BloomFilter::from_estimate(10_000, 0.01).unwrap());
//!
//! let writer = Arc::clone(&filter);
//! std::thread::spawn(move || writer.insert(b"from-thread"))
//!     .join()
//!     .unwrap();
//!
//! assert!(filter.contains(b"from-thread"));
//! ```
//!
//! # Using the Builder
//!
//! ```
//! use bloomguard::builder::BloomFilterBuilder;
//!
//! let filter = BloomFilterBuilder::new()
//!     .expected_items(10_000)
//!     .false_positive_rate(0.01)
//!     .build()
//!     .unwrap();
//! assert!(filter.is_empty());
//! ```
//!
//! # Features
//!
//! - `trace` - `tracing::trace!` events on every insert and query
//! - `xxhash` - [`hash::XxHasher`](hash) backed by XXH3
//!
//! # Logging
//!
//! The crate emits `tracing` events (construction and estimation at `debug`,
//! saturation at `warn`). It never installs a subscriber.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

/// Core data structures and traits
pub mod core;

/// Error types and result aliases
pub mod error;

/// Filter implementations
pub mod filters;

/// Hash functions and probe strategies
pub mod hash;

/// Type-safe builder
pub mod builder;

pub use error::{BloomError, Result};

pub use crate::core::filter::SharedBloomFilter;
pub use crate::core::params::{estimate_parameters, FilterParams};

pub use filters::{BloomFilter, FilterHealth};

pub use builder::BloomFilterBuilder;

pub use hash::{BloomHasher, Fnv1aHasher};

/// Prelude module for convenient imports.
///
/// # Examples
///
/// ```
/// use bloomguard::prelude::*;
///
/// let filter = BloomFilter::from_estimate(1000, 0.01).unwrap();
/// filter.insert(b"hello");
/// assert!(filter.contains(b"hello"));
/// ```
pub mod prelude {
    pub use crate::builder::BloomFilterBuilder;
    pub use crate::core::filter::SharedBloomFilter;
    pub use crate::core::params::{estimate_parameters, FilterParams};
    pub use crate::error::{BloomError, Result};
    pub use crate::filters::{BloomFilter, FilterHealth};
    pub use crate::hash::{BloomHasher, DoubleHashing, Fnv1aHasher};

    #[cfg(feature = "xxhash")]
    pub use crate::hash::XxHasher;
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_imports() {
        let filter = BloomFilter::new(100, 3).unwrap();
        filter.insert(b"test");
        assert!(filter.contains(b"test"));
    }

    #[test]
    fn test_trait_usage() {
        fn record<F: SharedBloomFilter>(filter: &F) {
            filter.insert(b"item");
            assert!(filter.contains(b"item"));
        }

        let filter = BloomFilter::from_estimate(100, 0.01).unwrap();
        record(&filter);
    }

    #[test]
    fn test_estimate_then_construct() {
        let (m, k) = estimate_parameters(1000, 0.01).unwrap();
        let filter = BloomFilter::new(m, k).unwrap();
        assert_eq!(filter.byte_len(), 1199);
    }

    #[test]
    fn test_builder() {
        let filter = BloomFilterBuilder::new().dimensions(64, 1).build().unwrap();
        assert!(filter.is_empty());
    }

    #[test]
    fn test_error_reexport() {
        let err = BloomFilter::new(0, 1).unwrap_err();
        assert!(matches!(err, BloomError::InvalidFilterSize { .. }));
    }

    #[test]
    fn test_shared_across_threads() {
        use std::sync::Arc;

        let filter = Arc::new(BloomFilter::from_estimate(1000, 0.01).unwrap());
        let filter_clone = Arc::clone(&filter);
        let handle = std::thread::spawn(move || {
            filter_clone.insert(b"thread_item");
        });
        handle.join().unwrap();
        assert!(filter.contains(b"thread_item"));
    }
}
