//! Builder for Bloom filters.
//!
//! # Type-State Pattern
//!
//! The builder tracks which sizing parameters are present in its type, so
//! `build()` only exists once the filter can actually be sized:
//!
//! ```text
//! Initial ──.expected_items(n)──▶ WithItems ──.false_positive_rate(p)──▶ Complete ──.build()──▶ BloomFilter
//!    │                                                                      ▲
//!    └───────────────────────────.dimensions(m, k)─────────────────────────┘
//! ```
//!
//! `.hasher(h)` is accepted in every state.
//!
//! # Examples
//!
//! ## Sized From Expected Load
//!
//! ```
//! use bloomguard::builder::BloomFilterBuilder;
//!
//! let filter = BloomFilterBuilder::new()
//!     .expected_items(10_000)
//!     .false_positive_rate(0.01)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(filter.expected_items(), Some(10_000));
//! ```
//!
//! ## Explicit Dimensions
//!
//! ```
//! use bloomguard::builder::BloomFilterBuilder;
//!
//! let filter = BloomFilterBuilder::new().dimensions(1024, 3).build().unwrap();
//! assert_eq!(filter.bit_count(), 1024);
//! assert_eq!(filter.hash_count(), 3);
//! ```
//!
//! ## Error Handling
//!
//! ```
//! use bloomguard::builder::BloomFilterBuilder;
//!
//! let result = BloomFilterBuilder::new()
//!     .expected_items(0)
//!     .false_positive_rate(0.01)
//!     .build();
//!
//! assert!(result.is_err());
//! ```

use crate::core::params::FilterParams;
use crate::error::{BloomError, Result};
use crate::filters::standard::BloomFilter;
use crate::hash::{BloomHasher, DefaultHasher};
use std::marker::PhantomData;

/// Type-state marker: Initial state (no parameters set).
#[derive(Debug)]
pub struct Initial;

/// Type-state marker: Items count is set.
#[derive(Debug)]
pub struct WithItems;

/// Type-state marker: All required parameters set.
#[derive(Debug)]
pub struct Complete;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Sizing {
    Unset,
    Items(usize),
    Estimate { items: usize, fp_rate: f64 },
    Dimensions { bits: usize, hashes: usize },
}

/// Builder for [`BloomFilter`] with type-state guarantees.
///
/// # Type Parameters
///
/// - `State`: Current builder state (`Initial`, `WithItems`, `Complete`)
/// - `H`: Hash function type (defaults to [`DefaultHasher`])
#[derive(Debug)]
pub struct BloomFilterBuilder<State, H = DefaultHasher> {
    sizing: Sizing,
    hasher: H,
    _state: PhantomData<State>,
}

impl BloomFilterBuilder<Initial, DefaultHasher> {
    /// Create a new builder using the default FNV-1a hasher.
    #[must_use]
    pub fn new() -> Self {
        Self {
            sizing: Sizing::Unset,
            hasher: DefaultHasher::new(),
            _state: PhantomData,
        }
    }
}

impl Default for BloomFilterBuilder<Initial, DefaultHasher> {
    fn default() -> Self {
        Self::new()
    }
}

impl<State, H> BloomFilterBuilder<State, H> {
    fn transition<Next>(self, sizing: Sizing) -> BloomFilterBuilder<Next, H> {
        BloomFilterBuilder {
            sizing,
            hasher: self.hasher,
            _state: PhantomData,
        }
    }

    /// Replace the hash function.
    ///
    /// # Examples
    ///
    /// ```
    /// use bloomguard::builder::BloomFilterBuilder;
    /// use bloomguard::hash::Fnv1aHasher;
    ///
    /// let filter = BloomFilterBuilder::new()
    ///     .hasher(Fnv1aHasher::new())
    ///     .dimensions(512, 4)
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(filter.hasher_name(), "Fnv1a64");
    /// ```
    #[must_use]
    pub fn hasher<H2: BloomHasher>(self, hasher: H2) -> BloomFilterBuilder<State, H2> {
        BloomFilterBuilder {
            sizing: self.sizing,
            hasher,
            _state: PhantomData,
        }
    }
}

impl<H> BloomFilterBuilder<Initial, H> {
    /// Set the expected number of items to insert.
    ///
    /// Transitions the builder to `WithItems`. Validated at `build()`.
    #[must_use]
    pub fn expected_items(self, items: usize) -> BloomFilterBuilder<WithItems, H> {
        self.transition(Sizing::Items(items))
    }

    /// Set `m` and `k` directly, bypassing estimation.
    ///
    /// Transitions the builder straight to `Complete`.
    #[must_use]
    pub fn dimensions(self, bits: usize, hashes: usize) -> BloomFilterBuilder<Complete, H> {
        self.transition(Sizing::Dimensions { bits, hashes })
    }
}

impl<H> BloomFilterBuilder<WithItems, H> {
    /// Set the target false positive rate, in (0, 1).
    ///
    /// Transitions the builder to `Complete`. Validated at `build()`.
    #[must_use]
    pub fn false_positive_rate(self, fp_rate: f64) -> BloomFilterBuilder<Complete, H> {
        let items = match self.sizing {
            Sizing::Items(items) => items,
            _ => 0,
        };
        self.transition(Sizing::Estimate { items, fp_rate })
    }
}

impl<H: BloomHasher> BloomFilterBuilder<Complete, H> {
    /// Resolve `(m, k)` without allocating the filter.
    ///
    /// # Errors
    ///
    /// Any estimation error for `(n, p)` sizing; [`BloomError::InvalidFilterSize`]
    /// or [`BloomError::InvalidHashCount`] for zero explicit dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// use bloomguard::builder::BloomFilterBuilder;
    ///
    /// let params = BloomFilterBuilder::new()
    ///     .expected_items(1000)
    ///     .false_positive_rate(0.01)
    ///     .params()
    ///     .unwrap();
    /// assert_eq!((params.bits, params.hashes), (9586, 7));
    /// ```
    pub fn params(&self) -> Result<FilterParams> {
        match self.sizing {
            Sizing::Estimate { items, fp_rate } => FilterParams::estimate(items, fp_rate),
            Sizing::Dimensions { bits, hashes } => {
                if bits == 0 {
                    return Err(BloomError::invalid_filter_size(bits));
                }
                if hashes == 0 {
                    return Err(BloomError::invalid_hash_count(hashes));
                }
                Ok(FilterParams { bits, hashes })
            }
            Sizing::Unset | Sizing::Items(_) => Err(BloomError::invalid_parameters(
                "builder reached Complete without sizing parameters",
            )),
        }
    }

    /// Build the Bloom filter.
    ///
    /// # Errors
    ///
    /// Same as [`params`](Self::params).
    pub fn build(self) -> Result<BloomFilter<H>> {
        let params = self.params()?;
        let design = match self.sizing {
            Sizing::Estimate { items, fp_rate } => Some((items, fp_rate)),
            _ => None,
        };
        BloomFilter::from_parts(params.bits, params.hashes, self.hasher, design)
    }
}
