//! Error types for bloomguard operations.
//!
//! Every error in this crate is a caller-input error: a filter dimension of
//! zero, an expected item count of zero, a false positive rate outside
//! `(0, 1)`, or a parameter combination that does not fit in memory. They are
//! raised synchronously by constructors, the estimator and the builder.
//! `insert` and `contains` have no error path.
//!
//! # Error Propagation
//!
//! ```
//! use bloomguard::{BloomFilter, Result};
//! use bloomguard::core::params::estimate_parameters;
//!
//! fn sized_filter(n: usize, fp: f64) -> Result<BloomFilter> {
//!     let (m, k) = estimate_parameters(n, fp)?;
//!     BloomFilter::new(m, k)
//! }
//! # assert!(sized_filter(1000, 0.01).is_ok());
//! # assert!(sized_filter(0, 0.01).is_err());
//! ```

#![allow(clippy::module_name_repetitions)]

use std::fmt;

/// Result type alias for bloomguard operations.
pub type Result<T> = std::result::Result<T, BloomError>;

/// Errors that can occur while sizing or constructing a Bloom filter.
///
/// Out-of-range inputs are rejected, never clamped.
#[derive(Debug, Clone, PartialEq)]
pub enum BloomError {
    /// Bit array size is zero.
    ///
    /// Probe positions are reduced modulo `m`, so `m` must be positive.
    InvalidFilterSize {
        /// The invalid size in bits.
        size: usize,
    },

    /// Number of probes per element is zero.
    InvalidHashCount {
        /// The invalid probe count.
        count: usize,
    },

    /// Expected item count is zero.
    ///
    /// The estimator divides by `n`, so it must be positive.
    InvalidItemCount {
        /// The invalid count that was provided.
        count: usize,
    },

    /// False positive rate outside the open interval (0, 1), or NaN.
    FalsePositiveRateOutOfBounds {
        /// The invalid false positive rate that was provided.
        fp_rate: f64,
    },

    /// Parameters are individually valid but the derived values are not
    /// representable (for example `m` overflowing `usize`).
    InvalidParameters {
        /// Human-readable description of what's invalid.
        message: String,
    },
}

impl fmt::Display for BloomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFilterSize { size } => {
                write!(
                    f,
                    "Invalid filter size: {} bits. Must be greater than 0.",
                    size
                )
            }
            Self::InvalidHashCount { count } => {
                write!(
                    f,
                    "Invalid hash count: {}. At least one probe per element is required.",
                    count
                )
            }
            Self::InvalidItemCount { count } => {
                write!(
                    f,
                    "Invalid item count: {}. Expected items must be greater than 0.",
                    count
                )
            }
            Self::FalsePositiveRateOutOfBounds { fp_rate } => {
                write!(
                    f,
                    "False positive rate {} is out of bounds. Must be in range (0, 1).",
                    fp_rate
                )
            }
            Self::InvalidParameters { message } => {
                write!(f, "Invalid Bloom filter parameters: {}.", message)
            }
        }
    }
}

impl std::error::Error for BloomError {}

impl BloomError {
    /// Create an `InvalidFilterSize` error.
    #[must_use]
    pub fn invalid_filter_size(size: usize) -> Self {
        Self::InvalidFilterSize { size }
    }

    /// Create an `InvalidHashCount` error.
    #[must_use]
    pub fn invalid_hash_count(count: usize) -> Self {
        Self::InvalidHashCount { count }
    }

    /// Create an `InvalidItemCount` error.
    #[must_use]
    pub fn invalid_item_count(count: usize) -> Self {
        Self::InvalidItemCount { count }
    }

    /// Create a `FalsePositiveRateOutOfBounds` error.
    #[must_use]
    pub fn fp_rate_out_of_bounds(fp_rate: f64) -> Self {
        Self::FalsePositiveRateOutOfBounds { fp_rate }
    }

    /// Create an `InvalidParameters` error with a formatted message.
    #[must_use]
    pub fn invalid_parameters(message: impl Into<String>) -> Self {
        Self::InvalidParameters {
            message: message.into(),
        }
    }

    /// Whether this error was caused by caller-supplied parameters.
    ///
    /// Always `true` today; every variant is an invalid-parameter error.
    #[must_use]
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(
            self,
            Self::InvalidFilterSize { .. }
                | Self::InvalidHashCount { .. }
                | Self::InvalidItemCount { .. }
                | Self::FalsePositiveRateOutOfBounds { .. }
                | Self::InvalidParameters { .. }
        )
    }
}
