//! Builder pattern for Bloom filter construction.
//!
//! # Type-State Pattern
//!
//! The builder enforces at compile time that a filter is sized before it is
//! built: either from an expected load `(n, p)` or from explicit `(m, k)`.
//! Parameter *values* are still validated at runtime by `build()`.
//!
//! # Examples
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
//! filter.insert(b"alpha");
//! assert!(filter.contains(b"alpha"));
//! ```
//!
//! | Path                                   | Records `(n, p)` for health checks |
//! |----------------------------------------|------------------------------------|
//! | `.expected_items(n).false_positive_rate(p)` | yes                           |
//! | `.dimensions(m, k)`                    | no                                 |

#![allow(clippy::module_name_repetitions)]

pub mod standard;

pub use standard::{BloomFilterBuilder, Complete, Initial, WithItems};
