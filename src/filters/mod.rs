//! Bloom filter implementations.
//!
//! - [`BloomFilter`] - fixed-size filter over byte slices, shared through
//!   `&self` behind a reader-writer lock
//! - [`FilterHealth`] - saturation report returned by
//!   [`BloomFilter::health_check`]

pub mod standard;

pub use standard::{BloomFilter, FilterHealth};
