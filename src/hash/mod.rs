//! Hash functions and probe strategies for Bloom filters.
//!
//! # Module Structure
//!
//! ```text
//! hash/
//! ├── hasher.rs      - BloomHasher trait, Fnv1aHasher, XxHasher (feature = "xxhash")
//! ├── strategies.rs  - DoubleHashing probe generation
//! └── mod.rs         - This file (public API)
//! ```
//!
//! # Choosing a Hash Function
//!
//! | Hash Function     | Speed     | Use Case                                 |
//! |-------------------|-----------|------------------------------------------|
//! | [`Fnv1aHasher`]   | Fast      | Default, short keys, reproducible layout |
//! | `XxHasher`        | Very Fast | Long keys (feature `xxhash`)             |
//!
//! Neither is cryptographic. A filter exposed to adversarial input can be
//! flooded with crafted collisions.
//!
//! # Examples
//!
//! ```
//! use bloomguard::hash::{BloomHasher, DoubleHashing, Fnv1aHasher};
//!
//! let hash = Fnv1aHasher.hash_bytes(b"hello");
//! let positions: Vec<usize> = DoubleHashing.probes(hash, 7, 9586).collect();
//! assert_eq!(positions.len(), 7);
//! ```

pub mod hasher;
pub mod strategies;

pub use hasher::{BloomHasher, Fnv1aHasher, Fnv1aState};
pub use strategies::{DoubleHashing, Probes};

#[cfg(feature = "xxhash")]
pub use hasher::XxHasher;

/// The hasher used when none is specified.
pub type DefaultHasher = Fnv1aHasher;
