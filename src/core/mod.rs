//! Core building blocks shared by the filter and the builder.
//!
//! ```text
//! core/
//! ├── filter.rs    - SharedBloomFilter trait
//! ├── bitvec.rs    - Byte-backed bit vector
//! ├── params.rs    - Parameter estimation
//! └── mod.rs       - This file (public API)
//! ```
//!
//! [`BitVec`] has no synchronization of its own; the filter owns it behind a
//! `parking_lot::RwLock`.

pub mod bitvec;
pub mod filter;
pub mod params;

pub use bitvec::BitVec;
pub use filter::SharedBloomFilter;
pub use params::{estimate_parameters, FilterParams};
