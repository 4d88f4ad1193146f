//! Packed byte-addressed bit vector.
//!
//! `BitVec` stores `len` bits in `⌈len/8⌉` bytes. Bit `pos` lives in byte
//! `pos / 8` under mask `1 << (pos % 8)`:
//!
//! ```text
//! Byte 0: [bit 0][bit 1]...[bit 7]
//! Byte 1: [bit 8][bit 9]...[bit 15]
//! ```
//!
//! # Thread Safety
//!
//! `BitVec` has no internal synchronization. `set` takes `&mut self`, so a
//! shared vector must be wrapped in a lock; [`BloomFilter`] guards its bit
//! vector with a single `RwLock`.
//!
//! No operation clears a bit; the vector only ever gains set bits.
//!
//! # Examples
//!
//! ```
//! use bloomguard::core::bitvec::BitVec;
//!
//! let mut bv = BitVec::new(65).unwrap();
//! assert_eq!(bv.byte_len(), 9);
//!
//! bv.set(42);
//! bv.set(64);
//! assert!(bv.get(42));
//! assert!(!bv.get(43));
//! assert_eq!(bv.count_ones(), 2);
//! ```
//!
//! [`BloomFilter`]: crate::filters::BloomFilter

use crate::error::{BloomError, Result};

/// Fixed-size bit array backed by `Box<[u8]>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitVec {
    bytes: Box<[u8]>,
    len: usize,
}

impl BitVec {
    /// Create a new bit vector of `num_bits` zero bits.
    ///
    /// Allocates exactly `⌈num_bits / 8⌉` bytes.
    ///
    /// # Errors
    ///
    /// - [`BloomError::InvalidFilterSize`] if `num_bits` is 0
    /// - [`BloomError::InvalidParameters`] if the backing bytes cannot be allocated
    ///
    /// # Examples
    ///
    /// ```
    /// use bloomguard::core::bitvec::BitVec;
    ///
    /// assert_eq!(BitVec::new(64).unwrap().byte_len(), 8);
    /// assert_eq!(BitVec::new(65).unwrap().byte_len(), 9);
    /// assert!(BitVec::new(0).is_err());
    /// ```
    pub fn new(num_bits: usize) -> Result<Self> {
        if num_bits == 0 {
            return Err(BloomError::invalid_filter_size(num_bits));
        }

        let byte_len = num_bits.div_ceil(8);
        let mut bytes = Vec::new();
        bytes.try_reserve_exact(byte_len).map_err(|err| {
            BloomError::invalid_parameters(format!(
                "cannot allocate {byte_len} bytes for a {num_bits}-bit filter: {err}"
            ))
        })?;
        bytes.resize(byte_len, 0u8);

        Ok(Self {
            bytes: bytes.into_boxed_slice(),
            len: num_bits,
        })
    }

    /// Number of addressable bits.
    #[must_use]
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Always `false` for a successfully constructed `BitVec`.
    #[must_use]
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of backing bytes, `⌈len/8⌉`.
    #[must_use]
    #[inline]
    pub fn byte_len(&self) -> usize {
        self.bytes.len()
    }

    /// Set bit `index` to 1. Setting an already-set bit has no effect.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`, matching slice indexing.
    #[inline]
    pub fn set(&mut self, index: usize) {
        assert!(
            index < self.len,
            "BitVec index out of bounds: index={} len={}",
            index,
            self.len
        );

        self.bytes[index / 8] |= 1u8 << (index % 8);
    }

    /// Read bit `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    #[must_use]
    #[inline]
    pub fn get(&self, index: usize) -> bool {
        assert!(
            index < self.len,
            "BitVec index out of bounds: index={} len={}",
            index,
            self.len
        );

        self.bytes[index / 8] & (1u8 << (index % 8)) != 0
    }

    /// Count set bits (population count).
    #[must_use]
    pub fn count_ones(&self) -> usize {
        self.bytes.iter().map(|b| b.count_ones() as usize).sum()
    }

    /// Backing bytes, bit `pos` at byte `pos / 8`, offset `pos % 8`.
    ///
    /// Padding bits past `len` in the last byte are always zero.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Heap bytes used by the vector.
    #[must_use]
    pub fn memory_usage(&self) -> usize {
        self.bytes.len()
    }
}
