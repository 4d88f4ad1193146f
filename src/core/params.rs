//! Optimal parameter calculation for Bloom filters.
//!
//! Given:
//! - `n`: Expected number of elements
//! - `p`: Target false positive rate
//!
//! Optimal parameters:
//! - `m = ⌈-n × ln(p) / (ln 2)²⌉` (bits in filter)
//! - `k = ⌈(m/n) × ln 2⌉` (probes per element)
//!
//! Both values are rounded **up**. Rounding down would under-provision the
//! filter and miss the requested rate; rounding up costs at most one bit and
//! one probe. Neither value is clamped to a ceiling.
//!
//! Expected false positive rate after inserting `n` elements:
//! - `p = (1 - e^(-kn/m))^k`
//!
//! # References
//!
//! - Bloom, Burton H. (1970). "Space/Time Trade-offs in Hash Coding with Allowable Errors"
//! - Kirsch & Mitzenmacher (2006). "Less Hashing, Same Performance: Building a Better Bloom Filter"

#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]

use crate::error::{BloomError, Result};
use std::f64::consts::LN_2;

/// (ln 2)² ≈ 0.4804530139182014
const LN2_SQUARED: f64 = LN_2 * LN_2;

/// Sized filter dimensions: `m` bits and `k` probes.
///
/// # Examples
///
/// ```
/// use bloomguard::core::params::FilterParams;
///
/// let params = FilterParams::estimate(1000, 0.01).unwrap();
/// assert_eq!(params.bits, 9586);
/// assert_eq!(params.hashes, 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FilterParams {
    /// Total number of bits (m).
    pub bits: usize,
    /// Number of probes per element (k).
    pub hashes: usize,
}

impl FilterParams {
    /// Estimate optimal dimensions for `n` items at false positive rate `p`.
    ///
    /// # Errors
    ///
    /// See [`estimate_parameters`].
    pub fn estimate(n: usize, p: f64) -> Result<Self> {
        let (bits, hashes) = estimate_parameters(n, p)?;
        Ok(Self { bits, hashes })
    }

    /// Bytes needed to store `bits`: `⌈m/8⌉`.
    #[must_use]
    pub const fn byte_len(&self) -> usize {
        self.bits.div_ceil(8)
    }
}

impl From<FilterParams> for (usize, usize) {
    fn from(params: FilterParams) -> Self {
        (params.bits, params.hashes)
    }
}

fn check_fp_rate(fp_rate: f64) -> Result<()> {
    // Negated form so NaN is rejected too.
    if !(fp_rate > 0.0 && fp_rate < 1.0) {
        return Err(BloomError::fp_rate_out_of_bounds(fp_rate));
    }
    Ok(())
}

/// Calculate optimal `(m, k)` for `n` expected elements at false positive rate `p`.
///
/// # Errors
///
/// - [`BloomError::InvalidItemCount`] if `n == 0`
/// - [`BloomError::FalsePositiveRateOutOfBounds`] if `p` is not in (0, 1)
/// - [`BloomError::InvalidParameters`] if `m` does not fit in `usize`
///
/// # Examples
///
/// ```
/// use bloomguard::core::params::estimate_parameters;
///
/// let (m, k) = estimate_parameters(1000, 0.01).unwrap();
/// assert_eq!(m, 9586); // ⌈9585.06⌉
/// assert_eq!(k, 7);    // ⌈6.64⌉
///
/// assert!(estimate_parameters(0, 0.01).is_err());
/// assert!(estimate_parameters(1000, 1.0).is_err());
/// ```
pub fn estimate_parameters(n: usize, p: f64) -> Result<(usize, usize)> {
    let m = optimal_bit_count(n, p)?;
    let k = optimal_hash_count(m, n)?;

    tracing::debug!(n, p, m, k, "estimated bloom filter parameters");

    Ok((m, k))
}

/// Calculate the optimal number of bits: `m = ⌈-n × ln(p) / (ln 2)²⌉`.
///
/// # Errors
///
/// - [`BloomError::InvalidItemCount`] if `n == 0`
/// - [`BloomError::FalsePositiveRateOutOfBounds`] if `fp_rate` is not in (0, 1)
/// - [`BloomError::InvalidParameters`] if the result exceeds `usize::MAX`
///
/// # Examples
///
/// ```
/// use bloomguard::core::params::optimal_bit_count;
///
/// assert_eq!(optimal_bit_count(1000, 0.01).unwrap(), 9586);
/// assert_eq!(optimal_bit_count(100_000, 0.001).unwrap(), 1_437_759);
/// ```
pub fn optimal_bit_count(n: usize, fp_rate: f64) -> Result<usize> {
    if n == 0 {
        return Err(BloomError::invalid_item_count(n));
    }
    check_fp_rate(fp_rate)?;

    let m = (-(n as f64) * fp_rate.ln() / LN2_SQUARED).ceil();

    // usize::MAX as f64 rounds up to 2^64 on 64-bit targets, hence >=.
    if !m.is_finite() || m >= usize::MAX as f64 {
        return Err(BloomError::invalid_parameters(format!(
            "calculated filter size {m:.0} bits for n={n}, p={fp_rate} exceeds usize::MAX"
        )));
    }

    // -ln(p) > 0 for p in (0, 1) and n >= 1, so the ceiling is at least 1.
    Ok((m as usize).max(1))
}

/// Calculate the optimal number of probes: `k = ⌈(m/n) × ln 2⌉`.
///
/// # Errors
///
/// - [`BloomError::InvalidFilterSize`] if `m == 0`
/// - [`BloomError::InvalidItemCount`] if `n == 0`
///
/// # Examples
///
/// ```
/// use bloomguard::core::params::optimal_hash_count;
///
/// assert_eq!(optimal_hash_count(9586, 1000).unwrap(), 7);
/// assert_eq!(optimal_hash_count(10, 1_000_000).unwrap(), 1);
/// ```
pub fn optimal_hash_count(m: usize, n: usize) -> Result<usize> {
    if m == 0 {
        return Err(BloomError::invalid_filter_size(m));
    }
    if n == 0 {
        return Err(BloomError::invalid_item_count(n));
    }

    let k = ((m as f64 / n as f64) * LN_2).ceil() as usize;
    Ok(k.max(1))
}

/// Expected false positive rate after inserting `n` items: `(1 - e^(-kn/m))^k`.
///
/// Assumes uniform, independent probes. Double hashing tracks this closely
/// for the rates typically requested (`p >= 1e-6`).
///
/// # Errors
///
/// - [`BloomError::InvalidFilterSize`] if `m == 0`
/// - [`BloomError::InvalidHashCount`] if `k == 0`
///
/// # Examples
///
/// ```
/// use bloomguard::core::params::expected_fp_rate;
///
/// let fp = expected_fp_rate(9586, 1000, 7).unwrap();
/// assert!((fp - 0.01).abs() < 0.001);
///
/// // Saturation: twice the designed load
/// let saturated = expected_fp_rate(9586, 2000, 7).unwrap();
/// assert!(saturated > 0.1);
/// ```
pub fn expected_fp_rate(m: usize, n: usize, k: usize) -> Result<f64> {
    if m == 0 {
        return Err(BloomError::invalid_filter_size(m));
    }
    if k == 0 {
        return Err(BloomError::invalid_hash_count(k));
    }
    if n == 0 {
        return Ok(0.0);
    }

    let k_f64 = k as f64;
    let prob_bit_one = 1.0 - (-(k_f64 * n as f64) / m as f64).exp();
    Ok(prob_bit_one.powf(k_f64).clamp(0.0, 1.0))
}

/// Bits needed per element at the optimal `k`: `-ln(p) / (ln 2)²`.
///
/// # Errors
///
/// Returns [`BloomError::FalsePositiveRateOutOfBounds`] if `fp_rate` is not in (0, 1).
///
/// # Examples
///
/// ```
/// use bloomguard::core::params::bits_per_element;
///
/// let bpe = bits_per_element(0.01).unwrap();
/// assert!((bpe - 9.59).abs() < 0.01);
/// ```
pub fn bits_per_element(fp_rate: f64) -> Result<f64> {
    check_fp_rate(fp_rate)?;
    Ok(-fp_rate.ln() / LN2_SQUARED)
}
