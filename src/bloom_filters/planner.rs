use std::f64::consts::LN_2;

use tracing::debug;

use crate::error::{BloomError, Result};

/// Bit array length and hash count derived from a workload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizingParameters {
    /// number of bits in a Bloom filter (m)
    pub num_bits: usize,
    /// number of hash functions (k)
    pub num_hashes: usize,
}

impl SizingParameters {
    pub fn bits_per_item(&self, expected_items: usize) -> f64 {
        self.num_bits as f64 / expected_items as f64
    }
}

impl From<SizingParameters> for (usize, usize) {
    fn from(params: SizingParameters) -> Self {
        (params.num_bits, params.num_hashes)
    }
}

/// Optimal `(m, k)` for `n` expected items and false positive rate `p`.
///
/// m = ceil(-(n ln p) / (ln 2)^2)
/// k = ceil((m / n) ln 2), computed from the already rounded m
pub fn optimal_parameters(
    expected_items: usize,
    false_positive_rate: f64,
) -> Result<SizingParameters> {
    if expected_items == 0 {
        return Err(BloomError::ZeroExpectedItems);
    }
    // also rejects NaN
    if !(false_positive_rate > 0.0 && false_positive_rate < 1.0) {
        return Err(BloomError::InvalidFalsePositiveRate(false_positive_rate));
    }

    let n = expected_items as f64;
    let m = calculate_m(n, false_positive_rate);
    if !m.is_finite() || m >= usize::MAX as f64 {
        return Err(BloomError::CapacityOverflow);
    }
    let num_bits = m as usize;
    let num_hashes = calculate_k(num_bits, n) as usize;

    debug!(
        expected_items,
        false_positive_rate,
        num_bits,
        num_hashes,
        "planned bloom filter parameters"
    );
    Ok(SizingParameters {
        num_bits,
        num_hashes,
    })
}

fn calculate_m(n: f64, p: f64) -> f64 {
    (-(n * p.ln()) / LN_2.powi(2)).ceil()
}

fn calculate_k(m: usize, n: f64) -> f64 {
    ((m as f64 / n) * LN_2).ceil()
}
