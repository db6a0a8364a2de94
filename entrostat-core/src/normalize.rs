//! normalize.rs - Validation and rescaling of weight sequences.
//!
//! Takes a finite sequence of non-negative weights and rescales it into a
//! probability vector summing to 1. Validation happens before any division:
//! negatives are rejected, an optional pre-check can require the input to
//! already be normalised, and an all-zero sequence is reported as degenerate
//! instead of dividing by zero.
//!
//! License: MIT OR APACHE 2.0

use crate::errors::EntropyError;

/// Relative tolerance for the "sums to approximately 1" check.
pub const SUM_REL_TOLERANCE: f64 = 1e-9;

/// Absolute tolerance for the "sums to approximately 1" check.
pub const SUM_ABS_TOLERANCE: f64 = 0.0;

/// Approximate floating-point equality.
///
/// `|a - b| <= max(rel_tol * max(|a|, |b|), abs_tol)`, the same closeness
/// semantics as Python's `math.isclose`.
pub fn is_close(a: f64, b: f64, rel_tol: f64, abs_tol: f64) -> bool {
    (a - b).abs() <= f64::max(rel_tol * f64::max(a.abs(), b.abs()), abs_tol)
}

/// Rescales `numbers` into a probability vector.
///
/// # Arguments
///
/// * `numbers` - The weights of one input group, in input order.
/// * `check_normalised` - When true, require the weights to already sum to
///   approximately 1 before rescaling.
///
/// # Returns
///
/// A vector with the same length and order as the input whose elements sum
/// to 1 within floating-point tolerance, or:
///
/// * [`EntropyError::NegativeValue`] if any weight is negative;
/// * [`EntropyError::NotNormalised`] if the pre-check is requested and fails;
/// * [`EntropyError::DegenerateDistribution`] if the weights sum to zero,
///   which (negatives already rejected) means every weight is zero.
pub fn normalise(numbers: &[f64], check_normalised: bool) -> Result<Vec<f64>, EntropyError> {
    if numbers.iter().any(|&number| number < 0.0) {
        return Err(EntropyError::NegativeValue);
    }

    let total: f64 = numbers.iter().sum();

    if check_normalised && !is_close(total, 1.0, SUM_REL_TOLERANCE, SUM_ABS_TOLERANCE) {
        return Err(EntropyError::NotNormalised(total));
    }

    // Exact zero: the inputs are all zero, so there is no distribution to
    // recover. Checked explicitly rather than letting the division produce
    // NaNs downstream.
    if total == 0.0 {
        return Err(EntropyError::DegenerateDistribution);
    }

    Ok(numbers.iter().map(|number| number / total).collect())
}
