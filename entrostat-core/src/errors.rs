//! errors.rs - Custom error types for the entrostat-core library.
//!
//! This module defines a structured error enum for the library, providing
//! specific, actionable error types that can be handled programmatically.
//! Every variant is scoped to a single input group: callers catch these at
//! the group boundary and skip the group rather than aborting the run.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// This enum represents all possible error types in the `entrostat-core` library.
///
/// By using `#[non_exhaustive]`, we signal to consumers of this library that
/// new variants may be added in future versions. This prevents them from
/// matching all variants exhaustively, thus avoiding breaking changes.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum EntropyError {
    /// A line could not be interpreted as a real number. Carries the raw
    /// offending line text so diagnostics can point at the exact input.
    #[error("couldn't convert line to a number ({0})")]
    Parse(String),

    /// At least one value in the sequence is negative. Zero is allowed.
    #[error("values are not all positive or zero")]
    NegativeValue,

    /// The pre-normalization check was requested and the values do not
    /// already sum to approximately 1.
    #[error("entries are not normalised (sum = {0})")]
    NotNormalised(f64),

    /// All values are zero, so the sum is zero and normalization is
    /// undefined.
    #[error("values sum to zero, cannot normalise a degenerate distribution")]
    DegenerateDistribution,
}
