//! parse.rs - Line-to-number conversion for input groups.
//!
//! Turns the pre-stripped text lines of one input group into `f64` values,
//! one per line, in input order. Conversion is lazy: the returned iterator
//! fails the moment it reaches a line that is not a valid number, and
//! callers collecting into `Result<Vec<f64>, _>` get fail-fast behavior
//! with no partial results.
//!
//! License: MIT OR APACHE 2.0

use crate::errors::EntropyError;

/// Converts lines into a lazy sequence of numbers.
///
/// Accepts everything `f64::from_str` accepts: standard decimal and
/// exponential notation plus the special literals (`inf`, `NaN`, ...).
///
/// # Arguments
///
/// * `lines` - The raw text lines of one input group, already trimmed and
///   with blank lines filtered out by the input layer.
///
/// # Returns
///
/// An iterator yielding `Ok(f64)` per line, or `Err(EntropyError::Parse)`
/// carrying the offending line text at the first unparseable line.
pub fn lines_to_numbers<I, S>(lines: I) -> impl Iterator<Item = Result<f64, EntropyError>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines.into_iter().map(|line| {
        let line = line.as_ref();
        line.parse::<f64>()
            .map_err(|_| EntropyError::Parse(line.to_string()))
    })
}
