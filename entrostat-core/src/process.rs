//! process.rs - Per-group orchestration of the entropy pipeline.
//!
//! Runs Parser -> Normalizer -> Calculator for one named input group and
//! returns an explicit per-group result. Groups are independent: a failure
//! here is a value for the caller to report and skip, never a reason to
//! abort the other groups.
//!
//! License: MIT OR APACHE 2.0

use log::debug;

use crate::entropy::entropy;
use crate::errors::EntropyError;
use crate::normalize::normalise;
use crate::parse::lines_to_numbers;

/// Run configuration consumed by the pipeline.
#[derive(Debug, Clone, Copy)]
pub struct PipelineOptions {
    /// Require each group's weights to already sum to approximately 1.
    pub check_normalised: bool,
    /// Base of the logarithm used by the entropy calculation.
    pub base: f64,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            check_normalised: false,
            base: std::f64::consts::E,
        }
    }
}

/// Computes the entropy of one input group.
///
/// # Arguments
///
/// * `label` - The group's identifier (file path or the stdin sentinel),
///   used only for logging here; diagnostics are the caller's concern.
/// * `lines` - The group's raw lines, pre-stripped with blanks removed.
/// * `options` - The run configuration.
///
/// # Returns
///
/// The entropy value, or the first [`EntropyError`] raised by the parser or
/// the normalizer. The calculator itself cannot fail on a normalised vector.
pub fn process_entry(
    label: &str,
    lines: &[String],
    options: &PipelineOptions,
) -> Result<f64, EntropyError> {
    let weights: Vec<f64> = lines_to_numbers(lines).collect::<Result<_, _>>()?;
    let probability_vector = normalise(&weights, options.check_normalised)?;
    let value = entropy(&probability_vector, options.base);

    debug!(
        "group '{}': {} values, entropy {} (base {})",
        label,
        probability_vector.len(),
        value,
        options.base
    );

    Ok(value)
}
