// entrostat/src/cli.rs
//! This file defines the command-line interface (CLI) for the entrostat
//! application, including all available arguments and their validation.

use clap::Parser;
use std::f64::consts::E;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "entrostat",
    author = "Obscura Team (Relay)",
    version = env!("CARGO_PKG_VERSION"),
    about = "Calculate the entropy of (un)normalised probability distributions",
    long_about = "Entrostat is a command-line utility for computing the Shannon entropy of numeric sequences. Each input file (or stdin) is treated as one distribution: one value per line, blank lines ignored. Values are normalised into a probability vector and reduced to a single entropy value, printed as an aligned table."
)]
pub struct Cli {
    /// Files to read. One value per line. Blank lines ignored. - is stdin.
    /// If no files given read from stdin.
    #[arg(value_name = "FILES", help = "Files to read. One value per line. Blank lines ignored. - is stdin. If no files given read from stdin.")]
    pub files: Vec<String>,

    /// Don't print filenames in the output table.
    #[arg(long = "no-filenames", help = "Don't print filenames.")]
    pub no_filenames: bool,

    /// Check that each group's values already sum to 1 before normalising.
    #[arg(long = "check-normalised", short = 'c', help = "Fail a group whose values do not already sum to 1.")]
    pub check_normalised: bool,

    /// Number of decimal digits used when printing entropy values.
    #[arg(long = "precision", value_name = "PREC", default_value_t = 3, help = "Precision for printing.")]
    pub precision: usize,

    /// Base for the logarithm (default: e).
    #[arg(long = "base", value_name = "BASE", default_value_t = E, value_parser = parse_base, help = "Base for logarithm.")]
    pub base: f64,

    /// Disable informational messages
    #[arg(long, short = 'q', help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG for 'entrostat' crate to DEBUG)
    #[arg(long, short = 'd', help = "Enable debug logging.")]
    pub debug: bool,
}

/// Validates the logarithm base at argument-parse time.
///
/// The core never calls the logarithm on the base itself, but a base that is
/// non-positive, 1, or non-finite produces meaningless results, so the
/// configuration layer rejects it up front.
fn parse_base(value: &str) -> Result<f64, String> {
    let base: f64 = value
        .parse()
        .map_err(|_| format!("'{value}' is not a number"))?;

    if !base.is_finite() || base <= 0.0 {
        return Err(format!("base must be a finite positive number, got {base}"));
    }
    if base == 1.0 {
        return Err("base must not be 1".to_string());
    }

    Ok(base)
}
