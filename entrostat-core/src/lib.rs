// entrostat-core/src/lib.rs
//! # Entrostat Core Library
//!
//! `entrostat-core` provides the fundamental, platform-independent logic for
//! computing the Shannon entropy of numeric weight/count sequences. It turns
//! raw text lines into numbers, validates and rescales them into probability
//! vectors, and reduces each vector to a single entropy value under a
//! configurable logarithm base.
//!
//! The library is designed to be pure and stateless, focusing solely on the
//! transformation of one group's data, without concerns for I/O or
//! application-specific state management. Each input group is processed
//! independently; failures are returned as explicit per-group results for
//! the caller to report and skip.
//!
//! ## Modules
//!
//! * `parse`: Lazy, fail-fast conversion of text lines into numbers.
//! * `normalize`: Validation and rescaling of weights into probability vectors.
//! * `entropy`: The Shannon entropy reduction.
//! * `process`: Per-group orchestration of the full pipeline.
//! * `errors`: The error taxonomy for everything that can go wrong inside one group.
//!
//! ## Usage Example
//!
//! ```rust
//! use entrostat_core::{process_entry, PipelineOptions};
//!
//! let lines: Vec<String> = ["1", "1", "2"].iter().map(|s| s.to_string()).collect();
//! let value = process_entry("weights.txt", &lines, &PipelineOptions::default())
//!     .expect("well-formed weights");
//! assert!(value > 0.0);
//! ```
//!
//! ## Error Handling
//!
//! All fallible operations return [`EntropyError`], a `thiserror` enum with
//! one variant per failure class (unparseable line, negative weight, failed
//! normalisation pre-check, degenerate all-zero distribution). Errors are
//! scoped to a single group and never represent a whole-run failure.
//!
//! ---
//! License: MIT OR APACHE 2.0

pub mod entropy;
pub mod errors;
pub mod normalize;
pub mod parse;
pub mod process;

/// Re-exports the entropy reduction.
pub use entropy::entropy;

/// Re-exports the custom error type for clear error reporting.
pub use errors::EntropyError;

/// Re-exports the normalizer and its closeness helper.
pub use normalize::{is_close, normalise, SUM_ABS_TOLERANCE, SUM_REL_TOLERANCE};

/// Re-exports the line parser.
pub use parse::lines_to_numbers;

/// Re-exports the per-group pipeline and its configuration.
pub use process::{process_entry, PipelineOptions};
