// entrostat/src/lib.rs
//! # Entrostat CLI Application
//!
//! This crate provides the command-line front end for the entrostat entropy
//! calculator: argument parsing, input-group collection from files or stdin,
//! per-group diagnostics, and tabular rendering of the results. All numeric
//! semantics live in `entrostat-core`.

pub mod cli;
pub mod input;
pub mod logger;
pub mod report;
