// entrostat/src/logger.rs
//! Logger bootstrap for the entrostat binary.
//!
//! Respects `RUST_LOG` when no explicit level override is given, so tests
//! and debugging sessions can raise verbosity without touching flags.

use env_logger::Builder;
use log::LevelFilter;

/// Initializes the global logger.
///
/// An explicit `level` overrides whatever `RUST_LOG` says; `None` defers to
/// the environment, defaulting to warnings only. Diagnostics for skipped
/// groups are printed directly to stderr by `main` and are not routed
/// through the logger, so `--quiet` never hides them.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = Builder::from_env(env_logger::Env::default().default_filter_or("warn"));

    if let Some(level) = level {
        builder.filter_level(level);
    }

    // Tests may initialize more than once; only the first call wins.
    let _ = builder.try_init();
}
