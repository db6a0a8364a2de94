// entrostat/src/main.rs
//! Entrostat entry point.
//!
//! Collects the input groups, runs each one through the core pipeline, and
//! prints the surviving rows as an aligned table. A group that fails gets
//! one diagnostic line on stderr and no row; it never aborts the run.

use anyhow::{Context, Result};
use clap::Parser;

use entrostat::cli::Cli;
use entrostat::input::collect_groups;
use entrostat::logger;
use entrostat::report::{render_table, ReportRow};
use entrostat_core::{process_entry, PipelineOptions};

fn main() -> Result<()> {
    let args = Cli::parse();

    if args.quiet {
        logger::init_logger(Some(log::LevelFilter::Off));
    } else if args.debug {
        logger::init_logger(Some(log::LevelFilter::Debug));
    } else {
        logger::init_logger(None);
    }

    let options = PipelineOptions {
        check_normalised: args.check_normalised,
        base: args.base,
    };

    let groups = collect_groups(&args.files).context("failed to collect input")?;

    let mut rows: Vec<ReportRow> = Vec::new();
    for group in groups {
        match process_entry(&group.label, &group.lines, &options) {
            Ok(value) => rows.push(ReportRow {
                label: group.label,
                value,
            }),
            Err(err) => eprintln!("Error occurred processing {}: {}", group.label, err),
        }
    }

    // No surviving rows means no output at all, and still a clean exit.
    if let Some(table) = render_table(&rows, args.precision, args.no_filenames) {
        println!("{table}");
    }

    Ok(())
}
