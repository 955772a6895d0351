//! `subnetcalc` - A CLI tool for converting between subnet mask representations
//!
//! This library converts CIDR prefix lengths to dotted-decimal masks and back,
//! counts the usable hosts of a prefix, and finds the smallest prefix that
//! fits a number of hosts.

pub mod cli;
pub mod error;
pub mod mask;
pub mod operations;
pub mod utils;

use anyhow::{Result, anyhow};
use cli::Args;
use operations::{OutputFormat, dispatch, render};
use tracing::debug;

/// Compute the output line for the given arguments
///
/// Conversion failures are rendered into the line, not returned as errors.
///
/// # Errors
///
/// Returns an error if the output format is unknown or rendering fails
#[inline]
pub fn execute(args: &Args) -> Result<String> {
    let format = args
        .output_format
        .parse::<OutputFormat>()
        .map_err(|e| anyhow!(e))?;

    let outcome = dispatch(args.operation, &args.value);
    if let Err(err) = outcome.as_ref() {
        debug!("{} rejected '{}': {}", args.operation, args.value, err);
    }

    render(args.operation, &args.value, &outcome, format)
}

/// Main entry point for the subnetcalc library
///
/// # Errors
///
/// Returns an error if the output line cannot be produced
#[inline]
pub fn run(args: &Args) -> Result<()> {
    let line = execute(args)?;

    // Output to stdout (not using logging)
    println!("{line}");

    Ok(())
}
