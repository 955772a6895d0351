//! # `subnetcalc`
//!
//! `subnetcalc` is a command-line tool for converting between subnet mask representations.
//!
//! ## Features
//! - Convert a long-form mask to CIDR notation (`long_to_cidr`).
//! - Convert a CIDR prefix to a long-form mask (`cidr_to_long`).
//! - Count the usable IPs of a CIDR prefix (`get_n_ips`).
//! - Find the smallest CIDR prefix holding a number of IPs (`total_ips_to_mask`).
//!
//! ## Usage
//!
//! ```sh
//! subnetcalc cidr_to_long 24
//! subnetcalc --output-format json long_to_cidr 255.255.240.0
//! ```
//!
//! See `subnetcalc --help` for more options and details.

use anyhow::Result;
use clap::Parser as _;
use subnetcalc::cli::Args;
use tracing::error;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> Result<()> {
    let args = Args::parse();

    // Results go to stdout, logs to stderr
    let log_level = if args.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt()
        .with_target(false)
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match subnetcalc::run(&args) {
        Ok(()) => std::process::exit(0),
        Err(err) => {
            error!("{}", err);
            std::process::exit(1);
        }
    }
}
