use crate::operations::Operation;
use clap::Parser;

/// Command-line arguments for subnetcalc
#[derive(Parser, Debug, Clone)]
#[command(name = "subnetcalc")]
#[command(about = "A CLI tool for converting between subnet mask representations")]
#[command(long_about = None)]
#[command(version)]
pub struct Args {
    /// Operation to perform
    #[arg(value_enum, value_name = "OPERATION")]
    pub operation: Operation,

    /// Input value for the operation: a long-form mask for long_to_cidr
    /// (e.g. 255.255.255.0), a CIDR mask for cidr_to_long and get_n_ips
    /// (e.g. 24 or /24), a number of IPs for total_ips_to_mask (e.g. 300)
    #[arg(value_name = "VALUE", allow_hyphen_values = true)]
    pub value: String,

    /// Output format: text or json
    #[arg(
        long = "output-format",
        value_name = "FORMAT",
        default_value = "text",
        env = "SUBNETCALC_OUTPUT_FORMAT",
        value_parser = ["text", "json"]
    )]
    pub output_format: String,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}
