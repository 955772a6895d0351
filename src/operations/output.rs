//! Render conversion results for standard output

use core::str::FromStr;

use crate::error::MaskError;
use crate::operations::{Conversion, Operation};
use anyhow::Result;
use serde::Serialize;

/// Message printed for any failure of a CIDR-valued operation
pub const INVALID_CIDR_MESSAGE: &str = "Invalid CIDR mask. Ensure it is a number between 0 and 32.";

/// Output format for conversion results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum OutputFormat {
    /// One human-readable sentence per result
    #[default]
    Text,
    /// One JSON object per result
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Invalid format: {s}. Use 'text' or 'json'")),
        }
    }
}

/// JSON shape of a failed operation
#[derive(Debug, Serialize)]
struct ErrorReport<'a> {
    operation: Operation,
    value: &'a str,
    error: &'a str,
}

/// Render the outcome of `operation` on `value` as a single output line
///
/// # Errors
///
/// Returns an error if the outcome cannot be serialized to JSON
#[inline]
pub fn render(
    operation: Operation,
    value: &str,
    outcome: &Result<Conversion, MaskError>,
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(operation, outcome)),
        OutputFormat::Json => render_json(operation, value, outcome),
    }
}

/// Render an outcome as a human-readable sentence
#[must_use]
#[inline]
pub fn render_text(operation: Operation, outcome: &Result<Conversion, MaskError>) -> String {
    match outcome {
        Ok(conversion) => conversion.to_string(),
        Err(err) => match operation {
            Operation::CidrToLong | Operation::GetNIps => INVALID_CIDR_MESSAGE.to_owned(),
            Operation::LongToCidr | Operation::TotalIpsToMask => format!("Error: {err}"),
        },
    }
}

/// Render an outcome as a JSON object
///
/// # Errors
///
/// Returns an error if serialization fails
#[inline]
pub fn render_json(
    operation: Operation,
    value: &str,
    outcome: &Result<Conversion, MaskError>,
) -> Result<String> {
    let json = match outcome {
        Ok(conversion) => serde_json::to_string(conversion),
        Err(err) => serde_json::to_string(&ErrorReport {
            operation,
            value,
            error: err.message(),
        }),
    };
    json.map_err(|e| anyhow::anyhow!("Failed to serialize to JSON: {e}"))
}
