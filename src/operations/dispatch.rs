//! Route an operation and its raw value to the matching conversion

use crate::error::MaskResult;
use crate::mask::{cidr_to_long_form, get_available_ips, long_form_to_cidr, total_ips_to_mask};
use crate::utils::parse::{parse_integer, parse_prefix};
use clap::ValueEnum;
use core::fmt;
use serde::Serialize;
use tracing::debug;

/// Operations understood by the dispatcher
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum Operation {
    /// Convert a long-form subnet mask (e.g. 255.255.255.0) to CIDR notation (e.g. /24)
    #[value(name = "long_to_cidr")]
    LongToCidr,
    /// Convert a CIDR mask (e.g. /24) to a long-form mask (e.g. 255.255.255.0)
    #[value(name = "cidr_to_long")]
    CidrToLong,
    /// Calculate the number of usable IPs for a given CIDR mask (e.g. /24)
    #[value(name = "get_n_ips")]
    #[serde(rename = "get_n_ips")]
    GetNIps,
    /// Find the smallest CIDR mask for a given number of total IPs
    #[value(name = "total_ips_to_mask")]
    TotalIpsToMask,
}

impl Operation {
    /// Literal name used on the command line
    #[must_use]
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::LongToCidr => "long_to_cidr",
            Self::CidrToLong => "cidr_to_long",
            Self::GetNIps => "get_n_ips",
            Self::TotalIpsToMask => "total_ips_to_mask",
        }
    }
}

impl fmt::Display for Operation {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of a successful operation, with its normalized input
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "operation")]
#[non_exhaustive]
pub enum Conversion {
    #[serde(rename = "long_to_cidr")]
    LongToCidr { mask: String, prefix: u8 },
    #[serde(rename = "cidr_to_long")]
    CidrToLong { prefix: u8, long_form: String },
    #[serde(rename = "get_n_ips")]
    UsableIps { prefix: u8, usable_ips: u64 },
    #[serde(rename = "total_ips_to_mask")]
    HostsToMask { total_ips: u64, prefix: u8 },
}

impl Conversion {
    /// Operation that produced this conversion
    #[must_use]
    #[inline]
    pub const fn operation(&self) -> Operation {
        match *self {
            Self::LongToCidr { .. } => Operation::LongToCidr,
            Self::CidrToLong { .. } => Operation::CidrToLong,
            Self::UsableIps { .. } => Operation::GetNIps,
            Self::HostsToMask { .. } => Operation::TotalIpsToMask,
        }
    }
}

impl fmt::Display for Conversion {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LongToCidr { mask, prefix } => {
                write!(f, "CIDR notation for {mask}: /{prefix}")
            }
            Self::CidrToLong { prefix, long_form } => {
                write!(f, "Long-form mask for /{prefix}: {long_form}")
            }
            Self::UsableIps { prefix, usable_ips } => {
                write!(f, "Total usable IPs for /{prefix}: {usable_ips}")
            }
            Self::HostsToMask { total_ips, prefix } => {
                write!(f, "Smallest CIDR mask for {total_ips} IPs: /{prefix}")
            }
        }
    }
}

/// Run `operation` against the raw command-line `value`
///
/// # Errors
///
/// Returns an error if the value cannot be parsed for the operation or the
/// conversion rejects it
#[inline]
pub fn dispatch(operation: Operation, value: &str) -> MaskResult<Conversion> {
    debug!("Dispatching {} with value '{}'", operation, value);

    let conversion = match operation {
        Operation::LongToCidr => Conversion::LongToCidr {
            prefix: long_form_to_cidr(value)?,
            mask: value.to_owned(),
        },
        Operation::CidrToLong => {
            let mask = parse_prefix(value)?;
            let long_form = cidr_to_long_form(mask)?;
            Conversion::CidrToLong {
                prefix: validated_prefix(mask),
                long_form,
            }
        }
        Operation::GetNIps => {
            let mask = parse_prefix(value)?;
            let usable_ips = get_available_ips(mask)?;
            Conversion::UsableIps {
                prefix: validated_prefix(mask),
                usable_ips,
            }
        }
        Operation::TotalIpsToMask => {
            let total_ips = parse_integer(value)?;
            let prefix = total_ips_to_mask(total_ips)?;
            Conversion::HostsToMask {
                total_ips: total_ips.unsigned_abs(),
                prefix,
            }
        }
    };

    debug!("Conversion result: {:?}", conversion);
    Ok(conversion)
}

/// Narrow a prefix that a conversion has already accepted
fn validated_prefix(mask: i64) -> u8 {
    u8::try_from(mask).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_names() {
        assert_eq!(Operation::LongToCidr.to_string(), "long_to_cidr");
        assert_eq!(Operation::CidrToLong.to_string(), "cidr_to_long");
        assert_eq!(Operation::GetNIps.to_string(), "get_n_ips");
        assert_eq!(Operation::TotalIpsToMask.to_string(), "total_ips_to_mask");
    }

    #[test]
    fn test_value_enum_matches_names() {
        for operation in Operation::value_variants() {
            let parsed = Operation::from_str(operation.name(), false).unwrap();
            assert_eq!(parsed, *operation);
        }
    }

    #[test]
    fn test_conversion_operation() {
        let conversion = dispatch(Operation::GetNIps, "24").unwrap();
        assert_eq!(conversion.operation(), Operation::GetNIps);
    }
}
