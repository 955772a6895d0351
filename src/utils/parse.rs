//! Parsing of raw command-line values into integers

use crate::error::{MaskError, MaskResult};
use core::num::IntErrorKind;

/// Parse a decimal integer, tolerating surrounding whitespace and a leading sign
///
/// Values too large for an `i64` saturate instead of failing, so that the
/// caller's range check reports them as out of range.
///
/// # Errors
///
/// Returns an error if the value is empty or not a decimal integer
#[inline]
pub fn parse_integer(value: &str) -> MaskResult<i64> {
    let trimmed = value.trim();
    match trimmed.parse::<i64>() {
        Ok(number) => Ok(number),
        Err(err) => match err.kind() {
            IntErrorKind::PosOverflow => Ok(i64::MAX),
            IntErrorKind::NegOverflow => Ok(i64::MIN),
            _ => Err(MaskError::invalid_argument(format!(
                "Invalid integer value '{value}'."
            ))),
        },
    }
}

/// Parse a CIDR prefix length, accepting an optional leading `/` (`/24`)
///
/// # Errors
///
/// Returns an error if the remainder is not a decimal integer
#[inline]
pub fn parse_prefix(value: &str) -> MaskResult<i64> {
    let trimmed = value.trim();
    let digits = trimmed.strip_prefix('/').unwrap_or(trimmed);
    parse_integer(digits)
}
