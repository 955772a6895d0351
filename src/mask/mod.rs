//! Subnet mask conversions
//!
//! Pure functions converting between CIDR prefix lengths, dotted-decimal
//! masks and host counts. All inputs are validated and reported as
//! [`MaskError::InvalidArgument`](crate::error::MaskError::InvalidArgument).

pub mod hosts;
pub mod long_form;

pub use hosts::*;
pub use long_form::*;

use crate::error::{MaskError, MaskResult};

/// Number of bits in an IPv4 subnet mask
pub const MAX_PREFIX: u8 = 32;

/// Largest host count a single IPv4 network can hold (2^32)
pub const MAX_TOTAL_IPS: i64 = 1 << MAX_PREFIX;

/// Check that a prefix length lies in `0..=32`
///
/// # Errors
///
/// Returns `message` as an invalid argument error when the prefix is out of range
#[inline]
pub(crate) fn checked_prefix(mask: i64, message: &str) -> MaskResult<u8> {
    u8::try_from(mask)
        .ok()
        .filter(|prefix| *prefix <= MAX_PREFIX)
        .ok_or_else(|| MaskError::invalid_argument(message))
}
