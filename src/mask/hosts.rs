//! Host count arithmetic for CIDR prefixes

use super::{MAX_PREFIX, MAX_TOTAL_IPS, checked_prefix};
use crate::error::{MaskError, MaskResult};

/// Smallest CIDR prefix whose network holds at least `total_ips` addresses
///
/// The host bit count is `ceil(log2(total_ips))`, computed exactly.
///
/// # Errors
///
/// Returns an error if `total_ips` is not between 1 and 2^32
///
/// # Examples
/// ```
/// use subnetcalc::mask::total_ips_to_mask;
/// assert_eq!(total_ips_to_mask(300).unwrap(), 23);
/// ```
#[inline]
pub fn total_ips_to_mask(total_ips: i64) -> MaskResult<u8> {
    if !(1..=MAX_TOTAL_IPS).contains(&total_ips) {
        return Err(MaskError::invalid_argument(
            "Total IPs must be between 1 and 2^32.",
        ));
    }

    let host_bits = u64::BITS - (total_ips.unsigned_abs() - 1).leading_zeros();
    // host_bits <= 32 because total_ips <= 2^32
    Ok(MAX_PREFIX - host_bits as u8)
}

/// Number of usable host addresses in a network with the given prefix
///
/// Network and broadcast addresses are excluded. `/31` and `/32` report 0.
///
/// # Errors
///
/// Returns an error if `mask` is not between 0 and 32
#[inline]
pub fn get_available_ips(mask: i64) -> MaskResult<u64> {
    let prefix = checked_prefix(mask, "Mask must be between 0 and 32.")?;
    let host_bits = MAX_PREFIX - prefix;
    let total_ips = 1_u64 << host_bits;

    if host_bits > 1 {
        Ok(total_ips - 2)
    } else {
        Ok(0)
    }
}
