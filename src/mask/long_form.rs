//! Conversion between CIDR prefix lengths and dotted-decimal masks

use super::{MAX_PREFIX, checked_prefix};
use crate::error::{MaskError, MaskResult};
use std::net::Ipv4Addr;

/// Convert a CIDR prefix length (e.g. `24`) to a long-form mask (e.g. `255.255.255.0`)
///
/// # Errors
///
/// Returns an error if `mask` is not between 0 and 32
///
/// # Examples
/// ```
/// use subnetcalc::mask::cidr_to_long_form;
/// assert_eq!(cidr_to_long_form(24).unwrap(), "255.255.255.0");
/// ```
#[inline]
pub fn cidr_to_long_form(mask: i64) -> MaskResult<String> {
    let prefix = checked_prefix(mask, "CIDR mask must be between 0 and 32.")?;
    Ok(Ipv4Addr::from(prefix_bits(prefix)).to_string())
}

/// Convert a long-form mask (e.g. `255.255.255.0`) to a CIDR prefix length (e.g. `24`)
///
/// # Errors
///
/// Returns an error if:
/// - The mask does not have exactly four dot-separated octets
/// - An octet is not an integer between 0 and 255
/// - The ones of the mask are not contiguous from the left
#[inline]
pub fn long_form_to_cidr(mask: &str) -> MaskResult<u8> {
    let octets: Vec<&str> = mask.split('.').collect();
    if octets.len() != 4 {
        return Err(MaskError::invalid_argument(
            "Invalid subnet mask format. Must have four octets.",
        ));
    }

    let mut bytes = [0_u8; 4];
    for (byte, octet) in bytes.iter_mut().zip(&octets) {
        *byte = parse_octet(octet)?;
    }

    let bits = u32::from_be_bytes(bytes);
    let ones = bits.count_ones();
    if bits.leading_ones() != ones {
        return Err(MaskError::invalid_argument(
            "Invalid subnet mask. Must be contiguous 1s followed by 0s.",
        ));
    }

    // At most 32, always fits
    Ok(ones as u8)
}

/// Bit pattern of `prefix` ones followed by zeros
#[must_use]
#[inline]
pub(crate) fn prefix_bits(prefix: u8) -> u32 {
    if prefix == 0 {
        return 0;
    }
    u32::MAX << (MAX_PREFIX - prefix.min(MAX_PREFIX))
}

/// Parse one octet, tolerating surrounding whitespace
fn parse_octet(octet: &str) -> MaskResult<u8> {
    octet.trim().parse::<u8>().map_err(|_| {
        return MaskError::invalid_argument(format!(
            "Invalid octet '{octet}'. Each octet must be an integer between 0 and 255."
        ));
    })
}
