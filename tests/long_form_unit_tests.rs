//! Unit tests for CIDR and long-form mask conversion

use subnetcalc::error::MaskError;
use subnetcalc::mask::{MAX_PREFIX, cidr_to_long_form, long_form_to_cidr};

#[test]
fn test_cidr_to_long_form() {
    assert_eq!(cidr_to_long_form(0).unwrap(), "0.0.0.0");
    assert_eq!(cidr_to_long_form(1).unwrap(), "128.0.0.0");
    assert_eq!(cidr_to_long_form(8).unwrap(), "255.0.0.0");
    assert_eq!(cidr_to_long_form(20).unwrap(), "255.255.240.0");
    assert_eq!(cidr_to_long_form(24).unwrap(), "255.255.255.0");
    assert_eq!(cidr_to_long_form(31).unwrap(), "255.255.255.254");
    assert_eq!(cidr_to_long_form(32).unwrap(), "255.255.255.255");
}

#[test]
fn test_cidr_to_long_form_out_of_range() {
    let expected = MaskError::invalid_argument("CIDR mask must be between 0 and 32.");

    assert_eq!(cidr_to_long_form(33), Err(expected.clone()));
    assert_eq!(cidr_to_long_form(-1), Err(expected.clone()));
    assert_eq!(cidr_to_long_form(i64::MAX), Err(expected));
}

#[test]
fn test_long_form_to_cidr() {
    assert_eq!(long_form_to_cidr("0.0.0.0").unwrap(), 0);
    assert_eq!(long_form_to_cidr("255.0.0.0").unwrap(), 8);
    assert_eq!(long_form_to_cidr("255.255.255.0").unwrap(), 24);
    assert_eq!(long_form_to_cidr("255.255.255.128").unwrap(), 25);
    assert_eq!(long_form_to_cidr("255.255.255.255").unwrap(), 32);
    assert_eq!(long_form_to_cidr("255. 255.0 .0").unwrap(), 16);
}

#[test]
fn test_round_trip_every_prefix() {
    for prefix in 0..=MAX_PREFIX {
        let long_form = cidr_to_long_form(i64::from(prefix)).unwrap();
        assert_eq!(long_form_to_cidr(&long_form).unwrap(), prefix);
    }
}

#[test]
fn test_long_form_wrong_octet_count() {
    let expected = "Invalid subnet mask format. Must have four octets.";

    for mask in ["255.255.255", "255.255.255.0.0", "", "24", "255..255.255.0"] {
        assert_eq!(long_form_to_cidr(mask).unwrap_err().message(), expected);
    }
}

#[test]
fn test_long_form_non_contiguous() {
    let expected = "Invalid subnet mask. Must be contiguous 1s followed by 0s.";

    for mask in ["255.0.255.0", "0.0.0.255", "255.255.255.1", "254.255.255.0"] {
        assert_eq!(long_form_to_cidr(mask).unwrap_err().message(), expected);
    }
}

#[test]
fn test_long_form_rejects_bad_octets() {
    for mask in ["256.0.0.0", "255.255.255.-1", "255.255.x.0", "255.255..0"] {
        assert!(matches!(
            long_form_to_cidr(mask),
            Err(MaskError::InvalidArgument { .. })
        ));
    }

    let err = long_form_to_cidr("256.0.0.0").unwrap_err();
    assert!(err.message().contains("'256'"));
}
