//! Ternary bit and bit-vector tests.

use aluv_core::common::{BitVector, Logic, VerifyError};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case("0", Logic::Zero)]
#[case("1", Logic::One)]
#[case("x", Logic::Unknown)]
#[case("X", Logic::Unknown)]
#[case("z", Logic::HighZ)]
#[case("Z", Logic::HighZ)]
fn test_single_bit_parse(#[case] text: &str, #[case] expected: Logic) {
    let bits: BitVector = text.parse().unwrap();
    assert_eq!(bits.width(), 1);
    assert_eq!(bits.bit(0), Some(expected));
}

#[test]
fn test_display_is_msb_first() {
    let bits = BitVector::from_u64(0b0010_0101, 8);
    assert_eq!(bits.to_string(), "00100101");
    assert_eq!(bits.bit(0), Some(Logic::One));
    assert_eq!(bits.bit(7), Some(Logic::Zero));
    assert_eq!(bits.bit(8), None);
}

#[test]
fn test_parse_skips_underscores() {
    let bits: BitVector = "zz_10_0101".parse().unwrap();
    assert_eq!(bits.width(), 8);
    assert_eq!(bits.to_string(), "zz100101");
}

#[test]
fn test_parse_rejects_foreign_characters() {
    let err = "01q1".parse::<BitVector>().unwrap_err();
    assert!(matches!(err, VerifyError::InvalidBitString(ref s) if s == "01q1"));
}

#[test]
fn test_has_indeterminate() {
    assert!(!BitVector::from_u64(0xFF, 8).has_indeterminate());
    assert!(BitVector::filled(Logic::HighZ, 2).has_indeterminate());
    assert!("10x1".parse::<BitVector>().unwrap().has_indeterminate());
}

#[test]
fn test_logic_to_bool() {
    assert_eq!(Logic::Zero.to_bool(), Some(false));
    assert_eq!(Logic::One.to_bool(), Some(true));
    assert_eq!(Logic::Unknown.to_bool(), None);
    assert_eq!(Logic::HighZ.to_bool(), None);
    assert_eq!(Logic::from(true), Logic::One);
}
