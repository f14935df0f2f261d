//! Indeterminate-bit resolution tests.

use aluv_core::common::{BitVector, Logic};
use aluv_core::resolver::{resolve, resolve_masked, to_defined};
use proptest::prelude::*;
use rstest::rstest;

fn any_logic() -> impl Strategy<Value = Logic> {
    prop_oneof![
        Just(Logic::Zero),
        Just(Logic::One),
        Just(Logic::Unknown),
        Just(Logic::HighZ),
    ]
}

fn any_vector() -> impl Strategy<Value = BitVector> {
    proptest::collection::vec(any_logic(), 1..=8).prop_map(BitVector::from_lsb_first)
}

#[rstest]
#[case("00100101", 0x25)]
#[case("zz100101", 0x25)]
#[case("zzxxxxxx", 0)]
#[case("zz1x0x01", 0b10_0001)]
#[case("11111111", 0xFF)]
#[case("xzxzxzxz", 0)]
fn test_resolve_directed(#[case] text: &str, #[case] expected: u64) {
    let raw: BitVector = text.parse().unwrap();
    assert_eq!(resolve(&raw), expected);
}

#[test]
fn test_to_defined_rejects_indeterminate() {
    assert_eq!(to_defined(&"0101".parse().unwrap()), Some(5));
    assert_eq!(to_defined(&"01z1".parse().unwrap()), None);
}

#[test]
fn test_resolve_masked_drops_floating_top_bits() {
    let raw: BitVector = "11101100".parse().unwrap();
    assert_eq!(resolve_masked(&raw, 0x3F), 0b10_1100);
}

proptest! {
    #[test]
    fn prop_defined_vectors_resolve_to_their_value(value in 0u64..256) {
        let raw = BitVector::from_u64(value, 8);
        prop_assert_eq!(resolve(&raw), value);
        prop_assert_eq!(to_defined(&raw), Some(value));
    }

    #[test]
    fn prop_resolve_fits_width(raw in any_vector()) {
        prop_assert!(resolve(&raw) < (1u64 << raw.width()));
    }

    #[test]
    fn prop_indeterminate_bits_read_as_zero(raw in any_vector()) {
        let zeroed = BitVector::from_lsb_first(
            (0..raw.width())
                .map(|i| match raw.bit(i) {
                    Some(Logic::One) => Logic::One,
                    _ => Logic::Zero,
                })
                .collect(),
        );
        prop_assert_eq!(resolve(&raw), resolve(&zeroed));
    }

    #[test]
    fn prop_resolution_is_idempotent(raw in any_vector()) {
        let once = resolve(&raw);
        let again = resolve(&BitVector::from_u64(once, raw.width()));
        prop_assert_eq!(once, again);
    }
}
