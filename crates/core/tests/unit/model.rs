//! Reference Model Tests
//!
//! Directed vectors for every opcode plus property checks over the whole
//! 4-bit operand space:
//!   - Reset dominates enable and opcode.
//!   - Enable low forces zero.
//!   - ADD/SUB wrap modulo 16; carry follows the selected convention.
//!   - NOT and PASS ignore the operand they do not use.
//!   - Parity is a pure function of result and carry.

use aluv_core::common::VerifyError;
use aluv_core::model::arithmetic::{self, SubCarry};
use aluv_core::model::{AluModel, AluOutput, ControlState, Opcode, ParityScheme};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

// ─── Helpers ─────────────────────────────────────────────────────────────────

fn run(op: Opcode, a: u8, b: u8) -> AluOutput {
    AluModel::default().expected(a, b, op, false, true)
}

fn out(result: u8, carry: u8, parity: u8) -> AluOutput {
    AluOutput {
        result,
        carry,
        parity,
    }
}

fn any_opcode() -> impl Strategy<Value = Opcode> {
    (0u8..8).prop_map(Opcode::from_bits_truncate)
}

// ═════════════════════════════════════════════════════════════════════════════
//  Directed vectors
// ═════════════════════════════════════════════════════════════════════════════

#[rstest]
#[case::add(Opcode::Add, 3, 2, out(5, 0, 0))]
#[case::add_overflow(Opcode::Add, 15, 1, out(0, 1, 1))]
#[case::add_max(Opcode::Add, 15, 15, out(14, 1, 0))]
#[case::sub(Opcode::Sub, 1, 5, out(12, 1, 1))]
#[case::sub_no_borrow(Opcode::Sub, 9, 4, out(5, 0, 0))]
#[case::sub_equal(Opcode::Sub, 7, 7, out(0, 0, 0))]
#[case::and(Opcode::And, 5, 10, out(0, 0, 0))]
#[case::or(Opcode::Or, 12, 1, out(13, 0, 1))]
#[case::xor(Opcode::Xor, 12, 3, out(15, 0, 0))]
#[case::nor(Opcode::Nor, 0, 15, out(0, 0, 0))]
#[case::nor_zero(Opcode::Nor, 0, 0, out(15, 0, 0))]
#[case::not(Opcode::Not, 4, 0, out(11, 0, 1))]
#[case::pass(Opcode::Pass, 8, 7, out(7, 0, 1))]
fn test_directed_vectors(
    #[case] op: Opcode,
    #[case] a: u8,
    #[case] b: u8,
    #[case] expected: AluOutput,
) {
    assert_eq!(run(op, a, b), expected);
}

#[test]
fn test_operands_are_masked_to_four_bits() {
    assert_eq!(run(Opcode::Add, 0xF3, 0x12), run(Opcode::Add, 3, 2));
    assert_eq!(run(Opcode::Pass, 0, 0xA7), out(7, 0, 1));
}

// ═════════════════════════════════════════════════════════════════════════════
//  SUB carry conventions
// ═════════════════════════════════════════════════════════════════════════════

#[rstest]
#[case(SubCarry::Borrow, 1, 5, 1)]
#[case(SubCarry::Borrow, 5, 1, 0)]
#[case(SubCarry::Borrow, 4, 4, 0)]
#[case(SubCarry::NotBorrow, 1, 5, 0)]
#[case(SubCarry::NotBorrow, 5, 1, 1)]
#[case(SubCarry::NotBorrow, 4, 4, 1)]
#[case(SubCarry::Zero, 1, 5, 0)]
#[case(SubCarry::Zero, 5, 1, 0)]
fn test_sub_carry_conventions(
    #[case] convention: SubCarry,
    #[case] a: u8,
    #[case] b: u8,
    #[case] carry: u8,
) {
    assert_eq!(arithmetic::sub(a, b, convention).1, carry);
}

#[test]
fn test_sub_carry_convention_changes_parity() {
    let borrow = AluModel::new(ParityScheme::Even, SubCarry::Borrow);
    let not_borrow = AluModel::new(ParityScheme::Even, SubCarry::NotBorrow);
    assert_eq!(borrow.expected(1, 5, Opcode::Sub, false, true), out(12, 1, 1));
    assert_eq!(not_borrow.expected(1, 5, Opcode::Sub, false, true), out(12, 0, 0));
}

#[test]
fn test_odd_parity_inverts_every_parity_bit() {
    let odd = AluModel::new(ParityScheme::Odd, SubCarry::Borrow);
    for op in Opcode::ALL {
        let even = run(op, 6, 9);
        assert_eq!(odd.expected(6, 9, op, false, true).parity, even.parity ^ 1);
    }
}

// ═════════════════════════════════════════════════════════════════════════════
//  Opcode encoding
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn test_opcode_encoding_round_trips() {
    for (bits, op) in Opcode::ALL.iter().enumerate() {
        assert_eq!(usize::from(op.bits()), bits);
        assert_eq!(Opcode::try_from(op.bits()), Ok(*op));
    }
}

#[test]
fn test_opcode_out_of_range_rejected() {
    assert_eq!(Opcode::try_from(8), Err(VerifyError::InvalidOpcode(8)));
    assert_eq!(Opcode::from_bits_truncate(0b1001), Opcode::Sub);
}

#[test]
fn test_opcode_mnemonics() {
    let names: Vec<_> = Opcode::ALL.iter().map(|op| op.to_string()).collect();
    assert_eq!(
        names,
        ["ADD", "SUB", "AND", "OR", "XOR", "NOR", "NOT", "PASS"]
    );
    assert!(Opcode::Add.is_arithmetic());
    assert!(!Opcode::Xor.is_arithmetic());
}

// ═════════════════════════════════════════════════════════════════════════════
//  Output word packing
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn test_output_word_layout() {
    let o = out(0b1010, 1, 1);
    assert_eq!(o.to_word(), 0b11_1010);
    assert_eq!(AluOutput::from_word(0xFF), out(15, 1, 1));
    assert_eq!(AluOutput::from_word(0xC0), AluOutput::ZERO);
}

// ═════════════════════════════════════════════════════════════════════════════
//  Properties
// ═════════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn prop_reset_dominates(a in 0u8..16, b in 0u8..16, op in any_opcode(), ena in any::<bool>()) {
        let model = AluModel::default();
        prop_assert_eq!(model.expected(a, b, op, true, ena), AluOutput::ZERO);
    }

    #[test]
    fn prop_enable_low_forces_zero(a in 0u8..16, b in 0u8..16, op in any_opcode()) {
        let model = AluModel::default();
        prop_assert_eq!(model.expected_for(a, b, op, ControlState::DISABLED), AluOutput::ZERO);
    }

    #[test]
    fn prop_add_wraps_with_carry(a in 0u8..16, b in 0u8..16) {
        let o = run(Opcode::Add, a, b);
        let sum = u16::from(a) + u16::from(b);
        prop_assert_eq!(u16::from(o.result), sum % 16);
        prop_assert_eq!(o.carry, u8::from(sum >= 16));
    }

    #[test]
    fn prop_sub_wraps(a in 0u8..16, b in 0u8..16) {
        let o = run(Opcode::Sub, a, b);
        prop_assert_eq!(u16::from(o.result), (16 + u16::from(a) - u16::from(b)) % 16);
        prop_assert_eq!(o.carry, u8::from(a < b));
    }

    #[test]
    fn prop_not_ignores_b(a in 0u8..16, b1 in 0u8..16, b2 in 0u8..16) {
        prop_assert_eq!(run(Opcode::Not, a, b1), run(Opcode::Not, a, b2));
        prop_assert_eq!(run(Opcode::Not, a, b1).result, !a & 0xF);
    }

    #[test]
    fn prop_pass_ignores_a(a1 in 0u8..16, a2 in 0u8..16, b in 0u8..16) {
        prop_assert_eq!(run(Opcode::Pass, a1, b), run(Opcode::Pass, a2, b));
        prop_assert_eq!(run(Opcode::Pass, a1, b).result, b);
    }

    #[test]
    fn prop_parity_is_function_of_result_and_carry(a in 0u8..16, b in 0u8..16, op in any_opcode()) {
        let o = run(op, a, b);
        let ones = o.result.count_ones() + u32::from(o.carry);
        prop_assert_eq!(u32::from(o.parity), ones % 2);
        prop_assert!(o.result < 16 && o.carry <= 1 && o.parity <= 1);
    }

    #[test]
    fn prop_logic_ops_never_carry(a in 0u8..16, b in 0u8..16, op in any_opcode()) {
        prop_assume!(!op.is_arithmetic());
        prop_assert_eq!(run(op, a, b).carry, 0);
    }
}
