//! ALU bitwise operations.
//!
//! Implements AND, OR, XOR, NOR, NOT, and PASS on 4-bit operands. None of
//! these set carry. NOT reads only `a` and PASS reads only `b`.

use super::opcode::Opcode;
use crate::common::constants::NIBBLE_MASK;

/// Executes a bitwise opcode.
///
/// # Returns
///
/// The 4-bit result. Returns `0` for the arithmetic opcodes, which are
/// handled by [`arithmetic`](super::arithmetic).
pub fn execute(op: Opcode, a: u8, b: u8) -> u8 {
    let (a, b) = (a & NIBBLE_MASK, b & NIBBLE_MASK);
    let result = match op {
        Opcode::And => a & b,
        Opcode::Or => a | b,
        Opcode::Xor => a ^ b,
        Opcode::Nor => !(a | b),
        Opcode::Not => !a,
        Opcode::Pass => b,
        Opcode::Add | Opcode::Sub => 0,
    };
    result & NIBBLE_MASK
}
