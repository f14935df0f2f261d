//! ALU arithmetic operations.
//!
//! Implements 4-bit addition and subtraction with wraparound. Results are
//! always masked to a nibble; the carry flag is returned alongside.
//!
//! The carry produced by subtraction depends on the device's convention,
//! selected by [`SubCarry`].

use serde::{Deserialize, Serialize};

use crate::common::constants::{NIBBLE_MASK, NIBBLE_MODULUS};

/// How the device reports carry for SUB.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SubCarry {
    /// Carry is the borrow-out: 1 iff `a < b`.
    ///
    /// This is what a 5-bit `{carry, result} = a - b` produces in HDL.
    #[default]
    Borrow,
    /// Carry is the two's-complement carry-out of `a + !b + 1`: 1 iff `a >= b`.
    NotBorrow,
    /// SUB never sets carry.
    Zero,
}

/// Executes ADD on two nibbles.
///
/// # Returns
///
/// `(result, carry)` where `result = (a + b) mod 16` and `carry = 1` iff
/// `a + b >= 16`.
pub fn add(a: u8, b: u8) -> (u8, u8) {
    let sum = u16::from(a & NIBBLE_MASK) + u16::from(b & NIBBLE_MASK);
    let result = (sum % NIBBLE_MODULUS) as u8;
    (result, u8::from(sum >= NIBBLE_MODULUS))
}

/// Executes SUB on two nibbles.
///
/// # Returns
///
/// `(result, carry)` where `result = (a - b) mod 16` and `carry` follows
/// `convention`.
pub fn sub(a: u8, b: u8, convention: SubCarry) -> (u8, u8) {
    let (a, b) = (a & NIBBLE_MASK, b & NIBBLE_MASK);
    let result = a.wrapping_sub(b) & NIBBLE_MASK;
    let carry = match convention {
        SubCarry::Borrow => u8::from(a < b),
        SubCarry::NotBorrow => u8::from(a >= b),
        SubCarry::Zero => 0,
    };
    (result, carry)
}
