//! Parity flag formula.
//!
//! Parity is a pure function of the final `(result, carry)` pair. The same
//! scheme must be used by the reference model and the device; it is a model
//! configuration constant, never chosen per opcode.

use serde::{Deserialize, Serialize};

use crate::common::constants::NIBBLE_MASK;

/// Parity convention over the five bits `{carry, result[3:0]}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ParityScheme {
    /// Parity bit makes the total number of ones even (XOR-reduce).
    #[default]
    Even,
    /// Parity bit makes the total number of ones odd.
    Odd,
}

impl ParityScheme {
    /// Computes the parity bit for `result` (low 4 bits) and `carry` (bit 0).
    #[inline]
    pub const fn compute(self, result: u8, carry: u8) -> u8 {
        let ones = (result & NIBBLE_MASK).count_ones() + (carry & 1) as u32;
        let even = (ones & 1) as u8;
        match self {
            Self::Even => even,
            Self::Odd => even ^ 1,
        }
    }
}
