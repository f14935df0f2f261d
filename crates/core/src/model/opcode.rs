//! ALU opcode encoding.
//!
//! The opcode is a 3-bit field on `uio_in[2:0]`. All eight encodings are
//! defined, so any `Opcode` value is valid by construction; only the raw
//! `u8` conversion can fail.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::common::VerifyError;
use crate::common::constants::OPCODE_MASK;

/// Operation selected by the opcode pins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
#[repr(u8)]
pub enum Opcode {
    /// `a + b`, carry on unsigned overflow.
    Add = 0b000,
    /// `a - b`, carry per the configured [`SubCarry`](super::SubCarry) convention.
    Sub = 0b001,
    /// Bitwise `a & b`.
    And = 0b010,
    /// Bitwise `a | b`.
    Or = 0b011,
    /// Bitwise `a ^ b`.
    Xor = 0b100,
    /// Bitwise `!(a | b)`.
    Nor = 0b101,
    /// Bitwise `!a`; `b` is ignored.
    Not = 0b110,
    /// Forwards `b`; `a` is ignored.
    Pass = 0b111,
}

impl Opcode {
    /// Every opcode in encoding order.
    pub const ALL: [Self; 8] = [
        Self::Add,
        Self::Sub,
        Self::And,
        Self::Or,
        Self::Xor,
        Self::Nor,
        Self::Not,
        Self::Pass,
    ];

    /// The 3-bit encoding driven onto `uio_in`.
    #[inline]
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Decodes the low three bits of a bus value. Never fails.
    #[inline]
    pub const fn from_bits_truncate(raw: u8) -> Self {
        Self::ALL[(raw & OPCODE_MASK) as usize]
    }

    /// Upper-case mnemonic, e.g. `"ADD"`.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Add => "ADD",
            Self::Sub => "SUB",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Xor => "XOR",
            Self::Nor => "NOR",
            Self::Not => "NOT",
            Self::Pass => "PASS",
        }
    }

    /// Returns `true` for ADD and SUB, the only opcodes that can set carry.
    pub const fn is_arithmetic(self) -> bool {
        matches!(self, Self::Add | Self::Sub)
    }
}

impl TryFrom<u8> for Opcode {
    type Error = VerifyError;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        if raw & !OPCODE_MASK != 0 {
            return Err(VerifyError::InvalidOpcode(raw));
        }
        Ok(Self::from_bits_truncate(raw))
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}
