//! Reference ALU model.
//!
//! This module is the independent golden model the device is checked against.
//! It is a pure function of its inputs with no hidden state:
//! `(a, b, opcode, reset_active, enable_active) -> (result, carry, parity)`.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Sub (with a configurable SUB carry convention)
//! - [`bitwise`]:    And, Or, Xor, Nor, Not, Pass
//! - [`parity`]:     The parity flag formula
//! - [`opcode`]:     The 3-bit opcode encoding

/// 4-bit add and subtract.
pub mod arithmetic;

/// Bitwise operations (and, or, xor, nor, not, pass).
pub mod bitwise;

/// Opcode enumeration and encoding.
pub mod opcode;

/// Parity flag formula.
pub mod parity;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use arithmetic::SubCarry;
pub use opcode::Opcode;
pub use parity::ParityScheme;

use crate::common::constants::{CARRY_BIT, NIBBLE_MASK, OUTPUT_MASK, PARITY_BIT, RESULT_SHIFT};
use crate::config::ModelConfig;

/// Reset and enable as seen by the ALU for one clock edge.
///
/// These are logical (active-high) levels; the device's reset pin is
/// active-low and the sequencer inverts it when driving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ControlState {
    /// Reset is asserted (`rst_n == 0`).
    #[serde(default)]
    pub reset_active: bool,
    /// Enable is asserted (`ena == 1`).
    #[serde(default = "ControlState::default_enable")]
    pub enable_active: bool,
}

impl ControlState {
    /// Normal operation: reset released, enable asserted.
    pub const RUNNING: Self = Self {
        reset_active: false,
        enable_active: true,
    };

    /// Reset asserted with enable still high.
    pub const RESET_WHILE_ENABLED: Self = Self {
        reset_active: true,
        enable_active: true,
    };

    /// Reset released, enable dropped.
    pub const DISABLED: Self = Self {
        reset_active: false,
        enable_active: false,
    };

    /// Scenarios that omit `enable_active` run enabled.
    const fn default_enable() -> bool {
        true
    }
}

impl Default for ControlState {
    fn default() -> Self {
        Self::RUNNING
    }
}

/// The three fields of the ALU output bus.
///
/// Used both for the reference model's expectation and for a resolved device
/// sample, so the two can be compared field by field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct AluOutput {
    /// 4-bit result.
    pub result: u8,
    /// Carry flag (0 or 1).
    pub carry: u8,
    /// Parity flag (0 or 1).
    pub parity: u8,
}

/// Output computed by the reference model.
pub type ExpectedOutput = AluOutput;

/// Output unpacked from a resolved device sample.
pub type ObservedOutput = AluOutput;

impl AluOutput {
    /// All fields zero: the output under reset or with enable low.
    pub const ZERO: Self = Self {
        result: 0,
        carry: 0,
        parity: 0,
    };

    /// Unpacks result (bits 0..4), carry (bit 4), and parity (bit 5) from a bus word.
    ///
    /// Bits above the 6-bit field are ignored.
    pub const fn from_word(word: u64) -> Self {
        let word = word & OUTPUT_MASK;
        Self {
            result: ((word >> RESULT_SHIFT) as u8) & NIBBLE_MASK,
            carry: ((word >> CARRY_BIT) & 1) as u8,
            parity: ((word >> PARITY_BIT) & 1) as u8,
        }
    }

    /// Packs the fields back into the 6-bit bus layout.
    pub const fn to_word(self) -> u64 {
        (((self.result & NIBBLE_MASK) as u64) << RESULT_SHIFT)
            | (((self.carry & 1) as u64) << CARRY_BIT)
            | (((self.parity & 1) as u64) << PARITY_BIT)
    }
}

impl fmt::Display for AluOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "result={} carry={} parity={}",
            self.result, self.carry, self.parity
        )
    }
}

/// Reference ALU model.
///
/// Holds the two device-defined conventions (parity scheme and SUB carry);
/// everything else is fixed by the opcode table.
///
/// # Examples
///
/// ```
/// use aluv_core::model::{AluModel, AluOutput, Opcode};
///
/// let model = AluModel::default();
///
/// let out = model.expected(3, 2, Opcode::Add, false, true);
/// assert_eq!(out.result, 5);
/// assert_eq!(out.carry, 0);
///
/// // 1 - 5 wraps to 12
/// assert_eq!(model.expected(1, 5, Opcode::Sub, false, true).result, 12);
///
/// // Reset dominates enable and opcode
/// assert_eq!(model.expected(9, 9, Opcode::Add, true, true), AluOutput::ZERO);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AluModel {
    parity: ParityScheme,
    sub_carry: SubCarry,
}

impl AluModel {
    /// Creates a model with explicit conventions.
    pub const fn new(parity: ParityScheme, sub_carry: SubCarry) -> Self {
        Self { parity, sub_carry }
    }

    /// Creates a model from the `model` section of the configuration.
    pub const fn from_config(config: &ModelConfig) -> Self {
        Self::new(config.parity, config.sub_carry)
    }

    /// Parity scheme in use.
    pub const fn parity_scheme(&self) -> ParityScheme {
        self.parity
    }

    /// SUB carry convention in use.
    pub const fn sub_carry(&self) -> SubCarry {
        self.sub_carry
    }

    /// Computes the expected output for one clock edge.
    ///
    /// Precedence: reset forces all-zero output regardless of enable and
    /// opcode; otherwise enable low forces all-zero output; otherwise the
    /// opcode selects the computation. Operands are masked to 4 bits.
    pub fn expected(
        &self,
        a: u8,
        b: u8,
        opcode: Opcode,
        reset_active: bool,
        enable_active: bool,
    ) -> ExpectedOutput {
        if reset_active || !enable_active {
            return AluOutput::ZERO;
        }

        let (result, carry) = match opcode {
            Opcode::Add => arithmetic::add(a, b),
            Opcode::Sub => arithmetic::sub(a, b, self.sub_carry),
            Opcode::And | Opcode::Or | Opcode::Xor | Opcode::Nor | Opcode::Not | Opcode::Pass => {
                (bitwise::execute(opcode, a, b), 0)
            }
        };

        AluOutput {
            result,
            carry,
            parity: self.parity.compute(result, carry),
        }
    }

    /// Same as [`AluModel::expected`], taking the control pair as a [`ControlState`].
    #[inline]
    pub fn expected_for(&self, a: u8, b: u8, opcode: Opcode, control: ControlState) -> ExpectedOutput {
        self.expected(a, b, opcode, control.reset_active, control.enable_active)
    }
}
