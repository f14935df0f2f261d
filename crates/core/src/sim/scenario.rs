//! Scenario definitions and catalogues.
//!
//! A scenario is one named stimulus step: the control pins, the data byte,
//! the opcode, how many active edges to wait, and what to check afterwards.
//! Scenarios are plain data consumed in order by the
//! [`Sequencer`](super::Sequencer); they can be built in code, generated, or
//! loaded from JSON.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::common::VerifyError;
use crate::common::constants::{NIBBLE_MASK, OPERAND_A_SHIFT, OPERAND_B_SHIFT};
use crate::model::{ControlState, Opcode};

/// Data applied to `ui_in` for one scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stimulus {
    /// Two 4-bit operands, packed by the harness.
    Operands {
        /// Operand A (low nibble of `ui_in`).
        a: u8,
        /// Operand B (high nibble of `ui_in`).
        b: u8,
    },
    /// The raw `ui_in` byte.
    Raw(u8),
}

impl Stimulus {
    /// The byte driven onto `ui_in`. Operands are masked to 4 bits.
    pub const fn ui_in(self) -> u8 {
        match self {
            Self::Operands { a, b } => {
                ((a & NIBBLE_MASK) << OPERAND_A_SHIFT) | ((b & NIBBLE_MASK) << OPERAND_B_SHIFT)
            }
            Self::Raw(byte) => byte,
        }
    }

    /// Operands `(a, b)` as the ALU sees them.
    pub const fn operands(self) -> (u8, u8) {
        let byte = self.ui_in();
        (
            (byte >> OPERAND_A_SHIFT) & NIBBLE_MASK,
            (byte >> OPERAND_B_SHIFT) & NIBBLE_MASK,
        )
    }
}

/// What the verdict engine checks after a scenario's sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Check {
    /// Compare result, carry, and parity against the reference model.
    #[default]
    Reference,
    /// Setup step: the result must be non-zero, otherwise a later check
    /// would not prove anything.
    NonZeroResult,
}

/// One ordered stimulus step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    /// Name used in logs and failure messages.
    pub name: String,
    /// Reset and enable levels during the step (defaults to running).
    #[serde(default = "Scenario::default_control")]
    pub control: ControlState,
    /// Data byte source.
    pub stimulus: Stimulus,
    /// Opcode driven on `uio_in[2:0]`.
    pub opcode: Opcode,
    /// Active edges to wait before the settle delay (at least 1).
    #[serde(default = "Scenario::default_edges")]
    pub edges: u32,
    /// Check applied to the sample.
    #[serde(default)]
    pub check: Check,
}

impl Scenario {
    const fn default_control() -> ControlState {
        ControlState::RUNNING
    }

    const fn default_edges() -> u32 {
        1
    }

    /// A running-state scenario checked against the reference model.
    pub fn new(name: impl Into<String>, opcode: Opcode, stimulus: Stimulus) -> Self {
        Self {
            name: name.into(),
            control: ControlState::RUNNING,
            stimulus,
            opcode,
            edges: 1,
            check: Check::Reference,
        }
    }

    /// Shorthand for an operand-pair scenario.
    pub fn operands(name: impl Into<String>, opcode: Opcode, a: u8, b: u8) -> Self {
        Self::new(name, opcode, Stimulus::Operands { a, b })
    }

    /// Replaces the control state.
    #[must_use]
    pub const fn with_control(mut self, control: ControlState) -> Self {
        self.control = control;
        self
    }

    /// Replaces the check.
    #[must_use]
    pub const fn with_check(mut self, check: Check) -> Self {
        self.check = check;
        self
    }

    /// Waits `edges` active edges instead of one. Zero is raised to one.
    #[must_use]
    pub fn with_edges(mut self, edges: u32) -> Self {
        self.edges = edges.max(1);
        self
    }
}

/// The directed regression script for the Tiny Tapeout ALU.
///
/// Order matters: reset is asserted while enabled, released, every opcode is
/// exercised once, and the enable-gating check is guarded by a precondition
/// step proving the ALU was producing a non-zero result just before.
pub fn default_script() -> Vec<Scenario> {
    vec![
        // Arm the datapath with a known operation before the reset check.
        Scenario::new("enabled before reset", Opcode::Add, Stimulus::Raw(0x23)),
        Scenario::new("reset while enabled", Opcode::Add, Stimulus::Raw(0x23))
            .with_control(ControlState::RESET_WHILE_ENABLED),
        Scenario::new("reset released", Opcode::Add, Stimulus::Raw(0x23)),
        Scenario::operands("ADD", Opcode::Add, 3, 2),
        Scenario::operands("SUB", Opcode::Sub, 1, 5),
        Scenario::operands("AND", Opcode::And, 5, 10),
        Scenario::operands("OR", Opcode::Or, 12, 1),
        Scenario::operands("XOR", Opcode::Xor, 12, 3),
        Scenario::operands("NOR", Opcode::Nor, 0, 15),
        Scenario::new("NOT", Opcode::Not, Stimulus::Raw(0x04)),
        Scenario::new("PASS", Opcode::Pass, Stimulus::Raw(0x78)),
        Scenario::operands("active before disable", Opcode::Add, 2, 1)
            .with_check(Check::NonZeroResult),
        Scenario::operands("disabled", Opcode::Add, 2, 1).with_control(ControlState::DISABLED),
    ]
}

/// Every opcode over every operand pair, running state: 2048 scenarios.
pub fn exhaustive() -> Vec<Scenario> {
    Opcode::ALL
        .iter()
        .flat_map(|&op| {
            (0..16u8).flat_map(move |a| {
                (0..16u8).map(move |b| Scenario::operands(format!("{op} a={a} b={b}"), op, a, b))
            })
        })
        .collect()
}

/// Parses a JSON array of scenarios.
///
/// # Errors
///
/// Returns [`VerifyError::Load`] if the text is not a valid scenario list.
pub fn from_json_str(json: &str) -> Result<Vec<Scenario>, VerifyError> {
    serde_json::from_str(json).map_err(|e| VerifyError::Load {
        path: "<inline>".to_string(),
        reason: e.to_string(),
    })
}

/// Reads a JSON array of scenarios from `path`.
///
/// # Errors
///
/// Returns [`VerifyError::Load`] if the file cannot be read or parsed.
pub fn load(path: impl AsRef<Path>) -> Result<Vec<Scenario>, VerifyError> {
    let path = path.as_ref();
    let load_err = |reason: String| VerifyError::Load {
        path: path.display().to_string(),
        reason,
    };
    let text = fs::read_to_string(path).map_err(|e| load_err(e.to_string()))?;
    serde_json::from_str(&text).map_err(|e| load_err(e.to_string()))
}
