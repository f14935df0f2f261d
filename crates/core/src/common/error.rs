//! Verification error definitions.
//!
//! This module defines every fatal condition the harness can raise. It provides:
//! 1. **Verdict failures:** Observed output disagreeing with the reference model, and
//!    scenario preconditions that did not hold.
//! 2. **Setup failures:** Invalid opcodes, bit strings, configuration, and scenario files.
//! 3. **Output failures:** A report that cannot be serialized.
//!
//! There is no warning tier. Every variant terminates the run that produced it.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// One field of the ALU output bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputField {
    /// 4-bit result, bus bits 0..4.
    Result,
    /// Carry/borrow flag, bus bit 4.
    Carry,
    /// Parity flag, bus bit 5.
    Parity,
}

impl fmt::Display for OutputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Result => "result",
            Self::Carry => "carry",
            Self::Parity => "parity",
        })
    }
}

/// A single field that differed between expected and observed output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldMismatch {
    /// Which output field differed.
    pub field: OutputField,
    /// Value produced by the reference model.
    pub expected: u8,
    /// Value sampled (and resolved) from the device.
    pub observed: u8,
}

impl fmt::Display for FieldMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} expected {}, observed {}",
            self.field, self.expected, self.observed
        )
    }
}

/// Renders a mismatch list as `"result expected 5, observed 4; carry ..."`.
fn join_mismatches(mismatches: &[FieldMismatch]) -> String {
    mismatches
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Errors raised by the verification core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerifyError {
    /// The device output disagreed with the reference model.
    ///
    /// Every differing field of the scenario is listed, not just the first.
    #[error("scenario `{scenario}` failed: {}", join_mismatches(.mismatches))]
    VerificationMismatch {
        /// Name of the failing scenario.
        scenario: String,
        /// All fields that differed, in bus order.
        mismatches: Vec<FieldMismatch>,
    },

    /// A scenario's own setup assumption did not hold (harness or ordering bug).
    #[error("scenario `{scenario}` precondition violated: {detail}")]
    PreconditionViolation {
        /// Name of the scenario whose precondition failed.
        scenario: String,
        /// What was assumed and what was seen.
        detail: String,
    },

    /// A raw value outside the 3-bit opcode space.
    #[error("invalid opcode {0:#05b}: opcodes are 3 bits wide")]
    InvalidOpcode(u8),

    /// A bit string containing characters other than `0 1 x z` (and aliases).
    #[error("invalid bit string `{0}`")]
    InvalidBitString(String),

    /// A configuration value that breaks the timing or model contract.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A configuration or scenario file that could not be read or parsed.
    #[error("cannot load `{path}`: {reason}")]
    Load {
        /// Path of the offending file.
        path: String,
        /// Underlying I/O or JSON error text.
        reason: String,
    },

    /// A run report that could not be rendered as JSON.
    #[error("cannot serialize report: {0}")]
    Serialize(String),
}

impl VerifyError {
    /// Returns `true` for the two verdict failures (mismatch, precondition).
    pub const fn is_verdict_failure(&self) -> bool {
        matches!(
            self,
            Self::VerificationMismatch { .. } | Self::PreconditionViolation { .. }
        )
    }

    /// Name of the scenario this error belongs to, if it is a verdict failure.
    pub fn scenario(&self) -> Option<&str> {
        match self {
            Self::VerificationMismatch { scenario, .. }
            | Self::PreconditionViolation { scenario, .. } => Some(scenario),
            _ => None,
        }
    }
}
