//! Run reporting.
//!
//! This module records the outcome of a verification run. It provides:
//! 1. **Per-scenario verdicts:** Time, raw and resolved samples, expected and observed fields.
//! 2. **Aggregate status:** Passed, or the first fatal failure with its cause.
//! 3. **Rendering:** A fixed-width text table (`Display`) and JSON (`serde`).

use std::fmt;

use serde::Serialize;

use crate::common::VerifyError;
use crate::model::{AluOutput, Opcode};

/// Outcome of a single scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "lowercase")]
pub enum Outcome {
    /// The sample matched.
    Pass,
    /// The sample failed; the run stopped here.
    Fail {
        /// Human-readable cause.
        cause: String,
    },
}

/// Record of one checked scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScenarioVerdict {
    /// Scenario name.
    pub scenario: String,
    /// Opcode driven.
    pub opcode: Opcode,
    /// Simulated time of the sample, in nanoseconds.
    pub time_ns: u64,
    /// Raw `uo_out` as an MSB-first HDL bit string.
    pub raw: String,
    /// `uo_out` after indeterminate resolution.
    pub resolved: u64,
    /// Reference model output.
    pub expected: AluOutput,
    /// Device output unpacked from the resolved word.
    pub observed: AluOutput,
    /// Pass or fail.
    pub outcome: Outcome,
}

impl ScenarioVerdict {
    /// Returns `true` if this scenario passed.
    pub const fn passed(&self) -> bool {
        matches!(self.outcome, Outcome::Pass)
    }
}

/// Aggregate status of a run.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RunStatus {
    /// The sequencer has not finished.
    #[default]
    Incomplete,
    /// Every scenario passed.
    Passed,
    /// The run stopped at the first fatal failure.
    Failed {
        /// Scenario that failed.
        scenario: String,
        /// Human-readable cause.
        cause: String,
    },
}

/// Full record of a run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunReport {
    /// Name of the device under test.
    pub device: String,
    /// Verdicts in execution order, up to and including the failing one.
    pub verdicts: Vec<ScenarioVerdict>,
    /// Aggregate status.
    pub status: RunStatus,
    /// Rising edges delivered over the whole run, reset phase included.
    pub clock_edges: u64,
    /// Simulated time at the end of the run, in nanoseconds.
    pub end_time_ns: u64,
    #[serde(skip)]
    error: Option<VerifyError>,
}

impl RunReport {
    /// Creates an empty report for `device`.
    pub fn new(device: impl Into<String>) -> Self {
        Self {
            device: device.into(),
            ..Self::default()
        }
    }

    /// Appends a verdict.
    pub fn record(&mut self, verdict: ScenarioVerdict) {
        self.verdicts.push(verdict);
    }

    /// Marks the run as passed.
    pub fn finish_passed(&mut self) {
        self.status = RunStatus::Passed;
    }

    /// Marks the run as failed with `error`.
    pub fn finish_failed(&mut self, error: VerifyError) {
        self.status = RunStatus::Failed {
            scenario: error.scenario().unwrap_or_default().to_string(),
            cause: error.to_string(),
        };
        self.error = Some(error);
    }

    /// Returns `true` if every scenario passed and the run completed.
    pub fn passed(&self) -> bool {
        self.status == RunStatus::Passed
    }

    /// Number of scenarios that passed.
    pub fn pass_count(&self) -> usize {
        self.verdicts.iter().filter(|v| v.passed()).count()
    }

    /// The fatal error, if the run failed.
    pub const fn error(&self) -> Option<&VerifyError> {
        self.error.as_ref()
    }

    /// Converts the report into `Ok(report)` or the fatal error.
    ///
    /// # Errors
    ///
    /// Returns the first fatal [`VerifyError`] of the run. An incomplete run
    /// returns a [`VerifyError::PreconditionViolation`].
    pub fn into_result(self) -> Result<Self, VerifyError> {
        if self.passed() {
            return Ok(self);
        }
        if let Some(err) = self.error {
            return Err(err);
        }
        Err(match self.status {
            RunStatus::Failed { scenario, cause } => VerifyError::PreconditionViolation {
                scenario,
                detail: cause,
            },
            RunStatus::Passed | RunStatus::Incomplete => VerifyError::PreconditionViolation {
                scenario: String::new(),
                detail: "run did not complete".to_string(),
            },
        })
    }

    /// Renders the report as pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns [`VerifyError::Serialize`] if serialization fails.
    pub fn to_json(&self) -> Result<String, VerifyError> {
        serde_json::to_string_pretty(self).map_err(|e| VerifyError::Serialize(e.to_string()))
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "==========================================================")?;
        writeln!(f, "ALU VERIFICATION REPORT: {}", self.device)?;
        writeln!(f, "==========================================================")?;
        writeln!(
            f,
            "{:<24} {:<5} {:>7} {:<9} {:<6} {:<6} {}",
            "scenario", "op", "t(ns)", "uo_out", "exp", "obs", "verdict"
        )?;
        writeln!(f, "----------------------------------------------------------")?;
        for v in &self.verdicts {
            writeln!(
                f,
                "{:<24} {:<5} {:>7} {:<9} {:#04x}   {:#04x}   {}",
                v.scenario,
                v.opcode.mnemonic(),
                v.time_ns,
                v.raw,
                v.expected.to_word(),
                v.observed.to_word(),
                if v.passed() { "PASS" } else { "FAIL" }
            )?;
        }
        writeln!(f, "----------------------------------------------------------")?;
        writeln!(f, "sim_time_ns              {}", self.end_time_ns)?;
        writeln!(f, "clock_edges              {}", self.clock_edges)?;
        writeln!(
            f,
            "scenarios_passed         {}/{}",
            self.pass_count(),
            self.verdicts.len()
        )?;
        match &self.status {
            RunStatus::Passed => writeln!(f, "status                   PASSED")?,
            RunStatus::Incomplete => writeln!(f, "status                   INCOMPLETE")?,
            RunStatus::Failed { cause, .. } => {
                writeln!(f, "status                   FAILED")?;
                writeln!(f, "cause                    {cause}")?;
            }
        }
        write!(f, "==========================================================")
    }
}
