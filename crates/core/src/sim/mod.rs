//! Simulation: scheduler, scenarios, and the stimulus sequencer.

/// Scenario records and the built-in catalogues.
pub mod scenario;

/// Clock scheduler (edge and fixed-delay suspension points).
pub mod scheduler;

/// Reset sequence and scenario loop.
pub mod sequencer;

pub use scenario::{Check, Scenario, Stimulus};
pub use scheduler::{ClockScheduler, Scheduler};
pub use sequencer::{Phase, Sequencer};

use crate::common::VerifyError;
use crate::config::Config;
use crate::device::Device;
use crate::report::RunReport;

/// Runs `scenarios` against `device` on a free-running clock and fails on the first bad verdict.
///
/// # Errors
///
/// Returns [`VerifyError::InvalidConfig`] for a bad configuration, or the
/// first fatal verdict ([`VerifyError::VerificationMismatch`] or
/// [`VerifyError::PreconditionViolation`]).
pub fn verify<D: Device>(
    device: D,
    config: &Config,
    scenarios: &[Scenario],
) -> Result<RunReport, VerifyError> {
    Sequencer::new(device, config)?.run(scenarios).into_result()
}
