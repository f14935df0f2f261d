//! Stimulus sequencer.
//!
//! Drives the device through the power-on reset sequence and then through
//! the scenario list, one scenario per step:
//!
//! `Init → ResetHold → ResetRelease → EnableAssert → ScenarioLoop(i) → Done`
//!
//! Each scenario asserts its pins, waits its active edge(s), waits the fixed
//! settle delay, samples `uo_out`, resolves it, and hands it to the verdict
//! engine together with the reference model's expectation. The first fatal
//! verdict stops the loop in [`Phase::Failed`]; no further pins are driven
//! and no further edges are delivered.

use tracing::{debug, error, info};

use super::scenario::Scenario;
use super::scheduler::{ClockScheduler, Scheduler};
use crate::common::constants::OUTPUT_FIELD_BITS;
use crate::common::{Logic, VerifyError};
use crate::config::{Config, TimingConfig};
use crate::device::{Device, InputSignal, OutputSignal};
use crate::model::{AluModel, AluOutput, ControlState};
use crate::report::{Outcome, RunReport, ScenarioVerdict};
use crate::resolver;
use crate::verdict;

/// Position of the sequencer in its state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing driven yet.
    Init,
    /// Reset asserted, enable low, waiting out the hold time.
    ResetHold,
    /// Reset released, waiting one release period.
    ResetRelease,
    /// Enable raised.
    EnableAssert,
    /// Executing scenario `i`.
    ScenarioLoop(usize),
    /// Every scenario produced a passing verdict.
    Done,
    /// Scenario `at` produced a fatal verdict.
    Failed {
        /// Index of the failing scenario.
        at: usize,
    },
}

/// Sequences stimulus and verdicts over a clocked device.
///
/// The sequencer owns the device; nothing else can drive its pins while a run
/// is in progress.
#[derive(Debug)]
pub struct Sequencer<D: Device, S: Scheduler = ClockScheduler> {
    device: D,
    scheduler: S,
    model: AluModel,
    timing: TimingConfig,
    trace_samples: bool,
    phase: Phase,
}

impl<D: Device> Sequencer<D, ClockScheduler> {
    /// Creates a sequencer with a free-running clock at the configured period.
    ///
    /// # Errors
    ///
    /// Returns [`VerifyError::InvalidConfig`] if the timing contract is violated.
    pub fn new(device: D, config: &Config) -> Result<Self, VerifyError> {
        let scheduler = ClockScheduler::new(config.timing.clock_period_ns);
        Self::with_scheduler(device, scheduler, config)
    }
}

impl<D: Device, S: Scheduler> Sequencer<D, S> {
    /// Creates a sequencer over an explicit scheduler.
    ///
    /// # Errors
    ///
    /// Returns [`VerifyError::InvalidConfig`] if the timing contract is violated.
    pub fn with_scheduler(device: D, scheduler: S, config: &Config) -> Result<Self, VerifyError> {
        config.validate()?;
        Ok(Self {
            device,
            scheduler,
            model: AluModel::from_config(&config.model),
            timing: config.timing,
            trace_samples: config.general.trace_samples,
            phase: Phase::Init,
        })
    }

    /// Current state-machine phase.
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// The device under test.
    pub const fn device(&self) -> &D {
        &self.device
    }

    /// The reference model in use.
    pub const fn model(&self) -> &AluModel {
        &self.model
    }

    /// Current simulated time in nanoseconds.
    pub fn now_ns(&self) -> u64 {
        self.scheduler.now_ns()
    }

    /// Releases the device.
    pub fn into_device(self) -> D {
        self.device
    }

    /// Runs the reset sequence and then every scenario in order.
    ///
    /// The returned report holds a verdict for every scenario executed, up to
    /// and including the first failure, and the aggregate status.
    pub fn run(&mut self, scenarios: &[Scenario]) -> RunReport {
        let mut report = RunReport::new(self.device.name());
        info!(
            device = self.device.name(),
            scenarios = scenarios.len(),
            "starting verification run"
        );

        self.power_on_reset();

        for (index, scenario) in scenarios.iter().enumerate() {
            self.phase = Phase::ScenarioLoop(index);
            let (verdict, outcome) = self.run_scenario(scenario);
            report.record(verdict);
            if let Err(err) = outcome {
                error!(scenario = %scenario.name, "{err}");
                self.phase = Phase::Failed { at: index };
                report.finish_failed(err);
                return self.finish(report);
            }
        }

        self.phase = Phase::Done;
        info!(scenarios = scenarios.len(), "all scenarios passed");
        report.finish_passed();
        self.finish(report)
    }

    fn finish(&self, mut report: RunReport) -> RunReport {
        report.clock_edges = self.scheduler.edge_count();
        report.end_time_ns = self.scheduler.now_ns();
        report
    }

    /// `Init → ResetHold → ResetRelease → EnableAssert`.
    fn power_on_reset(&mut self) {
        self.phase = Phase::Init;
        self.device.drive(InputSignal::RstN, 0);
        self.device.drive(InputSignal::Ena, 0);

        self.phase = Phase::ResetHold;
        debug!(hold_ns = self.timing.reset_hold_ns, "holding reset");
        self.scheduler
            .wait(self.timing.reset_hold_ns, &mut self.device);

        self.phase = Phase::ResetRelease;
        self.device.drive(InputSignal::RstN, 1);
        debug!(
            time_ns = self.scheduler.now_ns(),
            release_ns = self.timing.reset_release_ns,
            "reset released"
        );
        self.scheduler
            .wait(self.timing.reset_release_ns, &mut self.device);

        self.phase = Phase::EnableAssert;
        self.device.drive(InputSignal::Ena, 1);
        debug!(time_ns = self.scheduler.now_ns(), "enable asserted");
    }

    fn drive_control(&mut self, control: ControlState) {
        self.device
            .drive(InputSignal::RstN, u8::from(!control.reset_active));
        self.device
            .drive(InputSignal::Ena, u8::from(control.enable_active));
    }

    /// Applies, clocks, samples, and judges one scenario.
    fn run_scenario(&mut self, scenario: &Scenario) -> (ScenarioVerdict, Result<(), VerifyError>) {
        self.drive_control(scenario.control);
        self.device
            .drive(InputSignal::UiIn, scenario.stimulus.ui_in());
        self.device
            .drive(InputSignal::UioIn, scenario.opcode.bits());

        for _ in 0..scenario.edges.max(1) {
            let _ = self.scheduler.wait_rising_edge(&mut self.device);
        }
        self.scheduler.wait(self.timing.settle_ns, &mut self.device);

        let raw = self.device.sample(OutputSignal::UoOut);
        let resolved = resolver::resolve(&raw);
        let field_indeterminate =
            (0..OUTPUT_FIELD_BITS).any(|i| raw.bit(i).is_some_and(Logic::is_indeterminate));
        if self.trace_samples || field_indeterminate {
            debug!(
                scenario = %scenario.name,
                raw = %raw,
                resolved = %format!("{resolved:#010b}"),
                field_indeterminate,
                "uo_out sampled"
            );
        }

        let (a, b) = scenario.stimulus.operands();
        let expected = self
            .model
            .expected_for(a, b, scenario.opcode, scenario.control);
        let outcome = verdict::check(scenario, resolved, expected);
        let observed = AluOutput::from_word(resolved);

        if outcome.is_ok() {
            info!(scenario = %scenario.name, %observed, "passed");
        }

        let verdict = ScenarioVerdict {
            scenario: scenario.name.clone(),
            opcode: scenario.opcode,
            time_ns: self.scheduler.now_ns(),
            raw: raw.to_string(),
            resolved,
            expected,
            observed,
            outcome: match &outcome {
                Ok(()) => Outcome::Pass,
                Err(err) => Outcome::Fail {
                    cause: err.to_string(),
                },
            },
        };
        (verdict, outcome)
    }
}
