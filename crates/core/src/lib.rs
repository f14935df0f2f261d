//! 4-bit ALU verification library.
//!
//! This crate checks a clocked 4-bit ALU against an independent reference model with the following:
//! 1. **Reference model:** Bit-exact result, carry, and parity with reset/enable precedence.
//! 2. **Resolver:** Maps indeterminate (`x`/`z`) sample bits to concrete values with one fixed rule.
//! 3. **Sequencer:** Drives reset, enable, and scenario stimulus on a simulated clock and samples after settle.
//! 4. **Verdicts:** Field-by-field comparison with fail-fast reporting.
//! 5. **Device:** A pin-level `Device` boundary plus a behavioral Tiny Tapeout ALU model.
//!
//! # Examples
//!
//! ```
//! use aluv_core::config::Config;
//! use aluv_core::device::TtAlu;
//! use aluv_core::sim::{self, scenario};
//!
//! let report = sim::verify(TtAlu::new(), &Config::default(), &scenario::default_script()).unwrap();
//! assert!(report.passed());
//! ```

/// Common types and constants (bus layout, errors, ternary bits).
pub mod common;
/// Harness configuration (timing, model conventions, JSON loading).
pub mod config;
/// Device boundary and the behavioral ALU model.
pub mod device;
/// Reference ALU model.
pub mod model;
/// Per-scenario verdicts and run status.
pub mod report;
/// Indeterminate-bit resolution.
pub mod resolver;
/// Scheduler, scenarios, and the stimulus sequencer.
pub mod sim;
/// Field-by-field verdict engine.
pub mod verdict;

/// Root configuration type; use `Config::default()` or load from JSON.
pub use crate::config::Config;
/// Pin-level device trait.
pub use crate::device::Device;
/// Reference model.
pub use crate::model::AluModel;
/// Aggregate run result.
pub use crate::report::RunReport;
/// Stimulus sequencer.
pub use crate::sim::Sequencer;
