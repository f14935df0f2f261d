//! Configuration system for the verification harness.
//!
//! This module defines all configuration structures used to parameterize a run. It provides:
//! 1. **Defaults:** Baseline timing constants (clock period, reset hold, settle delay).
//! 2. **Structures:** Hierarchical config for general, timing, and reference-model settings.
//! 3. **Validation:** Checks that the timing contract holds before any stimulus is applied.
//!
//! Configuration is supplied as JSON (`Config::from_json_str`, `Config::from_path`) or
//! built with `Config::default()`, which reproduces the standard 50 MHz testbench.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::VerifyError;
use crate::model::{ParityScheme, SubCarry};

/// Default configuration constants for the harness.
mod defaults {
    /// Clock period in nanoseconds (20 ns = 50 MHz).
    pub const CLOCK_PERIOD_NS: u64 = 20;

    /// Time reset is held low after power-up (two clock periods).
    pub const RESET_HOLD_NS: u64 = 40;

    /// Wait after releasing reset before enable is raised (one clock period).
    pub const RESET_RELEASE_NS: u64 = 20;

    /// Delay after an active edge before the output bus is sampled.
    ///
    /// Must be shorter than the clock period so every sample lands between
    /// the edge that produced it and the next one.
    pub const SETTLE_NS: u64 = 10;

    /// Minimum reset hold, in clock periods.
    pub const MIN_RESET_HOLD_PERIODS: u64 = 2;

    /// Upper bound for the clock period and each reset phase (one second).
    ///
    /// Keeps every edge time of a run far below `u64::MAX`.
    pub const MAX_INTERVAL_NS: u64 = 1_000_000_000;
}

/// Root configuration structure containing all harness settings.
///
/// # Examples
///
/// ```
/// use aluv_core::config::Config;
///
/// let config = Config::default();
/// assert_eq!(config.timing.clock_period_ns, 20);
/// assert_eq!(config.timing.settle_ns, 10);
/// ```
///
/// Deserializing from JSON; omitted fields take their defaults:
///
/// ```
/// use aluv_core::config::Config;
/// use aluv_core::model::{ParityScheme, SubCarry};
///
/// let json = r#"{
///     "timing": { "clock_period_ns": 10, "reset_hold_ns": 30, "settle_ns": 2 },
///     "model": { "sub_carry": "not-borrow" }
/// }"#;
///
/// let config = Config::from_json_str(json).unwrap();
/// assert_eq!(config.timing.clock_period_ns, 10);
/// assert_eq!(config.timing.reset_release_ns, 20);
/// assert_eq!(config.model.sub_carry, SubCarry::NotBorrow);
/// assert_eq!(config.model.parity, ParityScheme::Even);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// General run settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Clock and sampling timeline
    #[serde(default)]
    pub timing: TimingConfig,
    /// Reference model conventions
    #[serde(default)]
    pub model: ModelConfig,
}

impl Config {
    /// Parses and validates a JSON configuration.
    ///
    /// # Errors
    ///
    /// Returns [`VerifyError::Load`] for malformed JSON and
    /// [`VerifyError::InvalidConfig`] if validation fails.
    pub fn from_json_str(json: &str) -> Result<Self, VerifyError> {
        let config: Self = serde_json::from_str(json).map_err(|e| VerifyError::Load {
            path: "<inline>".to_string(),
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses, and validates a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`VerifyError::Load`] if the file cannot be read or parsed and
    /// [`VerifyError::InvalidConfig`] if validation fails.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, VerifyError> {
        let path = path.as_ref();
        let load_err = |reason: String| VerifyError::Load {
            path: path.display().to_string(),
            reason,
        };
        let text = fs::read_to_string(path).map_err(|e| load_err(e.to_string()))?;
        let config: Self = serde_json::from_str(&text).map_err(|e| load_err(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the timing contract.
    ///
    /// # Errors
    ///
    /// Returns [`VerifyError::InvalidConfig`] describing the first violated rule.
    pub fn validate(&self) -> Result<(), VerifyError> {
        self.timing.validate()
    }
}

/// General run settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeneralConfig {
    /// Log every raw and resolved bus sample at debug level
    #[serde(default)]
    pub trace_samples: bool,
}

/// Clock and sampling timeline, in nanoseconds of simulated time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct TimingConfig {
    /// Clock period; rising edges occur at every multiple of it
    #[serde(default = "TimingConfig::default_clock_period_ns")]
    pub clock_period_ns: u64,

    /// Time reset is held after power-up (at least two periods)
    #[serde(default = "TimingConfig::default_reset_hold_ns")]
    pub reset_hold_ns: u64,

    /// Time between releasing reset and raising enable
    #[serde(default = "TimingConfig::default_reset_release_ns")]
    pub reset_release_ns: u64,

    /// Delay after an active edge before sampling (shorter than the period)
    #[serde(default = "TimingConfig::default_settle_ns")]
    pub settle_ns: u64,
}

impl TimingConfig {
    /// Returns the default clock period.
    const fn default_clock_period_ns() -> u64 {
        defaults::CLOCK_PERIOD_NS
    }

    /// Returns the default reset hold time.
    const fn default_reset_hold_ns() -> u64 {
        defaults::RESET_HOLD_NS
    }

    /// Returns the default reset release wait.
    const fn default_reset_release_ns() -> u64 {
        defaults::RESET_RELEASE_NS
    }

    /// Returns the default settle delay.
    const fn default_settle_ns() -> u64 {
        defaults::SETTLE_NS
    }

    /// Checks period, reset hold, and settle delay against each other.
    ///
    /// # Errors
    ///
    /// Returns [`VerifyError::InvalidConfig`] if the period is zero, any
    /// interval exceeds one second, the reset hold is shorter than two
    /// periods, the reset release is zero, or the settle delay is zero or not
    /// shorter than the period.
    pub fn validate(&self) -> Result<(), VerifyError> {
        if self.clock_period_ns == 0 {
            return Err(VerifyError::InvalidConfig(
                "clock_period_ns must be non-zero".to_string(),
            ));
        }
        for (name, value) in [
            ("clock_period_ns", self.clock_period_ns),
            ("reset_hold_ns", self.reset_hold_ns),
            ("reset_release_ns", self.reset_release_ns),
        ] {
            if value > defaults::MAX_INTERVAL_NS {
                return Err(VerifyError::InvalidConfig(format!(
                    "{name} ({value}) must not exceed {} ns",
                    defaults::MAX_INTERVAL_NS
                )));
            }
        }
        let min_hold = defaults::MIN_RESET_HOLD_PERIODS
            .checked_mul(self.clock_period_ns)
            .ok_or_else(|| {
                VerifyError::InvalidConfig(format!(
                    "clock_period_ns ({}) is too large",
                    self.clock_period_ns
                ))
            })?;
        if self.reset_hold_ns < min_hold {
            return Err(VerifyError::InvalidConfig(format!(
                "reset_hold_ns ({}) must cover at least {} clock periods ({} ns)",
                self.reset_hold_ns,
                defaults::MIN_RESET_HOLD_PERIODS,
                min_hold
            )));
        }
        if self.reset_release_ns == 0 {
            return Err(VerifyError::InvalidConfig(
                "reset_release_ns must be non-zero".to_string(),
            ));
        }
        if self.settle_ns == 0 || self.settle_ns >= self.clock_period_ns {
            return Err(VerifyError::InvalidConfig(format!(
                "settle_ns ({}) must be in 1..{} (below the clock period)",
                self.settle_ns, self.clock_period_ns
            )));
        }
        Ok(())
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            clock_period_ns: defaults::CLOCK_PERIOD_NS,
            reset_hold_ns: defaults::RESET_HOLD_NS,
            reset_release_ns: defaults::RESET_RELEASE_NS,
            settle_ns: defaults::SETTLE_NS,
        }
    }
}

/// Conventions shared by the reference model and the device.
///
/// Both must match the device under test; they are not per-opcode choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub struct ModelConfig {
    /// Parity formula over `{carry, result}`
    #[serde(default)]
    pub parity: ParityScheme,

    /// Carry convention for SUB
    #[serde(default)]
    pub sub_carry: SubCarry,
}
