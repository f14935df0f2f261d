use aluv_core::config::Config;
use aluv_core::device::Device;
use aluv_core::report::RunReport;
use aluv_core::sim::{Scenario, Sequencer};

/// Routes `tracing` output through the test writer so it shows on failure only.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("aluv_core=debug")
        .with_test_writer()
        .try_init();
}

/// Runs `scenarios` on `device` with the default configuration.
pub fn run_default<D: Device>(device: D, scenarios: &[Scenario]) -> RunReport {
    run_with(device, &Config::default(), scenarios)
}

/// Runs `scenarios` on `device` with `config`.
pub fn run_with<D: Device>(device: D, config: &Config, scenarios: &[Scenario]) -> RunReport {
    init_tracing();
    let mut sequencer = Sequencer::new(device, config).unwrap();
    sequencer.run(scenarios)
}
