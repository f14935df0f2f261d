//! 4-bit ALU verification CLI.
//!
//! This binary runs the verification core against the behavioral Tiny Tapeout ALU. It performs:
//! 1. **Directed run:** The built-in regression script (reset, every opcode, enable gating).
//! 2. **Exhaustive run:** Every opcode over every operand pair.
//! 3. **Custom run:** Scenarios and configuration loaded from JSON files.

use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use aluv_core::config::Config;
use aluv_core::device::TtAlu;
use aluv_core::model::SubCarry;
use aluv_core::sim::{Sequencer, scenario};

#[derive(Parser, Debug)]
#[command(
    name = "aluv",
    author,
    version,
    about = "Cycle-timed verification of a 4-bit synchronous ALU",
    long_about = "Drive the behavioral Tiny Tapeout ALU through reset, enable gating, and every opcode, \
                  comparing each sample against the reference model.\n\nExamples:\n  \
                  aluv run\n  aluv run --exhaustive\n  aluv run --config timing.json --scenarios smoke.json --json"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a scenario list and print the verdict table.
    Run {
        /// JSON configuration file (timing, model conventions).
        #[arg(short, long)]
        config: Option<String>,

        /// JSON scenario list to run instead of the built-in script.
        #[arg(short, long, conflicts_with = "exhaustive")]
        scenarios: Option<String>,

        /// Run every opcode over every operand pair.
        #[arg(long)]
        exhaustive: bool,

        /// Override the SUB carry convention of the reference model.
        #[arg(long, value_enum)]
        sub_carry: Option<SubCarryArg>,

        /// Print the report as JSON.
        #[arg(long)]
        json: bool,

        /// Log phase transitions and samples (same as RUST_LOG=debug).
        #[arg(short, long)]
        verbose: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum SubCarryArg {
    Borrow,
    NotBorrow,
    Zero,
}

impl From<SubCarryArg> for SubCarry {
    fn from(arg: SubCarryArg) -> Self {
        match arg {
            SubCarryArg::Borrow => Self::Borrow,
            SubCarryArg::NotBorrow => Self::NotBorrow,
            SubCarryArg::Zero => Self::Zero,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            scenarios,
            exhaustive,
            sub_carry,
            json,
            verbose,
        } => {
            init_tracing(verbose);
            let code = cmd_run(
                config.as_deref(),
                scenarios.as_deref(),
                exhaustive,
                sub_carry,
                json,
            );
            process::exit(code);
        }
    }
}

/// Installs the fmt subscriber; `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Loads inputs, runs the sequencer, prints the report, and returns the exit code.
fn cmd_run(
    config_path: Option<&str>,
    scenarios_path: Option<&str>,
    exhaustive: bool,
    sub_carry: Option<SubCarryArg>,
    json: bool,
) -> i32 {
    let mut config = match config_path {
        Some(path) => match Config::from_path(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error: {e}");
                return 2;
            }
        },
        None => Config::default(),
    };
    if let Some(arg) = sub_carry {
        config.model.sub_carry = arg.into();
    }
    debug!(?config, "configuration loaded");

    let scenarios = if exhaustive {
        scenario::exhaustive()
    } else if let Some(path) = scenarios_path {
        match scenario::load(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Error: {e}");
                return 2;
            }
        }
    } else {
        scenario::default_script()
    };

    let mut sequencer = match Sequencer::new(TtAlu::new(), &config) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {e}");
            return 2;
        }
    };
    debug!(scenarios = scenarios.len(), "scenario list ready");
    let report = sequencer.run(&scenarios);

    if json {
        match report.to_json() {
            Ok(text) => println!("{text}"),
            Err(e) => {
                eprintln!("Error: {e}");
                return 2;
            }
        }
    } else {
        println!("{report}");
    }

    i32::from(!report.passed())
}
