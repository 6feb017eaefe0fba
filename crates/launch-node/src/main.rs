//! # Launch Node
//!
//! Replays a launch scenario against a fresh engine.
//!
//! ## Startup Sequence
//!
//! 1. Load configuration (env, then command-line overrides)
//! 2. Initialize logging
//! 3. Validate the launch window
//! 4. Load the scenario file
//! 5. Replay, checking invariants at every block boundary

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use launch_node::{NodeConfig, Scenario, ScenarioRunner};

/// Launch Node: deterministic replay of launch operations
#[derive(Parser, Debug)]
#[command(name = "launch-node")]
#[command(about = "Replay launch coordination scenarios and check ledger invariants")]
struct Args {
    /// Scenario file (JSON)
    #[arg(short, long)]
    scenario: PathBuf,

    /// Log level filter, overrides LP_LOG_LEVEL
    #[arg(short, long)]
    log_level: Option<String>,

    /// Keep replaying after a broken invariant
    #[arg(long)]
    no_halt: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = NodeConfig::from_env();
    if let Some(level) = args.log_level {
        config.log_level = level;
    }
    if args.no_halt {
        config.halt_on_invariant = false;
    }

    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to install tracing subscriber")?;

    config.validate().context("Invalid launch configuration")?;

    info!("===========================================");
    info!("  Launch Node v{}", env!("CARGO_PKG_VERSION"));
    info!("===========================================");

    let scenario = Scenario::load(&args.scenario)?;
    info!(
        scenario = %args.scenario.display(),
        steps = scenario.steps.len(),
        start_time = scenario.start_time,
        "Scenario loaded"
    );

    let summary = ScenarioRunner::replay(config, &scenario).context("Replay halted")?;
    info!(
        steps_applied = summary.steps_applied,
        steps_failed = summary.steps_failed,
        blocks = summary.blocks,
        "Done"
    );
    Ok(())
}
