//! # Launch Node Library
//!
//! Exposes the runtime modules for testing. The main entry point is the
//! `main.rs` binary.
//!
//! - `config/`   - `NodeConfig` from environment variables
//! - `scenario/` - scenario file format
//! - `runtime/`  - deterministic step-by-step replayer

pub mod config;
pub mod runtime;
pub mod scenario;

pub use config::NodeConfig;
pub use runtime::{InvariantHalt, ReplaySummary, ScenarioRunner, StepError};
pub use scenario::{Scenario, Step};
