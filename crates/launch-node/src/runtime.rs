//! # Scenario Replayer
//!
//! Feeds scenario steps to the launch engine strictly one at a time.
//!
//! ```text
//! step ──→ LaunchService / CoordinatorDirectory ──→ ok | failed (logged, counted)
//!   ...
//! end_block ──→ check_invariants ──→ broken && halt_on_invariant ──→ stop
//! ```
//!
//! A failed step is never retried. The invariant checker runs at every block
//! boundary and once more after the last step.

use std::sync::Arc;

use lp_01_profile::{InMemoryCoordinatorDirectory, ProfileError};
use lp_02_launch::{
    InMemoryLaunchStore, InvariantReport, LaunchApi, LaunchError, LaunchService, ManualTimeSource,
};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, error, info, warn};

use crate::config::NodeConfig;
use crate::scenario::{Scenario, Step};

/// Launch service wired to in-memory collaborators.
pub type InMemoryLaunchService =
    LaunchService<InMemoryLaunchStore, InMemoryCoordinatorDirectory, ManualTimeSource>;

/// Why a single step failed.
#[derive(Debug, Error)]
pub enum StepError {
    #[error(transparent)]
    Launch(#[from] LaunchError),

    #[error(transparent)]
    Profile(#[from] ProfileError),
}

/// Replay aborted on a broken invariant.
#[derive(Debug, Error)]
#[error("invariant broken after block {block}: {}", .report.message.trim_end())]
pub struct InvariantHalt {
    pub block: u64,
    pub report: InvariantReport,
}

/// Counters reported at the end of a replay.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ReplaySummary {
    pub steps_applied: u64,
    pub steps_failed: u64,
    pub blocks: u64,
}

/// Replays scenarios against one engine instance.
pub struct ScenarioRunner {
    config: NodeConfig,
    service: InMemoryLaunchService,
    directory: Arc<InMemoryCoordinatorDirectory>,
    clock: Arc<ManualTimeSource>,
    summary: ReplaySummary,
}

impl ScenarioRunner {
    pub fn new(config: NodeConfig, start_time: u64) -> Self {
        let store = Arc::new(InMemoryLaunchStore::new());
        let directory = Arc::new(InMemoryCoordinatorDirectory::new());
        let clock = Arc::new(ManualTimeSource::new(start_time));
        let service = LaunchService::new(
            config.launch.clone(),
            store,
            Arc::clone(&directory),
            Arc::clone(&clock),
        );

        Self {
            config,
            service,
            directory,
            clock,
            summary: ReplaySummary::default(),
        }
    }

    /// Build a runner for `scenario` and replay it.
    pub fn replay(config: NodeConfig, scenario: &Scenario) -> Result<ReplaySummary, InvariantHalt> {
        let mut runner = Self::new(config, scenario.start_time);
        runner.run(&scenario.steps)?;
        Ok(runner.summary)
    }

    pub fn service(&self) -> &InMemoryLaunchService {
        &self.service
    }

    pub fn summary(&self) -> &ReplaySummary {
        &self.summary
    }

    /// Run `steps` in order, then check invariants one last time.
    pub fn run(&mut self, steps: &[Step]) -> Result<(), InvariantHalt> {
        for (index, step) in steps.iter().enumerate() {
            if let Step::EndBlock = step {
                self.summary.blocks += 1;
                self.check_invariants()?;
                continue;
            }

            match self.execute(step) {
                Ok(()) => {
                    self.summary.steps_applied += 1;
                    debug!(index, step = step.name(), "Step applied");
                }
                Err(e) => {
                    self.summary.steps_failed += 1;
                    warn!(index, step = step.name(), error = %e, "Step failed");
                }
            }
        }

        self.check_invariants()?;
        info!(
            steps_applied = self.summary.steps_applied,
            steps_failed = self.summary.steps_failed,
            blocks = self.summary.blocks,
            "Replay complete"
        );
        Ok(())
    }

    fn check_invariants(&self) -> Result<(), InvariantHalt> {
        let report = self.service.check_invariants();
        if !report.broken {
            return Ok(());
        }

        let halt = InvariantHalt {
            block: self.summary.blocks,
            report,
        };
        if self.config.halt_on_invariant {
            error!(block = halt.block, route = halt.report.route, "Halting replay");
            return Err(halt);
        }
        warn!(block = halt.block, route = halt.report.route, "Continuing past broken invariant");
        Ok(())
    }

    fn execute(&self, step: &Step) -> Result<(), StepError> {
        match step {
            Step::CreateCoordinator { address } => {
                self.directory.create_coordinator(*address)?;
            }
            Step::DeactivateCoordinator { address } => {
                self.directory.deactivate_coordinator(address)?;
            }
            Step::CreateChain(params) => {
                self.service.create_chain(params.clone())?;
            }
            Step::Submit {
                launch_id,
                creator,
                content,
            } => {
                self.service
                    .submit_request(*launch_id, *creator, content.clone())?;
            }
            Step::Settle {
                launch_id,
                request_id,
                settler,
                approve,
            } => {
                self.service
                    .settle_request(*launch_id, *request_id, *settler, *approve)?;
            }
            Step::TriggerLaunch {
                launch_id,
                coordinator,
                remaining_time,
            } => {
                self.service
                    .trigger_launch(*launch_id, *coordinator, *remaining_time)?;
            }
            Step::RevertLaunch {
                launch_id,
                coordinator,
            } => {
                self.service.revert_launch(*launch_id, *coordinator)?;
            }
            Step::LinkCampaign {
                launch_id,
                coordinator,
                campaign_id,
            } => {
                self.service
                    .link_campaign(*launch_id, *coordinator, *campaign_id)?;
            }
            Step::AdvanceTime { seconds } => {
                self.clock.advance(*seconds);
            }
            Step::EndBlock => {}
        }
        Ok(())
    }
}
