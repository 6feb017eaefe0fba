//! # Scenario Files
//!
//! A scenario is an ordered list of operations replayed against a fresh
//! launch engine:
//!
//! ```json
//! {
//!   "start_time": 1700000000,
//!   "steps": [
//!     { "step": "create_coordinator", "address": "0x01..." },
//!     { "step": "create_chain", "coordinator": "0x01...", "genesis_chain_id": "orbit-1",
//!       "source_url": "https://...", "source_hash": "abc" },
//!     { "step": "submit", "launch_id": 1, "creator": "0x02...",
//!       "content": { "type": "genesis_account", "launch_id": 1, "address": "0x02...",
//!                    "coins": [{ "denom": "stake", "amount": "100" }] } },
//!     { "step": "end_block" }
//!   ]
//! }
//! ```

use anyhow::{Context, Result};
use lp_02_launch::{CreateChainParams, RequestContent};
use serde::{Deserialize, Serialize};
use shared_types::{Address, CampaignId, LaunchId, RequestId, Timestamp};
use std::path::Path;

/// One replayable operation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum Step {
    CreateCoordinator {
        address: Address,
    },
    DeactivateCoordinator {
        address: Address,
    },
    CreateChain(CreateChainParams),
    Submit {
        launch_id: LaunchId,
        creator: Address,
        content: RequestContent,
    },
    Settle {
        launch_id: LaunchId,
        request_id: RequestId,
        settler: Address,
        approve: bool,
    },
    TriggerLaunch {
        launch_id: LaunchId,
        coordinator: Address,
        remaining_time: u64,
    },
    RevertLaunch {
        launch_id: LaunchId,
        coordinator: Address,
    },
    LinkCampaign {
        launch_id: LaunchId,
        coordinator: Address,
        campaign_id: CampaignId,
    },
    AdvanceTime {
        seconds: u64,
    },
    /// Block boundary; invariants are checked here.
    EndBlock,
}

impl Step {
    pub fn name(&self) -> &'static str {
        match self {
            Self::CreateCoordinator { .. } => "create_coordinator",
            Self::DeactivateCoordinator { .. } => "deactivate_coordinator",
            Self::CreateChain(_) => "create_chain",
            Self::Submit { .. } => "submit",
            Self::Settle { .. } => "settle",
            Self::TriggerLaunch { .. } => "trigger_launch",
            Self::RevertLaunch { .. } => "revert_launch",
            Self::LinkCampaign { .. } => "link_campaign",
            Self::AdvanceTime { .. } => "advance_time",
            Self::EndBlock => "end_block",
        }
    }
}

/// A replayable scenario.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    /// Clock value before the first step.
    pub start_time: Timestamp,
    pub steps: Vec<Step>,
}

impl Scenario {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse scenario")
    }

    /// Load a scenario file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read scenario {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("Invalid scenario {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_steps() {
        let json = r#"{
            "start_time": 100,
            "steps": [
                { "step": "create_coordinator", "address": "0x0101010101010101010101010101010101010101" },
                { "step": "advance_time", "seconds": 30 },
                { "step": "settle", "launch_id": 1, "request_id": 2,
                  "settler": "0x0101010101010101010101010101010101010101", "approve": false },
                { "step": "end_block" }
            ]
        }"#;
        let scenario = Scenario::from_json(json).unwrap();
        assert_eq!(scenario.start_time, 100);
        assert_eq!(scenario.steps.len(), 4);
        assert_eq!(
            scenario.steps[0],
            Step::CreateCoordinator {
                address: Address::new([1u8; 20])
            }
        );
        assert_eq!(scenario.steps[1], Step::AdvanceTime { seconds: 30 });
        assert_eq!(scenario.steps[3].name(), "end_block");
    }

    #[test]
    fn test_create_chain_defaults() {
        let json = r#"{
            "step": "create_chain",
            "coordinator": "0x0101010101010101010101010101010101010101",
            "genesis_chain_id": "orbit-1",
            "source_url": "https://example.com/orbit.git",
            "source_hash": "abc"
        }"#;
        let step: Step = serde_json::from_str(json).unwrap();
        match step {
            Step::CreateChain(params) => {
                assert!(!params.is_mainnet);
                assert_eq!(params.campaign_id, None);
            }
            other => panic!("unexpected step {:?}", other),
        }
    }

    #[test]
    fn test_unknown_step_rejected() {
        let json = r#"{ "start_time": 0, "steps": [{ "step": "mint" }] }"#;
        assert!(Scenario::from_json(json).is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let err = Scenario::load("/nonexistent/scenario.json").unwrap_err();
        assert!(err.to_string().contains("Failed to read scenario"));
    }
}
