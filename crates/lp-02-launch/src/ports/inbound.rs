//! # Inbound Ports
//!
//! API trait defining what the launch engine can do.
//!
//! Every call is atomic: it either completes and mutates state, or fails and
//! leaves every ledger and the request log exactly as before. Callers must
//! serialize calls (one at a time per launch at least); the engine does not
//! lock.

use crate::algorithms::InvariantReport;
use crate::domain::{CreateChainParams, LaunchResult, RequestContent};
use serde::{Deserialize, Serialize};
use shared_types::{Address, CampaignId, LaunchId, RequestId};

/// Result of a successful submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitResponse {
    pub request_id: RequestId,
    pub auto_approved: bool,
}

/// Launch API - inbound port.
pub trait LaunchApi: Send + Sync {
    /// Register a new chain owned by an active coordinator.
    fn create_chain(&self, params: CreateChainParams) -> LaunchResult<LaunchId>;

    /// Submit a change request.
    fn submit_request(
        &self,
        launch_id: LaunchId,
        creator: Address,
        content: RequestContent,
    ) -> LaunchResult<SubmitResponse>;

    /// Approve or reject a pending request.
    fn settle_request(
        &self,
        launch_id: LaunchId,
        request_id: RequestId,
        settler: Address,
        approve: bool,
    ) -> LaunchResult<()>;

    /// Freeze the launch and schedule it `remaining_time` seconds from now.
    fn trigger_launch(
        &self,
        launch_id: LaunchId,
        coordinator: Address,
        remaining_time: u64,
    ) -> LaunchResult<()>;

    /// Undo a trigger once the revert delay has elapsed.
    fn revert_launch(&self, launch_id: LaunchId, coordinator: Address) -> LaunchResult<()>;

    /// Attach a campaign to the launch.
    fn link_campaign(
        &self,
        launch_id: LaunchId,
        coordinator: Address,
        campaign_id: CampaignId,
    ) -> LaunchResult<()>;

    /// Run every store invariant.
    fn check_invariants(&self) -> InvariantReport;
}
