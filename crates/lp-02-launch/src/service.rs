//! Launch Service - Core business logic
//!
//! Wires the approval policy, the effect applier and the invariant checker
//! to the store, the coordinator directory and the clock.
//!
//! The service takes no locks of its own. Callers deliver one operation at a
//! time; every operation validates everything before its first write.

use crate::algorithms::{all_invariants, apply_request, InvariantReport};
use crate::config::LaunchConfig;
use crate::domain::{
    approval_decision, AccountRemoval, Chain, CreateChainParams, GenesisAccount, GenesisValidator,
    LaunchError, LaunchResult, Request, RequestContent, RequestStatus, ValidatorRemoval,
    VestingAccount, VestingOptions,
};
use crate::ports::inbound::{LaunchApi, SubmitResponse};
use crate::ports::outbound::{CoordinatorDirectory, LaunchStore, TimeSource};
use lp_01_profile::{Coordinator, ProfileError};
use shared_types::{Address, CampaignId, Coins, LaunchId, RequestId};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Launch Service implementation
pub struct LaunchService<S, D, T>
where
    S: LaunchStore,
    D: CoordinatorDirectory,
    T: TimeSource,
{
    config: LaunchConfig,
    store: Arc<S>,
    directory: Arc<D>,
    clock: Arc<T>,
}

impl<S, D, T> LaunchService<S, D, T>
where
    S: LaunchStore,
    D: CoordinatorDirectory,
    T: TimeSource,
{
    pub fn new(config: LaunchConfig, store: Arc<S>, directory: Arc<D>, clock: Arc<T>) -> Self {
        Self {
            config,
            store,
            directory,
            clock,
        }
    }

    pub fn config(&self) -> &LaunchConfig {
        &self.config
    }

    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    pub fn directory(&self) -> &Arc<D> {
        &self.directory
    }

    // =========================================================================
    // Read accessors
    // =========================================================================

    pub fn chain(&self, launch_id: LaunchId) -> Option<Chain> {
        self.store.get_chain(launch_id)
    }

    pub fn request(&self, launch_id: LaunchId, request_id: RequestId) -> Option<Request> {
        self.store.get_request(launch_id, request_id)
    }

    /// Requests of a launch in id order.
    pub fn requests(&self, launch_id: LaunchId) -> Vec<Request> {
        self.store.requests(launch_id)
    }

    pub fn genesis_account(&self, launch_id: LaunchId, address: &Address) -> Option<GenesisAccount> {
        self.store.get_genesis_account(launch_id, address)
    }

    pub fn vesting_account(&self, launch_id: LaunchId, address: &Address) -> Option<VestingAccount> {
        self.store.get_vesting_account(launch_id, address)
    }

    pub fn genesis_validator(
        &self,
        launch_id: LaunchId,
        address: &Address,
    ) -> Option<GenesisValidator> {
        self.store.get_genesis_validator(launch_id, address)
    }

    // =========================================================================
    // Typed submission helpers
    // =========================================================================

    pub fn request_add_account(
        &self,
        launch_id: LaunchId,
        creator: Address,
        address: Address,
        coins: Coins,
    ) -> LaunchResult<SubmitResponse> {
        let content = RequestContent::GenesisAccount(GenesisAccount::new(launch_id, address, coins));
        self.submit_request(launch_id, creator, content)
    }

    pub fn request_add_vesting_account(
        &self,
        launch_id: LaunchId,
        creator: Address,
        address: Address,
        starting_balance: Coins,
        vesting_options: VestingOptions,
    ) -> LaunchResult<SubmitResponse> {
        let content = RequestContent::VestingAccount(VestingAccount::new(
            launch_id,
            address,
            starting_balance,
            vesting_options,
        ));
        self.submit_request(launch_id, creator, content)
    }

    pub fn request_remove_account(
        &self,
        launch_id: LaunchId,
        creator: Address,
        address: Address,
    ) -> LaunchResult<SubmitResponse> {
        let content = RequestContent::AccountRemoval(AccountRemoval { address });
        self.submit_request(launch_id, creator, content)
    }

    /// Submit `validator` for `launch_id`; its embedded launch id is overwritten.
    pub fn request_add_validator(
        &self,
        launch_id: LaunchId,
        creator: Address,
        mut validator: GenesisValidator,
    ) -> LaunchResult<SubmitResponse> {
        validator.launch_id = launch_id;
        self.submit_request(launch_id, creator, RequestContent::GenesisValidator(validator))
    }

    pub fn request_remove_validator(
        &self,
        launch_id: LaunchId,
        creator: Address,
        val_address: Address,
    ) -> LaunchResult<SubmitResponse> {
        let content = RequestContent::ValidatorRemoval(ValidatorRemoval { val_address });
        self.submit_request(launch_id, creator, content)
    }

    // =========================================================================
    // Internal helpers
    // =========================================================================

    fn load_chain(&self, launch_id: LaunchId) -> LaunchResult<Chain> {
        self.store
            .get_chain(launch_id)
            .ok_or(LaunchError::ChainNotFound { launch_id })
    }

    /// The chain's coordinator, which must exist and be active.
    fn active_coordinator(&self, chain: &Chain) -> LaunchResult<Coordinator> {
        let coordinator = self
            .directory
            .coordinator(chain.coordinator_id)
            .ok_or(LaunchError::ChainInactive {
                launch_id: chain.launch_id,
            })?;
        if !coordinator.active {
            return Err(ProfileError::CoordInactive {
                coordinator_id: coordinator.coordinator_id,
            }
            .into());
        }
        Ok(coordinator)
    }

    /// The caller must be the address of the chain's active coordinator.
    fn ensure_coordinator(&self, chain: &Chain, address: &Address) -> LaunchResult<()> {
        let coordinator = self.active_coordinator(chain)?;
        if coordinator.address != *address {
            return Err(LaunchError::NotCoordinator {
                launch_id: chain.launch_id,
                address: *address,
            });
        }
        Ok(())
    }

    fn ensure_not_triggered(chain: &Chain) -> LaunchResult<()> {
        if chain.launch_triggered {
            return Err(LaunchError::TriggeredLaunch {
                launch_id: chain.launch_id,
            });
        }
        Ok(())
    }

    /// Submission preconditions in order; returns the coordinator address.
    fn check_submission(
        &self,
        launch_id: LaunchId,
        creator: &Address,
        content: &RequestContent,
    ) -> LaunchResult<Address> {
        let chain = self.load_chain(launch_id)?;
        Self::ensure_not_triggered(&chain)?;
        let coordinator = self.active_coordinator(&chain)?;

        content.validate_for_launch(launch_id)?;
        creator
            .validate()
            .map_err(|e| LaunchError::invalid_content(format!("creator: {}", e)))?;

        if content.is_vesting_account() && chain.is_mainnet && chain.has_campaign {
            return Err(LaunchError::AddMainnetVestingAccount { launch_id });
        }

        if let Some(target) = content.removal_target() {
            if *creator != target && *creator != coordinator.address {
                return Err(LaunchError::NoAddressPermission {
                    creator: *creator,
                    address: target,
                });
            }
        }

        Ok(coordinator.address)
    }
}

impl<S, D, T> LaunchApi for LaunchService<S, D, T>
where
    S: LaunchStore,
    D: CoordinatorDirectory,
    T: TimeSource,
{
    fn create_chain(&self, params: CreateChainParams) -> LaunchResult<LaunchId> {
        let coordinator_id = self.directory.resolve_coordinator(&params.coordinator)?;
        params.validate()?;

        let chain = Chain {
            launch_id: 0,
            coordinator_id,
            genesis_chain_id: params.genesis_chain_id,
            created_at: self.clock.now(),
            source_url: params.source_url,
            source_hash: params.source_hash,
            launch_triggered: false,
            launch_timestamp: 0,
            is_mainnet: params.is_mainnet,
            has_campaign: params.campaign_id.is_some(),
            campaign_id: params.campaign_id.unwrap_or_default(),
        };
        let launch_id = self.store.append_chain(chain);
        info!(launch_id, coordinator_id, "Chain created");
        Ok(launch_id)
    }

    fn submit_request(
        &self,
        launch_id: LaunchId,
        creator: Address,
        content: RequestContent,
    ) -> LaunchResult<SubmitResponse> {
        let coordinator_address = match self.check_submission(launch_id, &creator, &content) {
            Ok(address) => address,
            Err(e) => {
                warn!(launch_id, %creator, error = %e, "Request rejected");
                return Err(e);
            }
        };

        let decision = approval_decision(&creator, &coordinator_address);
        debug!(launch_id, %creator, ?decision, content = content.type_name(), "Approval decision");

        let mut request = Request::new(launch_id, creator, self.clock.now(), content);
        if decision.is_auto_approved() {
            // The applier writes nothing on failure, so applying before the
            // append keeps the request log untouched as well.
            if let Err(e) = apply_request(self.store.as_ref(), launch_id, &request.content) {
                warn!(launch_id, %creator, error = %e, "Auto-approved request failed to apply");
                return Err(e);
            }
            request.status = RequestStatus::Approved;
        }

        let request_id = self.store.append_request(request);
        let auto_approved = decision.is_auto_approved();
        info!(launch_id, request_id, %creator, auto_approved, "Request submitted");

        Ok(SubmitResponse {
            request_id,
            auto_approved,
        })
    }

    fn settle_request(
        &self,
        launch_id: LaunchId,
        request_id: RequestId,
        settler: Address,
        approve: bool,
    ) -> LaunchResult<()> {
        let chain = self.load_chain(launch_id)?;
        Self::ensure_not_triggered(&chain)?;
        self.ensure_coordinator(&chain, &settler)?;

        let mut request = self
            .store
            .get_request(launch_id, request_id)
            .ok_or(LaunchError::RequestNotFound {
                launch_id,
                request_id,
            })?;
        if !request.status.is_pending() {
            return Err(LaunchError::RequestNotPending {
                request_id,
                status: request.status,
            });
        }

        if approve {
            if let Err(e) = apply_request(self.store.as_ref(), launch_id, &request.content) {
                warn!(launch_id, request_id, error = %e, "Approved request failed to apply");
                return Err(e);
            }
            request.status = RequestStatus::Approved;
        } else {
            request.status = RequestStatus::Rejected;
        }

        let status = request.status;
        self.store.set_request(request);
        info!(launch_id, request_id, ?status, "Request settled");
        Ok(())
    }

    fn trigger_launch(
        &self,
        launch_id: LaunchId,
        coordinator: Address,
        remaining_time: u64,
    ) -> LaunchResult<()> {
        let mut chain = self.load_chain(launch_id)?;
        self.ensure_coordinator(&chain, &coordinator)?;
        Self::ensure_not_triggered(&chain)?;

        if remaining_time < self.config.min_launch_time {
            return Err(LaunchError::InvalidLaunchTime {
                reason: format!(
                    "remaining time {} is below the minimum {}",
                    remaining_time, self.config.min_launch_time
                ),
            });
        }
        if remaining_time > self.config.max_launch_time {
            return Err(LaunchError::InvalidLaunchTime {
                reason: format!(
                    "remaining time {} is above the maximum {}",
                    remaining_time, self.config.max_launch_time
                ),
            });
        }
        let launch_timestamp = self
            .clock
            .now()
            .checked_add(remaining_time)
            .filter(|timestamp| *timestamp != 0)
            .ok_or_else(|| LaunchError::InvalidLaunchTime {
                reason: "launch timestamp would be zero or overflow".to_string(),
            })?;

        chain.launch_triggered = true;
        chain.launch_timestamp = launch_timestamp;
        self.store.set_chain(chain);
        info!(launch_id, launch_timestamp, "Launch triggered");
        Ok(())
    }

    fn revert_launch(&self, launch_id: LaunchId, coordinator: Address) -> LaunchResult<()> {
        let mut chain = self.load_chain(launch_id)?;
        self.ensure_coordinator(&chain, &coordinator)?;
        if !chain.launch_triggered {
            return Err(LaunchError::NotTriggeredLaunch { launch_id });
        }

        let now = self.clock.now();
        let revertible_at = chain.launch_timestamp.saturating_add(self.config.revert_delay);
        if now < revertible_at {
            return Err(LaunchError::RevertDelayNotReached {
                launch_id,
                revertible_at,
                now,
            });
        }

        chain.launch_triggered = false;
        chain.launch_timestamp = 0;
        self.store.set_chain(chain);
        info!(launch_id, "Launch reverted");
        Ok(())
    }

    fn link_campaign(
        &self,
        launch_id: LaunchId,
        coordinator: Address,
        campaign_id: CampaignId,
    ) -> LaunchResult<()> {
        let mut chain = self.load_chain(launch_id)?;
        self.ensure_coordinator(&chain, &coordinator)?;
        Self::ensure_not_triggered(&chain)?;
        if chain.has_campaign {
            return Err(LaunchError::ChainHasCampaign { launch_id });
        }

        chain.has_campaign = true;
        chain.campaign_id = campaign_id;
        self.store.set_chain(chain);
        info!(launch_id, campaign_id, "Campaign linked");
        Ok(())
    }

    fn check_invariants(&self) -> InvariantReport {
        all_invariants(self.store.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryLaunchStore;
    use crate::ports::{ManualTimeSource, RequestLog};
    use lp_01_profile::InMemoryCoordinatorDirectory;
    use shared_types::Coin;

    type TestService =
        LaunchService<InMemoryLaunchStore, InMemoryCoordinatorDirectory, ManualTimeSource>;

    struct Fixture {
        service: TestService,
        directory: Arc<InMemoryCoordinatorDirectory>,
        clock: Arc<ManualTimeSource>,
        coordinator: Address,
        launch_id: LaunchId,
    }

    fn setup() -> Fixture {
        let store = Arc::new(InMemoryLaunchStore::new());
        let directory = Arc::new(InMemoryCoordinatorDirectory::new());
        let clock = Arc::new(ManualTimeSource::new(1_000));
        let service = LaunchService::new(
            LaunchConfig::default(),
            store,
            Arc::clone(&directory),
            Arc::clone(&clock),
        );

        let coordinator = Address::random();
        directory.create_coordinator(coordinator).unwrap();
        let launch_id = service
            .create_chain(CreateChainParams {
                coordinator,
                genesis_chain_id: "orbit-1".to_string(),
                source_url: "https://example.com/orbit.git".to_string(),
                source_hash: "f00d".to_string(),
                campaign_id: None,
                is_mainnet: false,
            })
            .unwrap();

        Fixture {
            service,
            directory,
            clock,
            coordinator,
            launch_id,
        }
    }

    fn coins() -> Coins {
        Coins::new(vec![Coin::new("stake", 1_000)])
    }

    #[test]
    fn test_create_chain() {
        let f = setup();
        let chain = f.service.chain(f.launch_id).unwrap();
        assert_eq!(chain.launch_id, 1);
        assert_eq!(chain.created_at, 1_000);
        assert!(!chain.launch_triggered);
        assert!(!chain.has_campaign);
    }

    #[test]
    fn test_create_chain_unknown_coordinator() {
        let f = setup();
        let result = f.service.create_chain(CreateChainParams {
            coordinator: Address::random(),
            genesis_chain_id: "orbit-2".to_string(),
            source_url: String::new(),
            source_hash: String::new(),
            campaign_id: None,
            is_mainnet: false,
        });
        assert!(matches!(
            result,
            Err(LaunchError::Profile(ProfileError::CoordAddressNotFound { .. }))
        ));
    }

    #[test]
    fn test_coordinator_submission_auto_approved() {
        let f = setup();
        let address = Address::random();
        let response = f
            .service
            .request_add_account(f.launch_id, f.coordinator, address, coins())
            .unwrap();
        assert_eq!(response.request_id, 1);
        assert!(response.auto_approved);
        assert!(f.service.genesis_account(f.launch_id, &address).is_some());
        assert_eq!(
            f.service.request(f.launch_id, 1).unwrap().status,
            RequestStatus::Approved
        );
    }

    #[test]
    fn test_failed_auto_approval_leaves_no_trace() {
        let f = setup();
        let address = Address::random();
        f.service
            .request_add_account(f.launch_id, f.coordinator, address, coins())
            .unwrap();
        let result = f
            .service
            .request_add_account(f.launch_id, f.coordinator, address, coins());
        assert!(matches!(
            result,
            Err(LaunchError::AccountAlreadyExist { .. })
        ));
        assert_eq!(f.service.requests(f.launch_id).len(), 1);
        assert_eq!(f.service.store().last_request_id(f.launch_id), 1);
    }

    #[test]
    fn test_settle_requires_coordinator() {
        let f = setup();
        let user = Address::random();
        f.service
            .request_add_account(f.launch_id, user, user, coins())
            .unwrap();
        assert!(matches!(
            f.service.settle_request(f.launch_id, 1, user, true),
            Err(LaunchError::NotCoordinator { .. })
        ));
        assert!(f.service.genesis_account(f.launch_id, &user).is_none());
    }

    #[test]
    fn test_inactive_coordinator_blocks_submission() {
        let f = setup();
        f.directory.deactivate_coordinator(&f.coordinator).unwrap();
        let user = Address::random();
        assert!(matches!(
            f.service.request_add_account(f.launch_id, user, user, coins()),
            Err(LaunchError::Profile(ProfileError::CoordInactive { .. }))
        ));
    }

    #[test]
    fn test_trigger_and_revert() {
        let f = setup();
        f.service
            .trigger_launch(f.launch_id, f.coordinator, 100)
            .unwrap();
        let chain = f.service.chain(f.launch_id).unwrap();
        assert!(chain.launch_triggered);
        assert_eq!(chain.launch_timestamp, 1_100);

        assert!(matches!(
            f.service.revert_launch(f.launch_id, f.coordinator),
            Err(LaunchError::RevertDelayNotReached {
                revertible_at: 4_700,
                ..
            })
        ));

        f.clock.set(4_700);
        f.service.revert_launch(f.launch_id, f.coordinator).unwrap();
        let chain = f.service.chain(f.launch_id).unwrap();
        assert!(!chain.launch_triggered);
        assert_eq!(chain.launch_timestamp, 0);
    }

    #[test]
    fn test_link_campaign_once() {
        let f = setup();
        f.service
            .link_campaign(f.launch_id, f.coordinator, 7)
            .unwrap();
        let chain = f.service.chain(f.launch_id).unwrap();
        assert!(chain.has_campaign);
        assert_eq!(chain.campaign_id, 7);
        assert_eq!(
            f.service.link_campaign(f.launch_id, f.coordinator, 8),
            Err(LaunchError::ChainHasCampaign {
                launch_id: f.launch_id
            })
        );
    }
}
