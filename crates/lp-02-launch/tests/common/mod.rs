//! Shared fixtures for launch engine integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use lp_01_profile::InMemoryCoordinatorDirectory;
use lp_02_launch::{
    CreateChainParams, GenesisValidator, InMemoryLaunchStore, LaunchApi, LaunchConfig,
    LaunchService, ManualTimeSource, VestingOptions,
};
use shared_types::{Address, Coin, Coins, LaunchId};

pub const START_TIME: u64 = 1_700_000_000;

pub type Service =
    LaunchService<InMemoryLaunchStore, InMemoryCoordinatorDirectory, ManualTimeSource>;

/// A service wired to in-memory collaborators, with one registered
/// coordinator owning one testnet launch.
pub struct Harness {
    pub service: Service,
    pub store: Arc<InMemoryLaunchStore>,
    pub directory: Arc<InMemoryCoordinatorDirectory>,
    pub clock: Arc<ManualTimeSource>,
    pub coordinator: Address,
    pub launch_id: LaunchId,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_config(LaunchConfig::default())
    }

    pub fn with_config(config: LaunchConfig) -> Self {
        let store = Arc::new(InMemoryLaunchStore::new());
        let directory = Arc::new(InMemoryCoordinatorDirectory::new());
        let clock = Arc::new(ManualTimeSource::new(START_TIME));
        let service = LaunchService::new(
            config,
            Arc::clone(&store),
            Arc::clone(&directory),
            Arc::clone(&clock),
        );

        let coordinator = Address::random();
        directory
            .create_coordinator(coordinator)
            .expect("coordinator registration");
        let launch_id = service
            .create_chain(chain_params(coordinator, "orbit-1"))
            .expect("chain creation");

        Self {
            service,
            store,
            directory,
            clock,
            coordinator,
            launch_id,
        }
    }

    /// Register another chain for the same coordinator.
    pub fn create_chain(&self, genesis_chain_id: &str) -> LaunchId {
        self.service
            .create_chain(chain_params(self.coordinator, genesis_chain_id))
            .expect("chain creation")
    }

    /// Register a mainnet chain attached to a campaign.
    pub fn create_mainnet_chain(&self) -> LaunchId {
        let mut params = chain_params(self.coordinator, "orbitmain-1");
        params.is_mainnet = true;
        params.campaign_id = Some(1);
        self.service.create_chain(params).expect("mainnet creation")
    }
}

pub fn chain_params(coordinator: Address, genesis_chain_id: &str) -> CreateChainParams {
    CreateChainParams {
        coordinator,
        genesis_chain_id: genesis_chain_id.to_string(),
        source_url: "https://github.com/orbit/orbit.git".to_string(),
        source_hash: "1f2e3d4c".to_string(),
        campaign_id: None,
        is_mainnet: false,
    }
}

pub fn coins(amount: u128) -> Coins {
    Coins::new(vec![Coin::new("stake", amount), Coin::new("utoken", amount * 2)])
}

pub fn delayed_vesting() -> VestingOptions {
    VestingOptions::delayed(coins(500), START_TIME + 86_400)
}

pub fn validator(launch_id: LaunchId, address: Address) -> GenesisValidator {
    GenesisValidator {
        launch_id,
        address,
        gen_tx: b"signed-gentx".to_vec(),
        cons_pub_key: b"ed25519-consensus-key".to_vec(),
        self_delegation: Coin::new("stake", 1_000),
        peer: "a1b2c3@10.0.0.1:26656".to_string(),
    }
}
