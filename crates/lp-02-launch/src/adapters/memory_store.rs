//! In-memory launch store.
//!
//! Every ledger is a `BTreeMap` keyed by `(launch_id, address)` or
//! `(launch_id, request_id)`, so scans of one launch are range scans and
//! iteration order is deterministic.

use crate::domain::{Chain, GenesisAccount, GenesisValidator, Request, VestingAccount};
use crate::ports::{AccountLedger, ChainRegistry, RequestLog, ValidatorLedger};
use parking_lot::RwLock;
use shared_types::{Address, LaunchId, RequestId};
use std::collections::{BTreeMap, HashMap};

type LedgerKey = (LaunchId, Address);

#[derive(Default)]
struct StoreState {
    chains: BTreeMap<LaunchId, Chain>,
    last_launch_id: LaunchId,
    genesis_accounts: BTreeMap<LedgerKey, GenesisAccount>,
    vesting_accounts: BTreeMap<LedgerKey, VestingAccount>,
    genesis_validators: BTreeMap<LedgerKey, GenesisValidator>,
    requests: BTreeMap<(LaunchId, RequestId), Request>,
    /// Per-launch request counters; ids are never reused.
    request_counters: HashMap<LaunchId, RequestId>,
}

/// All launch ledgers held in memory behind one lock.
#[derive(Default)]
pub struct InMemoryLaunchStore {
    state: RwLock<StoreState>,
}

impl InMemoryLaunchStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ChainRegistry for InMemoryLaunchStore {
    fn get_chain(&self, launch_id: LaunchId) -> Option<Chain> {
        self.state.read().chains.get(&launch_id).cloned()
    }

    fn set_chain(&self, chain: Chain) {
        self.state.write().chains.insert(chain.launch_id, chain);
    }

    fn append_chain(&self, mut chain: Chain) -> LaunchId {
        let mut state = self.state.write();
        state.last_launch_id += 1;
        chain.launch_id = state.last_launch_id;
        state.chains.insert(chain.launch_id, chain);
        state.last_launch_id
    }

    fn all_chains(&self) -> Vec<Chain> {
        self.state.read().chains.values().cloned().collect()
    }
}

impl AccountLedger for InMemoryLaunchStore {
    fn get_genesis_account(&self, launch_id: LaunchId, address: &Address) -> Option<GenesisAccount> {
        self.state
            .read()
            .genesis_accounts
            .get(&(launch_id, *address))
            .cloned()
    }

    fn set_genesis_account(&self, account: GenesisAccount) {
        self.state
            .write()
            .genesis_accounts
            .insert((account.launch_id, account.address), account);
    }

    fn remove_genesis_account(&self, launch_id: LaunchId, address: &Address) {
        self.state
            .write()
            .genesis_accounts
            .remove(&(launch_id, *address));
    }

    fn all_genesis_accounts(&self) -> Vec<GenesisAccount> {
        self.state.read().genesis_accounts.values().cloned().collect()
    }

    fn get_vesting_account(&self, launch_id: LaunchId, address: &Address) -> Option<VestingAccount> {
        self.state
            .read()
            .vesting_accounts
            .get(&(launch_id, *address))
            .cloned()
    }

    fn set_vesting_account(&self, account: VestingAccount) {
        self.state
            .write()
            .vesting_accounts
            .insert((account.launch_id, account.address), account);
    }

    fn remove_vesting_account(&self, launch_id: LaunchId, address: &Address) {
        self.state
            .write()
            .vesting_accounts
            .remove(&(launch_id, *address));
    }

    fn all_vesting_accounts(&self) -> Vec<VestingAccount> {
        self.state.read().vesting_accounts.values().cloned().collect()
    }
}

impl ValidatorLedger for InMemoryLaunchStore {
    fn get_genesis_validator(
        &self,
        launch_id: LaunchId,
        address: &Address,
    ) -> Option<GenesisValidator> {
        self.state
            .read()
            .genesis_validators
            .get(&(launch_id, *address))
            .cloned()
    }

    fn set_genesis_validator(&self, validator: GenesisValidator) {
        self.state
            .write()
            .genesis_validators
            .insert((validator.launch_id, validator.address), validator);
    }

    fn remove_genesis_validator(&self, launch_id: LaunchId, address: &Address) {
        self.state
            .write()
            .genesis_validators
            .remove(&(launch_id, *address));
    }

    fn all_genesis_validators(&self) -> Vec<GenesisValidator> {
        self.state
            .read()
            .genesis_validators
            .values()
            .cloned()
            .collect()
    }
}

impl RequestLog for InMemoryLaunchStore {
    fn get_request(&self, launch_id: LaunchId, request_id: RequestId) -> Option<Request> {
        self.state
            .read()
            .requests
            .get(&(launch_id, request_id))
            .cloned()
    }

    fn set_request(&self, request: Request) {
        self.state
            .write()
            .requests
            .insert((request.launch_id, request.request_id), request);
    }

    fn append_request(&self, mut request: Request) -> RequestId {
        let mut state = self.state.write();
        let counter = state.request_counters.entry(request.launch_id).or_insert(0);
        *counter += 1;
        let request_id = *counter;
        request.request_id = request_id;
        state
            .requests
            .insert((request.launch_id, request_id), request);
        request_id
    }

    fn last_request_id(&self, launch_id: LaunchId) -> RequestId {
        self.state
            .read()
            .request_counters
            .get(&launch_id)
            .copied()
            .unwrap_or(0)
    }

    fn requests(&self, launch_id: LaunchId) -> Vec<Request> {
        self.state
            .read()
            .requests
            .range((launch_id, RequestId::MIN)..=(launch_id, RequestId::MAX))
            .map(|(_, request)| request.clone())
            .collect()
    }

    fn all_requests(&self) -> Vec<Request> {
        self.state.read().requests.values().cloned().collect()
    }
}
