//! Outbound (Driven) ports for the launch engine.
//!
//! Ledger persistence, the chain registry, the request log and the clock.
//! Every store is keyed by explicit composite keys (`launch_id` plus an
//! address or a request id); nothing is keyed by insertion order.

use crate::domain::{Chain, GenesisAccount, GenesisValidator, Request, VestingAccount};
use shared_types::{Address, LaunchId, RequestId, Timestamp};
use std::sync::atomic::{AtomicU64, Ordering};

pub use lp_01_profile::CoordinatorDirectory;

/// Read/write access to `Chain` records.
pub trait ChainRegistry: Send + Sync {
    fn get_chain(&self, launch_id: LaunchId) -> Option<Chain>;

    /// Overwrite an existing chain record.
    fn set_chain(&self, chain: Chain);

    /// Store a new chain under the next launch id and return that id.
    fn append_chain(&self, chain: Chain) -> LaunchId;

    fn all_chains(&self) -> Vec<Chain>;

    fn has_chain(&self, launch_id: LaunchId) -> bool {
        self.get_chain(launch_id).is_some()
    }
}

/// Genesis and vesting account ledgers.
pub trait AccountLedger: Send + Sync {
    fn get_genesis_account(&self, launch_id: LaunchId, address: &Address) -> Option<GenesisAccount>;
    fn set_genesis_account(&self, account: GenesisAccount);
    fn remove_genesis_account(&self, launch_id: LaunchId, address: &Address);
    fn all_genesis_accounts(&self) -> Vec<GenesisAccount>;

    fn get_vesting_account(&self, launch_id: LaunchId, address: &Address) -> Option<VestingAccount>;
    fn set_vesting_account(&self, account: VestingAccount);
    fn remove_vesting_account(&self, launch_id: LaunchId, address: &Address);
    fn all_vesting_accounts(&self) -> Vec<VestingAccount>;

    fn has_genesis_account(&self, launch_id: LaunchId, address: &Address) -> bool {
        self.get_genesis_account(launch_id, address).is_some()
    }

    fn has_vesting_account(&self, launch_id: LaunchId, address: &Address) -> bool {
        self.get_vesting_account(launch_id, address).is_some()
    }
}

/// Genesis validator ledger.
pub trait ValidatorLedger: Send + Sync {
    fn get_genesis_validator(
        &self,
        launch_id: LaunchId,
        address: &Address,
    ) -> Option<GenesisValidator>;
    fn set_genesis_validator(&self, validator: GenesisValidator);
    fn remove_genesis_validator(&self, launch_id: LaunchId, address: &Address);
    fn all_genesis_validators(&self) -> Vec<GenesisValidator>;

    fn has_genesis_validator(&self, launch_id: LaunchId, address: &Address) -> bool {
        self.get_genesis_validator(launch_id, address).is_some()
    }
}

/// Per-launch append-only request log.
pub trait RequestLog: Send + Sync {
    fn get_request(&self, launch_id: LaunchId, request_id: RequestId) -> Option<Request>;

    /// Overwrite an existing request (status changes only).
    fn set_request(&self, request: Request);

    /// Assign `last_request_id + 1` to the request, store it and return the id.
    fn append_request(&self, request: Request) -> RequestId;

    /// Last id handed out for the launch, 0 when none.
    fn last_request_id(&self, launch_id: LaunchId) -> RequestId;

    /// Requests of one launch in id order.
    fn requests(&self, launch_id: LaunchId) -> Vec<Request>;

    fn all_requests(&self) -> Vec<Request>;
}

/// Everything the launch engine persists.
pub trait LaunchStore: ChainRegistry + AccountLedger + ValidatorLedger + RequestLog {}

impl<T> LaunchStore for T where T: ChainRegistry + AccountLedger + ValidatorLedger + RequestLog {}

/// Time source for launch timestamps.
///
/// Abstracted so that replay and tests run on deterministic time.
pub trait TimeSource: Send + Sync {
    /// Current Unix time in seconds.
    fn now(&self) -> Timestamp;
}

/// Wall-clock time source.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now(&self) -> Timestamp {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    }
}

/// Manually driven time source.
#[derive(Debug, Default)]
pub struct ManualTimeSource {
    time: AtomicU64,
}

impl ManualTimeSource {
    pub fn new(initial: Timestamp) -> Self {
        Self {
            time: AtomicU64::new(initial),
        }
    }

    /// Moves the clock forward, saturating at `u64::MAX`.
    pub fn advance(&self, secs: u64) {
        let _ = self
            .time
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |time| {
                Some(time.saturating_add(secs))
            });
    }

    pub fn set(&self, time: Timestamp) {
        self.time.store(time, Ordering::SeqCst);
    }
}

impl TimeSource for ManualTimeSource {
    fn now(&self) -> Timestamp {
        self.time.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_time_source() {
        let source = SystemTimeSource;
        // After Jan 1, 2020
        assert!(source.now() > 1_577_836_800);
    }

    #[test]
    fn test_manual_time_source() {
        let source = ManualTimeSource::new(1000);
        assert_eq!(source.now(), 1000);

        source.advance(500);
        assert_eq!(source.now(), 1500);

        source.set(3000);
        assert_eq!(source.now(), 3000);
    }

    #[test]
    fn test_manual_time_source_saturates() {
        let source = ManualTimeSource::new(1000);
        source.advance(u64::MAX);
        assert_eq!(source.now(), u64::MAX);

        source.advance(1);
        assert_eq!(source.now(), u64::MAX);
    }
}
