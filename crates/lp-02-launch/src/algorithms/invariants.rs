//! # Invariant Checker
//!
//! Whole-store consistency scans. These are diagnostic: they catch defects in
//! the effect applier or corrupted records, never user errors, which are
//! rejected at submission and settlement.
//!
//! | Route | Broken when |
//! |-------|-------------|
//! | `duplicated-account` | an address is both a genesis and a vesting account of one launch |
//! | `unknown-request-type` | a stored request fails content validation or has an unknown tag |
//! | `zero-launch-timestamp` | a triggered chain has `launch_timestamp == 0` |

use crate::domain::RequestContent;
use crate::ports::LaunchStore;
use serde::Serialize;
use std::collections::BTreeSet;
use tracing::error;

pub const MODULE_NAME: &str = "launch";

pub const DUPLICATED_ACCOUNT_ROUTE: &str = "duplicated-account";
pub const UNKNOWN_REQUEST_TYPE_ROUTE: &str = "unknown-request-type";
pub const ZERO_LAUNCH_TIMESTAMP_ROUTE: &str = "zero-launch-timestamp";

/// Result of one invariant scan.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct InvariantReport {
    pub route: &'static str,
    pub message: String,
    /// Halt signal for the caller.
    pub broken: bool,
}

impl InvariantReport {
    fn new(route: &'static str, detail: &str, broken: bool) -> Self {
        if broken {
            error!(route, detail, "Invariant broken");
        }
        Self {
            route,
            message: format_invariant(route, detail),
            broken,
        }
    }
}

/// `"<module>: <route> invariant\n<detail>\n"`
pub fn format_invariant(route: &str, detail: &str) -> String {
    format!("{}: {} invariant\n{}\n", MODULE_NAME, route, detail)
}

/// An address may not be both a genesis and a vesting account of one launch.
pub fn duplicated_account<S: LaunchStore + ?Sized>(store: &S) -> InvariantReport {
    let genesis: BTreeSet<_> = store
        .all_genesis_accounts()
        .into_iter()
        .map(|account| (account.launch_id, account.address))
        .collect();

    for account in store.all_vesting_accounts() {
        if genesis.contains(&(account.launch_id, account.address)) {
            let detail = format!(
                "account {} for chain {} found in vesting and genesis accounts",
                account.address, account.launch_id
            );
            return InvariantReport::new(DUPLICATED_ACCOUNT_ROUTE, &detail, true);
        }
    }
    InvariantReport::new(DUPLICATED_ACCOUNT_ROUTE, "", false)
}

/// Every stored request must carry one of the known, well-formed payloads.
pub fn unknown_request_type<S: LaunchStore + ?Sized>(store: &S) -> InvariantReport {
    for request in store.all_requests() {
        let detail = match &request.content {
            RequestContent::Unknown => Some("unknown request content type".to_string()),
            content => content
                .validate()
                .err()
                .map(|e| format!("invalid request: {}", e)),
        };
        if let Some(detail) = detail {
            let detail = format!(
                "request {} of chain {}: {}",
                request.request_id, request.launch_id, detail
            );
            return InvariantReport::new(UNKNOWN_REQUEST_TYPE_ROUTE, &detail, true);
        }
    }
    InvariantReport::new(UNKNOWN_REQUEST_TYPE_ROUTE, "", false)
}

/// A triggered chain must have a launch timestamp.
pub fn zero_launch_timestamp<S: LaunchStore + ?Sized>(store: &S) -> InvariantReport {
    for chain in store.all_chains() {
        if chain.launch_triggered && chain.launch_timestamp == 0 {
            let detail = format!(
                "launch timestamp is not set while launch is triggered for chain {}",
                chain.launch_id
            );
            return InvariantReport::new(ZERO_LAUNCH_TIMESTAMP_ROUTE, &detail, true);
        }
    }
    InvariantReport::new(ZERO_LAUNCH_TIMESTAMP_ROUTE, "", false)
}

/// Run every invariant, stopping at the first broken one.
///
/// When nothing is broken the report of the last check is returned.
pub fn all_invariants<S: LaunchStore + ?Sized>(store: &S) -> InvariantReport {
    let report = duplicated_account(store);
    if report.broken {
        return report;
    }
    let report = unknown_request_type(store);
    if report.broken {
        return report;
    }
    zero_launch_timestamp(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryLaunchStore;
    use crate::domain::{Chain, GenesisAccount, Request, VestingAccount, VestingOptions};
    use crate::ports::{AccountLedger, ChainRegistry, RequestLog};
    use shared_types::{Address, Coin, Coins};

    fn coins() -> Coins {
        Coins::new(vec![Coin::new("stake", 100)])
    }

    fn chain() -> Chain {
        Chain {
            launch_id: 0,
            coordinator_id: 1,
            genesis_chain_id: "orbit-1".to_string(),
            created_at: 1,
            source_url: String::new(),
            source_hash: String::new(),
            launch_triggered: false,
            launch_timestamp: 0,
            is_mainnet: false,
            has_campaign: false,
            campaign_id: 0,
        }
    }

    #[test]
    fn test_format_invariant() {
        assert_eq!(
            format_invariant("duplicated-account", "detail"),
            "launch: duplicated-account invariant\ndetail\n"
        );
    }

    #[test]
    fn test_empty_store_is_consistent() {
        let store = InMemoryLaunchStore::new();
        let report = all_invariants(&store);
        assert!(!report.broken);
    }

    #[test]
    fn test_duplicated_account() {
        let store = InMemoryLaunchStore::new();
        let address = Address::random();
        store.set_genesis_account(GenesisAccount::new(1, address, coins()));
        store.set_vesting_account(VestingAccount::new(
            2,
            address,
            Coins::empty(),
            VestingOptions::delayed(coins(), 10),
        ));
        assert!(!duplicated_account(&store).broken);

        store.set_vesting_account(VestingAccount::new(
            1,
            address,
            Coins::empty(),
            VestingOptions::delayed(coins(), 10),
        ));
        let report = duplicated_account(&store);
        assert!(report.broken);
        assert_eq!(report.route, DUPLICATED_ACCOUNT_ROUTE);
        assert!(report.message.contains(&address.to_string()));
    }

    #[test]
    fn test_unknown_request_type() {
        let store = InMemoryLaunchStore::new();
        let launch_id = store.append_chain(chain());
        let valid = RequestContent::GenesisAccount(GenesisAccount::new(
            launch_id,
            Address::random(),
            coins(),
        ));
        store.append_request(Request::new(launch_id, Address::random(), 1, valid));
        assert!(!unknown_request_type(&store).broken);

        store.append_request(Request::new(
            launch_id,
            Address::random(),
            1,
            RequestContent::Unknown,
        ));
        let report = unknown_request_type(&store);
        assert!(report.broken);
        assert!(report.message.contains("unknown request content type"));
    }

    #[test]
    fn test_invalid_stored_request_is_reported() {
        let store = InMemoryLaunchStore::new();
        let launch_id = store.append_chain(chain());
        let invalid = RequestContent::GenesisAccount(GenesisAccount::new(
            launch_id,
            Address::random(),
            Coins::empty(),
        ));
        store.append_request(Request::new(launch_id, Address::random(), 1, invalid));
        let report = unknown_request_type(&store);
        assert!(report.broken);
        assert!(report.message.contains("invalid request"));
    }

    #[test]
    fn test_zero_launch_timestamp() {
        let store = InMemoryLaunchStore::new();
        let launch_id = store.append_chain(chain());
        assert!(!zero_launch_timestamp(&store).broken);

        let mut triggered = store.get_chain(launch_id).unwrap();
        triggered.launch_triggered = true;
        store.set_chain(triggered.clone());
        assert!(zero_launch_timestamp(&store).broken);

        triggered.launch_timestamp = 1000;
        store.set_chain(triggered);
        assert!(!zero_launch_timestamp(&store).broken);
    }

    #[test]
    fn test_all_invariants_stops_at_first_broken() {
        let store = InMemoryLaunchStore::new();
        let mut broken_chain = chain();
        broken_chain.launch_triggered = true;
        let launch_id = store.append_chain(broken_chain);
        store.append_request(Request::new(
            launch_id,
            Address::random(),
            1,
            RequestContent::Unknown,
        ));

        let report = all_invariants(&store);
        assert!(report.broken);
        assert_eq!(report.route, UNKNOWN_REQUEST_TYPE_ROUTE);
    }
}
