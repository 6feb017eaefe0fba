//! # Domain Entities
//!
//! The launch descriptor and the three per-launch ledger records.

use serde::{Deserialize, Serialize};
use shared_types::{Address, CampaignId, Coin, Coins, CoordinatorId, LaunchId, Timestamp};

use super::errors::{LaunchError, LaunchResult};

/// A network in preparation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chain {
    /// Unique key, assigned starting at 1.
    pub launch_id: LaunchId,
    /// Coordinator owning the launch.
    pub coordinator_id: CoordinatorId,
    /// Chain id the network will start with, `<name>-<number>`.
    pub genesis_chain_id: String,
    /// Creation time.
    pub created_at: Timestamp,
    /// Where the node source lives.
    pub source_url: String,
    /// Commit or archive hash of the source.
    pub source_hash: String,
    /// Once set, no request can be submitted or settled.
    pub launch_triggered: bool,
    /// Planned launch time; nonzero whenever `launch_triggered` is set.
    pub launch_timestamp: Timestamp,
    pub is_mainnet: bool,
    pub has_campaign: bool,
    /// Only meaningful when `has_campaign` is set.
    pub campaign_id: CampaignId,
}

/// Parameters for registering a chain.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateChainParams {
    pub coordinator: Address,
    pub genesis_chain_id: String,
    pub source_url: String,
    pub source_hash: String,
    #[serde(default)]
    pub campaign_id: Option<CampaignId>,
    #[serde(default)]
    pub is_mainnet: bool,
}

impl CreateChainParams {
    /// Validate the chain parameters.
    pub fn validate(&self) -> LaunchResult<()> {
        validate_genesis_chain_id(&self.genesis_chain_id)?;
        if self.is_mainnet && self.campaign_id.is_none() {
            return Err(LaunchError::InvalidChain {
                reason: "a mainnet launch requires a campaign".to_string(),
            });
        }
        Ok(())
    }
}

/// Check a genesis chain id of the form `<name>-<number>`.
///
/// The name is lowercase alphanumeric and non-empty; the number parses as u64.
pub fn validate_genesis_chain_id(chain_id: &str) -> LaunchResult<()> {
    let invalid = |reason: &str| LaunchError::InvalidChain {
        reason: format!("genesis chain id {:?}: {}", chain_id, reason),
    };

    let (name, number) = chain_id
        .rsplit_once('-')
        .ok_or_else(|| invalid("expected <name>-<number>"))?;
    if name.is_empty() {
        return Err(invalid("empty chain name"));
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
    {
        return Err(invalid("chain name must be lowercase alphanumeric"));
    }
    number
        .parse::<u64>()
        .map_err(|_| invalid("chain number must be an unsigned integer"))?;
    Ok(())
}

/// A non-vesting balance in the genesis ledger.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenesisAccount {
    pub launch_id: LaunchId,
    pub address: Address,
    pub coins: Coins,
}

impl GenesisAccount {
    pub fn new(launch_id: LaunchId, address: Address, coins: Coins) -> Self {
        Self {
            launch_id,
            address,
            coins,
        }
    }

    pub fn validate(&self) -> LaunchResult<()> {
        self.address
            .validate()
            .map_err(|e| LaunchError::invalid_content(format!("genesis account: {}", e)))?;
        self.coins
            .validate_non_empty()
            .map_err(|e| LaunchError::invalid_content(format!("genesis account coins: {}", e)))
    }
}

/// Coins released in one go at `end_time`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelayedVesting {
    pub vesting: Coins,
    pub end_time: Timestamp,
}

/// Vesting schedule of a vesting account.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VestingOptions {
    DelayedVesting(DelayedVesting),
}

impl VestingOptions {
    pub fn delayed(vesting: Coins, end_time: Timestamp) -> Self {
        Self::DelayedVesting(DelayedVesting { vesting, end_time })
    }

    pub fn validate(&self) -> LaunchResult<()> {
        match self {
            Self::DelayedVesting(delayed) => {
                delayed.vesting.validate_non_empty().map_err(|e| {
                    LaunchError::invalid_content(format!("vesting coins: {}", e))
                })?;
                if delayed.end_time == 0 {
                    return Err(LaunchError::invalid_content("vesting end time is zero"));
                }
                Ok(())
            }
        }
    }
}

/// A balance subject to a vesting schedule.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VestingAccount {
    pub launch_id: LaunchId,
    pub address: Address,
    /// Liquid coins at genesis; may be empty.
    pub starting_balance: Coins,
    pub vesting_options: VestingOptions,
}

impl VestingAccount {
    pub fn new(
        launch_id: LaunchId,
        address: Address,
        starting_balance: Coins,
        vesting_options: VestingOptions,
    ) -> Self {
        Self {
            launch_id,
            address,
            starting_balance,
            vesting_options,
        }
    }

    pub fn validate(&self) -> LaunchResult<()> {
        self.address
            .validate()
            .map_err(|e| LaunchError::invalid_content(format!("vesting account: {}", e)))?;
        self.starting_balance
            .validate()
            .map_err(|e| LaunchError::invalid_content(format!("starting balance: {}", e)))?;
        self.vesting_options.validate()
    }
}

/// A validator of the launch's genesis set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenesisValidator {
    pub launch_id: LaunchId,
    pub address: Address,
    /// Signed gentx bytes.
    pub gen_tx: Vec<u8>,
    /// Consensus public key.
    pub cons_pub_key: Vec<u8>,
    pub self_delegation: Coin,
    /// Peer address, `<node-id>@<host>:<port>`.
    pub peer: String,
}

impl GenesisValidator {
    pub fn validate(&self) -> LaunchResult<()> {
        self.address
            .validate()
            .map_err(|e| LaunchError::invalid_content(format!("validator: {}", e)))?;
        if self.gen_tx.is_empty() {
            return Err(LaunchError::invalid_content("empty gentx"));
        }
        if self.cons_pub_key.is_empty() {
            return Err(LaunchError::invalid_content("empty consensus public key"));
        }
        self.self_delegation
            .validate()
            .map_err(|e| LaunchError::invalid_content(format!("self delegation: {}", e)))?;
        if self.peer.trim().is_empty() {
            return Err(LaunchError::invalid_content("empty peer"));
        }
        Ok(())
    }
}
