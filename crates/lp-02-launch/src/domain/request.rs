//! # Requests
//!
//! Auditable change proposals against a launch's ledgers.
//!
//! ```text
//! [PENDING] ──approve──→ [APPROVED]
//!     │
//!     └──────reject────→ [REJECTED]
//! ```
//!
//! Settled requests are never modified again and never deleted.

use serde::{Deserialize, Serialize};
use shared_types::{Address, LaunchId, RequestId, Timestamp};

use super::entities::{GenesisAccount, GenesisValidator, VestingAccount};
use super::errors::{LaunchError, LaunchResult};

/// Lifecycle status of a request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
}

impl RequestStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }
}

/// Removal of a genesis or vesting account.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountRemoval {
    pub address: Address,
}

/// Removal of a genesis validator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorRemoval {
    pub val_address: Address,
}

/// Payload of a request; exactly one variant per request.
///
/// A stored payload whose tag matches no known variant decodes to
/// `Unknown`, which every consumer treats as corruption.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RequestContent {
    GenesisAccount(GenesisAccount),
    VestingAccount(VestingAccount),
    AccountRemoval(AccountRemoval),
    GenesisValidator(GenesisValidator),
    ValidatorRemoval(ValidatorRemoval),
    #[serde(other)]
    Unknown,
}

impl RequestContent {
    /// Short name of the variant, used in logs.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::GenesisAccount(_) => "genesis_account",
            Self::VestingAccount(_) => "vesting_account",
            Self::AccountRemoval(_) => "account_removal",
            Self::GenesisValidator(_) => "genesis_validator",
            Self::ValidatorRemoval(_) => "validator_removal",
            Self::Unknown => "unknown",
        }
    }

    /// Structural validation of the payload.
    pub fn validate(&self) -> LaunchResult<()> {
        match self {
            Self::GenesisAccount(account) => account.validate(),
            Self::VestingAccount(account) => account.validate(),
            Self::AccountRemoval(removal) => removal
                .address
                .validate()
                .map_err(|e| LaunchError::invalid_content(format!("account removal: {}", e))),
            Self::GenesisValidator(validator) => validator.validate(),
            Self::ValidatorRemoval(removal) => removal
                .val_address
                .validate()
                .map_err(|e| LaunchError::invalid_content(format!("validator removal: {}", e))),
            Self::Unknown => Err(LaunchError::invalid_content("unknown request content type")),
        }
    }

    /// Structural validation plus agreement of any embedded launch id.
    pub fn validate_for_launch(&self, launch_id: LaunchId) -> LaunchResult<()> {
        self.validate()?;
        let embedded = match self {
            Self::GenesisAccount(account) => Some(account.launch_id),
            Self::VestingAccount(account) => Some(account.launch_id),
            Self::GenesisValidator(validator) => Some(validator.launch_id),
            _ => None,
        };
        match embedded {
            Some(id) if id != launch_id => Err(LaunchError::invalid_content(format!(
                "content targets launch {} but was submitted to launch {}",
                id, launch_id
            ))),
            _ => Ok(()),
        }
    }

    /// Address whose removal is requested, for removal variants.
    pub fn removal_target(&self) -> Option<Address> {
        match self {
            Self::AccountRemoval(removal) => Some(removal.address),
            Self::ValidatorRemoval(removal) => Some(removal.val_address),
            _ => None,
        }
    }

    pub fn is_vesting_account(&self) -> bool {
        matches!(self, Self::VestingAccount(_))
    }
}

/// A stored request, keyed by `(launch_id, request_id)`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    pub launch_id: LaunchId,
    /// Assigned by the request log on append.
    pub request_id: RequestId,
    pub creator: Address,
    pub created_at: Timestamp,
    pub content: RequestContent,
    pub status: RequestStatus,
}

impl Request {
    /// A request not yet appended to the log (`request_id` is 0).
    pub fn new(
        launch_id: LaunchId,
        creator: Address,
        created_at: Timestamp,
        content: RequestContent,
    ) -> Self {
        Self {
            launch_id,
            request_id: 0,
            creator,
            created_at,
            content,
            status: RequestStatus::Pending,
        }
    }
}
