//! # Domain Errors
//!
//! Error types for the launch engine.

use lp_01_profile::ProfileError;
use shared_types::{Address, LaunchId, RequestId, Timestamp};
use thiserror::Error;

use super::request::RequestStatus;

/// Coarse classification of launch errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    AlreadyExists,
    InvalidInput,
    PermissionDenied,
    InvalidState,
    /// Stored data no longer decodes to a known shape.
    Corruption,
}

/// Launch error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LaunchError {
    /// No chain is registered under the launch id.
    #[error("Chain not found: launch {launch_id}")]
    ChainNotFound { launch_id: LaunchId },

    /// The launch has been triggered and is frozen.
    #[error("Launch {launch_id} is already triggered")]
    TriggeredLaunch { launch_id: LaunchId },

    /// The launch has not been triggered.
    #[error("Launch {launch_id} is not triggered")]
    NotTriggeredLaunch { launch_id: LaunchId },

    /// The chain's coordinator record is missing.
    #[error("Chain {launch_id} is inactive: coordinator not found")]
    ChainInactive { launch_id: LaunchId },

    /// Error surfaced by the coordinator directory.
    #[error(transparent)]
    Profile(#[from] ProfileError),

    /// Request content failed structural validation.
    #[error("Invalid request content: {reason}")]
    InvalidRequestContent { reason: String },

    /// Vesting accounts cannot be requested on a mainnet with a campaign.
    #[error("Vesting accounts cannot be added to mainnet launch {launch_id}")]
    AddMainnetVestingAccount { launch_id: LaunchId },

    /// Only the resource owner or the coordinator may request its removal.
    #[error("Address {creator} has no permission over {address}")]
    NoAddressPermission { creator: Address, address: Address },

    /// The caller is not the launch coordinator.
    #[error("Address {address} is not the coordinator of launch {launch_id}")]
    NotCoordinator { launch_id: LaunchId, address: Address },

    /// No request with this id exists for the launch.
    #[error("Request {request_id} not found for launch {launch_id}")]
    RequestNotFound {
        launch_id: LaunchId,
        request_id: RequestId,
    },

    /// The request has already been settled.
    #[error("Request {request_id} is not pending: {status:?}")]
    RequestNotPending {
        request_id: RequestId,
        status: RequestStatus,
    },

    /// The address already holds a genesis or vesting account.
    #[error("Account {address} already exists for launch {launch_id}")]
    AccountAlreadyExist { launch_id: LaunchId, address: Address },

    /// The address holds neither a genesis nor a vesting account.
    #[error("Account {address} not found for launch {launch_id}")]
    AccountNotFound { launch_id: LaunchId, address: Address },

    /// A validator is already registered for the address.
    #[error("Validator {address} already exists for launch {launch_id}")]
    ValidatorAlreadyExist { launch_id: LaunchId, address: Address },

    /// No validator is registered for the address.
    #[error("Validator {address} not found for launch {launch_id}")]
    ValidatorNotFound { launch_id: LaunchId, address: Address },

    /// The request content does not match any known variant.
    #[error("Unknown request content type")]
    UnknownRequestContent,

    /// Launch time outside of the configured window.
    #[error("Invalid launch time: {reason}")]
    InvalidLaunchTime { reason: String },

    /// Revert attempted before the revert delay elapsed.
    #[error("Launch {launch_id} can be reverted from {revertible_at}, now {now}")]
    RevertDelayNotReached {
        launch_id: LaunchId,
        revertible_at: Timestamp,
        now: Timestamp,
    },

    /// The chain is already linked to a campaign.
    #[error("Launch {launch_id} already has a campaign")]
    ChainHasCampaign { launch_id: LaunchId },

    /// Chain creation parameters are invalid.
    #[error("Invalid chain: {reason}")]
    InvalidChain { reason: String },
}

impl LaunchError {
    /// Classify the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ChainNotFound { .. }
            | Self::RequestNotFound { .. }
            | Self::AccountNotFound { .. }
            | Self::ValidatorNotFound { .. } => ErrorKind::NotFound,

            Self::AccountAlreadyExist { .. }
            | Self::ValidatorAlreadyExist { .. }
            | Self::ChainHasCampaign { .. } => ErrorKind::AlreadyExists,

            Self::InvalidRequestContent { .. }
            | Self::InvalidLaunchTime { .. }
            | Self::InvalidChain { .. } => ErrorKind::InvalidInput,

            Self::AddMainnetVestingAccount { .. }
            | Self::NoAddressPermission { .. }
            | Self::NotCoordinator { .. }
            | Self::ChainInactive { .. } => ErrorKind::PermissionDenied,

            Self::Profile(err) => match err {
                ProfileError::CoordAddressNotFound { .. } | ProfileError::CoordIdNotFound { .. } => {
                    ErrorKind::NotFound
                }
                ProfileError::CoordAlreadyExist { .. } => ErrorKind::AlreadyExists,
                ProfileError::InvalidAddress(_) => ErrorKind::InvalidInput,
                ProfileError::CoordInactive { .. } => ErrorKind::PermissionDenied,
            },

            Self::TriggeredLaunch { .. }
            | Self::NotTriggeredLaunch { .. }
            | Self::RequestNotPending { .. }
            | Self::RevertDelayNotReached { .. } => ErrorKind::InvalidState,

            Self::UnknownRequestContent => ErrorKind::Corruption,
        }
    }

    pub(crate) fn invalid_content(reason: impl Into<String>) -> Self {
        Self::InvalidRequestContent {
            reason: reason.into(),
        }
    }
}

/// Result type for launch operations.
pub type LaunchResult<T> = Result<T, LaunchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(
            LaunchError::ChainNotFound { launch_id: 1 }.kind(),
            ErrorKind::NotFound
        );
        assert_eq!(
            LaunchError::TriggeredLaunch { launch_id: 1 }.kind(),
            ErrorKind::InvalidState
        );
        assert_eq!(
            LaunchError::UnknownRequestContent.kind(),
            ErrorKind::Corruption
        );
        assert_eq!(
            LaunchError::Profile(ProfileError::CoordInactive { coordinator_id: 3 }).kind(),
            ErrorKind::PermissionDenied
        );
    }

    #[test]
    fn test_request_not_pending_display() {
        let err = LaunchError::RequestNotPending {
            request_id: 4,
            status: RequestStatus::Approved,
        };
        let msg = err.to_string();
        assert!(msg.contains("4"));
        assert!(msg.contains("Approved"));
    }

    #[test]
    fn test_profile_error_is_transparent() {
        let err: LaunchError = ProfileError::CoordInactive { coordinator_id: 9 }.into();
        assert_eq!(err.to_string(), "Coordinator 9 is inactive");
    }
}
