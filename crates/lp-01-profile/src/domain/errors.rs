//! # Domain Errors
//!
//! Error types for the coordinator directory.

use shared_types::{Address, CoordinatorId};
use thiserror::Error;

/// Profile error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileError {
    /// No coordinator is registered for the address.
    #[error("Coordinator address not found: {address}")]
    CoordAddressNotFound { address: Address },

    /// No coordinator is registered under the id.
    #[error("Coordinator id not found: {coordinator_id}")]
    CoordIdNotFound { coordinator_id: CoordinatorId },

    /// The coordinator exists but has been deactivated.
    #[error("Coordinator {coordinator_id} is inactive")]
    CoordInactive { coordinator_id: CoordinatorId },

    /// A coordinator is already registered for the address.
    #[error("Coordinator already exists for address {address}")]
    CoordAlreadyExist { address: Address },

    /// The address cannot own a profile.
    #[error("Invalid coordinator address: {0}")]
    InvalidAddress(#[from] shared_types::AddressError),
}

/// Result type for profile operations.
pub type ProfileResult<T> = Result<T, ProfileError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coord_inactive_error() {
        let err = ProfileError::CoordInactive { coordinator_id: 7 };
        assert!(err.to_string().contains("7"));
        assert!(err.to_string().contains("inactive"));
    }

    #[test]
    fn test_coord_address_not_found_error() {
        let address = Address::new([0xCD; 20]);
        let err = ProfileError::CoordAddressNotFound { address };
        assert!(err.to_string().contains(&address.to_string()));
    }
}
