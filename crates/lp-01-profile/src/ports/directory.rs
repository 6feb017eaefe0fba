//! # Coordinator Directory Port

use crate::domain::{Coordinator, ProfileError, ProfileResult};
use shared_types::{Address, CoordinatorId};

/// Read access to coordinator profiles.
pub trait CoordinatorDirectory: Send + Sync {
    /// Get a coordinator by id.
    fn coordinator(&self, coordinator_id: CoordinatorId) -> Option<Coordinator>;

    /// Get a coordinator by its controlling address.
    fn coordinator_by_address(&self, address: &Address) -> Option<Coordinator>;

    /// Resolve an address to the id of an active coordinator.
    ///
    /// Fails with `CoordAddressNotFound` when no profile exists and with
    /// `CoordInactive` when the profile has been deactivated.
    fn resolve_coordinator(&self, address: &Address) -> ProfileResult<CoordinatorId> {
        let coordinator = self
            .coordinator_by_address(address)
            .ok_or(ProfileError::CoordAddressNotFound { address: *address })?;
        if !coordinator.active {
            return Err(ProfileError::CoordInactive {
                coordinator_id: coordinator.coordinator_id,
            });
        }
        Ok(coordinator.coordinator_id)
    }

    /// True if `address` controls the coordinator `coordinator_id`.
    fn is_coordinator(&self, coordinator_id: CoordinatorId, address: &Address) -> bool {
        self.coordinator(coordinator_id)
            .map(|coordinator| coordinator.address == *address)
            .unwrap_or(false)
    }
}
