//! In-memory coordinator directory.
//!
//! Implements `CoordinatorDirectory` and the profile write operations used by
//! the runtime and by tests.

use crate::domain::{Coordinator, ProfileError, ProfileResult};
use crate::ports::CoordinatorDirectory;
use parking_lot::RwLock;
use shared_types::{Address, CoordinatorId};
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, info};

#[derive(Default)]
struct DirectoryState {
    coordinators: BTreeMap<CoordinatorId, Coordinator>,
    by_address: HashMap<Address, CoordinatorId>,
    last_id: CoordinatorId,
}

/// Coordinator profiles held in memory.
#[derive(Default)]
pub struct InMemoryCoordinatorDirectory {
    state: RwLock<DirectoryState>,
}

impl InMemoryCoordinatorDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new active coordinator for `address`.
    pub fn create_coordinator(&self, address: Address) -> ProfileResult<CoordinatorId> {
        address.validate()?;
        if self.state.read().by_address.contains_key(&address) {
            return Err(ProfileError::CoordAlreadyExist { address });
        }
        let coordinator_id = self.append_coordinator(address, true);
        info!(coordinator_id, %address, "Coordinator created");
        Ok(coordinator_id)
    }

    /// Store a coordinator with the given activity flag, skipping validation.
    ///
    /// Re-registering an address points it at the new id.
    pub fn append_coordinator(&self, address: Address, active: bool) -> CoordinatorId {
        let mut state = self.state.write();
        state.last_id += 1;
        let coordinator_id = state.last_id;
        state.coordinators.insert(
            coordinator_id,
            Coordinator {
                coordinator_id,
                address,
                active,
            },
        );
        state.by_address.insert(address, coordinator_id);
        coordinator_id
    }

    /// Deactivate the coordinator controlled by `address`.
    pub fn deactivate_coordinator(&self, address: &Address) -> ProfileResult<()> {
        let mut state = self.state.write();
        let coordinator_id = *state
            .by_address
            .get(address)
            .ok_or(ProfileError::CoordAddressNotFound { address: *address })?;
        let coordinator = state
            .coordinators
            .get_mut(&coordinator_id)
            .ok_or(ProfileError::CoordIdNotFound { coordinator_id })?;
        if !coordinator.active {
            return Err(ProfileError::CoordInactive { coordinator_id });
        }
        coordinator.active = false;
        debug!(coordinator_id, "Coordinator deactivated");
        Ok(())
    }

    /// Number of registered coordinators.
    pub fn len(&self) -> usize {
        self.state.read().coordinators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl CoordinatorDirectory for InMemoryCoordinatorDirectory {
    fn coordinator(&self, coordinator_id: CoordinatorId) -> Option<Coordinator> {
        self.state.read().coordinators.get(&coordinator_id).cloned()
    }

    fn coordinator_by_address(&self, address: &Address) -> Option<Coordinator> {
        let state = self.state.read();
        state
            .by_address
            .get(address)
            .and_then(|id| state.coordinators.get(id))
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_coordinator_assigns_increasing_ids() {
        let directory = InMemoryCoordinatorDirectory::new();
        let first = directory.create_coordinator(Address::random()).unwrap();
        let second = directory.create_coordinator(Address::random()).unwrap();
        assert_eq!(first, 1);
        assert_eq!(second, 2);
        assert_eq!(directory.len(), 2);
    }

    #[test]
    fn test_create_coordinator_twice_fails() {
        let directory = InMemoryCoordinatorDirectory::new();
        let address = Address::random();
        directory.create_coordinator(address).unwrap();
        assert_eq!(
            directory.create_coordinator(address),
            Err(ProfileError::CoordAlreadyExist { address })
        );
    }

    #[test]
    fn test_create_coordinator_zero_address() {
        let directory = InMemoryCoordinatorDirectory::new();
        assert!(matches!(
            directory.create_coordinator(Address::ZERO),
            Err(ProfileError::InvalidAddress(_))
        ));
        assert!(directory.is_empty());
    }

    #[test]
    fn test_resolve_coordinator() {
        let directory = InMemoryCoordinatorDirectory::new();
        let address = Address::random();
        let id = directory.create_coordinator(address).unwrap();
        assert_eq!(directory.resolve_coordinator(&address), Ok(id));

        let unknown = Address::random();
        assert_eq!(
            directory.resolve_coordinator(&unknown),
            Err(ProfileError::CoordAddressNotFound { address: unknown })
        );
    }

    #[test]
    fn test_deactivate_coordinator() {
        let directory = InMemoryCoordinatorDirectory::new();
        let address = Address::random();
        let id = directory.create_coordinator(address).unwrap();

        directory.deactivate_coordinator(&address).unwrap();
        assert!(!directory.coordinator(id).unwrap().active);
        assert_eq!(
            directory.resolve_coordinator(&address),
            Err(ProfileError::CoordInactive { coordinator_id: id })
        );
        assert_eq!(
            directory.deactivate_coordinator(&address),
            Err(ProfileError::CoordInactive { coordinator_id: id })
        );
    }

    #[test]
    fn test_is_coordinator() {
        let directory = InMemoryCoordinatorDirectory::new();
        let address = Address::random();
        let id = directory.create_coordinator(address).unwrap();
        assert!(directory.is_coordinator(id, &address));
        assert!(!directory.is_coordinator(id, &Address::random()));
        assert!(!directory.is_coordinator(99, &address));
    }

    #[test]
    fn test_append_inactive_coordinator() {
        let directory = InMemoryCoordinatorDirectory::new();
        let address = Address::random();
        let id = directory.append_coordinator(address, false);
        let coordinator = directory.coordinator_by_address(&address).unwrap();
        assert_eq!(coordinator.coordinator_id, id);
        assert!(!coordinator.active);
    }
}
