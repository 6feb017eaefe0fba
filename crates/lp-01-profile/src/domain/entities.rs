//! # Domain Entities

use serde::{Deserialize, Serialize};
use shared_types::{Address, CoordinatorId};

/// A coordinator profile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coordinator {
    /// Identifier, assigned starting at 1.
    pub coordinator_id: CoordinatorId,
    /// Address controlling the profile.
    pub address: Address,
    /// Inactive coordinators can no longer drive their launches.
    pub active: bool,
}

impl Coordinator {
    pub fn new(coordinator_id: CoordinatorId, address: Address) -> Self {
        Self {
            coordinator_id,
            address,
            active: true,
        }
    }
}
