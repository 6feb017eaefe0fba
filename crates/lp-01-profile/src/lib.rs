//! # LP-01 Profile
//!
//! Coordinator directory consumed by the launch engine.
//!
//! **Subsystem ID:** 1  
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Purpose
//!
//! A coordinator is the address allowed to finalize the configuration of the
//! launches it registers. The launch engine only needs two questions answered:
//!
//! | Question | Port method |
//! |----------|-------------|
//! | Which coordinator owns this address, and is it active? | `CoordinatorDirectory::resolve_coordinator` |
//! | Is this address the coordinator with this id? | `CoordinatorDirectory::is_coordinator` |
//!
//! ## Module Structure
//!
//! ```text
//! lp-01-profile/
//! ├── domain/     # Coordinator, ProfileError
//! ├── ports/      # CoordinatorDirectory
//! └── adapters/   # InMemoryCoordinatorDirectory
//! ```

#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;

pub use adapters::InMemoryCoordinatorDirectory;
pub use domain::{Coordinator, ProfileError, ProfileResult};
pub use ports::CoordinatorDirectory;
