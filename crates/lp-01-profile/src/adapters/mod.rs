//! # Adapters Layer (Hexagonal Architecture)
//!
//! Implements the directory port.

mod memory_directory;

pub use memory_directory::InMemoryCoordinatorDirectory;
