//! Adapters for the launch engine's outbound ports.

pub mod memory_store;

pub use memory_store::InMemoryLaunchStore;
