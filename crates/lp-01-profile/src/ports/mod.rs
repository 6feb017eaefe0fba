//! # Ports Module
//!
//! The directory port the launch engine depends on.

pub mod directory;

pub use directory::*;
