//! # Ports Layer
//!
//! - `inbound.rs`  - LaunchApi trait
//! - `outbound.rs` - ledger stores, request log, coordinator directory, clock

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
