//! # Shared Types Crate
//!
//! Primitive types used across the Launchpad crates.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: addresses, coins and identifier aliases are
//!   defined once here and re-used by the profile and launch crates.
//! - **Validated Values**: `Address` and `Coins` expose explicit validation
//!   so that request content can be checked before any ledger is touched.

pub mod coins;
pub mod entities;
pub mod errors;

pub use coins::*;
pub use entities::*;
pub use errors::*;
