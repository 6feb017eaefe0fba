//! # LP-02 Launch Engine
//!
//! **Subsystem ID:** 2
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Purpose
//!
//! Lets a launch's coordinator and its prospective participants propose changes
//! to the not-yet-launched genesis state (accounts, vesting schedules,
//! validators). Proposals are auto-applied when the coordinator submits them
//! and queued for explicit settlement otherwise.
//!
//! ## Request Lifecycle
//!
//! ```text
//! submit ──coordinator──→ [applied] ──→ [APPROVED]
//!    │
//!    └────other─────────→ [PENDING] ──settle(approve)──→ [applied] ──→ [APPROVED]
//!                              │
//!                              └──settle(reject)──→ [REJECTED]
//! ```
//!
//! Both approval routes run the same effect applier (`algorithms::applier`).
//!
//! ## Domain Invariants
//!
//! | Invariant | Enforcement Location |
//! |-----------|---------------------|
//! | Request ids per launch start at 1 and are never reused | `RequestLog::append_request` |
//! | An address is never both a genesis and a vesting account | `algorithms/applier.rs` insert checks |
//! | A settled request is never settled again | `service.rs` - `settle_request()` |
//! | A triggered launch accepts no submission or settlement | `service.rs` - `ensure_not_triggered()` |
//! | A triggered chain always has a launch timestamp | `service.rs` - `trigger_launch()` |
//!
//! The checker in `algorithms/invariants.rs` scans the whole store for
//! addresses held as both genesis and vesting accounts, stored requests with
//! unknown or invalid content, and triggered chains without a launch
//! timestamp.
//!
//! ## Module Structure (Hexagonal Architecture)
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      OUTER LAYER                                │
//! │  adapters/memory_store.rs - InMemoryLaunchStore                 │
//! │  service.rs               - LaunchService                       │
//! └─────────────────────────────────────────────────────────────────┘
//!                          ↑ implements ↑
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      MIDDLE LAYER                               │
//! │  ports/inbound.rs  - LaunchApi trait                            │
//! │  ports/outbound.rs - ChainRegistry, AccountLedger,              │
//! │                      ValidatorLedger, RequestLog, TimeSource    │
//! └─────────────────────────────────────────────────────────────────┘
//!                          ↑ uses ↑
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      INNER LAYER                                │
//! │  domain/entities.rs     - Chain, GenesisAccount, VestingAccount │
//! │  domain/request.rs      - Request, RequestContent, RequestStatus│
//! │  domain/policy.rs       - approval policy                       │
//! │  algorithms/applier.rs  - effect applier                        │
//! │  algorithms/invariants.rs - invariant checker                   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Outbound Dependencies
//!
//! | Subsystem | Trait | Purpose |
//! |-----------|-------|---------|
//! | 1 (Profile) | `CoordinatorDirectory` | Coordinator resolution and activity |

#![warn(clippy::all)]

pub mod adapters;
pub mod algorithms;
pub mod config;
pub mod domain;
pub mod ports;
pub mod service;

pub use adapters::InMemoryLaunchStore;
pub use algorithms::{all_invariants, apply_request, InvariantReport};
pub use config::{ConfigError, LaunchConfig};
pub use domain::*;
pub use ports::*;
pub use service::LaunchService;
