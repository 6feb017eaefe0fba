//! Pure algorithms over the launch store.

pub mod applier;
pub mod invariants;

pub use applier::apply_request;
pub use invariants::{
    all_invariants, duplicated_account, format_invariant, unknown_request_type,
    zero_launch_timestamp, InvariantReport, DUPLICATED_ACCOUNT_ROUTE, MODULE_NAME,
    UNKNOWN_REQUEST_TYPE_ROUTE, ZERO_LAUNCH_TIMESTAMP_ROUTE,
};
