//! # Effect Applier
//!
//! The state transition of an approved request. Shared by auto-approval at
//! submission and by explicit settlement so both routes enforce the same
//! ledger rules.
//!
//! Each arm checks its precondition before its single write, so a failure
//! leaves every ledger untouched.

use crate::domain::{LaunchError, LaunchResult, RequestContent};
use crate::ports::{AccountLedger, ValidatorLedger};
use shared_types::LaunchId;
use tracing::debug;

/// Apply `content` to the ledgers of `launch_id`.
pub fn apply_request<S>(store: &S, launch_id: LaunchId, content: &RequestContent) -> LaunchResult<()>
where
    S: AccountLedger + ValidatorLedger + ?Sized,
{
    match content {
        RequestContent::GenesisAccount(account) => {
            let address = account.address;
            if account_exists(store, launch_id, &address) {
                return Err(LaunchError::AccountAlreadyExist { launch_id, address });
            }
            let mut account = account.clone();
            account.launch_id = launch_id;
            store.set_genesis_account(account);
            debug!(launch_id, %address, "Genesis account added");
        }

        RequestContent::VestingAccount(account) => {
            let address = account.address;
            if account_exists(store, launch_id, &address) {
                return Err(LaunchError::AccountAlreadyExist { launch_id, address });
            }
            let mut account = account.clone();
            account.launch_id = launch_id;
            store.set_vesting_account(account);
            debug!(launch_id, %address, "Vesting account added");
        }

        RequestContent::AccountRemoval(removal) => {
            let address = removal.address;
            if store.has_genesis_account(launch_id, &address) {
                store.remove_genesis_account(launch_id, &address);
            } else if store.has_vesting_account(launch_id, &address) {
                store.remove_vesting_account(launch_id, &address);
            } else {
                return Err(LaunchError::AccountNotFound { launch_id, address });
            }
            debug!(launch_id, %address, "Account removed");
        }

        RequestContent::GenesisValidator(validator) => {
            let address = validator.address;
            if store.has_genesis_validator(launch_id, &address) {
                return Err(LaunchError::ValidatorAlreadyExist { launch_id, address });
            }
            let mut validator = validator.clone();
            validator.launch_id = launch_id;
            store.set_genesis_validator(validator);
            debug!(launch_id, %address, "Genesis validator added");
        }

        RequestContent::ValidatorRemoval(removal) => {
            let address = removal.val_address;
            if !store.has_genesis_validator(launch_id, &address) {
                return Err(LaunchError::ValidatorNotFound { launch_id, address });
            }
            store.remove_genesis_validator(launch_id, &address);
            debug!(launch_id, %address, "Genesis validator removed");
        }

        RequestContent::Unknown => return Err(LaunchError::UnknownRequestContent),
    }
    Ok(())
}

fn account_exists<S>(store: &S, launch_id: LaunchId, address: &shared_types::Address) -> bool
where
    S: AccountLedger + ?Sized,
{
    store.has_genesis_account(launch_id, address) || store.has_vesting_account(launch_id, address)
}
