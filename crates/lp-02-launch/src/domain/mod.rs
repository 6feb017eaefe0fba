//! # Domain Layer - Launch Engine
//!
//! ## Components
//!
//! - `entities`: Chain, GenesisAccount, VestingAccount, GenesisValidator
//! - `request`: Request, RequestStatus, RequestContent
//! - `policy`: approval policy
//! - `errors`: LaunchError enumeration

pub mod entities;
pub mod errors;
pub mod policy;
pub mod request;

pub use entities::*;
pub use errors::*;
pub use policy::*;
pub use request::*;
