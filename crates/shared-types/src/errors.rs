//! # Error Types
//!
//! Validation errors for the shared primitives.

use thiserror::Error;

/// Errors produced when parsing or validating an [`Address`](crate::Address).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    /// The string is not valid hex.
    #[error("Invalid hex address: {0}")]
    InvalidHex(String),

    /// The decoded address has the wrong length.
    #[error("Invalid address length: expected 20 bytes, got {0}")]
    InvalidLength(usize),

    /// The all-zero address is reserved.
    #[error("Zero address is not a valid account address")]
    ZeroAddress,
}

/// Errors produced when validating coins.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoinsError {
    /// Denomination does not match the accepted pattern.
    #[error("Invalid denom: {0}")]
    InvalidDenom(String),

    /// Coin amount is zero.
    #[error("Coin {denom} has a zero amount")]
    ZeroAmount { denom: String },

    /// The same denomination appears more than once.
    #[error("Duplicate denom: {0}")]
    DuplicateDenom(String),

    /// Coins are not sorted by denomination.
    #[error("Coins are not sorted: {previous} must come before {current}")]
    Unsorted { previous: String, current: String },

    /// A non-empty coin set was required.
    #[error("Coins must not be empty")]
    Empty,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_error_display() {
        let err = AddressError::InvalidLength(19);
        assert!(err.to_string().contains("19"));
    }

    #[test]
    fn test_coins_error_display() {
        let err = CoinsError::Unsorted {
            previous: "stake".to_string(),
            current: "atom".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("stake"));
        assert!(msg.contains("atom"));
    }
}
