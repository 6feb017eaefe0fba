//! # Core Identifiers
//!
//! Addresses and the identifier aliases used to key every per-launch ledger.

use crate::errors::AddressError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a launch (a network in preparation).
pub type LaunchId = u64;

/// Per-launch request identifier, assigned starting at 1.
pub type RequestId = u64;

/// Identifier of a coordinator profile.
pub type CoordinatorId = u64;

/// Identifier of a campaign linked to a launch.
pub type CampaignId = u64;

/// Unix timestamp in seconds.
pub type Timestamp = u64;

/// Length of an address in bytes.
pub const ADDRESS_LENGTH: usize = 20;

/// A 20-byte account or validator address.
///
/// Rendered as a `0x`-prefixed lowercase hex string; parsing accepts the
/// prefix as optional.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address(pub [u8; ADDRESS_LENGTH]);

impl Address {
    /// The reserved all-zero address.
    pub const ZERO: Address = Address([0u8; ADDRESS_LENGTH]);

    /// Creates an address from raw bytes.
    pub const fn new(bytes: [u8; ADDRESS_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Returns the raw bytes.
    pub fn as_bytes(&self) -> &[u8; ADDRESS_LENGTH] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; ADDRESS_LENGTH]
    }

    /// Checks that the address can own an account or validator.
    pub fn validate(&self) -> Result<(), AddressError> {
        if self.is_zero() {
            return Err(AddressError::ZeroAddress);
        }
        Ok(())
    }

    /// Draws a random non-zero address.
    #[cfg(feature = "sample")]
    pub fn random() -> Self {
        use rand::Rng;
        let mut rng = rand::thread_rng();
        loop {
            let bytes: [u8; ADDRESS_LENGTH] = rng.gen();
            let address = Self(bytes);
            if !address.is_zero() {
                return address;
            }
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self)
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let stripped = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(stripped).map_err(|_| AddressError::InvalidHex(s.to_string()))?;
        let array: [u8; ADDRESS_LENGTH] = bytes
            .as_slice()
            .try_into()
            .map_err(|_| AddressError::InvalidLength(bytes.len()))?;
        Ok(Self(array))
    }
}

impl TryFrom<String> for Address {
    type Error = AddressError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Address> for String {
    fn from(address: Address) -> Self {
        address.to_string()
    }
}

impl From<[u8; ADDRESS_LENGTH]> for Address {
    fn from(bytes: [u8; ADDRESS_LENGTH]) -> Self {
        Self(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_display_and_parse() {
        let address = Address::new([0xAB; 20]);
        let rendered = address.to_string();
        assert!(rendered.starts_with("0x"));
        assert_eq!(rendered.len(), 42);
        assert_eq!(rendered.parse::<Address>().unwrap(), address);
    }

    #[test]
    fn test_address_parse_without_prefix() {
        let hex = "01".repeat(20);
        let address: Address = hex.parse().unwrap();
        assert_eq!(address, Address::new([1u8; 20]));
    }

    #[test]
    fn test_address_parse_wrong_length() {
        let err = "0xabcd".parse::<Address>().unwrap_err();
        assert_eq!(err, AddressError::InvalidLength(2));
    }

    #[test]
    fn test_address_parse_invalid_hex() {
        assert!(matches!(
            "0xzz".parse::<Address>(),
            Err(AddressError::InvalidHex(_))
        ));
    }

    #[test]
    fn test_zero_address_is_invalid() {
        assert_eq!(Address::ZERO.validate(), Err(AddressError::ZeroAddress));
        assert!(Address::new([7u8; 20]).validate().is_ok());
    }

    #[test]
    fn test_address_serde_as_string() {
        let address = Address::new([0x11; 20]);
        let json = serde_json::to_string(&address).unwrap();
        assert_eq!(json, format!("\"{}\"", address));
        let back: Address = serde_json::from_str(&json).unwrap();
        assert_eq!(back, address);
    }
}
