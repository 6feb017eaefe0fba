//! # Coins
//!
//! Denominated token amounts credited to genesis and vesting accounts.
//!
//! A coin set is valid when every denom is well formed, every amount is
//! positive, and the set is sorted by denom without repetition.

use crate::errors::CoinsError;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr};
use std::fmt;

const MIN_DENOM_LENGTH: usize = 3;
const MAX_DENOM_LENGTH: usize = 128;

/// A single denominated amount.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coin {
    /// Token denomination.
    pub denom: String,
    /// Amount in base units; serialized as a decimal string.
    #[serde_as(as = "DisplayFromStr")]
    pub amount: u128,
}

impl Coin {
    pub fn new(denom: impl Into<String>, amount: u128) -> Self {
        Self {
            denom: denom.into(),
            amount,
        }
    }

    /// Validates the denom and requires a positive amount.
    pub fn validate(&self) -> Result<(), CoinsError> {
        validate_denom(&self.denom)?;
        if self.amount == 0 {
            return Err(CoinsError::ZeroAmount {
                denom: self.denom.clone(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}

/// An ordered set of coins.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Coins(pub Vec<Coin>);

impl Coins {
    /// Builds a coin set, sorting by denom.
    ///
    /// Duplicated denoms are kept so that `validate` reports them.
    pub fn new(mut coins: Vec<Coin>) -> Self {
        coins.sort_by(|a, b| a.denom.cmp(&b.denom));
        Self(coins)
    }

    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Coin> {
        self.0.iter()
    }

    /// Amount held for `denom`, zero when absent.
    pub fn amount_of(&self, denom: &str) -> u128 {
        self.0
            .iter()
            .find(|coin| coin.denom == denom)
            .map(|coin| coin.amount)
            .unwrap_or(0)
    }

    /// Validates every coin plus ordering and uniqueness. An empty set is valid.
    pub fn validate(&self) -> Result<(), CoinsError> {
        let mut previous: Option<&Coin> = None;
        for coin in &self.0 {
            coin.validate()?;
            if let Some(prev) = previous {
                if prev.denom == coin.denom {
                    return Err(CoinsError::DuplicateDenom(coin.denom.clone()));
                }
                if prev.denom > coin.denom {
                    return Err(CoinsError::Unsorted {
                        previous: prev.denom.clone(),
                        current: coin.denom.clone(),
                    });
                }
            }
            previous = Some(coin);
        }
        Ok(())
    }

    /// Same as `validate` but also rejects an empty set.
    pub fn validate_non_empty(&self) -> Result<(), CoinsError> {
        if self.is_empty() {
            return Err(CoinsError::Empty);
        }
        self.validate()
    }
}

impl fmt::Display for Coins {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self.0.iter().map(|coin| coin.to_string()).collect();
        write!(f, "{}", rendered.join(","))
    }
}

impl From<Vec<Coin>> for Coins {
    fn from(coins: Vec<Coin>) -> Self {
        Self::new(coins)
    }
}

/// Checks a denomination: 3..=128 chars, leading ASCII letter, then letters,
/// digits or one of `/ : . _ -`.
pub fn validate_denom(denom: &str) -> Result<(), CoinsError> {
    let invalid = || CoinsError::InvalidDenom(denom.to_string());

    if denom.len() < MIN_DENOM_LENGTH || denom.len() > MAX_DENOM_LENGTH {
        return Err(invalid());
    }
    let mut chars = denom.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {}
        _ => return Err(invalid()),
    }
    if chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '/' | ':' | '.' | '_' | '-')) {
        Ok(())
    } else {
        Err(invalid())
    }
}
