//! Stored transaction amounts
//!
//! Period tables are edited by hand as often as by this tool, so the amount
//! column can hold anything. An [`Amount`] keeps a malformed cell around
//! verbatim instead of refusing the whole row; it is simply worth nothing.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use super::money::Money;

/// Largest amount a single stored cell may hold (one trillion units)
pub const MAX_STORED_AMOUNT: Money = Money::from_units(1_000_000_000_000);

/// An amount as read from a period table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Amount {
    /// A well-formed, non-negative amount
    Valid(Money),
    /// The raw cell text that could not be read as a non-negative number
    Malformed(String),
}

impl Amount {
    /// Read a stored cell; never fails
    ///
    /// Negative values and values above [`MAX_STORED_AMOUNT`] are malformed.
    pub fn parse(raw: &str) -> Self {
        match Money::parse(raw) {
            Ok(money) if !money.is_negative() && money <= MAX_STORED_AMOUNT => Self::Valid(money),
            _ => Self::Malformed(raw.to_string()),
        }
    }

    /// The value this amount contributes to aggregates (zero when malformed)
    pub fn value(&self) -> Money {
        match self {
            Self::Valid(money) => *money,
            Self::Malformed(_) => Money::zero(),
        }
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::Malformed(_))
    }
}

impl From<Money> for Amount {
    fn from(money: Money) -> Self {
        if money.is_negative() || money > MAX_STORED_AMOUNT {
            Self::Malformed(money.to_plain_string())
        } else {
            Self::Valid(money)
        }
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Valid(money) => write!(f, "{}", money.to_plain_string()),
            Self::Malformed(raw) => write!(f, "{}", raw),
        }
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}
