//! Money type for representing currency amounts
//!
//! Internally stores amounts in minor units (i64 cents) so that sums over a
//! period never drift. The ledger is currency-agnostic; the symbol only
//! matters when formatting.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Currency prefixes stripped before parsing
const CURRENCY_PREFIXES: [&str; 3] = ["NT$", "$", "¥"];

/// Represents a monetary amount stored as minor units (hundredths)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from minor units
    ///
    /// # Examples
    /// ```
    /// use pocket_ledger::models::Money;
    /// let amount = Money::from_cents(1050); // 10.50
    /// assert_eq!(amount.units(), 10);
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from whole currency units
    ///
    /// # Examples
    /// ```
    /// use pocket_ledger::models::Money;
    /// let amount = Money::from_units(3000);
    /// assert_eq!(amount.cents(), 300_000);
    /// ```
    pub const fn from_units(units: i64) -> Self {
        Self(units * 100)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in minor units
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole units portion (truncated toward zero)
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Get the minor units portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Fraction of `limit` that this amount represents, clamped to [0, 1]
    ///
    /// Returns `None` for a zero or negative limit, where a progress figure has
    /// no meaning.
    pub fn ratio_of(&self, limit: Money) -> Option<f64> {
        if !limit.is_positive() {
            return None;
        }
        let ratio = self.0 as f64 / limit.0 as f64;
        Some(ratio.clamp(0.0, 1.0))
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "10.50", "-10.50", "$10.50", "NT$1,200", "10"
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let original = s;
        let s = s.trim();

        let (negative, s) = if let Some(stripped) = s.strip_prefix('-') {
            (true, stripped)
        } else {
            (false, s)
        };

        let s = CURRENCY_PREFIXES
            .iter()
            .find_map(|prefix| s.strip_prefix(prefix))
            .unwrap_or(s)
            .trim();

        let s: String = s.chars().filter(|c| *c != ',').collect();
        if s.is_empty() || s.starts_with(['-', '+']) {
            return Err(MoneyParseError::InvalidFormat(original.to_string()));
        }

        let invalid = || MoneyParseError::InvalidFormat(original.to_string());

        let cents = match s.split_once('.') {
            Some((whole, frac)) => {
                if !frac.chars().all(|c| c.is_ascii_digit()) {
                    return Err(invalid());
                }
                let whole: i64 = if whole.is_empty() {
                    0
                } else {
                    whole.parse().map_err(|_| invalid())?
                };

                // Pad or truncate to two digits
                let frac: i64 = match frac.len() {
                    0 => 0,
                    1 => frac.parse::<i64>().map_err(|_| invalid())? * 10,
                    _ => frac[..2].parse().map_err(|_| invalid())?,
                };

                whole
                    .checked_mul(100)
                    .and_then(|c| c.checked_add(frac))
                    .ok_or_else(invalid)?
            }
            None => s
                .parse::<i64>()
                .map_err(|_| invalid())?
                .checked_mul(100)
                .ok_or_else(invalid)?,
        };

        Ok(Self(if negative { -cents } else { cents }))
    }

    /// Format with a currency symbol, dropping the fraction when it is zero
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        if self.cents_part() == 0 {
            format!("{}{}{}", sign, symbol, self.units().abs())
        } else {
            format!(
                "{}{}{}.{:02}",
                sign,
                symbol,
                self.units().abs(),
                self.cents_part()
            )
        }
    }

    /// Plain decimal representation used in stored rows ("120", "120.50")
    pub fn to_plain_string(&self) -> String {
        self.format_with_symbol("")
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-${}.{:02}", self.units().abs(), self.cents_part())
        } else {
            write!(f, "${}.{:02}", self.units(), self.cents_part())
        }
    }
}

// Arithmetic saturates at the i64 bounds instead of overflowing.

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.saturating_neg())
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

/// Serde adapter that writes Money as whole/decimal units instead of cents
///
/// Used for hand-edited configuration, where `6000` should mean 6000 and not
/// 60.00. Accepts integers, floats and strings on input.
pub mod decimal {
    use super::Money;
    use serde::de::{self, Visitor};
    use serde::{Deserializer, Serializer};
    use std::fmt;

    pub fn serialize<S: Serializer>(money: &Money, serializer: S) -> Result<S::Ok, S::Error> {
        if money.cents_part() == 0 {
            serializer.serialize_i64(money.units())
        } else {
            serializer.serialize_f64(money.cents() as f64 / 100.0)
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Money, D::Error> {
        deserializer.deserialize_any(DecimalVisitor)
    }

    struct DecimalVisitor;

    impl<'de> Visitor<'de> for DecimalVisitor {
        type Value = Money;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "an amount such as 3000 or \"3000.50\"")
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Money, E> {
            v.checked_mul(100)
                .map(Money::from_cents)
                .ok_or_else(|| E::custom("amount out of range"))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Money, E> {
            i64::try_from(v)
                .map_err(|_| E::custom("amount out of range"))
                .and_then(|v| self.visit_i64(v))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<Money, E> {
            if !v.is_finite() {
                return Err(E::custom("amount must be finite"));
            }
            let cents = (v * 100.0).round();
            if cents < i64::MIN as f64 || cents >= i64::MAX as f64 {
                return Err(E::custom("amount out of range"));
            }
            Ok(Money::from_cents(cents as i64))
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Money, E> {
            Money::parse(v).map_err(E::custom)
        }
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let m = Money::from_cents(1050);
        assert_eq!(m.cents(), 1050);
        assert_eq!(m.units(), 10);
        assert_eq!(m.cents_part(), 50);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1050)), "$10.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
        assert_eq!(format!("{}", Money::from_cents(-1050)), "-$10.50");
        assert_eq!(format!("{}", Money::from_cents(5)), "$0.05");
    }

    #[test]
    fn test_format_with_symbol() {
        assert_eq!(Money::from_units(3000).format_with_symbol("NT$"), "NT$3000");
        assert_eq!(Money::from_cents(-150).format_with_symbol("$"), "-$1.50");
        assert_eq!(Money::from_cents(12050).to_plain_string(), "120.50");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((-a).cents(), -1000);
    }

    #[test]
    fn test_arithmetic_saturates() {
        let huge = Money::from_cents(i64::MAX - 1);
        assert_eq!((huge + Money::from_cents(10)).cents(), i64::MAX);

        let mut total = huge;
        total += huge;
        assert_eq!(total.cents(), i64::MAX);

        assert_eq!((Money::from_cents(i64::MIN) - Money::from_cents(1)).cents(), i64::MIN);
        assert_eq!((-Money::from_cents(i64::MIN)).cents(), i64::MAX);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("$10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("-10.50").unwrap().cents(), -1050);
        assert_eq!(Money::parse("10").unwrap().cents(), 1000);
        assert_eq!(Money::parse("10.5").unwrap().cents(), 1050);
        assert_eq!(Money::parse("0.05").unwrap().cents(), 5);
        assert_eq!(Money::parse("NT$1,200").unwrap().cents(), 120_000);
        assert_eq!(Money::parse(" 2999 ").unwrap(), Money::from_units(2999));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Money::parse("").is_err());
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("12.3x").is_err());
        assert!(Money::parse("1.2.3").is_err());
        assert!(Money::parse("$").is_err());
    }

    #[test]
    fn test_ratio_of() {
        let limit = Money::from_units(3000);
        assert_eq!(Money::from_units(1500).ratio_of(limit), Some(0.5));
        assert_eq!(Money::from_units(4000).ratio_of(limit), Some(1.0));
        assert_eq!(Money::from_units(-10).ratio_of(limit), Some(0.0));
        assert_eq!(Money::from_units(10).ratio_of(Money::zero()), None);
    }

    #[test]
    fn test_sum() {
        let amounts = vec![
            Money::from_cents(100),
            Money::from_cents(200),
            Money::from_cents(300),
        ];
        let total: Money = amounts.into_iter().sum();
        assert_eq!(total.cents(), 600);
    }

    #[derive(Debug, serde::Serialize, serde::Deserialize)]
    struct Limit {
        #[serde(with = "decimal")]
        limit: Money,
    }

    #[test]
    fn test_decimal_adapter() {
        let json = serde_json::to_string(&Limit { limit: Money::from_units(3000) }).unwrap();
        assert_eq!(json, r#"{"limit":3000}"#);

        let parsed: Limit = serde_json::from_str(r#"{"limit":12.5}"#).unwrap();
        assert_eq!(parsed.limit, Money::from_cents(1250));

        let parsed: Limit = serde_json::from_str(r#"{"limit":"1,000"}"#).unwrap();
        assert_eq!(parsed.limit, Money::from_units(1000));
    }

    #[test]
    fn test_decimal_adapter_rejects_out_of_range() {
        assert!(serde_json::from_str::<Limit>(r#"{"limit":1e30}"#).is_err());
        assert!(serde_json::from_str::<Limit>(r#"{"limit":-1e30}"#).is_err());
        assert!(serde_json::from_str::<Limit>(r#"{"limit":92233720368547758}"#).is_err());
    }

    #[test]
    fn test_serialization() {
        let m = Money::from_cents(1050);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "1050");

        let deserialized: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, deserialized);
    }
}
