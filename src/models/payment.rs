//! Payment method labels
//!
//! The entry form offers a fixed list, but rows typed straight into a period
//! table may carry anything, so unknown labels are preserved as `Other`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// How a transaction was paid
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum PaymentMethod {
    #[default]
    Cash,
    CreditCard,
    MobilePay,
    BankTransfer,
    Other(String),
}

impl PaymentMethod {
    /// The labels offered by the entry form, in display order
    pub const STANDARD: [PaymentMethod; 4] = [
        Self::Cash,
        Self::CreditCard,
        Self::MobilePay,
        Self::BankTransfer,
    ];

    /// Label written to the period table
    pub fn label(&self) -> &str {
        match self {
            Self::Cash => "現金",
            Self::CreditCard => "信用卡",
            Self::MobilePay => "行動支付",
            Self::BankTransfer => "轉帳",
            Self::Other(label) => label,
        }
    }

    /// Parse a label; accepts the stored labels and English aliases
    pub fn parse(s: &str) -> Self {
        let trimmed = s.trim();
        match trimmed.to_lowercase().as_str() {
            "現金" | "cash" => Self::Cash,
            "信用卡" | "credit" | "card" | "credit-card" => Self::CreditCard,
            "行動支付" | "mobile" | "mobile-pay" => Self::MobilePay,
            "轉帳" | "transfer" | "bank-transfer" => Self::BankTransfer,
            _ => Self::Other(trimmed.to_string()),
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Serialize for PaymentMethod {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for PaymentMethod {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_labels_and_aliases() {
        assert_eq!(PaymentMethod::parse("信用卡"), PaymentMethod::CreditCard);
        assert_eq!(PaymentMethod::parse("Cash"), PaymentMethod::Cash);
        assert_eq!(PaymentMethod::parse(" mobile "), PaymentMethod::MobilePay);
    }

    #[test]
    fn test_unknown_label_preserved() {
        let method = PaymentMethod::parse("街口");
        assert_eq!(method, PaymentMethod::Other("街口".into()));
        assert_eq!(method.label(), "街口");
    }

    #[test]
    fn test_round_trip_through_label() {
        for method in PaymentMethod::STANDARD {
            assert_eq!(PaymentMethod::parse(method.label()), method);
        }
    }
}
