//! Transaction model
//!
//! A transaction is one row of a period table: date, category, description,
//! amount, payment method and an optional note. Rows are appended and never
//! edited by this tool.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::amount::Amount;
use super::money::Money;
use super::payment::PaymentMethod;
use super::period::Period;

/// A single recorded expense or income row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Transaction date
    pub date: NaiveDate,

    /// Category label, as entered
    pub category: String,

    /// What the money was for
    pub description: String,

    /// Amount (non-negative; malformed cells are kept verbatim)
    pub amount: Amount,

    /// How it was paid
    #[serde(default)]
    pub payment: PaymentMethod,

    /// Optional free-text note
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Transaction {
    /// Create a new cash transaction without a note
    pub fn new(
        date: NaiveDate,
        category: impl Into<String>,
        description: impl Into<String>,
        amount: Money,
    ) -> Self {
        Self {
            date,
            category: category.into(),
            description: description.into(),
            amount: Amount::from(amount),
            payment: PaymentMethod::default(),
            note: None,
        }
    }

    pub fn with_payment(mut self, payment: PaymentMethod) -> Self {
        self.payment = payment;
        self
    }

    /// Attach a note; blank notes are dropped
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        let note = note.into();
        self.note = if note.trim().is_empty() {
            None
        } else {
            Some(note)
        };
        self
    }

    /// The period this transaction belongs to
    pub fn period(&self) -> Period {
        Period::for_date(self.date)
    }

    /// The value this row contributes to aggregates
    pub fn value(&self) -> Money {
        self.amount.value()
    }

    /// Validate a new submission before it is written
    ///
    /// Only applies to entries made through this tool; rows already in a
    /// period table are aggregated as they are.
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if self.description.trim().is_empty() {
            return Err(TransactionValidationError::EmptyDescription);
        }

        if self.category.trim().is_empty() {
            return Err(TransactionValidationError::EmptyCategory);
        }

        match &self.amount {
            Amount::Malformed(raw) => Err(TransactionValidationError::InvalidAmount(raw.clone())),
            Amount::Valid(money) if *money < Money::from_units(1) => {
                Err(TransactionValidationError::BelowMinimum(*money))
            }
            Amount::Valid(_) => Ok(()),
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] {} {}",
            self.date.format("%Y-%m-%d"),
            self.category,
            self.description,
            self.amount
        )
    }
}

/// Validation errors for new transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    EmptyDescription,
    EmptyCategory,
    InvalidAmount(String),
    BelowMinimum(Money),
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "A description is required"),
            Self::EmptyCategory => write!(f, "A category is required"),
            Self::InvalidAmount(raw) => write!(f, "Amount is not a valid number: {}", raw),
            Self::BelowMinimum(amount) => write!(
                f,
                "Amount must be at least 1, got {}",
                amount.to_plain_string()
            ),
        }
    }
}

impl std::error::Error for TransactionValidationError {}
