//! Category classification
//!
//! Categories are plain labels in the period tables. Before any arithmetic a
//! label is classified against the active budget configuration into one of
//! three cases, and every consumer matches on all of them.

use std::fmt;

/// How a transaction's category relates to the active budget configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryClass<'a> {
    /// The configured income label; raises the dynamic budget
    Income,
    /// A configured expense bucket, by its exact label
    Expense(&'a str),
    /// Not configured (legacy or typo); counts toward the total only
    Unrecognized,
}

impl<'a> CategoryClass<'a> {
    /// Whether amounts in this class are spending
    pub fn is_spending(&self) -> bool {
        match self {
            Self::Income => false,
            Self::Expense(_) | Self::Unrecognized => true,
        }
    }

    /// The bucket this class is tracked under, if any
    pub fn bucket(&self) -> Option<&'a str> {
        match self {
            Self::Expense(name) => Some(*name),
            Self::Income | Self::Unrecognized => None,
        }
    }
}

impl fmt::Display for CategoryClass<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "income"),
            Self::Expense(name) => write!(f, "expense ({})", name),
            Self::Unrecognized => write!(f, "unrecognized"),
        }
    }
}
