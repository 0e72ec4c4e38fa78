//! Budget aggregate results
//!
//! What the dashboard shows for a period: spend against each configured
//! bucket, totals against the (possibly income-raised) budget, and the
//! warnings those figures imply. Always derived, never stored.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::{decimal, Money};

/// Spend against one configured expense bucket
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub category: String,
    #[serde(with = "decimal")]
    pub limit: Money,
    #[serde(with = "decimal")]
    pub spend: Money,
    /// limit - spend; negative once overspent
    #[serde(with = "decimal")]
    pub remaining: Money,
}

impl CategorySummary {
    pub fn new(category: impl Into<String>, limit: Money, spend: Money) -> Self {
        Self {
            category: category.into(),
            limit,
            spend,
            remaining: limit - spend,
        }
    }

    /// A zero limit marks a bucket that is tracked but not capped
    pub fn has_limit(&self) -> bool {
        self.limit.is_positive()
    }

    /// Strictly over the limit; spending exactly the limit is fine
    pub fn is_overspent(&self) -> bool {
        self.has_limit() && self.spend > self.limit
    }

    /// Progress toward the limit in [0, 1]; `None` when the limit is zero
    pub fn progress(&self) -> Option<f64> {
        self.spend.ratio_of(self.limit)
    }
}

/// Advisory signal that a limit is, or would be, exceeded
///
/// Warnings never block a write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Warning {
    /// An expense bucket goes over its limit
    CategoryOverBudget {
        category: String,
        #[serde(with = "decimal")]
        limit: Money,
        /// Spend including the candidate, if any
        #[serde(with = "decimal")]
        projected: Money,
    },
    /// Total spending goes over the dynamic budget
    TotalOverBudget {
        #[serde(with = "decimal")]
        budget: Money,
        #[serde(with = "decimal")]
        projected: Money,
    },
}

impl Warning {
    /// How far past the limit the projected figure is
    pub fn overage(&self) -> Money {
        match self {
            Self::CategoryOverBudget {
                limit, projected, ..
            } => *projected - *limit,
            Self::TotalOverBudget { budget, projected } => *projected - *budget,
        }
    }

    /// The bucket concerned, for category warnings
    pub fn category(&self) -> Option<&str> {
        match self {
            Self::CategoryOverBudget { category, .. } => Some(category.as_str()),
            Self::TotalOverBudget { .. } => None,
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CategoryOverBudget {
                category,
                limit,
                projected,
            } => write!(
                f,
                "'{}' over budget: {} of {} ({} over)",
                category,
                projected.to_plain_string(),
                limit.to_plain_string(),
                self.overage().to_plain_string()
            ),
            Self::TotalOverBudget { budget, projected } => write!(
                f,
                "Total over budget: {} of {} ({} over)",
                projected.to_plain_string(),
                budget.to_plain_string(),
                self.overage().to_plain_string()
            ),
        }
    }
}

/// Aggregated figures for one period
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateResult {
    /// One entry per configured bucket, in configuration order
    pub categories: Vec<CategorySummary>,

    /// All non-income spending, unrecognized categories included
    #[serde(with = "decimal")]
    pub total_expense: Money,

    /// Sum of income rows (zero when income is not modeled)
    #[serde(with = "decimal")]
    pub total_income: Money,

    /// Base budget plus income
    #[serde(with = "decimal")]
    pub dynamic_budget: Money,

    /// dynamic_budget - total_expense
    #[serde(with = "decimal")]
    pub remaining_total: Money,

    /// Spending under labels that match no bucket
    #[serde(with = "decimal")]
    pub unrecognized_spend: Money,

    /// Number of rows under labels that match no bucket
    pub unrecognized_rows: usize,

    /// Number of rows whose amount could not be read (counted as zero)
    pub malformed_rows: usize,

    /// Limits already exceeded by the recorded rows
    pub warnings: Vec<Warning>,
}

impl AggregateResult {
    /// Summary for a configured bucket
    pub fn category(&self, category: &str) -> Option<&CategorySummary> {
        self.categories.iter().find(|c| c.category == category)
    }

    /// Spend in a configured bucket
    pub fn spend(&self, category: &str) -> Option<Money> {
        self.category(category).map(|c| c.spend)
    }

    /// Remaining budget in a configured bucket
    pub fn remaining(&self, category: &str) -> Option<Money> {
        self.category(category).map(|c| c.remaining)
    }

    /// Sum of spend across the configured buckets
    pub fn bucketed_spend(&self) -> Money {
        self.categories.iter().map(|c| c.spend).sum()
    }

    /// Progress of total spend against the dynamic budget
    pub fn total_progress(&self) -> Option<f64> {
        self.total_expense.ratio_of(self.dynamic_budget)
    }

    pub fn is_over_budget(&self) -> bool {
        self.total_expense > self.dynamic_budget
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_summary() {
        let summary = CategorySummary::new("享樂", Money::from_units(3000), Money::from_units(2999));
        assert_eq!(summary.remaining, Money::from_units(1));
        assert!(!summary.is_overspent());

        let at_limit = CategorySummary::new("享樂", Money::from_units(3000), Money::from_units(3000));
        assert!(!at_limit.is_overspent());
        assert_eq!(at_limit.progress(), Some(1.0));

        let over = CategorySummary::new("享樂", Money::from_units(3000), Money::from_cents(300_001));
        assert!(over.is_overspent());
        assert_eq!(over.remaining, Money::from_cents(-1));
        assert_eq!(over.progress(), Some(1.0));
    }

    #[test]
    fn test_zero_limit_is_uncapped() {
        let summary = CategorySummary::new("投資", Money::zero(), Money::from_units(10));
        assert_eq!(summary.progress(), None);
        assert!(!summary.has_limit());
        assert!(!summary.is_overspent());
    }

    #[test]
    fn test_warning_display() {
        let warning = Warning::CategoryOverBudget {
            category: "享樂".into(),
            limit: Money::from_units(3000),
            projected: Money::from_units(3001),
        };
        assert_eq!(warning.overage(), Money::from_units(1));
        assert_eq!(warning.category(), Some("享樂"));
        assert_eq!(warning.to_string(), "'享樂' over budget: 3001 of 3000 (1 over)");

        let total = Warning::TotalOverBudget {
            budget: Money::from_units(10_000),
            projected: Money::from_cents(1_000_050),
        };
        assert_eq!(total.to_string(), "Total over budget: 10000.50 of 10000 (0.50 over)");
    }

    #[test]
    fn test_warning_serialization() {
        let warning = Warning::TotalOverBudget {
            budget: Money::from_units(100),
            projected: Money::from_units(150),
        };
        let json = serde_json::to_string(&warning).unwrap();
        assert_eq!(json, r#"{"kind":"total_over_budget","budget":100,"projected":150}"#);
    }
}
