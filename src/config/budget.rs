//! Budget configuration
//!
//! The category limits, base budget and optional income label. Loaded once
//! as part of [`Settings`](super::Settings) and passed by reference into
//! every aggregation call.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::LedgerError;
use crate::models::{CategoryClass, Money};

/// Spending limit for one expense category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryLimit {
    /// Category label, matched exactly against transaction rows
    pub category: String,
    /// Maximum spend for the period
    #[serde(with = "crate::models::money::decimal")]
    pub limit: Money,
}

impl CategoryLimit {
    pub fn new(category: impl Into<String>, limit: Money) -> Self {
        Self {
            category: category.into(),
            limit,
        }
    }
}

/// Budget limits for a period
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetConfig {
    /// Expense buckets, in display order
    #[serde(default)]
    pub category_limits: Vec<CategoryLimit>,

    /// Fixed total budget before income is added
    #[serde(default, with = "crate::models::money::decimal")]
    pub base_budget: Money,

    /// Category label that marks income; `None` disables income modeling
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub income_category: Option<String>,
}

impl Default for BudgetConfig {
    fn default() -> Self {
        Self {
            category_limits: vec![
                CategoryLimit::new("生存 (Needs)", Money::from_units(6000)),
                CategoryLimit::new("享樂 (Wants)", Money::from_units(3000)),
                CategoryLimit::new("投資/儲蓄 (Future)", Money::from_units(1000)),
            ],
            base_budget: Money::from_units(10_000),
            income_category: Some("收入 (Income)".to_string()),
        }
    }
}

impl BudgetConfig {
    /// Create a configuration without income modeling
    pub fn new(category_limits: Vec<CategoryLimit>, base_budget: Money) -> Self {
        Self {
            category_limits,
            base_budget,
            income_category: None,
        }
    }

    /// Enable income modeling under the given label
    pub fn with_income_category(mut self, label: impl Into<String>) -> Self {
        self.income_category = Some(label.into());
        self
    }

    /// Whether income raises the total budget
    pub fn models_income(&self) -> bool {
        self.income_category.is_some()
    }

    /// Configured limit for a bucket
    pub fn limit_for(&self, category: &str) -> Option<Money> {
        self.category_limits
            .iter()
            .find(|c| c.category == category)
            .map(|c| c.limit)
    }

    /// Classify a transaction's category label
    ///
    /// Matching is exact. The income label wins over a bucket of the same name,
    /// which [`validate`](Self::validate) rejects anyway.
    pub fn classify<'a>(&'a self, category: &str) -> CategoryClass<'a> {
        if self.income_category.as_deref() == Some(category) {
            return CategoryClass::Income;
        }

        match self
            .category_limits
            .iter()
            .find(|c| c.category == category)
        {
            Some(bucket) => CategoryClass::Expense(&bucket.category),
            None => CategoryClass::Unrecognized,
        }
    }

    /// Every label the entry form should offer: buckets first, then income
    pub fn selectable_categories(&self) -> Vec<&str> {
        self.category_limits
            .iter()
            .map(|c| c.category.as_str())
            .chain(self.income_category.as_deref())
            .collect()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), LedgerError> {
        if self.base_budget.is_negative() {
            return Err(LedgerError::Config(format!(
                "base_budget must not be negative, got {}",
                self.base_budget.to_plain_string()
            )));
        }

        let mut seen = HashSet::new();
        for bucket in &self.category_limits {
            if bucket.category.trim().is_empty() {
                return Err(LedgerError::Config("category name must not be empty".into()));
            }
            if bucket.limit.is_negative() {
                return Err(LedgerError::Config(format!(
                    "limit for '{}' must not be negative",
                    bucket.category
                )));
            }
            if !seen.insert(bucket.category.as_str()) {
                return Err(LedgerError::Config(format!(
                    "category '{}' is configured twice",
                    bucket.category
                )));
            }
        }

        if let Some(income) = &self.income_category {
            if seen.contains(income.as_str()) {
                return Err(LedgerError::Config(format!(
                    "income category '{}' is also an expense bucket",
                    income
                )));
            }
        }

        Ok(())
    }
}
