//! Budget aggregation and warning evaluation
//!
//! Pure functions over a period's transactions and the budget configuration.
//! No I/O and no caching: callers fetch a fresh snapshot and recompute on
//! every render. Sums are integer additions in minor units, so the result
//! does not depend on the order rows were read in.

use std::collections::HashMap;

use tracing::debug;

use crate::config::BudgetConfig;
use crate::models::{AggregateResult, CategoryClass, CategorySummary, Money, Transaction, Warning};

/// Aggregate one period's transactions against the budget configuration
///
/// Rows under the income label raise the dynamic budget. Rows under a
/// configured bucket count toward that bucket and the total. Rows under any
/// other label count toward the total only. Malformed amounts count as zero.
pub fn aggregate(transactions: &[Transaction], config: &BudgetConfig) -> AggregateResult {
    let mut bucket_spend: HashMap<&str, Money> = HashMap::new();
    let mut total_expense = Money::zero();
    let mut total_income = Money::zero();
    let mut unrecognized_spend = Money::zero();
    let mut unrecognized_rows = 0;
    let mut malformed_rows = 0;

    for txn in transactions {
        if txn.amount.is_malformed() {
            malformed_rows += 1;
        }
        let value = txn.value();

        match config.classify(&txn.category) {
            CategoryClass::Income => total_income += value,
            CategoryClass::Expense(bucket) => {
                *bucket_spend.entry(bucket).or_default() += value;
                total_expense += value;
            }
            CategoryClass::Unrecognized => {
                unrecognized_spend += value;
                unrecognized_rows += 1;
                total_expense += value;
            }
        }
    }

    let categories: Vec<CategorySummary> = config
        .category_limits
        .iter()
        .map(|bucket| {
            let spend = bucket_spend
                .get(bucket.category.as_str())
                .copied()
                .unwrap_or_default();
            CategorySummary::new(bucket.category.clone(), bucket.limit, spend)
        })
        .collect();

    let dynamic_budget = config.base_budget + total_income;

    let mut warnings: Vec<Warning> = categories
        .iter()
        .filter(|c| c.is_overspent())
        .map(|c| Warning::CategoryOverBudget {
            category: c.category.clone(),
            limit: c.limit,
            projected: c.spend,
        })
        .collect();

    if total_expense > dynamic_budget {
        warnings.push(Warning::TotalOverBudget {
            budget: dynamic_budget,
            projected: total_expense,
        });
    }

    debug!(
        rows = transactions.len(),
        total_expense = %total_expense,
        total_income = %total_income,
        unrecognized_rows,
        malformed_rows,
        "aggregated period"
    );

    AggregateResult {
        categories,
        total_expense,
        total_income,
        dynamic_budget,
        remaining_total: dynamic_budget - total_expense,
        unrecognized_spend,
        unrecognized_rows,
        malformed_rows,
        warnings,
    }
}

/// Warnings a pending entry would trigger if it were recorded
///
/// `pre_state` is the aggregate of the period the entry belongs to, before
/// the entry. Income never warns. A configured bucket warns when its spend
/// plus the candidate would strictly exceed its limit. Any spending, including
/// under an unrecognized label, warns when the total would strictly exceed
/// the dynamic budget. Advisory only: nothing here prevents the write.
pub fn evaluate_warnings(
    candidate_amount: Money,
    candidate_category: &str,
    pre_state: &AggregateResult,
    config: &BudgetConfig,
) -> Vec<Warning> {
    let class = config.classify(candidate_category);
    let mut warnings = Vec::new();

    if let Some(bucket) = class.bucket() {
        if let Some(summary) = pre_state.category(bucket) {
            let projected = summary.spend + candidate_amount;
            if summary.has_limit() && projected > summary.limit {
                warnings.push(Warning::CategoryOverBudget {
                    category: bucket.to_string(),
                    limit: summary.limit,
                    projected,
                });
            }
        }
    }

    if class.is_spending() {
        let projected = pre_state.total_expense + candidate_amount;
        if projected > pre_state.dynamic_budget {
            warnings.push(Warning::TotalOverBudget {
                budget: pre_state.dynamic_budget,
                projected,
            });
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CategoryLimit;
    use crate::models::Amount;
    use chrono::NaiveDate;

    fn config() -> BudgetConfig {
        BudgetConfig::new(
            vec![
                CategoryLimit::new("生存", Money::from_units(6000)),
                CategoryLimit::new("享樂", Money::from_units(3000)),
                CategoryLimit::new("投資/儲蓄", Money::from_units(1000)),
            ],
            Money::from_units(10_000),
        )
    }

    fn txn(category: &str, units: i64) -> Transaction {
        let date = NaiveDate::from_ymd_opt(2026, 1, 10).unwrap();
        Transaction::new(date, category, "item", Money::from_units(units))
    }

    #[test]
    fn test_empty_period_is_all_zero() {
        let config = config();
        let result = aggregate(&[], &config);

        assert_eq!(result.total_expense, Money::zero());
        assert_eq!(result.total_income, Money::zero());
        assert_eq!(result.dynamic_budget, config.base_budget);
        assert_eq!(result.remaining_total, config.base_budget);
        assert!(result.warnings.is_empty());
        for bucket in &config.category_limits {
            assert_eq!(result.spend(&bucket.category), Some(Money::zero()));
            assert_eq!(result.remaining(&bucket.category), Some(bucket.limit));
        }
    }

    #[test]
    fn test_per_category_spend() {
        let result = aggregate(
            &[txn("享樂", 2999), txn("生存", 100), txn("生存", 50)],
            &config(),
        );

        assert_eq!(result.spend("享樂"), Some(Money::from_units(2999)));
        assert_eq!(result.remaining("享樂"), Some(Money::from_units(1)));
        assert_eq!(result.spend("生存"), Some(Money::from_units(150)));
        assert_eq!(result.spend("投資/儲蓄"), Some(Money::zero()));
        assert_eq!(result.total_expense, Money::from_units(3149));
        assert_eq!(result.bucketed_spend(), result.total_expense);
    }

    #[test]
    fn test_unrecognized_counts_toward_total_only() {
        let result = aggregate(&[txn("雜項", 50), txn("生存", 10)], &config());

        assert_eq!(result.total_expense, Money::from_units(60));
        assert_eq!(result.bucketed_spend(), Money::from_units(10));
        assert_eq!(result.spend("雜項"), None);
        assert_eq!(result.unrecognized_spend, Money::from_units(50));
        assert_eq!(result.unrecognized_rows, 1);
    }

    #[test]
    fn test_malformed_amount_counts_as_zero() {
        let mut bad = txn("生存", 0);
        bad.amount = Amount::parse("twelve");

        let result = aggregate(&[bad, txn("生存", 30)], &config());
        assert_eq!(result.spend("生存"), Some(Money::from_units(30)));
        assert_eq!(result.total_expense, Money::from_units(30));
        assert_eq!(result.malformed_rows, 1);
    }

    #[test]
    fn test_oversized_amounts_do_not_abort() {
        let mut first = txn("雜項", 0);
        first.amount = Amount::parse("90000000000000000");
        let second = first.clone();

        let result = aggregate(&[first, second, txn("生存", 10)], &config());
        assert_eq!(result.total_expense, Money::from_units(10));
        assert_eq!(result.malformed_rows, 2);
    }

    #[test]
    fn test_totals_saturate_instead_of_overflowing() {
        let mut huge = txn("生存", 0);
        huge.amount = Amount::Valid(Money::from_cents(i64::MAX / 2 + 1));

        let result = aggregate(&[huge.clone(), huge.clone(), huge], &config());
        assert_eq!(result.total_expense, Money::from_cents(i64::MAX));
        assert!(result.is_over_budget());
        assert_eq!(result.warnings.len(), 2);
    }

    #[test]
    fn test_income_raises_dynamic_budget() {
        let config = config().with_income_category("收入");
        let result = aggregate(&[txn("收入", 5000), txn("享樂", 2000)], &config);

        assert_eq!(result.total_income, Money::from_units(5000));
        assert_eq!(result.dynamic_budget, Money::from_units(15_000));
        assert_eq!(result.total_expense, Money::from_units(2000));
        assert_eq!(result.remaining_total, Money::from_units(13_000));
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_income_label_is_spending_without_income_modeling() {
        let result = aggregate(&[txn("收入", 5000)], &config());
        assert_eq!(result.total_income, Money::zero());
        assert_eq!(result.total_expense, Money::from_units(5000));
        assert_eq!(result.dynamic_budget, Money::from_units(10_000));
    }

    #[test]
    fn test_recorded_overspend_warns() {
        let result = aggregate(
            &[txn("享樂", 3001), txn("生存", 6000), txn("雜項", 1000)],
            &config(),
        );

        assert_eq!(
            result.warnings,
            vec![
                Warning::CategoryOverBudget {
                    category: "享樂".into(),
                    limit: Money::from_units(3000),
                    projected: Money::from_units(3001),
                },
                Warning::TotalOverBudget {
                    budget: Money::from_units(10_000),
                    projected: Money::from_units(10_001),
                },
            ]
        );
        assert!(result.is_over_budget());
    }

    #[test]
    fn test_candidate_at_limit_does_not_warn() {
        let config = config();
        let state = aggregate(&[txn("享樂", 2999)], &config);

        assert!(evaluate_warnings(Money::from_units(1), "享樂", &state, &config).is_empty());

        let warnings = evaluate_warnings(Money::from_units(2), "享樂", &state, &config);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].category(), Some("享樂"));
    }

    #[test]
    fn test_candidate_income_never_warns() {
        let config = config().with_income_category("收入");
        let state = aggregate(&[txn("生存", 9999)], &config);

        assert!(evaluate_warnings(Money::from_units(50_000), "收入", &state, &config).is_empty());
    }

    #[test]
    fn test_candidate_unrecognized_only_checks_total() {
        let config = config();
        let state = aggregate(&[txn("生存", 9950)], &config);

        assert!(evaluate_warnings(Money::from_units(50), "雜項", &state, &config).is_empty());
        assert_eq!(
            evaluate_warnings(Money::from_units(51), "雜項", &state, &config),
            vec![Warning::TotalOverBudget {
                budget: Money::from_units(10_000),
                projected: Money::from_units(10_001),
            }]
        );
    }

    #[test]
    fn test_zero_limit_bucket_never_warns_on_its_own() {
        let config = BudgetConfig::new(
            vec![CategoryLimit::new("其他", Money::zero())],
            Money::from_units(100),
        );
        let state = aggregate(&[txn("其他", 10)], &config);

        assert!(state.warnings.is_empty());
        assert!(evaluate_warnings(Money::from_units(10), "其他", &state, &config).is_empty());
    }
}
