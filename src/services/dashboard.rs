//! Dashboard service
//!
//! Fetches a period's rows from the store and aggregates them. Every call
//! reads a fresh snapshot; nothing is cached between calls.

use tracing::debug;

use crate::config::BudgetConfig;
use crate::error::LedgerResult;
use crate::models::{AggregateResult, Period, Transaction};
use crate::storage::TransactionStore;

use super::aggregate::aggregate;

/// A period's rows together with their aggregate
#[derive(Debug, Clone)]
pub struct PeriodSnapshot {
    pub period: Period,
    pub transactions: Vec<Transaction>,
    pub aggregate: AggregateResult,
}

/// Service for building the budget dashboard
pub struct DashboardService<'a, S: TransactionStore + ?Sized> {
    store: &'a S,
    config: &'a BudgetConfig,
}

impl<'a, S: TransactionStore + ?Sized> DashboardService<'a, S> {
    pub fn new(store: &'a S, config: &'a BudgetConfig) -> Self {
        Self { store, config }
    }

    /// Fetch and aggregate a period
    pub fn snapshot(&self, period: &Period) -> LedgerResult<PeriodSnapshot> {
        let transactions = self.store.fetch_period(period)?;
        let aggregate = aggregate(&transactions, self.config);
        debug!(%period, warnings = aggregate.warnings.len(), "built dashboard snapshot");

        Ok(PeriodSnapshot {
            period: *period,
            transactions,
            aggregate,
        })
    }

    /// Aggregate figures for a period
    pub fn aggregate_period(&self, period: &Period) -> LedgerResult<AggregateResult> {
        Ok(self.snapshot(period)?.aggregate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CategoryLimit, LedgerPaths};
    use crate::models::Money;
    use crate::storage::CsvLedgerStore;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, CsvLedgerStore) {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        (temp_dir, CsvLedgerStore::new(paths).unwrap())
    }

    fn config() -> BudgetConfig {
        BudgetConfig::new(
            vec![CategoryLimit::new("生存", Money::from_units(6000))],
            Money::from_units(10_000),
        )
        .with_income_category("收入")
    }

    #[test]
    fn test_empty_period_snapshot() {
        let (_temp_dir, store) = create_test_store();
        let config = config();
        let service = DashboardService::new(&store, &config);
        let period = Period::new(2026, 1).unwrap();

        let snapshot = service.snapshot(&period).unwrap();
        assert!(snapshot.transactions.is_empty());
        assert_eq!(snapshot.aggregate.remaining_total, Money::from_units(10_000));
    }

    #[test]
    fn test_snapshot_reads_fresh_rows() {
        let (_temp_dir, store) = create_test_store();
        let config = config();
        let service = DashboardService::new(&store, &config);
        let period = Period::new(2026, 1).unwrap();
        let date = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();

        store
            .append(&period, &Transaction::new(date, "生存", "rent", Money::from_units(5000)))
            .unwrap();
        assert_eq!(
            service.aggregate_period(&period).unwrap().total_expense,
            Money::from_units(5000)
        );

        store
            .append(&period, &Transaction::new(date, "收入", "salary", Money::from_units(40_000)))
            .unwrap();
        let result = service.aggregate_period(&period).unwrap();
        assert_eq!(result.dynamic_budget, Money::from_units(50_000));
        assert_eq!(result.remaining_total, Money::from_units(45_000));
    }
}
