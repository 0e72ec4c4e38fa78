//! Storage layer for pocket-ledger
//!
//! Transactions live in one table per period. The [`TransactionStore`] trait
//! is the only thing the services see; [`CsvLedgerStore`] is the file-backed
//! implementation.

pub mod csv_store;

pub use csv_store::CsvLedgerStore;

use crate::error::LedgerResult;
use crate::models::{Period, Transaction};

/// Period-partitioned, append-only transaction storage
pub trait TransactionStore {
    /// All rows recorded for a period, in stored order
    ///
    /// A period that has never been written to yields an empty list, not an
    /// error.
    fn fetch_period(&self, period: &Period) -> LedgerResult<Vec<Transaction>>;

    /// Append a row, creating the period's table on first use
    fn append(&self, period: &Period, transaction: &Transaction) -> LedgerResult<()>;

    /// Periods that have a table, oldest first
    fn list_periods(&self) -> LedgerResult<Vec<Period>>;
}
