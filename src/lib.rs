//! pocket-ledger - monthly budget tracking for a personal expense ledger
//!
//! Transactions are appended to one table per calendar month. For any month
//! the engine computes spend per configured category, total spend, and the
//! dynamic budget (the base budget raised by recorded income), then derives
//! advisory warnings. A pending entry can be checked against the current
//! month before it is written.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Settings, budget configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, periods, transactions, aggregates)
//! - `storage`: The transaction store trait and its CSV implementation
//! - `services`: The aggregation engine and the services around it
//! - `display`: Terminal formatting
//! - `export`: JSON, YAML and CSV export
//! - `cli`: Command handlers for the `pocket` binary
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use pocket_ledger::config::{BudgetConfig, CategoryLimit};
//! use pocket_ledger::models::{Money, Transaction};
//! use pocket_ledger::services::{aggregate, evaluate_warnings};
//!
//! let config = BudgetConfig::new(
//!     vec![CategoryLimit::new("享樂", Money::from_units(3000))],
//!     Money::from_units(10_000),
//! );
//! let date = NaiveDate::from_ymd_opt(2026, 1, 10).unwrap();
//! let rows = vec![Transaction::new(date, "享樂", "concert", Money::from_units(2999))];
//!
//! let state = aggregate(&rows, &config);
//! assert_eq!(state.remaining("享樂"), Some(Money::from_units(1)));
//!
//! let warnings = evaluate_warnings(Money::from_units(2), "享樂", &state, &config);
//! assert_eq!(warnings.len(), 1);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;
pub mod utils;

pub use error::{LedgerError, LedgerResult};

/// Initializes logging for the process
pub fn init() {
    utils::init_tracing();
    tracing::debug!("pocket-ledger tracing initialized");
}
