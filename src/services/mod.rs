//! Business logic layer for pocket-ledger
//!
//! The aggregation engine is pure; the other services connect it to a
//! [`TransactionStore`](crate::storage::TransactionStore).

pub mod aggregate;
pub mod dashboard;
pub mod entry;
pub mod period;

pub use aggregate::{aggregate, evaluate_warnings};
pub use dashboard::{DashboardService, PeriodSnapshot};
pub use entry::{EntryOutcome, EntryService};
pub use period::PeriodService;
