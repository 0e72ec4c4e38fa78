//! Display formatting for terminal output
//!
//! Provides utilities for formatting the dashboard and the period register
//! for terminal display.

pub mod dashboard;
pub mod report;
pub mod transaction;

pub use dashboard::{format_dashboard, format_warnings};
pub use transaction::{format_transaction_register, format_transaction_row};
