//! Configuration module for pocket-ledger
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence
//! - The budget configuration handed to the aggregation engine

pub mod budget;
pub mod paths;
pub mod settings;

pub use budget::{BudgetConfig, CategoryLimit};
pub use paths::LedgerPaths;
pub use settings::Settings;
