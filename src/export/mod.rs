//! Export module for pocket-ledger
//!
//! Exports a period in multiple formats:
//! - CSV: per-category summary (spreadsheet-compatible)
//! - JSON: rows plus summary, machine-readable
//! - YAML: rows plus summary, human-readable

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_summary_csv;
pub use json::{export_period_json, PeriodExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_period_yaml;
