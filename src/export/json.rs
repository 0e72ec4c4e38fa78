//! JSON Export functionality
//!
//! Exports one period's rows and aggregate to JSON with schema versioning.

use crate::config::BudgetConfig;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{AggregateResult, Period, Transaction};
use crate::services::PeriodSnapshot;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Period export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub period: Period,

    /// Configuration the summary was computed against
    pub budget: BudgetConfig,

    /// Rows in the period, in stored order
    pub transactions: Vec<Transaction>,

    pub summary: AggregateResult,
}

impl PeriodExport {
    pub fn from_snapshot(snapshot: &PeriodSnapshot, config: &BudgetConfig) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            period: snapshot.period,
            budget: config.clone(),
            transactions: snapshot.transactions.clone(),
            summary: snapshot.aggregate.clone(),
        }
    }
}

/// Export a period to JSON
pub fn export_period_json<W: Write>(
    export: &PeriodExport,
    writer: &mut W,
    pretty: bool,
) -> LedgerResult<()> {
    let written = if pretty {
        serde_json::to_writer_pretty(&mut *writer, export)
    } else {
        serde_json::to_writer(&mut *writer, export)
    };
    written.map_err(|e| LedgerError::Export(e.to_string()))?;

    writeln!(writer).map_err(|e| LedgerError::Export(e.to_string()))?;
    Ok(())
}
