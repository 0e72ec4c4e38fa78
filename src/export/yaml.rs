//! YAML Export functionality
//!
//! Same content as the JSON export, in a human-readable layout.

use crate::error::{LedgerError, LedgerResult};
use crate::export::json::PeriodExport;
use std::io::Write;

/// Export a period to YAML
pub fn export_period_yaml<W: Write>(export: &PeriodExport, writer: &mut W) -> LedgerResult<()> {
    let write_err = |e: std::io::Error| LedgerError::Export(e.to_string());

    writeln!(writer, "# pocket-ledger export for {}", export.period).map_err(write_err)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(write_err)?;
    writeln!(writer, "# App Version: {}", export.app_version).map_err(write_err)?;
    writeln!(writer).map_err(write_err)?;

    serde_yaml::to_writer(writer, export).map_err(|e| LedgerError::Export(e.to_string()))?;

    Ok(())
}
