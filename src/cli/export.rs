//! CLI commands for data export

use crate::config::Settings;
use crate::error::{LedgerError, LedgerResult};
use crate::export::{export_period_json, export_period_yaml, export_summary_csv, PeriodExport};
use crate::services::{DashboardService, PeriodService};
use crate::storage::TransactionStore;
use clap::{Args, ValueEnum};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Export format options
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ExportFormat {
    /// JSON (rows and summary)
    #[default]
    Json,
    /// YAML (rows and summary, human-readable)
    Yaml,
    /// CSV (per-category summary only)
    Csv,
}

/// Arguments for `export`
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Period (YYYY-MM, "last", "Jan 2026"), defaults to current
    #[arg(short, long)]
    pub period: Option<String>,

    /// Export format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: ExportFormat,

    /// Output file path; stdout when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Handle `export`
pub fn handle_export_command(
    store: &dyn TransactionStore,
    settings: &Settings,
    periods: &PeriodService,
    args: ExportArgs,
) -> LedgerResult<()> {
    let period = periods.parse_or_current(args.period.as_deref())?;
    let snapshot = DashboardService::new(store, &settings.budget).snapshot(&period)?;

    match &args.output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                LedgerError::Export(format!("Failed to create file {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            write_export(&snapshot, settings, args.format, &mut writer)?;
            writer
                .flush()
                .map_err(|e| LedgerError::Export(e.to_string()))?;
            println!("Exported {} to: {}", period, path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            write_export(&snapshot, settings, args.format, &mut writer)?;
        }
    }

    Ok(())
}

fn write_export<W: Write>(
    snapshot: &crate::services::PeriodSnapshot,
    settings: &Settings,
    format: ExportFormat,
    writer: &mut W,
) -> LedgerResult<()> {
    match format {
        ExportFormat::Json => {
            let export = PeriodExport::from_snapshot(snapshot, &settings.budget);
            export_period_json(&export, writer, true)
        }
        ExportFormat::Yaml => {
            let export = PeriodExport::from_snapshot(snapshot, &settings.budget);
            export_period_yaml(&export, writer)
        }
        ExportFormat::Csv => export_summary_csv(&snapshot.aggregate, writer),
    }
}
