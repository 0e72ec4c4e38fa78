//! Reporting CLI commands
//!
//! `dashboard`, `list` and `periods`. Each call reads a fresh snapshot.

use clap::Args;

use crate::config::Settings;
use crate::display::{format_dashboard, format_transaction_register};
use crate::error::LedgerResult;
use crate::models::Period;
use crate::services::{DashboardService, PeriodService, PeriodSnapshot};
use crate::storage::TransactionStore;

/// Arguments shared by the per-period reports
#[derive(Args, Debug, Default)]
pub struct PeriodArgs {
    /// Period (YYYY-MM, "last", "Jan 2026"), defaults to current
    #[arg(short, long)]
    pub period: Option<String>,
}

/// Handle `dashboard`
pub fn handle_dashboard_command(
    store: &dyn TransactionStore,
    settings: &Settings,
    periods: &PeriodService,
    args: PeriodArgs,
) -> LedgerResult<()> {
    let snapshot = load_snapshot(store, settings, periods, &args)?;
    print!("{}", render_dashboard(&snapshot, settings, periods));
    Ok(())
}

/// Handle `list`
pub fn handle_list_command(
    store: &dyn TransactionStore,
    settings: &Settings,
    periods: &PeriodService,
    args: PeriodArgs,
) -> LedgerResult<()> {
    let snapshot = load_snapshot(store, settings, periods, &args)?;
    print!("{}", render_register(&snapshot, settings, periods));
    Ok(())
}

/// Handle `periods`
pub fn handle_periods_command(
    store: &dyn TransactionStore,
    periods: &PeriodService,
) -> LedgerResult<()> {
    print!("{}", render_periods(&store.list_periods()?, periods));
    Ok(())
}

fn load_snapshot(
    store: &dyn TransactionStore,
    settings: &Settings,
    periods: &PeriodService,
    args: &PeriodArgs,
) -> LedgerResult<PeriodSnapshot> {
    let period = periods.parse_or_current(args.period.as_deref())?;
    DashboardService::new(store, &settings.budget).snapshot(&period)
}

fn render_dashboard(snapshot: &PeriodSnapshot, settings: &Settings, periods: &PeriodService) -> String {
    let title = format!(
        "Budget for {}",
        periods.format_period_friendly(&snapshot.period)
    );
    format_dashboard(&title, &snapshot.aggregate, settings)
}

fn render_register(snapshot: &PeriodSnapshot, settings: &Settings, periods: &PeriodService) -> String {
    format!(
        "Transactions for {}\n\n{}",
        periods.format_period_friendly(&snapshot.period),
        format_transaction_register(&snapshot.transactions, &settings.date_format)
    )
}

fn render_periods(available: &[Period], periods: &PeriodService) -> String {
    if available.is_empty() {
        return "No periods recorded yet.\n\
                Record one with: pocket add <category> <amount> <description>\n"
            .to_string();
    }

    available
        .iter()
        .map(|period| {
            let marker = if periods.is_current(period) { " (current)" } else { "" };
            format!("{}{}\n", period, marker)
        })
        .collect()
}
