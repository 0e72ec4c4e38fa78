//! CSV Export functionality
//!
//! Exports a period's per-category summary, one row per bucket followed by
//! the unconfigured spend and the totals.

use crate::error::LedgerResult;
use crate::models::AggregateResult;
use csv::Writer;
use std::io::Write;

/// Export an aggregate as a spreadsheet-friendly summary
pub fn export_summary_csv<W: Write>(result: &AggregateResult, writer: &mut W) -> LedgerResult<()> {
    let mut csv = Writer::from_writer(writer);

    csv.write_record(["Category", "Limit", "Spent", "Remaining", "Status"])?;

    for summary in &result.categories {
        let status = if !summary.has_limit() {
            "uncapped"
        } else if summary.is_overspent() {
            "over"
        } else {
            "ok"
        };
        csv.write_record([
            summary.category.as_str(),
            &summary.limit.to_plain_string(),
            &summary.spend.to_plain_string(),
            &summary.remaining.to_plain_string(),
            status,
        ])?;
    }

    if result.unrecognized_rows > 0 {
        csv.write_record([
            "(unconfigured)",
            "",
            &result.unrecognized_spend.to_plain_string(),
            "",
            "",
        ])?;
    }

    if !result.total_income.is_zero() {
        csv.write_record(["(income)", "", "", &result.total_income.to_plain_string(), ""])?;
    }

    let total_status = if result.is_over_budget() { "over" } else { "ok" };
    csv.write_record([
        "TOTAL",
        &result.dynamic_budget.to_plain_string(),
        &result.total_expense.to_plain_string(),
        &result.remaining_total.to_plain_string(),
        total_status,
    ])?;

    csv.flush()?;
    Ok(())
}
