//! Dashboard formatting
//!
//! Renders an aggregate as per-bucket progress bars followed by the totals
//! and any warnings.

use crate::config::Settings;
use crate::models::{AggregateResult, CategorySummary, Warning};

use super::report::{
    double_separator, format_bar, format_header, format_money_colored, format_percentage,
    left_align, right_align, separator, truncate,
};

const WIDTH: usize = 72;
const LABEL_WIDTH: usize = 18;
const BAR_WIDTH: usize = 20;

/// Format the full dashboard for a period
pub fn format_dashboard(title: &str, result: &AggregateResult, settings: &Settings) -> String {
    let symbol = settings.currency_symbol.as_str();
    let mut output = String::new();

    output.push_str(&format_header(title, WIDTH));
    output.push('\n');
    output.push_str(&double_separator(WIDTH));
    output.push('\n');

    for summary in &result.categories {
        output.push_str(&format_category_line(summary, symbol));
        output.push('\n');
    }

    output.push_str(&separator(WIDTH));
    output.push('\n');

    output.push_str(&format_total_line("Spent", &result.total_expense.format_with_symbol(symbol)));
    if settings.budget.models_income() {
        output.push_str(&format_total_line(
            "Income",
            &result.total_income.format_with_symbol(symbol),
        ));
        output.push_str(&format_total_line(
            "Budget",
            &format!(
                "{} (base {} + income {})",
                result.dynamic_budget.format_with_symbol(symbol),
                settings.budget.base_budget.format_with_symbol(symbol),
                result.total_income.format_with_symbol(symbol)
            ),
        ));
    } else {
        output.push_str(&format_total_line(
            "Budget",
            &result.dynamic_budget.format_with_symbol(symbol),
        ));
    }
    output.push_str(&format_total_line(
        "Remaining",
        &format_money_colored(result.remaining_total, symbol),
    ));
    output.push_str(&format!(
        "{}  {}\n",
        format_bar(result.total_progress(), BAR_WIDTH * 2),
        result
            .total_progress()
            .map(format_percentage)
            .unwrap_or_default()
    ));

    if result.unrecognized_rows > 0 {
        output.push_str(&format!(
            "\nNote: {} in {} row(s) under unconfigured categories (counted in the total only)\n",
            result.unrecognized_spend.format_with_symbol(symbol),
            result.unrecognized_rows
        ));
    }
    if result.malformed_rows > 0 {
        output.push_str(&format!(
            "Note: {} row(s) with an unreadable amount were counted as 0\n",
            result.malformed_rows
        ));
    }

    if !result.warnings.is_empty() {
        output.push('\n');
        output.push_str(&format_warnings(&result.warnings));
    }

    output
}

fn format_category_line(summary: &CategorySummary, symbol: &str) -> String {
    let label = left_align(&truncate(&summary.category, LABEL_WIDTH), LABEL_WIDTH);

    if !summary.has_limit() {
        return format!(
            "{} {} {:>6}  {}",
            label,
            format_bar(None, BAR_WIDTH),
            "",
            summary.spend.format_with_symbol(symbol)
        );
    }

    let marker = if summary.is_overspent() { " !" } else { "" };
    format!(
        "{} {} {}  {} / {}  left {}{}",
        label,
        format_bar(summary.progress(), BAR_WIDTH),
        right_align(
            &summary.progress().map(format_percentage).unwrap_or_default(),
            6
        ),
        summary.spend.format_with_symbol(symbol),
        summary.limit.format_with_symbol(symbol),
        format_money_colored(summary.remaining, symbol),
        marker
    )
}

fn format_total_line(label: &str, value: &str) -> String {
    format!("{} {}\n", left_align(&format!("{}:", label), 11), value)
}

/// Format warnings as non-blocking notices, one per line
pub fn format_warnings(warnings: &[Warning]) -> String {
    warnings
        .iter()
        .map(|w| format!("⚠ Warning: {}\n", w))
        .collect()
}
