//! Report formatting utilities for terminal output
//!
//! Column helpers count characters rather than bytes so CJK labels do not
//! split mid-codepoint.

use crate::models::Money;

/// Format a money amount with color hints for terminal display
pub fn format_money_colored(amount: Money, symbol: &str) -> String {
    let text = amount.format_with_symbol(symbol);
    if amount.is_negative() {
        format!("\x1b[31m{}\x1b[0m", text) // Red for negative
    } else if amount.is_positive() {
        format!("\x1b[32m{}\x1b[0m", text) // Green for positive
    } else {
        text
    }
}

/// Format a ratio in [0, 1] as a percentage
pub fn format_percentage(ratio: f64) -> String {
    let pct = ratio * 100.0;
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Progress bar for a ratio in [0, 1]
///
/// `None` (an uncapped bucket) renders as blank space.
pub fn format_bar(ratio: Option<f64>, width: usize) -> String {
    let ratio = match ratio {
        Some(r) if r > 0.0 => r.min(1.0),
        Some(_) => 0.0,
        None => return " ".repeat(width),
    };

    let filled = (ratio * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a header line with padding
pub fn format_header(title: &str, width: usize) -> String {
    let len = title.chars().count();
    let padding = if len >= width { 0 } else { (width - len) / 2 };
    format!("{}{}", " ".repeat(padding), title)
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Format a double separator line
pub fn double_separator(width: usize) -> String {
    "═".repeat(width)
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        "...".chars().take(max_len).collect()
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}

/// Right-align text in a field of given width
pub fn right_align(s: &str, width: usize) -> String {
    let len = s.chars().count();
    if len >= width {
        s.to_string()
    } else {
        format!("{}{}", " ".repeat(width - len), s)
    }
}

/// Left-align text in a field of given width
pub fn left_align(s: &str, width: usize) -> String {
    let len = s.chars().count();
    if len >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - len))
    }
}
