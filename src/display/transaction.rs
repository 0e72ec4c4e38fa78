//! Transaction display formatting
//!
//! Register view of a period's rows.

use crate::models::{Money, Transaction};

use super::report::{left_align, right_align, truncate};

/// Format a single transaction for display (register row)
pub fn format_transaction_row(txn: &Transaction, date_format: &str) -> String {
    let amount = if txn.amount.is_malformed() {
        format!("?{}", txn.amount)
    } else {
        txn.amount.to_string()
    };

    let mut row = format!(
        "{} {} {} {} {}",
        left_align(&txn.date.format(date_format).to_string(), 10),
        left_align(&truncate(&txn.category, 14), 14),
        left_align(&truncate(&txn.description, 24), 24),
        right_align(&amount, 10),
        txn.payment
    );

    if let Some(note) = &txn.note {
        row.push_str(&format!("  ({})", truncate(note, 30)));
    }

    row
}

/// Format a list of transactions as a register
pub fn format_transaction_register(transactions: &[Transaction], date_format: &str) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{} {} {} {} {}\n",
        left_align("Date", 10),
        left_align("Category", 14),
        left_align("Description", 24),
        right_align("Amount", 10),
        "Payment"
    ));
    output.push_str(&"-".repeat(72));
    output.push('\n');

    for txn in transactions {
        output.push_str(&format_transaction_row(txn, date_format));
        output.push('\n');
    }

    let total: Money = transactions.iter().map(|t| t.value()).sum();
    output.push_str(&format!(
        "\n{} row(s), {} recorded\n",
        transactions.len(),
        total.to_plain_string()
    ));

    output
}
