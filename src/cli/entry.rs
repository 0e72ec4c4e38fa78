//! Entry CLI commands
//!
//! `add` records a transaction; `check` previews the warnings an amount
//! would trigger without writing anything.

use chrono::NaiveDate;
use clap::Args;

use crate::config::{BudgetConfig, Settings};
use crate::display::format_warnings;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Money, PaymentMethod, Transaction};
use crate::services::{EntryService, PeriodService};
use crate::storage::TransactionStore;

/// Arguments for recording a transaction
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Category label (a configured bucket, the income label, or any other label)
    pub category: String,
    /// Amount (e.g. "120", "99.5", "1,200")
    pub amount: String,
    /// What the money was for
    pub description: String,
    /// Transaction date (YYYY-MM-DD), defaults to today
    #[arg(short, long)]
    pub date: Option<String>,
    /// Payment method (現金, 信用卡, 行動支付, 轉帳 or cash/card/mobile/transfer)
    #[arg(short, long)]
    pub payment: Option<String>,
    /// Free-form note
    #[arg(short, long)]
    pub note: Option<String>,
}

/// Arguments for previewing warnings
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Category label
    pub category: String,
    /// Amount to test against the remaining budget
    pub amount: String,
    /// Period to check against (YYYY-MM, "last", "Jan 2026"), defaults to current
    #[arg(short, long)]
    pub period: Option<String>,
}

/// Handle `add`
pub fn handle_add_command(
    store: &dyn TransactionStore,
    settings: &Settings,
    periods: &PeriodService,
    args: AddArgs,
) -> LedgerResult<()> {
    let config = &settings.budget;
    let category = resolve_category(config, &args.category);
    let amount = parse_amount(&args.amount)?;
    let date = match args.date {
        Some(d) => parse_date(&d)?,
        None => periods.today(),
    };
    let payment = match args.payment {
        Some(p) => PaymentMethod::parse(&p),
        None => settings.payment_methods.first().cloned().unwrap_or_default(),
    };

    let mut transaction = Transaction::new(date, category, args.description, amount)
        .with_payment(payment);
    if let Some(note) = args.note {
        transaction = transaction.with_note(note);
    }

    let service = EntryService::new(store, config);
    let outcome = service.record(transaction)?;

    println!(
        "Recorded: {} ({})",
        outcome.transaction, outcome.transaction.payment
    );
    print!("{}", format_warnings(&outcome.warnings));
    if outcome.unrecognized_category {
        println!(
            "Note: '{}' is not a configured category; it counts toward the total only.",
            outcome.transaction.category
        );
    }

    Ok(())
}

/// Handle `check`
pub fn handle_check_command(
    store: &dyn TransactionStore,
    settings: &Settings,
    periods: &PeriodService,
    args: CheckArgs,
) -> LedgerResult<()> {
    let config = &settings.budget;
    let period = periods.parse_or_current(args.period.as_deref())?;
    let category = resolve_category(config, &args.category);
    let amount = parse_amount(&args.amount)?;

    let date = if period.contains(periods.today()) {
        periods.today()
    } else {
        period.start_date()
    };
    let candidate = Transaction::new(date, category, "", amount);

    let service = EntryService::new(store, config);
    let warnings = service.check(&candidate)?;

    if warnings.is_empty() {
        println!(
            "OK: {} under '{}' stays within budget for {}.",
            settings.format_money(amount),
            candidate.category,
            period
        );
    } else {
        print!("{}", format_warnings(&warnings));
    }

    Ok(())
}

/// Match typed input to a configured label
///
/// Exact matches win. Otherwise a case-insensitive prefix that picks out
/// exactly one selectable label resolves to it ("享樂" to "享樂 (Wants)").
/// Anything else is kept verbatim.
pub fn resolve_category(config: &BudgetConfig, input: &str) -> String {
    let input = input.trim();
    let selectable = config.selectable_categories();

    if selectable.iter().any(|label| *label == input) {
        return input.to_string();
    }

    let lowered = input.to_lowercase();
    let matches: Vec<&str> = selectable
        .into_iter()
        .filter(|label| !lowered.is_empty() && label.to_lowercase().starts_with(&lowered))
        .collect();

    match matches.as_slice() {
        [only] => only.to_string(),
        _ => input.to_string(),
    }
}

fn parse_amount(raw: &str) -> LedgerResult<Money> {
    Money::parse(raw)
        .ok()
        .filter(|money| !money.is_negative())
        .ok_or_else(|| LedgerError::Validation(format!("Invalid amount: '{}'", raw)))
}

/// Parse a date argument (YYYY-MM-DD or YYYY/MM/DD)
pub fn parse_date(raw: &str) -> LedgerResult<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(raw.trim(), "%Y/%m/%d"))
        .map_err(|_| {
            LedgerError::Validation(format!("Invalid date: '{}'. Use YYYY-MM-DD", raw))
        })
}
