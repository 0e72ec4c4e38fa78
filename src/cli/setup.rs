//! `init` and `config` commands

use crate::config::{LedgerPaths, Settings};
use crate::error::LedgerResult;

/// Handle `init`: write the settings file and create the data directory
pub fn handle_init_command(paths: &LedgerPaths, settings: &Settings) -> LedgerResult<()> {
    let existed = paths.is_initialized();

    println!("Initializing pocket-ledger at: {}", paths.base_dir().display());

    if existed {
        paths.ensure_directories()?;
        println!("Settings already present; kept as they were.");
    } else {
        settings.save(paths)?;
        println!("Initialization complete!");
    }
    println!();
    println!("Budget buckets:");
    for bucket in &settings.budget.category_limits {
        println!(
            "  - {} ({})",
            bucket.category,
            settings.format_money(bucket.limit)
        );
    }
    println!();
    println!("Edit {} to change them.", paths.settings_file().display());

    Ok(())
}

/// Handle `config`: show paths and the active configuration
pub fn handle_config_command(paths: &LedgerPaths, settings: &Settings) -> LedgerResult<()> {
    println!("pocket-ledger Configuration");
    println!("===========================");
    println!("Base directory:   {}", paths.base_dir().display());
    println!("Data directory:   {}", paths.data_dir().display());
    println!("Settings file:    {}", paths.settings_file().display());
    if !paths.is_initialized() {
        println!("                  (not written yet; run 'pocket init')");
    }
    println!();

    let budget = &settings.budget;
    println!("Settings:");
    println!("  Base budget:     {}", settings.format_money(budget.base_budget));
    match &budget.income_category {
        Some(label) => println!("  Income label:    {} (raises the budget)", label),
        None => println!("  Income label:    (income not tracked)"),
    }
    println!("  Currency symbol: {}", settings.currency_symbol);
    println!(
        "  Payment methods: {}",
        settings
            .payment_methods
            .iter()
            .map(|p| p.label())
            .collect::<Vec<_>>()
            .join(", ")
    );
    println!();
    println!("Category limits:");
    for bucket in &budget.category_limits {
        let limit = if bucket.limit.is_zero() {
            "uncapped".to_string()
        } else {
            settings.format_money(bucket.limit)
        };
        println!("  {:<20} {}", bucket.category, limit);
    }

    Ok(())
}
