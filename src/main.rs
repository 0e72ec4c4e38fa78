use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use pocket_ledger::cli::{
    handle_add_command, handle_check_command, handle_config_command, handle_dashboard_command,
    handle_export_command, handle_init_command, handle_list_command, handle_periods_command,
    AddArgs, CheckArgs, ExportArgs, PeriodArgs,
};
use pocket_ledger::config::{LedgerPaths, Settings};
use pocket_ledger::services::PeriodService;
use pocket_ledger::storage::CsvLedgerStore;
use pocket_ledger::LedgerError;

#[derive(Parser)]
#[command(
    name = "pocket",
    version,
    about = "Monthly budget tracking with per-category limits",
    long_about = "pocket-ledger records expenses into one table per month and keeps \
                  them against per-category limits and an overall budget that income \
                  can raise. Overspending produces warnings; nothing is ever blocked."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a transaction
    Add(AddArgs),

    /// Show the warnings an amount would trigger, without recording it
    Check(CheckArgs),

    /// Per-category progress, totals and warnings for a period
    #[command(alias = "dash")]
    Dashboard(PeriodArgs),

    /// List a period's transactions
    #[command(alias = "ls")]
    List(PeriodArgs),

    /// List the periods that have data
    Periods,

    /// Export a period
    Export(ExportArgs),

    /// Write the default settings file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> ExitCode {
    pocket_ledger::init();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let paths = LedgerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let periods = PeriodService::new();

    let Some(command) = cli.command else {
        println!("pocket-ledger - monthly budget tracking");
        println!();
        println!("Run 'pocket --help' for usage information.");
        println!("Run 'pocket dashboard' to see this month's budget.");
        return Ok(());
    };

    let open_store = || CsvLedgerStore::new(paths.clone());

    match command {
        Commands::Add(args) => handle_add_command(&open_store()?, &settings, &periods, args)?,
        Commands::Check(args) => handle_check_command(&open_store()?, &settings, &periods, args)?,
        Commands::Dashboard(args) => {
            handle_dashboard_command(&open_store()?, &settings, &periods, args)?
        }
        Commands::List(args) => handle_list_command(&open_store()?, &settings, &periods, args)?,
        Commands::Periods => handle_periods_command(&open_store()?, &periods)?,
        Commands::Export(args) => {
            handle_export_command(&open_store()?, &settings, &periods, args)?
        }
        Commands::Init => handle_init_command(&paths, &settings)?,
        Commands::Config => handle_config_command(&paths, &settings)?,
    }

    Ok(())
}

fn report_error(err: &anyhow::Error) {
    eprintln!("Error: {}", err);

    if let Some(ledger_err) = err.downcast_ref::<LedgerError>() {
        if ledger_err.is_retryable() {
            eprintln!("The ledger could not be read or written. Nothing was lost; please try again.");
        }
    }
}
