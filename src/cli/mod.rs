//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod entry;
pub mod export;
pub mod report;
pub mod setup;

pub use entry::{handle_add_command, handle_check_command, AddArgs, CheckArgs};
pub use export::{handle_export_command, ExportArgs, ExportFormat};
pub use report::{
    handle_dashboard_command, handle_list_command, handle_periods_command, PeriodArgs,
};
pub use setup::{handle_config_command, handle_init_command};
