//! User settings for pocket-ledger
//!
//! Holds the budget configuration plus display preferences. Read once at
//! startup; nothing in the process mutates it afterwards.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::budget::BudgetConfig;
use super::paths::LedgerPaths;
use crate::error::LedgerError;
use crate::models::PaymentMethod;

/// User settings for pocket-ledger
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when formatting amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Payment methods offered when recording an entry
    #[serde(default = "default_payment_methods")]
    pub payment_methods: Vec<PaymentMethod>,

    /// Category limits, base budget and income label
    #[serde(default)]
    pub budget: BudgetConfig,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_payment_methods() -> Vec<PaymentMethod> {
    PaymentMethod::STANDARD.to_vec()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            payment_methods: default_payment_methods(),
            budget: BudgetConfig::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    ///
    /// A file that exists but fails validation is an error rather than being
    /// silently replaced.
    pub fn load_or_create(paths: &LedgerPaths) -> Result<Self, LedgerError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let settings = Self::read_from(&settings_path)?;
        settings.budget.validate()?;
        Ok(settings)
    }

    /// Save settings to disk
    ///
    /// The file is written next to its final location and renamed over it, so
    /// a failed save leaves the previous settings intact.
    pub fn save(&self, paths: &LedgerPaths) -> Result<(), LedgerError> {
        paths.ensure_directories()?;
        self.write_to(&paths.settings_file())
    }

    fn read_from(path: &Path) -> Result<Self, LedgerError> {
        let file = File::open(path).map_err(|e| {
            LedgerError::Config(format!("Failed to open {}: {}", path.display(), e))
        })?;

        serde_json::from_reader(BufReader::new(file)).map_err(|e| {
            LedgerError::Config(format!("Failed to load settings from {}: {}", path.display(), e))
        })
    }

    fn write_to(&self, path: &Path) -> Result<(), LedgerError> {
        let staged = path.with_extension("json.tmp");
        debug!(path = %path.display(), "saving settings");

        let write_staged = || -> Result<(), LedgerError> {
            let mut writer = BufWriter::new(File::create(&staged)?);
            serde_json::to_writer_pretty(&mut writer, self)
                .map_err(|e| LedgerError::Json(format!("Failed to serialize settings: {}", e)))?;
            writer.write_all(b"\n")?;
            writer.flush()?;
            writer.get_ref().sync_all()?;
            Ok(())
        };

        let saved = write_staged().and_then(|()| fs::rename(&staged, path).map_err(LedgerError::from));
        if saved.is_err() {
            let _ = fs::remove_file(&staged);
        }
        saved
    }

    /// Format an amount with the configured symbol
    pub fn format_money(&self, amount: crate::models::Money) -> String {
        amount.format_with_symbol(&self.currency_symbol)
    }
}
