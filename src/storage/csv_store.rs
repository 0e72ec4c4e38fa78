//! CSV period tables
//!
//! One file per period under the data directory (`2026-01.csv`), laid out
//! like the spreadsheet the ledger grew out of:
//!
//! ```text
//! 日期,類別,細項說明,金額,支付方式,備註
//! 2026/01/15,享樂 (Wants),電影,320,信用卡,
//! ```
//!
//! Files are created with their header on the first append. Reading is
//! forgiving: rows that cannot be decoded are skipped with a warning, and
//! amount cells are kept verbatim so the engine can decide what they are worth.

use std::fs::{self, File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::PathBuf;

use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use tracing::{debug, info, warn};

use crate::config::paths::LedgerPaths;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Amount, PaymentMethod, Period, Transaction};

use super::TransactionStore;

/// Header row of every period table
pub const HEADER: [&str; 6] = ["日期", "類別", "細項說明", "金額", "支付方式", "備註"];

/// Date format written to the date column
const STORED_DATE_FORMAT: &str = "%Y/%m/%d";

/// Date formats accepted when reading
const ACCEPTED_DATE_FORMATS: [&str; 2] = ["%Y/%m/%d", "%Y-%m-%d"];

/// File-backed transaction store, one CSV table per period
#[derive(Debug, Clone)]
pub struct CsvLedgerStore {
    paths: LedgerPaths,
}

impl CsvLedgerStore {
    /// Create a store rooted at the given paths, creating the data directory
    pub fn new(paths: LedgerPaths) -> LedgerResult<Self> {
        paths.ensure_directories()?;
        Ok(Self { paths })
    }

    pub fn paths(&self) -> &LedgerPaths {
        &self.paths
    }

    fn table_path(&self, period: &Period) -> PathBuf {
        self.paths.period_file(period)
    }
}

impl TransactionStore for CsvLedgerStore {
    fn fetch_period(&self, period: &Period) -> LedgerResult<Vec<Transaction>> {
        let path = self.table_path(period);
        if !path.exists() {
            debug!(%period, "no table for period yet");
            return Ok(Vec::new());
        }

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(&path)
            .map_err(|e| {
                LedgerError::Store(format!("Failed to open {}: {}", path.display(), e))
            })?;

        let mut transactions = Vec::new();
        for (index, record) in reader.records().enumerate() {
            // header is line 1
            let line = index + 2;
            let record = match record {
                Ok(record) => record,
                Err(e) => {
                    warn!(%period, line, error = %e, "skipping unreadable row");
                    continue;
                }
            };

            match decode_row(&record) {
                Ok(txn) => {
                    if txn.amount.is_malformed() {
                        warn!(%period, line, amount = %txn.amount, "malformed amount counts as zero");
                    }
                    transactions.push(txn);
                }
                Err(reason) => warn!(%period, line, %reason, "skipping row"),
            }
        }

        debug!(%period, rows = transactions.len(), "fetched period");
        Ok(transactions)
    }

    fn append(&self, period: &Period, transaction: &Transaction) -> LedgerResult<()> {
        if !period.contains(transaction.date) {
            return Err(LedgerError::Validation(format!(
                "Transaction dated {} does not belong to period {}",
                transaction.date, period
            )));
        }

        let path = self.table_path(period);
        let open_err =
            |e: std::io::Error| LedgerError::Store(format!("Failed to open {}: {}", path.display(), e));

        let mut file = OpenOptions::new()
            .create(true)
            .read(true)
            .append(true)
            .open(&path)
            .map_err(open_err)?;

        let is_new = file.metadata().map_err(open_err)?.len() == 0;
        if !is_new && !ends_with_newline(&mut file).map_err(open_err)? {
            // hand-edited tables often lack a final newline
            debug!(%period, "terminating last line before append");
            file.write_all(b"\n").map_err(open_err)?;
        }

        let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);

        if is_new {
            info!(%period, "creating period table");
            writer.write_record(HEADER)?;
        }

        writer.write_record(encode_row(transaction))?;
        writer
            .flush()
            .map_err(|e| LedgerError::Store(format!("Failed to flush {}: {}", path.display(), e)))?;

        info!(%period, category = %transaction.category, amount = %transaction.amount, "appended row");
        Ok(())
    }

    fn list_periods(&self) -> LedgerResult<Vec<Period>> {
        let data_dir = self.paths.data_dir();
        if !data_dir.exists() {
            return Ok(Vec::new());
        }

        let entries = fs::read_dir(&data_dir).map_err(|e| {
            LedgerError::Store(format!("Failed to list {}: {}", data_dir.display(), e))
        })?;

        let mut periods = Vec::new();
        for entry in entries {
            let entry = entry?;
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("csv") {
                continue;
            }
            if let Some(period) = path
                .file_stem()
                .and_then(|s| s.to_str())
                .and_then(|s| Period::parse(s).ok())
            {
                periods.push(period);
            }
        }

        periods.sort();
        Ok(periods)
    }
}

fn ends_with_newline(file: &mut File) -> std::io::Result<bool> {
    file.seek(SeekFrom::End(-1))?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last)?;
    Ok(last[0] == b'\n')
}

fn encode_row(txn: &Transaction) -> [String; 6] {
    [
        txn.date.format(STORED_DATE_FORMAT).to_string(),
        txn.category.clone(),
        txn.description.clone(),
        txn.amount.to_string(),
        txn.payment.label().to_string(),
        txn.note.clone().unwrap_or_default(),
    ]
}

fn decode_row(record: &StringRecord) -> Result<Transaction, String> {
    if record.len() < 4 {
        return Err(format!("expected at least 4 columns, found {}", record.len()));
    }

    let field = |i: usize| record.get(i).unwrap_or("").trim();

    let date = parse_date(field(0)).ok_or_else(|| format!("bad date '{}'", field(0)))?;
    let note = field(5);

    Ok(Transaction {
        date,
        category: field(1).to_string(),
        description: field(2).to_string(),
        amount: Amount::parse(field(3)),
        payment: PaymentMethod::parse(field(4)),
        note: (!note.is_empty()).then(|| note.to_string()),
    })
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    ACCEPTED_DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
}
