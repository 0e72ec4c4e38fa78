//! Period service
//!
//! Resolves the period arguments users type ("2026-01", "last", "Jan 2026")
//! into ledger periods, relative to today's date.

use chrono::{Datelike, Local, NaiveDate};

use crate::error::{LedgerError, LedgerResult};
use crate::models::Period;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Service for ledger period resolution
pub struct PeriodService {
    today: NaiveDate,
}

impl Default for PeriodService {
    fn default() -> Self {
        Self::new()
    }
}

impl PeriodService {
    /// Create a period service anchored at today's local date
    pub fn new() -> Self {
        Self::with_today(Local::now().date_naive())
    }

    /// Create a period service anchored at a fixed date
    pub fn with_today(today: NaiveDate) -> Self {
        Self { today }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn current_period(&self) -> Period {
        Period::for_date(self.today)
    }

    /// Parse a period string or get current period
    pub fn parse_or_current(&self, period_str: Option<&str>) -> LedgerResult<Period> {
        match period_str {
            Some(s) => self.parse(s),
            None => Ok(self.current_period()),
        }
    }

    /// Parse a period string
    ///
    /// Formats supported: "2026-01", "January 2026", "Jan", "current",
    /// "last", "next"
    pub fn parse(&self, s: &str) -> LedgerResult<Period> {
        let s_lower = s.trim().to_lowercase();

        if s_lower == "current" || s_lower == "now" || s_lower == "this" {
            return Ok(self.current_period());
        }

        if s_lower == "last" || s_lower == "previous" || s_lower == "prev" {
            return Ok(self.current_period().prev());
        }

        if s_lower == "next" {
            return Ok(self.current_period().next());
        }

        if let Some(period) = self.parse_month_name(&s_lower) {
            return Ok(period);
        }

        Period::parse(&s_lower)
            .map_err(|_| LedgerError::Validation(format!("Invalid period format: {}", s)))
    }

    /// Parse month names like "January", "Jan 2026"
    fn parse_month_name(&self, s: &str) -> Option<Period> {
        let (name, rest) = match s.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (s, ""),
        };

        if name.len() < 3 {
            return None;
        }

        let month = MONTH_NAMES
            .iter()
            .position(|full| full.to_lowercase().starts_with(name))? as u32
            + 1;

        let year = if rest.is_empty() {
            // A month later in the year than today means last year's
            if month > self.today.month() {
                self.today.year() - 1
            } else {
                self.today.year()
            }
        } else {
            rest.parse().ok()?
        };

        Period::new(year, month).ok()
    }

    /// Format a period in a human-friendly way ("January 2026")
    pub fn format_period_friendly(&self, period: &Period) -> String {
        let month_name = MONTH_NAMES[(period.month() - 1) as usize];
        format!("{} {}", month_name, period.year())
    }

    pub fn is_current(&self, period: &Period) -> bool {
        *period == self.current_period()
    }
}
