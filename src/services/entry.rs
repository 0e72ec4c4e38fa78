//! Entry service
//!
//! Records new transactions. Before writing, the entry is checked against
//! the current state of its period; any resulting warnings are returned to
//! the caller alongside the saved row. Warnings never stop the write.

use tracing::{info, warn};

use crate::config::BudgetConfig;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{CategoryClass, Period, Transaction, Warning};
use crate::storage::TransactionStore;

use super::aggregate::{aggregate, evaluate_warnings};

/// Result of recording an entry
#[derive(Debug, Clone)]
pub struct EntryOutcome {
    pub period: Period,
    pub transaction: Transaction,
    /// Limits this entry pushed past
    pub warnings: Vec<Warning>,
    /// The category matched neither a bucket nor the income label
    pub unrecognized_category: bool,
}

/// Service for recording transactions
pub struct EntryService<'a, S: TransactionStore + ?Sized> {
    store: &'a S,
    config: &'a BudgetConfig,
}

impl<'a, S: TransactionStore + ?Sized> EntryService<'a, S> {
    pub fn new(store: &'a S, config: &'a BudgetConfig) -> Self {
        Self { store, config }
    }

    /// Warnings the entry would trigger, without writing anything
    pub fn check(&self, candidate: &Transaction) -> LedgerResult<Vec<Warning>> {
        let period = candidate.period();
        let rows = self.store.fetch_period(&period)?;
        let state = aggregate(&rows, self.config);

        Ok(evaluate_warnings(
            candidate.value(),
            &candidate.category,
            &state,
            self.config,
        ))
    }

    /// Validate, pre-check and append an entry
    pub fn record(&self, transaction: Transaction) -> LedgerResult<EntryOutcome> {
        transaction
            .validate()
            .map_err(|e| LedgerError::Validation(e.to_string()))?;

        let unrecognized_category = matches!(
            self.config.classify(&transaction.category),
            CategoryClass::Unrecognized
        );
        if unrecognized_category {
            warn!(category = %transaction.category, "recording under an unconfigured category");
        }

        let warnings = self.check(&transaction)?;
        let period = transaction.period();
        self.store.append(&period, &transaction)?;

        info!(%period, warnings = warnings.len(), "recorded entry");

        Ok(EntryOutcome {
            period,
            transaction,
            warnings,
            unrecognized_category,
        })
    }
}
