//! Core data models for pocket-ledger
//!
//! This module contains the data structures that represent the ledger
//! domain: amounts, periods, payment methods, transactions and the
//! aggregate figures derived from them.

pub mod amount;
pub mod budget;
pub mod category;
pub mod money;
pub mod payment;
pub mod period;
pub mod transaction;

pub use amount::Amount;
pub use budget::{AggregateResult, CategorySummary, Warning};
pub use category::CategoryClass;
pub use money::Money;
pub use payment::PaymentMethod;
pub use period::Period;
pub use transaction::{Transaction, TransactionValidationError};
