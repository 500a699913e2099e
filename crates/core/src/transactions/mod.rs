//! Transactions module - domain models consumed by classification and
//! reporting.

mod transactions_model;


pub use transactions_model::{RawTransactionRecord, Transaction, TransactionType};
