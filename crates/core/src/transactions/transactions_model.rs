//! Transaction domain models.
//!
//! Transactions are consumed, not owned: the core receives a period's
//! worth of them from the caller and never mutates or persists them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::{Result, ValidationError};
use crate::utils::date_utils::parse_iso_date;

/// Income or expense; only expenses participate in fixed/variable
/// classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    Income,
    Expense,
}

impl FromStr for TransactionType {
    type Err = ValidationError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(TransactionType::Income),
            "expense" => Ok(TransactionType::Expense),
            other => Err(ValidationError::InvalidInput(format!(
                "unknown transaction type '{}'",
                other
            ))),
        }
    }
}

/// A single posted transaction within a reporting period.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub amount_cents: i64,
    pub description: String,
    pub date: NaiveDate,
}

/// Raw transaction record from the persistence layer, before validation.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct RawTransactionRecord {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub amount_cents: Option<i64>,
    pub description: Option<String>,
    pub date: Option<String>,
}

impl RawTransactionRecord {
    /// Normalizes the raw record into the strict domain shape.
    ///
    /// Missing description defaults to empty and missing amount to zero
    /// (soft-fail: such records simply never match a recurring
    /// definition). The type and date are load-bearing and are rejected
    /// when missing or malformed, as are negative amounts — classification
    /// totals are only guaranteed non-negative over non-negative inputs.
    pub fn normalize(self) -> Result<Transaction> {
        let kind = self
            .kind
            .ok_or_else(|| ValidationError::MissingField("type".to_string()))?
            .parse::<TransactionType>()?;

        let date = self
            .date
            .ok_or_else(|| ValidationError::MissingField("date".to_string()))?;

        let amount_cents = self.amount_cents.unwrap_or(0);
        if amount_cents < 0 {
            return Err(ValidationError::InvalidInput(format!(
                "transaction has negative amount {}",
                amount_cents
            ))
            .into());
        }

        Ok(Transaction {
            kind,
            amount_cents,
            description: self.description.unwrap_or_default(),
            date: parse_iso_date(&date)?,
        })
    }
}
