//! Recurring expense domain models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::constants::NO_DUE_DATE_SENTINELS;
use crate::errors::{Result, ValidationError};
use crate::utils::date_utils::parse_iso_date;

/// How often a recurring expense repeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecurrenceType {
    Monthly,
    Weekly,
    Biweekly,
    Annual,
    Custom,
}

impl FromStr for RecurrenceType {
    type Err = ValidationError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "monthly" => Ok(RecurrenceType::Monthly),
            "weekly" => Ok(RecurrenceType::Weekly),
            "biweekly" => Ok(RecurrenceType::Biweekly),
            "annual" => Ok(RecurrenceType::Annual),
            "custom" => Ok(RecurrenceType::Custom),
            other => Err(ValidationError::InvalidInput(format!(
                "unknown recurrence type '{}'",
                other
            ))),
        }
    }
}

/// Whether a recurring expense has a fixed due date.
///
/// The persisted records historically encoded "no fixed due date" as the
/// sentinel dates `9999-12-31` and `1900-01-01`; those are translated to
/// `Unscheduled` when records are normalized, so nothing past the
/// ingestion boundary compares against magic dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DueRule {
    /// Anchored to a concrete start date; occurrences derive from it.
    Scheduled(NaiveDate),
    /// Payment timing decided at payment time; no occurrences.
    Unscheduled,
}

impl DueRule {
    /// Returns the anchor date for scheduled rules.
    pub fn anchor(&self) -> Option<NaiveDate> {
        match self {
            DueRule::Scheduled(date) => Some(*date),
            DueRule::Unscheduled => None,
        }
    }

    pub fn is_scheduled(&self) -> bool {
        matches!(self, DueRule::Scheduled(_))
    }
}

/// Where a scheduled expense stands relative to a reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DueStatus {
    Overdue,
    DueToday,
    Upcoming,
}

/// Domain model describing a periodically recurring cost (rent,
/// subscription, utility).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecurringExpense {
    pub id: String,
    /// Display label, also the fuzzy-match key for classification.
    pub description: String,
    /// Expected charge in minor currency units. `0` means the amount is
    /// variable and unknown until paid.
    pub amount_cents: i64,
    pub recurrence_type: RecurrenceType,
    /// Step size in days; only meaningful for `RecurrenceType::Custom`.
    pub interval_days: Option<i64>,
    pub due_rule: DueRule,
    /// Once a computed occurrence would exceed this date the series has
    /// ended.
    pub end_date: Option<NaiveDate>,
}

/// Raw recurring expense record as it arrives from the persistence
/// layer, before validation. All fields are optional; `normalize`
/// converts it into a strict [`RecurringExpense`] or rejects it.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct RawRecurringRecord {
    pub id: Option<String>,
    pub description: Option<String>,
    pub amount_cents: Option<i64>,
    pub recurrence_type: Option<String>,
    pub interval_days: Option<i64>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl RawRecurringRecord {
    /// Normalizes the raw record into the strict domain shape.
    ///
    /// Missing description defaults to empty, missing amount to zero
    /// (both simply fail to match during classification). Sentinel or
    /// absent start dates become `DueRule::Unscheduled`. A missing id or
    /// recurrence type, a negative amount, or an unparseable date is
    /// rejected.
    pub fn normalize(self) -> Result<RecurringExpense> {
        let id = self
            .id
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ValidationError::MissingField("id".to_string()))?;

        let recurrence_type = self
            .recurrence_type
            .ok_or_else(|| ValidationError::MissingField("recurrenceType".to_string()))?
            .parse::<RecurrenceType>()?;

        let amount_cents = self.amount_cents.unwrap_or(0);
        if amount_cents < 0 {
            return Err(ValidationError::InvalidInput(format!(
                "recurring expense '{}' has negative amount {}",
                id, amount_cents
            ))
            .into());
        }

        let due_rule = match self.start_date.as_deref() {
            None => DueRule::Unscheduled,
            Some(raw) if NO_DUE_DATE_SENTINELS.contains(&raw) => DueRule::Unscheduled,
            Some(raw) => DueRule::Scheduled(parse_iso_date(raw)?),
        };

        let end_date = match self.end_date.as_deref() {
            None => None,
            Some(raw) => Some(parse_iso_date(raw)?),
        };

        Ok(RecurringExpense {
            id,
            description: self.description.unwrap_or_default(),
            amount_cents,
            recurrence_type,
            interval_days: self.interval_days,
            due_rule,
            end_date,
        })
    }
}
