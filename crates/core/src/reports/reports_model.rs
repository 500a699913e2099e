//! Reporting domain models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::recurring::DueStatus;

/// Totals for a reporting period, DRE-style: revenue, expenses broken
/// into fixed and variable, and the bottom-line result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PeriodSummary {
    pub income_cents: i64,
    pub expense_cents: i64,
    pub fixed_cents: i64,
    pub variable_cents: i64,
    /// Income minus expenses; negative when the period ran at a loss.
    pub net_result_cents: i64,
}

/// One scheduled recurring expense with its next due date, for payable
/// summaries and alerting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayableEntry {
    pub id: String,
    pub description: String,
    pub amount_cents: i64,
    pub due_date: NaiveDate,
    pub status: DueStatus,
}

/// Payable overview at a reference date. Entries are sorted by due
/// date; unscheduled and ended definitions are omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PayableSummary {
    pub entries: Vec<PayableEntry>,
    pub overdue_cents: i64,
    pub due_today_cents: i64,
    pub upcoming_cents: i64,
}

/// Dashboard widgets the core can evaluate to a monetary value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WidgetKind {
    PeriodIncome,
    PeriodExpense,
    FixedExpenses,
    VariableExpenses,
    NetResult,
}

/// Standard widget set shown on a fresh dashboard. Kept as an explicit
/// constant so callers pass configuration in rather than reaching for a
/// mutable global.
pub const DEFAULT_DASHBOARD_WIDGETS: [WidgetKind; 5] = [
    WidgetKind::PeriodIncome,
    WidgetKind::PeriodExpense,
    WidgetKind::FixedExpenses,
    WidgetKind::VariableExpenses,
    WidgetKind::NetResult,
];

/// Which widgets a dashboard renders, in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardConfig {
    pub widgets: Vec<WidgetKind>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        DashboardConfig {
            widgets: DEFAULT_DASHBOARD_WIDGETS.to_vec(),
        }
    }
}

/// A widget evaluated against a period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetValue {
    pub kind: WidgetKind,
    pub amount_cents: i64,
}
