//! Aggregation for reporting screens, payable summaries, and dashboard
//! widgets. All inputs arrive as in-memory slices fetched by the
//! caller; every method is a pure computation over them.

use std::sync::Arc;

use chrono::NaiveDate;
use log::debug;

use crate::classification::ExpenseClassifierTrait;
use crate::recurring::{next_occurrence, status_for, DueStatus, RecurringExpense};
use crate::transactions::{Transaction, TransactionType};

use super::reports_model::{
    DashboardConfig, PayableEntry, PayableSummary, PeriodSummary, WidgetKind, WidgetValue,
};

pub struct ReportsService {
    classifier: Arc<dyn ExpenseClassifierTrait>,
}

impl ReportsService {
    pub fn new(classifier: Arc<dyn ExpenseClassifierTrait>) -> Self {
        ReportsService { classifier }
    }

    /// DRE-style totals for a period: income, expenses split into fixed
    /// and variable, and the net result.
    pub fn period_summary(
        &self,
        transactions: &[Transaction],
        definitions: &[RecurringExpense],
    ) -> PeriodSummary {
        let mut income: i64 = 0;
        let mut expense: i64 = 0;
        for transaction in transactions {
            match transaction.kind {
                TransactionType::Income => income += transaction.amount_cents,
                TransactionType::Expense => expense += transaction.amount_cents,
            }
        }

        let classification = self.classifier.classify(transactions, definitions);

        PeriodSummary {
            income_cents: income,
            expense_cents: expense,
            fixed_cents: classification.fixed_cents,
            variable_cents: classification.variable_cents,
            net_result_cents: income - expense,
        }
    }

    /// Due-date overview of the scheduled definitions at a reference
    /// date, sorted by due date. Unscheduled definitions and ended
    /// series are omitted.
    pub fn payable_summary(
        &self,
        definitions: &[RecurringExpense],
        reference: NaiveDate,
    ) -> PayableSummary {
        let mut summary = PayableSummary::default();

        for definition in definitions {
            let due_date = match next_occurrence(definition, reference) {
                Some(date) => date,
                None => continue,
            };
            let status = status_for(due_date, reference);

            match status {
                DueStatus::Overdue => summary.overdue_cents += definition.amount_cents,
                DueStatus::DueToday => summary.due_today_cents += definition.amount_cents,
                DueStatus::Upcoming => summary.upcoming_cents += definition.amount_cents,
            }

            summary.entries.push(PayableEntry {
                id: definition.id.clone(),
                description: definition.description.clone(),
                amount_cents: definition.amount_cents,
                due_date,
                status,
            });
        }

        summary.entries.sort_by(|a, b| a.due_date.cmp(&b.due_date));
        debug!(
            "payable summary at {}: {} entries, overdue={} due_today={} upcoming={}",
            reference,
            summary.entries.len(),
            summary.overdue_cents,
            summary.due_today_cents,
            summary.upcoming_cents
        );
        summary
    }

    /// Evaluates each configured widget against the period, preserving
    /// the configured order.
    pub fn dashboard_values(
        &self,
        config: &DashboardConfig,
        transactions: &[Transaction],
        definitions: &[RecurringExpense],
    ) -> Vec<WidgetValue> {
        let summary = self.period_summary(transactions, definitions);

        config
            .widgets
            .iter()
            .map(|kind| {
                let amount_cents = match kind {
                    WidgetKind::PeriodIncome => summary.income_cents,
                    WidgetKind::PeriodExpense => summary.expense_cents,
                    WidgetKind::FixedExpenses => summary.fixed_cents,
                    WidgetKind::VariableExpenses => summary.variable_cents,
                    WidgetKind::NetResult => summary.net_result_cents,
                };
                WidgetValue {
                    kind: *kind,
                    amount_cents,
                }
            })
            .collect()
    }
}
