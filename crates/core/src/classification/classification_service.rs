//! Fixed/variable expense classification.
//!
//! A single deterministic pass over the period's transactions. Each
//! expense is tested against the recurring definitions in order and the
//! first match wins; there is no best-match ranking. The variable total
//! is derived once at the end as `total - fixed` (floored at zero)
//! rather than accumulated per transaction, so a transaction that could
//! match several definitions is still only counted once.

use log::debug;

use crate::recurring::{DueRule, RecurringExpense};
use crate::transactions::{Transaction, TransactionType};

use super::classification_model::{ClassificationResult, MatchTolerance};
use super::classification_traits::ExpenseClassifierTrait;

pub struct ExpenseClassifier {
    tolerance: MatchTolerance,
}

impl ExpenseClassifier {
    pub fn new(tolerance: MatchTolerance) -> Self {
        ExpenseClassifier { tolerance }
    }

    /// Case-insensitive, whitespace-trimmed bidirectional containment.
    /// Deliberately loose, to tolerate user-entered variants like
    /// "Aluguel" vs "Aluguel - Loja Centro". An empty side never
    /// matches.
    fn descriptions_overlap(a: &str, b: &str) -> bool {
        let a = a.trim().to_lowercase();
        let b = b.trim().to_lowercase();
        if a.is_empty() || b.is_empty() {
            return false;
        }
        a.contains(&b) || b.contains(&a)
    }

    fn matches_definition(&self, transaction: &Transaction, definition: &RecurringExpense) -> bool {
        // Unscheduled definitions have no due date to anchor a period to
        // and never participate in matching.
        let anchor = match definition.due_rule {
            DueRule::Scheduled(date) => date,
            DueRule::Unscheduled => return false,
        };

        if transaction.date < anchor {
            return false;
        }
        if let Some(end) = definition.end_date {
            if transaction.date > end {
                return false;
            }
        }

        if !Self::descriptions_overlap(&transaction.description, &definition.description) {
            return false;
        }

        let tolerance = self.tolerance.for_amount(definition.amount_cents);
        (transaction.amount_cents - definition.amount_cents).abs() <= tolerance
    }
}

impl Default for ExpenseClassifier {
    fn default() -> Self {
        ExpenseClassifier::new(MatchTolerance::default())
    }
}

impl ExpenseClassifierTrait for ExpenseClassifier {
    fn classify(
        &self,
        transactions: &[Transaction],
        definitions: &[RecurringExpense],
    ) -> ClassificationResult {
        let mut total: i64 = 0;
        let mut fixed: i64 = 0;

        for transaction in transactions
            .iter()
            .filter(|t| t.kind == TransactionType::Expense)
        {
            total += transaction.amount_cents;
            if self.matches_recurring(transaction, definitions) {
                fixed += transaction.amount_cents;
            }
        }

        let variable = (total - fixed).max(0);
        debug!(
            "classified {} transactions against {} definitions: fixed={} variable={}",
            transactions.len(),
            definitions.len(),
            fixed,
            variable
        );

        ClassificationResult {
            fixed_cents: fixed,
            variable_cents: variable,
        }
    }

    fn matches_recurring(
        &self,
        transaction: &Transaction,
        definitions: &[RecurringExpense],
    ) -> bool {
        definitions
            .iter()
            .any(|definition| self.matches_definition(transaction, definition))
    }
}
