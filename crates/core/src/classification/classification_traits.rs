use crate::classification::classification_model::ClassificationResult;
use crate::recurring::RecurringExpense;
use crate::transactions::Transaction;

/// Trait for fixed/variable expense classification.
///
/// Implementations are pure: no I/O, no interior mutability, safe to
/// call from any number of threads at once.
pub trait ExpenseClassifierTrait: Send + Sync {
    /// Partitions the period's expense transactions into fixed and
    /// variable totals.
    fn classify(
        &self,
        transactions: &[Transaction],
        definitions: &[RecurringExpense],
    ) -> ClassificationResult;

    /// Whether a single transaction is attributable to any of the given
    /// recurring definitions.
    fn matches_recurring(
        &self,
        transaction: &Transaction,
        definitions: &[RecurringExpense],
    ) -> bool;
}
