//! Recurring expenses module - domain models and occurrence calculation.

mod occurrence_service;
mod recurring_model;



pub use occurrence_service::{due_status, next_occurrence, status_for};
pub use recurring_model::{
    DueRule, DueStatus, RawRecurringRecord, RecurrenceType, RecurringExpense,
};
