//! Next-occurrence calculation for recurring expenses.
//!
//! Pure calendar arithmetic: given a definition and a reference date
//! (typically "today"), compute the next due date, or `None` once the
//! series has ended. Monthly recurrences deliberately resolve to the
//! reference month's due date even when it has already passed, so
//! callers can distinguish overdue-this-month from upcoming; callers
//! needing a strictly future occurrence must roll forward themselves.

use chrono::{Datelike, Duration, NaiveDate};
use log::warn;

use crate::utils::date_utils::{clamp_to_month, with_year_clamped};

use super::recurring_model::{DueRule, DueStatus, RecurrenceType, RecurringExpense};

/// Computes the next due occurrence of a recurring expense at or around
/// the reference date.
///
/// Returns `None` for unscheduled definitions and for series whose
/// computed occurrence would exceed their end date.
pub fn next_occurrence(expense: &RecurringExpense, reference: NaiveDate) -> Option<NaiveDate> {
    let anchor = match expense.due_rule {
        DueRule::Scheduled(date) => date,
        DueRule::Unscheduled => return None,
    };

    let candidate = match expense.recurrence_type {
        RecurrenceType::Monthly => monthly_candidate(anchor, reference),
        RecurrenceType::Weekly => stepped_candidate(anchor, reference, 7),
        RecurrenceType::Biweekly => stepped_candidate(anchor, reference, 14),
        RecurrenceType::Annual => annual_candidate(anchor, reference),
        RecurrenceType::Custom => match expense.interval_days {
            Some(step) if step >= 1 => stepped_candidate(anchor, reference, step),
            _ => {
                // Defined edge case: without a positive interval there is
                // nothing to step by, so the anchor stands. Logged as a
                // data-quality signal for the upstream collection.
                warn!(
                    "recurring expense '{}' is custom without a positive intervalDays; \
                     keeping anchor date",
                    expense.id
                );
                anchor
            }
        },
    };

    // End-of-series gate, applied uniformly after the type-specific
    // candidate.
    match expense.end_date {
        Some(end) if candidate > end => None,
        _ => Some(candidate),
    }
}

/// Classifies the next occurrence relative to the reference date.
///
/// `None` when the definition is unscheduled or its series has ended.
pub fn due_status(expense: &RecurringExpense, reference: NaiveDate) -> Option<DueStatus> {
    next_occurrence(expense, reference).map(|due| status_for(due, reference))
}

/// Status of a concrete due date relative to the reference date.
pub fn status_for(due: NaiveDate, reference: NaiveDate) -> DueStatus {
    if due < reference {
        DueStatus::Overdue
    } else if due == reference {
        DueStatus::DueToday
    } else {
        DueStatus::Upcoming
    }
}

/// Monthly: the anchor's day-of-month, materialized in the reference
/// month and clamped to its actual length. While the reference year-month
/// is at or before the anchor's, the anchor itself is the occurrence, so
/// a freshly created expense is already due within its creation month.
fn monthly_candidate(anchor: NaiveDate, reference: NaiveDate) -> NaiveDate {
    if (reference.year(), reference.month()) <= (anchor.year(), anchor.month()) {
        return anchor;
    }
    clamp_to_month(reference.year(), reference.month(), anchor.day())
}

/// Fixed-interval stepping from the anchor until the candidate reaches
/// the reference date. Closed-form rather than a loop; `step_days >= 1`.
fn stepped_candidate(anchor: NaiveDate, reference: NaiveDate, step_days: i64) -> NaiveDate {
    if reference <= anchor {
        return anchor;
    }
    let elapsed = (reference - anchor).num_days();
    let steps = elapsed.div_euclid(step_days)
        + if elapsed.rem_euclid(step_days) == 0 { 0 } else { 1 };
    anchor + Duration::days(steps * step_days)
}

/// Annual: one calendar year at a time from the anchor. Feb 29 anchors
/// clamp to Feb 28 in non-leap target years.
fn annual_candidate(anchor: NaiveDate, reference: NaiveDate) -> NaiveDate {
    if reference <= anchor {
        return anchor;
    }
    let candidate = with_year_clamped(anchor, reference.year());
    if candidate >= reference {
        candidate
    } else {
        with_year_clamped(anchor, reference.year() + 1)
    }
}
