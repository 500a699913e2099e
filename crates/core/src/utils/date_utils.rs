use chrono::{Datelike, NaiveDate};

use crate::errors::Result;

/// Parses an ISO `YYYY-MM-DD` calendar date.
///
/// `NaiveDate` is calendar-day precision by construction, so parsing
/// here cannot introduce the timezone drift a timestamp-based
/// representation would be exposed to.
pub fn parse_iso_date(raw: &str) -> Result<NaiveDate> {
    Ok(NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")?)
}

/// Number of days in the given month, leap years included.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first| first.pred_opt())
        .map(|last| last.day())
        .unwrap_or(28)
}

/// Builds a date in the given month with the day clamped to the month's
/// actual last day (due-day 31 in a 30-day month resolves to day 30).
pub fn clamp_to_month(year: i32, month: u32, day: u32) -> NaiveDate {
    let clamped = day.clamp(1, days_in_month(year, month));
    // Day is clamped into the valid range, so construction cannot fail.
    NaiveDate::from_ymd_opt(year, month, clamped)
        .unwrap_or(NaiveDate::MIN)
}

/// Moves a date to another year, clamping Feb 29 to Feb 28 when the
/// target year is not a leap year.
pub fn with_year_clamped(date: NaiveDate, year: i32) -> NaiveDate {
    clamp_to_month(year, date.month(), date.day())
}
