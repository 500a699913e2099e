use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Relative amount tolerance used when matching a transaction against a
/// recurring expense definition. Tuned empirically; override through
/// `MatchTolerance` rather than editing here.
pub const DEFAULT_TOLERANCE_RATE: Decimal = dec!(0.08);

/// Absolute tolerance floor in minor currency units, so small recurring
/// charges still match despite rounding drift.
pub const DEFAULT_TOLERANCE_FLOOR_CENTS: i64 = 200;

/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Legacy sentinel dates meaning "no fixed due date". Recognized only by
/// the ingestion boundary, which maps them to `DueRule::Unscheduled`.
pub const NO_DUE_DATE_SENTINELS: [&str; 2] = ["9999-12-31", "1900-01-01"];
