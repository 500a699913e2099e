//! Classification domain models.

use num_traits::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_TOLERANCE_FLOOR_CENTS, DEFAULT_TOLERANCE_RATE};

/// Partition of a period's expense total into amounts attributed to
/// recurring definitions (fixed) and the remainder (variable).
///
/// By construction `fixed_cents + variable_cents` equals the period's
/// expense total, and both are non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    pub fixed_cents: i64,
    pub variable_cents: i64,
}

impl ClassificationResult {
    pub fn total_cents(&self) -> i64 {
        self.fixed_cents + self.variable_cents
    }
}

/// Allowed difference between a recurring definition's expected amount
/// and an observed transaction amount for them to be considered the same
/// obligation.
///
/// The default rate and floor were tuned empirically against live data;
/// they are parameters here rather than magic numbers so callers can
/// recalibrate without touching the matching code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchTolerance {
    /// Relative tolerance applied to the expected amount.
    pub rate: Decimal,
    /// Absolute minimum tolerance in minor units.
    pub floor_cents: i64,
}

impl Default for MatchTolerance {
    fn default() -> Self {
        MatchTolerance {
            rate: DEFAULT_TOLERANCE_RATE,
            floor_cents: DEFAULT_TOLERANCE_FLOOR_CENTS,
        }
    }
}

impl MatchTolerance {
    /// Tolerance in minor units for a given expected amount:
    /// `max(round(expected * rate), floor)`.
    pub fn for_amount(&self, expected_cents: i64) -> i64 {
        let relative = (Decimal::from(expected_cents) * self.rate)
            .round()
            .to_i64()
            .unwrap_or(0);
        relative.max(self.floor_cents)
    }
}
