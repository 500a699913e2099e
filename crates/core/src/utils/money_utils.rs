//! Money helpers: minor currency units to display values.

use rust_decimal::Decimal;

use crate::constants::DISPLAY_DECIMAL_PRECISION;

/// Converts integer minor units into a two-decimal amount.
pub fn cents_to_decimal(cents: i64) -> Decimal {
    Decimal::new(cents, DISPLAY_DECIMAL_PRECISION)
}

/// Formats minor units using the pt-BR convention: `R$ 1.234,56`,
/// negatives as `-R$ 1.234,56`.
pub fn format_brl(cents: i64) -> String {
    let negative = cents < 0;
    let abs = cents.unsigned_abs();
    let whole = abs / 100;
    let fraction = abs % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{}R$ {},{:02}", sign, grouped, fraction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_cents_to_decimal() {
        assert_eq!(cents_to_decimal(123_456), dec!(1234.56));
        assert_eq!(cents_to_decimal(0), dec!(0.00));
        assert_eq!(cents_to_decimal(-250), dec!(-2.50));
    }

    #[test]
    fn test_format_brl_grouping() {
        assert_eq!(format_brl(0), "R$ 0,00");
        assert_eq!(format_brl(5), "R$ 0,05");
        assert_eq!(format_brl(123_456), "R$ 1.234,56");
        assert_eq!(format_brl(100_000_000), "R$ 1.000.000,00");
    }

    #[test]
    fn test_format_brl_negative() {
        assert_eq!(format_brl(-123_456), "-R$ 1.234,56");
    }
}
