//! free-text input normalization
//!
//! the engine consumes already-parsed numbers; this module is the shell that
//! turns user-typed text ("$1,750,000.00", "11.7 %", "") into them. empty or
//! non-numeric input coerces to zero instead of failing, so a half-typed
//! form still computes.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::decimal::{Money, Rate};

/// strip currency symbols and thousands separators, then parse; zero on failure
fn clean_number(input: &str) -> Decimal {
    let cleaned: String = input
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '.' | '-'))
        .collect();
    Decimal::from_str(&cleaned).unwrap_or(Decimal::ZERO)
}

/// parse a monetary amount
pub fn parse_amount(input: &str) -> Money {
    Money::from_decimal(clean_number(input))
}

/// parse a percentage (e.g. "11.7" or "11.7%")
pub fn parse_rate_percent(input: &str) -> Rate {
    Rate::from_percent(clean_number(input))
}

/// parse a term in months: fractional input truncates toward zero, and the
/// result is clamped to a minimum of one month
pub fn parse_term_months(input: &str) -> u32 {
    let months = clean_number(input).trunc().to_u32().unwrap_or(0);
    months.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_currency_formatting_stripped() {
        assert_eq!(parse_amount("$1,750,000.00"), Money::from_major(1_750_000));
        assert_eq!(parse_amount("1050"), Money::from_major(1050));
        assert_eq!(parse_amount(" 175 "), Money::from_major(175));
    }

    #[test]
    fn test_garbage_defaults_to_zero() {
        assert_eq!(parse_amount(""), Money::ZERO);
        assert_eq!(parse_amount("abc"), Money::ZERO);
        assert_eq!(parse_amount("1.2.3"), Money::ZERO);
        assert_eq!(parse_rate_percent("n/a"), Rate::ZERO);
    }

    #[test]
    fn test_rate_percent() {
        assert_eq!(parse_rate_percent("11.7"), Rate::from_percent(dec!(11.7)));
        assert_eq!(parse_rate_percent("11.7 %"), Rate::from_percent(dec!(11.7)));
    }

    #[test]
    fn test_term_truncates_and_clamps() {
        assert_eq!(parse_term_months("120"), 120);
        assert_eq!(parse_term_months("120.9"), 120);
        assert_eq!(parse_term_months("0"), 1);
        assert_eq!(parse_term_months("0.9"), 1);
        assert_eq!(parse_term_months("-5"), 1);
        assert_eq!(parse_term_months(""), 1);
    }

    #[test]
    fn test_negative_amounts_pass_through() {
        // the engine accepts negative amounts; normalization passes them through
        assert_eq!(parse_amount("-500"), Money::from_major(-500));
    }
}
