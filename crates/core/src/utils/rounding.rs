//! Rounding helpers shared by the aggregate engines.
//!
//! All user-visible percentages and amounts round half up
//! (`floor(x + 0.5)`), so `2.5 -> 3` and `-2.5 -> -2`.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Rounds a float half up to the nearest integer.
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// Rounds a float half up to one decimal place.
pub fn round_to_tenth(value: f64) -> f64 {
    round_half_up(value * 10.0) as f64 / 10.0
}

/// Rounds a float half up to two decimal places.
pub fn round_to_hundredth(value: f64) -> f64 {
    round_half_up(value * 100.0) as f64 / 100.0
}

/// Rounds a decimal amount half up to a whole number.
pub fn round_amount(value: Decimal) -> Decimal {
    (value + dec!(0.5)).floor()
}

/// `round(100 * part / whole)`, or 0 when `whole` is 0.
pub fn percent_of(part: u32, whole: u32) -> u32 {
    if whole == 0 {
        return 0;
    }
    round_half_up(part as f64 * 100.0 / whole as f64).max(0) as u32
}

/// `round(100 * part / whole)` for amounts, or 0 when `whole` is zero.
pub fn amount_percent(part: Decimal, whole: Decimal) -> i64 {
    if whole.is_zero() {
        return 0;
    }
    let ratio = round_amount(part * dec!(100) / whole);
    ratio.to_i64().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_up_matches_js_math_round() {
        assert_eq!(round_half_up(2.5), 3);
        assert_eq!(round_half_up(2.49), 2);
        assert_eq!(round_half_up(-2.5), -2);
        assert_eq!(round_half_up(-2.51), -3);
    }

    #[test]
    fn test_round_to_tenth() {
        assert_eq!(round_to_tenth(1.25), 1.3);
        assert_eq!(round_to_tenth(2.0 / 3.0), 0.7);
    }

    #[test]
    fn test_round_amount() {
        assert_eq!(round_amount(dec!(83.333)), dec!(83));
        assert_eq!(round_amount(dec!(-41.5)), dec!(-41));
        assert_eq!(round_amount(dec!(10.5)), dec!(11));
    }

    #[test]
    fn test_percent_of() {
        assert_eq!(percent_of(0, 0), 0);
        assert_eq!(percent_of(1, 3), 33);
        assert_eq!(percent_of(2, 3), 67);
        assert_eq!(percent_of(7, 7), 100);
    }

    #[test]
    fn test_amount_percent() {
        assert_eq!(amount_percent(dec!(1000), dec!(3000)), 33);
        assert_eq!(amount_percent(dec!(60), dec!(100)), 60);
        assert_eq!(amount_percent(dec!(5), Decimal::ZERO), 0);
        assert_eq!(amount_percent(dec!(4500), dec!(3000)), 150);
    }
}
