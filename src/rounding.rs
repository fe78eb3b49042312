//! Decimal-exact half-up rounding of `f64` results.
//!
//! Values are converted through their shortest decimal representation into a
//! `rust_decimal::Decimal`, rounded there, and parsed back. This keeps binary
//! floating-point noise such as `0.30000000000000004` out of the result.

use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Number of fractional digits every engine result is rounded to.
pub const ROUND_PLACES: u32 = 15;

/// Rounds `value` to `places` fractional decimal digits, ties away from zero.
///
/// Non-finite values are returned unchanged, as are magnitudes beyond what
/// `Decimal` can hold (those are integral in `f64` anyway). A zero result is
/// always positive zero.
///
/// # Examples
///
/// ```
/// use calculator_engine::rounding::round_half_up;
///
/// assert_eq!(round_half_up(0.1 + 0.2, 15), 0.3);
/// assert_eq!(round_half_up(2.5, 0), 3.0);
/// assert_eq!(round_half_up(-2.5, 0), -3.0);
/// ```
pub fn round_half_up(value: f64, places: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }

    let exact = match to_decimal(value) {
        Some(d) => d,
        None => return value,
    };

    let rounded = exact.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);
    match rounded.to_string().parse::<f64>() {
        Ok(r) if r == 0.0 => 0.0,
        Ok(r) => r,
        Err(_) => value,
    }
}

/// Largest scale a `Decimal` can carry.
const MAX_SCALE: usize = 28;

/// Converts via the shortest round-trip representation.
///
/// Digits past [`MAX_SCALE`] are cut off rather than rounded, so they can
/// never tip a later half-up decision.
fn to_decimal(value: f64) -> Option<Decimal> {
    let text = value.to_string();
    Decimal::from_str(truncate_fraction(&text, MAX_SCALE)).ok()
}

fn truncate_fraction(text: &str, places: usize) -> &str {
    match text.find('.') {
        Some(dot) if text.len() - dot - 1 > places => &text[..dot + 1 + places],
        _ => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeating_fraction_rounds_to_fifteen_places() {
        assert_eq!(round_half_up(1.0 / 3.0, ROUND_PLACES), 0.333333333333333);
        assert_eq!(round_half_up(2.0 / 3.0, ROUND_PLACES), 0.666666666666667);
    }

    #[test]
    fn test_binary_noise_is_removed() {
        assert_eq!(round_half_up(0.1 + 0.2, ROUND_PLACES), 0.3);
        assert_eq!(round_half_up(1.1 * 1.1, ROUND_PLACES), 1.21);
    }

    #[test]
    fn test_midpoint_rounds_away_from_zero() {
        assert_eq!(round_half_up(5e-16, ROUND_PLACES), 1e-15);
        assert_eq!(round_half_up(-5e-16, ROUND_PLACES), -1e-15);
        assert_eq!(round_half_up(0.5, 0), 1.0);
        assert_eq!(round_half_up(-0.5, 0), -1.0);
        assert_eq!(round_half_up(1.25, 1), 1.3);
    }

    #[test]
    fn test_tiny_values() {
        assert_eq!(round_half_up(1e-20, ROUND_PLACES), 0.0);
        assert_eq!(round_half_up(1.2345678901234567e-14, ROUND_PLACES), 1.2e-14);
    }

    #[test]
    fn test_tiny_value_below_midpoint_rounds_to_zero() {
        assert_eq!(round_half_up(4.999999999999999e-16, ROUND_PLACES), 0.0);
        assert_eq!(round_half_up(-4.999999999999999e-16, ROUND_PLACES), 0.0);
        assert_eq!(round_half_up(5.000000000000001e-16, ROUND_PLACES), 1e-15);
    }

    #[test]
    fn test_truncate_fraction() {
        assert_eq!(truncate_fraction("0.123456", 3), "0.123");
        assert_eq!(truncate_fraction("0.12", 3), "0.12");
        assert_eq!(truncate_fraction("42", 3), "42");
    }

    #[test]
    fn test_zero_is_positive() {
        let r = round_half_up(-1e-20, ROUND_PLACES);
        assert_eq!(r, 0.0);
        assert!(r.is_sign_positive());
        assert!(round_half_up(-0.0, ROUND_PLACES).is_sign_positive());
    }

    #[test]
    fn test_large_and_non_finite_values_pass_through() {
        assert_eq!(round_half_up(1e300, ROUND_PLACES), 1e300);
        assert_eq!(round_half_up(123456789.0, ROUND_PLACES), 123456789.0);
        assert_eq!(round_half_up(f64::INFINITY, ROUND_PLACES), f64::INFINITY);
        assert!(round_half_up(f64::NAN, ROUND_PLACES).is_nan());
    }
}
