// ============================================================================
// Precision Estimation
// Magnitude estimates and working scales for the function engine
// ============================================================================
//
// Floats appear here only as estimates: they size working precisions and
// decide short-circuits, never values.

use crate::numeric::{pow10, FixedDecimal, NumericError, NumericResult};
use crate::rounding::{pick_value, RoundingMode, ZeroRoundingMode};
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, ToPrimitive, Zero};
use std::f64::consts::LOG10_2;

/// Extra digits carried past the caller's precision
pub(crate) const GUARD_DIGITS: u32 = 10;

/// Results with more integer digits than this are rejected
pub(crate) const MAX_RESULT_DIGITS: f64 = 1.0e8;

/// Integer powers are evaluated exactly while the exact result stays this small
pub(crate) const EXACT_POWER_DIGITS: f64 = 20_000.0;

/// Number of decimal digits of `|n|`; zero has one digit.
pub(crate) fn decimal_digits(n: &BigInt) -> u32 {
    if n.is_zero() {
        return 1;
    }
    let bits = n.bits();
    let estimate = (bits as f64 * LOG10_2) as u32;
    if n.abs() >= pow10(estimate) {
        estimate + 1
    } else {
        estimate.max(1)
    }
}

/// Estimate of `log10 |x|` for non-zero `x`.
pub(crate) fn log10_estimate(x: &FixedDecimal) -> f64 {
    let magnitude = x.significand().abs();
    let dropped = decimal_digits(&magnitude).saturating_sub(17);
    let leading = (magnitude / pow10(dropped)).to_f64().unwrap_or(f64::MAX);
    leading.log10() + f64::from(dropped) - f64::from(x.scale())
}

/// Number of halvings `m` that keeps a series argument below `2^-m`.
///
/// Balances the square-root or squaring passes against the number of
/// series terms for `digits` working digits.
pub(crate) fn reduction_bits(digits: u32) -> u32 {
    ((3.32 * f64::from(digits)).sqrt() / 2.0).ceil().max(2.0) as u32
}

/// Whole digits needed to cover a non-negative estimate.
pub(crate) fn digits_for(estimate: f64) -> u32 {
    if estimate.is_nan() || estimate <= 0.0 {
        0
    } else {
        estimate.ceil() as u32
    }
}

/// Working scale: `scale` plus the guard digits plus `extra`.
pub(crate) fn working_scale(scale: u32, extra: f64) -> NumericResult<u32> {
    scale
        .checked_add(GUARD_DIGITS)
        .and_then(|s| s.checked_add(digits_for(extra)))
        .ok_or(NumericError::Overflow)
}

/// Scale at which intermediates are computed before the final rounding.
#[inline]
pub(crate) fn guarded(scale: u32) -> NumericResult<u32> {
    working_scale(scale, 0.0)
}

/// Reject results whose integer part would be unreasonably large.
pub(crate) fn check_magnitude(log10_magnitude: f64) -> NumericResult<()> {
    if log10_magnitude.is_nan() || log10_magnitude > MAX_RESULT_DIGITS {
        Err(NumericError::Overflow)
    } else {
        Ok(())
    }
}

/// True when a positive result is below `10^-(scale + 2)`.
pub(crate) fn is_negligible(log10_magnitude: f64, scale: u32) -> bool {
    log10_magnitude < -(f64::from(scale) + 2.0)
}

/// Round a positive value far below one unit at `scale`.
///
/// Every such value sits in the same place relative to `0`, `1` and each
/// mean of them, so one representative decides for all.
pub(crate) fn round_tiny_positive(scale: u32, mode: RoundingMode) -> NumericResult<FixedDecimal> {
    let tiny = BigRational::new(BigInt::from(1), BigInt::from(100));
    let significand = pick_value(
        &tiny,
        &BigInt::zero(),
        &BigInt::from(1),
        mode,
        ZeroRoundingMode::Unnecessary,
    )?;
    Ok(FixedDecimal::new(significand, scale))
}

/// Significand of `x` at `scale`, truncated toward zero.
pub(crate) fn fixed_at(x: &FixedDecimal, scale: u32) -> BigInt {
    if scale >= x.scale() {
        x.significand() * pow10(scale - x.scale())
    } else {
        x.significand() / pow10(x.scale() - scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal_digits() {
        assert_eq!(decimal_digits(&BigInt::from(0)), 1);
        assert_eq!(decimal_digits(&BigInt::from(9)), 1);
        assert_eq!(decimal_digits(&BigInt::from(10)), 2);
        assert_eq!(decimal_digits(&BigInt::from(999)), 3);
        assert_eq!(decimal_digits(&BigInt::from(1000)), 4);
        assert_eq!(decimal_digits(&BigInt::from(-12345)), 5);
        assert_eq!(decimal_digits(&pow10(300)), 301);
        assert_eq!(decimal_digits(&(pow10(300) - 1)), 300);
    }

    #[test]
    fn test_log10_estimate() {
        let x = FixedDecimal::new(12345, 2);
        assert!((log10_estimate(&x) - 123.45f64.log10()).abs() < 1e-12);
        let tiny = FixedDecimal::new(1, 50);
        assert!((log10_estimate(&tiny) + 50.0).abs() < 1e-12);
        let huge = FixedDecimal::new(pow10(400), 0);
        assert!((log10_estimate(&huge) - 400.0).abs() < 1e-9);
    }

    #[test]
    fn test_working_scale() {
        assert_eq!(guarded(20), Ok(30));
        assert_eq!(working_scale(20, 3.2), Ok(34));
        assert_eq!(working_scale(20, -5.0), Ok(30));
        assert_eq!(guarded(u32::MAX), Err(NumericError::Overflow));
    }

    #[test]
    fn test_round_tiny_positive() {
        let r = |m| round_tiny_positive(3, m).map(|x| x.to_string());
        assert_eq!(r(RoundingMode::UP), Ok("0.001".to_string()));
        assert_eq!(r(RoundingMode::CEILING), Ok("0.001".to_string()));
        assert_eq!(r(RoundingMode::DOWN), Ok("0.000".to_string()));
        assert_eq!(r(RoundingMode::HALF_UP), Ok("0.000".to_string()));
        // The geometric mean of 0 and 1 is 0.
        assert_eq!(r(RoundingMode::GEOMETRIC_EVEN), Ok("0.001".to_string()));
        assert_eq!(r(RoundingMode::UNNECESSARY), Err(NumericError::PrecisionLoss));
    }

    #[test]
    fn test_magnitude_checks() {
        assert!(check_magnitude(1.0e9).is_err());
        assert!(check_magnitude(f64::NAN).is_err());
        assert!(check_magnitude(-1.0e9).is_ok());
        assert!(is_negligible(-13.0, 10));
        assert!(!is_negligible(-11.0, 10));
    }

    #[test]
    fn test_fixed_at() {
        let x = FixedDecimal::new(-12345, 3);
        assert_eq!(fixed_at(&x, 5), BigInt::from(-1234500));
        assert_eq!(fixed_at(&x, 1), BigInt::from(-123));
    }
}
