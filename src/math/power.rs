// ============================================================================
// Power
// Integer, half-integer and general real exponents
// ============================================================================

use super::estimate::{
    check_magnitude, decimal_digits, digits_for, is_negligible, log10_estimate,
    round_tiny_positive, EXACT_POWER_DIGITS, GUARD_DIGITS,
};
use super::roots::root_to_scale;
use crate::engine::{LongMath, INTERNAL_MODE};
use crate::numeric::{FixedDecimal, NumericError, NumericResult};
use crate::rounding::RoundingMode;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{Signed, ToPrimitive};

impl LongMath {
    /// `base^exponent` rounded to `prec` digits.
    ///
    /// Integer exponents are exact while the exact result stays small, then
    /// switch to binary exponentiation at a bounded relative precision.
    /// Exponents that are exactly half an integer go through the correctly
    /// rounded square root. Anything else is `base^n * e^(f * log(base))`
    /// for `exponent = n + f`.
    ///
    /// When a float estimate puts the result far below one unit at `prec`,
    /// it is rounded as a tiny positive value in `mode` without being
    /// computed: zero for the nearest and toward-zero modes, one unit for
    /// `UP` and `CEILING`, and `PrecisionLoss` under `UNNECESSARY`.
    ///
    /// # Errors
    /// - `DivisionByZero` for a zero base with a negative exponent
    /// - `Domain` for a negative base with a non-integer exponent
    /// - `Overflow` when the result would be unreasonably large
    ///
    /// # Example
    /// ```
    /// use long_decimal::prelude::*;
    ///
    /// let math = LongMath::new();
    /// let half = math
    ///     .power(&FixedDecimal::from(2), &FixedDecimal::from(-1), 4, RoundingMode::HALF_EVEN)
    ///     .unwrap();
    /// assert_eq!(half.to_string(), "0.5000");
    /// ```
    pub fn power(
        &self,
        base: &FixedDecimal,
        exponent: &FixedDecimal,
        prec: u32,
        mode: RoundingMode,
    ) -> NumericResult<FixedDecimal> {
        let prec = self.check_precision(prec)?;
        if exponent.is_zero() {
            return FixedDecimal::one().with_scale_exact(prec);
        }
        if base.is_zero() {
            return if exponent.is_positive() {
                Ok(FixedDecimal::new(0, prec))
            } else {
                Err(NumericError::DivisionByZero)
            };
        }
        if base.is_negative() {
            if !exponent.is_integer() {
                return Err(NumericError::Domain("negative base with non-integer exponent"));
            }
            let magnitude = base.abs();
            if exponent.integer_part().is_odd() {
                let mirrored = self.power(&magnitude, exponent, prec, mode.add_inverse())?;
                return Ok(-mirrored);
            }
            return self.power(&magnitude, exponent, prec, mode);
        }
        if *base == FixedDecimal::one() {
            return FixedDecimal::one().with_scale_exact(prec);
        }

        let log10_result = exponent.to_f64().unwrap_or(f64::NAN) * log10_estimate(base);
        check_magnitude(log10_result)?;
        if is_negligible(log10_result, prec) {
            return round_tiny_positive(prec, mode);
        }

        if exponent.is_integer() {
            return integer_power(base, &exponent.integer_part(), prec, mode, log10_result);
        }
        let doubled = exponent + exponent;
        if doubled.is_integer() {
            if let Some(result) = half_integer_power(base, &doubled.integer_part(), prec, mode)? {
                return Ok(result);
            }
        }
        self.general_power(base, exponent, prec, mode, log10_result)
    }

    fn general_power(
        &self,
        base: &FixedDecimal,
        exponent: &FixedDecimal,
        prec: u32,
        mode: RoundingMode,
        log10_result: f64,
    ) -> NumericResult<FixedDecimal> {
        let whole = exponent.to_rational().floor().to_integer();
        let fraction = exponent - &FixedDecimal::from_integer(whole.clone());
        let whole = whole.to_i64().ok_or(NumericError::Overflow)?;
        let digits = relative_digits(prec, log10_result, whole as f64)?;
        tracing::debug!(prec, digits, whole, "power working precision");

        let integral = power_approx(base, whole, digits.saturating_add(2))?;

        // base^fraction lies between 1 and base.
        let log_scale = digits.saturating_add(3);
        let logarithm = self.log_approx(base, log_scale)?;
        let argument = (&fraction * &logarithm).round_to_scale(log_scale, INTERNAL_MODE)?;
        let fraction_log10 = fraction.to_f64().unwrap_or(1.0) * log10_estimate(base);
        let exp_scale = log_scale.saturating_add(digits_for(-fraction_log10));
        let fractional = self.exp_approx(&argument, exp_scale)?;

        (&integral * &fractional).round_to_scale(prec, mode)
    }
}

fn integer_power(
    base: &FixedDecimal,
    n: &BigInt,
    prec: u32,
    mode: RoundingMode,
    log10_result: f64,
) -> NumericResult<FixedDecimal> {
    let magnitude = n.magnitude().to_u64().ok_or(NumericError::Overflow)?;
    if magnitude as f64 * exact_cost(base) <= EXACT_POWER_DIGITS {
        let magnitude = u32::try_from(magnitude).map_err(|_| NumericError::Overflow)?;
        let exact = base.checked_pow(magnitude)?;
        return if n.is_negative() {
            exact.recip()?.round_to_scale(prec, mode)
        } else {
            exact.round_to_scale(prec, mode)
        };
    }
    let n = n.to_i64().ok_or(NumericError::Overflow)?;
    let digits = relative_digits(prec, log10_result, n as f64)?;
    tracing::debug!(prec, digits, n, "integer power working precision");
    power_approx(base, n, digits)?.round_to_scale(prec, mode)
}

/// `base^(k/2)` for odd `k`, correctly rounded, or `None` when the exact
/// radicand `base^k` would be too large.
fn half_integer_power(
    base: &FixedDecimal,
    k: &BigInt,
    prec: u32,
    mode: RoundingMode,
) -> NumericResult<Option<FixedDecimal>> {
    let Some(magnitude) = k.magnitude().to_u32() else {
        return Ok(None);
    };
    if f64::from(magnitude) * exact_cost(base) > EXACT_POWER_DIGITS {
        return Ok(None);
    }
    let exact = base.checked_pow(magnitude)?.to_rational();
    let radicand = if k.is_negative() { exact.recip() } else { exact };
    let significand = root_to_scale(&radicand, 2, prec, mode)?;
    Ok(Some(FixedDecimal::new(significand, prec)))
}

/// Digits in `base^n` per unit of `n` when computed exactly.
fn exact_cost(base: &FixedDecimal) -> f64 {
    f64::from(decimal_digits(base.significand()).max(base.scale()))
}

/// Significant digits needed so that a result near `10^log10_result` is
/// accurate to the guard digits past `prec`.
fn relative_digits(prec: u32, log10_result: f64, n: f64) -> NumericResult<u32> {
    let extra = log10_result + n.abs().max(1.0).log10() + 2.0;
    let digits = (f64::from(prec) + f64::from(GUARD_DIGITS) + extra).ceil();
    if digits > f64::from(u32::MAX) {
        return Err(NumericError::Overflow);
    }
    Ok((digits.max(0.0) as u32).max(GUARD_DIGITS))
}

/// `base^n` to `digits` significant digits by binary exponentiation.
///
/// Every product is rounded back to `digits` significant digits; a negative
/// `n` takes the reciprocal of the positive power at the end.
fn power_approx(base: &FixedDecimal, n: i64, digits: u32) -> NumericResult<FixedDecimal> {
    let mut remaining = n.unsigned_abs();
    let mut result = FixedDecimal::one();
    let mut square = round_significant(base, digits)?;
    while remaining > 0 {
        if remaining & 1 == 1 {
            result = round_significant(&(&result * &square), digits)?;
        }
        remaining >>= 1;
        if remaining > 0 {
            square = round_significant(&(&square * &square), digits)?;
        }
    }
    if n < 0 {
        let scale = digits_for(f64::from(digits) + log10_estimate(&result));
        return result.recip()?.round_to_scale(scale, INTERNAL_MODE);
    }
    Ok(result)
}

/// Drop fractional digits beyond `digits` significant ones.
fn round_significant(x: &FixedDecimal, digits: u32) -> NumericResult<FixedDecimal> {
    let excess = decimal_digits(x.significand())
        .saturating_sub(digits)
        .min(x.scale());
    if excess == 0 {
        return Ok(x.clone());
    }
    x.round_to_scale(x.scale() - excess, INTERNAL_MODE)
}
