// ============================================================================
// Logarithms
// Reduction by cached exponentials, square-root contraction, Taylor series
// ============================================================================

use super::estimate::{
    decimal_digits, fixed_at, guarded, log10_estimate, reduction_bits, working_scale,
};
use super::roots::isqrt;
use crate::engine::{CachedFunction, LongMath, INTERNAL_MODE};
use crate::numeric::{pow10, FixedDecimal, NumericError, NumericResult, Quotient};
use crate::rounding::RoundingMode;
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, ToPrimitive, Zero};
use std::f64::consts::{LN_10, LOG10_2};

/// Exponentials divided out during range reduction, largest first
const REDUCTION_STEPS: [i64; 4] = [709, 100, 10, 1];

/// Integer arguments whose logarithms are kept in the function cache
const CACHED_ARGUMENTS: [i64; 2] = [2, 10];

impl LongMath {
    /// Natural logarithm rounded to `prec` digits.
    ///
    /// # Errors
    /// - `Domain` for zero or negative `x`
    /// - `PrecisionLoss` under `UNNECESSARY` unless `x` is one
    pub fn log(
        &self,
        x: &FixedDecimal,
        prec: u32,
        mode: RoundingMode,
    ) -> NumericResult<FixedDecimal> {
        let prec = self.check_precision(prec)?;
        ensure_positive(x)?;
        self.log_approx(x, guarded(prec)?)?.round_to_scale(prec, mode)
    }

    /// Base-10 logarithm rounded to `prec` digits.
    ///
    /// Powers of ten give exact integers, so `UNNECESSARY` succeeds on them.
    ///
    /// # Example
    /// ```
    /// use long_decimal::prelude::*;
    ///
    /// let math = LongMath::new();
    /// let x: FixedDecimal = "1000".parse().unwrap();
    /// let y = math.log10(&x, 3, RoundingMode::UNNECESSARY).unwrap();
    /// assert_eq!(y.to_string(), "3.000");
    /// ```
    pub fn log10(
        &self,
        x: &FixedDecimal,
        prec: u32,
        mode: RoundingMode,
    ) -> NumericResult<FixedDecimal> {
        let prec = self.check_precision(prec)?;
        ensure_positive(x)?;
        // x = mantissa * 10^shift with mantissa in [1, 10)
        let digits = decimal_digits(x.significand());
        let shift = i64::from(digits) - 1 - i64::from(x.scale());
        let mantissa = FixedDecimal::new(x.significand().clone(), digits - 1);
        let fraction = self.log_ratio(&mantissa, &FixedDecimal::from(10), guarded(prec)?)?;
        (FixedDecimal::from(shift) + fraction).round_to_scale(prec, mode)
    }

    /// Base-2 logarithm rounded to `prec` digits.
    ///
    /// Powers of two give exact integers.
    pub fn log2(
        &self,
        x: &FixedDecimal,
        prec: u32,
        mode: RoundingMode,
    ) -> NumericResult<FixedDecimal> {
        let prec = self.check_precision(prec)?;
        ensure_positive(x)?;
        let w = guarded(prec)?;
        // x = mantissa * 2^exponent with mantissa in [1, 2)
        let exponent = floor_log2(x);
        let mantissa = if exponent >= 0 {
            let divisor = Quotient::from_rational(power_of_two(exponent), 0);
            Quotient::from(x)
                .checked_div(&divisor)?
                .round_to_scale(w.saturating_add(2), INTERNAL_MODE)?
        } else {
            x * FixedDecimal::from_integer(BigInt::one() << exponent.unsigned_abs())
        };
        let fraction = self.log_ratio(&mantissa, &FixedDecimal::from(2), w)?;
        (FixedDecimal::from(exponent) + fraction).round_to_scale(prec, mode)
    }

    /// `log(x) / log(base)` at `scale`; exact zero when `x` is one.
    fn log_ratio(
        &self,
        x: &FixedDecimal,
        base: &FixedDecimal,
        scale: u32,
    ) -> NumericResult<FixedDecimal> {
        let inner = scale.saturating_add(2);
        let numerator = self.log_approx(x, inner)?;
        if numerator.is_zero() {
            return Ok(FixedDecimal::zero());
        }
        let denominator = self.log_approx(base, inner)?;
        numerator
            .checked_div(&denominator)?
            .round_to_scale(scale, INTERNAL_MODE)
    }

    /// Natural logarithm of a positive `x` within about one unit at `scale`.
    pub(crate) fn log_approx(&self, x: &FixedDecimal, scale: u32) -> NumericResult<FixedDecimal> {
        match cached_argument(x) {
            Some(argument) => {
                self.cached_or_compute(CachedFunction::Log, argument, scale, |scale| {
                    self.log_uncached(x, scale)
                })
            },
            None => self.log_uncached(x, scale),
        }
    }

    fn log_uncached(&self, x: &FixedDecimal, scale: u32) -> NumericResult<FixedDecimal> {
        if *x < FixedDecimal::one() {
            // 1/x > 1, so its absolute rounding error is also a relative one.
            let inverse = x
                .recip()?
                .round_to_scale(scale.saturating_add(2), INTERNAL_MODE)?;
            return Ok(-self.log_uncached(&inverse, scale)?);
        }

        let ln_estimate = log10_estimate(x) * LN_10;
        let divisions = ln_estimate / 709.0 + 30.0;
        let m = reduction_bits(scale);
        let w = working_scale(
            scale,
            divisions.log10() + f64::from(m + 2) * LOG10_2 + 1.0,
        )?;
        tracing::debug!(scale, working_scale = w, "log working precision");

        let one = pow10(w);
        let mut value = fixed_at(x, w);
        let mut whole: i64 = 0;
        let mut remaining = ln_estimate;
        for step in REDUCTION_STEPS {
            if remaining + 1.0 < step as f64 {
                continue;
            }
            let divisor = fixed_at(&self.exp_approx(&FixedDecimal::from(step), w)?, w);
            while value >= divisor {
                value = &value * &one / &divisor;
                whole += step;
                remaining -= step as f64;
            }
        }

        // Contract toward 1: log(v) = 2^k * log(v^(1/2^k)).
        let threshold = &one >> m;
        let mut doublings = 0u32;
        while (&value - &one).abs() >= threshold {
            value = isqrt(&(&value * &one));
            doublings += 1;
        }

        // log(1 - u) = -(u + u²/2 + u³/3 + ...)
        let u = &one - &value;
        let mut power = u.clone();
        let mut series = BigInt::zero();
        let mut n = 1u32;
        while !power.is_zero() {
            series -= &power / n;
            power = &power * &u / &one;
            n += 1;
        }
        tracing::trace!(doublings, terms = n - 1, "log series converged");

        let total = (series << doublings) + BigInt::from(whole) * &one;
        FixedDecimal::new(total, w).round_to_scale(scale, INTERNAL_MODE)
    }
}

fn ensure_positive(x: &FixedDecimal) -> NumericResult<()> {
    if x.is_positive() {
        Ok(())
    } else {
        Err(NumericError::Domain("logarithm of a non-positive number"))
    }
}

fn cached_argument(x: &FixedDecimal) -> Option<i64> {
    if !x.is_integer() {
        return None;
    }
    let n = x.integer_part().to_i64()?;
    CACHED_ARGUMENTS.contains(&n).then_some(n)
}

/// `floor(log2 x)` for positive `x`, corrected exactly from an estimate.
fn floor_log2(x: &FixedDecimal) -> i64 {
    let value = x.to_rational();
    let mut exponent = (log10_estimate(x) / LOG10_2).floor() as i64;
    while power_of_two(exponent + 1) <= value {
        exponent += 1;
    }
    while power_of_two(exponent) > value {
        exponent -= 1;
    }
    exponent
}

fn power_of_two(exponent: i64) -> BigRational {
    let magnitude = BigInt::one() << exponent.unsigned_abs();
    if exponent >= 0 {
        BigRational::from_integer(magnitude)
    } else {
        BigRational::new(BigInt::one(), magnitude)
    }
}
