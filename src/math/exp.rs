// ============================================================================
// Exponential
// Halving reduction, batched Taylor series and repeated squaring
// ============================================================================

use super::estimate::{
    check_magnitude, guarded, is_negligible, reduction_bits, round_tiny_positive, working_scale,
};
use crate::engine::{CachedFunction, LongMath, INTERNAL_MODE};
use crate::numeric::{pow10, FixedDecimal, NumericResult};
use crate::rounding::RoundingMode;
use num_bigint::BigInt;
use num_traits::{One, ToPrimitive, Zero};
use std::f64::consts::{LOG10_2, LOG10_E};

/// Integer arguments whose exponentials are kept in the function cache
const CACHED_ARGUMENTS: [i64; 4] = [1, 10, 100, 709];

impl LongMath {
    /// `e^x` rounded to `prec` digits.
    ///
    /// Results far below one unit at `prec` are not computed. They are
    /// rounded as a tiny positive value in `mode`: zero for the nearest and
    /// toward-zero modes, one unit for `UP` and `CEILING`.
    ///
    /// # Errors
    /// - `PrecisionOverflow` above the configured precision ceiling
    /// - `Overflow` when the result would have more than 10^8 integer digits
    /// - `PrecisionLoss` under `UNNECESSARY` for any non-zero `x`
    ///
    /// # Example
    /// ```
    /// use long_decimal::prelude::*;
    ///
    /// let math = LongMath::new();
    /// let e = math.exp(&FixedDecimal::one(), 20, RoundingMode::HALF_EVEN).unwrap();
    /// assert_eq!(e.to_string(), "2.71828182845904523536");
    /// ```
    pub fn exp(
        &self,
        x: &FixedDecimal,
        prec: u32,
        mode: RoundingMode,
    ) -> NumericResult<FixedDecimal> {
        let prec = self.check_precision(prec)?;
        if x.is_zero() {
            return FixedDecimal::one().with_scale_exact(prec);
        }
        let log10_result = x.to_f64().unwrap_or(f64::NAN) * LOG10_E;
        check_magnitude(log10_result)?;
        if is_negligible(log10_result, prec) {
            return round_tiny_positive(prec, mode);
        }
        self.exp_approx(x, guarded(prec)?)?.round_to_scale(prec, mode)
    }

    /// `2^x` rounded to `prec` digits; integer `x` is exact.
    pub fn exp2(
        &self,
        x: &FixedDecimal,
        prec: u32,
        mode: RoundingMode,
    ) -> NumericResult<FixedDecimal> {
        self.power(&FixedDecimal::from(2), x, prec, mode)
    }

    /// `10^x` rounded to `prec` digits; integer `x` is exact.
    pub fn exp10(
        &self,
        x: &FixedDecimal,
        prec: u32,
        mode: RoundingMode,
    ) -> NumericResult<FixedDecimal> {
        self.power(&FixedDecimal::from(10), x, prec, mode)
    }

    /// `e^x` within about one unit at `scale`, using the cache for the
    /// whitelisted integer arguments.
    pub(crate) fn exp_approx(&self, x: &FixedDecimal, scale: u32) -> NumericResult<FixedDecimal> {
        match cached_argument(x) {
            Some(argument) => {
                self.cached_or_compute(CachedFunction::Exp, argument, scale, |scale| {
                    exp_uncached(x, scale)
                })
            },
            None => exp_uncached(x, scale),
        }
    }
}

fn cached_argument(x: &FixedDecimal) -> Option<i64> {
    if !x.is_integer() {
        return None;
    }
    let n = x.integer_part().to_i64()?;
    CACHED_ARGUMENTS.contains(&n).then_some(n)
}

fn exp_uncached(x: &FixedDecimal, scale: u32) -> NumericResult<FixedDecimal> {
    if x.is_zero() {
        return FixedDecimal::one().with_scale_exact(scale);
    }
    if x.is_negative() {
        // e^x < 1 here, so inverting keeps the absolute error.
        let inverse = exp_uncached(&-x, scale)?;
        return inverse.recip()?.round_to_scale(scale, INTERNAL_MODE);
    }

    let estimate = x.to_f64().unwrap_or(f64::MAX);
    let m = reduction_bits(scale);
    let halvings = (estimate.log2() + f64::from(m)).ceil().max(0.0) as u32;
    let w = working_scale(
        scale,
        estimate * LOG10_E + f64::from(halvings) * LOG10_2 + 1.0,
    )?;
    let terms = f64::from(w) / (f64::from(m) * LOG10_2);
    let batch = (terms.sqrt().ceil() as usize).max(1);
    tracing::debug!(scale, working_scale = w, halvings, batch, "exp working precision");

    let one = pow10(w);
    let reduced = (x.significand() * &one) / (pow10(x.scale()) << halvings);
    let mut value = taylor_exp(&reduced, &one, batch);
    for _ in 0..halvings {
        value = &value * &value / &one;
    }
    FixedDecimal::new(value, w).round_to_scale(scale, INTERNAL_MODE)
}

/// `e^r` for a small fixed-point `r` whose unit is `one`.
///
/// Terms are summed in batches of `batch`, each batch reusing the powers
/// `r^0 .. r^(batch-1)` scaled by a shared leading factor `r^n / n!`.
fn taylor_exp(r: &BigInt, one: &BigInt, batch: usize) -> BigInt {
    let mut powers = Vec::with_capacity(batch);
    powers.push(one.clone());
    for i in 1..batch {
        let next = &powers[i - 1] * r / one;
        powers.push(next);
    }
    let stride = &powers[batch - 1] * r / one;

    let mut sum = BigInt::zero();
    let mut leading = one.clone();
    let mut n: u64 = 0;
    let mut batches = 0u32;
    while !leading.is_zero() {
        let mut divisor = BigInt::one();
        for (i, power) in powers.iter().enumerate() {
            if i > 0 {
                divisor *= n + i as u64;
            }
            sum += &leading * power / (one * &divisor);
        }
        divisor *= n + batch as u64;
        leading = &leading * &stride / (one * &divisor);
        n += batch as u64;
        batches += 1;
    }
    tracing::trace!(batches, batch, "exp series converged");
    sum
}
