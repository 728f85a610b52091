// ============================================================================
// Pi
// Gauss-Legendre arithmetic-geometric mean iteration
// ============================================================================

use super::estimate::{guarded, working_scale};
use super::roots::isqrt;
use crate::engine::{CachedFunction, LongMath, INTERNAL_MODE};
use crate::numeric::{pow10, FixedDecimal, NumericResult};
use crate::rounding::RoundingMode;
use num_bigint::BigInt;
use num_traits::{One, Signed};

impl LongMath {
    /// Pi rounded to `prec` digits.
    ///
    /// The most precise value computed so far is cached and reused for any
    /// request at or below its precision.
    pub fn pi(&self, prec: u32, mode: RoundingMode) -> NumericResult<FixedDecimal> {
        let prec = self.check_precision(prec)?;
        self.pi_approx(guarded(prec)?)?.round_to_scale(prec, mode)
    }

    pub(crate) fn pi_approx(&self, scale: u32) -> NumericResult<FixedDecimal> {
        self.cached_or_compute(CachedFunction::Pi, 0, scale, gauss_legendre)
    }
}

/// Iterate until two successive estimates agree to within `10^-(w-4)`.
fn gauss_legendre(scale: u32) -> NumericResult<FixedDecimal> {
    let w = working_scale(scale, 0.0)?;
    let one = pow10(w);
    let tolerance = pow10(4);

    let mut a = one.clone();
    let mut b = isqrt(&(&one * &one / 2));
    let mut t = &one / 4;
    let mut p = BigInt::one();
    let mut previous: Option<BigInt> = None;
    let mut iterations = 0u32;

    let value = loop {
        let next_a = (&a + &b) / 2;
        b = isqrt(&(&a * &b));
        let delta = &a - &next_a;
        t -= &p * (&delta * &delta / &one);
        p <<= 1;
        a = next_a;
        iterations += 1;

        let sum = &a + &b;
        let estimate: BigInt = &sum * &sum / (&t * 4);
        if previous
            .as_ref()
            .is_some_and(|prev: &BigInt| (&estimate - prev).abs() <= tolerance)
        {
            break estimate;
        }
        previous = Some(estimate);
    };
    tracing::trace!(iterations, working_scale = w, "pi iteration converged");
    FixedDecimal::new(value, w).round_to_scale(scale, INTERNAL_MODE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::CacheKey;

    #[test]
    fn test_pi_digits() {
        let math = LongMath::new();
        assert_eq!(
            math.pi(10, RoundingMode::DOWN).unwrap().to_string(),
            "3.1415926535"
        );
        assert_eq!(
            math.pi(10, RoundingMode::HALF_EVEN).unwrap().to_string(),
            "3.1415926536"
        );
        assert_eq!(
            math.pi(50, RoundingMode::HALF_EVEN).unwrap().to_string(),
            "3.14159265358979323846264338327950288419716939937511"
        );
        assert_eq!(math.pi(0, RoundingMode::HALF_EVEN).unwrap().to_string(), "3");
    }

    #[test]
    fn test_pi_is_never_downgraded() {
        let math = LongMath::new();
        let key = CacheKey::new(CachedFunction::Pi, 0, INTERNAL_MODE);
        math.pi(60, RoundingMode::HALF_EVEN).unwrap();
        let cached = math.cache().cached_scale(&key).unwrap();
        math.pi(5, RoundingMode::HALF_EVEN).unwrap();
        assert_eq!(math.cache().cached_scale(&key), Some(cached));
    }

    #[test]
    fn test_pi_unnecessary_fails() {
        let math = LongMath::new();
        assert!(math.pi(3, RoundingMode::UNNECESSARY).is_err());
    }
}
