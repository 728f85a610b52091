// ============================================================================
// Long Decimal Library
// Arbitrary-precision fixed-point decimals with mean-based rounding
// ============================================================================

//! # Long Decimal
//!
//! Fixed-point decimals with an unbounded significand and an explicit scale,
//! plus a precision-managed engine for roots and transcendental functions.
//!
//! ## Features
//!
//! - **Exact values**: `significand × 10^(−scale)`, trailing zeros preserved
//! - **36 rounding modes**, including ties on arithmetic, geometric,
//!   harmonic, quadratic and cubic mean boundaries
//! - **Residue rounding** to the nearest value with an allowed remainder
//! - **Deferred division** through exact [`Quotient`](numeric::Quotient) values
//! - **sqrt, cbrt, exp, log, power and pi** to any requested precision, with
//!   cached reusable results
//!
//! ## Example
//!
//! ```rust
//! use long_decimal::prelude::*;
//!
//! let price: FixedDecimal = "2.24".parse().unwrap();
//! let rounded = price.round_to_scale(1, RoundingMode::UP).unwrap();
//! assert_eq!(rounded.to_string(), "2.3");
//!
//! let math = LongMath::new();
//! let root = math.sqrt(&FixedDecimal::from(2), 20, RoundingMode::HALF_EVEN).unwrap();
//! assert_eq!(root.to_string(), "1.41421356237309504880");
//!
//! let third = (FixedDecimal::from(1) / FixedDecimal::from(3)).with_scale(4);
//! assert_eq!(third.to_fixed_decimal(RoundingMode::HALF_UP).unwrap().to_string(), "0.3333");
//! ```

pub mod engine;
pub mod math;
pub mod numeric;
pub mod rounding;

// Re-exports for convenience
pub mod prelude {
    pub use crate::engine::{LongMath, MathConfig, OverflowPolicy};
    pub use crate::numeric::{FixedDecimal, NumericError, NumericResult, Quotient};
    pub use crate::rounding::{MajorMode, MinorMode, RoundingMode, ZeroRoundingMode};
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use crate::engine::{CacheKey, CachedFunction, INTERNAL_MODE};
    use num_bigint::BigInt;
    use std::sync::Arc;
    use std::thread;

    fn fd(s: &str) -> FixedDecimal {
        s.parse().unwrap()
    }

    fn within_one_unit(a: &FixedDecimal, b: &FixedDecimal, prec: u32) -> bool {
        (a - b).abs() <= FixedDecimal::new(1, prec)
    }

    #[test]
    fn test_concrete_scenarios() {
        let up = fd("2.24").round_to_scale(1, RoundingMode::UP).unwrap();
        assert_eq!(up.to_string(), "2.3");

        let even = FixedDecimal::new(225, 1)
            .round_to_scale(0, RoundingMode::HALF_EVEN)
            .unwrap();
        assert_eq!(even.to_string(), "22");

        let math = LongMath::new();
        let pi = math.pi(10, RoundingMode::DOWN).unwrap();
        assert!(pi.to_string().starts_with("3.1415926535"));

        let half = math
            .power(&fd("2"), &fd("-1"), 4, RoundingMode::HALF_EVEN)
            .unwrap();
        assert_eq!(half.to_string(), "0.5000");

        let residue = FixedDecimal::zero()
            .round_to_allowed_remainders(
                0,
                &[BigInt::from(1), BigInt::from(4)],
                &BigInt::from(5),
                RoundingMode::CEILING,
                ZeroRoundingMode::Unnecessary,
            )
            .unwrap();
        assert_eq!(residue.to_string(), "1");
    }

    #[test]
    fn test_exp_log_round_trip() {
        let math = LongMath::new();
        let prec = 20;
        let mode = RoundingMode::HALF_EVEN;
        for x in ["1", "10", "0.01", "0.00000000000000000000000000000000000000000000000001"] {
            let x = fd(x);

            let there = math.exp(&x, prec, mode).unwrap();
            let back = math.log(&there, prec, mode).unwrap();
            assert!(within_one_unit(&back, &x, prec), "log(exp({})) = {}", x, back);

            // One extra digit on log keeps exp's amplification inside a unit.
            let there = math.log(&x, prec + 1, mode).unwrap();
            let back = math.exp(&there, prec, mode).unwrap();
            assert!(within_one_unit(&back, &x, prec), "exp(log({})) = {}", x, back);
        }
    }

    #[test]
    fn test_monotonic_cache_precision() {
        let math = LongMath::new();
        let key = CacheKey::new(CachedFunction::Pi, 0, INTERNAL_MODE);

        math.pi(30, RoundingMode::HALF_EVEN).unwrap();
        let low = math.cache().cached_scale(&key).unwrap();

        let higher = math.pi(80, RoundingMode::HALF_EVEN).unwrap();
        let high = math.cache().cached_scale(&key).unwrap();
        assert!(high > low);

        let lower = math.pi(30, RoundingMode::HALF_EVEN).unwrap();
        assert_eq!(math.cache().cached_scale(&key), Some(high));
        assert_eq!(
            higher.round_to_scale(30, RoundingMode::HALF_EVEN).unwrap(),
            lower
        );
    }

    #[test]
    fn test_shared_engine_across_threads() {
        let math = Arc::new(LongMath::new());
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let math = Arc::clone(&math);
                thread::spawn(move || {
                    let prec = 20 + i * 5;
                    math.pi(prec, RoundingMode::HALF_EVEN).unwrap()
                })
            })
            .collect();
        let results: Vec<FixedDecimal> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        let reference = math.pi(20, RoundingMode::HALF_EVEN).unwrap();
        for value in &results {
            assert_eq!(
                value.round_to_scale(20, RoundingMode::HALF_EVEN).unwrap(),
                reference
            );
        }
    }

    #[test]
    fn test_configuration_applies_to_every_function() {
        let math = LongMath::with_config(MathConfig::strict(8)).unwrap();
        let x = fd("2");
        let too_precise = |r: NumericResult<FixedDecimal>| {
            matches!(r, Err(NumericError::PrecisionOverflow { requested: 9, max: 8 }))
        };
        assert!(too_precise(math.sqrt(&x, 9, RoundingMode::HALF_UP)));
        assert!(too_precise(math.exp(&x, 9, RoundingMode::HALF_UP)));
        assert!(too_precise(math.log(&x, 9, RoundingMode::HALF_UP)));
        assert!(too_precise(math.power(&x, &x, 9, RoundingMode::HALF_UP)));
        assert!(too_precise(math.pi(9, RoundingMode::HALF_UP)));

        math.set_overflow_policy(OverflowPolicy::Clamp);
        assert_eq!(math.pi(9, RoundingMode::DOWN).unwrap().to_string(), "3.14159265");
    }

    #[test]
    fn test_quotient_defers_rounding() {
        let third = FixedDecimal::from(1) / FixedDecimal::from(3);
        let sum = &(&third + &third) + &third;
        assert_eq!(
            sum.round_to_scale(5, RoundingMode::UNNECESSARY).unwrap().to_string(),
            "1.00000"
        );
    }

    #[test]
    fn test_inverse_modes_mirror_rounding() {
        let x = fd("2.25");
        // Nearest05 looks at the upper candidate only and is not symmetric.
        let symmetric = RoundingMode::ALL
            .iter()
            .copied()
            .filter(|mode| !matches!(mode.major(), MajorMode::Nearest05));
        for mode in symmetric {
            let direct = x.round_to_scale(1, mode);
            let mirrored = (-x.clone())
                .round_to_scale(1, mode.add_inverse())
                .map(|v| -v);
            assert_eq!(direct, mirrored, "{}", mode);
        }
    }
}
