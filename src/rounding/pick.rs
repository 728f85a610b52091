// ============================================================================
// Boundary Resolution
// Chooses between two bracketing candidates under a rounding mode
// ============================================================================
//
// All comparisons are exact: the value is a rational (or a root of one) and
// every mean is compared through integer powers, never through floats.

use super::mode::{MajorMode, MinorMode, RoundingMode, ZeroRoundingMode};
use crate::numeric::{NumericError, NumericResult};
use num_bigint::{BigInt, Sign};
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};
use std::cmp::Ordering;

/// Exact value expressed as `radicand^(1/degree)`.
///
/// `degree == 1` is a plain signed rational; higher degrees require a
/// non-negative radicand.
struct Exact<'a> {
    radicand: &'a BigRational,
    degree: u32,
}

impl Exact<'_> {
    fn sign(&self) -> Sign {
        if self.radicand.is_zero() {
            Sign::NoSign
        } else if self.radicand.is_negative() {
            Sign::Minus
        } else {
            Sign::Plus
        }
    }

    /// Compare the value with an integer candidate.
    fn cmp_integer(&self, k: &BigInt) -> Ordering {
        if self.degree == 1 {
            return self.radicand.cmp(&BigRational::from_integer(k.clone()));
        }
        if k.is_negative() {
            return Ordering::Greater;
        }
        let power = BigRational::from_integer(k.pow(self.degree));
        self.radicand.cmp(&power)
    }
}

/// Pick `lower` or `upper` for the exact rational `value`, where
/// `lower <= value <= upper`.
///
/// `zero_mode` is consulted only when `value` is zero and lies strictly
/// between a negative and a positive candidate, and either the mode decides
/// by sign or it is mean-based and the candidates are symmetric around zero.
///
/// # Errors
/// - `PrecisionLoss` for [`RoundingMode::UNNECESSARY`] when `value` is not a candidate
/// - `SignMismatch` for geometric, harmonic and quadratic means across zero
/// - `UnresolvedTie` when a boundary case has no tie-break
/// - `AmbiguousZero` when the zero policy is reached and is `Unnecessary`
pub fn pick_value(
    value: &BigRational,
    lower: &BigInt,
    upper: &BigInt,
    mode: RoundingMode,
    zero_mode: ZeroRoundingMode,
) -> NumericResult<BigInt> {
    decide(
        &Exact {
            radicand: value,
            degree: 1,
        },
        lower,
        upper,
        mode,
        zero_mode,
    )
}

/// Pick `lower` or `upper` for the value `radicand^(1/degree)`.
///
/// Both candidates must be non-negative. Used by the decimal roots, where the
/// root itself is generally irrational but every mean comparison can be
/// raised to an exact integer power.
pub fn pick_root(
    radicand: &BigRational,
    degree: u32,
    lower: &BigInt,
    upper: &BigInt,
    mode: RoundingMode,
) -> NumericResult<BigInt> {
    if degree == 0 {
        return Err(NumericError::InvalidArgument("root degree must be positive"));
    }
    if lower.is_negative() || radicand.is_negative() {
        return Err(NumericError::InvalidArgument(
            "root candidates must be non-negative",
        ));
    }
    decide(
        &Exact { radicand, degree },
        lower,
        upper,
        mode,
        ZeroRoundingMode::Unnecessary,
    )
}

fn decide(
    value: &Exact<'_>,
    lower: &BigInt,
    upper: &BigInt,
    mode: RoundingMode,
    zero_mode: ZeroRoundingMode,
) -> NumericResult<BigInt> {
    if lower >= upper {
        return Err(NumericError::InvalidArgument(
            "lower candidate must be below upper candidate",
        ));
    }
    if value.cmp_integer(lower) == Ordering::Equal {
        return Ok(lower.clone());
    }
    if value.cmp_integer(upper) == Ordering::Equal {
        return Ok(upper.clone());
    }

    match mode.major() {
        MajorMode::Unnecessary => Err(NumericError::PrecisionLoss),
        MajorMode::Up => by_direction(Direction::Up, value.sign(), lower, upper, zero_mode),
        MajorMode::Down => by_direction(Direction::Down, value.sign(), lower, upper, zero_mode),
        MajorMode::Ceiling => Ok(upper.clone()),
        MajorMode::Floor => Ok(lower.clone()),
        MajorMode::Nearest05 => {
            if upper.mod_floor(&BigInt::from(5)).is_zero() {
                Ok(upper.clone())
            } else {
                Ok(lower.clone())
            }
        },
        // Zero midway between opposite candidates has no side to fall to.
        _ if value.sign() == Sign::NoSign && *lower == -upper => {
            resolve_zero(lower, upper, zero_mode)
        },
        major => match compare_to_mean(major, value, lower, upper)? {
            Ordering::Less => Ok(lower.clone()),
            Ordering::Greater => Ok(upper.clone()),
            Ordering::Equal => break_tie(mode.minor(), value.sign(), lower, upper, zero_mode),
        },
    }
}

#[derive(Clone, Copy)]
enum Direction {
    Up,
    Down,
}

fn by_direction(
    direction: Direction,
    sign: Sign,
    lower: &BigInt,
    upper: &BigInt,
    zero_mode: ZeroRoundingMode,
) -> NumericResult<BigInt> {
    match (direction, sign) {
        (Direction::Up, Sign::Plus) | (Direction::Down, Sign::Minus) => Ok(upper.clone()),
        (Direction::Up, Sign::Minus) | (Direction::Down, Sign::Plus) => Ok(lower.clone()),
        (_, Sign::NoSign) => resolve_zero(lower, upper, zero_mode),
    }
}

/// Apply the zero policy to a zero value between `lower < 0 < upper`.
pub(crate) fn resolve_zero(
    lower: &BigInt,
    upper: &BigInt,
    zero_mode: ZeroRoundingMode,
) -> NumericResult<BigInt> {
    let below = lower.abs();
    match zero_mode {
        ZeroRoundingMode::ToPlus => Ok(upper.clone()),
        ZeroRoundingMode::ToMinus => Ok(lower.clone()),
        ZeroRoundingMode::ClosestPreferPlus => {
            if below < *upper {
                Ok(lower.clone())
            } else {
                Ok(upper.clone())
            }
        },
        ZeroRoundingMode::ClosestPreferMinus => {
            if *upper < below {
                Ok(upper.clone())
            } else {
                Ok(lower.clone())
            }
        },
        ZeroRoundingMode::Unnecessary => Err(NumericError::AmbiguousZero),
    }
}

fn break_tie(
    minor: MinorMode,
    sign: Sign,
    lower: &BigInt,
    upper: &BigInt,
    zero_mode: ZeroRoundingMode,
) -> NumericResult<BigInt> {
    match minor {
        MinorMode::Up => by_direction(Direction::Up, sign, lower, upper, zero_mode),
        MinorMode::Down => by_direction(Direction::Down, sign, lower, upper, zero_mode),
        MinorMode::Ceiling => Ok(upper.clone()),
        MinorMode::Floor => Ok(lower.clone()),
        MinorMode::Even => Ok(even_candidate(lower, upper).clone()),
        MinorMode::Odd => {
            if even_candidate(lower, upper) == lower {
                Ok(upper.clone())
            } else {
                Ok(lower.clone())
            }
        },
        MinorMode::None => Err(NumericError::UnresolvedTie),
    }
}

/// The candidate whose lowest bit is clear, falling back to `upper`.
fn even_candidate<'a>(lower: &'a BigInt, upper: &'a BigInt) -> &'a BigInt {
    if lower.is_even() {
        lower
    } else {
        upper
    }
}

// ============================================================================
// Mean Comparison
// ============================================================================

/// Position of the value relative to the mean of `lower` and `upper`.
fn compare_to_mean(
    major: MajorMode,
    value: &Exact<'_>,
    lower: &BigInt,
    upper: &BigInt,
) -> NumericResult<Ordering> {
    if value.degree > 1 {
        return Ok(compare_non_negative(major, value.radicand, value.degree, lower, upper));
    }

    let v = value.radicand;
    if lower.is_negative() && upper.is_positive() {
        // Candidates straddle zero: only the odd-symmetric means are defined.
        return match major {
            MajorMode::ArithmeticMean => {
                let twice = v * BigRational::from_integer(BigInt::from(2));
                Ok(twice.cmp(&BigRational::from_integer(lower + upper)))
            },
            MajorMode::CubicMean => {
                let twice_cube = cube(v) * BigRational::from_integer(BigInt::from(2));
                let sum = lower.pow(3u32) + upper.pow(3u32);
                Ok(twice_cube.cmp(&BigRational::from_integer(sum)))
            },
            _ => Err(NumericError::SignMismatch),
        };
    }

    if !upper.is_positive() {
        // Both candidates <= 0: mirror into the positive half-line.
        let mirrored = -v;
        let ordering = compare_non_negative(major, &mirrored, 1, &-upper, &-lower);
        return Ok(ordering.reverse());
    }

    Ok(compare_non_negative(major, v, 1, lower, upper))
}

/// Compare `radicand^(1/degree)` with the mean of `0 <= lower < upper`.
///
/// Every mean is written as `s^(1/q)` for a rational `s`, so the comparison
/// reduces to `radicand^q` against `s^degree`.
fn compare_non_negative(
    major: MajorMode,
    radicand: &BigRational,
    degree: u32,
    lower: &BigInt,
    upper: &BigInt,
) -> Ordering {
    let two = BigInt::from(2);
    let l = BigRational::from_integer(lower.clone());
    let u = BigRational::from_integer(upper.clone());
    let (mean, q) = match major {
        MajorMode::ArithmeticMean => ((&l + &u) / BigRational::from_integer(two), 1),
        MajorMode::GeometricMean => (&l * &u, 2),
        MajorMode::HarmonicMean => {
            let numerator = &l * &u * BigRational::from_integer(two);
            (numerator / (&l + &u), 1)
        },
        MajorMode::QuadraticMean => ((&l * &l + &u * &u) / BigRational::from_integer(two), 2),
        MajorMode::CubicMean => ((cube(&l) + cube(&u)) / BigRational::from_integer(two), 3),
        // Non-mean majors never reach the mean comparison.
        _ => return Ordering::Equal,
    };
    power(radicand, q).cmp(&power(&mean, degree))
}

fn cube(r: &BigRational) -> BigRational {
    r * r * r
}

fn power(r: &BigRational, n: u32) -> BigRational {
    let mut acc = BigRational::one();
    for _ in 0..n {
        acc *= r;
    }
    acc
}
