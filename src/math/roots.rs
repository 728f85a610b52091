// ============================================================================
// Roots
// Integer square/cube roots with remainder and correctly rounded decimal roots
// ============================================================================

use crate::engine::LongMath;
use crate::numeric::{pow10, FixedDecimal, NumericError, NumericResult};
use crate::rounding::{pick_root, RoundingMode};
use num_bigint::{BigInt, BigUint};
use num_rational::BigRational;
use num_traits::{One, Zero};

/// Inputs wider than this go through the wordwise variants
const WORDWISE_THRESHOLD_BITS: u64 = 128;

const WORD_BITS: u32 = 32;

// ============================================================================
// Bitwise Variants (base 4 / base 8 digits)
// ============================================================================

/// Integer square root, one base-4 digit per step.
///
/// Returns `(s, r)` with `s² + r == x` and `s² <= x < (s + 1)²`.
pub fn sqrtb_with_remainder(x: &BigUint) -> (BigUint, BigUint) {
    if x.is_zero() {
        return (BigUint::zero(), BigUint::zero());
    }
    // Highest power of four not above x.
    let mut bit = BigUint::one() << ((x.bits() - 1) & !1);
    let mut root = BigUint::zero();
    let mut remainder = x.clone();
    while !bit.is_zero() {
        let trial = &root + &bit;
        if remainder >= trial {
            remainder -= &trial;
            root = (root >> 1u32) + &bit;
        } else {
            root >>= 1u32;
        }
        bit >>= 2u32;
    }
    (root, remainder)
}

/// Integer cube root, one base-8 digit per step.
///
/// Returns `(s, r)` with `s³ + r == x` and `s³ <= x < (s + 1)³`.
pub fn cbrtb_with_remainder(x: &BigUint) -> (BigUint, BigUint) {
    if x.is_zero() {
        return (BigUint::zero(), BigUint::zero());
    }
    let mut shift = (x.bits() - 1) / 3 * 3;
    let mut root = BigUint::zero();
    let mut remainder = x.clone();
    loop {
        root <<= 1u32;
        let step = (BigUint::from(3u32) * &root * (&root + 1u32) + 1u32) << shift;
        if remainder >= step {
            remainder -= step;
            root += 1u32;
        }
        if shift == 0 {
            break;
        }
        shift -= 3;
    }
    (root, remainder)
}

// ============================================================================
// Wordwise Variants (32-bit digit groups)
// ============================================================================

/// Integer square root producing one 32-bit root digit per step.
///
/// The leading two groups are seeded through [`sqrtb_with_remainder`] so
/// every later digit estimate is off by at most a couple of units.
pub fn sqrtw_with_remainder(x: &BigUint) -> (BigUint, BigUint) {
    let groups = word_groups(x, 2);
    let seeded = groups.len().min(2);
    let seed = groups[..seeded]
        .iter()
        .fold(BigUint::zero(), |acc, group| (acc << (2 * WORD_BITS)) + group);
    let (mut root, mut remainder) = sqrtb_with_remainder(&seed);
    let max_digit = BigUint::from(u32::MAX);

    for group in &groups[seeded..] {
        remainder = (remainder << (2 * WORD_BITS)) + group;
        // (2·r·B + d)·d is what appending digit d costs.
        let twice_shifted = &root << (WORD_BITS + 1);
        let mut digit = if twice_shifted.is_zero() {
            max_digit.clone()
        } else {
            (&remainder / &twice_shifted).min(max_digit.clone())
        };
        let mut consumed = (&twice_shifted + &digit) * &digit;
        while consumed > remainder {
            digit -= 1u32;
            consumed = (&twice_shifted + &digit) * &digit;
        }
        remainder -= consumed;
        root = (root << WORD_BITS) + digit;
    }
    (root, remainder)
}

/// Integer cube root producing one 32-bit root digit per step.
pub fn cbrtw_with_remainder(x: &BigUint) -> (BigUint, BigUint) {
    let groups = word_groups(x, 3);
    let seeded = groups.len().min(2);
    let seed = groups[..seeded]
        .iter()
        .fold(BigUint::zero(), |acc, group| (acc << (3 * WORD_BITS)) + group);
    let (mut root, mut remainder) = cbrtb_with_remainder(&seed);
    let max_digit = BigUint::from(u32::MAX);
    let three = BigUint::from(3u32);

    for group in &groups[seeded..] {
        remainder = (remainder << (3 * WORD_BITS)) + group;
        let shifted = &root << WORD_BITS;
        let three_square = &three * &shifted * &shifted;
        // (R + d)³ − R³ for R = r·B
        let growth = |d: &BigUint| (&three_square + &three * &shifted * d + d * d) * d;
        let mut digit = if three_square.is_zero() {
            max_digit.clone()
        } else {
            (&remainder / &three_square).min(max_digit.clone())
        };
        let mut consumed = growth(&digit);
        while consumed > remainder {
            digit -= 1u32;
            consumed = growth(&digit);
        }
        remainder -= consumed;
        root = shifted + digit;
    }
    (root, remainder)
}

/// Split into big-endian groups of `words` 32-bit words each.
fn word_groups(x: &BigUint, words: usize) -> Vec<BigUint> {
    let mut digits = x.to_u32_digits();
    let padded = digits.len().div_ceil(words) * words;
    digits.resize(padded, 0);
    digits.chunks(words).rev().map(BigUint::from_slice).collect()
}

// ============================================================================
// Dispatch
// ============================================================================

/// Integer square root with remainder, choosing the faster variant.
///
/// # Example
/// ```
/// use long_decimal::math::sqrt_with_remainder;
/// use num_bigint::BigUint;
///
/// let (root, rem) = sqrt_with_remainder(&BigUint::from(10u32));
/// assert_eq!((root, rem), (BigUint::from(3u32), BigUint::from(1u32)));
/// ```
pub fn sqrt_with_remainder(x: &BigUint) -> (BigUint, BigUint) {
    if x.bits() > WORDWISE_THRESHOLD_BITS {
        sqrtw_with_remainder(x)
    } else {
        sqrtb_with_remainder(x)
    }
}

/// Integer cube root with remainder, choosing the faster variant.
pub fn cbrt_with_remainder(x: &BigUint) -> (BigUint, BigUint) {
    if x.bits() > WORDWISE_THRESHOLD_BITS {
        cbrtw_with_remainder(x)
    } else {
        cbrtb_with_remainder(x)
    }
}

/// Floor of the square root of a non-negative integer.
pub(crate) fn isqrt(x: &BigInt) -> BigInt {
    debug_assert!(x.sign() != num_bigint::Sign::Minus);
    BigInt::from(sqrt_with_remainder(x.magnitude()).0)
}

// ============================================================================
// Decimal Roots
// ============================================================================

/// Significand of `radicand^(1/degree)` rounded to `scale` digits.
///
/// The integer root of the scaled radicand brackets the exact root, and the
/// choice between the two candidates is made on exact powers, so mean
/// boundaries are detected even when the root is irrational.
pub(crate) fn root_to_scale(
    radicand: &BigRational,
    degree: u32,
    scale: u32,
    mode: RoundingMode,
) -> NumericResult<BigInt> {
    let shift = scale.checked_mul(degree).ok_or(NumericError::Overflow)?;
    let scaled = radicand * BigRational::from_integer(pow10(shift));
    let floor = scaled.floor().to_integer();
    let (root, _) = match degree {
        2 => sqrt_with_remainder(floor.magnitude()),
        3 => cbrt_with_remainder(floor.magnitude()),
        _ => return Err(NumericError::InvalidArgument("root degree must be 2 or 3")),
    };
    let lower = BigInt::from(root);
    let upper = &lower + 1;
    pick_root(&scaled, degree, &lower, &upper, mode)
}

/// Root of `|x|` truncated to `scale` digits.
fn truncated_root(x: &FixedDecimal, degree: u32, scale: u32) -> NumericResult<FixedDecimal> {
    let shift = scale.checked_mul(degree).ok_or(NumericError::Overflow)?;
    let scaled = x.significand().magnitude() * pow10(shift).magnitude() / pow10(x.scale()).magnitude();
    let (root, _) = if degree == 2 {
        sqrt_with_remainder(&scaled)
    } else {
        cbrt_with_remainder(&scaled)
    };
    Ok(FixedDecimal::new(BigInt::from(root), scale))
}

impl LongMath {
    /// Square root rounded to `scale` digits.
    ///
    /// # Errors
    /// - `Domain` for negative `x`
    /// - `PrecisionLoss` under `UNNECESSARY` when the root is not exact
    ///
    /// # Example
    /// ```
    /// use long_decimal::prelude::*;
    ///
    /// let math = LongMath::new();
    /// let two = FixedDecimal::from(2);
    /// let root = math.sqrt(&two, 10, RoundingMode::HALF_EVEN).unwrap();
    /// assert_eq!(root.to_string(), "1.4142135624");
    /// ```
    pub fn sqrt(
        &self,
        x: &FixedDecimal,
        scale: u32,
        mode: RoundingMode,
    ) -> NumericResult<FixedDecimal> {
        let scale = self.check_precision(scale)?;
        if x.is_negative() {
            return Err(NumericError::Domain("square root of a negative number"));
        }
        let significand = root_to_scale(&x.to_rational(), 2, scale, mode)?;
        Ok(FixedDecimal::new(significand, scale))
    }

    /// Truncated square root and its remainder, `root² + remainder == x`.
    pub fn sqrt_with_remainder(
        &self,
        x: &FixedDecimal,
        scale: u32,
    ) -> NumericResult<(FixedDecimal, FixedDecimal)> {
        let scale = self.check_precision(scale)?;
        if x.is_negative() {
            return Err(NumericError::Domain("square root of a negative number"));
        }
        let root = truncated_root(x, 2, scale)?;
        let remainder = x - &root.checked_pow(2)?;
        Ok((root, remainder))
    }

    /// Cube root rounded to `scale` digits.
    ///
    /// Negative inputs are rounded as the mirror image of `|x|` under the
    /// additive inverse of `mode`.
    pub fn cbrt(
        &self,
        x: &FixedDecimal,
        scale: u32,
        mode: RoundingMode,
    ) -> NumericResult<FixedDecimal> {
        let scale = self.check_precision(scale)?;
        if x.is_negative() {
            let mirrored = root_to_scale(&(-x).to_rational(), 3, scale, mode.add_inverse())?;
            return Ok(FixedDecimal::new(-mirrored, scale));
        }
        let significand = root_to_scale(&x.to_rational(), 3, scale, mode)?;
        Ok(FixedDecimal::new(significand, scale))
    }

    /// Cube root truncated toward zero and its remainder,
    /// `root³ + remainder == x`. The remainder carries the sign of `x`.
    pub fn cbrt_with_remainder(
        &self,
        x: &FixedDecimal,
        scale: u32,
    ) -> NumericResult<(FixedDecimal, FixedDecimal)> {
        let scale = self.check_precision(scale)?;
        let magnitude = truncated_root(x, 3, scale)?;
        let root = if x.is_negative() { -magnitude } else { magnitude };
        let remainder = x - &root.checked_pow(3)?;
        Ok((root, remainder))
    }
}
