// ============================================================================
// Quotient
// Exact rational value carrying a suggested display scale
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::fixed_decimal::{round_rational, FixedDecimal};
use crate::rounding::RoundingMode;
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// An exact rational that has not yet been rounded.
///
/// Division of two [`FixedDecimal`] values produces a `Quotient`; arithmetic
/// between quotients stays exact until a caller rounds with
/// [`Quotient::round_to_scale`]. The suggested scale of a sum or difference
/// is the larger input scale, of a product the sum of both.
#[derive(Clone)]
pub struct Quotient {
    value: BigRational,
    scale: u32,
}

impl Quotient {
    /// Create from numerator and denominator.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `denominator` is zero.
    pub fn new(
        numerator: impl Into<BigInt>,
        denominator: impl Into<BigInt>,
        scale: u32,
    ) -> NumericResult<Self> {
        let denominator = denominator.into();
        if denominator.is_zero() {
            return Err(NumericError::DivisionByZero);
        }
        Ok(Self::from_rational(
            BigRational::new(numerator.into(), denominator),
            scale,
        ))
    }

    #[inline]
    pub fn from_rational(value: BigRational, scale: u32) -> Self {
        Self { value, scale }
    }

    #[inline]
    pub fn value(&self) -> &BigRational {
        &self.value
    }

    /// Suggested scale for display or final rounding.
    #[inline]
    pub fn scale(&self) -> u32 {
        self.scale
    }

    #[inline]
    pub fn numerator(&self) -> &BigInt {
        self.value.numer()
    }

    #[inline]
    pub fn denominator(&self) -> &BigInt {
        self.value.denom()
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.value.is_negative()
    }

    /// Same value with a different suggested scale.
    pub fn with_scale(&self, scale: u32) -> Self {
        Self::from_rational(self.value.clone(), scale)
    }

    /// Exact reciprocal, keeping the suggested scale.
    ///
    /// # Errors
    /// Returns `DivisionByZero` for zero.
    pub fn recip(&self) -> NumericResult<Self> {
        if self.is_zero() {
            return Err(NumericError::DivisionByZero);
        }
        Ok(Self::from_rational(self.value.recip(), self.scale))
    }

    /// Exact division; the suggested scale is the larger input scale.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `rhs` is zero.
    pub fn checked_div(&self, rhs: &Self) -> NumericResult<Self> {
        if rhs.is_zero() {
            return Err(NumericError::DivisionByZero);
        }
        Ok(Self::from_rational(
            &self.value / &rhs.value,
            self.scale.max(rhs.scale),
        ))
    }

    /// Round to `new_scale` digits after the point.
    ///
    /// # Errors
    /// Propagates rounding errors, e.g. `PrecisionLoss` under
    /// [`RoundingMode::UNNECESSARY`] for a non-terminating value.
    pub fn round_to_scale(&self, new_scale: u32, mode: RoundingMode) -> NumericResult<FixedDecimal> {
        round_rational(&self.value, new_scale, mode)
            .map(|significand| FixedDecimal::new(significand, new_scale))
    }

    /// Round to the suggested scale.
    pub fn to_fixed_decimal(&self, mode: RoundingMode) -> NumericResult<FixedDecimal> {
        self.round_to_scale(self.scale, mode)
    }
}

impl From<&FixedDecimal> for Quotient {
    fn from(value: &FixedDecimal) -> Self {
        Self::from_rational(value.to_rational(), value.scale())
    }
}

impl From<FixedDecimal> for Quotient {
    fn from(value: FixedDecimal) -> Self {
        Self::from(&value)
    }
}

impl PartialEq for Quotient {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Quotient {}

impl PartialOrd for Quotient {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Quotient {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl Neg for Quotient {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::from_rational(-self.value, self.scale)
    }
}

impl Add<&Quotient> for &Quotient {
    type Output = Quotient;

    fn add(self, rhs: &Quotient) -> Quotient {
        Quotient::from_rational(&self.value + &rhs.value, self.scale.max(rhs.scale))
    }
}

impl Sub<&Quotient> for &Quotient {
    type Output = Quotient;

    fn sub(self, rhs: &Quotient) -> Quotient {
        Quotient::from_rational(&self.value - &rhs.value, self.scale.max(rhs.scale))
    }
}

impl Mul<&Quotient> for &Quotient {
    type Output = Quotient;

    fn mul(self, rhs: &Quotient) -> Quotient {
        Quotient::from_rational(&self.value * &rhs.value, self.scale + rhs.scale)
    }
}

impl Add for Quotient {
    type Output = Quotient;

    fn add(self, rhs: Quotient) -> Quotient {
        &self + &rhs
    }
}

impl Sub for Quotient {
    type Output = Quotient;

    fn sub(self, rhs: Quotient) -> Quotient {
        &self - &rhs
    }
}

impl Mul for Quotient {
    type Output = Quotient;

    fn mul(self, rhs: Quotient) -> Quotient {
        &self * &rhs
    }
}

impl fmt::Debug for Quotient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Quotient({}, scale={})", self.value, self.scale)
    }
}

impl fmt::Display for Quotient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.value, self.scale)
    }
}
