// ============================================================================
// Fixed-Point Decimal
// Arbitrary-precision significand with an explicit decimal scale
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::pow10::pow10;
use super::quotient::Quotient;
use crate::rounding::{pick_value, RoundingMode, ZeroRoundingMode};
use num_bigint::{BigInt, Sign};
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::{One, Signed, ToPrimitive, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Fixed-point decimal number with runtime precision.
///
/// Stores `significand × 10^(−scale)`. Trailing zeros are significant: they
/// encode the displayed precision, so `2.20` and `2.2` print differently.
/// Equality, ordering and hashing compare numeric value only; use
/// [`FixedDecimal::is_identical`] to also compare the scale.
///
/// # Example
/// ```
/// use long_decimal::numeric::FixedDecimal;
/// use long_decimal::rounding::RoundingMode;
///
/// let x = FixedDecimal::new(224, 2); // 2.24
/// let y = x.round_to_scale(1, RoundingMode::UP).unwrap();
/// assert_eq!(y.to_string(), "2.3");
/// ```
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FixedDecimal {
    significand: BigInt,
    scale: u32,
}

impl FixedDecimal {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from a significand and scale.
    #[inline]
    pub fn new(significand: impl Into<BigInt>, scale: u32) -> Self {
        Self {
            significand: significand.into(),
            scale,
        }
    }

    /// Create an integer value with scale zero.
    #[inline]
    pub fn from_integer(value: impl Into<BigInt>) -> Self {
        Self::new(value, 0)
    }

    /// Round an exact rational to `scale` digits.
    ///
    /// # Errors
    /// Propagates rounding errors from [`pick_value`], e.g. `PrecisionLoss`
    /// for [`RoundingMode::UNNECESSARY`] when the value is not representable.
    pub fn from_rational(
        value: &BigRational,
        scale: u32,
        mode: RoundingMode,
    ) -> NumericResult<Self> {
        round_rational(value, scale, mode).map(|significand| Self::new(significand, scale))
    }

    #[inline]
    pub fn zero() -> Self {
        Self::new(0, 0)
    }

    #[inline]
    pub fn one() -> Self {
        Self::new(1, 0)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub fn significand(&self) -> &BigInt {
        &self.significand
    }

    /// Number of digits after the decimal point.
    #[inline]
    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// Split into `(significand, scale)`.
    #[inline]
    pub fn into_parts(self) -> (BigInt, u32) {
        (self.significand, self.scale)
    }

    #[inline]
    pub fn sign(&self) -> Sign {
        self.significand.sign()
    }

    /// `-1`, `0` or `1`.
    pub fn signum(&self) -> i32 {
        match self.sign() {
            Sign::Minus => -1,
            Sign::NoSign => 0,
            Sign::Plus => 1,
        }
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.significand.is_zero()
    }

    #[inline]
    pub fn is_positive(&self) -> bool {
        self.significand.is_positive()
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.significand.is_negative()
    }

    /// True when the value has no fractional part.
    pub fn is_integer(&self) -> bool {
        self.scale == 0 || self.significand.is_multiple_of(&pow10(self.scale))
    }

    /// Integer part, truncated toward zero.
    pub fn integer_part(&self) -> BigInt {
        &self.significand / pow10(self.scale)
    }

    /// Absolute value, keeping the scale.
    pub fn abs(&self) -> Self {
        Self::new(self.significand.abs(), self.scale)
    }

    /// True when both value and scale agree.
    pub fn is_identical(&self, other: &Self) -> bool {
        self.scale == other.scale && self.significand == other.significand
    }

    /// Exact value as a rational.
    pub fn to_rational(&self) -> BigRational {
        BigRational::new(self.significand.clone(), pow10(self.scale))
    }

    /// Nearest `f64`, for estimates only.
    pub fn to_f64(&self) -> Option<f64> {
        self.to_rational().to_f64()
    }

    /// Significand aligned to a scale that is at least `self.scale`.
    pub(crate) fn significand_at(&self, scale: u32) -> BigInt {
        debug_assert!(scale >= self.scale);
        &self.significand * pow10(scale - self.scale)
    }

    // ========================================================================
    // Rounding
    // ========================================================================

    /// Same value written with more digits.
    ///
    /// # Errors
    /// Returns `InvalidArgument` if `new_scale` is below the current scale.
    pub fn with_scale_exact(&self, new_scale: u32) -> NumericResult<Self> {
        if new_scale < self.scale {
            return Err(NumericError::InvalidArgument(
                "exact rescale cannot drop digits",
            ));
        }
        Ok(Self::new(self.significand_at(new_scale), new_scale))
    }

    /// Change the scale, rounding with `mode` if digits are dropped.
    ///
    /// Increasing the scale is always exact. Decreasing it divides the
    /// significand by a power of ten and lets the boundary-resolution
    /// algorithm choose between the two bracketing significands.
    ///
    /// # Errors
    /// - `PrecisionLoss` if digits are lost under [`RoundingMode::UNNECESSARY`]
    pub fn round_to_scale(&self, new_scale: u32, mode: RoundingMode) -> NumericResult<Self> {
        match new_scale.cmp(&self.scale) {
            Ordering::Equal => Ok(self.clone()),
            Ordering::Greater => Ok(Self::new(self.significand_at(new_scale), new_scale)),
            Ordering::Less => {
                let factor = pow10(self.scale - new_scale);
                let (quotient, remainder) = self.significand.div_rem(&factor);
                if remainder.is_zero() {
                    return Ok(Self::new(quotient, new_scale));
                }
                let (lower, upper) = bracket(quotient, self.significand.sign());
                let exact = BigRational::new(self.significand.clone(), factor);
                let significand =
                    pick_value(&exact, &lower, &upper, mode, ZeroRoundingMode::Unnecessary)?;
                Ok(Self::new(significand, new_scale))
            },
        }
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    /// Exact integer power; the scale multiplies by `exponent`.
    ///
    /// # Panics
    /// Panics if the resulting scale does not fit in `u32` (use
    /// [`checked_pow`](Self::checked_pow) in production).
    pub fn pow(&self, exponent: u32) -> Self {
        self.checked_pow(exponent)
            .expect("FixedDecimal power scale overflow")
    }

    /// Exact integer power.
    ///
    /// # Errors
    /// Returns `Overflow` if `scale * exponent` does not fit in `u32`.
    pub fn checked_pow(&self, exponent: u32) -> NumericResult<Self> {
        let scale = self
            .scale
            .checked_mul(exponent)
            .ok_or(NumericError::Overflow)?;
        Ok(Self::new(self.significand.pow(exponent), scale))
    }

    /// Exact reciprocal.
    ///
    /// # Errors
    /// Returns `DivisionByZero` for zero.
    pub fn recip(&self) -> NumericResult<Quotient> {
        Quotient::from(self).recip()
    }

    /// Exact division, keeping the larger scale as the suggested scale.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `rhs` is zero.
    pub fn checked_div(&self, rhs: &Self) -> NumericResult<Quotient> {
        if rhs.is_zero() {
            return Err(NumericError::DivisionByZero);
        }
        Ok(Quotient::from_rational(
            self.to_rational() / rhs.to_rational(),
            self.scale.max(rhs.scale),
        ))
    }

    fn normalized(&self) -> (BigInt, u32) {
        let ten = BigInt::from(10);
        let mut significand = self.significand.clone();
        let mut scale = self.scale;
        while scale > 0 && !significand.is_zero() && significand.is_multiple_of(&ten) {
            significand /= &ten;
            scale -= 1;
        }
        if significand.is_zero() {
            scale = 0;
        }
        (significand, scale)
    }
}

/// Bracketing significands around a truncated quotient whose remainder is
/// non-zero, ordered so that `lower < exact < upper`.
pub(crate) fn bracket(truncated: BigInt, sign: Sign) -> (BigInt, BigInt) {
    if sign == Sign::Minus {
        let lower = &truncated - 1;
        (lower, truncated)
    } else {
        let upper = &truncated + 1;
        (truncated, upper)
    }
}

/// Round an exact rational to a significand at `scale`.
pub(crate) fn round_rational(
    value: &BigRational,
    scale: u32,
    mode: RoundingMode,
) -> NumericResult<BigInt> {
    let numerator = value.numer() * pow10(scale);
    let denominator = value.denom();
    let (quotient, remainder) = numerator.div_rem(denominator);
    if remainder.is_zero() {
        return Ok(quotient);
    }
    let (lower, upper) = bracket(quotient, numerator.sign());
    let exact = BigRational::new(numerator, denominator.clone());
    pick_value(&exact, &lower, &upper, mode, ZeroRoundingMode::Unnecessary)
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for FixedDecimal {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl PartialEq for FixedDecimal {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FixedDecimal {}

impl PartialOrd for FixedDecimal {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FixedDecimal {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.scale == other.scale {
            return self.significand.cmp(&other.significand);
        }
        let scale = self.scale.max(other.scale);
        self.significand_at(scale).cmp(&other.significand_at(scale))
    }
}

impl Hash for FixedDecimal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.normalized().hash(state);
    }
}

impl Zero for FixedDecimal {
    fn zero() -> Self {
        FixedDecimal::zero()
    }

    fn is_zero(&self) -> bool {
        self.significand.is_zero()
    }
}

impl One for FixedDecimal {
    fn one() -> Self {
        FixedDecimal::one()
    }
}

impl From<BigInt> for FixedDecimal {
    fn from(value: BigInt) -> Self {
        Self::from_integer(value)
    }
}

impl From<i64> for FixedDecimal {
    fn from(value: i64) -> Self {
        Self::from_integer(value)
    }
}

impl Neg for FixedDecimal {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self::new(-self.significand, self.scale)
    }
}

impl Neg for &FixedDecimal {
    type Output = FixedDecimal;

    #[inline]
    fn neg(self) -> Self::Output {
        FixedDecimal::new(-&self.significand, self.scale)
    }
}

impl Add<&FixedDecimal> for &FixedDecimal {
    type Output = FixedDecimal;

    fn add(self, rhs: &FixedDecimal) -> FixedDecimal {
        let scale = self.scale.max(rhs.scale);
        FixedDecimal::new(self.significand_at(scale) + rhs.significand_at(scale), scale)
    }
}

impl Sub<&FixedDecimal> for &FixedDecimal {
    type Output = FixedDecimal;

    fn sub(self, rhs: &FixedDecimal) -> FixedDecimal {
        let scale = self.scale.max(rhs.scale);
        FixedDecimal::new(self.significand_at(scale) - rhs.significand_at(scale), scale)
    }
}

impl Mul<&FixedDecimal> for &FixedDecimal {
    type Output = FixedDecimal;

    fn mul(self, rhs: &FixedDecimal) -> FixedDecimal {
        FixedDecimal::new(&self.significand * &rhs.significand, self.scale + rhs.scale)
    }
}

// Infallible division for ergonomics (panics on zero divisor - use checked_div in production)
impl Div<&FixedDecimal> for &FixedDecimal {
    type Output = Quotient;

    fn div(self, rhs: &FixedDecimal) -> Quotient {
        self.checked_div(rhs).expect("FixedDecimal division by zero")
    }
}

macro_rules! forward_binop {
    ($imp:ident, $method:ident, $output:ty) => {
        impl $imp<FixedDecimal> for FixedDecimal {
            type Output = $output;

            #[inline]
            fn $method(self, rhs: FixedDecimal) -> $output {
                (&self).$method(&rhs)
            }
        }

        impl $imp<&FixedDecimal> for FixedDecimal {
            type Output = $output;

            #[inline]
            fn $method(self, rhs: &FixedDecimal) -> $output {
                (&self).$method(rhs)
            }
        }

        impl $imp<FixedDecimal> for &FixedDecimal {
            type Output = $output;

            #[inline]
            fn $method(self, rhs: FixedDecimal) -> $output {
                self.$method(&rhs)
            }
        }
    };
}

forward_binop!(Add, add, FixedDecimal);
forward_binop!(Sub, sub, FixedDecimal);
forward_binop!(Mul, mul, FixedDecimal);
forward_binop!(Div, div, Quotient);

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Debug for FixedDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FixedDecimal({}, significand={}, scale={})",
            self, self.significand, self.scale
        )
    }
}

impl fmt::Display for FixedDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.significand.magnitude().to_string();
        let sign = if self.is_negative() { "-" } else { "" };
        let scale = self.scale as usize;

        if scale == 0 {
            write!(f, "{}{}", sign, digits)
        } else if digits.len() <= scale {
            write!(f, "{}0.{:0>width$}", sign, digits, width = scale)
        } else {
            let (int_part, frac_part) = digits.split_at(digits.len() - scale);
            write!(f, "{}{}.{}", sign, int_part, frac_part)
        }
    }
}

// ============================================================================
// Conversion from rust_decimal (for API boundaries)
// ============================================================================

impl FixedDecimal {
    /// Convert from rust_decimal::Decimal. Always exact.
    pub fn from_decimal(d: rust_decimal::Decimal) -> Self {
        Self::new(d.mantissa(), d.scale())
    }

    /// Convert to rust_decimal::Decimal.
    ///
    /// # Errors
    /// Returns `Overflow` if the significand exceeds 96 bits or the scale
    /// exceeds 28.
    pub fn to_decimal(&self) -> NumericResult<rust_decimal::Decimal> {
        let mantissa = i128::try_from(&self.significand).map_err(|_| NumericError::Overflow)?;
        rust_decimal::Decimal::try_from_i128_with_scale(mantissa, self.scale)
            .map_err(|_| NumericError::Overflow)
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl std::str::FromStr for FixedDecimal {
    type Err = NumericError;

    /// Parse from a plain decimal literal; the scale is the number of
    /// digits written after the point.
    ///
    /// # Examples
    /// - "123" -> (123, 0)
    /// - "2.20" -> (220, 2)
    /// - "-0.001" -> (-1, 3)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (is_negative, s) = if let Some(rest) = s.strip_prefix('-') {
            (true, rest)
        } else {
            (false, s.strip_prefix('+').unwrap_or(s))
        };

        let (int_str, frac_str) = match s.find('.') {
            Some(pos) => (&s[..pos], &s[pos + 1..]),
            None => (s, ""),
        };

        if int_str.is_empty() && frac_str.is_empty() {
            return Err(NumericError::InvalidInput);
        }
        if !int_str
            .bytes()
            .chain(frac_str.bytes())
            .all(|b| b.is_ascii_digit())
        {
            return Err(NumericError::InvalidInput);
        }

        let digits = format!("{}{}", int_str, frac_str);
        let magnitude: BigInt = digits.parse().map_err(|_| NumericError::InvalidInput)?;
        let scale = u32::try_from(frac_str.len()).map_err(|_| NumericError::InvalidInput)?;
        let significand = if is_negative { -magnitude } else { magnitude };

        Ok(Self::new(significand, scale))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn fd(s: &str) -> FixedDecimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_construction_and_accessors() {
        let x = FixedDecimal::new(12345, 2);
        assert_eq!(x.significand(), &BigInt::from(12345));
        assert_eq!(x.scale(), 2);
        assert_eq!(x.integer_part(), BigInt::from(123));
        assert!(x.is_positive());
        assert!(!x.is_integer());
        assert!(FixedDecimal::new(1200, 2).is_integer());
        assert_eq!(FixedDecimal::new(-5, 1).integer_part(), BigInt::from(0));
    }

    #[test]
    fn test_display() {
        assert_eq!(FixedDecimal::new(12345, 2).to_string(), "123.45");
        assert_eq!(FixedDecimal::new(-5, 2).to_string(), "-0.05");
        assert_eq!(FixedDecimal::new(220, 2).to_string(), "2.20");
        assert_eq!(FixedDecimal::new(0, 3).to_string(), "0.000");
        assert_eq!(FixedDecimal::new(-42, 0).to_string(), "-42");
    }

    #[test]
    fn test_from_str() {
        let x = fd("2.20");
        assert!(x.is_identical(&FixedDecimal::new(220, 2)));
        assert!(fd("-0.001").is_identical(&FixedDecimal::new(-1, 3)));
        assert!(fd(".5").is_identical(&FixedDecimal::new(5, 1)));
        assert_eq!(
            "abc".parse::<FixedDecimal>(),
            Err(NumericError::InvalidInput)
        );
        assert_eq!("".parse::<FixedDecimal>(), Err(NumericError::InvalidInput));
        assert_eq!("1.2.3".parse::<FixedDecimal>(), Err(NumericError::InvalidInput));
    }

    #[test]
    fn test_value_equality_versus_identity() {
        let a = FixedDecimal::new(220, 2);
        let b = FixedDecimal::new(22, 1);
        assert_eq!(a, b);
        assert!(!a.is_identical(&b));
        assert_ne!(a.to_string(), b.to_string());

        use std::collections::HashSet;
        let set: HashSet<_> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_ordering() {
        assert!(fd("2.5") > fd("2.49"));
        assert!(fd("-1.0") < fd("-0.99"));
        assert_eq!(fd("3").cmp(&fd("3.000")), Ordering::Equal);
    }

    #[test]
    fn test_arithmetic_scales() {
        let a = fd("1.25");
        let b = fd("0.5");
        let sum = &a + &b;
        assert!(sum.is_identical(&fd("1.75")));
        let diff = &b - &a;
        assert!(diff.is_identical(&fd("-0.75")));
        let product = &a * &b;
        assert!(product.is_identical(&fd("0.625")));
        assert!((-a.clone()).is_identical(&fd("-1.25")));
        let quotient = a / b;
        assert_eq!(quotient.scale(), 2);
        assert_eq!(
            quotient.value(),
            &BigRational::new(BigInt::from(5), BigInt::from(2))
        );
    }

    #[test]
    fn test_checked_div_by_zero() {
        let result = fd("1").checked_div(&fd("0.00"));
        assert_eq!(result.unwrap_err(), NumericError::DivisionByZero);
        assert_eq!(fd("0").recip().unwrap_err(), NumericError::DivisionByZero);
    }

    #[test]
    fn test_pow_exact() {
        let x = fd("1.1");
        assert!(x.pow(3).is_identical(&fd("1.331")));
        assert!(x.pow(0).is_identical(&fd("1")));
        assert_eq!(x.checked_pow(2), Ok(fd("1.21")));
    }

    #[test]
    fn test_pow_scale_overflow() {
        let x = FixedDecimal::new(1, u32::MAX / 2);
        assert_eq!(x.checked_pow(3), Err(NumericError::Overflow));
        assert!(x.checked_pow(2).is_ok());
    }

    #[test]
    #[should_panic(expected = "scale overflow")]
    fn test_pow_panics_on_scale_overflow() {
        let _ = FixedDecimal::new(1, u32::MAX / 2).pow(3);
    }

    #[test]
    fn test_round_to_scale_scenarios() {
        let x = FixedDecimal::new(224, 2);
        assert_eq!(
            x.round_to_scale(1, RoundingMode::UP).unwrap().to_string(),
            "2.3"
        );
        let y = FixedDecimal::new(225, 1);
        assert_eq!(
            y.round_to_scale(0, RoundingMode::HALF_EVEN).unwrap().to_string(),
            "22"
        );
        assert_eq!(
            fd("23.5").round_to_scale(0, RoundingMode::HALF_EVEN).unwrap().to_string(),
            "24"
        );
    }

    #[test]
    fn test_round_to_scale_negative_values() {
        let x = fd("-2.25");
        let r = |m| x.round_to_scale(1, m).unwrap().to_string();
        assert_eq!(r(RoundingMode::UP), "-2.3");
        assert_eq!(r(RoundingMode::DOWN), "-2.2");
        assert_eq!(r(RoundingMode::CEILING), "-2.2");
        assert_eq!(r(RoundingMode::FLOOR), "-2.3");
        assert_eq!(r(RoundingMode::HALF_UP), "-2.3");
        assert_eq!(r(RoundingMode::HALF_DOWN), "-2.2");
        assert_eq!(r(RoundingMode::HALF_EVEN), "-2.2");
        assert_eq!(r(RoundingMode::HALF_ODD), "-2.3");
    }

    #[test]
    fn test_round_to_scale_increase_is_exact() {
        let x = fd("1.5");
        let y = x.round_to_scale(4, RoundingMode::UNNECESSARY).unwrap();
        assert!(y.is_identical(&fd("1.5000")));
        assert_eq!(x, y);
    }

    #[test]
    fn test_with_scale_exact_and_signum() {
        let x = fd("-1.5");
        assert!(x.with_scale_exact(3).unwrap().is_identical(&fd("-1.500")));
        assert!(x.with_scale_exact(0).is_err());
        assert_eq!(x.signum(), -1);
        assert_eq!(fd("0.00").signum(), 0);
        assert_eq!(fd("7").signum(), 1);
    }

    #[test]
    fn test_round_to_scale_unnecessary() {
        assert_eq!(
            fd("1.25").round_to_scale(1, RoundingMode::UNNECESSARY),
            Err(NumericError::PrecisionLoss)
        );
        let exact = fd("1.20").round_to_scale(1, RoundingMode::UNNECESSARY).unwrap();
        assert!(exact.is_identical(&fd("1.2")));
    }

    #[test]
    fn test_round_to_scale_mean_modes() {
        // Geometric mean of 2 and 3 is ~2.449
        let r = |s: &str, m| fd(s).round_to_scale(0, m).unwrap().to_string();
        assert_eq!(r("2.44", RoundingMode::GEOMETRIC_EVEN), "2");
        assert_eq!(r("2.45", RoundingMode::GEOMETRIC_EVEN), "3");
        // Harmonic mean of 2 and 3 is 2.4
        assert_eq!(r("2.4", RoundingMode::HARMONIC_UP), "3");
        assert_eq!(r("2.4", RoundingMode::HARMONIC_DOWN), "2");
        // Quadratic mean of 2 and 3 is ~2.55
        assert_eq!(r("2.54", RoundingMode::QUADRATIC_EVEN), "2");
        assert_eq!(r("2.56", RoundingMode::QUADRATIC_EVEN), "3");
        // Cubic mean of 2 and 3 is ~2.596
        assert_eq!(r("2.59", RoundingMode::CUBIC_EVEN), "2");
        assert_eq!(r("2.6", RoundingMode::CUBIC_EVEN), "3");
        // Both candidates negative mirror the positive result.
        assert_eq!(r("-2.45", RoundingMode::GEOMETRIC_EVEN), "-3");
    }

    #[test]
    fn test_from_rational() {
        let third = BigRational::new(BigInt::from(1), BigInt::from(3));
        let x = FixedDecimal::from_rational(&third, 4, RoundingMode::HALF_UP).unwrap();
        assert_eq!(x.to_string(), "0.3333");
        let y = FixedDecimal::from_rational(&-third, 2, RoundingMode::FLOOR).unwrap();
        assert_eq!(y.to_string(), "-0.34");
    }

    #[test]
    fn test_from_decimal() {
        use rust_decimal::Decimal;

        let d = Decimal::new(12345, 2);
        let x = FixedDecimal::from_decimal(d);
        assert!(x.is_identical(&fd("123.45")));
    }

    #[test]
    fn test_to_decimal() {
        let x = fd("123.456");
        assert_eq!(x.to_decimal().unwrap().to_string(), "123.456");

        let huge = FixedDecimal::new(BigInt::from(10).pow(40), 0);
        assert_eq!(huge.to_decimal(), Err(NumericError::Overflow));
    }

    #[test]
    fn test_zero_and_one_traits() {
        assert!(<FixedDecimal as Zero>::zero().is_zero());
        assert_eq!(<FixedDecimal as One>::one(), fd("1.000"));
    }
}
