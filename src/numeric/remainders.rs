// ============================================================================
// Remainder Rounding
// Rounds to the nearest value congruent to an allowed residue
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::fixed_decimal::FixedDecimal;
use super::pow10::pow10;
use crate::rounding::{pick_value, resolve_zero, RoundingMode, ZeroRoundingMode};
use num_bigint::BigInt;
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::Signed;
use smallvec::SmallVec;

type Residues = SmallVec<[BigInt; 8]>;

/// Round an integer to the closest value whose remainder modulo `modulus`
/// is in `residues`.
///
/// Plain rounding to a multiple of `m` is the special case `residues = [0]`.
///
/// # Errors
/// - `EmptyResidueSet` / `ModulusTooSmall` for invalid residue sets
/// - rounding errors from [`pick_value`]; `AmbiguousZero` when zero must be
///   decided by `zero_mode` and that is `Unnecessary`
pub fn round_integer_to_allowed_remainders(
    value: &BigInt,
    residues: &[BigInt],
    modulus: &BigInt,
    mode: RoundingMode,
    zero_mode: ZeroRoundingMode,
) -> NumericResult<BigInt> {
    round_to_residues(
        &BigRational::from_integer(value.clone()),
        residues,
        modulus,
        mode,
        zero_mode,
    )
}

impl FixedDecimal {
    /// Round to `new_scale` digits such that the resulting significand is
    /// congruent to one of `residues` modulo `modulus`.
    ///
    /// # Example
    /// ```
    /// use long_decimal::numeric::FixedDecimal;
    /// use long_decimal::rounding::{RoundingMode, ZeroRoundingMode};
    /// use num_bigint::BigInt;
    ///
    /// // Round to the nearest 0.05
    /// let x = FixedDecimal::new(1234, 3);
    /// let y = x
    ///     .round_to_allowed_remainders(
    ///         2,
    ///         &[BigInt::from(0)],
    ///         &BigInt::from(5),
    ///         RoundingMode::HALF_UP,
    ///         ZeroRoundingMode::Unnecessary,
    ///     )
    ///     .unwrap();
    /// assert_eq!(y.to_string(), "1.25");
    /// ```
    pub fn round_to_allowed_remainders(
        &self,
        new_scale: u32,
        residues: &[BigInt],
        modulus: &BigInt,
        mode: RoundingMode,
        zero_mode: ZeroRoundingMode,
    ) -> NumericResult<FixedDecimal> {
        let value = if new_scale >= self.scale() {
            BigRational::from_integer(self.significand_at(new_scale))
        } else {
            BigRational::new(
                self.significand().clone(),
                pow10(self.scale() - new_scale),
            )
        };
        let significand = round_to_residues(&value, residues, modulus, mode, zero_mode)?;
        Ok(FixedDecimal::new(significand, new_scale))
    }
}

fn round_to_residues(
    value: &BigRational,
    residues: &[BigInt],
    modulus: &BigInt,
    mode: RoundingMode,
    zero_mode: ZeroRoundingMode,
) -> NumericResult<BigInt> {
    let allowed = normalize(residues, modulus)?;
    let floor = value.floor().to_integer();
    let base = &floor - floor.mod_floor(modulus);

    if value.is_integer() && allowed.binary_search(&floor.mod_floor(modulus)).is_ok() {
        return Ok(floor);
    }

    let below = |c: &BigInt| BigRational::from_integer(c.clone()) < *value;
    let above = |c: &BigInt| BigRational::from_integer(c.clone()) > *value;

    let lower = allowed
        .iter()
        .rev()
        .map(|r| &base + r)
        .find(|c| below(c))
        .unwrap_or_else(|| &base - modulus + &allowed[allowed.len() - 1]);
    let upper = allowed
        .iter()
        .map(|r| &base + r)
        .find(|c| above(c))
        .unwrap_or_else(|| &base + modulus + &allowed[0]);

    if mode.major().requires_common_sign() && lower.is_negative() && upper.is_positive() {
        // Never cross zero: keep the candidate on the value's side.
        return if value.is_positive() {
            Ok(upper)
        } else if value.is_negative() {
            Ok(lower)
        } else {
            resolve_zero(&lower, &upper, zero_mode)
        };
    }

    pick_value(value, &lower, &upper, mode, zero_mode)
}

/// Residues reduced into `[0, modulus)`, sorted and deduplicated.
fn normalize(residues: &[BigInt], modulus: &BigInt) -> NumericResult<Residues> {
    if residues.is_empty() {
        return Err(NumericError::EmptyResidueSet);
    }
    if *modulus < BigInt::from(2) {
        return Err(NumericError::ModulusTooSmall);
    }
    let mut allowed: Residues = residues.iter().map(|r| r.mod_floor(modulus)).collect();
    allowed.sort();
    allowed.dedup();
    debug_assert!(allowed.iter().all(|r| !r.is_negative() && r < modulus));
    Ok(allowed)
}
