// ============================================================================
// Numeric Module
// Arbitrary-precision fixed-point values and exact quotients
// ============================================================================
//
// This module provides:
// - FixedDecimal: BigInt significand with an explicit decimal scale
// - Quotient: exact rational with a suggested, not yet applied, scale
// - NumericError: Error types for rounding and function evaluation
// - pow10: shared memo table for powers of ten
// - round_integer_to_allowed_remainders: residue-set rounding on integers
//
// Design principles:
// - No floating-point operations on values (floats only for estimates)
// - All rounding returns Result (no panics)
// - Values are immutable; scale changes build new values

mod errors;
mod fixed_decimal;
mod pow10;
mod quotient;
mod remainders;

pub use errors::{NumericError, NumericResult};
pub use fixed_decimal::FixedDecimal;
pub use pow10::{pow10, Pow10Cache};
pub use quotient::Quotient;
pub use remainders::round_integer_to_allowed_remainders;
