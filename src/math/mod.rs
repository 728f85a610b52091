// ============================================================================
// Math Module
// Integer roots and the precision-managed transcendental functions
// ============================================================================
//
// This module provides:
// - Integer square/cube roots with remainder (bitwise and wordwise)
// - LongMath::{sqrt, cbrt} with exact mean-boundary detection
// - LongMath::{exp, exp2, exp10, log, log2, log10, power, pi}
//
// Every function estimates a working scale, computes there, and rounds once
// in the caller's mode.

mod estimate;
mod exp;
mod log;
mod pi;
mod power;
mod roots;

pub use roots::{
    cbrt_with_remainder, cbrtb_with_remainder, cbrtw_with_remainder, sqrt_with_remainder,
    sqrtb_with_remainder, sqrtw_with_remainder,
};
