// ============================================================================
// Rounding Module
// Rounding-mode registry and the boundary-resolution algorithm
// ============================================================================
//
// This module provides:
// - RoundingMode: registered (major, minor) pairs with inverse maps
// - ZeroRoundingMode: policy for exact zero between signed candidates
// - pick_value / pick_root: exact choice between two bracketing candidates

mod mode;
mod pick;

pub use mode::{MajorMode, MinorMode, RoundingMode, ZeroRoundingMode};
pub use pick::{pick_root, pick_value};
pub(crate) use pick::resolve_zero;
