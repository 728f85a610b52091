// ============================================================================
// Engine Module
// Owned configuration and result cache for the transcendental functions
// ============================================================================
//
// This module provides:
// - LongMath: the handle every transcendental operation is called on
// - MathConfig / OverflowPolicy: precision ceiling and its enforcement
// - FunctionCache: most-precise-wins memo for exp, log and pi

mod cache;
mod config;
mod long_math;

pub use cache::{CacheKey, CachedFunction, FunctionCache};
pub use config::{MathConfig, OverflowPolicy};
pub use long_math::{LongMath, INTERNAL_MODE};
