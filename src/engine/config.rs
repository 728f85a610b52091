// ============================================================================
// Engine Configuration
// Precision ceiling and overflow handling for the function engine
// ============================================================================

use crate::numeric::{NumericError, NumericResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Overflow Policy
// ============================================================================

/// What to do when a requested precision exceeds the configured maximum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OverflowPolicy {
    /// Reject the operation with `PrecisionOverflow`
    #[default]
    Error,
    /// Silently continue at the maximum precision
    Clamp,
    /// Continue at the maximum precision and log a warning
    ClampWithWarning,
}

// ============================================================================
// Complete Engine Configuration
// ============================================================================

/// Configuration shared by every call on a [`LongMath`](super::LongMath) handle
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MathConfig {
    /// Largest precision (digits after the point) a caller may request
    pub max_precision: u32,

    /// Handling of requests above `max_precision`
    pub overflow_policy: OverflowPolicy,
}

impl MathConfig {
    /// Default ceiling on requested precision
    pub const DEFAULT_MAX_PRECISION: u32 = 100_000;

    pub fn new() -> Self {
        Self {
            max_precision: Self::DEFAULT_MAX_PRECISION,
            overflow_policy: OverflowPolicy::Error,
        }
    }

    /// Builder method: Set maximum precision
    pub fn with_max_precision(mut self, max_precision: u32) -> Self {
        self.max_precision = max_precision;
        self
    }

    /// Builder method: Set overflow policy
    pub fn with_overflow_policy(mut self, policy: OverflowPolicy) -> Self {
        self.overflow_policy = policy;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> NumericResult<()> {
        if self.max_precision == 0 {
            return Err(NumericError::InvalidArgument(
                "maximum precision must be positive",
            ));
        }
        Ok(())
    }

    /// Apply the ceiling to a requested precision.
    ///
    /// # Errors
    /// Returns `PrecisionOverflow` under [`OverflowPolicy::Error`].
    pub fn check_precision(&self, requested: u64) -> NumericResult<u32> {
        if requested <= u64::from(self.max_precision) {
            // Bounded by a u32 maximum just above.
            return Ok(requested as u32);
        }
        match self.overflow_policy {
            OverflowPolicy::Error => Err(NumericError::PrecisionOverflow {
                requested,
                max: self.max_precision,
            }),
            OverflowPolicy::Clamp => Ok(self.max_precision),
            OverflowPolicy::ClampWithWarning => {
                tracing::warn!(
                    requested,
                    max = self.max_precision,
                    "precision exceeds configured maximum, clamping"
                );
                Ok(self.max_precision)
            },
        }
    }
}

impl Default for MathConfig {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl MathConfig {
    /// Reject anything above `max_precision`
    pub fn strict(max_precision: u32) -> Self {
        Self::new().with_max_precision(max_precision)
    }

    /// Clamp to `max_precision` and warn
    pub fn clamping(max_precision: u32) -> Self {
        Self::new()
            .with_max_precision(max_precision)
            .with_overflow_policy(OverflowPolicy::ClampWithWarning)
    }
}
