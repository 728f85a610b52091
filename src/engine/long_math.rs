// ============================================================================
// LongMath Engine
// Owned handle for configuration and cached transcendental results
// ============================================================================

use super::cache::{CacheKey, CachedFunction, FunctionCache};
use super::config::{MathConfig, OverflowPolicy};
use crate::numeric::{FixedDecimal, NumericResult};
use crate::rounding::RoundingMode;
use parking_lot::RwLock;

/// Mode used for every intermediate rounding and for cache entries
pub const INTERNAL_MODE: RoundingMode = RoundingMode::HALF_EVEN;

/// Precision-managed function engine.
///
/// Each handle owns its configuration and result cache; share one behind an
/// `Arc` to reuse cached values across threads. The transcendental
/// operations (`sqrt`, `exp`, `log`, `power`, `pi`, ...) are defined in the
/// [`math`](crate::math) module.
///
/// # Example
/// ```
/// use long_decimal::prelude::*;
///
/// let math = LongMath::new();
/// let pi = math.pi(10, RoundingMode::HALF_EVEN).unwrap();
/// assert_eq!(pi.to_string(), "3.1415926536");
/// ```
pub struct LongMath {
    config: RwLock<MathConfig>,
    cache: FunctionCache,
}

impl LongMath {
    /// Create an engine with the default configuration
    pub fn new() -> Self {
        Self {
            config: RwLock::new(MathConfig::default()),
            cache: FunctionCache::new(),
        }
    }

    /// Create an engine from a validated configuration
    pub fn with_config(config: MathConfig) -> NumericResult<Self> {
        config.validate()?;
        Ok(Self {
            config: RwLock::new(config),
            cache: FunctionCache::new(),
        })
    }

    /// Snapshot of the current configuration
    pub fn config(&self) -> MathConfig {
        self.config.read().clone()
    }

    pub fn set_max_precision(&self, max_precision: u32) -> NumericResult<()> {
        let updated = self.config().with_max_precision(max_precision);
        updated.validate()?;
        *self.config.write() = updated;
        Ok(())
    }

    pub fn set_overflow_policy(&self, policy: OverflowPolicy) {
        self.config.write().overflow_policy = policy;
    }

    /// Result cache owned by this engine
    pub fn cache(&self) -> &FunctionCache {
        &self.cache
    }

    /// Apply the configured ceiling to a caller's precision.
    pub(crate) fn check_precision(&self, requested: u32) -> NumericResult<u32> {
        self.config.read().check_precision(u64::from(requested))
    }

    /// Cached value of `function(argument)` with at least `scale` digits,
    /// computing and storing it on a miss.
    ///
    /// The returned value may carry more digits than requested.
    pub(crate) fn cached_or_compute<F>(
        &self,
        function: CachedFunction,
        argument: i64,
        scale: u32,
        compute: F,
    ) -> NumericResult<FixedDecimal>
    where
        F: FnOnce(u32) -> NumericResult<FixedDecimal>,
    {
        let key = CacheKey::new(function, argument, INTERNAL_MODE);
        if let Some(value) = self.cache.get(&key, scale) {
            return Ok(value);
        }
        tracing::debug!(?function, argument, scale, "function cache miss");
        let value = compute(scale)?;
        self.cache.insert(key, value.clone());
        Ok(value)
    }
}

impl Default for LongMath {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::NumericError;

    #[test]
    fn test_with_config_validates() {
        assert!(LongMath::with_config(MathConfig::new().with_max_precision(0)).is_err());
        let math = LongMath::with_config(MathConfig::strict(20)).unwrap();
        assert_eq!(math.config().max_precision, 20);
    }

    #[test]
    fn test_runtime_reconfiguration() {
        let math = LongMath::new();
        math.set_max_precision(10).unwrap();
        assert_eq!(
            math.check_precision(11),
            Err(NumericError::PrecisionOverflow {
                requested: 11,
                max: 10
            })
        );
        math.set_overflow_policy(OverflowPolicy::Clamp);
        assert_eq!(math.check_precision(11), Ok(10));
        assert!(math.set_max_precision(0).is_err());
        assert_eq!(math.config().max_precision, 10);
    }

    #[test]
    fn test_cached_or_compute_reuses_value() {
        let math = LongMath::new();
        let mut calls = 0;
        let first = math
            .cached_or_compute(CachedFunction::Exp, 1, 5, |scale| {
                calls += 1;
                Ok(FixedDecimal::new(271828, scale))
            })
            .unwrap();
        assert_eq!(first.scale(), 5);
        let second = math
            .cached_or_compute(CachedFunction::Exp, 1, 3, |_| {
                Err(NumericError::InvalidArgument("must not recompute"))
            })
            .unwrap();
        assert!(second.is_identical(&first));
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_engine_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<LongMath>();
    }
}
