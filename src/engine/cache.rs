// ============================================================================
// Function Result Cache
// Most-precise-wins memo of transcendental results
// ============================================================================

use crate::numeric::FixedDecimal;
use crate::rounding::RoundingMode;
use parking_lot::RwLock;
use std::collections::HashMap;

/// Functions whose results are worth keeping between calls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CachedFunction {
    Exp,
    Log,
    Pi,
}

/// Cache key: function, a small integer argument, and the internal mode the
/// value was rounded with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub function: CachedFunction,
    pub argument: i64,
    pub mode: RoundingMode,
}

impl CacheKey {
    pub fn new(function: CachedFunction, argument: i64, mode: RoundingMode) -> Self {
        Self {
            function,
            argument,
            mode,
        }
    }
}

/// Thread-safe result cache.
///
/// An entry is replaced only by a strictly more precise value, so a lookup
/// never returns less precision than any earlier insert.
#[derive(Default)]
pub struct FunctionCache {
    entries: RwLock<HashMap<CacheKey, FixedDecimal>>,
}

impl FunctionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored value if it carries at least `min_scale` digits.
    pub fn get(&self, key: &CacheKey, min_scale: u32) -> Option<FixedDecimal> {
        self.entries
            .read()
            .get(key)
            .filter(|value| value.scale() >= min_scale)
            .cloned()
    }

    /// Store `value` unless an entry at least as precise exists.
    ///
    /// Returns `true` if the value was stored.
    pub fn insert(&self, key: CacheKey, value: FixedDecimal) -> bool {
        let mut entries = self.entries.write();
        match entries.get(&key) {
            Some(existing) if existing.scale() >= value.scale() => false,
            _ => {
                entries.insert(key, value);
                true
            },
        }
    }

    /// Scale of the stored entry, if any.
    pub fn cached_scale(&self, key: &CacheKey) -> Option<u32> {
        self.entries.read().get(key).map(FixedDecimal::scale)
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    pub fn clear(&self) {
        self.entries.write().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key() -> CacheKey {
        CacheKey::new(CachedFunction::Pi, 0, RoundingMode::HALF_EVEN)
    }

    #[test]
    fn test_insert_and_get() {
        let cache = FunctionCache::new();
        assert!(cache.is_empty());
        assert!(cache.insert(key(), FixedDecimal::new(314159, 5)));
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.cached_scale(&key()), Some(5));
        assert!(cache.get(&key(), 3).is_some());
        assert!(cache.get(&key(), 6).is_none());
    }

    #[test]
    fn test_never_downgrades() {
        let cache = FunctionCache::new();
        cache.insert(key(), FixedDecimal::new(314159265, 8));
        assert!(!cache.insert(key(), FixedDecimal::new(314, 2)));
        assert_eq!(cache.cached_scale(&key()), Some(8));
        assert!(cache.insert(key(), FixedDecimal::new(31415926536u64, 10)));
        assert_eq!(cache.cached_scale(&key()), Some(10));
    }

    #[test]
    fn test_keys_are_distinct_per_mode() {
        let cache = FunctionCache::new();
        cache.insert(key(), FixedDecimal::new(3, 0));
        let other = CacheKey::new(CachedFunction::Pi, 0, RoundingMode::HALF_UP);
        assert!(cache.get(&other, 0).is_none());
        cache.clear();
        assert!(cache.is_empty());
    }
}
