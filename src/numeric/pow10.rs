// ============================================================================
// Powers of Ten
// Memoized 10^n for arbitrary n using nested small/medium/block caches
// ============================================================================

use num_bigint::BigInt;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Exponents up to this bound are precomputed eagerly.
const SMALL_LIMIT: u32 = 64;

/// Exponents below this bound are cached individually; larger ones are
/// assembled from cached `10^(BLOCK_SIZE * k)` blocks.
const BLOCK_SIZE: u32 = 1024;

/// Lock-guarded memo table for powers of ten.
///
/// Reads take a shared lock; a miss computes outside the lock and inserts
/// under the write lock. Concurrent misses for the same exponent compute the
/// same value, so last-writer-wins is harmless.
pub struct Pow10Cache {
    small: Vec<BigInt>,
    medium: RwLock<HashMap<u32, BigInt>>,
    blocks: RwLock<HashMap<u32, BigInt>>,
}

impl Pow10Cache {
    pub fn new() -> Self {
        let mut small = Vec::with_capacity(SMALL_LIMIT as usize + 1);
        let mut current = BigInt::from(1);
        for _ in 0..=SMALL_LIMIT {
            small.push(current.clone());
            current *= 10;
        }
        Self {
            small,
            medium: RwLock::new(HashMap::new()),
            blocks: RwLock::new(HashMap::new()),
        }
    }

    /// Compute `10^n`.
    pub fn get(&self, n: u32) -> BigInt {
        if n <= SMALL_LIMIT {
            return self.small[n as usize].clone();
        }
        if n < BLOCK_SIZE {
            return self.medium(n);
        }
        let blocks = n / BLOCK_SIZE;
        let rest = n % BLOCK_SIZE;
        let mut result = self.block(blocks);
        if rest > 0 {
            result *= self.get(rest);
        }
        result
    }

    /// Number of memoized entries beyond the eager table.
    pub fn cached_entries(&self) -> usize {
        self.medium.read().len() + self.blocks.read().len()
    }

    fn medium(&self, n: u32) -> BigInt {
        if let Some(value) = self.medium.read().get(&n) {
            return value.clone();
        }
        // Split so the recursion lands in the eager table.
        let half = n / 2;
        let value = self.get(half) * self.get(n - half);
        self.medium.write().insert(n, value.clone());
        value
    }

    fn block(&self, k: u32) -> BigInt {
        if let Some(value) = self.blocks.read().get(&k) {
            return value.clone();
        }
        let value = if k == 1 {
            self.medium(BLOCK_SIZE / 2) * self.medium(BLOCK_SIZE / 2)
        } else {
            let half = k / 2;
            self.block(half) * self.block(k - half)
        };
        self.blocks.write().insert(k, value.clone());
        value
    }
}

impl Default for Pow10Cache {
    fn default() -> Self {
        Self::new()
    }
}

static POW10: LazyLock<Pow10Cache> = LazyLock::new(Pow10Cache::new);

/// `10^n` from the shared memo table.
#[inline]
pub fn pow10(n: u32) -> BigInt {
    POW10.get(n)
}
