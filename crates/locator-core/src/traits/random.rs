//! Injectable randomness for phrase selection.

use rand::Rng;

/// Picks an index in `0..len`. `len` is always non-zero.
pub trait IndexSource: Send + Sync + std::fmt::Debug + 'static {
    /// Choose an index into a pool of `len` entries.
    fn pick(&self, len: usize) -> usize;
}

/// Uniform selection using the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngSource;

impl IndexSource for ThreadRngSource {
    fn pick(&self, len: usize) -> usize {
        rand::rng().random_range(0..len)
    }
}

/// Always returns the same index, clamped to the pool.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedIndexSource(pub usize);

impl IndexSource for FixedIndexSource {
    fn pick(&self, len: usize) -> usize {
        self.0.min(len.saturating_sub(1))
    }
}
