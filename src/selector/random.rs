// Uniform random source: the swap-ready abstraction for topic draws.
//
// The selector never touches a global RNG directly. Production code uses the
// thread-local generator; `--seed` runs and tests plug in something
// reproducible.

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Draws an index uniformly from `0..len`.
///
/// Implementations must be shareable across threads: the selector itself is
/// immutable and may be used by many callers at once.
pub trait UniformSource: Send + Sync {
    /// Pick an index in `0..len`. Only called with `len > 0`.
    fn pick_index(&self, len: usize) -> usize;
}

/// Default source backed by `rand::rng()` (thread-local, OS-seeded).
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngSource;

impl UniformSource for ThreadRngSource {
    fn pick_index(&self, len: usize) -> usize {
        rand::rng().random_range(0..len)
    }
}

/// Reproducible source: the same seed yields the same sequence of draws.
pub struct SeededSource {
    rng: Mutex<StdRng>,
}

impl SeededSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl UniformSource for SeededSource {
    fn pick_index(&self, len: usize) -> usize {
        // A poisoned lock only means another draw panicked mid-call; the
        // generator state is still usable.
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        rng.random_range(0..len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thread_rng_in_range() {
        let source = ThreadRngSource;
        for len in 1..20 {
            assert!(source.pick_index(len) < len);
        }
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let a = SeededSource::new(42);
        let b = SeededSource::new(42);
        let draws_a: Vec<usize> = (0..16).map(|_| a.pick_index(10)).collect();
        let draws_b: Vec<usize> = (0..16).map(|_| b.pick_index(10)).collect();
        assert_eq!(draws_a, draws_b);
        assert!(draws_a.iter().all(|&i| i < 10));
    }

    #[test]
    fn test_single_element_pool_always_zero() {
        let source = SeededSource::new(7);
        assert!((0..10).all(|_| source.pick_index(1) == 0));
    }
}
