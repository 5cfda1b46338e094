//! The single random-number stream every operator in this crate routes
//! through. Each [`RandomSource`] owns its own generator instance so that
//! independent GA instances never share state, unlike a thread-local
//! singleton.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

#[derive(Debug, Clone)]
pub struct RandomSource {
    rng: SmallRng,
}

impl RandomSource {
    pub fn from_seed(seed: u64) -> Self {
        RandomSource { rng: SmallRng::seed_from_u64(seed) }
    }

    pub fn from_entropy() -> Self {
        RandomSource { rng: SmallRng::from_entropy() }
    }

    /// Uniform integer in `[lo, hi]`, inclusive on both ends.
    pub fn uniform_range(&mut self, lo: usize, hi: usize) -> usize {
        if lo >= hi {
            return lo;
        }
        self.rng.gen_range(lo..=hi)
    }

    pub fn uniform_bit(&mut self) -> bool {
        self.rng.gen::<bool>()
    }

    /// `true` with probability `p`, clamped to `[0, 1]`.
    pub fn flip(&mut self, p: f64) -> bool {
        if p <= 0.0 {
            return false;
        }
        if p >= 1.0 {
            return true;
        }
        self.rng.gen_bool(p)
    }

    /// Uniform real in `[0, 1)`.
    pub fn uniform_real(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    pub fn inner_mut(&mut self) -> &mut SmallRng {
        &mut self.rng
    }
}
