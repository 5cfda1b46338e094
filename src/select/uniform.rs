//! Uniform selection: ignores scores entirely.

use crate::random::RandomSource;

pub fn select(len: usize, rng: &mut RandomSource) -> usize {
    rng.uniform_range(0, len.saturating_sub(1))
}
