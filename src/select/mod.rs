//! Selection schemes: map a population's scores to the index of a chosen
//! genome. Each scheme is independent of the (orthogonal) scaling scheme
//! that produced the weights it draws against.

pub mod rank;
pub mod roulette;
pub mod tournament;
pub mod uniform;

use crate::random::RandomSource;

/// The closed set of selection schemes this crate names, dispatched the
/// same way [`crate::crossover::CrossoverKind`] is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SelectKind {
    Roulette,
    Tournament { k: usize },
    Rank,
    Uniform,
}

impl SelectKind {
    /// `weights` are already-scaled, non-negative selection weights in
    /// population order (see [`crate::scaling`]) — higher is always better,
    /// regardless of the population's underlying [`crate::genome::FitnessOrdering`],
    /// since that orientation is folded in by the scaling step. `weights`
    /// must not be empty.
    pub fn select(&self, weights: &[f64], rng: &mut RandomSource) -> usize {
        debug_assert!(!weights.is_empty(), "cannot select from an empty population");
        match self {
            SelectKind::Roulette => roulette::select(weights, rng),
            SelectKind::Tournament { k } => tournament::select(weights, *k, rng),
            SelectKind::Rank => rank::select(weights, rng),
            SelectKind::Uniform => uniform::select(weights.len(), rng),
        }
    }
}
