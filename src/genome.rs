//! The abstract genome identity shared by every concrete representation:
//! a score, a resize policy, and the evaluated/unevaluated state machine.

use std::fmt;

/// How a genome's length may change over its lifetime.
///
/// Grounded on the source's `minLen == maxLen ⇒ fixed` convention, but
/// expressed as a tagged enum instead of an equality check so the fixed
/// case can't silently become a bounded case of width zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizePolicy {
    Fixed(usize),
    Bounded(usize, usize),
}

impl ResizePolicy {
    pub fn min_len(&self) -> usize {
        match self {
            ResizePolicy::Fixed(n) => *n,
            ResizePolicy::Bounded(lo, _) => *lo,
        }
    }

    pub fn max_len(&self) -> usize {
        match self {
            ResizePolicy::Fixed(n) => *n,
            ResizePolicy::Bounded(_, hi) => *hi,
        }
    }

    pub fn is_fixed(&self) -> bool {
        matches!(self, ResizePolicy::Fixed(_))
    }

    /// Two policies are compatible for a same-behavior crossover if both are
    /// fixed or both are bounded; mixing the two is a `SameBehaviorRequired`
    /// error at the call site.
    pub fn same_behavior(&self, other: &ResizePolicy) -> bool {
        self.is_fixed() == other.is_fixed()
    }
}

/// Whether higher or lower scores are preferred. Threaded through every
/// population and statistics call that ranks genomes, replacing the
/// source's `minimaxi` flag scattered across call sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitnessOrdering {
    Maximize,
    Minimize,
}

impl FitnessOrdering {
    /// `true` if `a` is strictly better than `b` under this ordering.
    pub fn is_better(&self, a: f64, b: f64) -> bool {
        match self {
            FitnessOrdering::Maximize => a > b,
            FitnessOrdering::Minimize => a < b,
        }
    }

    pub fn worst_value(&self) -> f64 {
        match self {
            FitnessOrdering::Maximize => f64::NEG_INFINITY,
            FitnessOrdering::Minimize => f64::INFINITY,
        }
    }
}

/// Shared state every genome representation in this crate exposes: a
/// length, a resize policy, and a score that is cleared whenever content
/// changes.
pub trait Genome: Clone + fmt::Debug {
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    fn resize_policy(&self) -> ResizePolicy;
    fn score(&self) -> Option<f64>;
    fn set_score(&mut self, score: Option<f64>);

    fn is_evaluated(&self) -> bool {
        self.score().is_some()
    }

    fn invalidate(&mut self) {
        self.set_score(None);
    }
}

/// The user-supplied objective function. `None` marks a genome invalid; it
/// sorts last regardless of [`FitnessOrdering`].
pub trait Fitness {
    type Genome: Genome;

    fn evaluate(&mut self, genome: &Self::Genome) -> Option<f64>;
}

/// The operator surface the driver needs from a genome representation:
/// crossover, mutation, and a comparator. Both `ArrayGenome<T>` and
/// `ArrayAlleleGenome<T>` implement this against the same
/// [`crate::crossover::CrossoverKind`] sum type, so the driver in
/// `crate::evolve` is written once against `Evolvable` rather than once per
/// representation.
pub trait Evolvable: Genome {
    fn crossover(
        mom: &Self,
        dad: &Self,
        kind: crate::crossover::CrossoverKind,
        rng: &mut crate::random::RandomSource,
    ) -> crate::errors::GaResult<Vec<Self>>;

    fn mutate(&mut self, p: f64, rng: &mut crate::random::RandomSource) -> usize;

    /// `-1.0` for incompatible genomes (e.g. differing lengths), else a
    /// distance in `[0, 1]`.
    fn compare(&self, other: &Self) -> f64;
}
