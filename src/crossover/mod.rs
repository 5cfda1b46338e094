//! Recombination operators over [`ArrayGenome<T>`].
//!
//! Each operator is a free function generic over the genome's element type;
//! the concrete Rust type `ArrayGenome<T>` is itself the "object type" the
//! source checks at runtime, so a mismatched crossover simply fails to
//! compile rather than needing an `ObjectTypeMismatch` check — only the
//! *data*-dependent preconditions (equal length, matching resize behavior)
//! remain runtime errors.

pub mod cx;
pub mod even_odd;
pub mod ox;
pub mod pmx;
pub mod single_point;
pub mod two_point;
pub mod uniform;

use crate::allele::Allele;
use crate::chromosome::array::ArrayGenome;
use crate::errors::GaResult;
use crate::random::RandomSource;

/// The closed set of crossover operators this crate names. Dispatch mirrors
/// the teacher's enum-over-strategy pattern (`Crossover`/`Select`): a small
/// sum type instead of a boxed closure, so the whole dispatch table is known
/// at a glance and exhaustive-matched at the call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrossoverKind {
    Uniform,
    SinglePoint,
    TwoPoint,
    EvenOdd,
    Pmx,
    Ox,
    Cx,
}

impl CrossoverKind {
    /// Produces up to two children from `mom` and `dad`. An empty result
    /// means the operator's precondition was not met; the error has already
    /// been reported by the caller-owned [`crate::errors::ErrorReporter`].
    pub fn apply<T: Allele>(
        &self,
        mom: &ArrayGenome<T>,
        dad: &ArrayGenome<T>,
        rng: &mut RandomSource,
    ) -> GaResult<Vec<ArrayGenome<T>>> {
        match self {
            CrossoverKind::Uniform => uniform::cross(mom, dad, rng),
            CrossoverKind::SinglePoint => single_point::cross(mom, dad, rng),
            CrossoverKind::TwoPoint => two_point::cross(mom, dad, rng),
            CrossoverKind::EvenOdd => even_odd::cross(mom, dad, rng),
            CrossoverKind::Pmx => pmx::cross(mom, dad, rng),
            CrossoverKind::Ox => ox::cross(mom, dad, rng),
            CrossoverKind::Cx => cx::cross(mom, dad, rng),
        }
    }

    /// `true` for operators that only make sense when both parents are
    /// permutations of the same multiset (a single shared allele set).
    pub fn is_permutation_preserving(&self) -> bool {
        matches!(self, CrossoverKind::Pmx | CrossoverKind::Ox | CrossoverKind::Cx)
    }
}
