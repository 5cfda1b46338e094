//! `ArrayAlleleGenome<T>`: an [`ArrayGenome<T>`] whose element at index `i`
//! is constrained to belong to allele set `i mod S`.

use std::fmt;

use crate::allele::{AlleleSet, AlleleSetHandle, RangeAllele};
use crate::chromosome::array::ArrayGenome;
use crate::genome::{Genome, ResizePolicy};
use crate::random::RandomSource;

#[derive(Clone)]
pub struct ArrayAlleleGenome<T: RangeAllele> {
    inner: ArrayGenome<T>,
    allele_sets: Vec<AlleleSetHandle<T>>,
}

impl<T: RangeAllele> fmt::Debug for ArrayAlleleGenome<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayAlleleGenome")
            .field("inner", &self.inner)
            .field("n_allele_sets", &self.allele_sets.len())
            .finish()
    }
}

impl<T: RangeAllele> ArrayAlleleGenome<T> {
    pub fn new(inner: ArrayGenome<T>, allele_sets: Vec<AlleleSetHandle<T>>) -> Self {
        assert!(!allele_sets.is_empty(), "an allele genome needs at least one allele set");
        ArrayAlleleGenome { inner, allele_sets }
    }

    pub fn inner(&self) -> &ArrayGenome<T> {
        &self.inner
    }

    pub fn inner_mut(&mut self) -> &mut ArrayGenome<T> {
        &mut self.inner
    }

    pub fn allele_set_at(&self, index: usize) -> &AlleleSet<T> {
        let s = self.allele_sets.len();
        &self.allele_sets[index % s]
    }

    pub fn allele_sets(&self) -> &[AlleleSetHandle<T>] {
        &self.allele_sets
    }

    /// Resets every gene to a fresh random draw from its allele set.
    pub fn uniform_initialize(&mut self, rng: &mut RandomSource) {
        let len = self.inner.len();
        for i in 0..len {
            let value = self.allele_set_at(i).random_allele(rng);
            self.inner.set_gene(i, value);
        }
    }

    /// Assumes a single shared allele set: lays the set's members down in
    /// order (wrapping to fill the genome) then shuffles in place. Intended
    /// for permutation problems, where the allele set *is* the multiset of
    /// values every valid genome must be a permutation of. Errs with
    /// `ObjectTypeMismatch` for a `Bounded` set, which has no enumerable
    /// member list to lay down.
    pub fn ordered_initialize(&mut self, rng: &mut RandomSource) -> crate::errors::GaResult<()> {
        let set = self.allele_set_at(0).clone();
        let domain = match &set {
            crate::allele::AlleleSet::Enumerated(values) => values.clone(),
            crate::allele::AlleleSet::Bounded { .. } => {
                return Err(crate::errors::GaError::new(
                    crate::errors::GaErrorKind::ObjectTypeMismatch,
                    "ArrayAlleleGenome",
                    "ordered_initialize",
                    "ordered_initialize requires an enumerated allele set",
                ));
            }
        };
        let len = self.inner.len();
        for i in 0..len {
            let value = domain[i % domain.len()].clone();
            self.inner.set_gene(i, value);
        }
        for i in (1..len).rev() {
            let j = rng.uniform_range(0, i);
            self.inner.swap(i, j);
        }
        Ok(())
    }

    /// Sparse path samples every index with probability `p`; dense path
    /// (`p * len >= 1`) flips exactly `floor(p * len)` random indices.
    /// Returns the number of genes actually changed.
    pub fn flip_mutate(&mut self, p: f64, rng: &mut RandomSource) -> usize {
        let len = self.inner.len();
        if len == 0 {
            return 0;
        }
        let expected = p * len as f64;
        let mut count = 0;
        if expected < 1.0 {
            for i in 0..len {
                if rng.flip(p) {
                    let value = self.allele_set_at(i).random_allele(rng);
                    self.inner.set_gene(i, value);
                    count += 1;
                }
            }
        } else {
            let n = expected.floor() as usize;
            for _ in 0..n {
                let i = rng.uniform_range(0, len - 1);
                let value = self.allele_set_at(i).random_allele(rng);
                self.inner.set_gene(i, value);
                count += 1;
            }
        }
        count
    }
}

impl<T: RangeAllele> Genome for ArrayAlleleGenome<T> {
    fn len(&self) -> usize {
        self.inner.len()
    }

    fn resize_policy(&self) -> ResizePolicy {
        self.inner.resize_policy()
    }

    fn score(&self) -> Option<f64> {
        self.inner.score()
    }

    fn set_score(&mut self, score: Option<f64>) {
        self.inner.set_score(score);
    }
}

impl<T: RangeAllele> crate::genome::Evolvable for ArrayAlleleGenome<T> {
    /// Delegates entirely to the inner `ArrayGenome` and rewraps the result
    /// with cloned allele-set handles. Safe because every same-index
    /// operator (uniform/single-point/two-point/even-odd) only ever writes
    /// a value already valid for its position's allele set, and PMX/OX/CX
    /// are only offered when there is a single shared allele set (`S == 1`),
    /// where repositioning values across indices is vacuously safe too.
    fn crossover(
        mom: &Self,
        dad: &Self,
        kind: crate::crossover::CrossoverKind,
        rng: &mut crate::random::RandomSource,
    ) -> crate::errors::GaResult<Vec<Self>> {
        if kind.is_permutation_preserving() && mom.allele_sets.len() != 1 {
            return Err(crate::errors::GaError::new(
                crate::errors::GaErrorKind::ObjectTypeMismatch,
                "ArrayAlleleGenome",
                "crossover",
                "permutation-preserving crossover requires a single shared allele set",
            ));
        }
        let children = crate::genome::Evolvable::crossover(&mom.inner, &dad.inner, kind, rng)?;
        Ok(children
            .into_iter()
            .map(|inner| ArrayAlleleGenome::new(inner, mom.allele_sets.clone()))
            .collect())
    }

    fn mutate(&mut self, p: f64, rng: &mut crate::random::RandomSource) -> usize {
        self.flip_mutate(p, rng)
    }

    fn compare(&self, other: &Self) -> f64 {
        self.inner.compare(&other.inner)
    }
}
