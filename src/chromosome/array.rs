//! `ArrayGenome<T>`: a length-typed sequence of `T`. All the variation
//! operators named in the crossover module operate on this type; it carries
//! no allele-set constraint of its own (see [`crate::chromosome::allele_array`]
//! for that).

use std::fmt;
use std::str::FromStr;

use crate::allele::Allele;
use crate::errors::{GaError, GaErrorKind, GaResult};
use crate::genome::{Genome, ResizePolicy};
use crate::random::RandomSource;

#[derive(Clone)]
pub struct ArrayGenome<T: Allele> {
    genes: Vec<T>,
    resize_policy: ResizePolicy,
    score: Option<f64>,
}

impl<T: Allele> fmt::Debug for ArrayGenome<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayGenome")
            .field("genes", &self.genes)
            .field("resize_policy", &self.resize_policy)
            .field("score", &self.score)
            .finish()
    }
}

impl<T: Allele> ArrayGenome<T> {
    pub fn fixed(genes: Vec<T>) -> Self {
        let len = genes.len();
        ArrayGenome { genes, resize_policy: ResizePolicy::Fixed(len), score: None }
    }

    pub fn bounded(genes: Vec<T>, min_len: usize, max_len: usize) -> Self {
        ArrayGenome { genes, resize_policy: ResizePolicy::Bounded(min_len, max_len), score: None }
    }

    pub fn genes(&self) -> &[T] {
        &self.genes
    }

    pub fn genes_mut(&mut self) -> &mut [T] {
        self.invalidate();
        &mut self.genes
    }

    pub fn gene(&self, i: usize) -> &T {
        &self.genes[i]
    }

    pub fn set_gene(&mut self, i: usize, value: T) {
        self.genes[i] = value;
        self.invalidate();
    }

    pub fn swap(&mut self, i: usize, j: usize) {
        if i != j {
            self.genes.swap(i, j);
            self.invalidate();
        }
    }

    /// Resizes in place, filling new slots with `fill` when growing.
    /// Errs with `BadResizeBehavior` if `new_len` falls outside the policy's
    /// `[min, max]` bounds.
    pub fn resize(&mut self, new_len: usize, fill: impl Fn(usize) -> T) -> GaResult<()> {
        if new_len < self.resize_policy.min_len() || new_len > self.resize_policy.max_len() {
            return Err(GaError::new(
                GaErrorKind::BadResizeBehavior,
                "ArrayGenome",
                "resize",
                format!("length {new_len} outside allowed range"),
            ));
        }
        let old_len = self.genes.len();
        self.genes.resize_with(new_len, || fill(0));
        for i in old_len..new_len {
            self.genes[i] = fill(i);
        }
        self.invalidate();
        Ok(())
    }

    /// `-1.0` if lengths differ; otherwise the fraction of positions that
    /// differ (`0.0` for identical genomes, including two empty ones).
    pub fn compare(&self, other: &ArrayGenome<T>) -> f64 {
        if self.genes.len() != other.genes.len() {
            return -1.0;
        }
        if self.genes.is_empty() {
            return 0.0;
        }
        let diffs = self.genes.iter().zip(other.genes.iter()).filter(|(a, b)| a != b).count();
        diffs as f64 / self.genes.len() as f64
    }

    pub fn write(&self) -> String
    where
        T: fmt::Display,
    {
        self.genes.iter().map(|g| g.to_string()).collect::<Vec<_>>().join(" ")
    }

    pub fn read(&mut self, text: &str) -> GaResult<()>
    where
        T: FromStr,
    {
        let mut parsed = Vec::with_capacity(self.genes.len());
        for token in text.split_whitespace() {
            let value = token.parse::<T>().map_err(|_| {
                GaError::new(GaErrorKind::ReadError, "ArrayGenome", "read", format!("could not parse '{token}'"))
            })?;
            parsed.push(value);
        }
        self.genes = parsed;
        self.invalidate();
        Ok(())
    }
}

impl<T: Allele> Genome for ArrayGenome<T> {
    fn len(&self) -> usize {
        self.genes.len()
    }

    fn resize_policy(&self) -> ResizePolicy {
        self.resize_policy
    }

    fn score(&self) -> Option<f64> {
        self.score
    }

    fn set_score(&mut self, score: Option<f64>) {
        self.score = score;
    }
}

impl<T: Allele> crate::genome::Evolvable for ArrayGenome<T> {
    fn crossover(
        mom: &Self,
        dad: &Self,
        kind: crate::crossover::CrossoverKind,
        rng: &mut crate::random::RandomSource,
    ) -> GaResult<Vec<Self>> {
        kind.apply(mom, dad, rng)
    }

    fn mutate(&mut self, p: f64, rng: &mut crate::random::RandomSource) -> usize {
        crate::mutate::swap_mutate(self, p, rng)
    }

    fn compare(&self, other: &Self) -> f64 {
        ArrayGenome::compare(self, other)
    }
}
