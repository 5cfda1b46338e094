//! A collection of genomes with a lazily recomputed sorted view and cached
//! aggregate statistics, grounded on the teacher crate's `population.rs`
//! but trimmed to what the core driver actually needs (no recycling bin,
//! no cardinality-estimator diversity — see `DESIGN.md`).

use crate::genome::{FitnessOrdering, Genome};

#[derive(Debug, Clone, Default)]
pub struct PopulationAggregates {
    pub mean: f64,
    pub max: f64,
    pub min: f64,
    pub stddev: f64,
}

pub struct Population<G: Genome> {
    genomes: Vec<G>,
    ordering: FitnessOrdering,
    sorted_order: Vec<usize>,
    dirty: bool,
}

impl<G: Genome> Population<G> {
    pub fn new(genomes: Vec<G>, ordering: FitnessOrdering) -> Self {
        let n = genomes.len();
        Population { genomes, ordering, sorted_order: (0..n).collect(), dirty: true }
    }

    pub fn len(&self) -> usize {
        self.genomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genomes.is_empty()
    }

    pub fn ordering(&self) -> FitnessOrdering {
        self.ordering
    }

    pub fn genomes(&self) -> &[G] {
        &self.genomes
    }

    pub fn add(&mut self, genome: G) {
        self.genomes.push(genome);
        self.dirty = true;
    }

    pub fn replace_all(&mut self, genomes: Vec<G>) {
        self.genomes = genomes;
        self.dirty = true;
    }

    pub fn replace_at(&mut self, index: usize, genome: G) {
        self.genomes[index] = genome;
        self.dirty = true;
    }

    pub fn at(&self, index: usize) -> &G {
        &self.genomes[index]
    }

    fn score_or_worst(&self, g: &G) -> f64 {
        g.score().unwrap_or_else(|| self.ordering.worst_value())
    }

    fn ensure_sorted(&mut self) {
        if !self.dirty {
            return;
        }
        let ordering = self.ordering;
        let scores: Vec<f64> = self.genomes.iter().map(|g| g.score().unwrap_or(ordering.worst_value())).collect();
        let mut order: Vec<usize> = (0..self.genomes.len()).collect();
        order.sort_by(|&a, &b| match ordering {
            FitnessOrdering::Maximize => scores[b].partial_cmp(&scores[a]).unwrap(),
            FitnessOrdering::Minimize => scores[a].partial_cmp(&scores[b]).unwrap(),
        });
        self.sorted_order = order;
        self.dirty = false;
    }

    /// Best `k` genomes, best first. Re-sorts only if the population
    /// changed since the last sorted read.
    pub fn best(&mut self, k: usize) -> Vec<&G> {
        self.ensure_sorted();
        self.sorted_order.iter().take(k).map(|&i| &self.genomes[i]).collect()
    }

    pub fn worst(&mut self, k: usize) -> Vec<&G> {
        self.ensure_sorted();
        self.sorted_order.iter().rev().take(k).map(|&i| &self.genomes[i]).collect()
    }

    pub fn best_index(&mut self) -> Option<usize> {
        self.ensure_sorted();
        self.sorted_order.first().copied()
    }

    fn evaluated_scores(&self) -> Vec<f64> {
        self.genomes.iter().filter_map(|g| g.score()).collect()
    }

    /// Aggregate score statistics over evaluated genomes only, computed
    /// with the `stats` crate the teacher already depends on for the same
    /// purpose.
    pub fn aggregates(&self) -> PopulationAggregates {
        let scores = self.evaluated_scores();
        if scores.is_empty() {
            return PopulationAggregates::default();
        }
        let mean = stats::mean(scores.iter().cloned());
        let stddev = stats::stddev(scores.iter().cloned());
        let max = scores.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let min = scores.iter().cloned().fold(f64::INFINITY, f64::min);
        PopulationAggregates { mean, max, min, stddev }
    }

    /// Mean pairwise comparator distance across the population; `O(N^2)`, so
    /// left to be called on demand rather than kept live on every mutation.
    pub fn diversity(&self, compare: impl Fn(&G, &G) -> f64) -> f64 {
        use itertools::Itertools;

        if self.genomes.len() < 2 {
            return 0.0;
        }
        let mut total = 0.0;
        let mut pairs = 0usize;
        for (a, b) in self.genomes.iter().tuple_combinations() {
            let d = compare(a, b);
            if d >= 0.0 {
                total += d;
                pairs += 1;
            }
        }
        if pairs == 0 {
            0.0
        } else {
            total / pairs as f64
        }
    }

    pub fn into_genomes(self) -> Vec<G> {
        self.genomes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chromosome::array::ArrayGenome;

    fn scored(value: i32, score: f64) -> ArrayGenome<i32> {
        let mut g = ArrayGenome::fixed(vec![value]);
        g.set_score(Some(score));
        g
    }

    #[test]
    fn best_respects_maximize_ordering() {
        let mut pop = Population::new(vec![scored(1, 3.0), scored(2, 9.0), scored(3, 1.0)], FitnessOrdering::Maximize);
        let best = pop.best(1);
        assert_eq!(best[0].gene(0), &2);
    }

    #[test]
    fn best_respects_minimize_ordering() {
        let mut pop = Population::new(vec![scored(1, 3.0), scored(2, 9.0), scored(3, 1.0)], FitnessOrdering::Minimize);
        let best = pop.best(1);
        assert_eq!(best[0].gene(0), &3);
    }

    #[test]
    fn aggregates_satisfy_min_mean_max_ordering() {
        let pop = Population::new(vec![scored(1, 3.0), scored(2, 9.0), scored(3, 1.0)], FitnessOrdering::Maximize);
        let agg = pop.aggregates();
        assert!(agg.min <= agg.mean);
        assert!(agg.mean <= agg.max);
        assert!(agg.stddev >= 0.0);
    }
}
