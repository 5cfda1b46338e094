//! Online/offline performance tracking, an all-time best-genomes archive,
//! and convergence detection. Grounded directly on `GAStatistics.h`: the
//! field names below are deliberately close to the source's, since this
//! component's contract *is* that header.

use std::io::{self, Write};

use crate::genome::{FitnessOrdering, Genome};
use crate::population::Population;

/// Bitmask selecting which per-generation columns get recorded, mirroring
/// `GAStatistics`'s `NoScores`/`Mean`/`Maximum`/`Minimum`/`Deviation`/
/// `Diversity`/`AllScores` enum.
pub mod score_selection {
    pub const NO_SCORES: u8 = 0x00;
    pub const MEAN: u8 = 0x01;
    pub const MAXIMUM: u8 = 0x02;
    pub const MINIMUM: u8 = 0x04;
    pub const DEVIATION: u8 = 0x08;
    pub const DIVERSITY: u8 = 0x10;
    pub const ALL_SCORES: u8 = 0xff;
}

#[derive(Debug, Clone, Copy)]
pub struct GenerationRow {
    pub generation: u64,
    pub mean: f64,
    pub max: f64,
    pub min: f64,
    pub stddev: f64,
    pub diversity: Option<f64>,
}

pub struct Statistics<G: Genome> {
    ordering: FitnessOrdering,

    generation: u64,
    pub num_selections: u64,
    pub num_crossovers: u64,
    pub num_mutations: u64,
    pub num_replacements: u64,
    pub num_individual_evals: u64,
    pub num_population_evals: u64,

    online: f64,
    offline_max: f64,
    offline_min: f64,
    max_ever: f64,
    min_ever: f64,

    n_convergence: usize,
    conv_buffer: Vec<f64>,
    conv_cursor: usize,
    conv_count: usize,

    n_best_genomes: usize,
    best_ever: Vec<G>,

    score_frequency: usize,
    flush_frequency: usize,
    which: u8,
    record_diversity: bool,
    pending_rows: Vec<GenerationRow>,
}

impl<G: Genome> Statistics<G> {
    pub fn new(ordering: FitnessOrdering, n_convergence: usize, n_best_genomes: usize) -> Self {
        let n_convergence = n_convergence.max(1);
        Statistics {
            ordering,
            generation: 0,
            num_selections: 0,
            num_crossovers: 0,
            num_mutations: 0,
            num_replacements: 0,
            num_individual_evals: 0,
            num_population_evals: 0,
            online: 0.0,
            offline_max: 0.0,
            offline_min: 0.0,
            max_ever: f64::NEG_INFINITY,
            min_ever: f64::INFINITY,
            n_convergence,
            conv_buffer: vec![0.0; n_convergence],
            conv_cursor: 0,
            conv_count: 0,
            n_best_genomes: n_best_genomes.max(1),
            best_ever: Vec::new(),
            score_frequency: 1,
            flush_frequency: 20,
            which: score_selection::ALL_SCORES,
            record_diversity: false,
            pending_rows: Vec::new(),
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn online(&self) -> f64 {
        self.online
    }

    pub fn offline_max(&self) -> f64 {
        self.offline_max
    }

    pub fn offline_min(&self) -> f64 {
        self.offline_min
    }

    pub fn max_ever(&self) -> f64 {
        self.max_ever
    }

    pub fn min_ever(&self) -> f64 {
        self.min_ever
    }

    pub fn set_score_frequency(&mut self, freq: usize) {
        self.score_frequency = freq.max(1);
    }

    pub fn set_flush_frequency(&mut self, freq: usize) {
        self.flush_frequency = freq.max(1);
    }

    pub fn set_select_scores(&mut self, which: u8) {
        self.which = which;
    }

    pub fn set_record_diversity(&mut self, flag: bool) {
        self.record_diversity = flag;
    }

    pub fn best_ever(&self) -> &[G] {
        &self.best_ever
    }

    /// Call once per generation. `diversity` should be `Some` only when the
    /// caller has actually computed the (expensive) pairwise diversity this
    /// generation; pass `None` to skip that column.
    pub fn update(&mut self, pop: &mut Population<G>, diversity: Option<f64>) {
        let agg = pop.aggregates();
        self.generation += 1;

        let n = self.generation as f64;
        self.online = (self.online * (n - 1.0) + agg.mean) / n;
        let best_this_gen = match self.ordering {
            FitnessOrdering::Maximize => agg.max,
            FitnessOrdering::Minimize => agg.min,
        };
        self.offline_max = (self.offline_max * (n - 1.0) + agg.max) / n;
        self.offline_min = (self.offline_min * (n - 1.0) + agg.min) / n;

        self.max_ever = self.max_ever.max(agg.max);
        self.min_ever = self.min_ever.min(agg.min);

        self.push_convergence_score(best_this_gen);
        self.update_best_ever(pop);

        if self.generation as usize % self.score_frequency == 0 {
            self.pending_rows.push(GenerationRow {
                generation: self.generation,
                mean: agg.mean,
                max: agg.max,
                min: agg.min,
                stddev: agg.stddev,
                diversity: if self.record_diversity { diversity } else { None },
            });
        }
    }

    fn push_convergence_score(&mut self, score: f64) {
        self.conv_buffer[self.conv_cursor] = score;
        self.conv_cursor = (self.conv_cursor + 1) % self.n_convergence;
        self.conv_count += 1;
    }

    fn update_best_ever(&mut self, pop: &mut Population<G>) {
        let incoming = pop.best(self.n_best_genomes);
        for genome in incoming {
            self.best_ever.push(genome.clone());
        }
        self.best_ever.sort_by(|a, b| {
            let sa = a.score().unwrap_or(self.ordering.worst_value());
            let sb = b.score().unwrap_or(self.ordering.worst_value());
            match self.ordering {
                FitnessOrdering::Maximize => sb.partial_cmp(&sa).unwrap(),
                FitnessOrdering::Minimize => sa.partial_cmp(&sb).unwrap(),
            }
        });
        self.best_ever.truncate(self.n_best_genomes);
    }

    /// `oldest / newest` best-score ratio over the last `nConvergence`
    /// generations; `0.0` until that many generations have been recorded or
    /// when the newest score is zero.
    pub fn convergence(&self) -> f64 {
        if self.conv_count < self.n_convergence {
            return 0.0;
        }
        let newest_idx = (self.conv_cursor + self.n_convergence - 1) % self.n_convergence;
        let oldest_idx = self.conv_cursor % self.n_convergence;
        let newest = self.conv_buffer[newest_idx];
        let oldest = self.conv_buffer[oldest_idx];
        if newest == 0.0 {
            0.0
        } else {
            oldest / newest
        }
    }

    pub fn should_flush(&self) -> bool {
        self.pending_rows.len() >= self.flush_frequency
    }

    pub fn clear_pending(&mut self) {
        self.pending_rows.clear();
    }

    /// Writes pending rows in a fixed tabular form and clears them.
    pub fn flush(&mut self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "# gen\tmean\tmax\tmin\tstddev\tdiversity")?;
        for row in &self.pending_rows {
            let div = row.diversity.map(|d| d.to_string()).unwrap_or_else(|| "-".to_string());
            writeln!(out, "{}\t{:.6}\t{:.6}\t{:.6}\t{:.6}\t{}", row.generation, row.mean, row.max, row.min, row.stddev, div)?;
        }
        self.pending_rows.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn convergence_ratio_matches_worked_example() {
        let mut stats: Statistics<crate::chromosome::array::ArrayGenome<i32>> =
            Statistics::new(FitnessOrdering::Maximize, 10, 1);
        for score in [1.0, 2.0, 4.0, 8.0, 16.0, 16.0, 16.0, 16.0, 16.0, 16.0] {
            stats.push_convergence_score(score);
        }
        assert_relative_eq!(stats.convergence(), 0.0625, epsilon = 1e-9);
    }

    #[test]
    fn stalled_run_converges_to_one() {
        let mut stats: Statistics<crate::chromosome::array::ArrayGenome<i32>> =
            Statistics::new(FitnessOrdering::Maximize, 10, 1);
        for _ in 0..10 {
            stats.push_convergence_score(10.0);
        }
        assert_relative_eq!(stats.convergence(), 1.0, epsilon = 1e-9);
    }
}
