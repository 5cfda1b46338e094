//! The knobs an `Evolve` run is configured with.

use crate::crossover::CrossoverKind;
use crate::evolve::terminator::TerminationConfig;
use crate::genome::FitnessOrdering;
use crate::scaling::{NoScaling, ScalingScheme};
use crate::select::SelectKind;
use crate::statistics::score_selection;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReplacementStrategy {
    Generational,
    /// Replace `replacement_fraction * population_size` individuals per
    /// step rather than the whole generation at once.
    SteadyState { replacement_fraction: f64 },
}

pub struct EvolveConfig {
    pub population_size: usize,
    pub p_crossover: f64,
    pub p_mutation: f64,
    pub elitism: bool,
    pub crossover: CrossoverKind,
    pub select: SelectKind,
    pub replacement: ReplacementStrategy,
    pub ordering: FitnessOrdering,
    pub seed: u64,
    pub n_best_genomes: usize,
    /// How many of the current best genomes survive verbatim into the next
    /// generation when `elitism` is set.
    pub elite_count: usize,
    pub n_convergence: usize,
    pub score_frequency: usize,
    pub flush_frequency: usize,
    pub score_filename: Option<String>,
    pub select_scores: u8,
    pub record_diversity: bool,
    pub termination: TerminationConfig,
    pub scaling: Box<dyn ScalingScheme>,
}

impl Default for EvolveConfig {
    fn default() -> Self {
        EvolveConfig {
            population_size: 50,
            p_crossover: 0.8,
            p_mutation: 0.01,
            elitism: true,
            crossover: CrossoverKind::Uniform,
            select: SelectKind::Tournament { k: 2 },
            replacement: ReplacementStrategy::Generational,
            ordering: FitnessOrdering::Maximize,
            seed: 0,
            n_best_genomes: 1,
            elite_count: 1,
            n_convergence: 10,
            score_frequency: 1,
            flush_frequency: 20,
            score_filename: None,
            select_scores: score_selection::ALL_SCORES,
            record_diversity: false,
            termination: TerminationConfig::default(),
            scaling: Box::new(NoScaling),
        }
    }
}
