//! Termination predicates: any configured condition ends the run.

use crate::genome::{FitnessOrdering, Genome};
use crate::statistics::Statistics;

#[derive(Debug, Clone, Copy)]
pub struct TerminationConfig {
    pub max_generations: Option<u64>,
    pub score_threshold: Option<f64>,
    pub convergence_threshold: Option<f64>,
}

impl Default for TerminationConfig {
    fn default() -> Self {
        TerminationConfig { max_generations: Some(100), score_threshold: None, convergence_threshold: None }
    }
}

/// `true` once any configured condition is met.
pub fn should_terminate<G: Genome>(config: &TerminationConfig, ordering: FitnessOrdering, stats: &Statistics<G>) -> bool {
    if let Some(max_gen) = config.max_generations {
        if stats.generation() >= max_gen {
            return true;
        }
    }
    if let Some(threshold) = config.score_threshold {
        let best = match ordering {
            FitnessOrdering::Maximize => stats.max_ever(),
            FitnessOrdering::Minimize => stats.min_ever(),
        };
        let reached = match ordering {
            FitnessOrdering::Maximize => best >= threshold,
            FitnessOrdering::Minimize => best <= threshold,
        };
        if reached {
            return true;
        }
    }
    if let Some(tau) = config.convergence_threshold {
        if stats.convergence() >= tau {
            return true;
        }
    }
    false
}
