//! The evolve loop: the generational and steady-state driver that composes
//! selection, crossover, mutation and replacement around a user-supplied
//! [`Fitness`].

pub mod builder;
pub mod config;
pub mod terminator;

pub use builder::EvolveBuilder;
pub use config::{EvolveConfig, ReplacementStrategy};

use crate::errors::ErrorReporter;
use crate::genome::{Evolvable, Fitness, Genome};
use crate::population::Population;
use crate::random::RandomSource;
use crate::statistics::Statistics;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvolveState {
    Created,
    Initialized,
    Running,
    Paused,
    Terminated,
}

pub struct Evolve<G: Evolvable, F: Fitness<Genome = G>> {
    config: EvolveConfig,
    fitness: F,
    population: Population<G>,
    statistics: Statistics<G>,
    rng: RandomSource,
    errors: ErrorReporter,
    state: EvolveState,
}

impl<G: Evolvable, F: Fitness<Genome = G>> Evolve<G, F> {
    pub fn state(&self) -> EvolveState {
        self.state
    }

    pub fn config(&self) -> &EvolveConfig {
        &self.config
    }

    pub fn statistics(&self) -> &Statistics<G> {
        &self.statistics
    }

    pub fn errors(&self) -> &ErrorReporter {
        &self.errors
    }

    pub fn population(&self) -> &Population<G> {
        &self.population
    }

    /// Scores every unevaluated genome in generation 0 and transitions
    /// `Created -> Initialized`.
    pub fn initialize(&mut self) {
        self.evaluate_unscored();
        let diversity = self.diversity_if_recorded();
        self.statistics.update(&mut self.population, diversity);
        self.state = EvolveState::Initialized;
        log::debug!("evolve initialized: population size {}", self.population.len());
    }

    pub fn pause(&mut self) {
        if self.state == EvolveState::Running {
            self.state = EvolveState::Paused;
        }
    }

    pub fn resume(&mut self) {
        if self.state == EvolveState::Paused {
            self.state = EvolveState::Running;
        }
    }

    /// Runs generations until a termination predicate fires.
    pub fn run(&mut self) {
        if self.state == EvolveState::Created {
            self.initialize();
        }
        self.state = EvolveState::Running;
        while self.state == EvolveState::Running {
            if crate::evolve::terminator::should_terminate(&self.config.termination, self.config.ordering, &self.statistics)
            {
                self.state = EvolveState::Terminated;
                break;
            }
            self.step();
        }
        log::debug!("evolve terminated at generation {}", self.statistics.generation());
    }

    /// Advances exactly one generation (generational) or one replacement
    /// batch (steady-state).
    pub fn step(&mut self) {
        match self.config.replacement {
            ReplacementStrategy::Generational => self.step_generational(),
            ReplacementStrategy::SteadyState { replacement_fraction } => self.step_steady_state(replacement_fraction),
        }
        let diversity = self.diversity_if_recorded();
        self.statistics.update(&mut self.population, diversity);
        self.statistics.num_population_evals += 1;
        if self.statistics.should_flush() {
            if let Some(path) = &self.config.score_filename {
                if let Ok(mut file) = std::fs::OpenOptions::new().create(true).append(true).open(path) {
                    let _ = self.statistics.flush(&mut file);
                }
            } else {
                self.statistics.clear_pending();
            }
        }
    }

    fn step_generational(&mut self) {
        let n = self.population.len();
        let weights = self.selection_weights();
        let mut next = Vec::with_capacity(n);

        if self.config.elitism {
            for elite in self.population.best(self.config.elite_count) {
                next.push(elite.clone());
            }
        }

        while next.len() < n {
            let i = self.config.select.select(&weights, &mut self.rng);
            let j = self.config.select.select(&weights, &mut self.rng);
            self.statistics.num_selections += 2;
            let mom = self.population.at(i).clone();
            let dad = self.population.at(j).clone();

            if self.rng.flip(self.config.p_crossover) {
                match G::crossover(&mom, &dad, self.config.crossover, &mut self.rng) {
                    Ok(children) => {
                        self.statistics.num_crossovers += 1;
                        for child in children {
                            if next.len() < n {
                                next.push(child);
                            }
                        }
                    }
                    Err(err) => {
                        self.errors.report(err);
                        next.push(mom);
                    }
                }
            } else {
                next.push(mom);
            }
        }
        next.truncate(n);

        for genome in next.iter_mut() {
            let mutated = genome.mutate(self.config.p_mutation, &mut self.rng);
            if mutated > 0 {
                self.statistics.num_mutations += mutated as u64;
            }
        }

        self.population.replace_all(next);
        self.evaluate_unscored();
    }

    fn step_steady_state(&mut self, replacement_fraction: f64) {
        let n = self.population.len();
        let batch = ((replacement_fraction * n as f64).round() as usize).max(1);
        let weights = self.selection_weights();
        let mut offspring = Vec::with_capacity(batch);

        while offspring.len() < batch {
            let i = self.config.select.select(&weights, &mut self.rng);
            let j = self.config.select.select(&weights, &mut self.rng);
            self.statistics.num_selections += 2;
            let mom = self.population.at(i).clone();
            let dad = self.population.at(j).clone();

            if self.rng.flip(self.config.p_crossover) {
                match G::crossover(&mom, &dad, self.config.crossover, &mut self.rng) {
                    Ok(children) => {
                        self.statistics.num_crossovers += 1;
                        for child in children {
                            if offspring.len() < batch {
                                offspring.push(child);
                            }
                        }
                    }
                    Err(err) => {
                        self.errors.report(err);
                        offspring.push(mom);
                    }
                }
            } else {
                offspring.push(mom);
            }
        }

        for genome in offspring.iter_mut() {
            let mutated = genome.mutate(self.config.p_mutation, &mut self.rng);
            if mutated > 0 {
                self.statistics.num_mutations += mutated as u64;
            }
        }

        for genome in offspring {
            self.population.add(genome);
        }
        self.evaluate_unscored();

        let survivors: Vec<G> = self.population.best(n).into_iter().cloned().collect();
        self.statistics.num_replacements += survivors.len().min(batch) as u64;
        self.population.replace_all(survivors);
    }

    fn evaluate_unscored(&mut self) {
        let genomes: Vec<G> = self.population.genomes().to_vec();
        let mut evaluated = Vec::with_capacity(genomes.len());
        for mut genome in genomes {
            if genome.score().is_none() {
                let score = self.fitness.evaluate(&genome);
                genome.set_score(score);
                self.statistics.num_individual_evals += 1;
            }
            evaluated.push(genome);
        }
        self.population.replace_all(evaluated);
    }

    fn selection_weights(&self) -> Vec<f64> {
        let ordering = self.config.ordering;
        let raw: Vec<f64> = self.population.genomes().iter().map(|g| g.score().unwrap_or(ordering.worst_value())).collect();
        self.config.scaling.scale(&raw, ordering)
    }

    fn diversity_if_recorded(&self) -> Option<f64> {
        if self.config.record_diversity {
            Some(self.population.diversity(|a, b| a.compare(b)))
        } else {
            None
        }
    }
}
