//! Fluent builder for [`Evolve`], mirroring the teacher crate's
//! `GenotypeBuilder`/`strategy::evolve::Builder` style: `with_*` setters
//! consumed by value, validated once in `build()`.

use crate::errors::{ErrorReporter, GaError, GaErrorKind, GaResult};
use crate::evolve::config::{EvolveConfig, ReplacementStrategy};
use crate::evolve::{Evolve, EvolveState};
use crate::genome::{Evolvable, Fitness};
use crate::population::Population;
use crate::random::RandomSource;
use crate::statistics::Statistics;

pub struct EvolveBuilder<G: Evolvable, F: Fitness<Genome = G>> {
    config: EvolveConfig,
    fitness: Option<F>,
    initial_population: Option<Vec<G>>,
}

impl<G: Evolvable, F: Fitness<Genome = G>> Default for EvolveBuilder<G, F> {
    fn default() -> Self {
        EvolveBuilder { config: EvolveConfig::default(), fitness: None, initial_population: None }
    }
}

impl<G: Evolvable, F: Fitness<Genome = G>> EvolveBuilder<G, F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fitness(mut self, fitness: F) -> Self {
        self.fitness = Some(fitness);
        self
    }

    pub fn with_initial_population(mut self, genomes: Vec<G>) -> Self {
        self.config.population_size = genomes.len();
        self.initial_population = Some(genomes);
        self
    }

    pub fn with_crossover(mut self, kind: crate::crossover::CrossoverKind) -> Self {
        self.config.crossover = kind;
        self
    }

    pub fn with_select(mut self, kind: crate::select::SelectKind) -> Self {
        self.config.select = kind;
        self
    }

    pub fn with_scaling(mut self, scaling: Box<dyn crate::scaling::ScalingScheme>) -> Self {
        self.config.scaling = scaling;
        self
    }

    pub fn with_replacement(mut self, replacement: ReplacementStrategy) -> Self {
        self.config.replacement = replacement;
        self
    }

    pub fn with_ordering(mut self, ordering: crate::genome::FitnessOrdering) -> Self {
        self.config.ordering = ordering;
        self
    }

    pub fn with_p_crossover(mut self, p: f64) -> Self {
        self.config.p_crossover = p;
        self
    }

    pub fn with_p_mutation(mut self, p: f64) -> Self {
        self.config.p_mutation = p;
        self
    }

    pub fn with_elitism(mut self, elitism: bool, elite_count: usize) -> Self {
        self.config.elitism = elitism;
        self.config.elite_count = elite_count;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    pub fn with_n_best_genomes(mut self, n: usize) -> Self {
        self.config.n_best_genomes = n;
        self
    }

    pub fn with_n_convergence(mut self, n: usize) -> Self {
        self.config.n_convergence = n;
        self
    }

    pub fn with_score_frequency(mut self, freq: usize) -> Self {
        self.config.score_frequency = freq;
        self
    }

    pub fn with_flush_frequency(mut self, freq: usize) -> Self {
        self.config.flush_frequency = freq;
        self
    }

    pub fn with_score_filename(mut self, filename: impl Into<String>) -> Self {
        self.config.score_filename = Some(filename.into());
        self
    }

    pub fn with_select_scores(mut self, which: u8) -> Self {
        self.config.select_scores = which;
        self
    }

    pub fn with_record_diversity(mut self, flag: bool) -> Self {
        self.config.record_diversity = flag;
        self
    }

    pub fn with_termination(mut self, termination: crate::evolve::terminator::TerminationConfig) -> Self {
        self.config.termination = termination;
        self
    }

    pub fn build(self) -> GaResult<Evolve<G, F>> {
        self.try_into()
    }
}

impl<G: Evolvable, F: Fitness<Genome = G>> TryFrom<EvolveBuilder<G, F>> for Evolve<G, F> {
    type Error = GaError;

    fn try_from(builder: EvolveBuilder<G, F>) -> Result<Self, Self::Error> {
        let config = builder.config;
        if config.population_size == 0 {
            return Err(GaError::new(GaErrorKind::BadPopSize, "EvolveBuilder", "build", "population size must be positive"));
        }
        if !(0.0..=1.0).contains(&config.p_crossover) {
            return Err(GaError::new(GaErrorKind::BadProbValue, "EvolveBuilder", "build", "p_crossover must be in [0, 1]"));
        }
        if !(0.0..=1.0).contains(&config.p_mutation) {
            return Err(GaError::new(GaErrorKind::BadProbValue, "EvolveBuilder", "build", "p_mutation must be in [0, 1]"));
        }
        if let ReplacementStrategy::SteadyState { replacement_fraction } = config.replacement {
            if !(0.0..=1.0).contains(&replacement_fraction) {
                return Err(GaError::new(
                    GaErrorKind::BadProbValue,
                    "EvolveBuilder",
                    "build",
                    "replacement_fraction must be in [0, 1]",
                ));
            }
        }
        let fitness = builder.fitness.ok_or_else(|| {
            GaError::new(GaErrorKind::OpUndef, "EvolveBuilder", "build", "no fitness function was supplied")
        })?;
        let genomes = builder.initial_population.ok_or_else(|| {
            GaError::new(GaErrorKind::NoIndividuals, "EvolveBuilder", "build", "no initial population was supplied")
        })?;
        if genomes.len() != config.population_size {
            return Err(GaError::new(
                GaErrorKind::BadPopSize,
                "EvolveBuilder",
                "build",
                "initial population size does not match configured population size",
            ));
        }

        let mut statistics = Statistics::new(config.ordering, config.n_convergence, config.n_best_genomes);
        statistics.set_score_frequency(config.score_frequency);
        statistics.set_flush_frequency(config.flush_frequency);
        statistics.set_select_scores(config.select_scores);
        statistics.set_record_diversity(config.record_diversity);

        Ok(Evolve {
            rng: RandomSource::from_seed(config.seed),
            population: Population::new(genomes, config.ordering),
            statistics,
            errors: ErrorReporter::new(),
            state: EvolveState::Created,
            fitness,
            config,
        })
    }
}
