use evo_core::crossover::CrossoverKind;
use evo_core::evolve::config::ReplacementStrategy;
use evo_core::evolve::terminator::TerminationConfig;
use evo_core::evolve::EvolveBuilder;
use evo_core::genome::{Fitness, FitnessOrdering};
use evo_core::random::RandomSource;
use evo_core::select::SelectKind;
use evo_core::ArrayGenome;

struct CountOnes;

impl Fitness for CountOnes {
    type Genome = ArrayGenome<u8>;

    fn evaluate(&mut self, genome: &Self::Genome) -> Option<f64> {
        Some(genome.genes().iter().map(|&g| g as f64).sum())
    }
}

fn random_population(n: usize, len: usize, rng: &mut RandomSource) -> Vec<ArrayGenome<u8>> {
    (0..n)
        .map(|_| {
            let genes: Vec<u8> = (0..len).map(|_| if rng.uniform_bit() { 1 } else { 0 }).collect();
            ArrayGenome::fixed(genes)
        })
        .collect()
}

#[test]
fn generational_run_improves_best_score_and_keeps_population_invariants() {
    let _ = env_logger::try_init();
    let mut seed_rng = RandomSource::from_seed(77);
    let initial = random_population(40, 24, &mut seed_rng);

    let mut evolve = EvolveBuilder::new()
        .with_fitness(CountOnes)
        .with_initial_population(initial)
        .with_crossover(CrossoverKind::Uniform)
        .with_select(SelectKind::Tournament { k: 3 })
        .with_ordering(FitnessOrdering::Maximize)
        .with_p_crossover(0.9)
        .with_p_mutation(0.02)
        .with_elitism(true, 2)
        .with_seed(42)
        .with_termination(TerminationConfig { max_generations: Some(60), score_threshold: Some(24.0), convergence_threshold: None })
        .build()
        .expect("valid configuration should build");

    evolve.initialize();
    let initial_best = evolve.statistics().max_ever();

    evolve.run();

    assert!(evolve.statistics().max_ever() >= initial_best);
    assert!(evolve.statistics().generation() > 0);

    let agg = evolve.population().aggregates();
    assert!(agg.min <= agg.mean + 1e-9);
    assert!(agg.mean <= agg.max + 1e-9);
    assert!(agg.stddev >= 0.0);
}

#[test]
fn steady_state_run_also_terminates_and_tracks_replacements() {
    let mut seed_rng = RandomSource::from_seed(99);
    let initial = random_population(20, 16, &mut seed_rng);

    let mut evolve = EvolveBuilder::new()
        .with_fitness(CountOnes)
        .with_initial_population(initial)
        .with_crossover(CrossoverKind::TwoPoint)
        .with_select(SelectKind::Roulette)
        .with_ordering(FitnessOrdering::Maximize)
        .with_replacement(ReplacementStrategy::SteadyState { replacement_fraction: 0.25 })
        .with_p_crossover(0.8)
        .with_p_mutation(0.05)
        .with_elitism(false, 0)
        .with_seed(13)
        .with_termination(TerminationConfig { max_generations: Some(30), score_threshold: None, convergence_threshold: None })
        .build()
        .expect("valid configuration should build");

    evolve.run();

    assert_eq!(evolve.population().len(), 20);
    assert!(evolve.statistics().generation() > 0);
}

#[test]
fn bad_probability_is_rejected_at_build_time() {
    let mut seed_rng = RandomSource::from_seed(1);
    let initial = random_population(5, 8, &mut seed_rng);

    let result = EvolveBuilder::new()
        .with_fitness(CountOnes)
        .with_initial_population(initial)
        .with_p_crossover(1.5)
        .build();

    assert!(result.is_err());
}
