//! A general-purpose genetic algorithm core: array genomes, a closed set of
//! variation operators (including the permutation-preserving PMX/OX/CX
//! crossovers), selection schemes, and the generational/steady-state evolve
//! loop that drives them.
//!
//! ```
//! use evo_core::chromosome::ArrayGenome;
//! use evo_core::crossover::CrossoverKind;
//! use evo_core::genome::Genome;
//! use evo_core::random::RandomSource;
//!
//! let mom = ArrayGenome::fixed(vec![1, 2, 3, 4, 5, 6, 7, 8]);
//! let dad = ArrayGenome::fixed(vec![3, 7, 5, 1, 6, 8, 2, 4]);
//! let mut rng = RandomSource::from_seed(7);
//! let children = CrossoverKind::Pmx.apply(&mom, &dad, &mut rng).unwrap();
//! assert_eq!(children.len(), 2);
//! assert!(children[0].len() == 8);
//! ```

pub mod allele;
pub mod bitstring;
pub mod chromosome;
pub mod crossover;
pub mod errors;
pub mod evolve;
pub mod genome;
pub mod mutate;
pub mod population;
pub mod random;
pub mod scaling;
pub mod select;
pub mod statistics;

pub use chromosome::{ArrayAlleleGenome, ArrayGenome};
pub use errors::{ErrorReporter, GaError, GaErrorKind, GaResult};
pub use genome::{Evolvable, Fitness, FitnessOrdering, Genome, ResizePolicy};
pub use random::RandomSource;
