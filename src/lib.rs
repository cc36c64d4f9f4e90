//! # chromevo
//!
//! A generational genetic algorithm engine. A [`Problem`] supplies random
//! chromosomes, a fitness function and a termination predicate; the
//! [`EvolutionLauncher`] evolves a population through selection, crossover,
//! mutation and reinsertion until the problem is satisfied.
//!
//! Every stage is a trait with interchangeable implementations in the
//! [`selection`], [`crossover`], [`mutation`] and [`reinsertion`] modules.

pub mod chromosome;
pub mod crossover;
pub mod error;
pub mod evolution;
pub mod genotype;
pub mod mutation;
pub mod reinsertion;
pub mod rng;
pub mod selection;
pub mod stats;

// Re-export commonly used types for convenience
pub use chromosome::{Chromosome, Gene};
pub use error::{GeneticError, OptionExt, Result};
pub use evolution::{
    EvolutionLauncher, EvolutionOptions, EvolutionResult, FnProblem, LogLevel, Problem,
    Termination,
};
pub use rng::RandomNumberGenerator;
pub use stats::{StatsCache, StatsRecord};
