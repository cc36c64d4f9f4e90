//! # Mutation Strategies
//!
//! A mutation strategy derives one new chromosome from an existing one. The source
//! chromosome is never modified; the mutant keeps its source's fitness and age until
//! the next evaluation.
pub mod bit_flip;
pub mod gaussian;
pub mod scramble;

use std::fmt::Debug;

use crate::chromosome::{Chromosome, Gene};
use crate::error::Result;
use crate::rng::RandomNumberGenerator;

pub use bit_flip::BitFlipMutation;
pub use gaussian::GaussianMutation;
pub use scramble::ScrambleMutation;

/// Trait for mutation strategies.
pub trait MutationStrategy<T: Gene>: Debug + Send + Sync {
    /// Returns a mutated copy of `chromosome`.
    fn mutate(
        &self,
        chromosome: &Chromosome<T>,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Chromosome<T>>;
}
