//! # Crossover Strategies
//!
//! A crossover strategy combines two parents into two children. Parents are only
//! read; children are fresh chromosomes with fitness `0.0` and age `0`.
//!
//! - [`SinglePointCrossover`]: swap tails after a random cut point. Works for any gene type.
//! - [`OrderOneCrossover`]: keeps the children valid permutations.
//! - [`UniformCrossover`]: per-gene coin flip, suited to short binary chromosomes.
//! - [`WholeArithmeticCrossover`]: weighted average of real-valued parents.
pub mod order_one;
pub mod single_point;
pub mod uniform;
pub mod whole_arithmetic;

use std::fmt::Debug;

use crate::chromosome::{Chromosome, Gene};
use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;

pub use order_one::OrderOneCrossover;
pub use single_point::SinglePointCrossover;
pub use uniform::UniformCrossover;
pub use whole_arithmetic::WholeArithmeticCrossover;

/// Trait for crossover strategies.
pub trait CrossoverStrategy<T: Gene>: Debug + Send + Sync {
    /// Produces two children from two parents.
    ///
    /// # Errors
    ///
    /// Returns an error if the parents cannot be combined, for example because
    /// their sizes differ.
    fn crossover(
        &self,
        parent_a: &Chromosome<T>,
        parent_b: &Chromosome<T>,
        rng: &mut RandomNumberGenerator,
    ) -> Result<(Chromosome<T>, Chromosome<T>)>;
}

/// Rejects parent pairs of different sizes.
pub(crate) fn ensure_same_size<T: Gene>(
    parent_a: &Chromosome<T>,
    parent_b: &Chromosome<T>,
) -> Result<()> {
    if parent_a.size() != parent_b.size() {
        return Err(GeneticError::Crossover(format!(
            "Parents differ in size ({} vs {})",
            parent_a.size(),
            parent_b.size()
        )));
    }
    Ok(())
}
