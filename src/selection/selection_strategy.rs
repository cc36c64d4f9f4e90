use std::fmt::Debug;

use crate::chromosome::{Chromosome, Gene};
use crate::error::Result;
use crate::rng::RandomNumberGenerator;

/// Trait for selection strategies.
///
/// Selection strategies choose the chromosomes that will be paired for crossover.
/// The population handed to `select` is in whatever order the previous generation
/// left it, with fitness already assigned; strategies that care about rank must
/// order their own copy.
///
/// # Examples
///
/// ```
/// use chromevo::chromosome::Chromosome;
/// use chromevo::selection::{ElitistSelection, SelectionStrategy};
/// use chromevo::rng::RandomNumberGenerator;
/// use chromevo::error::Result;
///
/// fn main() -> Result<()> {
///     let population = vec![
///         Chromosome::new(vec![1]),
///         Chromosome::new(vec![2]),
///         Chromosome::new(vec![3]),
///     ];
///     let mut rng = RandomNumberGenerator::new();
///
///     let selection = ElitistSelection::default();
///     let selected = selection.select(&population, 2, &mut rng)?;
///
///     assert_eq!(selected.len(), 2);
///
///     Ok(())
/// }
/// ```
pub trait SelectionStrategy<T: Gene>: Debug + Send + Sync {
    /// Selects `num_to_select` chromosomes from the population.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The population is empty
    /// - The strategy cannot deliver the requested number of chromosomes
    /// - The strategy's own preconditions on fitness values are violated
    fn select(
        &self,
        population: &[Chromosome<T>],
        num_to_select: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Chromosome<T>>>;
}
