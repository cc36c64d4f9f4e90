use crate::chromosome::{Chromosome, Gene};
use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_strategy::SelectionStrategy;

/// A selection strategy that ignores fitness.
///
/// The population is shuffled and the first `num_to_select` chromosomes are taken,
/// so no chromosome is selected twice.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default)]
pub struct RandomSelection;

impl RandomSelection {
    pub fn new() -> Self {
        Self
    }
}

impl<T: Gene> SelectionStrategy<T> for RandomSelection {
    fn select(
        &self,
        population: &[Chromosome<T>],
        num_to_select: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Chromosome<T>>> {
        if population.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        if num_to_select > population.len() {
            return Err(GeneticError::Selection(format!(
                "Cannot draw {} chromosomes without replacement from a population of {}",
                num_to_select,
                population.len()
            )));
        }

        let mut shuffled = population.to_vec();
        rng.shuffle(&mut shuffled);
        shuffled.truncate(num_to_select);

        Ok(shuffled)
    }
}
