use crate::chromosome::{Chromosome, Gene};
use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_strategy::SelectionStrategy;

/// A selection strategy that selects chromosomes through roulette wheel selection.
///
/// Roulette wheel selection (also known as fitness proportionate selection) picks
/// chromosomes with probability proportional to their fitness, with replacement.
///
/// This strategy requires all fitness values to be non-negative. When every
/// chromosome has zero fitness the wheel is flat and picks are uniform.
///
/// # Examples
///
/// ```
/// use chromevo::chromosome::Chromosome;
/// use chromevo::selection::{RouletteWheelSelection, SelectionStrategy};
/// use chromevo::rng::RandomNumberGenerator;
/// use chromevo::error::Result;
///
/// fn main() -> Result<()> {
///     let population = vec![Chromosome::new(vec![1]), Chromosome::new(vec![2])];
///     let mut rng = RandomNumberGenerator::new();
///
///     let selected = RouletteWheelSelection::new().select(&population, 6, &mut rng)?;
///     assert_eq!(selected.len(), 6);
///
///     Ok(())
/// }
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default)]
pub struct RouletteWheelSelection;

impl RouletteWheelSelection {
    pub fn new() -> Self {
        Self
    }

    /// Calculates the cumulative selection probabilities of the population.
    ///
    /// Returns `None` when the total fitness is zero.
    ///
    /// # Errors
    ///
    /// Returns an error if any fitness value is negative.
    fn calculate_probabilities<T: Gene>(
        &self,
        population: &[Chromosome<T>],
    ) -> Result<Option<Vec<f64>>> {
        if population.iter().any(|c| c.fitness() < 0.0) {
            return Err(GeneticError::Configuration(
                "Roulette wheel selection requires non-negative fitness values".to_string(),
            ));
        }

        let sum: f64 = population.iter().map(Chromosome::fitness).sum();
        if sum == 0.0 {
            return Ok(None);
        }

        let mut cumulative = 0.0;
        let mut probs: Vec<f64> = population
            .iter()
            .map(|c| {
                cumulative += c.fitness() / sum;
                cumulative
            })
            .collect();

        // Guard against floating-point drift on the last slot
        if let Some(last) = probs.last_mut() {
            *last = 1.0;
        }

        Ok(Some(probs))
    }

    /// Spins the wheel once and returns the index of the selected chromosome.
    fn spin(&self, cumulative_probs: &[f64], rng: &mut RandomNumberGenerator) -> usize {
        let r = rng.gen_probability();
        cumulative_probs
            .iter()
            .position(|&prob| r < prob)
            .unwrap_or(cumulative_probs.len() - 1)
    }
}

impl<T: Gene> SelectionStrategy<T> for RouletteWheelSelection {
    fn select(
        &self,
        population: &[Chromosome<T>],
        num_to_select: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Chromosome<T>>> {
        if population.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        let cumulative_probs = self.calculate_probabilities(population)?;

        let selected = (0..num_to_select)
            .map(|_| {
                let idx = match &cumulative_probs {
                    Some(probs) => self.spin(probs, rng),
                    None => rng.gen_range(0..population.len()),
                };
                population[idx].clone()
            })
            .collect();

        Ok(selected)
    }
}
