use crate::chromosome::{Chromosome, Gene};
use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_strategy::SelectionStrategy;

/// A selection strategy that selects the fittest chromosomes.
///
/// The population is ranked by fitness (descending, stable for ties) and the top
/// `num_to_select` chromosomes are returned. This is the default selection
/// strategy of the launcher.
///
/// # Examples
///
/// ```
/// use chromevo::chromosome::Chromosome;
/// use chromevo::evolution::{stages, FnProblem};
/// use chromevo::selection::{ElitistSelection, SelectionStrategy};
/// use chromevo::rng::RandomNumberGenerator;
/// use chromevo::error::Result;
///
/// fn main() -> Result<()> {
///     let problem = FnProblem::new(
///         |_rng: &mut RandomNumberGenerator| Chromosome::new(vec![0]),
///         |c: &Chromosome<i32>| c.genes()[0] as f64,
///         |_best: &Chromosome<i32>, generation, _temperature| generation > 0,
///     );
///     let population = vec![
///         Chromosome::new(vec![3]),
///         Chromosome::new(vec![9]),
///         Chromosome::new(vec![5]),
///     ];
///     let scored = stages::score(population, &problem)?;
///     let mut rng = RandomNumberGenerator::new();
///
///     let selected = ElitistSelection::default().select(&scored, 2, &mut rng)?;
///
///     assert_eq!(selected[0].genes(), &[9]);
///     assert_eq!(selected[1].genes(), &[5]);
///
///     Ok(())
/// }
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default)]
pub struct ElitistSelection {
    /// Whether the ranking is cycled when more chromosomes are requested than exist.
    allow_duplicates: bool,
}

impl ElitistSelection {
    /// Creates a new ElitistSelection strategy.
    ///
    /// # Arguments
    ///
    /// * `allow_duplicates` - Whether to cycle through the ranking again when
    ///   `num_to_select` exceeds the population size.
    pub fn new(allow_duplicates: bool) -> Self {
        Self { allow_duplicates }
    }

    pub fn with_duplicates(mut self) -> Self {
        self.allow_duplicates = true;
        self
    }
}

impl<T: Gene> SelectionStrategy<T> for ElitistSelection {
    fn select(
        &self,
        population: &[Chromosome<T>],
        num_to_select: usize,
        _rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Chromosome<T>>> {
        if population.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        if !self.allow_duplicates && num_to_select > population.len() {
            return Err(GeneticError::Selection(format!(
                "Cannot select {} distinct chromosomes from a population of {}",
                num_to_select,
                population.len()
            )));
        }

        let mut ranked: Vec<&Chromosome<T>> = population.iter().collect();
        ranked.sort_by(|a, b| b.fitness().total_cmp(&a.fitness()));

        Ok(ranked
            .iter()
            .cycle()
            .take(num_to_select)
            .map(|chromosome| (*chromosome).clone())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evaluated(gene: i32, fitness: f64) -> Chromosome<i32> {
        let mut chromosome = Chromosome::new(vec![gene]);
        chromosome.record_evaluation(fitness);
        chromosome
    }

    fn population() -> Vec<Chromosome<i32>> {
        vec![
            evaluated(1, 0.5),
            evaluated(2, 0.8),
            evaluated(3, 0.3),
            evaluated(4, 0.9),
            evaluated(5, 0.1),
        ]
    }

    #[test]
    fn test_elitist_selection() {
        let mut rng = RandomNumberGenerator::from_seed(42);
        let selection = ElitistSelection::default();
        let selected = selection.select(&population(), 3, &mut rng).unwrap();

        // indices 3, 1, 0 with fitness 0.9, 0.8, 0.5
        assert_eq!(selected.len(), 3);
        assert_eq!(selected[0].genes(), &[4]);
        assert_eq!(selected[1].genes(), &[2]);
        assert_eq!(selected[2].genes(), &[1]);
    }

    #[test]
    fn test_elitist_selection_ties_are_stable() {
        let mut rng = RandomNumberGenerator::from_seed(42);
        let population = vec![evaluated(1, 1.0), evaluated(2, 1.0), evaluated(3, 1.0)];
        let selected = ElitistSelection::default()
            .select(&population, 2, &mut rng)
            .unwrap();

        assert_eq!(selected[0].genes(), &[1]);
        assert_eq!(selected[1].genes(), &[2]);
    }

    #[test]
    fn test_elitist_selection_with_duplicates() {
        let mut rng = RandomNumberGenerator::from_seed(42);
        let population = vec![evaluated(1, 0.5), evaluated(2, 0.8), evaluated(3, 0.3)];

        let selection = ElitistSelection::default().with_duplicates();
        let selected = selection.select(&population, 5, &mut rng).unwrap();

        assert_eq!(selected.len(), 5);
        let genes: Vec<i32> = selected.iter().map(|c| c.genes()[0]).collect();
        assert_eq!(genes, vec![2, 1, 3, 2, 1]);
    }

    #[test]
    fn test_elitist_selection_without_duplicates_rejects_oversized_request() {
        let mut rng = RandomNumberGenerator::from_seed(42);
        let result = ElitistSelection::new(false).select(&population(), 6, &mut rng);

        assert!(matches!(result, Err(GeneticError::Selection(_))));
    }

    #[test]
    fn test_elitist_selection_empty_population() {
        let mut rng = RandomNumberGenerator::from_seed(42);
        let population: Vec<Chromosome<i32>> = Vec::new();

        let result = ElitistSelection::default().select(&population, 3, &mut rng);

        assert!(matches!(result, Err(GeneticError::EmptyPopulation)));
    }
}
