use std::collections::HashSet;

use crate::chromosome::{Chromosome, Gene};
use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_strategy::SelectionStrategy;

/// A selection strategy that selects chromosomes through tournament selection.
///
/// Each pick shuffles the eligible chromosomes, lets the first `tournament_size` of
/// them compete and keeps the fittest. This is repeated until enough chromosomes
/// have been picked.
///
/// Tournament selection provides a balance between exploration and exploitation:
/// - Smaller tournament sizes lead to more exploration (more random selection)
/// - Larger tournament sizes lead to more exploitation (more focus on the best chromosomes)
///
/// Without duplicates, a chromosome that already won is excluded from later
/// tournaments, so the result never contains the same population slot twice.
///
/// # Examples
///
/// ```
/// use chromevo::chromosome::Chromosome;
/// use chromevo::selection::{SelectionStrategy, TournamentSelection};
/// use chromevo::rng::RandomNumberGenerator;
/// use chromevo::error::Result;
///
/// fn main() -> Result<()> {
///     let population: Vec<Chromosome<i32>> =
///         (0..5).map(|g| Chromosome::new(vec![g])).collect();
///     let mut rng = RandomNumberGenerator::from_seed(42);
///
///     let selection = TournamentSelection::new(3, false)?;
///     let selected = selection.select(&population, 4, &mut rng)?;
///
///     assert_eq!(selected.len(), 4);
///
///     Ok(())
/// }
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct TournamentSelection {
    tournament_size: usize,
    allow_duplicates: bool,
}

impl TournamentSelection {
    /// Creates a new TournamentSelection strategy with the specified tournament size.
    ///
    /// # Arguments
    ///
    /// * `tournament_size` - The number of chromosomes that participate in each tournament.
    ///   Must be at least 1. A tournament size of 1 is equivalent to random selection.
    /// * `allow_duplicates` - Whether a chromosome may be selected more than once.
    ///
    /// # Errors
    ///
    /// Returns an error if `tournament_size` is 0.
    pub fn new(tournament_size: usize, allow_duplicates: bool) -> Result<Self> {
        if tournament_size < 1 {
            return Err(GeneticError::Configuration(
                "Tournament size must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            tournament_size,
            allow_duplicates,
        })
    }

    pub fn with_tournament_size(mut self, tournament_size: usize) -> Result<Self> {
        if tournament_size < 1 {
            return Err(GeneticError::Configuration(
                "Tournament size must be at least 1".to_string(),
            ));
        }
        self.tournament_size = tournament_size;
        Ok(self)
    }

    pub fn with_duplicates(mut self) -> Self {
        self.allow_duplicates = true;
        self
    }

    pub fn tournament_size(&self) -> usize {
        self.tournament_size
    }

    /// Runs a single tournament and returns the index of the winner.
    ///
    /// # Errors
    ///
    /// Returns an error if all chromosomes are excluded.
    fn run_tournament<T: Gene>(
        &self,
        population: &[Chromosome<T>],
        rng: &mut RandomNumberGenerator,
        excluded: &HashSet<usize>,
    ) -> Result<usize> {
        let mut eligible: Vec<usize> = (0..population.len())
            .filter(|i| !excluded.contains(i))
            .collect();

        if eligible.is_empty() {
            return Err(GeneticError::Selection(
                "No eligible chromosomes for tournament selection".to_string(),
            ));
        }

        rng.shuffle(&mut eligible);
        eligible.truncate(self.tournament_size);

        let mut best_idx = eligible[0];
        for &idx in &eligible[1..] {
            if population[idx].fitness() > population[best_idx].fitness() {
                best_idx = idx;
            }
        }

        Ok(best_idx)
    }
}

impl Default for TournamentSelection {
    fn default() -> Self {
        Self {
            tournament_size: 2,
            allow_duplicates: false,
        }
    }
}

impl<T: Gene> SelectionStrategy<T> for TournamentSelection {
    fn select(
        &self,
        population: &[Chromosome<T>],
        num_to_select: usize,
        rng: &mut RandomNumberGenerator,
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

        let no_exclusions = HashSet::new();
        let mut selected_indices = HashSet::new();
        let mut selected = Vec::with_capacity(num_to_select);

        while selected.len() < num_to_select {
            let excluded = if self.allow_duplicates {
                &no_exclusions
            } else {
                &selected_indices
            };
            let winner_idx = self.run_tournament(population, rng, excluded)?;

            selected_indices.insert(winner_idx);
            selected.push(population[winner_idx].clone());
        }

        Ok(selected)
    }
}
