//! # Stages
//!
//! The building blocks of one generation. The launcher calls them in order:
//!
//! ```text
//! score -> rank -> select -> crossover -> mutate -> reinsert
//! ```
//!
//! Each stage takes and returns owned populations and can be called on its own,
//! which is how custom loops and the benchmarks drive the engine.

use crate::chromosome::{Chromosome, Gene};
use crate::crossover::CrossoverStrategy;
use crate::error::{GeneticError, Result};
use crate::evolution::Problem;
use crate::mutation::MutationStrategy;
use crate::reinsertion::{ReinsertionPool, ReinsertionStrategy};
use crate::rng::RandomNumberGenerator;
use crate::selection::SelectionStrategy;

/// Builds the first generation by calling `problem.genotype` once per member.
///
/// # Errors
///
/// Returns `GeneticError::Configuration` if `population_size` is zero.
pub fn initial_population<T, P>(
    problem: &P,
    population_size: usize,
    rng: &mut RandomNumberGenerator,
) -> Result<Vec<Chromosome<T>>>
where
    T: Gene,
    P: Problem<T> + ?Sized,
{
    if population_size == 0 {
        return Err(GeneticError::Configuration(
            "Population size cannot be zero".to_string(),
        ));
    }
    Ok((0..population_size).map(|_| problem.genotype(rng)).collect())
}

/// Assigns fitness to every chromosome and ages it by one. Order is preserved.
///
/// # Errors
///
/// Returns `GeneticError::FitnessCalculation` on a NaN or infinite fitness.
pub fn score<T, P>(population: Vec<Chromosome<T>>, problem: &P) -> Result<Vec<Chromosome<T>>>
where
    T: Gene,
    P: Problem<T> + ?Sized,
{
    population
        .into_iter()
        .map(|mut chromosome| {
            let fitness = problem.fitness(&chromosome);
            if !fitness.is_finite() {
                return Err(GeneticError::FitnessCalculation(format!(
                    "Non-finite fitness score encountered: {}",
                    fitness
                )));
            }
            chromosome.record_evaluation(fitness);
            Ok(chromosome)
        })
        .collect()
}

/// Sorts a population by descending fitness.
pub fn rank<T: Gene>(mut population: Vec<Chromosome<T>>) -> Vec<Chromosome<T>> {
    population.sort_by(|a, b| b.fitness().total_cmp(&a.fitness()));
    population
}

/// Scores and ranks a population in one step.
pub fn evaluate<T, P>(population: Vec<Chromosome<T>>, problem: &P) -> Result<Vec<Chromosome<T>>>
where
    T: Gene,
    P: Problem<T> + ?Sized,
{
    score(population, problem).map(rank)
}

/// Result of the selection stage.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection<T> {
    /// Selected chromosomes grouped as consecutive pairs.
    pub parents: Vec<(Chromosome<T>, Chromosome<T>)>,
    /// The population after its first `2 * parents.len()` positions.
    pub leftovers: Vec<Chromosome<T>>,
}

impl<T: Gene> Selection<T> {
    /// Flattens the pairs back into selection order.
    pub fn into_parts(self) -> (Vec<Chromosome<T>>, Vec<Chromosome<T>>) {
        let parents = self
            .parents
            .into_iter()
            .flat_map(|(a, b)| [a, b])
            .collect();
        (parents, self.leftovers)
    }
}

/// Number of parents selected from a population of `population_len`.
///
/// `round(len * rate)`, bumped to the next even number, and clamped to the largest
/// even number not above `len`.
///
/// ```rust
/// use chromevo::evolution::stages::parent_count;
///
/// assert_eq!(parent_count(5, 0.5), 4);
/// assert_eq!(parent_count(5, 1.0), 4);
/// assert_eq!(parent_count(10, 0.3), 4);
/// ```
pub fn parent_count(population_len: usize, selection_rate: f64) -> usize {
    let rounded = (population_len as f64 * selection_rate).round() as usize;
    let even = rounded + rounded % 2;
    if even > population_len {
        population_len - population_len % 2
    } else {
        even
    }
}

/// Selects parent pairs and splits off the leftovers.
///
/// # Errors
///
/// Returns `GeneticError::EmptyPopulation` on an empty population, and
/// `GeneticError::Selection` if the strategy returns the wrong number of chromosomes.
pub fn select<T, S>(
    population: &[Chromosome<T>],
    strategy: &S,
    selection_rate: f64,
    rng: &mut RandomNumberGenerator,
) -> Result<Selection<T>>
where
    T: Gene,
    S: SelectionStrategy<T> + ?Sized,
{
    if population.is_empty() {
        return Err(GeneticError::EmptyPopulation);
    }

    let num_parents = parent_count(population.len(), selection_rate);
    let selected = strategy.select(population, num_parents, rng)?;
    if selected.len() != num_parents {
        return Err(GeneticError::Selection(format!(
            "Strategy returned {} chromosomes, expected {}",
            selected.len(),
            num_parents
        )));
    }

    let mut parents = Vec::with_capacity(num_parents / 2);
    let mut selected = selected.into_iter();
    while let (Some(a), Some(b)) = (selected.next(), selected.next()) {
        parents.push((a, b));
    }

    Ok(Selection {
        parents,
        leftovers: population[num_parents..].to_vec(),
    })
}

/// Crosses every pair, returning two children per pair in pair order.
pub fn crossover<T, C>(
    parents: &[(Chromosome<T>, Chromosome<T>)],
    strategy: &C,
    rng: &mut RandomNumberGenerator,
) -> Result<Vec<Chromosome<T>>>
where
    T: Gene,
    C: CrossoverStrategy<T> + ?Sized,
{
    let mut children = Vec::with_capacity(parents.len() * 2);
    for (a, b) in parents {
        let (child_a, child_b) = strategy.crossover(a, b, rng)?;
        children.push(child_a);
        children.push(child_b);
    }
    Ok(children)
}

/// Number of chromosomes mutated per generation: `floor(len * probability)`.
pub fn mutation_count(population_len: usize, mutation_probability: f64) -> usize {
    (population_len as f64 * mutation_probability).floor() as usize
}

/// Mutates the first [`mutation_count`] chromosomes by position.
pub fn mutate<T, M>(
    population: &[Chromosome<T>],
    strategy: &M,
    mutation_probability: f64,
    rng: &mut RandomNumberGenerator,
) -> Result<Vec<Chromosome<T>>>
where
    T: Gene,
    M: MutationStrategy<T> + ?Sized,
{
    let count = mutation_count(population.len(), mutation_probability);
    population
        .iter()
        .take(count)
        .map(|chromosome| strategy.mutate(chromosome, rng))
        .collect()
}

/// Rebuilds the next population of exactly `population_size` chromosomes.
///
/// # Errors
///
/// Returns `GeneticError::Reinsertion` if the strategy misses the target size.
pub fn reinsert<T, R>(
    strategy: &R,
    pool: ReinsertionPool<T>,
    population_size: usize,
    rng: &mut RandomNumberGenerator,
) -> Result<Vec<Chromosome<T>>>
where
    T: Gene,
    R: ReinsertionStrategy<T> + ?Sized,
{
    let next = strategy.reinsert(pool, population_size, rng)?;
    if next.len() != population_size {
        return Err(GeneticError::Reinsertion(format!(
            "Strategy produced {} chromosomes, expected {}",
            next.len(),
            population_size
        )));
    }
    Ok(next)
}
