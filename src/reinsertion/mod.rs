//! # Reinsertion Strategies
//!
//! Reinsertion rebuilds a population of the target size from the stage outputs of
//! one generation: the selected parents, their children, the mutants and the
//! leftovers selection did not consume.
//!
//! Every strategy funnels its candidates through [`fit_to_size`], which is the
//! only place population size is reconciled.
pub mod elitist;
pub mod pure;
pub mod uniform;

use std::fmt::Debug;

use crate::chromosome::{Chromosome, Gene};
use crate::error::{GeneticError, OptionExt, Result};
use crate::rng::RandomNumberGenerator;

pub use elitist::ElitistReinsertion;
pub use pure::PureReinsertion;
pub use uniform::UniformReinsertion;

/// The stage outputs of one generation, handed to a reinsertion strategy by value.
#[derive(Debug, Clone)]
pub struct ReinsertionPool<T> {
    pub parents: Vec<Chromosome<T>>,
    pub children: Vec<Chromosome<T>>,
    pub mutants: Vec<Chromosome<T>>,
    pub leftovers: Vec<Chromosome<T>>,
}

impl<T: Gene> ReinsertionPool<T> {
    /// Parents followed by leftovers: the previous generation's candidates for survival.
    pub fn into_survivor_candidates(self) -> (Vec<Chromosome<T>>, Offspring<T>) {
        let mut old = self.parents;
        old.extend(self.leftovers);
        (
            old,
            Offspring {
                children: self.children,
                mutants: self.mutants,
            },
        )
    }
}

/// Children and mutants of one generation.
#[derive(Debug, Clone)]
pub struct Offspring<T> {
    pub children: Vec<Chromosome<T>>,
    pub mutants: Vec<Chromosome<T>>,
}

impl<T> Offspring<T> {
    pub fn is_empty(&self) -> bool {
        self.children.is_empty() && self.mutants.is_empty()
    }
}

/// Trait for reinsertion strategies.
pub trait ReinsertionStrategy<T: Gene>: Debug + Send + Sync {
    /// Builds the next population of exactly `population_size` chromosomes.
    fn reinsert(
        &self,
        pool: ReinsertionPool<T>,
        population_size: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Chromosome<T>>>;
}

/// Reconciles `population` to exactly `population_size` chromosomes.
///
/// - Too many: the population is shuffled and truncated (uniform, not by fitness;
///   strategies that want fitness-biased truncation sort before calling).
/// - Too few: chromosomes are drawn uniformly with replacement from `fill` until the
///   size is reached. An empty `fill` pool falls back to `population` itself.
/// - Exact: the population is returned unchanged.
///
/// # Errors
///
/// Returns `GeneticError::EmptyPopulation` if padding is needed but both `fill` and
/// `population` are empty.
///
/// # Examples
///
/// ```
/// use chromevo::chromosome::Chromosome;
/// use chromevo::reinsertion::fit_to_size;
/// use chromevo::rng::RandomNumberGenerator;
///
/// let mut rng = RandomNumberGenerator::from_seed(1);
/// let population = vec![Chromosome::new(vec![1]), Chromosome::new(vec![2])];
/// let fill = vec![Chromosome::new(vec![9])];
///
/// let padded = fit_to_size(population, &fill, 4, &mut rng).unwrap();
/// assert_eq!(padded.len(), 4);
/// assert_eq!(padded[3].genes(), &[9]);
/// ```
pub fn fit_to_size<T: Gene>(
    mut population: Vec<Chromosome<T>>,
    fill: &[Chromosome<T>],
    population_size: usize,
    rng: &mut RandomNumberGenerator,
) -> Result<Vec<Chromosome<T>>> {
    if population.len() > population_size {
        rng.shuffle(&mut population);
        population.truncate(population_size);
        return Ok(population);
    }

    let missing = population_size - population.len();
    if missing == 0 {
        return Ok(population);
    }

    let pad_from_fill = !fill.is_empty();
    let source_len = if pad_from_fill {
        fill.len()
    } else {
        population.len()
    };

    population.reserve(missing);
    for _ in 0..missing {
        let idx = rng
            .choose_index(source_len)
            .ok_or_else_genetic(|| GeneticError::EmptyPopulation)?;
        let chromosome = if pad_from_fill {
            fill[idx].clone()
        } else {
            population[idx].clone()
        };
        population.push(chromosome);
    }

    Ok(population)
}

/// Number of survivors kept from the previous generation for a survival rate.
pub(crate) fn survivor_count(population_size: usize, survival_rate: f64) -> usize {
    (population_size as f64 * survival_rate).floor() as usize
}
