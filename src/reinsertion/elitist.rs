use super::{fit_to_size, survivor_count, ReinsertionPool, ReinsertionStrategy};
use crate::chromosome::{Chromosome, Gene};
use crate::error::{ensure_unit_interval, Result};
use crate::rng::RandomNumberGenerator;

/// Keeps the fittest chromosomes of the previous generation alongside the offspring.
///
/// `floor(population_size * survival_rate)` of the parents and leftovers survive,
/// ranked by fitness. Survivors, children and mutants are then fitted to size,
/// padding with survivors.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct ElitistReinsertion {
    survival_rate: f64,
}

impl ElitistReinsertion {
    /// # Errors
    ///
    /// Returns an error if `survival_rate` is not between 0 and 1.
    pub fn new(survival_rate: f64) -> Result<Self> {
        ensure_unit_interval("Survival rate", survival_rate)?;
        Ok(Self { survival_rate })
    }

    pub fn survival_rate(&self) -> f64 {
        self.survival_rate
    }
}

impl Default for ElitistReinsertion {
    fn default() -> Self {
        Self { survival_rate: 0.2 }
    }
}

impl<T: Gene> ReinsertionStrategy<T> for ElitistReinsertion {
    fn reinsert(
        &self,
        pool: ReinsertionPool<T>,
        population_size: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Chromosome<T>>> {
        let (mut old, offspring) = pool.into_survivor_candidates();

        // Nothing survives and nothing was bred: carry the previous generation forward
        if offspring.is_empty() && survivor_count(population_size, self.survival_rate) == 0 {
            return fit_to_size(old, &[], population_size, rng);
        }

        old.sort_by(|a, b| b.fitness().total_cmp(&a.fitness()));
        old.truncate(survivor_count(population_size, self.survival_rate));
        let survivors = old;

        let mut next = survivors.clone();
        next.extend(offspring.children);
        next.extend(offspring.mutants);

        fit_to_size(next, &survivors, population_size, rng)
    }
}
