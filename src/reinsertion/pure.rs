use super::{fit_to_size, ReinsertionPool, ReinsertionStrategy};
use crate::chromosome::{Chromosome, Gene};
use crate::error::Result;
use crate::rng::RandomNumberGenerator;

/// Generational replacement: the next population is made of offspring only.
///
/// Children and mutants are concatenated and fitted to size, padding with children.
/// If a generation produced no offspring at all (for example a single-chromosome
/// population with no mutation), the previous generation is carried forward
/// instead. This is the default reinsertion strategy of the launcher.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default)]
pub struct PureReinsertion;

impl PureReinsertion {
    pub fn new() -> Self {
        Self
    }
}

impl<T: Gene> ReinsertionStrategy<T> for PureReinsertion {
    fn reinsert(
        &self,
        pool: ReinsertionPool<T>,
        population_size: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Chromosome<T>>> {
        let (old, offspring) = pool.into_survivor_candidates();

        if offspring.is_empty() {
            return fit_to_size(old, &[], population_size, rng);
        }

        let mut next = offspring.children.clone();
        next.extend(offspring.mutants);
        fit_to_size(next, &offspring.children, population_size, rng)
    }
}
