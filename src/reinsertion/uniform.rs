use super::{fit_to_size, survivor_count, ReinsertionPool, ReinsertionStrategy};
use crate::chromosome::{Chromosome, Gene};
use crate::error::{ensure_unit_interval, Result};
use crate::rng::RandomNumberGenerator;

/// Keeps a uniformly random share of the previous generation alongside the offspring.
///
/// Like [`ElitistReinsertion`](super::ElitistReinsertion), but survivors are drawn
/// at random instead of by fitness, which keeps more diversity.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct UniformReinsertion {
    survival_rate: f64,
}

impl UniformReinsertion {
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

impl Default for UniformReinsertion {
    fn default() -> Self {
        Self { survival_rate: 0.2 }
    }
}

impl<T: Gene> ReinsertionStrategy<T> for UniformReinsertion {
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

        rng.shuffle(&mut old);
        old.truncate(survivor_count(population_size, self.survival_rate));
        let survivors = old;

        let mut next = survivors.clone();
        next.extend(offspring.children);
        next.extend(offspring.mutants);

        fit_to_size(next, &survivors, population_size, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chromosomes(genes: &[i32]) -> Vec<Chromosome<i32>> {
        genes.iter().map(|&g| Chromosome::new(vec![g])).collect()
    }

    #[test]
    fn test_uniform_keeps_population_size() {
        let mut rng = RandomNumberGenerator::from_seed(42);
        let pool = ReinsertionPool {
            parents: chromosomes(&[1, 2, 3, 4]),
            children: chromosomes(&[10, 11, 12, 13]),
            mutants: chromosomes(&[20, 21]),
            leftovers: chromosomes(&[5, 6]),
        };

        let next = UniformReinsertion::new(0.5)
            .unwrap()
            .reinsert(pool, 6, &mut rng)
            .unwrap();

        assert_eq!(next.len(), 6);
    }

    #[test]
    fn test_uniform_survivors_come_from_old_generation() {
        let mut rng = RandomNumberGenerator::from_seed(42);
        let pool = ReinsertionPool {
            parents: chromosomes(&[1, 2]),
            children: Vec::new(),
            mutants: Vec::new(),
            leftovers: chromosomes(&[3, 4]),
        };

        let next = UniformReinsertion::new(0.5)
            .unwrap()
            .reinsert(pool, 4, &mut rng)
            .unwrap();

        assert_eq!(next.len(), 4);
        assert!(next.iter().all(|c| (1..=4).contains(&c.genes()[0])));
    }

    #[test]
    fn test_uniform_carries_generation_forward_without_survivors_or_offspring() {
        let mut rng = RandomNumberGenerator::from_seed(42);
        let pool = ReinsertionPool {
            parents: Vec::new(),
            children: Vec::new(),
            mutants: Vec::new(),
            leftovers: chromosomes(&[1, 2, 3, 4]),
        };

        let next = UniformReinsertion::new(0.0)
            .unwrap()
            .reinsert(pool, 4, &mut rng)
            .unwrap();

        let genes: Vec<i32> = next.iter().map(|c| c.genes()[0]).collect();
        assert_eq!(genes, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_uniform_single_member_default_rate() {
        let mut rng = RandomNumberGenerator::from_seed(42);
        let pool = ReinsertionPool {
            parents: Vec::new(),
            children: Vec::new(),
            mutants: Vec::new(),
            leftovers: chromosomes(&[9]),
        };

        let next = UniformReinsertion::default()
            .reinsert(pool, 1, &mut rng)
            .unwrap();

        assert_eq!(next, chromosomes(&[9]));
    }
}
