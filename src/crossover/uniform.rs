use super::{ensure_same_size, CrossoverStrategy};
use crate::chromosome::{Chromosome, Gene};
use crate::error::{ensure_unit_interval, Result};
use crate::rng::RandomNumberGenerator;

/// Uniform crossover.
///
/// Every gene position is decided independently: when the draw is at most `rate`
/// the child takes the other parent's gene, otherwise it keeps its own. Works best for
/// short binary chromosomes.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct UniformCrossover {
    rate: f64,
}

impl UniformCrossover {
    /// # Errors
    ///
    /// Returns an error if `rate` is not between 0 and 1.
    pub fn new(rate: f64) -> Result<Self> {
        ensure_unit_interval("Uniform crossover rate", rate)?;
        Ok(Self { rate })
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    fn mix<T: Gene>(&self, own: &[T], other: &[T], rng: &mut RandomNumberGenerator) -> Vec<T> {
        own.iter()
            .zip(other)
            .map(|(mine, theirs)| {
                if rng.gen_probability() <= self.rate {
                    theirs.clone()
                } else {
                    mine.clone()
                }
            })
            .collect()
    }
}

impl Default for UniformCrossover {
    fn default() -> Self {
        Self { rate: 0.5 }
    }
}

impl<T: Gene> CrossoverStrategy<T> for UniformCrossover {
    fn crossover(
        &self,
        parent_a: &Chromosome<T>,
        parent_b: &Chromosome<T>,
        rng: &mut RandomNumberGenerator,
    ) -> Result<(Chromosome<T>, Chromosome<T>)> {
        ensure_same_size(parent_a, parent_b)?;

        let child_a = self.mix(parent_a.genes(), parent_b.genes(), rng);
        let child_b = self.mix(parent_b.genes(), parent_a.genes(), rng);

        Ok((Chromosome::new(child_a), Chromosome::new(child_b)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_rate_extremes() {
        let mut rng = RandomNumberGenerator::from_seed(42);
        let parent_a = Chromosome::new(vec![0u8; 16]);
        let parent_b = Chromosome::new(vec![1u8; 16]);

        let (keep_a, keep_b) = UniformCrossover::new(0.0)
            .unwrap()
            .crossover(&parent_a, &parent_b, &mut rng)
            .unwrap();
        assert_eq!(keep_a.genes(), parent_a.genes());
        assert_eq!(keep_b.genes(), parent_b.genes());

        let (swap_a, swap_b) = UniformCrossover::new(1.0)
            .unwrap()
            .crossover(&parent_a, &parent_b, &mut rng)
            .unwrap();
        assert_eq!(swap_a.genes(), parent_b.genes());
        assert_eq!(swap_b.genes(), parent_a.genes());
    }

    #[test]
    fn test_uniform_draw_equal_to_rate_swaps() {
        let mut rng = RandomNumberGenerator::from_seed(7);
        let first_draw = rng.clone().gen_probability();

        let (child_a, _) = UniformCrossover::new(first_draw)
            .unwrap()
            .crossover(
                &Chromosome::new(vec![0u8]),
                &Chromosome::new(vec![1u8]),
                &mut rng,
            )
            .unwrap();

        assert_eq!(child_a.genes(), &[1]);
    }

    #[test]
    fn test_uniform_invalid_rate() {
        assert!(UniformCrossover::new(1.5).is_err());
        assert!(UniformCrossover::new(-0.5).is_err());
    }
}
