use super::{ensure_same_size, CrossoverStrategy};
use crate::chromosome::Chromosome;
use crate::error::{ensure_unit_interval, Result};
use crate::rng::RandomNumberGenerator;

/// Whole arithmetic crossover for real-valued chromosomes.
///
/// `child_a = alpha * a + (1 - alpha) * b` and `child_b = alpha * b + (1 - alpha) * a`,
/// gene by gene. With `alpha = 0.5` both children are the parents' midpoint.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct WholeArithmeticCrossover {
    alpha: f64,
}

impl WholeArithmeticCrossover {
    /// # Errors
    ///
    /// Returns an error if `alpha` is not between 0 and 1.
    pub fn new(alpha: f64) -> Result<Self> {
        ensure_unit_interval("Arithmetic crossover alpha", alpha)?;
        Ok(Self { alpha })
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    fn blend(&self, own: &[f64], other: &[f64]) -> Vec<f64> {
        own.iter()
            .zip(other)
            .map(|(x, y)| self.alpha * x + (1.0 - self.alpha) * y)
            .collect()
    }
}

impl Default for WholeArithmeticCrossover {
    fn default() -> Self {
        Self { alpha: 0.5 }
    }
}

impl CrossoverStrategy<f64> for WholeArithmeticCrossover {
    fn crossover(
        &self,
        parent_a: &Chromosome<f64>,
        parent_b: &Chromosome<f64>,
        _rng: &mut RandomNumberGenerator,
    ) -> Result<(Chromosome<f64>, Chromosome<f64>)> {
        ensure_same_size(parent_a, parent_b)?;

        let child_a = self.blend(parent_a.genes(), parent_b.genes());
        let child_b = self.blend(parent_b.genes(), parent_a.genes());

        Ok((Chromosome::new(child_a), Chromosome::new(child_b)))
    }
}
