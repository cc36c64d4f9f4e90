use super::MutationStrategy;
use crate::chromosome::Chromosome;
use crate::error::{ensure_unit_interval, GeneticError, Result};
use crate::rng::RandomNumberGenerator;

/// Flips binary genes.
///
/// With `probability == 1.0` every gene is flipped; otherwise each gene flips
/// independently with the given probability. Only applies to `0`/`1` genes.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct BitFlipMutation {
    probability: f64,
}

impl BitFlipMutation {
    /// # Errors
    ///
    /// Returns an error if `probability` is not between 0 and 1.
    pub fn new(probability: f64) -> Result<Self> {
        ensure_unit_interval("Bit flip probability", probability)?;
        Ok(Self { probability })
    }

    pub fn probability(&self) -> f64 {
        self.probability
    }
}

impl Default for BitFlipMutation {
    fn default() -> Self {
        Self { probability: 1.0 }
    }
}

impl MutationStrategy<u8> for BitFlipMutation {
    fn mutate(
        &self,
        chromosome: &Chromosome<u8>,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Chromosome<u8>> {
        if let Some(gene) = chromosome.genes().iter().find(|&&g| g > 1) {
            return Err(GeneticError::Mutation(format!(
                "Bit flip requires binary genes, found {}",
                gene
            )));
        }

        let genes = chromosome
            .genes()
            .iter()
            .map(|&gene| {
                if self.probability >= 1.0 || rng.gen_probability() < self.probability {
                    gene ^ 1
                } else {
                    gene
                }
            })
            .collect();

        Ok(chromosome.with_genes(genes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_flip_all() {
        let mut rng = RandomNumberGenerator::from_seed(42);
        let source = Chromosome::new(vec![0, 1, 1, 0]);

        let mutant = BitFlipMutation::default().mutate(&source, &mut rng).unwrap();

        assert_eq!(mutant.genes(), &[1, 0, 0, 1]);
        assert_eq!(source.genes(), &[0, 1, 1, 0]);
    }

    #[test]
    fn test_bit_flip_never() {
        let mut rng = RandomNumberGenerator::from_seed(42);
        let source = Chromosome::new(vec![0, 1, 1, 0]);

        let mutant = BitFlipMutation::new(0.0)
            .unwrap()
            .mutate(&source, &mut rng)
            .unwrap();

        assert_eq!(mutant.genes(), source.genes());
    }

    #[test]
    fn test_bit_flip_rejects_non_binary() {
        let mut rng = RandomNumberGenerator::from_seed(42);
        let source = Chromosome::new(vec![0, 2]);

        let result = BitFlipMutation::default().mutate(&source, &mut rng);
        assert!(matches!(result, Err(GeneticError::Mutation(_))));
    }
}
