use super::MutationStrategy;
use crate::chromosome::Chromosome;
use crate::error::Result;
use crate::rng::RandomNumberGenerator;

/// Number of uniform perturbations averaged per resampled gene.
const SAMPLES_PER_GENE: usize = 6;

/// Perturbs real-valued genes around their current value.
///
/// The spread is the variance of the chromosome's own genes: each gene is replaced
/// by the mean of six draws `gene + u1 * variance - u2 * variance` with `u1, u2`
/// uniform in `[0, 1)`. The average concentrates the result around the gene, so a
/// chromosome is nudged rather than replaced. A chromosome whose genes are all
/// equal has zero variance and is returned unchanged.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default)]
pub struct GaussianMutation;

impl GaussianMutation {
    pub fn new() -> Self {
        Self
    }

    fn resample(gene: f64, variance: f64, rng: &mut RandomNumberGenerator) -> f64 {
        let total: f64 = (0..SAMPLES_PER_GENE)
            .map(|_| gene + rng.gen_probability() * variance - rng.gen_probability() * variance)
            .sum();
        total / SAMPLES_PER_GENE as f64
    }
}

impl MutationStrategy<f64> for GaussianMutation {
    fn mutate(
        &self,
        chromosome: &Chromosome<f64>,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Chromosome<f64>> {
        let genes = chromosome.genes();
        if genes.is_empty() {
            return Ok(chromosome.with_genes(Vec::new()));
        }

        let n = genes.len() as f64;
        let mean = genes.iter().sum::<f64>() / n;
        let variance = genes.iter().map(|g| (mean - g).powi(2)).sum::<f64>() / n;

        let mutated = genes
            .iter()
            .map(|&gene| Self::resample(gene, variance, rng))
            .collect();

        Ok(chromosome.with_genes(mutated))
    }
}
