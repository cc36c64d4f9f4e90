use super::MutationStrategy;
use crate::chromosome::{Chromosome, Gene};
use crate::error::Result;
use crate::rng::RandomNumberGenerator;

/// Shuffles all genes of a chromosome.
///
/// Applies to every genotype and preserves both size and gene multiset, so
/// permutations stay permutations. This is the default mutation strategy of the
/// launcher.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default)]
pub struct ScrambleMutation;

impl ScrambleMutation {
    pub fn new() -> Self {
        Self
    }
}

impl<T: Gene> MutationStrategy<T> for ScrambleMutation {
    fn mutate(
        &self,
        chromosome: &Chromosome<T>,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Chromosome<T>> {
        let mut genes = chromosome.genes().to_vec();
        rng.shuffle(&mut genes);
        Ok(chromosome.with_genes(genes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scramble_keeps_genes() {
        let mut rng = RandomNumberGenerator::from_seed(42);
        let mut source = Chromosome::new((0..32).collect::<Vec<u32>>());
        source.record_evaluation(2.0);

        let mutant = ScrambleMutation::new().mutate(&source, &mut rng).unwrap();

        let mut genes = mutant.genes().to_vec();
        genes.sort();
        assert_eq!(genes, (0..32).collect::<Vec<u32>>());
        assert_eq!(mutant.fitness(), 2.0);
        assert_eq!(mutant.age(), 1);
        assert_eq!(source.genes(), (0..32).collect::<Vec<u32>>().as_slice());
    }
}
