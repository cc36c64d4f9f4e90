use super::{ensure_same_size, CrossoverStrategy};
use crate::chromosome::{Chromosome, Gene};
use crate::error::Result;
use crate::rng::RandomNumberGenerator;

/// Cuts both parents at the same random point and swaps their tails.
///
/// The cut point is drawn from `0..=size`, so a child may be an exact copy of
/// one parent. This is the default crossover strategy of the launcher.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default)]
pub struct SinglePointCrossover;

impl SinglePointCrossover {
    pub fn new() -> Self {
        Self
    }
}

impl<T: Gene> CrossoverStrategy<T> for SinglePointCrossover {
    fn crossover(
        &self,
        parent_a: &Chromosome<T>,
        parent_b: &Chromosome<T>,
        rng: &mut RandomNumberGenerator,
    ) -> Result<(Chromosome<T>, Chromosome<T>)> {
        ensure_same_size(parent_a, parent_b)?;

        let point = rng.gen_range(0..=parent_a.size());
        let (a_head, a_tail) = parent_a.genes().split_at(point);
        let (b_head, b_tail) = parent_b.genes().split_at(point);

        let child_a = a_head.iter().chain(b_tail).cloned().collect();
        let child_b = b_head.iter().chain(a_tail).cloned().collect();

        Ok((Chromosome::new(child_a), Chromosome::new(child_b)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GeneticError;

    #[test]
    fn test_single_point_children_mirror_each_other() {
        let mut rng = RandomNumberGenerator::from_seed(42);
        let parent_a = Chromosome::new(vec![0; 8]);
        let parent_b = Chromosome::new(vec![1; 8]);

        for _ in 0..20 {
            let (child_a, child_b) = SinglePointCrossover::new()
                .crossover(&parent_a, &parent_b, &mut rng)
                .unwrap();

            assert_eq!(child_a.size(), 8);
            assert_eq!(child_b.size(), 8);
            // Child A is a run of zeros followed by ones, child B the complement
            assert!(child_a.genes().windows(2).all(|w| w[0] <= w[1]));
            for (a, b) in child_a.genes().iter().zip(child_b.genes()) {
                assert_eq!(a + b, 1);
            }
        }
    }

    #[test]
    fn test_single_point_children_are_fresh() {
        let mut rng = RandomNumberGenerator::from_seed(42);
        let mut parent_a = Chromosome::new(vec![1, 2, 3]);
        parent_a.record_evaluation(5.0);
        let parent_b = Chromosome::new(vec![4, 5, 6]);

        let (child_a, child_b) = SinglePointCrossover::new()
            .crossover(&parent_a, &parent_b, &mut rng)
            .unwrap();

        assert_eq!(child_a.fitness(), 0.0);
        assert_eq!(child_a.age(), 0);
        assert_eq!(child_b.age(), 0);
        assert_eq!(parent_a.genes(), &[1, 2, 3]);
    }

    #[test]
    fn test_single_point_size_mismatch() {
        let mut rng = RandomNumberGenerator::from_seed(42);
        let result = SinglePointCrossover::new().crossover(
            &Chromosome::new(vec![1, 2]),
            &Chromosome::new(vec![1]),
            &mut rng,
        );

        assert!(matches!(result, Err(GeneticError::Crossover(_))));
    }
}
