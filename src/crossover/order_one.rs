use super::{ensure_same_size, CrossoverStrategy};
use crate::chromosome::{Chromosome, Gene};
use crate::error::Result;
use crate::rng::RandomNumberGenerator;

/// Order-one crossover (OX1) for permutation chromosomes.
///
/// A random slice `[i1, i2)` is copied from the other parent into the same
/// positions; the remaining positions are filled with the parent's own genes that
/// do not occur in that slice, keeping their relative order. When both parents are
/// permutations of the same set, so are the children.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default)]
pub struct OrderOneCrossover;

impl OrderOneCrossover {
    pub fn new() -> Self {
        Self
    }

    fn build_child<T: Gene + PartialEq>(own: &[T], other: &[T], start: usize, end: usize) -> Vec<T> {
        let contribution = &other[start..end];
        let mut remaining = own.iter().filter(|gene| !contribution.contains(gene));

        let mut child = Vec::with_capacity(own.len());
        for i in 0..own.len() {
            if (start..end).contains(&i) {
                child.push(contribution[i - start].clone());
            } else if let Some(gene) = remaining.next() {
                child.push(gene.clone());
            }
        }
        child
    }
}

impl<T: Gene + PartialEq> CrossoverStrategy<T> for OrderOneCrossover {
    fn crossover(
        &self,
        parent_a: &Chromosome<T>,
        parent_b: &Chromosome<T>,
        rng: &mut RandomNumberGenerator,
    ) -> Result<(Chromosome<T>, Chromosome<T>)> {
        ensure_same_size(parent_a, parent_b)?;

        let size = parent_a.size();
        if size == 0 {
            return Ok((Chromosome::new(Vec::new()), Chromosome::new(Vec::new())));
        }

        let first = rng.gen_range(0..size);
        let second = rng.gen_range(0..size);
        let (start, end) = (first.min(second), first.max(second));

        let child_a = Self::build_child(parent_a.genes(), parent_b.genes(), start, end);
        let child_b = Self::build_child(parent_b.genes(), parent_a.genes(), start, end);

        Ok((Chromosome::new(child_a), Chromosome::new(child_b)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_child() {
        let own = [1, 2, 3, 4, 5, 6];
        let other = [6, 5, 4, 3, 2, 1];

        // Slice [2, 4) of `other` is [4, 3]; the rest of `own` fills in order
        let child = OrderOneCrossover::build_child(&own, &other, 2, 4);
        assert_eq!(child, vec![1, 2, 4, 3, 5, 6]);
    }

    #[test]
    fn test_order_one_preserves_permutation() {
        let mut rng = RandomNumberGenerator::from_seed(42);
        let parent_a = Chromosome::new(vec!['a', 'b', 'c', 'd', 'e', 'f', 'g']);
        let parent_b = Chromosome::new(vec!['g', 'e', 'c', 'a', 'f', 'b', 'd']);

        for _ in 0..50 {
            let (child_a, child_b) = OrderOneCrossover::new()
                .crossover(&parent_a, &parent_b, &mut rng)
                .unwrap();

            for child in [child_a, child_b] {
                let mut genes = child.genes().to_vec();
                genes.sort();
                assert_eq!(genes, vec!['a', 'b', 'c', 'd', 'e', 'f', 'g']);
            }
        }
    }

    #[test]
    fn test_order_one_empty_parents() {
        let mut rng = RandomNumberGenerator::from_seed(42);
        let empty: Chromosome<u8> = Chromosome::new(Vec::new());

        let (child_a, child_b) = OrderOneCrossover::new()
            .crossover(&empty, &empty, &mut rng)
            .unwrap();

        assert_eq!(child_a.size(), 0);
        assert_eq!(child_b.size(), 0);
    }
}
