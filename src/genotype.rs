//! # Genotypes
//!
//! Generators for randomized initial chromosomes. Each function builds one fresh
//! chromosome; a [`Problem`](crate::evolution::Problem) usually delegates its
//! `genotype` method to one of them.
//!
//! - [`binary`]: `0`/`1` genes, each encoding presence or absence of a trait.
//! - [`permutation`]: an ordering of distinct pool elements (scheduling, routing).
//! - [`real_value`]: integers drawn from an inclusive range.
//! - [`weights`]: real numbers in `[0, 1)`.
//! - [`general`]: a shuffled sample of an arbitrary pool, duplicates allowed.
//!
//! ## Example
//!
//! ```rust
//! use chromevo::genotype;
//! use chromevo::rng::RandomNumberGenerator;
//!
//! let mut rng = RandomNumberGenerator::from_seed(42);
//! let route = genotype::permutation(4, &["a", "b", "c", "d"], &mut rng);
//! assert_eq!(route.size(), 4);
//! ```

use crate::chromosome::{Chromosome, Gene};
use crate::rng::RandomNumberGenerator;

/// Creates a random binary chromosome of `size` genes.
pub fn binary(size: usize, rng: &mut RandomNumberGenerator) -> Chromosome<u8> {
    let genes = (0..size)
        .map(|_| if rng.gen_probability() < 0.5 { 0 } else { 1 })
        .collect();
    Chromosome::new(genes)
}

/// Creates a permutation of distinct pool elements.
///
/// The pool is de-duplicated (first occurrence wins), shuffled, and cut to `size`.
/// If the pool holds fewer than `size` distinct elements the chromosome is shorter.
pub fn permutation<T>(size: usize, pool: &[T], rng: &mut RandomNumberGenerator) -> Chromosome<T>
where
    T: Gene + PartialEq,
{
    let mut distinct: Vec<T> = Vec::with_capacity(pool.len());
    for gene in pool {
        if !distinct.contains(gene) {
            distinct.push(gene.clone());
        }
    }
    rng.shuffle(&mut distinct);
    distinct.truncate(size);
    Chromosome::new(distinct)
}

/// Creates a chromosome of integers drawn uniformly from `[min, max]`.
///
/// Bounds given in the wrong order are swapped.
pub fn real_value(
    size: usize,
    min: i64,
    max: i64,
    rng: &mut RandomNumberGenerator,
) -> Chromosome<i64> {
    let (low, high) = if min <= max { (min, max) } else { (max, min) };
    let genes = (0..size).map(|_| rng.gen_range(low..=high)).collect();
    Chromosome::new(genes)
}

/// Creates a chromosome of weights in `[0, 1)`.
pub fn weights(size: usize, rng: &mut RandomNumberGenerator) -> Chromosome<f64> {
    let genes = (0..size).map(|_| rng.gen_probability()).collect();
    Chromosome::new(genes)
}

/// Creates a chromosome from a shuffled copy of `pool`, cut to `size`.
pub fn general<T: Gene>(size: usize, pool: &[T], rng: &mut RandomNumberGenerator) -> Chromosome<T> {
    let mut genes = pool.to_vec();
    rng.shuffle(&mut genes);
    genes.truncate(size);
    Chromosome::new(genes)
}
