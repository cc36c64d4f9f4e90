//! # Chromosome
//!
//! A `Chromosome<T>` is one candidate solution: an ordered gene sequence plus the
//! fitness and age bookkeeping the evolution loop maintains.
//!
//! Chromosomes are values. Strategies receive them by reference and return fresh
//! chromosomes; nothing in the crate edits another stage's genes in place.
//!
//! ## Example
//!
//! ```rust
//! use chromevo::chromosome::Chromosome;
//!
//! let chromosome = Chromosome::new(vec![1, 0, 1, 1]);
//! assert_eq!(chromosome.size(), 4);
//! assert_eq!(chromosome.fitness(), 0.0);
//! assert_eq!(chromosome.age(), 0);
//!
//! let shifted = chromosome.with_genes(vec![0, 1, 1, 1]);
//! assert_eq!(chromosome.genes(), &[1, 0, 1, 1]);
//! assert_eq!(shifted.genes(), &[0, 1, 1, 1]);
//! ```

use std::fmt::{self, Debug, Display};

/// Marker trait for gene types.
///
/// Any `Clone + Debug + Send + Sync + 'static` type can be used as a gene: binary
/// digits, real numbers, permutation elements or arbitrary symbols.
pub trait Gene: Clone + Debug + Send + Sync + 'static {}

impl<T> Gene for T where T: Clone + Debug + Send + Sync + 'static {}

/// One candidate solution.
///
/// The chromosome size is always the length of its gene vector. Fitness defaults
/// to `0.0` until the chromosome is evaluated; higher is better.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Chromosome<T> {
    genes: Vec<T>,
    fitness: f64,
    age: usize,
}

impl<T: Gene> Chromosome<T> {
    /// Creates an unevaluated chromosome (fitness `0.0`, age `0`).
    pub fn new(genes: Vec<T>) -> Self {
        Self {
            genes,
            fitness: 0.0,
            age: 0,
        }
    }

    /// Returns a new chromosome carrying `genes` and this chromosome's fitness and age.
    ///
    /// Mutation strategies use this to derive a mutant from its source.
    pub fn with_genes(&self, genes: Vec<T>) -> Self {
        Self {
            genes,
            fitness: self.fitness,
            age: self.age,
        }
    }

    pub fn genes(&self) -> &[T] {
        &self.genes
    }

    pub fn into_genes(self) -> Vec<T> {
        self.genes
    }

    /// Number of genes.
    pub fn size(&self) -> usize {
        self.genes.len()
    }

    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    /// Number of evaluation passes this chromosome has survived.
    pub fn age(&self) -> usize {
        self.age
    }

    /// Records one evaluation pass: stores the score and ages the chromosome by one.
    pub(crate) fn record_evaluation(&mut self, fitness: f64) {
        self.fitness = fitness;
        self.age += 1;
    }
}

impl<T: Debug> Display for Chromosome<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Chromosome {{ genes: {:?}, size: {}, fitness: {}, age: {} }}",
            self.genes,
            self.genes.len(),
            self.fitness,
            self.age
        )
    }
}
