//! # Problem
//!
//! A `Problem` is everything the evolution loop needs to know about the task being
//! optimized: how to create a random candidate, how to score one, and when to stop.

use std::fmt;

use crate::chromosome::{Chromosome, Gene};
use crate::rng::RandomNumberGenerator;

pub trait Problem<T: Gene> {
    /// Creates one fresh chromosome. Called once per member of the initial population.
    fn genotype(&self, rng: &mut RandomNumberGenerator) -> Chromosome<T>;

    /// Scores a chromosome. Higher is better.
    fn fitness(&self, chromosome: &Chromosome<T>) -> f64;

    /// Decides whether the run stops after the current generation.
    ///
    /// `temperature` is the annealing signal computed from the improvement of the
    /// best fitness; see [`Annealing`](super::Annealing).
    fn terminate(&self, best: &Chromosome<T>, generation: usize, temperature: f64) -> bool;
}

/// A [`Problem`] assembled from three closures.
///
/// # Example
///
/// ```rust
/// use chromevo::chromosome::Chromosome;
/// use chromevo::evolution::{FnProblem, Problem};
/// use chromevo::genotype;
/// use chromevo::rng::RandomNumberGenerator;
///
/// // One-max: maximize the number of ones in a 16-bit chromosome
/// let problem = FnProblem::new(
///     |rng: &mut RandomNumberGenerator| genotype::binary(16, rng),
///     |c: &Chromosome<u8>| c.genes().iter().map(|&g| g as f64).sum(),
///     |best: &Chromosome<u8>, generation, _temperature| {
///         best.fitness() == 16.0 || generation >= 500
///     },
/// );
///
/// let mut rng = RandomNumberGenerator::from_seed(1);
/// let chromosome: Chromosome<u8> = problem.genotype(&mut rng);
/// assert_eq!(chromosome.size(), 16);
/// ```
pub struct FnProblem<G, F, S> {
    genotype: G,
    fitness: F,
    terminate: S,
}

impl<G, F, S> FnProblem<G, F, S> {
    pub fn new<T>(genotype: G, fitness: F, terminate: S) -> Self
    where
        T: Gene,
        G: Fn(&mut RandomNumberGenerator) -> Chromosome<T>,
        F: Fn(&Chromosome<T>) -> f64,
        S: Fn(&Chromosome<T>, usize, f64) -> bool,
    {
        Self {
            genotype,
            fitness,
            terminate,
        }
    }
}

impl<T, G, F, S> Problem<T> for FnProblem<G, F, S>
where
    T: Gene,
    G: Fn(&mut RandomNumberGenerator) -> Chromosome<T>,
    F: Fn(&Chromosome<T>) -> f64,
    S: Fn(&Chromosome<T>, usize, f64) -> bool,
{
    fn genotype(&self, rng: &mut RandomNumberGenerator) -> Chromosome<T> {
        (self.genotype)(rng)
    }

    fn fitness(&self, chromosome: &Chromosome<T>) -> f64 {
        (self.fitness)(chromosome)
    }

    fn terminate(&self, best: &Chromosome<T>, generation: usize, temperature: f64) -> bool {
        (self.terminate)(best, generation, temperature)
    }
}

impl<G, F, S> fmt::Debug for FnProblem<G, F, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnProblem").finish_non_exhaustive()
    }
}
