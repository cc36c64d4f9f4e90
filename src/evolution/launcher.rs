use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info};

use super::{
    annealing::Annealing,
    builder::EvolutionLauncherBuilder,
    options::{EvolutionOptions, LogLevel},
    stages, Problem,
};
use crate::{
    chromosome::{Chromosome, Gene},
    crossover::{CrossoverStrategy, SinglePointCrossover},
    error::{GeneticError, OptionExt, Result},
    mutation::{MutationStrategy, ScrambleMutation},
    reinsertion::{PureReinsertion, ReinsertionPool, ReinsertionStrategy},
    rng::RandomNumberGenerator,
    selection::{ElitistSelection, SelectionStrategy},
    stats::{generation_key, StatsCache, StatsRecord},
};

/// Why a run stopped.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The problem's termination predicate returned `true`.
    Converged,
    /// The configured `max_generations` was reached.
    GenerationLimit,
    /// The running flag was cleared from outside.
    Cancelled,
}

/// The outcome of a run.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionResult<T> {
    /// The best chromosome of the last evaluated generation.
    pub best: Chromosome<T>,
    /// One record per evaluated generation.
    pub stats: StatsCache<T>,
    /// Number of evaluated generations.
    pub generations: usize,
    pub termination: Termination,
}

/// Runs a generational evolution of a [`Problem`] with pluggable strategies.
///
/// # Example
///
/// ```rust
/// use chromevo::chromosome::Chromosome;
/// use chromevo::evolution::{EvolutionLauncher, EvolutionOptions, FnProblem, Termination};
/// use chromevo::genotype;
/// use chromevo::mutation::BitFlipMutation;
/// use chromevo::rng::RandomNumberGenerator;
///
/// let problem = FnProblem::new(
///     |rng: &mut RandomNumberGenerator| genotype::binary(8, rng),
///     |c: &Chromosome<u8>| c.genes().iter().map(|&g| g as f64).sum(),
///     |best: &Chromosome<u8>, _generation, _temperature| best.fitness() == 8.0,
/// );
///
/// let launcher = EvolutionLauncher::<u8, _>::builder()
///     .with_problem(problem)
///     .with_mutation_strategy(BitFlipMutation::new(0.1).unwrap())
///     .build()
///     .unwrap();
///
/// let options = EvolutionOptions::builder()
///     .population_size(20)
///     .mutation_probability(0.3)
///     .max_generations(50)
///     .build()
///     .unwrap();
///
/// let mut rng = RandomNumberGenerator::from_seed(7);
/// let result = launcher.run(&options, &mut rng).unwrap();
///
/// assert_eq!(result.stats.len(), result.generations);
/// assert!(result.termination != Termination::Cancelled);
/// ```
pub struct EvolutionLauncher<T: Gene, P: Problem<T>> {
    problem: P,
    selection: Box<dyn SelectionStrategy<T>>,
    crossover: Box<dyn CrossoverStrategy<T>>,
    mutation: Box<dyn MutationStrategy<T>>,
    reinsertion: Box<dyn ReinsertionStrategy<T>>,
}

impl<T: Gene, P: Problem<T>> EvolutionLauncher<T, P> {
    /// Creates a launcher with the default strategies: elitist selection,
    /// single-point crossover, scramble mutation and pure reinsertion.
    pub fn new(problem: P) -> Self {
        Self::with_strategies(
            problem,
            Box::new(ElitistSelection::default()),
            Box::new(SinglePointCrossover::new()),
            Box::new(ScrambleMutation::new()),
            Box::new(PureReinsertion::new()),
        )
    }

    pub fn with_strategies(
        problem: P,
        selection: Box<dyn SelectionStrategy<T>>,
        crossover: Box<dyn CrossoverStrategy<T>>,
        mutation: Box<dyn MutationStrategy<T>>,
        reinsertion: Box<dyn ReinsertionStrategy<T>>,
    ) -> Self {
        Self {
            problem,
            selection,
            crossover,
            mutation,
            reinsertion,
        }
    }

    pub fn builder() -> EvolutionLauncherBuilder<T, P> {
        EvolutionLauncherBuilder::new()
    }

    pub fn problem(&self) -> &P {
        &self.problem
    }

    /// Evolves a fresh population until the problem terminates or the generation
    /// bound is reached.
    ///
    /// # Errors
    ///
    /// This method will return an error if:
    /// - The options are invalid (see [`EvolutionOptions::validate`])
    /// - A fitness value is not finite
    /// - A strategy violates its contract or rejects its input
    pub fn run(
        &self,
        options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<EvolutionResult<T>> {
        self.evolve(options, rng, None)
    }

    /// Like [`run`](Self::run), but also stops once `running` is set to `false`.
    ///
    /// The flag is read once per generation, after the generation's statistics are
    /// recorded, so a cancelled run still returns the best of the last evaluated
    /// generation.
    pub fn run_until_cancelled(
        &self,
        options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
        running: Arc<AtomicBool>,
    ) -> Result<EvolutionResult<T>> {
        self.evolve(options, rng, Some(running.as_ref()))
    }

    fn evolve(
        &self,
        options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
        running: Option<&AtomicBool>,
    ) -> Result<EvolutionResult<T>> {
        options.validate()?;

        let start = Instant::now();
        let mut population =
            stages::initial_population(&self.problem, options.get_population_size(), rng)?;
        let mut stats = StatsCache::new();
        let mut annealing = Annealing::new(options.get_cooling_rate());
        let mut generation = 0;

        loop {
            let scored = stages::score(population, &self.problem)?;
            let ranked = stages::rank(scored.clone());
            let record = StatsRecord::from_ranked(&ranked)?;
            let best = ranked
                .into_iter()
                .next()
                .ok_or_else_genetic(|| GeneticError::EmptyPopulation)?;

            let best_fitness = self.problem.fitness(&best);
            let temperature = annealing.cool(best_fitness);
            Self::log_generation(options.get_log_level(), generation, best_fitness, &record);
            stats = stats.insert(generation_key(generation), record);

            let termination = if self.problem.terminate(&best, generation, temperature) {
                Some(Termination::Converged)
            } else if options
                .get_max_generations()
                .is_some_and(|max| generation + 1 >= max)
            {
                Some(Termination::GenerationLimit)
            } else if running.is_some_and(|flag| !flag.load(Ordering::Relaxed)) {
                Some(Termination::Cancelled)
            } else {
                None
            };

            if let Some(termination) = termination {
                info!(
                    "Time taken to execute = {:.3} seconds",
                    start.elapsed().as_secs_f64()
                );
                info!("{}", best);
                return Ok(EvolutionResult {
                    best,
                    stats,
                    generations: generation + 1,
                    termination,
                });
            }

            population = self.breed(scored, options, rng)?;
            generation += 1;
        }
    }

    /// Runs selection, crossover, mutation and reinsertion on a scored population.
    fn breed(
        &self,
        scored: Vec<Chromosome<T>>,
        options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Chromosome<T>>> {
        let population_size = options.get_population_size();

        let selection = stages::select(
            &scored,
            self.selection.as_ref(),
            options.get_selection_rate(),
            rng,
        )?;
        let children = stages::crossover(&selection.parents, self.crossover.as_ref(), rng)?;
        let mutants = stages::mutate(
            &scored,
            self.mutation.as_ref(),
            options.get_mutation_probability(),
            rng,
        )?;
        let (parents, leftovers) = selection.into_parts();

        debug!(
            parents = parents.len(),
            leftovers = leftovers.len(),
            children = children.len(),
            mutants = mutants.len(),
            "Generation stages complete"
        );

        stages::reinsert(
            self.reinsertion.as_ref(),
            ReinsertionPool {
                parents,
                children,
                mutants,
                leftovers,
            },
            population_size,
            rng,
        )
    }

    fn log_generation(
        log_level: LogLevel,
        generation: usize,
        best_fitness: f64,
        record: &StatsRecord<T>,
    ) {
        match log_level {
            LogLevel::Minimal => info!(generation, "Current best fitness is: {}", best_fitness),
            LogLevel::Verbose => info!(
                generation,
                worst = record.worst.fitness(),
                average = record.average,
                "Current best fitness is: {}",
                best_fitness
            ),
            LogLevel::None => {}
        }
    }
}

impl<T: Gene, P: Problem<T> + std::fmt::Debug> std::fmt::Debug for EvolutionLauncher<T, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EvolutionLauncher")
            .field("problem", &self.problem)
            .field("selection", &self.selection)
            .field("crossover", &self.crossover)
            .field("mutation", &self.mutation)
            .field("reinsertion", &self.reinsertion)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evolution::FnProblem;

    fn first_gene_launcher(
        stop_at: usize,
    ) -> EvolutionLauncher<i32, impl Problem<i32>> {
        EvolutionLauncher::new(FnProblem::new(
            |rng: &mut RandomNumberGenerator| Chromosome::new(vec![rng.gen_range(0..100)]),
            |c: &Chromosome<i32>| c.genes()[0] as f64,
            move |_best: &Chromosome<i32>, generation, _temperature| generation >= stop_at,
        ))
    }

    #[test]
    fn test_run_terminates_at_generation_zero() {
        let mut rng = RandomNumberGenerator::from_seed(42);
        let result = first_gene_launcher(0)
            .run(&EvolutionOptions::new(6, 0.5), &mut rng)
            .unwrap();

        assert_eq!(result.generations, 1);
        assert_eq!(result.stats.len(), 1);
        assert!(result.stats.get("gen_0").is_some());
        assert_eq!(result.termination, Termination::Converged);
    }

    #[test]
    fn test_run_rejects_invalid_options() {
        let mut rng = RandomNumberGenerator::from_seed(42);
        let result = first_gene_launcher(0).run(&EvolutionOptions::new(0, 0.5), &mut rng);

        assert!(matches!(result, Err(GeneticError::Configuration(_))));
    }

    #[test]
    fn test_run_stops_at_generation_limit() {
        let mut rng = RandomNumberGenerator::from_seed(42);
        let mut options = EvolutionOptions::new(6, 0.5);
        options.set_max_generations(Some(3));

        let result = first_gene_launcher(usize::MAX).run(&options, &mut rng).unwrap();

        assert_eq!(result.generations, 3);
        assert_eq!(result.termination, Termination::GenerationLimit);
        assert!(result.stats.generation(2).is_some());
        assert!(result.stats.generation(3).is_none());
    }

    #[test]
    fn test_run_until_cancelled_with_cleared_flag() {
        let mut rng = RandomNumberGenerator::from_seed(42);
        let running = Arc::new(AtomicBool::new(false));

        let result = first_gene_launcher(usize::MAX)
            .run_until_cancelled(&EvolutionOptions::new(6, 0.5), &mut rng, running)
            .unwrap();

        assert_eq!(result.generations, 1);
        assert_eq!(result.termination, Termination::Cancelled);
    }
}
