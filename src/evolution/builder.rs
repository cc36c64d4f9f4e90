use crate::{
    chromosome::Gene,
    crossover::{CrossoverStrategy, SinglePointCrossover},
    error::{GeneticError, Result},
    mutation::{MutationStrategy, ScrambleMutation},
    reinsertion::{PureReinsertion, ReinsertionStrategy},
    selection::{ElitistSelection, SelectionStrategy},
};

use super::{EvolutionLauncher, Problem};

/// Fluent builder for [`EvolutionLauncher`].
///
/// The problem is required. Strategies left unset fall back to
/// `ElitistSelection`, `SinglePointCrossover`, `ScrambleMutation` and
/// `PureReinsertion`.
pub struct EvolutionLauncherBuilder<T: Gene, P: Problem<T>> {
    problem: Option<P>,
    selection_strategy: Option<Box<dyn SelectionStrategy<T>>>,
    crossover_strategy: Option<Box<dyn CrossoverStrategy<T>>>,
    mutation_strategy: Option<Box<dyn MutationStrategy<T>>>,
    reinsertion_strategy: Option<Box<dyn ReinsertionStrategy<T>>>,
}

impl<T: Gene, P: Problem<T>> EvolutionLauncherBuilder<T, P> {
    pub fn new() -> Self {
        Self {
            problem: None,
            selection_strategy: None,
            crossover_strategy: None,
            mutation_strategy: None,
            reinsertion_strategy: None,
        }
    }

    pub fn with_problem(mut self, problem: P) -> Self {
        self.problem = Some(problem);
        self
    }

    pub fn with_selection_strategy<S>(mut self, selection_strategy: S) -> Self
    where
        S: SelectionStrategy<T> + 'static,
    {
        self.selection_strategy = Some(Box::new(selection_strategy));
        self
    }

    pub fn with_crossover_strategy<C>(mut self, crossover_strategy: C) -> Self
    where
        C: CrossoverStrategy<T> + 'static,
    {
        self.crossover_strategy = Some(Box::new(crossover_strategy));
        self
    }

    pub fn with_mutation_strategy<M>(mut self, mutation_strategy: M) -> Self
    where
        M: MutationStrategy<T> + 'static,
    {
        self.mutation_strategy = Some(Box::new(mutation_strategy));
        self
    }

    pub fn with_reinsertion_strategy<R>(mut self, reinsertion_strategy: R) -> Self
    where
        R: ReinsertionStrategy<T> + 'static,
    {
        self.reinsertion_strategy = Some(Box::new(reinsertion_strategy));
        self
    }

    pub fn build(self) -> Result<EvolutionLauncher<T, P>> {
        let problem = self
            .problem
            .ok_or_else(|| GeneticError::Configuration("Problem not specified".to_string()))?;

        Ok(EvolutionLauncher::with_strategies(
            problem,
            self.selection_strategy
                .unwrap_or_else(|| Box::new(ElitistSelection::default())),
            self.crossover_strategy
                .unwrap_or_else(|| Box::new(SinglePointCrossover::new())),
            self.mutation_strategy
                .unwrap_or_else(|| Box::new(ScrambleMutation::new())),
            self.reinsertion_strategy
                .unwrap_or_else(|| Box::new(PureReinsertion::new())),
        ))
    }
}

impl<T: Gene, P: Problem<T>> Default for EvolutionLauncherBuilder<T, P> {
    fn default() -> Self {
        Self::new()
    }
}
