//! # EvolutionOptions
//!
//! The `EvolutionOptions` struct holds the run configuration of an evolution: the
//! population size, the stage rates, the logging level and an optional bound on
//! the number of generations.
//!
//! ## Example
//!
//! ```rust
//! use chromevo::evolution::options::{EvolutionOptions, LogLevel};
//!
//! // Create a new EvolutionOptions instance with custom parameters
//! let custom_options = EvolutionOptions::new(200, 0.1);
//! assert_eq!(custom_options.get_population_size(), 200);
//!
//! // Create a new EvolutionOptions instance with default parameters
//! let default_options = EvolutionOptions::default();
//! assert_eq!(default_options.get_cooling_rate(), 1.0);
//! ```
//!
//! ## Fields
//!
//! - `population_size`: The number of chromosomes in every generation.
//! - `mutation_probability`: The share of the population that is mutated each generation.
//! - `cooling_rate`: How fast the annealing temperature decays (`1.0` disables it).
//! - `selection_rate`: The share of the population selected as parents.
//! - `log_level`: The logging level, represented by the `LogLevel` enum.
//! - `max_generations`: An optional hard bound on the number of evaluated generations.
//!
//! ## Validation
//!
//! [`EvolutionOptionsBuilder::build`] validates the options and returns a `Result`.
//! Options assembled through [`EvolutionOptions::new`] or the setters are validated
//! by the launcher before the first generation.

use crate::error::{ensure_unit_interval, GeneticError, Result};

/// How much the launcher reports through `tracing`.
///
/// - `Verbose`: best, worst and average fitness for every generation.
/// - `Minimal`: best fitness for every generation.
/// - `None`: only the completion events.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Verbose,
    Minimal,
    #[default]
    None,
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionOptions {
    population_size: usize,
    mutation_probability: f64,
    cooling_rate: f64,
    selection_rate: f64,
    log_level: LogLevel,
    max_generations: Option<usize>,
}

impl EvolutionOptions {
    /// Creates options with the given population size and mutation probability.
    ///
    /// Every other option takes its default: cooling and selection rate `1.0`, no
    /// logging and no generation bound.
    pub fn new(population_size: usize, mutation_probability: f64) -> Self {
        Self {
            population_size,
            mutation_probability,
            ..Self::default()
        }
    }

    pub fn get_population_size(&self) -> usize {
        self.population_size
    }

    pub fn get_mutation_probability(&self) -> f64 {
        self.mutation_probability
    }

    pub fn get_cooling_rate(&self) -> f64 {
        self.cooling_rate
    }

    pub fn get_selection_rate(&self) -> f64 {
        self.selection_rate
    }

    pub fn get_log_level(&self) -> LogLevel {
        self.log_level
    }

    pub fn get_max_generations(&self) -> Option<usize> {
        self.max_generations
    }

    /// Sets the population size.
    pub fn set_population_size(&mut self, population_size: usize) {
        self.population_size = population_size;
    }

    /// Sets the mutation probability.
    pub fn set_mutation_probability(&mut self, mutation_probability: f64) {
        self.mutation_probability = mutation_probability;
    }

    /// Sets the cooling rate.
    pub fn set_cooling_rate(&mut self, cooling_rate: f64) {
        self.cooling_rate = cooling_rate;
    }

    /// Sets the selection rate.
    pub fn set_selection_rate(&mut self, selection_rate: f64) {
        self.selection_rate = selection_rate;
    }

    /// Sets the log level.
    pub fn set_log_level(&mut self, log_level: LogLevel) {
        self.log_level = log_level;
    }

    /// Sets or clears the generation bound.
    pub fn set_max_generations(&mut self, max_generations: Option<usize>) {
        self.max_generations = max_generations;
    }

    /// Checks every option against its allowed range.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` if the population size is zero, a rate
    /// lies outside `[0, 1]` or the generation bound is zero.
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(GeneticError::Configuration(
                "Population size cannot be zero".to_string(),
            ));
        }
        ensure_unit_interval("Mutation probability", self.mutation_probability)?;
        ensure_unit_interval("Cooling rate", self.cooling_rate)?;
        ensure_unit_interval("Selection rate", self.selection_rate)?;
        if self.max_generations == Some(0) {
            return Err(GeneticError::Configuration(
                "Max generations must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Returns a builder for creating an `EvolutionOptions` instance.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chromevo::evolution::options::{EvolutionOptions, LogLevel};
    ///
    /// let options = EvolutionOptions::builder()
    ///     .population_size(50)
    ///     .mutation_probability(0.2)
    ///     .selection_rate(0.8)
    ///     .show_log_stream(true)
    ///     .max_generations(1_000)
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(options.get_log_level(), LogLevel::Minimal);
    /// ```
    pub fn builder() -> EvolutionOptionsBuilder {
        EvolutionOptionsBuilder::default()
    }
}

impl Default for EvolutionOptions {
    fn default() -> Self {
        Self {
            population_size: 100,
            mutation_probability: 0.05,
            cooling_rate: 1.0,
            selection_rate: 1.0,
            log_level: LogLevel::None,
            max_generations: None,
        }
    }
}

/// Builder for `EvolutionOptions`.
///
/// Options that are never set take the values of [`EvolutionOptions::default`].
#[derive(Debug, Clone, Default)]
pub struct EvolutionOptionsBuilder {
    population_size: Option<usize>,
    mutation_probability: Option<f64>,
    cooling_rate: Option<f64>,
    selection_rate: Option<f64>,
    log_level: Option<LogLevel>,
    max_generations: Option<usize>,
}

impl EvolutionOptionsBuilder {
    pub fn population_size(mut self, value: usize) -> Self {
        self.population_size = Some(value);
        self
    }

    pub fn mutation_probability(mut self, value: f64) -> Self {
        self.mutation_probability = Some(value);
        self
    }

    pub fn cooling_rate(mut self, value: f64) -> Self {
        self.cooling_rate = Some(value);
        self
    }

    pub fn selection_rate(mut self, value: f64) -> Self {
        self.selection_rate = Some(value);
        self
    }

    pub fn log_level(mut self, value: LogLevel) -> Self {
        self.log_level = Some(value);
        self
    }

    /// `true` logs the best fitness of every generation, `false` silences progress.
    pub fn show_log_stream(self, show: bool) -> Self {
        self.log_level(if show {
            LogLevel::Minimal
        } else {
            LogLevel::None
        })
    }

    pub fn max_generations(mut self, value: usize) -> Self {
        self.max_generations = Some(value);
        self
    }

    /// Builds and validates the `EvolutionOptions` instance.
    ///
    /// # Errors
    ///
    /// See [`EvolutionOptions::validate`].
    pub fn build(self) -> Result<EvolutionOptions> {
        let defaults = EvolutionOptions::default();
        let options = EvolutionOptions {
            population_size: self.population_size.unwrap_or(defaults.population_size),
            mutation_probability: self
                .mutation_probability
                .unwrap_or(defaults.mutation_probability),
            cooling_rate: self.cooling_rate.unwrap_or(defaults.cooling_rate),
            selection_rate: self.selection_rate.unwrap_or(defaults.selection_rate),
            log_level: self.log_level.unwrap_or(defaults.log_level),
            max_generations: self.max_generations,
        };
        options.validate()?;
        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let options = EvolutionOptions::builder().build().unwrap();
        assert_eq!(options, EvolutionOptions::default());
    }

    #[test]
    fn test_show_log_stream() {
        let on = EvolutionOptions::builder().show_log_stream(true).build().unwrap();
        let off = EvolutionOptions::builder()
            .log_level(LogLevel::Verbose)
            .show_log_stream(false)
            .build()
            .unwrap();

        assert_eq!(on.get_log_level(), LogLevel::Minimal);
        assert_eq!(off.get_log_level(), LogLevel::None);
    }

    #[test]
    fn test_builder_rejects_invalid_options() {
        assert!(matches!(
            EvolutionOptions::builder().population_size(0).build(),
            Err(GeneticError::Configuration(_))
        ));
        assert!(EvolutionOptions::builder()
            .mutation_probability(1.5)
            .build()
            .is_err());
        assert!(EvolutionOptions::builder().cooling_rate(-0.1).build().is_err());
        assert!(EvolutionOptions::builder()
            .selection_rate(f64::NAN)
            .build()
            .is_err());
        assert!(EvolutionOptions::builder().max_generations(0).build().is_err());
    }

    #[test]
    fn test_setters_bypass_builder_but_not_validate() {
        let mut options = EvolutionOptions::new(10, 0.5);
        assert!(options.validate().is_ok());

        options.set_selection_rate(2.0);
        assert!(options.validate().is_err());

        options.set_selection_rate(0.5);
        options.set_max_generations(Some(3));
        assert!(options.validate().is_ok());
        assert_eq!(options.get_max_generations(), Some(3));
    }
}
