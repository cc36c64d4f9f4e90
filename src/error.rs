//! # Error Types
//!
//! This module defines the error type shared by every stage of a run. Invalid
//! configuration is rejected before the first generation; operator contract
//! violations abort the run at the generation where they happen.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use chromevo::error::{GeneticError, Result};
//!
//! fn check_rate(rate: f64) -> Result<f64> {
//!     if !(0.0..=1.0).contains(&rate) {
//!         return Err(GeneticError::Configuration(format!("rate {} out of range", rate)));
//!     }
//!     Ok(rate)
//! }
//!
//! assert!(check_rate(0.5).is_ok());
//! assert!(check_rate(1.5).is_err());
//! ```
//!
//! Using the `OptionExt` trait to convert `Option` to `Result`:
//!
//! ```rust
//! use chromevo::error::{GeneticError, OptionExt};
//!
//! fn find_best(scores: &[i32]) -> chromevo::error::Result<i32> {
//!     scores.iter().max().cloned().ok_or_else_genetic(||
//!         GeneticError::EmptyPopulation
//!     )
//! }
//!
//! assert_eq!(find_best(&[1, 7, 3]).unwrap(), 7);
//! assert!(find_best(&[]).is_err());
//! ```

use thiserror::Error;

/// Represents errors that can occur while running an evolution.
#[derive(Error, Debug)]
pub enum GeneticError {
    /// Error that occurs when an invalid configuration is provided.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Error that occurs when an empty population is encountered.
    #[error("Empty population error: Cannot operate on an empty population")]
    EmptyPopulation,

    /// Error that occurs when a fitness calculation yields an unusable value.
    #[error("Fitness calculation error: {0}")]
    FitnessCalculation(String),

    /// Error that occurs when a selection strategy breaks its contract.
    #[error("Selection error: {0}")]
    Selection(String),

    /// Error that occurs when a crossover strategy cannot combine its parents.
    #[error("Crossover error: {0}")]
    Crossover(String),

    /// Error that occurs when a mutation strategy cannot mutate a chromosome.
    #[error("Mutation error: {0}")]
    Mutation(String),

    /// Error that occurs when reinsertion cannot rebuild the population.
    #[error("Reinsertion error: {0}")]
    Reinsertion(String),
}

/// A specialized Result type for evolution operations.
///
/// This type is a convenience wrapper around `std::result::Result` with the error type
/// fixed to `GeneticError`.
pub type Result<T> = std::result::Result<T, GeneticError>;

/// Extension trait for Option to convert to Result with a custom error.
pub trait OptionExt<T> {
    /// Converts an `Option<T>` to a `Result<T, GeneticError>` using
    /// a closure to generate the error.
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError,
    {
        self.ok_or_else(err_fn)
    }
}

/// Checks that a rate or probability lies in `[0, 1]`.
///
/// Used by option and strategy constructors so that every rate-like
/// parameter is rejected with the same message.
pub(crate) fn ensure_unit_interval(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        return Err(GeneticError::Configuration(format!(
            "{} must be between 0.0 and 1.0, got {}",
            name, value
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_unit_interval() {
        assert!(ensure_unit_interval("rate", 0.0).is_ok());
        assert!(ensure_unit_interval("rate", 1.0).is_ok());
        assert!(ensure_unit_interval("rate", -0.1).is_err());
        assert!(ensure_unit_interval("rate", f64::NAN).is_err());

        match ensure_unit_interval("Cooling rate", 2.0) {
            Err(GeneticError::Configuration(msg)) => {
                assert!(msg.contains("Cooling rate must be between 0.0 and 1.0"));
            }
            _ => panic!("Expected Configuration error"),
        }
    }

    #[test]
    fn test_error_display() {
        let err = GeneticError::Selection("expected 4, got 3".to_string());
        assert_eq!(err.to_string(), "Selection error: expected 4, got 3");
        assert_eq!(
            GeneticError::EmptyPopulation.to_string(),
            "Empty population error: Cannot operate on an empty population"
        );
    }
}
