//! # Annealing
//!
//! The temperature handed to [`Problem::terminate`](super::Problem::terminate) is an
//! annealing-style signal built from how much the best fitness improved:
//!
//! ```text
//! temperature' = (1 - cooling_rate) * (temperature + (best_fitness - last_max_fitness))
//! ```
//!
//! With the default cooling rate of `1.0` the temperature is `0.0` every generation.
//! A cooling rate below `1.0` lets improvement accumulate, so a termination
//! predicate can stop once the temperature falls under a threshold (the search has
//! stalled).

/// Running temperature state of one evolution.
#[derive(Debug, Clone, PartialEq)]
pub struct Annealing {
    cooling_rate: f64,
    temperature: f64,
    last_max_fitness: f64,
}

impl Annealing {
    /// Starts at temperature `0.0` with a previous best fitness of `0.0`.
    pub fn new(cooling_rate: f64) -> Self {
        Self {
            cooling_rate,
            temperature: 0.0,
            last_max_fitness: 0.0,
        }
    }

    /// Folds this generation's best fitness into the temperature and returns it.
    pub fn cool(&mut self, best_fitness: f64) -> f64 {
        self.temperature = (1.0 - self.cooling_rate)
            * (self.temperature + (best_fitness - self.last_max_fitness));
        self.last_max_fitness = best_fitness;
        self.temperature
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub fn last_max_fitness(&self) -> f64 {
        self.last_max_fitness
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_cooling_collapses_temperature() {
        let mut annealing = Annealing::new(1.0);
        assert_eq!(annealing.cool(10.0), 0.0);
        assert_eq!(annealing.cool(25.0), 0.0);
        assert_eq!(annealing.last_max_fitness(), 25.0);
    }

    #[test]
    fn test_temperature_accumulates_improvement() {
        let mut annealing = Annealing::new(0.5);

        // 0.5 * (0 + (4 - 0)) = 2
        assert_eq!(annealing.cool(4.0), 2.0);
        // 0.5 * (2 + (6 - 4)) = 2
        assert_eq!(annealing.cool(6.0), 2.0);
        // Stalled: 0.5 * (2 + 0) = 1
        assert_eq!(annealing.cool(6.0), 1.0);
        assert_eq!(annealing.temperature(), 1.0);
    }

    #[test]
    fn test_zero_cooling_keeps_full_history() {
        let mut annealing = Annealing::new(0.0);
        annealing.cool(3.0);
        annealing.cool(5.0);
        // The temperature telescopes to the latest best fitness
        assert_eq!(annealing.cool(4.0), 4.0);
    }
}
