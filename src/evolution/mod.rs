pub mod annealing;
pub mod builder;
pub mod launcher;
pub mod options;
pub mod problem;
pub mod stages;

pub use annealing::Annealing;
pub use builder::EvolutionLauncherBuilder;
pub use launcher::{EvolutionLauncher, EvolutionResult, Termination};
pub use options::{EvolutionOptions, EvolutionOptionsBuilder, LogLevel};
pub use problem::{FnProblem, Problem};
