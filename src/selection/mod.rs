pub mod elitist;
pub mod random;
pub mod roulette;
pub mod selection_strategy;
pub mod tournament;

pub use elitist::ElitistSelection;
pub use random::RandomSelection;
pub use roulette::RouletteWheelSelection;
pub use selection_strategy::SelectionStrategy;
pub use tournament::TournamentSelection;
