pub mod evolution;
pub mod sweep;

pub use evolution::{EvolutionRun, EvolutionSample};
pub use sweep::{SweepRanges, SweepResult, SweepSummary};
