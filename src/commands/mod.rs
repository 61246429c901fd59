//! Command implementations

pub mod analyze;
pub mod replay;
pub mod score;
pub mod simple;
pub mod simulate;

pub use analyze::analyze_guess;
pub use replay::{ReplayReport, ReplayStep, replay_guesses};
pub use score::{ScoreReport, score_words};
pub use simple::run_simple;
pub use simulate::{SimulationReport, run_simulation};
