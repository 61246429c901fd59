//! Word list analysis
//!
//! Outcome distributions for a guess and an automated player used to
//! measure how hard a word list is.

pub mod distribution;
pub mod player;

pub use distribution::{OutcomeDistribution, group_by_feedback, outcome_distribution};
pub use player::{EliminationPlayer, best_guess, play_round};
