//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_analysis, print_board, print_keyboard, print_leaderboard, print_replay,
    print_score_report, print_simulation, print_stats,
};
