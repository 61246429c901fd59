//! Core domain types for Guessword
//!
//! This module contains the scoring engine and keyboard hint aggregation.
//! Everything here is pure: no I/O, no shared state.

mod hints;
mod score;
mod word;

pub use hints::{DifficultyPolicy, KeyState, KeyboardHints, update_hints};
pub use score::{LetterClass, ScoreResult, score};
pub use word::{WORD_LENGTH, Word, WordError};
