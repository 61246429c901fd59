//! Guessword
//!
//! A word-guessing game where the board shows only how many letters are in
//! the right place and how many are misplaced. Per-letter hints appear on a
//! virtual keyboard, filtered by a difficulty setting.
//!
//! # Quick Start
//!
//! ```rust
//! use guessword::core::{DifficultyPolicy, KeyState, KeyboardHints, Word, score};
//!
//! let guess = Word::new("word").unwrap();
//! let target = Word::new("bird").unwrap();
//!
//! let result = score(&guess, &target).unwrap();
//! assert_eq!((result.correct_count(), result.present_count()), (2, 0));
//!
//! let hints = KeyboardHints::new().update(
//!     &guess,
//!     result.per_position(),
//!     DifficultyPolicy::LimitedAbsentOnly,
//! );
//! assert_eq!(hints.get(b'W'), KeyState::Absent);
//! assert_eq!(hints.get(b'R'), KeyState::Unused);
//! ```

// Scoring engine and keyboard hints
pub mod core;

// Rounds, sessions and statistics
pub mod game;

// Outcome distributions and the automated player
pub mod analysis;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
