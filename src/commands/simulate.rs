//! Simulate command
//!
//! Plays every word in the list with the elimination player and reports how
//! many rounds are won and in how many attempts. Rounds are independent, so
//! they run in parallel.

use crate::analysis::{best_guess, play_round};
use crate::core::Word;
use crate::game::{GameConfig, GameStats, RoundStatus};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Statistics from a simulation run
#[derive(Debug)]
pub struct SimulationReport {
    pub opener: Option<String>,
    pub stats: GameStats,
    /// Targets the player failed to find within the attempt limit
    pub lost_words: Vec<String>,
    pub duration: Duration,
    pub max_attempts: usize,
}

/// Simulate rounds against the first `limit` words (all words if `None`)
///
/// The player guesses from the full list. The first guess is computed once
/// and shared by every round.
#[must_use]
pub fn run_simulation(
    words: &[Word],
    limit: Option<usize>,
    config: GameConfig,
    show_progress: bool,
) -> SimulationReport {
    let start = Instant::now();
    let targets: Vec<&Word> = words
        .iter()
        .take(limit.unwrap_or(words.len()))
        .collect();

    let all: Vec<&Word> = words.iter().collect();
    let opener = best_guess(&all);
    debug!(opener = ?opener.map(Word::text), "opening guess chosen");

    let pb = if show_progress {
        ProgressBar::new(targets.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let statuses: Vec<(String, RoundStatus, Duration)> = targets
        .par_iter()
        .filter_map(|&target| {
            let result = play_round(target, words, opener, config);
            pb.inc(1);
            match result {
                Ok(round) => Some((target.text().to_string(), round.status(), round.elapsed())),
                Err(e) => {
                    warn!(target = %target, error = %e, "round could not be played");
                    None
                }
            }
        })
        .collect();

    pb.finish_with_message("Complete!");

    let mut stats = GameStats::default();
    let mut lost_words = Vec::new();
    for (word, status, elapsed) in statuses {
        if let RoundStatus::Lost { .. } = status {
            lost_words.push(word);
        }
        stats.record(status, elapsed);
    }

    SimulationReport {
        opener: opener.map(|w| w.text().to_string()),
        stats,
        lost_words,
        duration: start.elapsed(),
        max_attempts: config.max_attempts,
    }
}
