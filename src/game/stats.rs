//! Per-session game statistics

use super::RoundStatus;
use std::collections::HashMap;
use std::time::Duration;

/// Running totals across finished rounds
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GameStats {
    pub games_played: usize,
    pub games_won: usize,
    pub current_streak: usize,
    pub best_streak: usize,
    /// Winning attempt count -> number of wins
    pub guess_distribution: HashMap<usize, usize>,
    /// Clock time summed over every finished round, won or lost
    pub total_time: Duration,
}

impl GameStats {
    /// Record a finished round and its clock time
    ///
    /// Rounds still in progress are ignored.
    pub fn record(&mut self, status: RoundStatus, elapsed: Duration) {
        if status.is_over() {
            self.total_time += elapsed;
        }
        match status {
            RoundStatus::InProgress => {}
            RoundStatus::Won { attempts } => {
                self.games_played += 1;
                self.games_won += 1;
                self.current_streak += 1;
                self.best_streak = self.best_streak.max(self.current_streak);
                *self.guess_distribution.entry(attempts).or_insert(0) += 1;
            }
            RoundStatus::Lost { .. } => {
                self.games_played += 1;
                self.current_streak = 0;
            }
        }
    }

    /// Win rate as a percentage (0 when nothing has been played)
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.games_won as f64 / self.games_played as f64 * 100.0
        }
    }

    /// Average clock time per finished round
    #[must_use]
    pub fn average_time(&self) -> Option<Duration> {
        let played = u32::try_from(self.games_played).ok().filter(|&n| n > 0)?;
        Some(self.total_time / played)
    }

    /// Average attempts across won rounds
    #[must_use]
    pub fn average_attempts(&self) -> Option<f64> {
        if self.games_won == 0 {
            return None;
        }
        let total: usize = self
            .guess_distribution
            .iter()
            .map(|(attempts, count)| attempts * count)
            .sum();
        Some(total as f64 / self.games_won as f64)
    }
}
