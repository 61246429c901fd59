//! In-memory leaderboard of won rounds
//!
//! Entries rank by attempts, then by clock time. Only the best
//! [`LEADERBOARD_SIZE`] are kept.

use std::time::Duration;

/// Number of entries kept
pub const LEADERBOARD_SIZE: usize = 10;

/// One won round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub player: String,
    pub attempts: usize,
    pub time: Duration,
    /// Session level the round was won on
    pub level: usize,
}

impl LeaderboardEntry {
    fn rank_key(&self) -> (usize, Duration) {
        (self.attempts, self.time)
    }
}

/// Best won rounds, best first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaderboard {
    entries: Vec<LeaderboardEntry>,
    capacity: usize,
}

impl Default for Leaderboard {
    fn default() -> Self {
        Self::with_capacity(LEADERBOARD_SIZE)
    }
}

impl Leaderboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Insert an entry and return its 1-based rank
    ///
    /// Returns `None` when the entry does not make the cut. An entry that ties
    /// an existing one ranks below it.
    ///
    /// # Examples
    /// ```
    /// use guessword::game::{Leaderboard, LeaderboardEntry};
    /// use std::time::Duration;
    ///
    /// let mut board = Leaderboard::new();
    /// let entry = |attempts, secs| LeaderboardEntry {
    ///     player: "ada".to_string(),
    ///     attempts,
    ///     time: Duration::from_secs(secs),
    ///     level: 1,
    /// };
    ///
    /// assert_eq!(board.add(entry(4, 30)), Some(1));
    /// assert_eq!(board.add(entry(3, 90)), Some(1));
    /// assert_eq!(board.add(entry(4, 10)), Some(2));
    /// ```
    pub fn add(&mut self, entry: LeaderboardEntry) -> Option<usize> {
        let key = entry.rank_key();
        let pos = self.entries.partition_point(|e| e.rank_key() <= key);
        if pos >= self.capacity {
            return None;
        }
        self.entries.insert(pos, entry);
        self.entries.truncate(self.capacity);
        Some(pos + 1)
    }

    #[must_use]
    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
