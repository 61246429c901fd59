//! A play session: successive rounds drawn from a word list

use super::{
    GameConfig, GameStats, GuessError, GuessOutcome, Leaderboard, LeaderboardEntry, Round,
    RoundStatus,
};
use crate::core::{DifficultyPolicy, Word, WordError};
use rand::prelude::IndexedRandom;
use std::fmt;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Error creating a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// No word in the list has the configured length
    NoWords { length: usize },
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWords { length } => write!(f, "No {length}-letter words available"),
        }
    }
}

impl std::error::Error for SessionError {}

/// Name used on the leaderboard when none is given
pub const DEFAULT_PLAYER: &str = "Player";

/// Successive rounds over one word list, with running statistics
///
/// The level goes up by one after every won round. Won rounds go on the
/// leaderboard unless the cheat code revealed the word.
pub struct Session {
    words: Vec<Word>,
    config: GameConfig,
    round: Round,
    stats: GameStats,
    level: usize,
    player: String,
    leaderboard: Leaderboard,
    last_rank: Option<usize>,
}

impl Session {
    /// Create a session and draw the first target
    ///
    /// Words whose length differs from `config.word_length` are skipped.
    ///
    /// # Errors
    /// Returns `SessionError::NoWords` if no usable word remains.
    pub fn new(words: &[Word], config: GameConfig) -> Result<Self, SessionError> {
        let words: Vec<Word> = words
            .iter()
            .filter(|w| w.len() == config.word_length)
            .cloned()
            .collect();

        let target = words
            .choose(&mut rand::rng())
            .cloned()
            .ok_or(SessionError::NoWords {
                length: config.word_length,
            })?;
        // Length was checked when the list was filtered
        let round = Round::new(target, config).map_err(|_| SessionError::NoWords {
            length: config.word_length,
        })?;

        info!(words = words.len(), policy = %config.policy, "session started");

        Ok(Self {
            words,
            config,
            round,
            stats: GameStats::default(),
            level: 1,
            player: DEFAULT_PLAYER.to_string(),
            leaderboard: Leaderboard::new(),
            last_rank: None,
        })
    }

    /// Name recorded on the leaderboard
    #[must_use]
    pub fn with_player(mut self, player: impl Into<String>) -> Self {
        self.player = player.into();
        self
    }

    /// Submit a guess to the current round
    ///
    /// Finished rounds are recorded in the statistics, and won rounds on the
    /// leaderboard.
    ///
    /// # Errors
    /// Propagates [`GuessError`] from [`Round::submit`].
    pub fn submit(&mut self, input: &str) -> Result<GuessOutcome, GuessError> {
        self.submit_at(input, Instant::now())
    }

    /// [`Session::submit`] with an explicit clock reading
    ///
    /// # Errors
    /// Propagates [`GuessError`] from [`Round::submit_at`].
    pub fn submit_at(&mut self, input: &str, now: Instant) -> Result<GuessOutcome, GuessError> {
        let outcome = self.round.submit_at(input, now)?;
        self.last_rank = None;
        if outcome.status.is_over() {
            self.stats.record(outcome.status, outcome.elapsed);
        }
        if let RoundStatus::Won { attempts } = outcome.status {
            if !self.round.revealed() {
                self.last_rank = self.leaderboard.add(LeaderboardEntry {
                    player: self.player.clone(),
                    attempts,
                    time: outcome.elapsed,
                    level: self.level,
                });
            }
            self.level += 1;
            debug!(level = self.level, rank = ?self.last_rank, "level up");
        }
        Ok(outcome)
    }

    /// Start the current round's clock (first keystroke)
    pub fn start_timer(&mut self) {
        self.round.start_timer();
    }

    /// Reveal the current target if `code` is the cheat code
    pub fn reveal(&mut self, code: &str) -> Option<&Word> {
        self.round.reveal(code)
    }

    /// Draw a new target and start a fresh round
    ///
    /// Avoids repeating the current target when the list has other words.
    /// An unfinished round is discarded without being counted.
    pub fn new_round(&mut self) {
        let current = self.round.target().clone();
        let pool: Vec<&Word> = self.words.iter().filter(|w| **w != current).collect();

        let target = pool
            .choose(&mut rand::rng())
            .map_or(current, |w| (*w).clone());
        self.replace_round(target);
    }

    /// Start a fresh round with a specific target
    ///
    /// # Errors
    /// Returns `WordError::InvalidLength` if the target length differs from
    /// the session's word length.
    pub fn start_round(&mut self, target: Word) -> Result<(), WordError> {
        self.round = Round::new(target, self.config)?;
        self.last_rank = None;
        Ok(())
    }

    // `words` only holds words of `config.word_length` and the length never
    // changes, so a drawn target always starts a round
    fn replace_round(&mut self, target: Word) {
        match Round::new(target, self.config) {
            Ok(round) => {
                self.round = round;
                self.last_rank = None;
            }
            Err(e) => warn!(error = %e, "could not start a new round; keeping the current one"),
        }
    }

    /// Set the difficulty used from the next round on
    pub fn set_policy(&mut self, policy: DifficultyPolicy) {
        self.config.policy = policy;
    }

    #[must_use]
    pub const fn round(&self) -> &Round {
        &self.round
    }

    #[must_use]
    pub const fn stats(&self) -> &GameStats {
        &self.stats
    }

    #[must_use]
    pub const fn level(&self) -> usize {
        self.level
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn player(&self) -> &str {
        &self.player
    }

    #[must_use]
    pub const fn leaderboard(&self) -> &Leaderboard {
        &self.leaderboard
    }

    /// Leaderboard rank earned by the last guess, if it won a ranked round
    #[must_use]
    pub const fn last_rank(&self) -> Option<usize> {
        self.last_rank
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;
    use std::time::Duration;

    fn session(words: &[&str]) -> Session {
        Session::new(&words_from_slice(words, 4), GameConfig::default()).unwrap()
    }

    #[test]
    fn empty_list_is_rejected() {
        let words = words_from_slice(&["CRANE", "SLATE"], 5);
        assert_eq!(
            Session::new(&words, GameConfig::default()).err(),
            Some(SessionError::NoWords { length: 4 })
        );
    }

    #[test]
    fn win_advances_level_and_stats() {
        let mut session = session(&["BIRD", "LAMP"]);
        session.start_round(Word::new("BIRD").unwrap()).unwrap();

        session.submit("WORD").unwrap();
        let outcome = session.submit("BIRD").unwrap();

        assert_eq!(outcome.status, RoundStatus::Won { attempts: 2 });
        assert_eq!(session.level(), 2);
        assert_eq!(session.stats().games_won, 1);
        assert_eq!(session.stats().guess_distribution.get(&2), Some(&1));
    }

    #[test]
    fn new_round_draws_a_different_word_and_resets_hints() {
        let mut session = session(&["BIRD", "LAMP"]);
        session.start_round(Word::new("BIRD").unwrap()).unwrap();
        session.submit("LAMP").unwrap();
        assert_ne!(session.round().hints(), &crate::core::KeyboardHints::new());

        session.new_round();
        assert_eq!(session.round().target().text(), "LAMP");
        assert_eq!(session.round().hints(), &crate::core::KeyboardHints::new());
        assert!(session.round().history().is_empty());
    }

    #[test]
    fn single_word_list_repeats_target() {
        let mut session = session(&["BIRD"]);
        session.new_round();
        assert_eq!(session.round().target().text(), "BIRD");
    }

    #[test]
    fn policy_change_applies_to_next_round() {
        let mut session = session(&["BIRD", "LAMP"]);
        session.set_policy(DifficultyPolicy::Full);
        assert_eq!(
            session.round().config().policy,
            DifficultyPolicy::LimitedAbsentOnly
        );
        session.new_round();
        assert_eq!(session.round().config().policy, DifficultyPolicy::Full);
    }

    #[test]
    fn new_round_always_starts_fresh_from_filtered_list() {
        let mut session = session(&["BIRD", "LAMP", "FROG"]);
        for _ in 0..20 {
            session.submit("WORD").unwrap();
            session.new_round();
            assert!(session.round().history().is_empty());
            assert_eq!(session.round().target().len(), 4);
        }
    }

    #[test]
    fn wins_go_on_the_leaderboard_with_time_and_level() {
        let t0 = Instant::now();
        let mut session = session(&["BIRD", "LAMP"]).with_player("ada");

        session.start_round(Word::new("BIRD").unwrap()).unwrap();
        session.submit_at("WORD", t0).unwrap();
        session.submit_at("BIRD", t0 + Duration::from_secs(40)).unwrap();
        assert_eq!(session.last_rank(), Some(1));

        session.start_round(Word::new("LAMP").unwrap()).unwrap();
        session.submit_at("LAMP", t0).unwrap();
        assert_eq!(session.last_rank(), Some(1));

        let entries = session.leaderboard().entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].attempts, 1);
        assert_eq!(entries[0].level, 2);
        assert_eq!(entries[1].player, "ada");
        assert_eq!(entries[1].time, Duration::from_secs(40));
        assert_eq!(entries[1].level, 1);
        assert_eq!(session.stats().total_time, Duration::from_secs(40));
    }

    #[test]
    fn revealed_rounds_stay_off_the_leaderboard() {
        let mut session = session(&["BIRD", "LAMP"]);
        session.start_round(Word::new("BIRD").unwrap()).unwrap();

        assert_eq!(session.reveal("DALI").map(Word::text), Some("BIRD"));
        session.submit("BIRD").unwrap();

        assert_eq!(session.last_rank(), None);
        assert!(session.leaderboard().is_empty());
        // Still counts as a win
        assert_eq!(session.stats().games_won, 1);
        assert_eq!(session.level(), 2);
    }

    #[test]
    fn lost_rounds_add_time_but_no_entry() {
        let t0 = Instant::now();
        let mut session = session(&["BIRD", "LAMP"]);
        session.start_round(Word::new("BIRD").unwrap()).unwrap();
        for second in 1..=8 {
            session
                .submit_at("LAMP", t0 + Duration::from_secs(second))
                .unwrap();
        }
        assert!(session.leaderboard().is_empty());
        assert_eq!(session.stats().total_time, Duration::from_secs(7));
    }

    #[test]
    fn wrong_length_words_are_filtered() {
        let words = vec![
            Word::new("BIRD").unwrap(),
            Word::with_length("CRANE", 5).unwrap(),
        ];
        let session = Session::new(&words, GameConfig::default()).unwrap();
        assert_eq!(session.word_count(), 1);
    }
}
