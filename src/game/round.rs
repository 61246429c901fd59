//! Round state machine
//!
//! A round owns one target word, the guesses made against it and the
//! keyboard hints they produced. Rounds are independent values: nothing is
//! shared between them, so separate rounds can be played on separate threads.

use super::GameConfig;
use super::config::CHEAT_CODE;
use crate::core::{DifficultyPolicy, KeyboardHints, ScoreResult, Word, WordError, score};
use std::fmt;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Error returned when a guess cannot be accepted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    /// The guess failed validation (length or characters)
    Word(WordError),
    /// The round is already won or lost
    RoundOver,
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Word(e) => write!(f, "{e}"),
            Self::RoundOver => write!(f, "This round is over. Start a new game to keep playing."),
        }
    }
}

impl std::error::Error for GuessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Word(e) => Some(e),
            Self::RoundOver => None,
        }
    }
}

impl From<WordError> for GuessError {
    fn from(e: WordError) -> Self {
        Self::Word(e)
    }
}

/// Where a round stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    InProgress,
    Won { attempts: usize },
    Lost { attempts: usize },
}

impl RoundStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// One accepted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    pub guess: Word,
    pub score: ScoreResult,
    /// 1-based attempt number
    pub attempt: usize,
}

/// Result of submitting a guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessOutcome {
    pub record: GuessRecord,
    pub status: RoundStatus,
    pub remaining_attempts: usize,
    /// Time on the round clock when the guess was made
    pub elapsed: Duration,
}

/// A single round: one target word, up to `max_attempts` guesses
///
/// The round clock starts on the first keystroke ([`Round::start_timer`]) or,
/// failing that, on the first guess. It stops when the round ends.
#[derive(Debug, Clone)]
pub struct Round {
    target: Word,
    config: GameConfig,
    history: Vec<GuessRecord>,
    hints: KeyboardHints,
    status: RoundStatus,
    started: Option<Instant>,
    finished: Option<Duration>,
    revealed: bool,
}

impl Round {
    /// Start a round for `target`
    ///
    /// # Errors
    /// Returns `WordError::InvalidLength` if the target does not have
    /// `config.word_length` letters.
    pub fn new(target: Word, config: GameConfig) -> Result<Self, WordError> {
        if target.len() != config.word_length {
            return Err(WordError::InvalidLength {
                expected: config.word_length,
                actual: target.len(),
            });
        }

        debug!(length = config.word_length, policy = %config.policy, "round started");

        Ok(Self {
            target,
            config,
            history: Vec::new(),
            hints: KeyboardHints::new(),
            status: RoundStatus::InProgress,
            started: None,
            finished: None,
            revealed: false,
        })
    }

    /// Start the round clock if it is not running yet
    pub fn start_timer(&mut self) {
        self.start_timer_at(Instant::now());
    }

    /// [`Round::start_timer`] with an explicit clock reading
    pub fn start_timer_at(&mut self, now: Instant) {
        if self.started.is_none() && !self.status.is_over() {
            self.started = Some(now);
        }
    }

    /// Time on the round clock: frozen once the round is over
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.finished
            .or_else(|| self.started.map(|start| start.elapsed()))
            .unwrap_or_default()
    }

    /// Reveal the target if `code` is the cheat code
    ///
    /// A revealed round still plays normally but is kept off the leaderboard.
    pub fn reveal(&mut self, code: &str) -> Option<&Word> {
        if !code.trim().eq_ignore_ascii_case(CHEAT_CODE) {
            return None;
        }
        if !self.revealed {
            info!("cheat code used, target revealed");
        }
        self.revealed = true;
        Some(&self.target)
    }

    /// True once the cheat code has been used this round
    #[must_use]
    pub const fn revealed(&self) -> bool {
        self.revealed
    }

    /// Validate, score and record a guess
    ///
    /// Input is case-insensitive and surrounding whitespace is ignored. A
    /// rejected guess does not use up an attempt.
    ///
    /// # Errors
    /// Returns `GuessError::RoundOver` once the round is won or lost, or
    /// `GuessError::Word` if the guess has the wrong length or non-letters.
    ///
    /// # Examples
    /// ```
    /// use guessword::core::Word;
    /// use guessword::game::{GameConfig, Round, RoundStatus};
    ///
    /// let mut round = Round::new(Word::new("bird").unwrap(), GameConfig::default()).unwrap();
    /// let outcome = round.submit("word").unwrap();
    /// assert_eq!(outcome.record.score.correct_count(), 2);
    /// assert_eq!(outcome.status, RoundStatus::InProgress);
    ///
    /// let outcome = round.submit("BIRD").unwrap();
    /// assert_eq!(outcome.status, RoundStatus::Won { attempts: 2 });
    /// ```
    pub fn submit(&mut self, input: &str) -> Result<GuessOutcome, GuessError> {
        self.submit_at(input, Instant::now())
    }

    /// [`Round::submit`] with an explicit clock reading
    ///
    /// # Errors
    /// Same as [`Round::submit`].
    pub fn submit_at(&mut self, input: &str, now: Instant) -> Result<GuessOutcome, GuessError> {
        if self.status.is_over() {
            return Err(GuessError::RoundOver);
        }

        let guess = Word::with_length(input.trim(), self.config.word_length)?;
        let result = score(&guess, &self.target)?;

        self.hints = self
            .hints
            .update(&guess, result.per_position(), self.config.policy);

        self.start_timer_at(now);
        let elapsed = self
            .started
            .map_or(Duration::ZERO, |start| now.saturating_duration_since(start));

        let attempt = self.history.len() + 1;
        self.status = if result.is_solved() {
            RoundStatus::Won { attempts: attempt }
        } else if attempt >= self.config.max_attempts {
            RoundStatus::Lost { attempts: attempt }
        } else {
            RoundStatus::InProgress
        };
        if self.status.is_over() {
            self.finished = Some(elapsed);
        }

        debug!(
            attempt,
            guess = %guess,
            correct = result.correct_count(),
            present = result.present_count(),
            status = ?self.status,
            "guess scored"
        );

        let record = GuessRecord {
            guess,
            score: result,
            attempt,
        };
        self.history.push(record.clone());

        Ok(GuessOutcome {
            record,
            status: self.status,
            remaining_attempts: self.remaining_attempts(),
            elapsed,
        })
    }

    /// Change the keyboard policy for later guesses
    ///
    /// Hints already revealed stay on the keyboard.
    pub fn set_policy(&mut self, policy: DifficultyPolicy) {
        self.config.policy = policy;
    }

    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    #[must_use]
    pub const fn hints(&self) -> &KeyboardHints {
        &self.hints
    }

    #[must_use]
    pub const fn status(&self) -> RoundStatus {
        self.status
    }

    #[must_use]
    pub fn attempts_used(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn remaining_attempts(&self) -> usize {
        self.config.max_attempts.saturating_sub(self.history.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::KeyState;

    fn round(target: &str, policy: DifficultyPolicy) -> Round {
        Round::new(Word::new(target).unwrap(), GameConfig::new(policy)).unwrap()
    }

    #[test]
    fn winning_guess_ends_round() {
        let mut round = round("BIRD", DifficultyPolicy::Full);
        round.submit("WORD").unwrap();
        let outcome = round.submit("bird").unwrap();

        assert_eq!(outcome.status, RoundStatus::Won { attempts: 2 });
        assert_eq!(outcome.record.attempt, 2);
        assert_eq!(outcome.remaining_attempts, 6);
        assert!(round.status().is_over());
    }

    #[test]
    fn eighth_wrong_guess_loses() {
        let mut round = round("BIRD", DifficultyPolicy::Full);
        for attempt in 1..8 {
            let outcome = round.submit("LAMP").unwrap();
            assert_eq!(outcome.status, RoundStatus::InProgress, "attempt {attempt}");
        }
        let outcome = round.submit("LAMP").unwrap();
        assert_eq!(outcome.status, RoundStatus::Lost { attempts: 8 });
        assert_eq!(outcome.remaining_attempts, 0);
    }

    #[test]
    fn guesses_after_round_over_are_rejected() {
        let mut round = round("BIRD", DifficultyPolicy::Full);
        round.submit("BIRD").unwrap();
        assert_eq!(round.submit("WORD"), Err(GuessError::RoundOver));
        assert_eq!(round.attempts_used(), 1);
    }

    #[test]
    fn invalid_guess_does_not_use_an_attempt() {
        let mut round = round("BIRD", DifficultyPolicy::Full);

        assert_eq!(
            round.submit("BIRDS"),
            Err(GuessError::Word(WordError::InvalidLength {
                expected: 4,
                actual: 5
            }))
        );
        assert_eq!(
            round.submit("B1RD"),
            Err(GuessError::Word(WordError::InvalidCharacters))
        );
        assert_eq!(round.attempts_used(), 0);
        assert_eq!(round.remaining_attempts(), 8);
    }

    #[test]
    fn input_is_trimmed_and_uppercased() {
        let mut round = round("BIRD", DifficultyPolicy::Full);
        let outcome = round.submit("  word\n").unwrap();
        assert_eq!(outcome.record.guess.text(), "WORD");
    }

    #[test]
    fn hints_follow_policy() {
        let mut easy = round("BIRD", DifficultyPolicy::Full);
        easy.submit("WORD").unwrap();
        assert_eq!(easy.hints().get(b'R'), KeyState::Correct);

        let mut medium = round("BIRD", DifficultyPolicy::LimitedAbsentOnly);
        medium.submit("WORD").unwrap();
        assert_eq!(medium.hints().get(b'R'), KeyState::Unused);
        assert_eq!(medium.hints().get(b'W'), KeyState::Absent);

        let mut raw = round("BIRD", DifficultyPolicy::None);
        raw.submit("LAMP").unwrap();
        assert_eq!(*raw.hints(), KeyboardHints::new());
    }

    #[test]
    fn policy_change_keeps_revealed_hints() {
        let mut round = round("BIRD", DifficultyPolicy::Full);
        round.submit("WORD").unwrap();
        round.set_policy(DifficultyPolicy::None);
        round.submit("LAMP").unwrap();

        assert_eq!(round.hints().get(b'R'), KeyState::Correct);
        assert_eq!(round.hints().get(b'L'), KeyState::Unused);
    }

    #[test]
    fn target_length_must_match_config() {
        let config = GameConfig {
            word_length: 5,
            ..GameConfig::default()
        };
        assert!(Round::new(Word::new("BIRD").unwrap(), config).is_err());

        let five = Word::with_length("CRANE", 5).unwrap();
        let mut round = Round::new(five, config).unwrap();
        assert!(round.submit("BIRD").is_err());
        assert!(round.submit("SLATE").is_ok());
    }

    #[test]
    fn clock_starts_on_first_keystroke_and_stops_at_the_end() {
        let t0 = Instant::now();
        let mut round = round("BIRD", DifficultyPolicy::Full);
        round.start_timer_at(t0);
        // A second keystroke does not restart the clock
        round.start_timer_at(t0 + Duration::from_secs(1));

        let first = round
            .submit_at("WORD", t0 + Duration::from_secs(3))
            .unwrap();
        assert_eq!(first.elapsed, Duration::from_secs(3));

        let last = round
            .submit_at("BIRD", t0 + Duration::from_millis(7_250))
            .unwrap();
        assert_eq!(last.elapsed, Duration::from_millis(7_250));
        assert_eq!(round.elapsed(), Duration::from_millis(7_250));
    }

    #[test]
    fn clock_starts_on_first_guess_without_keystrokes() {
        let t0 = Instant::now();
        let mut round = round("BIRD", DifficultyPolicy::Full);
        assert_eq!(round.elapsed(), Duration::ZERO);

        let outcome = round.submit_at("BIRD", t0).unwrap();
        assert_eq!(outcome.elapsed, Duration::ZERO);
        assert_eq!(round.elapsed(), Duration::ZERO);
    }

    #[test]
    fn lost_round_freezes_clock() {
        let t0 = Instant::now();
        let mut round = round("BIRD", DifficultyPolicy::Full);
        round.start_timer_at(t0);
        for second in 1..=8 {
            round
                .submit_at("LAMP", t0 + Duration::from_secs(second))
                .unwrap();
        }
        assert!(matches!(round.status(), RoundStatus::Lost { .. }));
        assert_eq!(round.elapsed(), Duration::from_secs(8));
    }

    #[test]
    fn cheat_code_reveals_target() {
        let mut round = round("BIRD", DifficultyPolicy::Full);
        assert_eq!(round.reveal("LAMP"), None);
        assert!(!round.revealed());

        assert_eq!(round.reveal(" dali ").map(Word::text), Some("BIRD"));
        assert!(round.revealed());
        // Revealing does not use an attempt
        assert_eq!(round.attempts_used(), 0);
    }

    #[test]
    fn error_display() {
        let err = GuessError::from(WordError::InvalidCharacters);
        assert_eq!(err.to_string(), "Your guess must contain only letters.");
        assert!(std::error::Error::source(&err).is_some());
    }
}
