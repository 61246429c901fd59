//! Replay command
//!
//! Plays a list of guesses against a known target and records the keyboard
//! after each one, showing what a difficulty setting reveals.

use crate::core::{DifficultyPolicy, KeyboardHints, Word};
use crate::game::{GameConfig, GuessError, GuessRecord, Round, RoundStatus};

/// One replayed guess and the keyboard it left behind
pub struct ReplayStep {
    pub record: GuessRecord,
    pub hints: KeyboardHints,
    pub status: RoundStatus,
}

/// Full replay of a round
pub struct ReplayReport {
    pub target: Word,
    pub policy: DifficultyPolicy,
    pub steps: Vec<ReplayStep>,
}

impl ReplayReport {
    /// Status after the last guess
    #[must_use]
    pub fn final_status(&self) -> RoundStatus {
        self.steps
            .last()
            .map_or(RoundStatus::InProgress, |step| step.status)
    }
}

/// Replay `guesses` against `target` under `config`
///
/// # Errors
///
/// Returns an error if the target or any guess is invalid, or if guesses
/// continue after the round is over.
pub fn replay_guesses(
    target: &str,
    guesses: &[String],
    config: GameConfig,
) -> Result<ReplayReport, GuessError> {
    let target = Word::with_length(target, config.word_length)?;
    let mut round = Round::new(target.clone(), config)?;

    let mut steps = Vec::with_capacity(guesses.len());
    for guess in guesses {
        let outcome = round.submit(guess)?;
        steps.push(ReplayStep {
            record: outcome.record,
            hints: *round.hints(),
            status: outcome.status,
        });
    }

    Ok(ReplayReport {
        target,
        policy: config.policy,
        steps,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{KeyState, WordError};

    fn guesses(words: &[&str]) -> Vec<String> {
        words.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn replay_records_keyboard_after_each_guess() {
        let report = replay_guesses(
            "bird",
            &guesses(&["lamp", "word", "bird"]),
            GameConfig::new(DifficultyPolicy::Full),
        )
        .unwrap();

        assert_eq!(report.steps.len(), 3);
        assert_eq!(report.steps[0].hints.get(b'L'), KeyState::Absent);
        assert_eq!(report.steps[0].hints.get(b'R'), KeyState::Unused);
        assert_eq!(report.steps[1].hints.get(b'R'), KeyState::Correct);
        assert_eq!(report.final_status(), RoundStatus::Won { attempts: 3 });
    }

    #[test]
    fn hard_mode_only_reacts_to_all_wrong_guesses() {
        let report = replay_guesses(
            "bird",
            &guesses(&["word", "lamp"]),
            GameConfig::new(DifficultyPolicy::MinimalOnAllWrong),
        )
        .unwrap();

        assert_eq!(report.steps[0].hints, KeyboardHints::new());
        assert_eq!(
            report.steps[1].hints.letters_in(KeyState::Absent),
            b"ALMP".to_vec()
        );
    }

    #[test]
    fn guesses_after_win_are_rejected() {
        let result = replay_guesses("bird", &guesses(&["bird", "word"]), GameConfig::default());
        assert!(matches!(result, Err(GuessError::RoundOver)));
    }

    #[test]
    fn invalid_target_is_rejected() {
        let result = replay_guesses("b1rd", &[], GameConfig::default());
        assert!(matches!(
            result,
            Err(GuessError::Word(WordError::InvalidCharacters))
        ));
    }
}
