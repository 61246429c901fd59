//! Candidate-elimination player
//!
//! Keeps every word consistent with the feedback seen so far and guesses the
//! candidate whose worst-case feedback group is smallest.

use super::distribution::worst_case_group;
use crate::core::{ScoreResult, Word, score};
use crate::game::{GameConfig, GuessError, Round};
use rayon::prelude::*;

/// Below this many candidates, just guess the first one
const SMALL_POOL: usize = 3;

/// Automated player that narrows a word list using per-letter feedback
pub struct EliminationPlayer<'a> {
    candidates: Vec<&'a Word>,
    opener: Option<&'a Word>,
}

impl<'a> EliminationPlayer<'a> {
    #[must_use]
    pub fn new(words: &'a [Word]) -> Self {
        Self {
            candidates: words.iter().collect(),
            opener: None,
        }
    }

    /// Use a precomputed first guess instead of searching the full list
    #[must_use]
    pub fn with_opener(mut self, opener: &'a Word) -> Self {
        self.opener = Some(opener);
        self
    }

    /// Words still consistent with every observation
    #[must_use]
    pub fn candidates(&self) -> &[&'a Word] {
        &self.candidates
    }

    /// Pick the next guess, or `None` if nothing is consistent
    #[must_use]
    pub fn next_guess(&self) -> Option<&'a Word> {
        if let Some(opener) = self.opener {
            return Some(opener);
        }
        if self.candidates.len() < SMALL_POOL {
            return self.candidates.first().copied();
        }
        best_guess(&self.candidates)
    }

    /// Drop every candidate that would not have produced `result` for `guess`
    pub fn observe(&mut self, guess: &Word, result: &ScoreResult) {
        self.opener = None;
        self.candidates
            .retain(|&candidate| score(guess, candidate).is_ok_and(|r| r == *result));
    }
}

/// Candidate with the smallest worst-case feedback group
///
/// Ties go to the earliest candidate in the list.
#[must_use]
pub fn best_guess<'a>(candidates: &[&'a Word]) -> Option<&'a Word> {
    candidates
        .par_iter()
        .enumerate()
        .map(|(idx, &guess)| (worst_case_group(guess, candidates), idx, guess))
        .min_by_key(|&(worst, idx, _)| (worst, idx))
        .map(|(_, _, guess)| guess)
}

/// Play one full round against `target`, guessing from `words`
///
/// # Errors
/// Returns `GuessError::Word` if `target` does not match
/// `config.word_length`.
pub fn play_round(
    target: &Word,
    words: &[Word],
    opener: Option<&Word>,
    config: GameConfig,
) -> Result<Round, GuessError> {
    let mut round = Round::new(target.clone(), config)?;
    let mut player = EliminationPlayer::new(words);
    if let Some(opener) = opener {
        player = player.with_opener(opener);
    }

    while !round.status().is_over() {
        let Some(guess) = player.next_guess() else {
            break;
        };
        let outcome = round.submit(guess.text())?;
        player.observe(&outcome.record.guess, &outcome.record.score);
    }

    Ok(round)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::RoundStatus;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn observe_keeps_only_consistent_words() {
        let words = words_from_slice(&["BIRD", "BARD", "LAMP", "WORD"], 4);
        let mut player = EliminationPlayer::new(&words);

        let guess = Word::new("WORD").unwrap();
        let target = Word::new("BIRD").unwrap();
        let result = score(&guess, &target).unwrap();
        player.observe(&guess, &result);

        let left: Vec<&str> = player.candidates().iter().map(|w| w.text()).collect();
        assert_eq!(left, ["BIRD", "BARD"]);
    }

    #[test]
    fn best_guess_prefers_splitting_words() {
        let words = words_from_slice(&["BARD", "BIRD", "LAMP"], 4);
        let refs: Vec<&Word> = words.iter().collect();
        // BARD separates all three, and it comes first
        assert_eq!(best_guess(&refs).map(Word::text), Some("BARD"));
        assert_eq!(best_guess(&[]), None);
    }

    #[test]
    fn player_always_finds_target_with_enough_attempts() {
        let words = words_from_slice(
            &["BIRD", "BARD", "WORD", "LAMP", "CAMP", "DAMP", "RAMP", "LOFT"],
            4,
        );
        let config = GameConfig {
            max_attempts: words.len(),
            ..GameConfig::default()
        };
        for target in &words {
            let round = play_round(target, &words, None, config).unwrap();
            assert!(
                matches!(round.status(), RoundStatus::Won { .. }),
                "failed on {target}"
            );
        }
    }

    #[test]
    fn opener_is_used_first() {
        let words = words_from_slice(&["BIRD", "LAMP", "FROG"], 4);
        let opener = Word::new("FROG").unwrap();
        let round = play_round(&words[0], &words, Some(&opener), GameConfig::default()).unwrap();
        assert_eq!(round.history()[0].guess.text(), "FROG");
        assert!(matches!(round.status(), RoundStatus::Won { .. }));
    }
}
