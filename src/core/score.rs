//! Guess scoring
//!
//! Compares a guess against the target word and classifies each letter as
//! correct (green), present elsewhere (yellow) or absent (gray). Duplicate
//! letters are handled with two passes: exact matches first, then misplaced
//! letters consume the leftmost unused target occurrence.

use super::{Word, WordError};
use std::fmt;

/// Feedback for a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterClass {
    /// Letter is in the target at this position
    Correct,
    /// Letter is in the target, but at a different unused position
    Present,
    /// Letter was not matched by either pass
    Absent,
}

impl LetterClass {
    /// Emoji square used when sharing results
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Outcome of scoring one guess against a target
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScoreResult {
    correct: usize,
    present: usize,
    per_position: Vec<LetterClass>,
}

impl ScoreResult {
    /// Number of letters in the right position (green count)
    #[inline]
    #[must_use]
    pub const fn correct_count(&self) -> usize {
        self.correct
    }

    /// Number of letters present at another position (yellow count)
    #[inline]
    #[must_use]
    pub const fn present_count(&self) -> usize {
        self.present
    }

    /// Classification for each guess position, in order
    #[inline]
    #[must_use]
    pub fn per_position(&self) -> &[LetterClass] {
        &self.per_position
    }

    /// True when every position is correct
    #[inline]
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.correct == self.per_position.len()
    }

    /// True when the guess matched nothing at all
    #[inline]
    #[must_use]
    pub const fn is_all_absent(&self) -> bool {
        self.correct == 0 && self.present == 0
    }

    /// Feedback as a row of emoji squares, e.g. "⬜⬜🟩🟩"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.per_position.iter().map(|c| c.emoji()).collect()
    }
}

impl fmt::Display for ScoreResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}G {}Y)", self.to_emoji(), self.correct, self.present)
    }
}

/// Score `guess` against `target`
///
/// # Algorithm
/// 1. First pass: every exact position match is `Correct` and both positions
///    are marked used
/// 2. Second pass: for each remaining guess position (left to right), scan the
///    target left to right and take the first unused matching letter as
///    `Present`
/// 3. Anything left over is `Absent`
///
/// The left-to-right scan in pass two is a fixed tie-break, so the result is
/// deterministic for any duplicate-letter layout.
///
/// # Errors
/// Returns `WordError::LengthMismatch` if the words differ in length.
///
/// # Examples
/// ```
/// use guessword::core::{score, LetterClass, Word};
///
/// let guess = Word::new("word").unwrap();
/// let target = Word::new("bird").unwrap();
/// let result = score(&guess, &target).unwrap();
///
/// assert_eq!(result.correct_count(), 2);
/// assert_eq!(result.present_count(), 0);
/// assert_eq!(
///     result.per_position(),
///     &[LetterClass::Absent, LetterClass::Absent, LetterClass::Correct, LetterClass::Correct]
/// );
/// ```
pub fn score(guess: &Word, target: &Word) -> Result<ScoreResult, WordError> {
    if guess.len() != target.len() {
        return Err(WordError::LengthMismatch {
            guess: guess.len(),
            target: target.len(),
        });
    }

    let guess = guess.letters();
    let target = target.letters();
    let n = target.len();

    let mut per_position = vec![LetterClass::Absent; n];
    let mut used_target = vec![false; n];
    let mut used_guess = vec![false; n];
    let mut correct = 0;
    let mut present = 0;

    // First pass: exact position matches
    // Allow: index needed to set per_position[i] and both used arrays
    #[allow(clippy::needless_range_loop)]
    for i in 0..n {
        if guess[i] == target[i] {
            per_position[i] = LetterClass::Correct;
            used_target[i] = true;
            used_guess[i] = true;
            correct += 1;
        }
    }

    // Second pass: leftmost unused occurrence elsewhere in the target
    #[allow(clippy::needless_range_loop)]
    for i in 0..n {
        if used_guess[i] {
            continue;
        }
        if let Some(j) = (0..n).find(|&j| !used_target[j] && guess[i] == target[j]) {
            per_position[i] = LetterClass::Present;
            used_target[j] = true;
            present += 1;
        }
    }

    Ok(ScoreResult {
        correct,
        present,
        per_position,
    })
}
