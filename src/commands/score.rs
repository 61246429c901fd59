//! Score command
//!
//! Scores a single guess against a target word.

use crate::core::{ScoreResult, Word, WordError, score};

/// Result of scoring one guess
pub struct ScoreReport {
    pub guess: Word,
    pub target: Word,
    pub result: ScoreResult,
}

/// Validate both words and score `guess` against `target`
///
/// # Errors
///
/// Returns a `WordError` if either word is not `length` letters A-Z.
pub fn score_words(guess: &str, target: &str, length: usize) -> Result<ScoreReport, WordError> {
    let guess = Word::with_length(guess, length)?;
    let target = Word::with_length(target, length)?;
    let result = score(&guess, &target)?;

    Ok(ScoreReport {
        guess,
        target,
        result,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterClass::{Absent, Correct, Present};

    #[test]
    fn scores_valid_words() {
        let report = score_words("abca", "aabb", 4).unwrap();
        assert_eq!(report.guess.text(), "ABCA");
        assert_eq!(
            report.result.per_position(),
            &[Correct, Present, Absent, Present]
        );
        assert_eq!(report.result.correct_count(), 1);
        assert_eq!(report.result.present_count(), 2);
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(matches!(
            score_words("birds", "bird", 4),
            Err(WordError::InvalidLength { actual: 5, .. })
        ));
        assert!(matches!(
            score_words("bird", "birds", 4),
            Err(WordError::InvalidLength { actual: 5, .. })
        ));
    }

    #[test]
    fn supports_other_lengths() {
        let report = score_words("crane", "slate", 5).unwrap();
        assert_eq!(report.result.correct_count(), 2);
    }
}
