//! Analyze command
//!
//! Shows how a guess splits the word list by green/yellow counts.

use crate::analysis::{OutcomeDistribution, outcome_distribution};
use crate::core::{Word, WordError};

/// Analyze `word` as a guess against every word in `words`
///
/// # Errors
///
/// Returns a `WordError` if `word` is not `length` letters A-Z.
pub fn analyze_guess(
    word: &str,
    words: &[Word],
    length: usize,
) -> Result<OutcomeDistribution, WordError> {
    let guess = Word::with_length(word, length)?;
    Ok(outcome_distribution(&guess, words))
}
