//! Outcome distributions for a guess
//!
//! Groups target words by the feedback a guess would produce against them.
//! The board only shows green/yellow counts, so the headline distribution is
//! keyed by `(correct, present)`; the full per-letter feedback is available for
//! players that see the keyboard.

use crate::core::{ScoreResult, Word, score};
use rayon::prelude::*;
use rustc_hash::FxHashMap;

/// How a guess splits a set of targets by green/yellow counts
#[derive(Debug, Clone, PartialEq)]
pub struct OutcomeDistribution {
    pub guess: String,
    pub total: usize,
    /// `((correct, present), targets)`, most common first
    pub buckets: Vec<((usize, usize), usize)>,
    /// Number of distinct per-letter feedback rows
    pub distinct_feedback: usize,
}

impl OutcomeDistribution {
    /// Size of the largest count bucket (worst case for a counts-only player)
    #[must_use]
    pub fn worst_case(&self) -> usize {
        self.buckets.first().map_or(0, |&(_, n)| n)
    }

    /// Expected size of the count bucket the target falls into
    #[must_use]
    pub fn expected_remaining(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let sum_sq: usize = self.buckets.iter().map(|&(_, n)| n * n).sum();
        sum_sq as f64 / self.total as f64
    }
}

/// Group `targets` by the full feedback `guess` produces against each one
///
/// Targets of a different length are skipped.
#[must_use]
pub fn group_by_feedback(guess: &Word, targets: &[&Word]) -> FxHashMap<ScoreResult, usize> {
    let mut counts = FxHashMap::default();

    for &target in targets {
        if let Ok(result) = score(guess, target) {
            *counts.entry(result).or_insert(0) += 1;
        }
    }

    counts
}

/// Largest group produced by `guess` over `targets`
#[must_use]
pub fn worst_case_group(guess: &Word, targets: &[&Word]) -> usize {
    group_by_feedback(guess, targets)
        .values()
        .copied()
        .max()
        .unwrap_or(0)
}

/// Compute the count distribution of `guess` over `targets`
///
/// Scoring runs in parallel; ties in bucket size are ordered by
/// `(correct, present)` descending so output is stable.
///
/// # Examples
/// ```
/// use guessword::analysis::outcome_distribution;
/// use guessword::core::Word;
///
/// let guess = Word::new("word").unwrap();
/// let targets = vec![Word::new("bird").unwrap(), Word::new("lamp").unwrap()];
///
/// let dist = outcome_distribution(&guess, &targets);
/// assert_eq!(dist.total, 2);
/// assert_eq!(dist.worst_case(), 1);
/// ```
#[must_use]
pub fn outcome_distribution(guess: &Word, targets: &[Word]) -> OutcomeDistribution {
    let (by_counts, by_feedback) = targets
        .par_iter()
        .filter_map(|target| score(guess, target).ok())
        .fold(
            || (FxHashMap::default(), FxHashMap::default()),
            |(mut counts, mut feedback), result| {
                *counts
                    .entry((result.correct_count(), result.present_count()))
                    .or_insert(0usize) += 1;
                *feedback.entry(result).or_insert(0usize) += 1;
                (counts, feedback)
            },
        )
        .reduce(
            || (FxHashMap::default(), FxHashMap::default()),
            |(mut counts_a, mut feedback_a), (counts_b, feedback_b)| {
                for (key, n) in counts_b {
                    *counts_a.entry(key).or_insert(0) += n;
                }
                for (key, n) in feedback_b {
                    *feedback_a.entry(key).or_insert(0) += n;
                }
                (counts_a, feedback_a)
            },
        );

    let total: usize = by_counts.values().sum();
    let mut buckets: Vec<((usize, usize), usize)> = by_counts.into_iter().collect();
    buckets.sort_by(|(ka, na), (kb, nb)| nb.cmp(na).then(kb.cmp(ka)));

    OutcomeDistribution {
        guess: guess.text().to_string(),
        total,
        buckets,
        distinct_feedback: by_feedback.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn distribution_counts_every_target() {
        let targets = words_from_slice(&["BIRD", "BARD", "LAMP", "DRIP", "WORD"], 4);
        let guess = Word::new("WORD").unwrap();
        let dist = outcome_distribution(&guess, &targets);

        assert_eq!(dist.total, 5);
        assert_eq!(dist.buckets.iter().map(|&(_, n)| n).sum::<usize>(), 5);
        // BIRD and BARD both give 2 greens, 0 yellows
        assert_eq!(dist.worst_case(), 2);
        assert_eq!(dist.buckets[0], ((2, 0), 2));
        assert!(dist.buckets.contains(&((4, 0), 1)));
        assert!(dist.buckets.contains(&((0, 0), 1)));
    }

    #[test]
    fn distinct_feedback_counts_unique_rows() {
        let targets = words_from_slice(&["BIRD"], 4);
        let dist = outcome_distribution(&Word::new("DRIP").unwrap(), &targets);
        assert_eq!(dist.buckets, vec![((0, 3), 1)]);
        assert_eq!(dist.distinct_feedback, 1);

        let targets = words_from_slice(&["LAMP", "PALM"], 4);
        let dist = outcome_distribution(&Word::new("LAMP").unwrap(), &targets);
        // One green and three yellows against PALM, four greens against LAMP
        assert_eq!(dist.distinct_feedback, 2);
    }

    #[test]
    fn expected_remaining_is_weighted_mean() {
        let targets = words_from_slice(&["BIRD", "BARD", "LAMP", "WORD"], 4);
        let dist = outcome_distribution(&Word::new("WORD").unwrap(), &targets);
        // Buckets of 2, 1, 1 -> (4 + 1 + 1) / 4
        assert!((dist.expected_remaining() - 1.5).abs() < 1e-9);
    }

    #[test]
    fn empty_targets() {
        let dist = outcome_distribution(&Word::new("WORD").unwrap(), &[]);
        assert_eq!(dist.total, 0);
        assert_eq!(dist.worst_case(), 0);
        assert!(dist.expected_remaining().abs() < f64::EPSILON);
    }

    #[test]
    fn worst_case_group_uses_full_feedback() {
        let words = words_from_slice(&["BIRD", "BARD", "LAMP"], 4);
        let refs: Vec<&Word> = words.iter().collect();
        // WORD scores BIRD and BARD identically: ⬜⬜🟩🟩
        assert_eq!(worst_case_group(&Word::new("WORD").unwrap(), &refs), 2);
        // BIRD tells all three apart
        assert_eq!(worst_case_group(&Word::new("BIRD").unwrap(), &refs), 1);
    }
}
