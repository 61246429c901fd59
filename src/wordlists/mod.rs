//! Word lists for Guessword
//!
//! Provides the embedded target list compiled into the binary.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn words_are_four_uppercase_letters() {
        for &word in WORDS {
            assert_eq!(word.len(), 4, "Word '{word}' is not 4 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_uppercase()),
                "Word '{word}' contains non-uppercase chars"
            );
        }
    }

    #[test]
    fn words_are_unique() {
        let unique: std::collections::HashSet<_> = WORDS.iter().collect();
        assert_eq!(unique.len(), WORDS.len());
    }

    #[test]
    fn list_is_large_enough_to_play() {
        assert!(WORDS_COUNT > 400, "Expected a few hundred words");
        assert!(WORDS.contains(&"BIRD"));
        assert!(WORDS.contains(&"WORD"));
    }
}
