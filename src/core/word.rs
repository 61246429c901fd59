//! Guessword word representation
//!
//! A Word stores an uppercase, fixed-length word of ASCII letters.

use std::fmt;

/// Default number of letters in a word
pub const WORD_LENGTH: usize = 4;

/// An uppercase word of fixed length
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    /// The word does not have the configured number of letters
    InvalidLength { expected: usize, actual: usize },
    /// The word contains something other than the letters A-Z
    InvalidCharacters,
    /// Guess and target were scored against each other with different lengths
    LengthMismatch { guess: usize, target: usize },
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { expected, .. } => {
                write!(
                    f,
                    "Your guess must be {expected} letters long. Please fill all boxes."
                )
            }
            Self::InvalidCharacters => write!(f, "Your guess must contain only letters."),
            Self::LengthMismatch { guess, target } => {
                write!(
                    f,
                    "Cannot score a {guess}-letter guess against a {target}-letter word"
                )
            }
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word with the default length of [`WORD_LENGTH`]
    ///
    /// # Errors
    /// Returns `WordError` if the word is not exactly [`WORD_LENGTH`] letters
    /// or contains anything other than ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use guessword::core::Word;
    ///
    /// let word = Word::new("bird").unwrap();
    /// assert_eq!(word.text(), "BIRD");
    ///
    /// assert!(Word::new("birds").is_err());
    /// assert!(Word::new("b1rd").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        Self::with_length(text, WORD_LENGTH)
    }

    /// Create a new Word that must have exactly `length` letters
    ///
    /// Input is case-insensitive and normalized to uppercase.
    ///
    /// # Errors
    /// Returns `WordError::InvalidLength` if the letter count differs from
    /// `length`, or `WordError::InvalidCharacters` for anything outside A-Z.
    pub fn with_length(text: impl Into<String>, length: usize) -> Result<Self, WordError> {
        let mut text: String = text.into();

        // Count characters on the raw input, so "CAFÉ" and "ßIRD" report a
        // length of 4 and fail on their characters instead
        let actual = text.chars().count();
        if actual != length {
            return Err(WordError::InvalidLength {
                expected: length,
                actual,
            });
        }

        if !text.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(WordError::InvalidCharacters);
        }

        text.make_ascii_uppercase();
        Ok(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as uppercase ASCII bytes
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false for a validated word of non-zero length
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("BIRD").unwrap();
        assert_eq!(word.text(), "BIRD");
        assert_eq!(word.letters(), b"BIRD");
        assert_eq!(word.len(), 4);
    }

    #[test]
    fn word_creation_lowercase_normalized() {
        let word = Word::new("bird").unwrap();
        assert_eq!(word.text(), "BIRD");

        let word2 = Word::new("BiRd").unwrap();
        assert_eq!(word2, word);
    }

    #[test]
    fn word_creation_invalid_length() {
        assert_eq!(
            Word::new("birds"),
            Err(WordError::InvalidLength {
                expected: 4,
                actual: 5
            })
        );
        assert_eq!(
            Word::new("bir"),
            Err(WordError::InvalidLength {
                expected: 4,
                actual: 3
            })
        );
        assert!(matches!(
            Word::new(""),
            Err(WordError::InvalidLength { actual: 0, .. })
        ));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("b1rd"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("bir "), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("bir!"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("café"), Err(WordError::InvalidCharacters));
    }

    #[test]
    fn word_with_custom_length() {
        let word = Word::with_length("crane", 5).unwrap();
        assert_eq!(word.text(), "CRANE");
        assert!(Word::with_length("crane", 4).is_err());
    }

    #[test]
    fn non_ascii_input_fails_on_characters_not_length() {
        // 'ß' uppercases to "SS"; the length check must see the raw input
        assert_eq!(Word::new("ßird"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("ßIRD"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("ÉCLA"), Err(WordError::InvalidCharacters));
    }

    #[test]
    fn error_messages_match_game_text() {
        let err = Word::new("abc").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Your guess must be 4 letters long. Please fill all boxes."
        );
        assert_eq!(
            WordError::InvalidCharacters.to_string(),
            "Your guess must contain only letters."
        );
    }
}
