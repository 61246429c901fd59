//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use the embedded list.

use crate::core::Word;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// Load words of a given length from a file
///
/// One word per line. Blank lines, `#` comments and entries that are not
/// exactly `length` letters are skipped. Duplicates are dropped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use guessword::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt", 4).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, length: usize) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_words(&content, length))
}

/// Parse a newline-separated word list
#[must_use]
pub fn parse_words(content: &str, length: usize) -> Vec<Word> {
    let mut seen: FxHashSet<Word> = FxHashSet::default();
    let mut words: Vec<Word> = Vec::new();
    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        if let Ok(word) = Word::with_length(trimmed, length)
            && seen.insert(word.clone())
        {
            words.push(word);
        }
    }
    words
}

/// Convert a string slice to a Word vector, skipping invalid entries
///
/// # Examples
/// ```
/// use guessword::wordlists::loader::words_from_slice;
/// use guessword::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS, 4);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str], length: usize) -> Vec<Word> {
    slice
        .iter()
        .filter_map(|&s| Word::with_length(s, length).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let words = words_from_slice(&["bird", "lamp", "frog"], 4);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "BIRD");
        assert_eq!(words[1].text(), "LAMP");
        assert_eq!(words[2].text(), "FROG");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let words = words_from_slice(&["bird", "birds", "ab", "l4mp", "lamp"], 4);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "BIRD");
        assert_eq!(words[1].text(), "LAMP");
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input, 4).is_empty());
    }

    #[test]
    fn parse_skips_comments_blanks_and_duplicates() {
        let content = "# header\nbird\n\n  lamp  \nBIRD\ncrane\n";
        let words = parse_words(content, 4);
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["BIRD", "LAMP"]);
    }

    #[test]
    fn parse_keeps_first_occurrence_order_on_large_input() {
        let mut content = String::new();
        for _ in 0..2_000 {
            content.push_str("lamp\nbird\nLAMP\n");
        }
        let words = parse_words(&content, 4);
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["LAMP", "BIRD"]);
    }

    #[test]
    fn load_from_embedded_words() {
        use crate::wordlists::WORDS;

        let words = words_from_slice(WORDS, 4);
        assert_eq!(words.len(), WORDS.len());
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(load_from_file("definitely/not/here.txt", 4).is_err());
    }
}
