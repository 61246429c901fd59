//! Formatting utilities for terminal output

use crate::core::{KeyState, KeyboardHints, ScoreResult};
use std::time::Duration;

/// QWERTY layout of the virtual keyboard
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Format a score as an emoji string
#[must_use]
pub fn score_to_emoji(result: &ScoreResult) -> String {
    result.to_emoji()
}

/// Green/yellow counts as shown next to each board row, e.g. "2🟩 1🟨"
#[must_use]
pub fn count_badges(result: &ScoreResult) -> String {
    format!("{}🟩 {}🟨", result.correct_count(), result.present_count())
}

/// Single-character marker for a key, used where color is unavailable
#[must_use]
pub const fn key_marker(state: KeyState) -> char {
    match state {
        KeyState::Unused => ' ',
        KeyState::Correct => '*',
        KeyState::Present => '+',
        KeyState::Absent => '·',
    }
}

/// Plain-text keyboard: absent keys are replaced by their marker
///
/// Rows are indented like a physical keyboard.
#[must_use]
pub fn keyboard_plain(hints: &KeyboardHints) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(indent, row)| {
            let keys: Vec<String> = row
                .bytes()
                .map(|letter| match hints.get(letter) {
                    KeyState::Absent => key_marker(KeyState::Absent).to_string(),
                    KeyState::Unused => char::from(letter).to_string(),
                    state => format!("{}{}", char::from(letter), key_marker(state)),
                })
                .collect();
            format!("{}{}", " ".repeat(indent), keys.join(" "))
        })
        .collect()
}

/// Clock time as seconds with two decimals, e.g. "12.34s"
#[must_use]
pub fn format_time(time: Duration) -> String {
    format!("{:.2}s", time.as_secs_f64())
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{DifficultyPolicy, Word, score};

    #[test]
    fn badges_show_counts() {
        let result = score(&Word::new("DRIP").unwrap(), &Word::new("BIRD").unwrap()).unwrap();
        assert_eq!(count_badges(&result), "0🟩 3🟨");
        assert_eq!(score_to_emoji(&result), "🟨🟨🟨⬜");
    }

    #[test]
    fn plain_keyboard_marks_keys() {
        let guess = Word::new("WORD").unwrap();
        let result = score(&guess, &Word::new("BIRD").unwrap()).unwrap();
        let hints =
            KeyboardHints::new().update(&guess, result.per_position(), DifficultyPolicy::Full);

        let rows = keyboard_plain(&hints);
        assert_eq!(rows.len(), 3);
        assert!(rows[0].starts_with("Q · E R* T"));
        assert!(rows[0].contains("I · P"));
        assert!(rows[1].starts_with(" A S D* F"));
        assert_eq!(rows[2], "  Z X C V B N M");
    }

    #[test]
    fn time_has_two_decimals() {
        assert_eq!(format_time(Duration::ZERO), "0.00s");
        assert_eq!(format_time(Duration::from_millis(12_346)), "12.35s");
        assert_eq!(format_time(Duration::from_secs(90)), "90.00s");
    }

    #[test]
    fn progress_bar_bounds() {
        assert_eq!(create_progress_bar(0.0, 100.0, 4), "░░░░");
        assert_eq!(create_progress_bar(100.0, 100.0, 4), "████");
        assert_eq!(create_progress_bar(50.0, 100.0, 4), "██░░");
        assert_eq!(create_progress_bar(500.0, 100.0, 4), "████");
        assert_eq!(create_progress_bar(1.0, 0.0, 2), "░░");
    }
}
