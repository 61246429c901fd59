//! Keyboard hint aggregation
//!
//! Folds the per-letter feedback of each guess into a cumulative A-Z map that
//! drives the virtual keyboard. A [`DifficultyPolicy`] decides which feedback is
//! allowed to reach the keyboard.
//!
//! Under [`DifficultyPolicy::Full`] each key moves forward only:
//! `Unused -> {Absent, Present, Correct}`, `Absent -> {Present, Correct}`,
//! `Present -> Correct`. `Correct` is terminal for the round.

use super::{LetterClass, Word};
use std::fmt;
use std::str::FromStr;
use tracing::trace;

/// Display state of one keyboard key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeyState {
    /// No information revealed yet
    #[default]
    Unused,
    /// Known to be in the word at a guessed position
    Correct,
    /// Known to be in the word
    Present,
    /// Grayed out
    Absent,
}

/// Which feedback the keyboard is allowed to reveal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DifficultyPolicy {
    /// Green, yellow and gray keys
    Full,
    /// Only gray out letters that matched nothing
    #[default]
    LimitedAbsentOnly,
    /// Gray out letters only when the whole guess matched nothing
    MinimalOnAllWrong,
    /// Keyboard never changes
    None,
}

impl DifficultyPolicy {
    /// Every policy, from most to least informative
    pub const ALL: [Self; 4] = [
        Self::Full,
        Self::LimitedAbsentOnly,
        Self::MinimalOnAllWrong,
        Self::None,
    ];

    /// Create a policy from a difficulty or policy name
    ///
    /// Supported names: "easy"/"full", "medium"/"limited",
    /// "hard"/"minimal", "raw"/"none". Case-insensitive.
    /// Defaults to limited (medium) if the name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }

    /// Difficulty label shown to players
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Full => "Easy",
            Self::LimitedAbsentOnly => "Medium",
            Self::MinimalOnAllWrong => "Hard",
            Self::None => "Raw",
        }
    }

    /// One-line description of what the keyboard shows
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Full => "Full color feedback on keyboard (Green, Yellow, Grey)",
            Self::LimitedAbsentOnly => "Only grey out incorrect letters",
            Self::MinimalOnAllWrong => "Grey out only if all letters are wrong",
            Self::None => "No keyboard feedback at all",
        }
    }

    /// The next policy in [`Self::ALL`], wrapping around
    #[must_use]
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|&p| p == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

impl FromStr for DifficultyPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" | "full" => Ok(Self::Full),
            "medium" | "limited" => Ok(Self::LimitedAbsentOnly),
            "hard" | "minimal" => Ok(Self::MinimalOnAllWrong),
            "raw" | "none" => Ok(Self::None),
            other => Err(format!("Unknown difficulty: {other}")),
        }
    }
}

impl fmt::Display for DifficultyPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Cumulative keyboard state for one round
///
/// A plain `Copy` value: updates return a new map and leave the old one intact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct KeyboardHints {
    keys: [KeyState; 26],
}

impl KeyboardHints {
    /// All keys unused
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// State of an uppercase ASCII letter
    ///
    /// Anything outside A-Z reports `Unused`.
    #[inline]
    #[must_use]
    pub fn get(&self, letter: u8) -> KeyState {
        Self::index(letter).map_or(KeyState::Unused, |i| self.keys[i])
    }

    /// Iterate over `(letter, state)` for A-Z
    pub fn iter(&self) -> impl Iterator<Item = (u8, KeyState)> + '_ {
        (b'A'..=b'Z').zip(self.keys.iter().copied())
    }

    /// Letters currently in `state`, in alphabetical order
    #[must_use]
    pub fn letters_in(&self, state: KeyState) -> Vec<u8> {
        self.iter()
            .filter(|&(_, s)| s == state)
            .map(|(letter, _)| letter)
            .collect()
    }

    /// Apply one guess's feedback under `policy` and return the new map
    ///
    /// `per_position` pairs with the guess letters position by position.
    ///
    /// # Examples
    /// ```
    /// use guessword::core::{score, DifficultyPolicy, KeyState, KeyboardHints, Word};
    ///
    /// let guess = Word::new("word").unwrap();
    /// let target = Word::new("bird").unwrap();
    /// let result = score(&guess, &target).unwrap();
    ///
    /// let hints = KeyboardHints::new();
    /// let next = hints.update(&guess, result.per_position(), DifficultyPolicy::Full);
    ///
    /// assert_eq!(next.get(b'R'), KeyState::Correct);
    /// assert_eq!(next.get(b'W'), KeyState::Absent);
    /// assert_eq!(hints.get(b'R'), KeyState::Unused);
    /// ```
    #[must_use]
    pub fn update(
        &self,
        guess: &Word,
        per_position: &[LetterClass],
        policy: DifficultyPolicy,
    ) -> Self {
        let mut next = *self;

        let absent_only = match policy {
            DifficultyPolicy::None => return next,
            DifficultyPolicy::Full => false,
            DifficultyPolicy::LimitedAbsentOnly => true,
            DifficultyPolicy::MinimalOnAllWrong => {
                if per_position.iter().any(|&c| c != LetterClass::Absent) {
                    return next;
                }
                true
            }
        };

        for (&letter, &class) in guess.letters().iter().zip(per_position) {
            let Some(i) = Self::index(letter) else {
                continue;
            };
            let current = next.keys[i];
            let updated = match class {
                LetterClass::Correct if !absent_only => KeyState::Correct,
                LetterClass::Present if !absent_only && current != KeyState::Correct => {
                    KeyState::Present
                }
                LetterClass::Absent if current == KeyState::Unused => KeyState::Absent,
                _ => current,
            };
            if updated != current {
                trace!(letter = %char::from(letter), from = ?current, to = ?updated, "key hint");
            }
            next.keys[i] = updated;
        }

        next
    }

    fn index(letter: u8) -> Option<usize> {
        if letter.is_ascii_uppercase() {
            Some(usize::from(letter - b'A'))
        } else {
            None
        }
    }
}

/// Free-function form of [`KeyboardHints::update`]
#[must_use]
pub fn update_hints(
    state: &KeyboardHints,
    guess: &Word,
    per_position: &[LetterClass],
    policy: DifficultyPolicy,
) -> KeyboardHints {
    state.update(guess, per_position, policy)
}
