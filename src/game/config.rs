//! Game configuration

use crate::core::{DifficultyPolicy, WORD_LENGTH};

/// Default number of guesses allowed per round
pub const MAX_ATTEMPTS: usize = 8;

/// Typed into the guess box, reveals the hidden word
pub const CHEAT_CODE: &str = "DALI";

/// Configuration for a round of play
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub word_length: usize,
    pub max_attempts: usize,
    pub policy: DifficultyPolicy,
}

impl GameConfig {
    #[must_use]
    pub const fn new(policy: DifficultyPolicy) -> Self {
        Self {
            word_length: WORD_LENGTH,
            max_attempts: MAX_ATTEMPTS,
            policy,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DifficultyPolicy::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_classic_game() {
        let config = GameConfig::default();
        assert_eq!(config.word_length, 4);
        assert_eq!(config.max_attempts, 8);
        assert_eq!(config.policy, DifficultyPolicy::LimitedAbsentOnly);
    }
}
