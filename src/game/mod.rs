//! Game flow around the scoring core
//!
//! Rounds, configuration, sessions, statistics and the leaderboard.

mod config;
mod leaderboard;
mod round;
mod session;
mod stats;

pub use config::{CHEAT_CODE, GameConfig, MAX_ATTEMPTS};
pub use leaderboard::{LEADERBOARD_SIZE, Leaderboard, LeaderboardEntry};
pub use round::{GuessError, GuessOutcome, GuessRecord, Round, RoundStatus};
pub use session::{DEFAULT_PLAYER, Session, SessionError};
pub use stats::GameStats;
