//! Guessword - CLI
//!
//! Word-guessing game with TUI and CLI modes, plus tools to score, replay and
//! analyze guesses.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, builder::RangedU64ValueParser};
use guessword::{
    commands::{analyze_guess, replay_guesses, run_simple, run_simulation, score_words},
    core::{DifficultyPolicy, WORD_LENGTH, Word},
    game::{DEFAULT_PLAYER, GameConfig, MAX_ATTEMPTS, Session},
    output::{print_analysis, print_replay, print_score_report, print_simulation},
    wordlists::{
        WORDS,
        loader::{load_from_file, words_from_slice},
    },
};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "guessword",
    about = "Guess the hidden word from green/yellow counts and keyboard hints",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Difficulty: easy, medium (default), hard, raw
    #[arg(short, long, global = true, default_value = "medium")]
    difficulty: String,

    /// Wordlist: 'embedded' (default) or path to file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Word length
    #[arg(
        short = 'l',
        long,
        global = true,
        default_value_t = WORD_LENGTH,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..)
    )]
    length: usize,

    /// Guesses allowed per round
    #[arg(
        short = 'm',
        long,
        global = true,
        default_value_t = MAX_ATTEMPTS,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..)
    )]
    max_attempts: usize,

    /// Name shown on the leaderboard
    #[arg(short = 'p', long, global = true, default_value = DEFAULT_PLAYER)]
    player: String,

    /// Enable debug logging and extra detail
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI game (default)
    Play,

    /// Simple CLI game without the TUI
    Simple,

    /// Score a single guess against a target
    Score {
        /// The guessed word
        guess: String,

        /// The hidden word
        target: String,
    },

    /// Replay guesses against a target and show the keyboard after each
    Replay {
        /// The hidden word
        target: String,

        /// Guesses in order
        #[arg(required = true)]
        guesses: Vec<String>,
    },

    /// Show how a guess splits the word list
    Analyze {
        /// Word to analyze
        word: String,
    },

    /// Play every word with the automated player
    Simulate {
        /// Limit number of words to play
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Load the word list based on the -w flag
fn load_words(wordlist_mode: &str, length: usize) -> Result<Vec<Word>> {
    let words = match wordlist_mode {
        "embedded" => words_from_slice(WORDS, length),
        path => load_from_file(path, length)
            .with_context(|| format!("failed to read word list '{path}'"))?,
    };
    debug!(source = wordlist_mode, count = words.len(), "word list loaded");
    Ok(words)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let policy = cli.difficulty.parse::<DifficultyPolicy>().unwrap_or_else(|e| {
        warn!("{e}; using {}", DifficultyPolicy::default().label());
        DifficultyPolicy::default()
    });
    let config = GameConfig {
        word_length: cli.length,
        max_attempts: cli.max_attempts,
        policy,
    };

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&cli.wordlist, &cli.player, config),
        Commands::Simple => run_simple_command(&cli.wordlist, &cli.player, config),
        Commands::Score { guess, target } => {
            let report = score_words(&guess, &target, config.word_length)?;
            print_score_report(&report, cli.verbose);
            Ok(())
        }
        Commands::Replay { target, guesses } => {
            let report = replay_guesses(&target, &guesses, config)?;
            print_replay(&report, cli.verbose);
            Ok(())
        }
        Commands::Analyze { word } => {
            let words = load_words(&cli.wordlist, config.word_length)?;
            let dist = analyze_guess(&word, &words, config.word_length)?;
            print_analysis(&dist);
            Ok(())
        }
        Commands::Simulate { limit } => {
            let words = load_words(&cli.wordlist, config.word_length)?;
            let count = limit.unwrap_or(words.len()).min(words.len());
            println!(
                "Simulating {count} rounds ({} attempts each)...",
                config.max_attempts
            );
            let report = run_simulation(&words, limit, config, true);
            print_simulation(&report);
            Ok(())
        }
    }
}

fn run_simple_command(wordlist: &str, player: &str, config: GameConfig) -> Result<()> {
    let words = load_words(wordlist, config.word_length)?;
    let mut session = Session::new(&words, config)?.with_player(player);
    run_simple(&mut session)?;
    Ok(())
}

fn run_play_command(wordlist: &str, player: &str, config: GameConfig) -> Result<()> {
    use guessword::interactive::{App, run_tui};

    let words = load_words(wordlist, config.word_length)?;
    let session = Session::new(&words, config)?.with_player(player);
    run_tui(App::new(session))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("guessword").chain(args.iter().copied()))
    }

    #[test]
    fn defaults_match_game_config() {
        let cli = parse(&["score", "word", "bird"]).unwrap();
        assert_eq!(cli.length, WORD_LENGTH);
        assert_eq!(cli.max_attempts, MAX_ATTEMPTS);
        assert_eq!(cli.player, DEFAULT_PLAYER);
    }

    #[test]
    fn zero_length_and_attempts_are_rejected() {
        assert!(parse(&["-m", "0", "simple"]).is_err());
        assert!(parse(&["--length", "0", "simple"]).is_err());
        assert!(parse(&["simple", "--max-attempts", "0"]).is_err());

        let cli = parse(&["-m", "1", "-l", "5", "simple"]).unwrap();
        assert_eq!((cli.length, cli.max_attempts), (5, 1));
    }
}
