//! Simple interactive CLI mode
//!
//! Text-based game on stdin/stdout without the TUI

use crate::core::DifficultyPolicy;
use crate::game::{RoundStatus, Session};
use crate::output::display::{print_board, print_keyboard, print_leaderboard, print_stats};
use crate::output::formatters::format_time;
use colored::Colorize;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(session: &mut Session) -> io::Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                   Guessword - Simple Mode                    ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    let config = *session.config();
    println!(
        "Guess the {}-letter word in {} tries or less.",
        config.word_length, config.max_attempts
    );
    println!("After each guess you'll see how many letters are:");
    println!("  🟩 in the right place");
    println!("  🟨 in the word, but somewhere else\n");
    print_commands();
    print_difficulty(session.config().policy);

    loop {
        let round = session.round();
        println!("────────────────────────────────────────────────────────────");
        println!(
            "Level {} | Attempt {}/{} | {}",
            session.level(),
            round.attempts_used() + 1,
            round.config().max_attempts,
            round.config().policy
        );
        println!("────────────────────────────────────────────────────────────");

        // The clock starts at the first prompt of a round
        session.start_timer();
        let input = get_user_input("Your guess")?;
        let lowered = input.to_lowercase();
        let mut parts = lowered.split_whitespace();

        match parts.next() {
            None => continue,
            Some("quit" | "q" | "exit") => {
                print_stats(session.stats());
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            Some("new" | "n") => {
                session.new_round();
                println!("\n🔄 New word drawn!\n");
                continue;
            }
            Some("stats") => {
                print_stats(session.stats());
                continue;
            }
            Some("leaderboard" | "top") => {
                print_leaderboard(session.leaderboard());
                continue;
            }
            Some("help" | "h") => {
                match parts.next().and_then(|code| session.reveal(code)) {
                    Some(target) => println!(
                        "🤫 Cheat mode: the word is {}\n",
                        target.text().bright_magenta().bold()
                    ),
                    None => print_commands(),
                }
                continue;
            }
            Some("difficulty" | "d") => {
                match parts.next().map(str::parse::<DifficultyPolicy>) {
                    Some(Ok(policy)) => {
                        session.set_policy(policy);
                        print_difficulty(policy);
                        println!("   (applies from the next word)\n");
                    }
                    Some(Err(e)) => println!("❌ {e}\n"),
                    None => print_difficulty(session.config().policy),
                }
                continue;
            }
            Some(_) => {}
        }

        let outcome = match session.submit(&input) {
            Ok(outcome) => outcome,
            Err(e) => {
                println!("❌ {e}\n");
                continue;
            }
        };

        let round = session.round();
        println!();
        print_board(round.history());
        println!();
        print_keyboard(round.hints());
        println!();

        match outcome.status {
            RoundStatus::InProgress => {
                println!("{} attempts left\n", outcome.remaining_attempts);
            }
            RoundStatus::Won { attempts } => {
                println!("{}", "═".repeat(60).bright_cyan());
                println!(
                    "{}",
                    format!(
                        "  🎉 Congratulations! You guessed the word {}",
                        round.target().text()
                    )
                    .bright_green()
                    .bold()
                );
                println!(
                    "  Solved in {} {} ({})",
                    attempts.to_string().bright_cyan().bold(),
                    if attempts == 1 { "guess" } else { "guesses" },
                    format_time(outcome.elapsed)
                );
                if let Some(rank) = session.last_rank() {
                    println!("  🏆 #{rank} on the leaderboard");
                }
                println!("{}", "═".repeat(60).bright_cyan());
                if !play_again()? {
                    print_stats(session.stats());
                    return Ok(());
                }
                session.new_round();
            }
            RoundStatus::Lost { .. } => {
                println!(
                    "{} {}",
                    "Game Over! The word was".red().bold(),
                    round.target().text().bright_yellow().bold()
                );
                if !play_again()? {
                    print_stats(session.stats());
                    return Ok(());
                }
                session.new_round();
            }
        }
    }
}

fn print_commands() {
    println!(
        "Commands: 'quit', 'new', 'difficulty <easy|medium|hard|raw>', 'stats', 'leaderboard', 'help'\n"
    );
}

fn print_difficulty(policy: DifficultyPolicy) {
    println!(
        "🎚  Difficulty: {} - {}",
        policy.label().bright_cyan().bold(),
        policy.description()
    );
}

fn play_again() -> io::Result<bool> {
    let answer = get_user_input("Play again? (yes/no)")?.to_lowercase();
    Ok(matches!(answer.as_str(), "yes" | "y"))
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> io::Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        // EOF: treat like quit
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_string())
}
