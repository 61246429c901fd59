//! Display functions for command results

use super::formatters::{
    KEYBOARD_ROWS, count_badges, create_progress_bar, format_time, keyboard_plain, score_to_emoji,
};
use crate::analysis::OutcomeDistribution;
use crate::commands::{ReplayReport, ScoreReport, SimulationReport};
use crate::core::{KeyState, KeyboardHints, LetterClass, ScoreResult, Word};
use crate::game::{GameStats, GuessRecord, Leaderboard, RoundStatus};
use colored::{ColoredString, Colorize};

fn colored_letter(letter: char, class: LetterClass) -> ColoredString {
    let text = format!(" {letter} ");
    match class {
        LetterClass::Correct => text.black().on_green().bold(),
        LetterClass::Present => text.black().on_yellow().bold(),
        LetterClass::Absent => text.white().on_bright_black(),
    }
}

fn colored_word(word: &Word, result: &ScoreResult) -> String {
    word.text()
        .chars()
        .zip(result.per_position())
        .map(|(letter, &class)| colored_letter(letter, class).to_string())
        .collect()
}

fn colored_key(letter: u8, state: KeyState) -> ColoredString {
    let key = char::from(letter).to_string();
    match state {
        KeyState::Unused => key.white(),
        KeyState::Correct => key.black().on_green().bold(),
        KeyState::Present => key.black().on_yellow().bold(),
        KeyState::Absent => key.bright_black().strikethrough(),
    }
}

fn print_status(status: RoundStatus, target: &Word) {
    match status {
        RoundStatus::InProgress => {
            println!("{}", "… Round still in progress".bright_black());
        }
        RoundStatus::Won { attempts } => println!(
            "{}",
            format!("✅ Solved {target} in {attempts} guesses!").green().bold()
        ),
        RoundStatus::Lost { attempts } => println!(
            "{}",
            format!("❌ Out of guesses after {attempts} tries. The word was {target}")
                .red()
                .bold()
        ),
    }
}

/// Print a board: one row per guess with its green/yellow counts
///
/// Letters are not colored, matching what the player sees during a game.
pub fn print_board(history: &[GuessRecord]) {
    for record in history {
        let letters: String = record
            .guess
            .text()
            .chars()
            .map(|c| format!(" {c} "))
            .collect();
        println!(
            "  {:>2}. {}  {}",
            record.attempt,
            letters.bold(),
            count_badges(&record.score)
        );
    }
}

/// Print the virtual keyboard with each key colored by its hint state
///
/// Falls back to plain markers when color is turned off (e.g. `NO_COLOR`).
pub fn print_keyboard(hints: &KeyboardHints) {
    if !colored::control::SHOULD_COLORIZE.should_colorize() {
        for row in keyboard_plain(hints) {
            println!("  {row}");
        }
        return;
    }
    for (indent, row) in KEYBOARD_ROWS.iter().enumerate() {
        let keys: Vec<String> = row
            .bytes()
            .map(|letter| colored_key(letter, hints.get(letter)).to_string())
            .collect();
        println!("  {}{}", " ".repeat(indent), keys.join(" "));
    }
}

/// Print a single scored guess
pub fn print_score_report(report: &ScoreReport, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Scoring {} against {}",
        report.guess.text().bright_yellow().bold(),
        report.target.text().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    println!(
        "\n  {}  {}",
        colored_word(&report.guess, &report.result),
        score_to_emoji(&report.result)
    );
    println!("  Board shows: {}", count_badges(&report.result));

    if verbose {
        for (i, (letter, class)) in report
            .guess
            .text()
            .chars()
            .zip(report.result.per_position())
            .enumerate()
        {
            println!("  {}: {} {:?}", i + 1, letter, class);
        }
    }
}

/// Print every replayed guess with the keyboard it produced
pub fn print_replay(report: &ReplayReport, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Replaying against {} | {} - {}",
        report.target.text().bright_yellow().bold(),
        report.policy.label().bright_cyan().bold(),
        report.policy.description()
    );
    println!("{}", "─".repeat(60).cyan());

    for step in &report.steps {
        let record = &step.record;
        println!(
            "\nTurn {}: {}  {}",
            record.attempt,
            colored_word(&record.guess, &record.score),
            count_badges(&record.score)
        );
        if verbose {
            println!("  Feedback: {}", score_to_emoji(&record.score));
        }
        print_keyboard(&step.hints);
    }

    println!();
    print_status(report.final_status(), &report.target);
}

/// Print how a guess splits the word list
pub fn print_analysis(dist: &OutcomeDistribution) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "GUESS ANALYSIS:".bright_cyan().bold(),
        dist.guess.bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 Against {} possible targets:", dist.total);
    println!(
        "   Worst case:  {} targets share one count",
        dist.worst_case().to_string().bright_yellow()
    );
    println!(
        "   Expected:    {:.1} targets remain (counts only)",
        dist.expected_remaining()
    );
    println!(
        "   Feedback:    {} distinct keyboard patterns",
        dist.distinct_feedback
    );

    println!("\n📈 {}", "Green/yellow counts:".bright_cyan().bold());
    let max = dist.worst_case() as f64;
    for &((correct, present), count) in &dist.buckets {
        let pct = if dist.total == 0 {
            0.0
        } else {
            count as f64 / dist.total as f64 * 100.0
        };
        let bar = create_progress_bar(count as f64, max, 30);
        println!(
            "   {correct}🟩 {present}🟨  {} {count:4} ({pct:5.1}%)",
            bar.green()
        );
    }
}

/// Print session or simulation statistics
pub fn print_stats(stats: &GameStats) {
    println!("\n📊 {}", "Statistics:".bright_cyan().bold());
    println!("   Played:          {}", stats.games_played);
    println!(
        "   Win rate:        {}",
        format!("{:.1}%", stats.win_rate()).bright_yellow().bold()
    );
    println!(
        "   Streak:          {} (best {})",
        stats.current_streak, stats.best_streak
    );
    if let Some(avg) = stats.average_attempts() {
        println!("   Average guesses: {avg:.2}");
    }
    println!("   Total time:      {}", format_time(stats.total_time));
    if let Some(avg) = stats.average_time() {
        println!("   Average time:    {}", format_time(avg));
    }

    let Some(&most) = stats.guess_distribution.values().max() else {
        return;
    };
    let mut attempts: Vec<_> = stats.guess_distribution.iter().collect();
    attempts.sort_unstable();

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (&guesses, &count) in attempts {
        let bar = create_progress_bar(count as f64, most as f64, 30);
        println!("   {guesses:2}: {} {count:4}", bar.green());
    }
}

/// Print the result of a simulation
pub fn print_simulation(report: &SimulationReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    if let Some(opener) = &report.opener {
        println!("\n   Opening guess:    {}", opener.bright_yellow().bold());
    }
    println!("   Attempt limit:    {}", report.max_attempts);
    println!("   Time taken:       {:.2}s", report.duration.as_secs_f64());

    print_stats(&report.stats);

    if !report.lost_words.is_empty() {
        println!(
            "\n{} {}",
            "⚠  Not found:".yellow().bold(),
            report.lost_words.join(", ")
        );
    }
}

/// Print the leaderboard, best first
pub fn print_leaderboard(board: &Leaderboard) {
    println!("\n🏆 {}", "Leaderboard:".bright_cyan().bold());
    if board.is_empty() {
        println!("   No wins yet");
        return;
    }
    for (rank, entry) in board.entries().iter().enumerate() {
        let line = format!(
            "   {:>2}. {:<16} {} guesses  {:>9}  level {}",
            rank + 1,
            entry.player,
            entry.attempts,
            format_time(entry.time),
            entry.level
        );
        if rank == 0 {
            println!("{}", line.bright_yellow().bold());
        } else {
            println!("{line}");
        }
    }
}
