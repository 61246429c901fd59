//! TUI application state and logic

use crate::core::DifficultyPolicy;
use crate::game::{GuessOutcome, RoundStatus, Session};
use crate::output::formatters::format_time;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tracing::debug;

/// Messages kept in the message panel
const MAX_MESSAGES: usize = 5;

/// Redraw interval while waiting for keys, so the clock keeps ticking
const TICK: Duration = Duration::from_millis(250);

/// Application state
pub struct App {
    pub session: Session,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub should_quit: bool,
    pub input_mode: InputMode,
    pub show_leaderboard: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    RoundOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl App {
    #[must_use]
    pub fn new(session: Session) -> Self {
        let config = *session.config();
        let mut app = Self {
            session,
            input_buffer: String::new(),
            messages: Vec::new(),
            should_quit: false,
            input_mode: InputMode::Guessing,
            show_leaderboard: false,
        };
        app.add_message(
            &format!(
                "Guess the {}-letter word in {} tries. The board shows only 🟩/🟨 counts.",
                config.word_length, config.max_attempts
            ),
            MessageStyle::Info,
        );
        app.add_message(
            &format!(
                "Difficulty: {} - {}",
                config.policy.label(),
                config.policy.description()
            ),
            MessageStyle::Info,
        );
        app
    }

    /// Difficulty of the round on screen
    #[must_use]
    pub fn current_policy(&self) -> DifficultyPolicy {
        self.session.round().config().policy
    }

    /// Difficulty the next round will use
    #[must_use]
    pub fn next_policy(&self) -> DifficultyPolicy {
        self.session.config().policy
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                KeyCode::Char('l') => self.show_leaderboard = !self.show_leaderboard,
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => self.cycle_difficulty(),
            KeyCode::Char('?') => self.show_help(),
            _ => match self.input_mode {
                InputMode::Guessing => self.handle_guess_key(key.code),
                InputMode::RoundOver => match key.code {
                    KeyCode::Char('q') => self.should_quit = true,
                    KeyCode::Char('n') | KeyCode::Enter => self.new_game(),
                    _ => {}
                },
            },
        }
    }

    fn handle_guess_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                self.session.start_timer();
                if self.input_buffer.len() < self.session.config().word_length {
                    self.input_buffer.push(c.to_ascii_uppercase());
                }
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Enter => self.submit_guess(),
            _ => {}
        }
    }

    /// Submit the input buffer as a guess
    pub fn submit_guess(&mut self) {
        let input = self.input_buffer.clone();
        match self.session.submit(&input) {
            Ok(outcome) => {
                self.input_buffer.clear();
                self.report_outcome(&outcome);
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    fn report_outcome(&mut self, outcome: &GuessOutcome) {
        let score = &outcome.record.score;
        match outcome.status {
            RoundStatus::InProgress => {
                self.add_message(
                    &format!(
                        "{}: {} in place, {} misplaced. {} tries left.",
                        outcome.record.guess,
                        score.correct_count(),
                        score.present_count(),
                        outcome.remaining_attempts
                    ),
                    MessageStyle::Info,
                );
            }
            RoundStatus::Won { attempts } => {
                self.input_mode = InputMode::RoundOver;
                let celebration = match attempts {
                    1 => "🎯 HOLE IN ONE! Extraordinary! 🌟".to_string(),
                    2 => "🔥 MAGNIFICENT! Two guesses! 🔥".to_string(),
                    3 => "✨ SPLENDID! Three guesses! ✨".to_string(),
                    n => format!("🎉 Congratulations! Solved in {n} guesses! 🎉"),
                };
                self.add_message(&celebration, MessageStyle::Success);
                let ranked = self
                    .session
                    .last_rank()
                    .map(|rank| format!(", #{rank} on the leaderboard"))
                    .unwrap_or_default();
                self.add_message(
                    &format!("Time: {}{ranked}", format_time(outcome.elapsed)),
                    MessageStyle::Success,
                );
                self.add_message(
                    &format!("Level up! You are now on level {}.", self.session.level()),
                    MessageStyle::Success,
                );
                self.add_message("Press 'n' for a new word or 'q' to quit.", MessageStyle::Info);
            }
            RoundStatus::Lost { .. } => {
                self.input_mode = InputMode::RoundOver;
                self.add_message(
                    &format!(
                        "Game Over! The word was {}.",
                        self.session.round().target()
                    ),
                    MessageStyle::Error,
                );
                self.add_message("Press 'n' for a new word or 'q' to quit.", MessageStyle::Info);
            }
        }
    }

    /// Show instructions, or reveal the word if the input is the cheat code
    pub fn show_help(&mut self) {
        let revealed = self
            .session
            .reveal(&self.input_buffer)
            .map(|target| target.text().to_string());
        if let Some(target) = revealed {
            self.input_buffer.clear();
            self.add_message(
                &format!("🤫 Cheat mode: the word is {target}"),
                MessageStyle::Success,
            );
            return;
        }
        self.add_message(
            "Type a word and press Enter. 🟩 = right place, 🟨 = wrong place.",
            MessageStyle::Info,
        );
        self.add_message(
            "Tab: difficulty | Ctrl-L: leaderboard | Ctrl-N: new word | Esc: quit",
            MessageStyle::Info,
        );
    }

    /// Move to the next difficulty; it takes effect on the next round
    pub fn cycle_difficulty(&mut self) {
        let policy = self.next_policy().next();
        self.session.set_policy(policy);
        debug!(%policy, "difficulty changed");
        self.add_message(
            &format!(
                "Next word: {} - {}",
                policy.label(),
                policy.description()
            ),
            MessageStyle::Info,
        );
    }

    pub fn new_game(&mut self) {
        self.session.new_round();
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Guessing;
        self.add_message(
            &format!("New word drawn! Difficulty: {}", self.current_policy().label()),
            MessageStyle::Info,
        );
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if !event::poll(TICK)? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
