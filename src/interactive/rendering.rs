//! TUI rendering with ratatui
//!
//! Board, keyboard and status panels for the game.

use super::app::{App, InputMode, MessageStyle};
use crate::core::KeyState;
use crate::game::RoundStatus;
use crate::output::formatters::{KEYBOARD_ROWS, format_time};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50), // Board
            Constraint::Percentage(50), // Keyboard and messages
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 GUESSWORD")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn letter_box(letter: char) -> Span<'static> {
    Span::styled(
        format!(" {letter} "),
        Style::default()
            .fg(Color::White)
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    )
}

fn empty_box() -> Span<'static> {
    Span::styled(" _ ", Style::default().fg(Color::DarkGray))
}

/// One row per attempt: letters, then green and yellow counts
fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let round = app.session.round();
    let config = round.config();
    let mut lines = Vec::with_capacity(config.max_attempts);

    for record in round.history() {
        let mut spans = vec![Span::raw(format!("{:>2} ", record.attempt))];
        spans.extend(record.guess.text().chars().flat_map(|c| [letter_box(c), Span::raw(" ")]));
        spans.push(Span::styled(
            format!(" {} ", record.score.correct_count()),
            Style::default().fg(Color::Black).bg(Color::Green),
        ));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            format!(" {} ", record.score.present_count()),
            Style::default().fg(Color::Black).bg(Color::Yellow),
        ));
        lines.push(Line::from(spans));
    }

    // Row being typed
    if !round.status().is_over() {
        let mut spans = vec![Span::raw(format!("{:>2} ", round.attempts_used() + 1))];
        let mut typed = app.input_buffer.chars();
        for _ in 0..config.word_length {
            spans.push(typed.next().map_or_else(empty_box, letter_box));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
    }

    let blank = " _  ".repeat(config.word_length);
    for attempt in lines.len()..config.max_attempts {
        lines.push(Line::from(vec![
            Span::raw(format!("{:>2} ", attempt + 1)),
            Span::styled(blank.clone(), Style::default().fg(Color::DarkGray)),
        ]));
    }

    let title = match round.status() {
        RoundStatus::InProgress => " Board ".to_string(),
        RoundStatus::Won { attempts } => format!(" Solved in {attempts}! "),
        RoundStatus::Lost { .. } => format!(" The word was {} ", round.target()),
    };

    let board = Paragraph::new(lines).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Keyboard
            Constraint::Length(3), // Attempts gauge
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_keyboard(f, app, chunks[0]);
    render_attempts(f, app, chunks[1]);
    if app.show_leaderboard {
        render_leaderboard(f, app, chunks[2]);
    } else {
        render_messages(f, app, chunks[2]);
    }
}

fn key_style(state: KeyState) -> Style {
    match state {
        KeyState::Unused => Style::default().fg(Color::White),
        KeyState::Correct => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        KeyState::Present => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        KeyState::Absent => Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::CROSSED_OUT),
    }
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let hints = app.session.round().hints();
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(indent, row)| {
            let mut spans = vec![Span::raw(" ".repeat(indent))];
            for letter in row.bytes() {
                spans.push(Span::styled(
                    char::from(letter).to_string(),
                    key_style(hints.get(letter)),
                ));
                spans.push(Span::raw(" "));
            }
            Line::from(spans)
        })
        .collect();

    let policy = app.current_policy();
    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(format!(" Keyboard ({}) ", policy.label()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(keyboard, area);
}

fn render_attempts(f: &mut Frame, app: &App, area: Rect) {
    let round = app.session.round();
    let max = round.config().max_attempts.max(1);
    let used = round.attempts_used();
    let percent = u16::try_from(used * 100 / max).unwrap_or(100);

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent.min(100))
        .label(format!(
            "{used}/{max} attempts used | ⏱ {}",
            format_time(round.elapsed())
        ));
    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_leaderboard(f: &mut Frame, app: &App, area: Rect) {
    let board = app.session.leaderboard();
    let items: Vec<ListItem> = if board.is_empty() {
        vec![ListItem::new("No wins yet")]
    } else {
        board
            .entries()
            .iter()
            .enumerate()
            .map(|(rank, entry)| {
                let style = if rank == 0 {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };
                ListItem::new(format!(
                    "{:>2}. {:<12} {} guesses {:>8}  L{}",
                    rank + 1,
                    entry.player,
                    entry.attempts,
                    format_time(entry.time),
                    entry.level
                ))
                .style(style)
            })
            .collect()
    };

    let list = List::new(items).block(
        Block::default()
            .title(" 🏆 Leaderboard (Ctrl-L to close) ")
            .borders(Borders::ALL),
    );
    f.render_widget(list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::RoundOver => (
            " Round over | Press 'n' for a new word or 'q' to quit ",
            "",
            Color::Green,
        ),
        InputMode::Guessing => (
            " Type your guess | Enter to submit ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let difficulty_text = if app.next_policy() == app.current_policy() {
        format!("Difficulty: {}", app.current_policy().label())
    } else {
        format!(
            "Difficulty: {} → {}",
            app.current_policy().label(),
            app.next_policy().label()
        )
    };
    let difficulty = Paragraph::new(difficulty_text).alignment(Alignment::Center);
    f.render_widget(difficulty, chunks[0]);

    let level = Paragraph::new(format!("Level {}", app.session.level()))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Cyan));
    f.render_widget(level, chunks[1]);

    let stats = app.session.stats();
    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}% | Streak: {}",
        stats.games_played,
        stats.win_rate(),
        stats.current_streak
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[2]);

    let help_text = match app.input_mode {
        InputMode::Guessing => "Esc: Quit | Tab: Difficulty | ?: Help | Ctrl-L: Top",
        InputMode::RoundOver => "q: Quit | n: New | Tab: Difficulty",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
