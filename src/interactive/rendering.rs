//! TUI rendering with ratatui
//!
//! Board, keyboard, session panel and status bar.

use super::app::{App, InputMode, MessageStyle};
use crate::core::LetterFeedback;
use crate::game::{Clock, GameStatus};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Main UI rendering function
pub fn ui<C: Clock + Clone>(f: &mut Frame, app: &App<C>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Board and keyboard
            Constraint::Percentage(45), // Session and messages
        ])
        .split(chunks[1]);

    render_play_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 WORDLE")
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

fn render_play_panel<C: Clock + Clone>(f: &mut Frame, app: &App<C>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(8),    // Board
            Constraint::Length(5), // Keyboard
        ])
        .split(area);

    render_board(f, app, chunks[0]);
    render_keyboard(f, app, chunks[1]);
}

const fn feedback_color(feedback: LetterFeedback) -> Color {
    match feedback {
        LetterFeedback::Correct => Color::Green,
        LetterFeedback::Present => Color::Yellow,
        LetterFeedback::Absent => Color::DarkGray,
    }
}

fn tile(letter: char, bg: Color) -> Span<'static> {
    Span::styled(
        format!(" {letter} "),
        Style::default()
            .fg(Color::Black)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    )
}

fn render_board<C: Clock + Clone>(f: &mut Frame, app: &App<C>, area: Rect) {
    let state = app.engine.current_state();
    let mut lines = Vec::with_capacity(state.max_tries);

    for record in &state.history {
        let mut spans = Vec::new();
        for (letter, &feedback) in record.guess.text().chars().zip(record.result.feedback()) {
            spans.push(tile(letter, feedback_color(feedback)));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
    }

    // Row being typed
    if state.status == GameStatus::InProgress {
        let mut spans = Vec::new();
        for (cell, &hinted) in app.cells.iter().zip(&app.hinted) {
            let span = match cell {
                Some(letter) if hinted => tile(*letter, Color::Cyan),
                Some(letter) => Span::styled(
                    format!(" {letter} "),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
                ),
                None => Span::styled(" _ ", Style::default().fg(Color::Gray)),
            };
            spans.push(span);
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
    }

    // Remaining empty rows
    while lines.len() < state.max_tries {
        lines.push(Line::from(Span::styled(
            " · ".repeat(state.word_length),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let board = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Board ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(board, area);
}

fn render_keyboard<C: Clock + Clone>(f: &mut Frame, app: &App<C>, area: Rect) {
    let letters = app.engine.current_state().used_letters;

    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .map(|c| match letters.get(c) {
                    Some(feedback) => Span::styled(
                        format!("{c} "),
                        Style::default()
                            .fg(feedback_color(feedback))
                            .add_modifier(Modifier::BOLD),
                    ),
                    None => Span::raw(format!("{c} ")),
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Letters ").borders(Borders::ALL));
    f.render_widget(keyboard, area);
}

fn render_info_panel<C: Clock + Clone>(f: &mut Frame, app: &App<C>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tries gauge
            Constraint::Min(6),    // Session stats
            Constraint::Min(7),    // Messages
        ])
        .split(area);

    render_tries_gauge(f, app, chunks[0]);
    render_session(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_tries_gauge<C: Clock + Clone>(f: &mut Frame, app: &App<C>, area: Rect) {
    let state = app.engine.current_state();
    let used = state.history.len();
    let ratio = if state.max_tries == 0 {
        0.0
    } else {
        (used as f64 / state.max_tries as f64).min(1.0)
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Tries ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .ratio(ratio)
        .label(format!(
            "{used}/{} used | {} correct last",
            state.max_tries, state.letters_found
        ));

    f.render_widget(gauge, area);
}

fn render_session<C: Clock + Clone>(f: &mut Frame, app: &App<C>, area: Rect) {
    let stats = &app.stats;
    let mut lines = vec![
        Line::from(format!(
            "Games: {} | Win Rate: {:.0}%",
            stats.games_played,
            stats.win_rate()
        )),
        Line::from(format!(
            "Streak: {} (best {})",
            stats.current_streak, stats.best_streak
        )),
        Line::from(format!(
            "Best score: {}",
            stats
                .best_score
                .map_or_else(|| "-".to_string(), |s| s.to_string())
        )),
    ];

    let most = stats.try_distribution.iter().copied().max().unwrap_or(0);
    for (i, &count) in stats.try_distribution.iter().enumerate() {
        let width = if most == 0 { 0 } else { count * 12 / most };
        lines.push(Line::from(vec![
            Span::raw(format!("{}: ", i + 1)),
            Span::styled("█".repeat(width), Style::default().fg(Color::Green)),
            Span::raw(format!(" {count}")),
        ]));
    }

    let session =
        Paragraph::new(lines).block(Block::default().title(" Session ").borders(Borders::ALL));
    f.render_widget(session, area);
}

fn render_messages<C: Clock + Clone>(f: &mut Frame, app: &App<C>, area: Rect) {
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

fn render_status<C: Clock + Clone>(f: &mut Frame, app: &App<C>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(50),
        ])
        .split(area);

    let state = app.engine.current_state();

    let (try_text, color) = match state.status {
        GameStatus::InProgress => (
            format!("Try {}/{}", state.current_try, state.max_tries),
            Color::Yellow,
        ),
        GameStatus::Won => ("🎉 Won!".to_string(), Color::Green),
        GameStatus::Lost => ("Lost".to_string(), Color::Red),
    };
    let tries = Paragraph::new(try_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD));
    f.render_widget(tries, chunks[0]);

    let timer = Paragraph::new(format!(
        "⏱ {} | Hints: {}",
        app.engine.elapsed_time(),
        state.hints_remaining
    ))
    .alignment(Alignment::Center);
    f.render_widget(timer, chunks[1]);

    let help_text = match app.input_mode {
        InputMode::Typing => "Enter: Submit | TAB: Hint | Ctrl-N: New | Esc: Quit",
        InputMode::GameOver => "n: New Game | q: Quit",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
