//! TUI application state and logic

use crate::game::{
    Clock, GameConfig, GameEngine, GameError, GameStatus, SessionStats, SystemClock,
};
use crate::wordlists::WordBank;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;

/// Redraw interval while waiting for keys, keeps the timer moving
const TICK: Duration = Duration::from_millis(250);

/// Application state
pub struct App<'a, C: Clock + Clone = SystemClock> {
    pub engine: GameEngine<C>,
    pub bank: &'a WordBank,
    pub config: GameConfig,
    /// Letters of the row being typed, `None` for empty cells
    pub cells: Vec<Option<char>>,
    /// Cells filled by a hint rather than typed
    pub hinted: Vec<bool>,
    pub messages: Vec<Message>,
    pub stats: SessionStats,
    pub input_mode: InputMode,
    pub should_quit: bool,
    clock: C,
    rng: StdRng,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Typing,
    GameOver,
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

impl<'a, C: Clock + Clone> App<'a, C> {
    /// Start the first game of a session
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration does not fit the word bank.
    pub fn new(config: GameConfig, bank: &'a WordBank, clock: C, mut rng: StdRng) -> Result<Self> {
        let engine = GameEngine::new(
            config,
            bank,
            clock.clone(),
            StdRng::seed_from_u64(rng.random()),
        )?;

        let mut app = Self {
            engine,
            bank,
            config,
            cells: Vec::new(),
            hinted: Vec::new(),
            messages: Vec::new(),
            stats: SessionStats::new(),
            input_mode: InputMode::Typing,
            should_quit: false,
            clock,
            rng,
        };
        app.reset_row();
        app.add_message(
            &format!(
                "Guess the {}-letter word in {} tries!",
                config.word_length, config.max_tries
            ),
            MessageStyle::Info,
        );
        app.add_message("TAB reveals a letter, ENTER submits.", MessageStyle::Info);
        Ok(app)
    }

    /// Put a letter into the first empty cell
    pub fn type_letter(&mut self, c: char) {
        if self.input_mode != InputMode::Typing || !c.is_ascii_alphabetic() {
            return;
        }
        if let Some(cell) = self.cells.iter_mut().find(|cell| cell.is_none()) {
            *cell = Some(c.to_ascii_uppercase());
        }
    }

    /// Clear the last typed letter; hint letters stay
    pub fn backspace(&mut self) {
        if let Some(pos) =
            (0..self.cells.len()).rfind(|&i| self.cells[i].is_some() && !self.hinted[i])
        {
            self.cells[pos] = None;
        }
    }

    /// Ask the engine to fill one of the empty cells
    pub fn use_hint(&mut self) {
        if self.input_mode != InputMode::Typing {
            return;
        }

        let open: Vec<usize> = (0..self.cells.len())
            .filter(|&i| self.cells[i].is_none())
            .collect();

        match self.engine.use_hint(&open) {
            Ok(hint) => {
                self.cells[hint.position] = Some(hint.letter);
                self.hinted[hint.position] = true;
                self.add_message(
                    &format!(
                        "💡 Letter {} is {} ({} hint(s) left)",
                        hint.position + 1,
                        hint.letter,
                        self.engine.hints_remaining()
                    ),
                    MessageStyle::Success,
                );
            }
            Err(GameError::NoOpenPosition) => {
                self.add_message("Clear a cell to get a hint there", MessageStyle::Error);
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    /// Submit the current row
    pub fn submit(&mut self) {
        if self.input_mode != InputMode::Typing {
            return;
        }
        let Some(guess) = self.cells.iter().copied().collect::<Option<String>>() else {
            self.add_message("Not enough letters", MessageStyle::Error);
            return;
        };

        match self.engine.submit_guess(&guess) {
            Ok(result) => {
                self.reset_row();
                match self.engine.status() {
                    GameStatus::InProgress => {
                        self.add_message(
                            &format!(
                                "{} {} in place, {} elsewhere",
                                result.to_emoji(),
                                result.correct_count(),
                                result.present_count()
                            ),
                            MessageStyle::Info,
                        );
                    }
                    status => self.finish_game(status),
                }
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    /// Abandon the current game and draw a new target
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration does not fit the word bank.
    pub fn new_game(&mut self) -> Result<()> {
        let seed = self.rng.random();
        self.engine = GameEngine::new(
            self.config,
            self.bank,
            self.clock.clone(),
            StdRng::seed_from_u64(seed),
        )?;
        self.input_mode = InputMode::Typing;
        self.messages.clear();
        self.reset_row();
        self.add_message("New game started!", MessageStyle::Info);
        Ok(())
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Empty row, pre-filled with every letter hints have revealed
    fn reset_row(&mut self) {
        let length = self.config.word_length;
        self.cells = vec![None; length];
        self.hinted = vec![false; length];
        if self.engine.status().is_over() {
            return;
        }
        for hint in self.engine.current_state().revealed {
            self.cells[hint.position] = Some(hint.letter);
            self.hinted[hint.position] = true;
        }
    }

    fn finish_game(&mut self, status: GameStatus) {
        let tries = self.engine.current_try();
        let score = self.engine.compute_score().ok();
        self.stats.record(status, tries, score);
        self.input_mode = InputMode::GameOver;

        let target = self
            .engine
            .revealed_target()
            .map(|w| w.text().to_string())
            .unwrap_or_default();

        if let Some(score) = score {
            let celebration = match tries {
                1 => "🎯 HOLE IN ONE!",
                2 => "🔥 MAGNIFICENT!",
                3 => "✨ SPLENDID!",
                4 => "👏 GREAT JOB!",
                5 => "🎉 NICE WORK!",
                _ => "😅 PHEW!",
            };
            self.add_message(
                &format!("{celebration} {target} in {tries}, score {score}"),
                MessageStyle::Success,
            );
        } else {
            self.add_message(&format!("Out of tries! The word was {target}"), MessageStyle::Error);
        }
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<C: Clock + Clone>(app: App<'_, C>) -> Result<SessionStats> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend, C: Clock + Clone>(
    terminal: &mut Terminal<B>,
    mut app: App<'_, C>,
) -> Result<SessionStats> {
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

            match (app.input_mode, key.code) {
                (_, KeyCode::Char('c')) if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                (_, KeyCode::Esc) | (InputMode::GameOver, KeyCode::Char('q')) => {
                    app.should_quit = true;
                }
                (InputMode::GameOver, KeyCode::Char('n')) => app.new_game()?,
                (InputMode::Typing, KeyCode::Char('n'))
                    if key.modifiers.contains(KeyModifiers::CONTROL) =>
                {
                    app.new_game()?;
                }
                (InputMode::Typing, KeyCode::Char(c)) => app.type_letter(c),
                (InputMode::Typing, KeyCode::Backspace) => app.backspace(),
                (InputMode::Typing, KeyCode::Tab) => app.use_hint(),
                (InputMode::Typing, KeyCode::Enter) => app.submit(),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(app.stats)
}
