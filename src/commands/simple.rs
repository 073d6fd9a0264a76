//! Simple interactive CLI mode
//!
//! Line-based play without TUI: one guess or command per line.

use crate::game::{Clock, GameConfig, GameEngine, GameError, GameStatus, SessionStats};
use crate::output::formatters::{guess_row, keyboard_line, revealed_line};
use crate::wordlists::WordBank;
use anyhow::Result;
use colored::Colorize;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode on stdin and stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or the game
/// configuration does not fit the word bank.
pub fn run_simple<C, R>(
    config: GameConfig,
    bank: &WordBank,
    clock: C,
    rng: &mut R,
) -> Result<SessionStats>
where
    C: Clock + Clone,
    R: Rng,
{
    let stdin = io::stdin();
    let stdout = io::stdout();
    play_session(config, bank, clock, rng, &mut stdin.lock(), &mut stdout.lock())
}

enum Outcome {
    Quit,
    NewGame,
}

/// Play games until the input ends or the player quits
///
/// Each game draws its engine seed from `rng`, so a seeded `rng` makes the
/// whole session reproducible.
///
/// # Errors
///
/// Returns an error on I/O failure or if the configuration does not fit the
/// word bank.
pub fn play_session<C, R, I, O>(
    config: GameConfig,
    bank: &WordBank,
    clock: C,
    rng: &mut R,
    input: &mut I,
    out: &mut O,
) -> Result<SessionStats>
where
    C: Clock + Clone,
    R: Rng,
    I: BufRead,
    O: Write,
{
    let mut stats = SessionStats::new();

    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                     Wordle - Simple Mode                     ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(
        out,
        "Guess the {}-letter word in {} tries.",
        config.word_length, config.max_tries
    )?;
    writeln!(out, "Commands: 'hint' to reveal a letter, 'new' for a new game, 'quit' to exit")?;
    writeln!(out, "Prefix a command with ':' when it is also a guess, e.g. ':hint'\n")?;

    loop {
        let engine_rng = StdRng::seed_from_u64(rng.random());
        let mut engine = GameEngine::new(config, bank, clock.clone(), engine_rng)?;

        match play_game(&mut engine, &mut stats, input, out)? {
            Outcome::Quit => break,
            Outcome::NewGame => writeln!(out, "\n🔄 New game started!\n")?,
        }
    }

    writeln!(
        out,
        "\n👋 Thanks for playing! {} played, {} won.",
        stats.games_played, stats.games_won
    )?;
    Ok(stats)
}

#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
fn play_game<C, R, I, O>(
    engine: &mut GameEngine<C, R>,
    stats: &mut SessionStats,
    input: &mut I,
    out: &mut O,
) -> Result<Outcome>
where
    C: Clock,
    R: Rng,
    I: BufRead,
    O: Write,
{
    loop {
        let state = engine.current_state();

        if state.status.is_over() {
            let target = engine
                .revealed_target()
                .map(|w| w.text().to_string())
                .unwrap_or_default();

            if state.status == GameStatus::Won {
                let score = engine.compute_score()?;
                stats.record(state.status, state.current_try, Some(score));
                writeln!(out, "\n{}", "═".repeat(60).bright_cyan())?;
                writeln!(
                    out,
                    "{}",
                    format!(
                        "  🎉 You found {target} in {} {}!",
                        state.current_try,
                        if state.current_try == 1 { "try" } else { "tries" }
                    )
                    .bright_green()
                    .bold()
                )?;
                writeln!(
                    out,
                    "  Score: {} | Time: {}",
                    score.to_string().bright_yellow().bold(),
                    engine.elapsed_time()
                )?;
            } else {
                stats.record(state.status, state.current_try, None);
                writeln!(out, "\n{}", "═".repeat(60).bright_cyan())?;
                writeln!(
                    out,
                    "{}",
                    format!("  ❌ Out of tries! The word was {target}").red().bold()
                )?;
            }
            writeln!(out, "{}", "═".repeat(60).bright_cyan())?;

            return match prompt(input, out, "Play again? (yes/no)")?.as_deref() {
                Some("yes" | "y") => Ok(Outcome::NewGame),
                _ => Ok(Outcome::Quit),
            };
        }

        let label = format!(
            "Try {}/{} [{}] ({} hint(s) left)",
            state.current_try,
            state.max_tries,
            engine.elapsed_time(),
            state.hints_remaining
        );
        let Some(line) = prompt(input, out, &label)? else {
            return Ok(Outcome::Quit);
        };

        if line.is_empty() {
            continue;
        }

        // A line of guess length is a guess unless it starts with ':'
        let command = line
            .strip_prefix(':')
            .or_else(|| (line.chars().count() != state.word_length).then_some(line.as_str()));

        match command {
            Some("quit" | "q" | "exit") => return Ok(Outcome::Quit),
            Some("new" | "n") => return Ok(Outcome::NewGame),
            Some("hint" | "h") => match engine.use_hint(&state.unknown_positions()) {
                Ok(hint) => {
                    let state = engine.current_state();
                    writeln!(
                        out,
                        "💡 Letter {} is {}",
                        hint.position + 1,
                        hint.letter.to_string().bright_cyan().bold()
                    )?;
                    writeln!(
                        out,
                        "   {}\n",
                        revealed_line(state.word_length, &state.revealed)
                    )?;
                }
                Err(GameError::NoOpenPosition) => {
                    writeln!(out, "Every letter is already known!\n")?;
                }
                Err(e) => writeln!(out, "{}\n", e.to_string().red())?,
            },
            _ => match engine.submit_guess(&line) {
                Ok(result) => {
                    let state = engine.current_state();
                    writeln!(out)?;
                    for record in &state.history {
                        writeln!(out, "  {}", guess_row(&record.guess, &record.result))?;
                    }
                    writeln!(
                        out,
                        "  {} in place, {} elsewhere",
                        result.correct_count(),
                        result.present_count()
                    )?;
                    writeln!(out, "\n  {}\n", keyboard_line(&state.used_letters))?;
                }
                Err(e) => writeln!(out, "❌ {}\n", e.to_string().red())?,
            },
        }
    }
}

/// Read one trimmed, lowercased line; `None` at end of input
fn prompt<I: BufRead, O: Write>(input: &mut I, out: &mut O, label: &str) -> Result<Option<String>> {
    write!(out, "{label}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_lowercase()))
}
