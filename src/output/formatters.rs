//! Formatting utilities for terminal output

use crate::core::{GuessResult, LetterFeedback, LetterStates, Word};
use colored::{ColoredString, Colorize};

/// Color one letter tile by its feedback
#[must_use]
pub fn letter_tile(letter: char, feedback: LetterFeedback) -> ColoredString {
    let tile = format!(" {letter} ");
    match feedback {
        LetterFeedback::Correct => tile.black().on_green().bold(),
        LetterFeedback::Present => tile.black().on_yellow().bold(),
        LetterFeedback::Absent => tile.white().on_bright_black(),
    }
}

/// A guess rendered as a row of colored tiles
#[must_use]
pub fn guess_row(guess: &Word, result: &GuessResult) -> String {
    guess
        .text()
        .chars()
        .zip(result.feedback())
        .map(|(letter, &feedback)| letter_tile(letter, feedback).to_string())
        .collect()
}

/// The alphabet, each guessed letter colored by its best known state
#[must_use]
pub fn keyboard_line(letters: &LetterStates) -> String {
    ('A'..='Z')
        .map(|c| match letters.get(c) {
            Some(LetterFeedback::Correct) => c.to_string().green().bold().to_string(),
            Some(LetterFeedback::Present) => c.to_string().yellow().bold().to_string(),
            Some(LetterFeedback::Absent) => c.to_string().bright_black().to_string(),
            None => c.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Row of hint-revealed letters, `_` where nothing is known
#[must_use]
pub fn revealed_line(word_length: usize, revealed: &[crate::game::Hint]) -> String {
    (0..word_length)
        .map(|pos| {
            revealed
                .iter()
                .find(|hint| hint.position == pos)
                .map_or('_', |hint| hint.letter)
                .to_string()
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
