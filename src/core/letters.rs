//! Cumulative per-letter state across guesses
//!
//! Tracks the best feedback seen for each letter, the information an
//! on-screen keyboard shows.

use super::{GuessResult, LetterFeedback, Word};
use rustc_hash::FxHashMap;

/// Best known feedback for every letter guessed so far
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterStates {
    states: FxHashMap<u8, LetterFeedback>,
}

impl LetterStates {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge one evaluated guess into the cumulative state
    ///
    /// A letter is only ever upgraded (`Absent -> Present -> Correct`). A
    /// duplicate reported `Absent` in a later guess never hides an earlier
    /// `Correct`.
    pub fn record(&mut self, guess: &Word, result: &GuessResult) {
        for (&letter, &feedback) in guess.letters().iter().zip(result.feedback()) {
            self.states
                .entry(letter)
                .and_modify(|best| *best = (*best).max(feedback))
                .or_insert(feedback);
        }
    }

    /// State of a letter, `None` if it has never been guessed
    ///
    /// Lowercase input is accepted.
    #[must_use]
    pub fn get(&self, letter: char) -> Option<LetterFeedback> {
        u8::try_from(letter.to_ascii_uppercase())
            .ok()
            .and_then(|b| self.states.get(&b).copied())
    }

    /// Number of distinct letters guessed so far
    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// All known letters in alphabetical order
    #[must_use]
    pub fn sorted(&self) -> Vec<(char, LetterFeedback)> {
        let mut letters: Vec<(char, LetterFeedback)> = self
            .states
            .iter()
            .map(|(&b, &f)| (char::from(b), f))
            .collect();
        letters.sort_unstable_by_key(|&(c, _)| c);
        letters
    }
}
