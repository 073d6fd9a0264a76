//! Game word representation
//!
//! A Word stores a validated, uppercase word of a known length. Guesses and
//! targets share this type so evaluation never has to re-check input.

use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

/// An uppercase ASCII word of fixed length
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must be exactly {expected} letters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    #[error("word must contain only letters A-Z")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from raw input
    ///
    /// Surrounding whitespace is trimmed and letters are uppercased before
    /// validation. Length is counted in characters, so non-ASCII input of the
    /// right length is reported as [`WordError::InvalidCharacters`].
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly `length`
    /// - Contains anything other than ASCII letters
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    ///
    /// let word = Word::new(" golden ", 6).unwrap();
    /// assert_eq!(word.text(), "GOLDEN");
    ///
    /// assert!(Word::new("gold", 6).is_err());
    /// assert!(Word::new("g0lden", 6).is_err());
    /// ```
    pub fn new(text: &str, length: usize) -> Result<Self, WordError> {
        let text = text.trim();

        let actual = text.chars().count();
        if actual != length {
            return Err(WordError::InvalidLength {
                expected: length,
                actual,
            });
        }

        // ASCII-only uppercasing keeps the length counted above
        if !text.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(WordError::InvalidCharacters);
        }
        let text = text.to_ascii_uppercase();

        Ok(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as uppercase ASCII bytes
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false for a validated word of non-zero length
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the letter at a specific position
    ///
    /// # Panics
    /// Panics if position >= `len()`
    #[inline]
    #[must_use]
    pub fn letter_at(&self, position: usize) -> char {
        char::from(self.letters()[position])
    }

    /// Get the count of each letter in the word
    ///
    /// Used as the remaining-count pool during evaluation.
    #[inline]
    pub(crate) fn letter_counts(&self) -> FxHashMap<u8, usize> {
        let mut counts = FxHashMap::default();
        for &letter in self.letters() {
            *counts.entry(letter).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
