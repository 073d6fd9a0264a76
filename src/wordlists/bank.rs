//! Target word bank

use super::WORDS;
use super::loader::load_from_file;
use crate::core::Word;
use crate::game::{GameConfig, GameError};
use rand::Rng;
use rustc_hash::FxHashSet;
use std::path::Path;

/// Non-empty list of candidate targets, all of one length
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordBank {
    words: Vec<Word>,
    word_length: usize,
}

impl WordBank {
    /// Build a bank from raw entries
    ///
    /// Entries are normalized to uppercase. Duplicates are dropped, keeping the
    /// first occurrence.
    ///
    /// # Errors
    /// Returns `GameError::Configuration` if the list is empty or any entry is
    /// not a `word_length`-letter alphabetic word.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::wordlists::WordBank;
    ///
    /// let bank = WordBank::new(["apple", "grape", "APPLE"], 5).unwrap();
    /// assert_eq!(bank.len(), 2);
    ///
    /// assert!(WordBank::new(["apple", "banana"], 5).is_err());
    /// ```
    pub fn new<I, S>(entries: I, word_length: usize) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if word_length == 0 {
            return Err(GameError::config("word_length must be at least 1"));
        }

        let mut seen = FxHashSet::default();
        let mut words = Vec::new();
        for entry in entries {
            let entry = entry.as_ref();
            let word = Word::new(entry, word_length).map_err(|e| {
                GameError::config(format!("word list entry {}: {e}", entry.trim().to_uppercase()))
            })?;
            if seen.insert(word.clone()) {
                words.push(word);
            }
        }

        if words.is_empty() {
            return Err(GameError::config("word list is empty"));
        }

        Ok(Self { words, word_length })
    }

    /// The compiled-in list of six-letter words
    ///
    /// # Errors
    /// Returns `GameError::Configuration` if the embedded list is malformed.
    pub fn embedded() -> Result<Self, GameError> {
        Self::new(WORDS.iter().copied(), GameConfig::DEFAULT_WORD_LENGTH)
    }

    /// Load a bank from a newline-delimited word file
    ///
    /// Blank lines and `#` comments are skipped.
    ///
    /// # Errors
    /// Returns `GameError::Configuration` if the file cannot be read or its
    /// entries do not form a valid bank.
    pub fn from_file<P: AsRef<Path>>(path: P, word_length: usize) -> Result<Self, GameError> {
        let path = path.as_ref();
        let entries = load_from_file(path)
            .map_err(|e| GameError::config(format!("cannot read {}: {e}", path.display())))?;
        Self::new(entries, word_length)
    }

    /// Pick a target uniformly at random
    pub fn pick_random<R: Rng>(&self, rng: &mut R) -> &Word {
        &self.words[rng.random_range(0..self.words.len())]
    }

    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false: construction rejects empty lists
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }
}
