//! Game configuration

use super::GameError;

/// Immutable game parameters
///
/// Defaults follow the classic six-by-six board with two hints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub max_tries: usize,
    pub word_length: usize,
    pub max_hints: usize,
}

impl GameConfig {
    pub const DEFAULT_MAX_TRIES: usize = 6;
    pub const DEFAULT_WORD_LENGTH: usize = 6;
    pub const DEFAULT_MAX_HINTS: usize = 2;

    /// Create a validated configuration
    ///
    /// # Errors
    /// Returns `GameError::Configuration` if `max_tries` or `word_length` is zero.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::game::GameConfig;
    ///
    /// let config = GameConfig::new(6, 5, 0).unwrap();
    /// assert_eq!(config.word_length, 5);
    ///
    /// assert!(GameConfig::new(0, 5, 2).is_err());
    /// ```
    pub fn new(max_tries: usize, word_length: usize, max_hints: usize) -> Result<Self, GameError> {
        let config = Self {
            max_tries,
            word_length,
            max_hints,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check the invariants of a configuration built by hand
    ///
    /// # Errors
    /// Returns `GameError::Configuration` naming the offending field.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.max_tries == 0 {
            return Err(GameError::config("max_tries must be at least 1"));
        }
        if self.word_length == 0 {
            return Err(GameError::config("word_length must be at least 1"));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_tries: Self::DEFAULT_MAX_TRIES,
            word_length: Self::DEFAULT_WORD_LENGTH,
            max_hints: Self::DEFAULT_MAX_HINTS,
        }
    }
}
