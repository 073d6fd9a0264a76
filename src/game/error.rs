//! Errors reported by the game engine
//!
//! Every variant describes a rejected operation; the engine state is left
//! exactly as it was before the call.

use crate::core::WordError;
use std::fmt;
use thiserror::Error;

/// Why a hint could not be given
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintUnavailableReason {
    /// The game already ended
    GameOver,
    /// All hints for this game have been used
    Exhausted,
}

impl fmt::Display for HintUnavailableReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GameOver => f.write_str("the game is over"),
            Self::Exhausted => f.write_str("no hints left"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("invalid configuration: {0}")]
    Configuration(String),
    #[error("invalid guess: {0}")]
    InvalidGuess(#[from] WordError),
    #[error("the game is over")]
    GameOver,
    #[error("hint unavailable: {0}")]
    HintUnavailable(HintUnavailableReason),
    #[error("no open position left for a hint")]
    NoOpenPosition,
    #[error("position {position} is outside a word of {word_length} letters")]
    PositionOutOfRange { position: usize, word_length: usize },
    #[error("score is only available after a win")]
    NotWon,
}

impl GameError {
    pub(crate) fn config(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }
}
