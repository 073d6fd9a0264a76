//! Core domain types for the game
//!
//! Words, per-letter feedback and the duplicate-aware evaluation rule.
//! Nothing here knows about tries, hints or time.

mod feedback;
mod letters;
mod word;

pub use feedback::{GuessResult, LetterFeedback};
pub use letters::LetterStates;
pub use word::{Word, WordError};
