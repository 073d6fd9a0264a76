//! Word lists for the game
//!
//! Provides the embedded default list and the validated [`WordBank`] that
//! targets are drawn from.

mod bank;
mod embedded;
pub mod loader;

pub use bank::WordBank;
pub use embedded::{WORDS, WORDS_COUNT};
