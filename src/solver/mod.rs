//! Automatic player
//!
//! Picks guesses consistent with all feedback received so far and drives a
//! game engine with them.

mod autoplay;
mod engine;
pub mod entropy;
pub mod strategy;

pub use autoplay::{AutoplayStep, autoplay};
pub use engine::Solver;
pub use strategy::{EntropyStrategy, FrequencyStrategy, RandomStrategy, Strategy, StrategyType};
