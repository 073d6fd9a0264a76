//! Game rules
//!
//! Configuration, the engine state machine, its errors, time sources,
//! score arithmetic and per-session statistics.

mod clock;
mod config;
mod engine;
mod error;
pub mod score;
mod stats;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::GameConfig;
pub use engine::{GameEngine, GameSnapshot, GameStatus, GuessRecord, Hint, new_game};
pub use error::{GameError, HintUnavailableReason};
pub use stats::SessionStats;
