//! Wordle Game
//!
//! A word-guessing game engine: a hidden fixed-length word, a limited number
//! of tries with per-letter feedback, a small hint budget, a running timer and
//! a final score.
//!
//! # Quick Start
//!
//! ```rust
//! use rand::{SeedableRng, rngs::StdRng};
//! use wordle_game::game::{GameConfig, GameEngine, GameStatus, ManualClock};
//! use wordle_game::wordlists::WordBank;
//!
//! let bank = WordBank::embedded().unwrap();
//! let mut engine = GameEngine::new(
//!     GameConfig::default(),
//!     &bank,
//!     ManualClock::new(),
//!     StdRng::seed_from_u64(7),
//! )
//! .unwrap();
//!
//! let result = engine.submit_guess("planet").unwrap();
//! println!("{} {}", result.to_emoji(), engine.elapsed_time());
//! assert_ne!(engine.status(), GameStatus::Lost);
//! ```

// Core domain types
pub mod core;

// Game rules and engine
pub mod game;

// Word lists
pub mod wordlists;

// Automatic player
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
