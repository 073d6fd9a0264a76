//! Word solving command
//!
//! Plays one full game against a chosen target and returns the solution path.

use crate::game::{Clock, GameConfig, GameEngine, GameStatus};
use crate::solver::{AutoplayStep, Solver, Strategy, autoplay};
use anyhow::Context;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
    pub game: GameConfig,
    pub use_hints: bool,
}

impl SolveConfig {
    #[must_use]
    pub fn new(target: String) -> Self {
        Self {
            target,
            game: GameConfig::default(),
            use_hints: false,
        }
    }
}

/// Result of solving a word
pub struct SolveResult {
    pub success: bool,
    pub steps: Vec<AutoplayStep>,
    pub target: String,
    /// Set only when the game was won
    pub score: Option<u32>,
    pub elapsed: String,
}

/// Solve a specific word through a real game
///
/// `rng` seeds the engine and drives any random choice the strategy makes.
///
/// # Errors
///
/// Returns an error if the target is not a valid word for the configured
/// length, or if the engine rejects one of the solver's moves.
pub fn solve_word<S, C, R>(
    config: SolveConfig,
    solver: &Solver<S>,
    clock: C,
    mut rng: R,
) -> anyhow::Result<SolveResult>
where
    S: Strategy,
    C: Clock,
    R: Rng,
{
    let engine_rng = StdRng::seed_from_u64(rng.random());
    let mut engine = GameEngine::with_target(config.game, &config.target, clock, engine_rng)
        .with_context(|| format!("cannot start a game for {:?}", config.target))?;

    let steps = autoplay(&mut engine, solver, &mut rng, config.use_hints, || {})?;

    let success = engine.status() == GameStatus::Won;
    Ok(SolveResult {
        success,
        steps,
        target: config.target.trim().to_uppercase(),
        score: engine.compute_score().ok(),
        elapsed: engine.elapsed_time(),
    })
}
