//! Drives a [`GameEngine`] with a [`Solver`] until the game ends

use super::{Solver, Strategy};
use crate::core::GuessResult;
use crate::game::{Clock, GameEngine, GameError, Hint};
use rand::Rng;

/// One automatic try
#[derive(Debug, Clone)]
pub struct AutoplayStep {
    pub guess: String,
    pub result: GuessResult,
    pub candidates_before: usize,
    pub candidates_after: usize,
    /// Hint taken right before this guess, if any
    pub hint: Option<Hint>,
}

/// Play `engine` to completion
///
/// The solver's own random choices come from `rng`, separate from the
/// engine's generator. With `use_hints`, a hint is taken before every guess while any remain,
/// offering the positions not yet known to be correct. `before_guess` runs
/// once per try; the benchmark uses it to advance a manual clock.
///
/// Stops early when no word in the solver's list fits the feedback, which
/// only happens if the target is not in that list.
///
/// # Errors
/// Propagates engine errors; none are expected for a fresh engine.
pub fn autoplay<C, R, S, G, F>(
    engine: &mut GameEngine<C, R>,
    solver: &Solver<'_, S>,
    rng: &mut G,
    use_hints: bool,
    mut before_guess: F,
) -> Result<Vec<AutoplayStep>, GameError>
where
    C: Clock,
    R: Rng,
    S: Strategy,
    G: Rng + ?Sized,
    F: FnMut(),
{
    let mut steps = Vec::new();

    while !engine.status().is_over() {
        let hint = if use_hints && engine.hints_remaining() > 0 {
            let open = engine.current_state().unknown_positions();
            if open.is_empty() {
                None
            } else {
                Some(engine.use_hint(&open)?)
            }
        } else {
            None
        };

        let state = engine.current_state();
        let candidates_before = solver.count_candidates(&state.history, &state.revealed);
        let Some(guess) = solver.next_guess(&state.history, &state.revealed, rng) else {
            log::warn!("no candidate fits the feedback, giving up");
            break;
        };

        before_guess();
        let result = engine.submit_guess(guess.text())?;

        let state = engine.current_state();
        let candidates_after = solver.count_candidates(&state.history, &state.revealed);

        steps.push(AutoplayStep {
            guess: guess.text().to_string(),
            result,
            candidates_before,
            candidates_after,
            hint,
        });
    }

    Ok(steps)
}
