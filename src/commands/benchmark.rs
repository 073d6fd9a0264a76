//! Benchmark command
//!
//! Plays many seeded games in parallel with the automatic player.

use crate::game::{GameConfig, GameEngine, GameError, GameStatus, ManualClock};
use crate::solver::{Solver, Strategy, autoplay};
use crate::wordlists::WordBank;
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Benchmark settings
pub struct BenchmarkConfig {
    pub game: GameConfig,
    pub games: usize,
    /// Game `i` draws its target and the solver's choices from `seed + i`
    pub seed: u64,
    /// Simulated time spent on each guess
    pub think_time: Duration,
    pub use_hints: bool,
    pub show_progress: bool,
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_games: usize,
    pub wins: usize,
    pub win_rate: f64,
    /// Average tries over won games
    pub average_tries: f64,
    /// Won games per number of tries
    pub distribution: FxHashMap<usize, usize>,
    /// Average score over won games
    pub average_score: f64,
    pub best_score: Option<u32>,
    pub duration: Duration,
    pub games_per_second: f64,
}

struct GameOutcome {
    won: bool,
    tries: usize,
    score: Option<u32>,
}

/// Run `config.games` independent games on the rayon pool
///
/// # Errors
///
/// Returns an error if the game configuration does not fit the word bank or
/// the progress bar template is malformed.
pub fn run_benchmark<S: Strategy + Sync>(
    config: &BenchmarkConfig,
    bank: &WordBank,
    solver: &Solver<S>,
) -> anyhow::Result<BenchmarkResult> {
    config.game.validate()?;

    let pb = if config.show_progress {
        let pb = ProgressBar::new(config.games as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")?
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();

    let outcomes = (0..config.games)
        .into_par_iter()
        .map(|i| -> Result<GameOutcome, GameError> {
            let clock = ManualClock::new();
            let mut rng = StdRng::seed_from_u64(config.seed.wrapping_add(i as u64));
            let engine_rng = StdRng::seed_from_u64(rng.random());
            let mut engine = GameEngine::new(config.game, bank, clock.clone(), engine_rng)?;

            autoplay(&mut engine, solver, &mut rng, config.use_hints, || {
                clock.advance(config.think_time);
            })?;

            pb.inc(1);
            Ok(GameOutcome {
                won: engine.status() == GameStatus::Won,
                tries: engine.current_try(),
                score: engine.compute_score().ok(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    pb.finish_with_message("done");

    Ok(summarize(&outcomes, start.elapsed()))
}

fn summarize(outcomes: &[GameOutcome], duration: Duration) -> BenchmarkResult {
    let total_games = outcomes.len();
    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();
    let mut wins = 0;
    let mut total_tries = 0;
    let mut total_score = 0_u64;
    let mut best_score: Option<u32> = None;

    for outcome in outcomes.iter().filter(|o| o.won) {
        wins += 1;
        total_tries += outcome.tries;
        *distribution.entry(outcome.tries).or_insert(0) += 1;
        if let Some(score) = outcome.score {
            total_score += u64::from(score);
            best_score = best_score.max(Some(score));
        }
    }

    let ratio = |num: f64, den: usize| if den == 0 { 0.0 } else { num / den as f64 };

    BenchmarkResult {
        total_games,
        wins,
        win_rate: ratio(wins as f64 * 100.0, total_games),
        average_tries: ratio(total_tries as f64, wins),
        distribution,
        average_score: ratio(total_score as f64, wins),
        best_score,
        duration,
        games_per_second: total_games as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{FrequencyStrategy, StrategyType};

    fn config(games: usize) -> BenchmarkConfig {
        BenchmarkConfig {
            game: GameConfig::default(),
            games,
            seed: 1,
            think_time: Duration::from_secs(20),
            use_hints: false,
            show_progress: false,
        }
    }

    #[test]
    fn benchmark_runs() {
        let bank = WordBank::embedded().unwrap();
        let solver = Solver::new(FrequencyStrategy, bank.words());
        let result = run_benchmark(&config(20), &bank, &solver).unwrap();

        assert_eq!(result.total_games, 20);
        assert_eq!(result.wins, 20);
        assert!((result.win_rate - 100.0).abs() < f64::EPSILON);
        assert!(result.average_tries >= 1.0);
        assert!(result.average_tries <= 6.0);
        assert!(result.best_score.is_some());
    }

    #[test]
    fn distribution_sums_to_wins() {
        let bank = WordBank::embedded().unwrap();
        let solver = Solver::new(StrategyType::from_name("entropy"), bank.words());
        let result = run_benchmark(&config(15), &bank, &solver).unwrap();

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.wins);
        for &tries in result.distribution.keys() {
            assert!((1..=6).contains(&tries));
        }
    }

    #[test]
    fn same_seed_same_results() {
        let bank = WordBank::embedded().unwrap();
        let solver = Solver::new(FrequencyStrategy, bank.words());

        let a = run_benchmark(&config(10), &bank, &solver).unwrap();
        let b = run_benchmark(&config(10), &bank, &solver).unwrap();

        assert_eq!(a.distribution, b.distribution);
        assert!((a.average_score - b.average_score).abs() < f64::EPSILON);
    }

    #[test]
    fn same_seed_same_results_with_random_strategy() {
        let bank = WordBank::embedded().unwrap();
        let solver = Solver::new(StrategyType::from_name("random"), bank.words());

        let runs: Vec<BenchmarkResult> = (0..3)
            .map(|_| run_benchmark(&config(40), &bank, &solver).unwrap())
            .collect();

        for run in &runs[1..] {
            assert_eq!(run.distribution, runs[0].distribution);
            assert_eq!(run.wins, runs[0].wins);
            assert_eq!(run.best_score, runs[0].best_score);
        }
    }

    #[test]
    fn think_time_lowers_score() {
        let bank = WordBank::embedded().unwrap();
        let solver = Solver::new(FrequencyStrategy, bank.words());

        let mut fast = config(10);
        fast.think_time = Duration::ZERO;
        let slow = config(10);

        let fast = run_benchmark(&fast, &bank, &solver).unwrap();
        let slow = run_benchmark(&slow, &bank, &solver).unwrap();
        assert!(fast.average_score > slow.average_score);
    }

    #[test]
    fn empty_benchmark() {
        let bank = WordBank::embedded().unwrap();
        let solver = Solver::new(FrequencyStrategy, bank.words());
        let result = run_benchmark(&config(0), &bank, &solver).unwrap();

        assert_eq!(result.total_games, 0);
        assert_eq!(result.wins, 0);
        assert!(result.win_rate.abs() < f64::EPSILON);
    }

    #[test]
    fn mismatched_length_fails() {
        let bank = WordBank::new(["apple", "grape"], 5).unwrap();
        let solver = Solver::new(FrequencyStrategy, bank.words());
        assert!(run_benchmark(&config(3), &bank, &solver).is_err());
    }
}
