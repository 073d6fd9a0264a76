//! Game engine: state machine, hints, timer and score
//!
//! The engine exclusively owns one game. Callers mutate it only through
//! [`GameEngine::submit_guess`] and [`GameEngine::use_hint`] and observe it
//! through [`GameEngine::current_state`]. A new game means a new engine.

use super::clock::{Clock, SystemClock};
use super::{GameConfig, GameError, HintUnavailableReason, score};
use crate::core::{GuessResult, LetterFeedback, LetterStates, Word};
use crate::wordlists::WordBank;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Instant;

/// Progress of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    /// True for the terminal states
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// One completed try
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    pub guess: Word,
    pub result: GuessResult,
}

/// A letter revealed by a hint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hint {
    pub position: usize,
    pub letter: char,
}

/// Read-only view of a game at one point in time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub status: GameStatus,
    pub current_try: usize,
    pub max_tries: usize,
    pub word_length: usize,
    pub hints_used: usize,
    pub hints_remaining: usize,
    /// Correct letters in the most recent guess
    pub letters_found: usize,
    pub used_letters: LetterStates,
    pub history: Vec<GuessRecord>,
    pub revealed: Vec<Hint>,
    pub elapsed_seconds: u64,
}

impl GameSnapshot {
    /// Positions whose letter is pinned neither by a hint nor by a correct
    /// guess
    #[must_use]
    pub fn unknown_positions(&self) -> Vec<usize> {
        (0..self.word_length)
            .filter(|&pos| {
                !self.revealed.iter().any(|hint| hint.position == pos)
                    && !self.history.iter().any(|record| {
                        record.result.feedback().get(pos) == Some(&LetterFeedback::Correct)
                    })
            })
            .collect()
    }
}

#[derive(Debug)]
struct GameState {
    target: Word,
    current_try: usize,
    hints_used: usize,
    revealed: Vec<Hint>,
    used_letters: LetterStates,
    status: GameStatus,
    started_at: Instant,
    finished_at: Option<Instant>,
    history: Vec<GuessRecord>,
}

/// A single game
///
/// Generic over its time source and random source so tests can pin both.
///
/// # Examples
/// ```
/// use rand::{SeedableRng, rngs::StdRng};
/// use wordle_game::game::{GameConfig, GameEngine, GameStatus, ManualClock};
///
/// let mut engine = GameEngine::with_target(
///     GameConfig::default(),
///     "golden",
///     ManualClock::new(),
///     StdRng::seed_from_u64(1),
/// )
/// .unwrap();
///
/// let result = engine.submit_guess("garden").unwrap();
/// assert_eq!(result.correct_count(), 4);
///
/// engine.submit_guess("golden").unwrap();
/// assert_eq!(engine.status(), GameStatus::Won);
/// assert_eq!(engine.compute_score().unwrap(), 1000 - 100 + 300);
/// ```
#[derive(Debug)]
pub struct GameEngine<C: Clock = SystemClock, R: Rng = StdRng> {
    config: GameConfig,
    state: GameState,
    clock: C,
    rng: R,
}

/// Start a game with the system clock and an OS-seeded random source
///
/// # Errors
/// Returns `GameError::Configuration` if the config is invalid or does not
/// match the word bank.
pub fn new_game(config: GameConfig, bank: &WordBank) -> Result<GameEngine, GameError> {
    GameEngine::new(config, bank, SystemClock, StdRng::from_os_rng())
}

impl<C: Clock, R: Rng> GameEngine<C, R> {
    /// Start a game with a target drawn from `bank`
    ///
    /// # Errors
    /// Returns `GameError::Configuration` if the config is invalid or its
    /// word length differs from the bank's.
    pub fn new(config: GameConfig, bank: &WordBank, clock: C, mut rng: R) -> Result<Self, GameError> {
        config.validate()?;
        if bank.word_length() != config.word_length {
            return Err(GameError::config(format!(
                "word bank holds {}-letter words but the game expects {}",
                bank.word_length(),
                config.word_length
            )));
        }

        let target = bank.pick_random(&mut rng).clone();
        Ok(Self::start(config, target, clock, rng))
    }

    /// Start a game with a known target
    ///
    /// # Errors
    /// Returns `GameError::Configuration` if the config is invalid or the
    /// target is not a `word_length`-letter word.
    pub fn with_target(config: GameConfig, target: &str, clock: C, rng: R) -> Result<Self, GameError> {
        config.validate()?;
        let target = Word::new(target, config.word_length)
            .map_err(|e| GameError::config(format!("target word: {e}")))?;
        Ok(Self::start(config, target, clock, rng))
    }

    fn start(config: GameConfig, target: Word, clock: C, rng: R) -> Self {
        info!(
            "new game: {} tries, {} letters, {} hints",
            config.max_tries, config.word_length, config.max_hints
        );
        debug!("target word: {target}");

        let started_at = clock.now();
        Self {
            config,
            state: GameState {
                target,
                current_try: 1,
                hints_used: 0,
                revealed: Vec::new(),
                used_letters: LetterStates::new(),
                status: GameStatus::InProgress,
                started_at,
                finished_at: None,
                history: Vec::new(),
            },
            clock,
            rng,
        }
    }

    /// Evaluate a guess and advance the game
    ///
    /// The result is returned whichever transition the guess causes.
    ///
    /// # Errors
    /// - `GameError::GameOver` if the game already ended
    /// - `GameError::InvalidGuess` if the guess has the wrong length or
    ///   non-alphabetic characters
    ///
    /// Nothing changes on error.
    pub fn submit_guess(&mut self, raw: &str) -> Result<GuessResult, GameError> {
        if self.state.status.is_over() {
            return Err(GameError::GameOver);
        }

        let guess = Word::new(raw, self.config.word_length)?;
        let result = GuessResult::evaluate(&guess, &self.state.target);

        debug!(
            "try {}/{}: {guess} -> {}",
            self.state.current_try,
            self.config.max_tries,
            result.to_emoji()
        );

        self.state.used_letters.record(&guess, &result);
        self.state.history.push(GuessRecord {
            guess,
            result: result.clone(),
        });

        if result.is_win() {
            self.finish(GameStatus::Won);
        } else if self.state.current_try >= self.config.max_tries {
            self.finish(GameStatus::Lost);
        } else {
            self.state.current_try += 1;
        }

        Ok(result)
    }

    /// Reveal the target letter at one of the caller's open positions
    ///
    /// `open_positions` are the still-empty cells of the row being typed; the
    /// engine has no notion of partially typed rows. Duplicate indices count
    /// once and the position is chosen uniformly among the distinct ones.
    ///
    /// # Errors
    /// - `GameError::HintUnavailable` if the game is over or no hints remain
    /// - `GameError::NoOpenPosition` if `open_positions` is empty
    /// - `GameError::PositionOutOfRange` if an index is past the word end
    ///
    /// Nothing changes on error.
    pub fn use_hint(&mut self, open_positions: &[usize]) -> Result<Hint, GameError> {
        if self.state.status.is_over() {
            return Err(GameError::HintUnavailable(HintUnavailableReason::GameOver));
        }
        if self.state.hints_used >= self.config.max_hints {
            return Err(GameError::HintUnavailable(HintUnavailableReason::Exhausted));
        }

        let mut open = open_positions.to_vec();
        open.sort_unstable();
        open.dedup();

        if open.is_empty() {
            return Err(GameError::NoOpenPosition);
        }
        if let Some(&position) = open.iter().find(|&&p| p >= self.config.word_length) {
            return Err(GameError::PositionOutOfRange {
                position,
                word_length: self.config.word_length,
            });
        }

        let position = open[self.rng.random_range(0..open.len())];
        let hint = Hint {
            position,
            letter: self.state.target.letter_at(position),
        };

        self.state.hints_used += 1;
        self.state.revealed.push(hint);
        debug!(
            "hint {}/{}: position {} is {}",
            self.state.hints_used, self.config.max_hints, hint.position, hint.letter
        );

        Ok(hint)
    }

    /// Final score of a won game
    ///
    /// See [`score::calculate`] for the formula.
    ///
    /// # Errors
    /// Returns `GameError::NotWon` unless the game was won.
    pub fn compute_score(&self) -> Result<u32, GameError> {
        if self.state.status != GameStatus::Won {
            return Err(GameError::NotWon);
        }
        Ok(score::calculate(
            self.state.current_try,
            self.state.hints_used,
            self.elapsed_seconds(),
        ))
    }

    /// Whole seconds since the game started
    ///
    /// Stops counting once the game is over.
    #[must_use]
    pub fn elapsed_seconds(&self) -> u64 {
        let end = self.state.finished_at.unwrap_or_else(|| self.clock.now());
        end.saturating_duration_since(self.state.started_at).as_secs()
    }

    /// Elapsed time as `MM:SS`
    #[must_use]
    pub fn elapsed_time(&self) -> String {
        score::format_elapsed(self.elapsed_seconds())
    }

    /// Snapshot of everything a front-end may show
    #[must_use]
    pub fn current_state(&self) -> GameSnapshot {
        GameSnapshot {
            status: self.state.status,
            current_try: self.state.current_try,
            max_tries: self.config.max_tries,
            word_length: self.config.word_length,
            hints_used: self.state.hints_used,
            hints_remaining: self.hints_remaining(),
            letters_found: self
                .state
                .history
                .last()
                .map_or(0, |record| record.result.correct_count()),
            used_letters: self.state.used_letters.clone(),
            history: self.state.history.clone(),
            revealed: self.state.revealed.clone(),
            elapsed_seconds: self.elapsed_seconds(),
        }
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.state.status
    }

    #[inline]
    #[must_use]
    pub const fn current_try(&self) -> usize {
        self.state.current_try
    }

    #[must_use]
    pub const fn hints_remaining(&self) -> usize {
        self.config.max_hints.saturating_sub(self.state.hints_used)
    }

    /// The target, once the game is over
    #[must_use]
    pub fn revealed_target(&self) -> Option<&Word> {
        self.state.status.is_over().then_some(&self.state.target)
    }

    fn finish(&mut self, status: GameStatus) {
        self.state.status = status;
        self.state.finished_at = Some(self.clock.now());
        info!(
            "game {} on try {} with {} hint(s): {}",
            if status == GameStatus::Won { "won" } else { "lost" },
            self.state.current_try,
            self.state.hints_used,
            self.state.target
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterFeedback::{self, Absent, Correct, Present};
    use crate::game::ManualClock;
    use std::time::Duration;

    fn engine_with(config: GameConfig, target: &str) -> (GameEngine<ManualClock>, ManualClock) {
        let clock = ManualClock::new();
        let engine =
            GameEngine::with_target(config, target, clock.clone(), StdRng::seed_from_u64(42))
                .unwrap();
        (engine, clock)
    }

    fn engine(target: &str) -> (GameEngine<ManualClock>, ManualClock) {
        engine_with(GameConfig::default(), target)
    }

    fn five_letters() -> GameConfig {
        GameConfig::new(6, 5, 2).unwrap()
    }

    #[test]
    fn initial_state() {
        let (engine, _) = engine("golden");
        let state = engine.current_state();

        assert_eq!(state.status, GameStatus::InProgress);
        assert_eq!(state.current_try, 1);
        assert_eq!(state.hints_used, 0);
        assert_eq!(state.hints_remaining, 2);
        assert_eq!(state.letters_found, 0);
        assert!(state.history.is_empty());
        assert!(state.used_letters.is_empty());
        assert_eq!(state.elapsed_seconds, 0);
        assert!(engine.revealed_target().is_none());
    }

    #[test]
    fn new_draws_target_from_bank() {
        let bank = WordBank::embedded().unwrap();
        let engine = GameEngine::new(
            GameConfig::default(),
            &bank,
            ManualClock::new(),
            StdRng::seed_from_u64(3),
        )
        .unwrap();
        assert!(bank.contains(&engine.state.target));
    }

    #[test]
    fn same_seed_same_target() {
        let bank = WordBank::embedded().unwrap();
        let make = || {
            GameEngine::new(
                GameConfig::default(),
                &bank,
                ManualClock::new(),
                StdRng::seed_from_u64(99),
            )
            .unwrap()
        };
        assert_eq!(make().state.target, make().state.target);
    }

    #[test]
    fn new_rejects_bank_length_mismatch() {
        let bank = WordBank::new(["apple", "grape"], 5).unwrap();
        let result = GameEngine::new(
            GameConfig::default(),
            &bank,
            ManualClock::new(),
            StdRng::seed_from_u64(0),
        );
        assert!(matches!(result, Err(GameError::Configuration(_))));
    }

    #[test]
    fn new_rejects_invalid_config() {
        let bank = WordBank::embedded().unwrap();
        let config = GameConfig {
            max_tries: 0,
            ..GameConfig::default()
        };
        let result = GameEngine::new(config, &bank, ManualClock::new(), StdRng::seed_from_u64(0));
        assert!(matches!(result, Err(GameError::Configuration(_))));
    }

    #[test]
    fn with_target_rejects_bad_target() {
        let result = GameEngine::with_target(
            GameConfig::default(),
            "apple",
            ManualClock::new(),
            StdRng::seed_from_u64(0),
        );
        assert!(matches!(result, Err(GameError::Configuration(_))));
    }

    #[test]
    fn exact_match_wins() {
        let (mut engine, _) = engine("golden");
        let result = engine.submit_guess("GOLDEN").unwrap();

        assert_eq!(result.feedback(), &[Correct; 6]);
        assert_eq!(engine.status(), GameStatus::Won);
        assert_eq!(engine.current_try(), 1);
        assert_eq!(engine.revealed_target().map(Word::text), Some("GOLDEN"));
    }

    #[test]
    fn duplicate_letter_scenario() {
        let (mut engine, _) = engine_with(five_letters(), "apple");
        let result = engine.submit_guess("pllea").unwrap();

        assert_eq!(
            result.feedback(),
            &[Present, Present, Absent, Present, Present]
        );
        assert_eq!(engine.status(), GameStatus::InProgress);
        assert_eq!(engine.current_try(), 2);
    }

    #[test]
    fn miss_advances_try_and_records_history() {
        let (mut engine, _) = engine("golden");
        let result = engine.submit_guess("garden").unwrap();

        let state = engine.current_state();
        assert_eq!(state.current_try, 2);
        assert_eq!(state.letters_found, result.correct_count());
        assert_eq!(state.history.len(), 1);
        assert_eq!(state.history[0].guess.text(), "GARDEN");
        assert_eq!(state.history[0].result, result);
    }

    #[test]
    fn loses_after_max_tries_without_passing_bound() {
        let config = GameConfig::new(3, 6, 0).unwrap();
        let (mut engine, _) = engine_with(config, "golden");

        engine.submit_guess("silver").unwrap();
        engine.submit_guess("purple").unwrap();
        assert_eq!(engine.status(), GameStatus::InProgress);
        assert_eq!(engine.current_try(), 3);

        engine.submit_guess("orange").unwrap();
        assert_eq!(engine.status(), GameStatus::Lost);
        assert_eq!(engine.current_try(), 3);
        assert_eq!(engine.current_state().history.len(), 3);
        assert_eq!(engine.revealed_target().map(Word::text), Some("GOLDEN"));
    }

    #[test]
    fn win_on_last_try_is_a_win() {
        let config = GameConfig::new(2, 6, 0).unwrap();
        let (mut engine, _) = engine_with(config, "golden");

        engine.submit_guess("silver").unwrap();
        engine.submit_guess("golden").unwrap();
        assert_eq!(engine.status(), GameStatus::Won);
        assert_eq!(engine.current_try(), 2);
    }

    #[test]
    fn no_guesses_after_game_over() {
        let (mut engine, _) = engine("golden");
        engine.submit_guess("golden").unwrap();
        let before = engine.current_state();

        assert_eq!(engine.submit_guess("silver"), Err(GameError::GameOver));
        // Game over is reported before validation
        assert_eq!(engine.submit_guess("x"), Err(GameError::GameOver));
        assert_eq!(engine.current_state(), before);
    }

    #[test]
    fn wrong_length_guess_leaves_state_unchanged() {
        let (mut engine, _) = engine("golden");
        engine.submit_guess("silver").unwrap();
        let before = engine.current_state();

        let first = engine.submit_guess("apple");
        let second = engine.submit_guess("apple");

        let expected = Err(GameError::InvalidGuess(crate::core::WordError::InvalidLength {
            expected: 6,
            actual: 5,
        }));
        assert_eq!(first, expected);
        assert_eq!(second, expected);
        assert_eq!(engine.current_state(), before);
    }

    #[test]
    fn non_alphabetic_guess_rejected() {
        let (mut engine, _) = engine("golden");
        assert_eq!(
            engine.submit_guess("g0lden"),
            Err(GameError::InvalidGuess(
                crate::core::WordError::InvalidCharacters
            ))
        );
        assert_eq!(engine.current_try(), 1);
        assert!(engine.current_state().history.is_empty());
    }

    #[test]
    fn used_letters_keep_best_state() {
        let (mut engine, _) = engine_with(five_letters(), "apple");
        engine.submit_guess("bulls").unwrap();
        engine.submit_guess("llama").unwrap();

        let letters = engine.current_state().used_letters;
        assert_eq!(letters.get('L'), Some(LetterFeedback::Correct));
        assert_eq!(letters.get('A'), Some(LetterFeedback::Present));
        assert_eq!(letters.get('B'), Some(LetterFeedback::Absent));
    }

    #[test]
    fn hint_reveals_target_letter() {
        let (mut engine, _) = engine("golden");
        let hint = engine.use_hint(&[4]).unwrap();

        assert_eq!(hint, Hint { position: 4, letter: 'E' });
        let state = engine.current_state();
        assert_eq!(state.hints_used, 1);
        assert_eq!(state.hints_remaining, 1);
        assert_eq!(state.revealed, vec![hint]);
        assert!(state.history.is_empty());
        assert_eq!(state.current_try, 1);
    }

    #[test]
    fn hint_picks_only_open_positions() {
        let config = GameConfig::new(6, 6, 6).unwrap();
        let (mut engine, _) = engine_with(config, "golden");
        let mut open: Vec<usize> = (0..6).collect();

        for _ in 0..6 {
            let hint = engine.use_hint(&open).unwrap();
            assert!(open.contains(&hint.position));
            assert_eq!(hint.letter, "GOLDEN".as_bytes()[hint.position] as char);
            open.retain(|&p| p != hint.position);
        }

        assert!(open.is_empty());
        let mut positions: Vec<usize> = engine
            .current_state()
            .revealed
            .iter()
            .map(|h| h.position)
            .collect();
        positions.sort_unstable();
        assert_eq!(positions, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn hint_beyond_budget_fails_without_mutation() {
        let (mut engine, _) = engine("golden");
        engine.use_hint(&[0, 1, 2]).unwrap();
        engine.use_hint(&[3, 4, 5]).unwrap();

        for _ in 0..3 {
            assert_eq!(
                engine.use_hint(&[0]),
                Err(GameError::HintUnavailable(HintUnavailableReason::Exhausted))
            );
        }
        assert_eq!(engine.current_state().hints_used, 2);
    }

    #[test]
    fn hint_with_zero_budget() {
        let config = GameConfig::new(6, 6, 0).unwrap();
        let (mut engine, _) = engine_with(config, "golden");
        assert_eq!(
            engine.use_hint(&[0]),
            Err(GameError::HintUnavailable(HintUnavailableReason::Exhausted))
        );
    }

    #[test]
    fn hint_after_game_over() {
        let (mut engine, _) = engine("golden");
        engine.submit_guess("golden").unwrap();
        assert_eq!(
            engine.use_hint(&[0]),
            Err(GameError::HintUnavailable(HintUnavailableReason::GameOver))
        );
        assert_eq!(engine.current_state().hints_used, 0);
    }

    #[test]
    fn hint_needs_an_open_position() {
        let (mut engine, _) = engine("golden");
        assert_eq!(engine.use_hint(&[]), Err(GameError::NoOpenPosition));
        assert_eq!(engine.current_state().hints_used, 0);
    }

    #[test]
    fn hint_rejects_out_of_range_position() {
        let (mut engine, _) = engine("golden");
        assert_eq!(
            engine.use_hint(&[1, 6]),
            Err(GameError::PositionOutOfRange {
                position: 6,
                word_length: 6
            })
        );
        assert_eq!(engine.current_state().hints_used, 0);
    }

    #[test]
    fn hint_duplicate_positions_collapse() {
        let (mut engine, _) = engine("golden");
        let hint = engine.use_hint(&[2, 2, 2]).unwrap();
        assert_eq!(hint, Hint { position: 2, letter: 'L' });
    }

    #[test]
    fn score_requires_win() {
        let (mut engine, _) = engine("golden");
        assert_eq!(engine.compute_score(), Err(GameError::NotWon));

        let config = GameConfig::new(1, 6, 0).unwrap();
        let (mut lost, _) = engine_with(config, "golden");
        lost.submit_guess("silver").unwrap();
        assert_eq!(lost.status(), GameStatus::Lost);
        assert_eq!(lost.compute_score(), Err(GameError::NotWon));

        engine.submit_guess("golden").unwrap();
        assert!(engine.compute_score().is_ok());
    }

    #[test]
    fn score_uses_try_hints_and_time() {
        let (mut engine, clock) = engine("golden");
        engine.submit_guess("garden").unwrap();
        engine.use_hint(&[1, 2]).unwrap();
        clock.advance(Duration::from_secs(40));
        engine.submit_guess("golden").unwrap();

        // 1000 - 100 - 150 + 260
        assert_eq!(engine.compute_score(), Ok(1010));
    }

    #[test]
    fn identical_games_identical_scores() {
        let play = || {
            let (mut engine, clock) = engine("planet");
            clock.advance(Duration::from_secs(12));
            engine.submit_guess("garden").unwrap();
            engine.use_hint(&[0, 3, 5]).unwrap();
            clock.advance(Duration::from_secs(30));
            engine.submit_guess("planet").unwrap();
            engine.compute_score().unwrap()
        };
        assert_eq!(play(), play());
    }

    #[test]
    fn timer_runs_while_playing_and_stops_at_end() {
        let (mut engine, clock) = engine("golden");
        clock.advance(Duration::from_secs(75));
        assert_eq!(engine.elapsed_time(), "01:15");

        engine.submit_guess("golden").unwrap();
        clock.advance(Duration::from_secs(600));
        assert_eq!(engine.elapsed_seconds(), 75);
        assert_eq!(engine.elapsed_time(), "01:15");
    }

    #[test]
    fn elapsed_ignores_subsecond_remainder() {
        let (engine, clock) = engine("golden");
        clock.advance(Duration::from_millis(1999));
        assert_eq!(engine.elapsed_seconds(), 1);
    }

    #[test]
    fn status_is_over() {
        assert!(!GameStatus::InProgress.is_over());
        assert!(GameStatus::Won.is_over());
        assert!(GameStatus::Lost.is_over());
    }

    #[test]
    fn unknown_positions_skip_hints_and_correct_letters() {
        let (mut engine, _) = engine("golden");
        assert_eq!(engine.current_state().unknown_positions(), vec![0, 1, 2, 3, 4, 5]);

        // G, D, E, N correct
        engine.submit_guess("garden").unwrap();
        assert_eq!(engine.current_state().unknown_positions(), vec![1, 2]);

        engine.use_hint(&[1]).unwrap();
        assert_eq!(engine.current_state().unknown_positions(), vec![2]);
    }
}
