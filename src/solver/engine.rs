//! Automatic player's candidate tracking

use super::strategy::Strategy;
use crate::core::{GuessResult, Word};
use crate::game::{GuessRecord, Hint};
use rand::Rng;

/// Automatic player
///
/// Keeps no state of its own: candidates are recomputed from the game
/// history on every call.
pub struct Solver<'a, S: Strategy> {
    strategy: S,
    words: &'a [Word],
}

impl<'a, S: Strategy> Solver<'a, S> {
    /// Create a new solver with the given strategy and word list
    ///
    /// # Parameters
    /// - `strategy`: The guess selection strategy to use
    /// - `words`: Every word that may be the target, also used as guess pool
    pub const fn new(strategy: S, words: &'a [Word]) -> Self {
        Self { strategy, words }
    }

    /// Get the next guess given previous guesses and revealed hints
    ///
    /// Returns `None` if no word is consistent with what has been seen.
    pub fn next_guess<R: Rng + ?Sized>(
        &self,
        history: &[GuessRecord],
        revealed: &[Hint],
        rng: &mut R,
    ) -> Option<&'a Word> {
        let candidates = self.candidates(history, revealed);

        match candidates.len() {
            0 => None,
            1 => Some(candidates[0]),
            _ => self.strategy.select_guess(self.words, &candidates, rng),
        }
    }

    /// Words consistent with every guess result and every hint
    pub fn candidates(&self, history: &[GuessRecord], revealed: &[Hint]) -> Vec<&'a Word> {
        self.words
            .iter()
            .filter(|&candidate| {
                history
                    .iter()
                    .all(|record| GuessResult::evaluate(&record.guess, candidate) == record.result)
                    && revealed.iter().all(|hint| {
                        hint.position < candidate.len()
                            && candidate.letter_at(hint.position) == hint.letter
                    })
            })
            .collect()
    }

    /// Count how many candidates remain
    pub fn count_candidates(&self, history: &[GuessRecord], revealed: &[Hint]) -> usize {
        self.candidates(history, revealed).len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::strategy::FrequencyStrategy;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn setup_words() -> Vec<Word> {
        ["garden", "golden", "silver", "planet", "market", "hanger"]
            .iter()
            .map(|w| Word::new(w, 6).unwrap())
            .collect()
    }

    fn record(guess: &str, target: &str) -> GuessRecord {
        let guess = Word::new(guess, 6).unwrap();
        let target = Word::new(target, 6).unwrap();
        let result = GuessResult::evaluate(&guess, &target);
        GuessRecord { guess, result }
    }

    #[test]
    fn no_history_keeps_everything() {
        let words = setup_words();
        let solver = Solver::new(FrequencyStrategy, &words);
        assert_eq!(solver.count_candidates(&[], &[]), words.len());
        assert!(solver.next_guess(&[], &[], &mut StdRng::seed_from_u64(0)).is_some());
    }

    #[test]
    fn history_filters_candidates() {
        let words = setup_words();
        let solver = Solver::new(FrequencyStrategy, &words);

        let history = vec![record("garden", "golden")];
        let candidates = solver.candidates(&history, &[]);

        assert!(candidates.iter().any(|w| w.text() == "GOLDEN"));
        assert!(!candidates.iter().any(|w| w.text() == "GARDEN"));
        assert!(candidates.len() < words.len());
    }

    #[test]
    fn target_always_survives() {
        let words = setup_words();
        let solver = Solver::new(FrequencyStrategy, &words);

        for target in &words {
            let history = vec![
                record("planet", target.text()),
                record("hanger", target.text()),
            ];
            let candidates = solver.candidates(&history, &[]);
            assert!(candidates.contains(&target));
        }
    }

    #[test]
    fn hints_filter_candidates() {
        let words = setup_words();
        let solver = Solver::new(FrequencyStrategy, &words);

        let revealed = [Hint {
            position: 0,
            letter: 'S',
        }];
        let candidates = solver.candidates(&[], &revealed);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].text(), "SILVER");
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            solver.next_guess(&[], &revealed, &mut rng).map(Word::text),
            Some("SILVER")
        );
    }

    #[test]
    fn inconsistent_history_leaves_nothing() {
        let words = setup_words();
        let solver = Solver::new(FrequencyStrategy, &words);

        // All correct for a word outside the list
        let history = vec![record("zzzzzz", "zzzzzz")];
        let mut rng = StdRng::seed_from_u64(0);
        assert!(solver.next_guess(&history, &[], &mut rng).is_none());
    }
}
