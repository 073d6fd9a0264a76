//! Guess selection strategies
//!
//! Defines the Strategy trait and concrete implementations.

use crate::core::Word;
use rand::Rng;
use rustc_hash::FxHashMap;

/// A strategy for choosing the next guess
pub trait Strategy {
    /// Select a guess from the pool given the words still consistent with
    /// all feedback
    ///
    /// Returns `None` if there is nothing to choose from. Any randomness is
    /// drawn from `rng`, so a seeded `rng` gives a reproducible choice.
    fn select_guess<'a, R: Rng + ?Sized>(
        &self,
        guess_pool: &'a [Word],
        candidates: &[&'a Word],
        rng: &mut R,
    ) -> Option<&'a Word>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
pub enum StrategyType {
    /// Letter-frequency scoring over candidates (default)
    Frequency(FrequencyStrategy),
    /// Maximize expected information over the whole pool
    Entropy(EntropyStrategy),
    /// Random candidate
    Random(RandomStrategy),
}

impl Strategy for StrategyType {
    fn select_guess<'a, R: Rng + ?Sized>(
        &self,
        guess_pool: &'a [Word],
        candidates: &[&'a Word],
        rng: &mut R,
    ) -> Option<&'a Word> {
        match self {
            Self::Frequency(s) => s.select_guess(guess_pool, candidates, rng),
            Self::Entropy(s) => s.select_guess(guess_pool, candidates, rng),
            Self::Random(s) => s.select_guess(guess_pool, candidates, rng),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "frequency", "entropy", "random".
    /// Defaults to frequency if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "entropy" => Self::Entropy(EntropyStrategy),
            "random" => Self::Random(RandomStrategy),
            _ => Self::Frequency(FrequencyStrategy),
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Frequency(_) => "frequency",
            Self::Entropy(_) => "entropy",
            Self::Random(_) => "random",
        }
    }
}

/// Letter-frequency strategy
///
/// Scores each candidate by how common its distinct letters are among the
/// remaining candidates and plays the best one.
pub struct FrequencyStrategy;

impl FrequencyStrategy {
    fn letter_frequencies(candidates: &[&Word]) -> FxHashMap<u8, usize> {
        let mut freq = FxHashMap::default();
        for word in candidates {
            let mut letters = word.letters().to_vec();
            letters.sort_unstable();
            letters.dedup();
            for letter in letters {
                *freq.entry(letter).or_insert(0) += 1;
            }
        }
        freq
    }

    fn score(word: &Word, freq: &FxHashMap<u8, usize>) -> usize {
        let mut letters = word.letters().to_vec();
        letters.sort_unstable();
        letters.dedup();
        letters.iter().map(|l| freq.get(l).copied().unwrap_or(0)).sum()
    }
}

impl Strategy for FrequencyStrategy {
    fn select_guess<'a, R: Rng + ?Sized>(
        &self,
        _guess_pool: &'a [Word],
        candidates: &[&'a Word],
        _rng: &mut R,
    ) -> Option<&'a Word> {
        let freq = Self::letter_frequencies(candidates);

        // Earliest candidate wins ties
        candidates
            .iter()
            .rev()
            .max_by_key(|word| Self::score(word, &freq))
            .copied()
    }
}

/// Pure entropy maximization strategy
///
/// Plays a candidate outright once two or fewer remain.
pub struct EntropyStrategy;

impl Strategy for EntropyStrategy {
    fn select_guess<'a, R: Rng + ?Sized>(
        &self,
        guess_pool: &'a [Word],
        candidates: &[&'a Word],
        _rng: &mut R,
    ) -> Option<&'a Word> {
        if candidates.len() <= 2 {
            return candidates.first().copied();
        }

        super::entropy::select_best_guess(guess_pool, candidates).map(|(best, _)| best)
    }
}

/// Random strategy
///
/// Picks any remaining candidate.
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn select_guess<'a, R: Rng + ?Sized>(
        &self,
        _guess_pool: &'a [Word],
        candidates: &[&'a Word],
        rng: &mut R,
    ) -> Option<&'a Word> {
        use rand::prelude::IndexedRandom;

        candidates.choose(rng).copied()
    }
}
