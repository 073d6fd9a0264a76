//! Shannon entropy of feedback distributions
//!
//! Given a guess and the remaining candidates, computes the expected
//! information gained by playing it.

use crate::core::{GuessResult, Word};
use rayon::prelude::*;
use rustc_hash::FxHashMap;

/// Calculate Shannon entropy for a guess against candidates
///
/// Returns the expected information gain in bits.
///
/// # Formula
/// H(X) = -Σ p(x) * log₂(p(x))
///
/// where p(x) is the probability of observing feedback x.
///
/// # Examples
/// ```
/// use wordle_game::core::Word;
/// use wordle_game::solver::entropy::calculate_entropy;
///
/// let guess = Word::new("garden", 6).unwrap();
/// let candidates = vec![
///     Word::new("golden", 6).unwrap(),
///     Word::new("silver", 6).unwrap(),
/// ];
/// let candidate_refs: Vec<&Word> = candidates.iter().collect();
///
/// let entropy = calculate_entropy(&guess, &candidate_refs);
/// assert!((entropy - 1.0).abs() < 1e-9); // two distinct outcomes
/// ```
#[must_use]
pub fn calculate_entropy(guess: &Word, candidates: &[&Word]) -> f64 {
    if candidates.is_empty() {
        return 0.0;
    }

    shannon_entropy(&group_by_feedback(guess, candidates))
}

/// Group candidates by the feedback they produce with the guess
fn group_by_feedback(guess: &Word, candidates: &[&Word]) -> FxHashMap<GuessResult, usize> {
    let mut counts = FxHashMap::default();

    for &candidate in candidates {
        let result = GuessResult::evaluate(guess, candidate);
        *counts.entry(result).or_insert(0) += 1;
    }

    counts
}

/// Calculate Shannon entropy from an outcome distribution
///
/// - 0.0 for a certain outcome
/// - log₂(n) for n equally likely outcomes
#[must_use]
pub fn shannon_entropy<K, S>(counts: &std::collections::HashMap<K, usize, S>) -> f64
where
    S: std::hash::BuildHasher,
{
    let total = counts.values().sum::<usize>() as f64;

    if total == 0.0 {
        return 0.0;
    }

    counts
        .values()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}

/// Select the guess with the highest entropy
///
/// Ties go to a word that is still a candidate, then to the earliest word in
/// the pool, so the choice is deterministic.
#[must_use]
pub fn select_best_guess<'a>(
    guess_pool: &'a [Word],
    candidates: &[&Word],
) -> Option<(&'a Word, f64)> {
    guess_pool
        .par_iter()
        .enumerate()
        .map(|(index, guess)| {
            let entropy = calculate_entropy(guess, candidates);
            let is_candidate = candidates.contains(&guess);
            (index, guess, entropy, is_candidate)
        })
        .max_by(|a, b| {
            a.2.total_cmp(&b.2)
                .then(a.3.cmp(&b.3))
                .then(b.0.cmp(&a.0))
        })
        .map(|(_, guess, entropy, _)| (guess, entropy))
}
