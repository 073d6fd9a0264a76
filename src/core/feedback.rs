//! Guess feedback calculation and representation
//!
//! Each position of a guess is classified as:
//! - `Absent`  (letter not in the target, or all its occurrences already used)
//! - `Present` (letter in the target, wrong position)
//! - `Correct` (letter in the correct position)

use super::Word;
use std::fmt;

/// Feedback for a single letter of a guess
///
/// Ordered `Absent < Present < Correct`, which is the priority used when
/// merging feedback across guesses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterFeedback {
    Absent,
    Present,
    Correct,
}

impl LetterFeedback {
    /// Single emoji square for this feedback
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

impl fmt::Display for LetterFeedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Correct => "correct",
            Self::Present => "present",
            Self::Absent => "absent",
        };
        f.write_str(name)
    }
}

/// Per-position feedback for one guess
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GuessResult {
    feedback: Vec<LetterFeedback>,
}

impl GuessResult {
    /// Evaluate `guess` against `target`
    ///
    /// Handles duplicate letters so that no occurrence in the target is
    /// credited twice.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches `Correct` and remove them from the pool
    /// 2. Second pass: mark `Present` while the pool still holds the letter
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{GuessResult, LetterFeedback::*, Word};
    ///
    /// let target = Word::new("apple", 5).unwrap();
    /// let guess = Word::new("pllea", 5).unwrap();
    /// let result = GuessResult::evaluate(&guess, &target);
    ///
    /// assert_eq!(result.feedback(), &[Present, Present, Absent, Present, Present]);
    /// assert_eq!(result.correct_count(), 0);
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, target: &Word) -> Self {
        debug_assert_eq!(guess.len(), target.len(), "guess and target lengths differ");

        let guess_letters = guess.letters();
        let target_letters = target.letters();
        let mut feedback = vec![LetterFeedback::Absent; guess_letters.len()];
        let mut remaining = target.letter_counts();

        // First pass: exact position matches
        for (i, (&g, &t)) in guess_letters.iter().zip(target_letters).enumerate() {
            if g == t {
                feedback[i] = LetterFeedback::Correct;
                if let Some(count) = remaining.get_mut(&g) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: right letter, wrong position
        for (i, &g) in guess_letters.iter().enumerate() {
            if feedback[i] == LetterFeedback::Correct {
                continue;
            }
            if let Some(count) = remaining.get_mut(&g)
                && *count > 0
            {
                feedback[i] = LetterFeedback::Present;
                *count -= 1;
            }
        }

        Self { feedback }
    }

    /// Feedback per position, in guess order
    #[inline]
    #[must_use]
    pub fn feedback(&self) -> &[LetterFeedback] {
        &self.feedback
    }

    /// Number of `Correct` positions
    #[must_use]
    pub fn correct_count(&self) -> usize {
        self.count(LetterFeedback::Correct)
    }

    /// Number of `Present` positions
    #[must_use]
    pub fn present_count(&self) -> usize {
        self.count(LetterFeedback::Present)
    }

    /// True when every position is `Correct`
    #[must_use]
    pub fn is_win(&self) -> bool {
        !self.feedback.is_empty() && self.correct_count() == self.feedback.len()
    }

    /// Render as a row of emoji squares
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.feedback.iter().map(|f| f.to_emoji()).collect()
    }

    fn count(&self, kind: LetterFeedback) -> usize {
        self.feedback.iter().filter(|&&f| f == kind).count()
    }
}

#[cfg(test)]
mod tests {
    use super::LetterFeedback::{Absent, Correct, Present};
    use super::*;

    fn eval(guess: &str, target: &str) -> GuessResult {
        let len = target.len();
        GuessResult::evaluate(
            &Word::new(guess, len).unwrap(),
            &Word::new(target, len).unwrap(),
        )
    }

    #[test]
    fn feedback_ordering_matches_priority() {
        assert!(Correct > Present);
        assert!(Present > Absent);
        assert_eq!(Absent.max(Correct), Correct);
    }

    #[test]
    fn evaluate_exact_match() {
        let result = eval("golden", "golden");
        assert_eq!(result.feedback(), &[Correct; 6]);
        assert_eq!(result.correct_count(), 6);
        assert!(result.is_win());
    }

    #[test]
    fn evaluate_all_absent() {
        let result = eval("abcdef", "ghijkl");
        assert_eq!(result.feedback(), &[Absent; 6]);
        assert_eq!(result.correct_count(), 0);
        assert_eq!(result.present_count(), 0);
        assert!(!result.is_win());
    }

    #[test]
    fn evaluate_duplicate_guess_letter_single_in_target() {
        // APPLE has one L; the second L of the guess gets nothing
        let result = eval("pllea", "apple");
        assert_eq!(
            result.feedback(),
            &[Present, Present, Absent, Present, Present]
        );
    }

    #[test]
    fn evaluate_correct_consumes_before_present() {
        // ROBOT vs FLOOR: the O at index 3 is exact, the one at index 1 is
        // credited from the remaining O
        let result = eval("robot", "floor");
        assert_eq!(result.feedback(), &[Present, Present, Absent, Correct, Absent]);
        assert_eq!(result.correct_count(), 1);
        assert_eq!(result.present_count(), 2);
    }

    #[test]
    fn evaluate_later_exact_match_wins_over_earlier_present() {
        // Target has a single E at the end; the guess's first E must not
        // steal it from the exact match
        let result = eval("eerie", "apple");
        assert_eq!(result.feedback(), &[Absent, Absent, Absent, Absent, Correct]);
    }

    #[test]
    fn evaluate_double_letters_in_both() {
        // COFFEE vs DEGREE: both guess Es are exact, the spare target E is unused
        let result = eval("coffee", "degree");
        assert_eq!(
            result.feedback(),
            &[Absent, Absent, Absent, Absent, Correct, Correct]
        );
    }

    #[test]
    fn evaluate_long_word_with_repeated_letter() {
        let target = "A".repeat(256);
        assert!(eval(&target, &target).is_win());

        let guess = format!("B{}", "A".repeat(255));
        let shifted = format!("{}B", "A".repeat(255));
        let result = eval(&guess, &shifted);
        assert_eq!(result.correct_count(), 254);
        assert_eq!(result.present_count(), 2);
    }

    #[test]
    fn to_emoji_row() {
        let result = eval("pllea", "apple");
        assert_eq!(result.to_emoji(), "🟨🟨⬜🟨🟨");
    }

    #[test]
    fn display_names() {
        assert_eq!(Correct.to_string(), "correct");
        assert_eq!(Present.to_string(), "present");
        assert_eq!(Absent.to_string(), "absent");
    }
}
