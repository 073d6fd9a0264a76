//! Score and timer arithmetic
//!
//! Pure functions so results are reproducible from their inputs alone.

/// Points before any penalty
pub const BASE_SCORE: i64 = 1000;
/// Deducted for every try after the first
pub const TRY_PENALTY: i64 = 100;
/// Deducted for every hint used
pub const HINT_PENALTY: i64 = 150;
/// Seconds over which the time bonus decays to zero, one point per second
pub const TIME_BONUS_SECONDS: i64 = 300;
/// Floor for any winning score
pub const MIN_SCORE: i64 = 100;

/// Score for a win on try `final_try` (1-based)
///
/// # Examples
/// ```
/// use wordle_game::game::score;
///
/// // Second try, one hint, 40 seconds
/// assert_eq!(score::calculate(2, 1, 40), 1000 - 100 - 150 + 260);
/// // Never below the floor
/// assert_eq!(score::calculate(9, 2, 3600), 100);
/// ```
#[must_use]
pub fn calculate(final_try: usize, hints_used: usize, elapsed_seconds: u64) -> u32 {
    let tries = i64::try_from(final_try.saturating_sub(1)).unwrap_or(i64::MAX / TRY_PENALTY);
    let hints = i64::try_from(hints_used).unwrap_or(i64::MAX / HINT_PENALTY);
    let elapsed = i64::try_from(elapsed_seconds).unwrap_or(i64::MAX);

    let try_penalty = tries.saturating_mul(TRY_PENALTY);
    let hint_penalty = hints.saturating_mul(HINT_PENALTY);
    let time_bonus = (TIME_BONUS_SECONDS - elapsed).max(0);

    let score = BASE_SCORE
        .saturating_sub(try_penalty)
        .saturating_sub(hint_penalty)
        .saturating_add(time_bonus)
        .max(MIN_SCORE);

    u32::try_from(score).unwrap_or(u32::MAX)
}

/// Format whole seconds as `MM:SS`
///
/// Minutes keep growing past 59.
///
/// # Examples
/// ```
/// use wordle_game::game::score::format_elapsed;
///
/// assert_eq!(format_elapsed(75), "01:15");
/// assert_eq!(format_elapsed(6000), "100:00");
/// ```
#[must_use]
pub fn format_elapsed(total_seconds: u64) -> String {
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{minutes:02}:{seconds:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perfect_game() {
        assert_eq!(calculate(1, 0, 0), 1300);
    }

    #[test]
    fn penalties_add_up() {
        // 1000 - 300 - 300 + 0
        assert_eq!(calculate(4, 2, 300), 400);
    }

    #[test]
    fn time_bonus_never_negative() {
        assert_eq!(calculate(1, 0, 299), 1001);
        assert_eq!(calculate(1, 0, 300), 1000);
        assert_eq!(calculate(1, 0, 10_000), 1000);
    }

    #[test]
    fn floor_applies() {
        assert_eq!(calculate(6, 2, 1000), 200);
        assert_eq!(calculate(20, 5, 1000), 100);
    }

    #[test]
    fn extreme_inputs_do_not_overflow() {
        assert_eq!(calculate(usize::MAX, usize::MAX, u64::MAX), 100);
    }

    #[test]
    fn format_pads_both_fields() {
        assert_eq!(format_elapsed(0), "00:00");
        assert_eq!(format_elapsed(9), "00:09");
        assert_eq!(format_elapsed(60), "01:00");
        assert_eq!(format_elapsed(3599), "59:59");
        assert_eq!(format_elapsed(3600), "60:00");
    }
}
