//! Statistics across the games of one session

use super::GameStatus;

/// Running totals kept by the front-ends between games
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SessionStats {
    pub games_played: usize,
    pub games_won: usize,
    pub current_streak: usize,
    pub best_streak: usize,
    pub best_score: Option<u32>,
    /// `try_distribution[n]` counts games won on try `n + 1`
    pub try_distribution: Vec<usize>,
}

impl SessionStats {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a finished game
    ///
    /// `tries` is the try the game ended on; `score` is only meaningful for
    /// a win. Games still in progress are ignored.
    pub fn record(&mut self, status: GameStatus, tries: usize, score: Option<u32>) {
        match status {
            GameStatus::InProgress => return,
            GameStatus::Won => {
                self.games_won += 1;
                self.current_streak += 1;
                self.best_streak = self.best_streak.max(self.current_streak);
                self.best_score = self.best_score.max(score);

                let slot = tries.saturating_sub(1);
                if self.try_distribution.len() <= slot {
                    self.try_distribution.resize(slot + 1, 0);
                }
                self.try_distribution[slot] += 1;
            }
            GameStatus::Lost => self.current_streak = 0,
        }
        self.games_played += 1;
    }

    /// Percentage of games won, 0 when nothing was played
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.games_won as f64 * 100.0 / self.games_played as f64
        }
    }
}
