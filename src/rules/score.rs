//! Score formula.
//!
//! `score = max(0, base - moves * move_penalty - elapsed * second_penalty)`

use serde::{Deserialize, Serialize};

/// Constants of the score formula.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoreRules {
    /// Score of a fresh round.
    pub base: u32,

    /// Deducted per completed pair-attempt.
    pub move_penalty: u32,

    /// Deducted per elapsed second.
    pub second_penalty: u32,
}

impl Default for ScoreRules {
    fn default() -> Self {
        Self {
            base: 1000,
            move_penalty: 5,
            second_penalty: 2,
        }
    }
}

impl ScoreRules {
    /// Score for the given moves and elapsed time, clamped at zero.
    ///
    /// ```
    /// use memory_match::rules::ScoreRules;
    ///
    /// let rules = ScoreRules::default();
    /// assert_eq!(rules.score(1, 3), 1000 - 5 - 6);
    /// assert_eq!(rules.score(500, 0), 0);
    /// ```
    #[must_use]
    pub fn score(&self, moves: u32, elapsed_seconds: u32) -> u32 {
        let penalty = u64::from(moves)
            .saturating_mul(u64::from(self.move_penalty))
            .saturating_add(u64::from(elapsed_seconds).saturating_mul(u64::from(self.second_penalty)));
        u64::from(self.base).saturating_sub(penalty) as u32
    }
}
