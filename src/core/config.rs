//! Round configuration types.
//!
//! - `GridSize`: side length of the square board (positive, even)
//! - `Difficulty`: named grid sizes offered to players
//! - `RoundConfig`: scoring and timing knobs for a session
//!
//! `RoundConfig` is serde-enabled so hosts can ship it as JSON.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::{Error, Result};
use crate::rules::ScoreRules;

/// Side length of a square board.
///
/// Always positive and even, so `N²` cards split into `N²/2` pairs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct GridSize(u8);

impl GridSize {
    /// 4×4 board, 8 pairs.
    pub const EASY: GridSize = GridSize(4);

    /// 6×6 board, 18 pairs.
    pub const HARD: GridSize = GridSize(6);

    /// Create a grid size, rejecting zero and odd values.
    ///
    /// ```
    /// use memory_match::core::GridSize;
    ///
    /// assert!(GridSize::new(4).is_some());
    /// assert!(GridSize::new(5).is_none());
    /// assert!(GridSize::new(0).is_none());
    /// ```
    #[must_use]
    pub const fn new(side: u8) -> Option<Self> {
        if side > 0 && side % 2 == 0 {
            Some(Self(side))
        } else {
            None
        }
    }

    /// Side length.
    #[must_use]
    pub const fn side(self) -> usize {
        self.0 as usize
    }

    /// Number of cards on the board (`N²`).
    #[must_use]
    pub const fn card_count(self) -> usize {
        self.side() * self.side()
    }

    /// Number of pairs on the board (`N²/2`).
    #[must_use]
    pub const fn pair_count(self) -> usize {
        self.card_count() / 2
    }
}

impl TryFrom<u8> for GridSize {
    type Error = Error;

    fn try_from(side: u8) -> Result<Self> {
        Self::new(side).ok_or(Error::InvalidGridSize(side))
    }
}

impl From<GridSize> for u8 {
    fn from(grid: GridSize) -> u8 {
        grid.0
    }
}

impl std::fmt::Display for GridSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.0, self.0)
    }
}

/// Player-facing difficulty levels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// 4×4 board.
    #[default]
    Easy,
    /// 6×6 board.
    Hard,
}

impl Difficulty {
    /// Parse a difficulty name. Anything other than `"hard"` is easy.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        if name.eq_ignore_ascii_case("hard") {
            Difficulty::Hard
        } else {
            Difficulty::Easy
        }
    }

    /// Lowercase name, as accepted by `from_name`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Hard => "hard",
        }
    }

    /// Board size for this difficulty.
    #[must_use]
    pub const fn grid_size(self) -> GridSize {
        match self {
            Difficulty::Easy => GridSize::EASY,
            Difficulty::Hard => GridSize::HARD,
        }
    }
}

/// Scoring and timing configuration for a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoundConfig {
    /// Score formula constants.
    pub score: ScoreRules,

    /// How long a mismatched pair stays face up.
    #[serde(with = "millis")]
    pub mismatch_delay: Duration,

    /// Interval between clock ticks (one elapsed second each).
    #[serde(with = "millis")]
    pub tick_interval: Duration,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            score: ScoreRules::default(),
            mismatch_delay: Duration::from_secs(1),
            tick_interval: Duration::from_secs(1),
        }
    }
}

impl RoundConfig {
    /// Parse a configuration from JSON. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set the score rules.
    #[must_use]
    pub fn with_score(mut self, score: ScoreRules) -> Self {
        self.score = score;
        self
    }

    /// Set the mismatch delay.
    #[must_use]
    pub fn with_mismatch_delay(mut self, delay: Duration) -> Self {
        self.mismatch_delay = delay;
        self
    }

    /// Set the tick interval.
    #[must_use]
    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval = interval;
        self
    }
}

mod millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(u64::try_from(value.as_millis()).unwrap_or(u64::MAX))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
