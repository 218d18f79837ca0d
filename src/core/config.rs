//! Game configuration.
//!
//! All tunables are passed explicitly into the engine at construction.
//! There is no process-wide mutable state: a `GameConfig` is built once,
//! handed to the engine, and never touched again.

use serde::{Deserialize, Serialize};

/// Default number of times a player may decline a question without penalty.
pub const DEFAULT_MAX_SKIPS: u32 = 2;

/// Points awarded per difficulty level on a correct answer.
pub const DEFAULT_POINTS_PER_DIFFICULTY: u32 = 10;

/// Complete game configuration.
///
/// Built once at startup and handed to the [`TurnEngine`](crate::engine::TurnEngine).
///
/// ## Example
///
/// ```
/// use rust_trivia::core::GameConfig;
///
/// let config = GameConfig::new().with_max_skips(3);
/// assert_eq!(config.max_skips, 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Skip budget per player.
    pub max_skips: u32,

    /// Score multiplier: a correct answer is worth `difficulty * points_per_difficulty`.
    pub points_per_difficulty: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_skips: DEFAULT_MAX_SKIPS,
            points_per_difficulty: DEFAULT_POINTS_PER_DIFFICULTY,
        }
    }
}

impl GameConfig {
    /// Create a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the per-player skip budget.
    #[must_use]
    pub fn with_max_skips(mut self, max_skips: u32) -> Self {
        self.max_skips = max_skips;
        self
    }

    /// Set the per-difficulty score multiplier.
    #[must_use]
    pub fn with_points_per_difficulty(mut self, points: u32) -> Self {
        self.points_per_difficulty = points;
        self
    }

    /// Score for a correct answer at the given difficulty.
    #[must_use]
    pub fn score_for(&self, difficulty: u32) -> u32 {
        difficulty * self.points_per_difficulty
    }
}
