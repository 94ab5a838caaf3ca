//! Table constants and game configuration.
//!
//! The table itself is fixed: a double-12 set, four seats, fifteen-tile
//! hands and thirteen rounds whose engines count down from 12 to 0. What a
//! host may choose is collected in [`GameConfig`]:
//! - `difficulty`: how the three opponents pick moves
//! - `seed`: drives every shuffle and AI coin flip
//! - `ai_power_up_chance`: per-turn chance an opponent considers a power-up
//! - seat names for the human and the opponent pool

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Seats at the table. Seat 0 is the human.
pub const SEAT_COUNT: usize = 4;

/// Highest pip value in the set.
pub const MAX_PIP: u8 = 12;

/// Tiles in a double-12 set.
pub const SET_SIZE: usize = 91;

/// Tiles dealt to each seat at round start.
pub const HAND_SIZE: usize = 15;

/// Engine value for each round, in play order.
pub const ENGINE_SEQUENCE: [u8; 13] = [12, 11, 10, 9, 8, 7, 6, 5, 4, 3, 2, 1, 0];

/// Rounds in a full game.
pub const ROUND_COUNT: usize = ENGINE_SEQUENCE.len();

/// Penalty for holding the double-blank at round end.
pub const DOUBLE_BLANK_SCORE: u32 = 50;

/// Per-turn chance an opponent considers using a power-up.
pub const DEFAULT_AI_POWER_UP_CHANCE: f64 = 0.3;

/// Names opponents are drawn from.
pub const DEFAULT_OPPONENT_POOL: [&str; 10] = [
    "Jax", "Zane", "Meli", "Sandra", "Marc", "Seb", "Frank", "Hector", "Claude", "Olivia",
];

/// Opponent skill level.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    /// Uniform random legal move.
    Easy,
    /// Random pick among the three best-scored moves.
    #[default]
    Medium,
    /// Always the best-scored move.
    Hard,
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        f.write_str(name)
    }
}

/// Error returned when a difficulty name is not recognised.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseDifficultyError(pub String);

impl std::fmt::Display for ParseDifficultyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown difficulty '{}', expected easy, medium or hard", self.0)
    }
}

impl std::error::Error for ParseDifficultyError {}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(ParseDifficultyError(s.to_string())),
        }
    }
}

/// Complete game configuration.
///
/// ```
/// use neon_train::core::{Difficulty, GameConfig};
///
/// let config = GameConfig::new(Difficulty::Hard)
///     .with_seed(7)
///     .with_ai_power_up_chance(0.0);
/// assert_eq!(config.seed, 7);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameConfig {
    pub difficulty: Difficulty,

    /// Seed for all randomness in the game.
    pub seed: u64,

    /// Per-turn chance that a non-easy opponent considers an ability.
    /// Values outside `0.0..=1.0` are clamped when rolled.
    pub ai_power_up_chance: f64,

    /// Display name of seat 0.
    pub human_name: String,

    /// At least three distinct names.
    pub opponent_pool: Vec<String>,
}

impl GameConfig {
    /// Create a configuration with a fresh random seed.
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            seed: rand::random(),
            ai_power_up_chance: DEFAULT_AI_POWER_UP_CHANCE,
            human_name: "You".to_string(),
            opponent_pool: DEFAULT_OPPONENT_POOL.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_ai_power_up_chance(mut self, chance: f64) -> Self {
        assert!((0.0..=1.0).contains(&chance), "Power-up chance must be within 0.0..=1.0");
        self.ai_power_up_chance = chance;
        self
    }

    #[must_use]
    pub fn with_human_name(mut self, name: impl Into<String>) -> Self {
        self.human_name = name.into();
        self
    }

    #[must_use]
    pub fn with_opponent_pool<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        let pool: Vec<String> = names.into_iter().map(Into::into).collect();
        assert!(
            pool.len() >= SEAT_COUNT - 1,
            "Opponent pool needs at least {} names",
            SEAT_COUNT - 1
        );
        self.opponent_pool = pool;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(Difficulty::default())
    }
}
