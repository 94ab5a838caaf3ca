//! # neon-train
//!
//! Rules engine for a four-seat, thirteen-round game of Mexican Train with a
//! double-twelve set, one-time power-ups and heuristic computer opponents.
//!
//! ## Design Principles
//!
//! 1. **Rules Are Pure**: placement, drawing, passing and scoring are plain
//!    functions over [`TableState`]. Turn ownership lives one layer up in
//!    [`Game`].
//!
//! 2. **Reject, Don't Mutate**: every command validates before it touches
//!    the table. A rejected command returns a [`RulesError`] and leaves the
//!    state exactly as it was.
//!
//! 3. **Seeded Randomness**: shuffles, name selection and AI choices draw
//!    from separate ChaCha streams derived from [`GameConfig::seed`], so a
//!    seed replays a whole game.
//!
//! ## Modules
//!
//! - `core`: tiles, seats, trains, table state, actions, RNG, configuration
//!   and errors
//! - `rules`: playable trains, placement, draw, pass, round end and scoring
//! - `powerups`: Wild Shuffle, Sabotage, Freeze and Oracle
//! - `ai`: move and power-up heuristics behind the [`SeatPolicy`] trait
//! - `game`: the [`Game`] driver and automated turns

pub mod core;
pub mod rules;
pub mod powerups;
pub mod ai;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, Difficulty, GameConfig, GameRng, Move, RulesError, RulesResult, SeatId, SeatMap,
    TableSnapshot, TableState, Tile, TrainId, ROUND_COUNT, SEAT_COUNT,
};

pub use crate::rules::{GameOutcome, RoundResult, Standing};

pub use crate::powerups::{PowerUp, PowerUpInventory};

pub use crate::ai::{HeuristicPolicy, PowerUpChoice, SeatPolicy};

pub use crate::game::{AiTurnReport, Game, GameSnapshot, PowerUpEffect, RoundAdvance, TurnOutcome};
