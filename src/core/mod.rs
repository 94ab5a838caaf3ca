//! Core value types: tiles, seats, trains, table state, actions, RNG,
//! configuration and errors.
//!
//! Nothing in here decides whether a move is legal; that lives in `rules`.

pub mod tile;
pub mod seat;
pub mod train;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;
pub mod error;

pub use tile::{double_twelve_set, Tile};
pub use seat::{SeatId, SeatMap, SeatOutOfRange};
pub use train::{Train, TrainId, Trains};
pub use rng::GameRng;
pub use config::{
    Difficulty, GameConfig, ParseDifficultyError, DOUBLE_BLANK_SCORE, ENGINE_SEQUENCE, HAND_SIZE, MAX_PIP,
    ROUND_COUNT, SEAT_COUNT, SET_SIZE,
};
pub use action::{Action, ActionRecord, Move};
pub use state::{TableSnapshot, TableState, TrainView, TurnState};
pub use error::{Ineligibility, PlayViolation, RulesError, RulesResult, TurnViolation};
