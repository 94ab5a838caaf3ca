//! Actions a seat can take, and the history record of taken actions.
//!
//! A turn is a short sequence of actions: optionally one power-up, then
//! plays (more than one only after doubles), at most one draw, and finally a
//! pass if nothing could be played.

use serde::{Deserialize, Serialize};

use super::seat::SeatId;
use super::tile::Tile;
use super::train::TrainId;
use crate::powerups::PowerUp;

/// A tile placement: which tile onto which train.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub tile: Tile,
    pub train: TrainId,
}

impl Move {
    #[must_use]
    pub const fn new(tile: Tile, train: TrainId) -> Self {
        Self { tile, train }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} on the {}", self.tile, self.train)
    }
}

/// A completed action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Play(Move),
    /// Drew the given tile.
    Draw(Tile),
    /// Gave up the turn; the seat's train is now public.
    Pass,
    PowerUp {
        power: PowerUp,
        target: Option<SeatId>,
    },
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Play(mv) => write!(f, "played {mv}"),
            Action::Draw(_) => f.write_str("drew a tile"),
            Action::Pass => f.write_str("passed"),
            Action::PowerUp { power, target: Some(target) } => write!(f, "used {power} on {target}"),
            Action::PowerUp { power, target: None } => write!(f, "used {power}"),
        }
    }
}

/// A recorded action with metadata for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The seat that acted.
    pub seat: SeatId,

    pub action: Action,

    /// Zero-based round index.
    pub round: usize,

    /// Position within the game's history.
    pub sequence: u32,
}

impl ActionRecord {
    #[must_use]
    pub fn new(seat: SeatId, action: Action, round: usize, sequence: u32) -> Self {
        Self {
            seat,
            action,
            round,
            sequence,
        }
    }
}
