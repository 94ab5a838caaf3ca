//! Command rejections.
//!
//! Every rejection is local and recoverable: a command that returns an error
//! has not touched the table. The coordinator decides how to surface it.

use super::seat::SeatId;
use super::tile::Tile;
use super::train::TrainId;
use crate::powerups::PowerUp;

/// Why a tile could not be placed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayViolation {
    /// The train is not in the acting seat's playable set.
    TrainNotPlayable(TrainId),
    /// Neither pip matches the train's open end.
    NoMatch { tile: Tile, open_end: u8 },
    /// The acting seat does not hold the tile.
    NotInHand(Tile),
}

/// Why the action is out of turn or out of phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnViolation {
    NotYourTurn { seat: SeatId, current: SeatId },
    /// The round has already ended.
    RoundOver,
    /// The round has not ended yet.
    RoundInProgress,
    /// Only one draw per turn.
    AlreadyDrawn,
    /// Passing requires a draw first unless the boneyard is empty.
    MustDrawFirst,
    /// Final standings need all thirteen rounds scored.
    GameNotFinished,
}

/// Ability-specific precondition failures.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ineligibility {
    /// Wild Shuffle needs at least as many boneyard tiles as hand tiles.
    InsufficientBoneyard { boneyard: usize, hand: usize },
    /// The target is already frozen.
    TargetFrozen(SeatId),
    /// Sabotage and Freeze must target another seat.
    SelfTarget,
    /// Sabotage and Freeze need a target.
    MissingTarget,
}

/// A rejected command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RulesError {
    IllegalPlay(PlayViolation),
    EmptyBoneyard,
    /// Used earlier this game, or another ability was used this turn.
    PowerupUnavailable(PowerUp),
    PowerupIneligible(PowerUp, Ineligibility),
    InvalidTurn(TurnViolation),
}

pub type RulesResult<T> = Result<T, RulesError>;

impl std::fmt::Display for PlayViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayViolation::TrainNotPlayable(train) => write!(f, "cannot play on the {train}"),
            PlayViolation::NoMatch { tile, open_end } => {
                write!(f, "{tile} does not match open end {open_end}")
            }
            PlayViolation::NotInHand(tile) => write!(f, "{tile} is not in hand"),
        }
    }
}

impl std::fmt::Display for TurnViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TurnViolation::NotYourTurn { seat, current } => {
                write!(f, "{seat} acted but it is {current}'s turn")
            }
            TurnViolation::RoundOver => f.write_str("the round is over"),
            TurnViolation::RoundInProgress => f.write_str("the round is still in progress"),
            TurnViolation::AlreadyDrawn => f.write_str("already drew this turn"),
            TurnViolation::MustDrawFirst => f.write_str("must draw before passing"),
            TurnViolation::GameNotFinished => f.write_str("not all rounds have been played"),
        }
    }
}

impl std::fmt::Display for Ineligibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Ineligibility::InsufficientBoneyard { boneyard, hand } => {
                write!(f, "boneyard has {boneyard} tiles but hand has {hand}")
            }
            Ineligibility::TargetFrozen(seat) => write!(f, "{seat} is already frozen"),
            Ineligibility::SelfTarget => f.write_str("cannot target yourself"),
            Ineligibility::MissingTarget => f.write_str("no target given"),
        }
    }
}

impl std::fmt::Display for RulesError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RulesError::IllegalPlay(v) => write!(f, "illegal play: {v}"),
            RulesError::EmptyBoneyard => f.write_str("boneyard is empty"),
            RulesError::PowerupUnavailable(p) => write!(f, "{p} is not available"),
            RulesError::PowerupIneligible(p, why) => write!(f, "cannot use {p}: {why}"),
            RulesError::InvalidTurn(v) => write!(f, "invalid turn: {v}"),
        }
    }
}

impl std::error::Error for RulesError {}

impl From<PlayViolation> for RulesError {
    fn from(v: PlayViolation) -> Self {
        RulesError::IllegalPlay(v)
    }
}

impl From<TurnViolation> for RulesError {
    fn from(v: TurnViolation) -> Self {
        RulesError::InvalidTurn(v)
    }
}
