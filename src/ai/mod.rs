//! Decision-making for computer-controlled seats.
//!
//! The policy only reads the table; applying its choices is the game
//! driver's job (see [`crate::game::Game::run_policy_turn`]).

pub mod policy;

pub use policy::{
    leader, power_up_target, score_move, scored_moves, HeuristicPolicy, PowerUpChoice, ScoredMove, SeatPolicy,
    AI_POWER_UPS,
};
