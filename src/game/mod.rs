//! Game driver: turn ownership, turn advancement, round flow and automated
//! seats.
//!
//! - `session`: [`Game`] and its commands
//! - `autoplay`: whole-turn execution for policy-driven seats

pub mod autoplay;
pub mod session;

pub use autoplay::AiTurnReport;
pub use session::{Game, GameSnapshot, PowerUpEffect, RoundAdvance, SkippedSeats, TurnOutcome};
