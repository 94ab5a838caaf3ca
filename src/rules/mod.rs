//! Rules of Mexican Train.
//!
//! - `engine`: which trains a seat may use, placement legality, play, draw,
//!   pass and end-of-round detection
//! - `scoring`: round penalties, round winner and final standings
//!
//! Both are pure functions over [`TableState`](crate::core::TableState) and
//! know nothing about whose turn it is.

pub mod engine;
pub mod scoring;

pub use engine::{
    can_play, draw, has_legal_move, is_round_over, legal_moves, make_train_public, open_end, pass, play,
    playable_trains, PlayableTrains,
};
pub use scoring::{final_standings, hand_score, round_scores, round_winner, GameOutcome, RoundResult, Standing};
