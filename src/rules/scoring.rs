//! Round and game scoring.
//!
//! Scores are penalties: each tile left in hand costs its pip total, the
//! double-blank costs 50. Lower is better. Ties always go to the lowest seat
//! index.

use serde::{Deserialize, Serialize};

use crate::core::{SeatId, SeatMap, Tile};

/// Outcome of one scored round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    /// Zero-based round index.
    pub round: usize,
    pub engine: u8,
    pub scores: SeatMap<u32>,
    /// Lowest round score, first seat on ties.
    pub winner: SeatId,
    /// Running totals including this round.
    pub totals: SeatMap<u32>,
}

/// One row of the final ranking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub seat: SeatId,
    pub name: String,
    pub total: u32,
}

/// Final result of a thirteen-round game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOutcome {
    /// Ascending by total; ties keep seat order.
    pub standings: Vec<Standing>,
    pub winner: SeatId,
    /// Presentation hint only.
    pub human_won: bool,
}

/// Penalty for one hand.
#[must_use]
pub fn hand_score(hand: &[Tile]) -> u32 {
    hand.iter().map(|tile| tile.score()).sum()
}

/// Penalty for every seat's remaining hand.
#[must_use]
pub fn round_scores(hands: &SeatMap<Vec<Tile>>) -> SeatMap<u32> {
    hands.map(|_, hand| hand_score(hand))
}

/// Seat with the lowest score; the first such seat on ties.
#[must_use]
pub fn round_winner(scores: &SeatMap<u32>) -> SeatId {
    scores.min_seat_by_key(|score| *score)
}

/// Rank seats by ascending total, keeping seat order on ties.
#[must_use]
pub fn final_standings(totals: &SeatMap<u32>, names: &SeatMap<String>) -> GameOutcome {
    let mut standings: Vec<Standing> = totals
        .iter()
        .map(|(seat, total)| Standing {
            seat,
            name: names[seat].clone(),
            total: *total,
        })
        .collect();
    standings.sort_by_key(|s| s.total);

    let winner = standings[0].seat;
    GameOutcome {
        standings,
        winner,
        human_won: winner.is_human(),
    }
}
