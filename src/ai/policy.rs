//! Opponent decision policies.
//!
//! Policies are trait-based so a coordinator can drive any seat, including
//! the human one in headless simulations:
//! - `choose_move`: which tile to place where, or `None` to fall back to
//!   draw/pass
//! - `choose_power_up`: whether to use an ability this turn, and on whom
//!
//! Both are pure with respect to the table; all randomness comes from the
//! caller's [`GameRng`].

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Difficulty, GameRng, Move, SeatId, TableState, TrainId};
use crate::powerups::PowerUp;
use crate::rules;

/// Abilities an opponent will consider. Oracle only reveals information,
/// which the heuristic has no use for.
pub const AI_POWER_UPS: [PowerUp; 3] = [PowerUp::Wild, PowerUp::Sabotage, PowerUp::Freeze];

/// Hand size above which Wild Shuffle becomes an emergency measure.
const WILD_HAND_THRESHOLD: usize = 10;

/// A leader at or below this many tiles is about to win the round.
const LEADER_DANGER_TILES: usize = 3;

/// Boneyard size below which the round counts as endgame.
const ENDGAME_BONEYARD: usize = 5;

/// Chance of an opportunistic ability in the endgame.
const ENDGAME_AGGRESSION: f64 = 0.4;

/// How many top-scored moves medium difficulty chooses between.
const MEDIUM_POOL: usize = 3;

/// An ability the policy wants to use.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PowerUpChoice {
    pub power: PowerUp,
    /// Set for Sabotage and Freeze.
    pub target: Option<SeatId>,
}

/// A legal move with its heuristic value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoredMove {
    pub mv: Move,
    pub score: u32,
}

/// Decision policy for one seat.
pub trait SeatPolicy: Send + Sync {
    /// Pick a placement, or `None` if the seat has no legal move.
    fn choose_move(&self, state: &TableState, seat: SeatId, rng: &mut GameRng) -> Option<Move>;

    /// Pick an ability to use this turn, or `None` to skip.
    fn choose_power_up(&self, state: &TableState, seat: SeatId, rng: &mut GameRng) -> Option<PowerUpChoice>;
}

/// Heuristic value of placing `mv` for `seat`.
///
/// Pip total, plus 20 for a double, 15 on the seat's own train, 10 on the
/// Mexican train and another 50 for the double-blank.
#[must_use]
pub fn score_move(mv: Move, seat: SeatId) -> u32 {
    let mut score = mv.tile.total();
    if mv.tile.is_double() {
        score += 20;
    }
    if mv.train == TrainId::Seat(seat) {
        score += 15;
    }
    if mv.train == TrainId::Mexican {
        score += 10;
    }
    if mv.tile.is_double_blank() {
        score += 50;
    }
    score
}

/// Every legal move for `seat` with its score, in enumeration order.
#[must_use]
pub fn scored_moves(state: &TableState, seat: SeatId) -> Vec<ScoredMove> {
    rules::legal_moves(state, seat)
        .into_iter()
        .map(|mv| ScoredMove {
            mv,
            score: score_move(mv, seat),
        })
        .collect()
}

/// Seat holding the fewest tiles; the lowest index on ties.
#[must_use]
pub fn leader(state: &TableState) -> SeatId {
    state.hands().min_seat_by_key(Vec::len)
}

/// Target for Sabotage or Freeze: the leader, or the next seat when the
/// actor is itself the leader.
#[must_use]
pub fn power_up_target(state: &TableState, actor: SeatId) -> SeatId {
    let leader = leader(state);
    if leader == actor {
        actor.next()
    } else {
        leader
    }
}

/// The built-in opponent, parameterised by difficulty.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HeuristicPolicy {
    pub difficulty: Difficulty,
}

impl HeuristicPolicy {
    #[must_use]
    pub const fn new(difficulty: Difficulty) -> Self {
        Self { difficulty }
    }

    fn pick_power_up(&self, state: &TableState, seat: SeatId, rng: &mut GameRng) -> Option<PowerUp> {
        let inventory = state.power_ups(seat);
        let available: SmallVec<[PowerUp; 3]> = AI_POWER_UPS
            .into_iter()
            .filter(|p| inventory.is_available(*p))
            .collect();
        if available.is_empty() {
            return None;
        }

        if self.difficulty == Difficulty::Easy {
            return rng.choose(&available).copied();
        }

        let hand = state.hand(seat).len();
        let boneyard = state.boneyard().len();
        let leader = leader(state);

        if inventory.wild && hand > WILD_HAND_THRESHOLD && boneyard > hand {
            Some(PowerUp::Wild)
        } else if state.hand(leader).len() <= LEADER_DANGER_TILES && leader != seat {
            if inventory.sabotage {
                Some(PowerUp::Sabotage)
            } else if inventory.freeze {
                Some(PowerUp::Freeze)
            } else {
                None
            }
        } else if boneyard < ENDGAME_BONEYARD && rng.gen_bool(ENDGAME_AGGRESSION) {
            rng.choose(&available).copied()
        } else {
            None
        }
    }
}

impl SeatPolicy for HeuristicPolicy {
    fn choose_move(&self, state: &TableState, seat: SeatId, rng: &mut GameRng) -> Option<Move> {
        let mut moves = scored_moves(state, seat);
        if moves.is_empty() {
            return None;
        }

        // Stable: equal scores keep enumeration order.
        moves.sort_by(|a, b| b.score.cmp(&a.score));
        log::trace!("{seat} candidates: {moves:?}");

        let pool = match self.difficulty {
            Difficulty::Easy => moves.len(),
            Difficulty::Medium => moves.len().min(MEDIUM_POOL),
            Difficulty::Hard => 1,
        };
        let index = rng.gen_range_usize(0..pool);
        Some(moves[index].mv)
    }

    fn choose_power_up(&self, state: &TableState, seat: SeatId, rng: &mut GameRng) -> Option<PowerUpChoice> {
        if state.turn().power_up_used {
            return None;
        }

        let power = self.pick_power_up(state, seat, rng)?;
        let target = power.needs_target().then(|| power_up_target(state, seat));
        Some(PowerUpChoice { power, target })
    }
}
