//! Table state for a single round.
//!
//! ## TableState
//!
//! Everything on the table while a round is in progress:
//! - Boneyard (draw pile, top = end of vec)
//! - Four hands
//! - Five trains and their visibility
//! - Frozen seats
//! - Per-seat power-up inventories (carried across rounds)
//! - Turn flags for the acting seat
//!
//! A fresh `TableState` is dealt at every round start. Only the power-up
//! inventories are carried over from the previous round.
//!
//! ## TableSnapshot
//!
//! A serializable, self-contained view for presentation layers. It carries
//! the boneyard size but never its order.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::config::{ENGINE_SEQUENCE, HAND_SIZE, SEAT_COUNT, SET_SIZE};
use super::rng::GameRng;
use super::seat::{SeatId, SeatMap};
use super::tile::{double_twelve_set, Tile};
use super::train::{Train, TrainId, Trains};
use crate::powerups::PowerUpInventory;

/// Flags describing the acting seat's progress through its turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnState {
    /// Seat whose turn it is.
    pub current: SeatId,
    /// Drew from the boneyard this turn.
    pub has_drawn: bool,
    /// The last tile placed was a double; the same seat plays again.
    pub must_play_after_double: bool,
    /// An ability was used this turn.
    pub power_up_used: bool,
}

impl TurnState {
    /// Flags for the start of `seat`'s turn.
    #[must_use]
    pub const fn start(seat: SeatId) -> Self {
        Self {
            current: seat,
            has_drawn: false,
            must_play_after_double: false,
            power_up_used: false,
        }
    }
}

/// Full table state for the current round.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TableState {
    pub(crate) round: usize,
    pub(crate) engine: u8,
    pub(crate) boneyard: Vec<Tile>,
    pub(crate) hands: SeatMap<Vec<Tile>>,
    pub(crate) trains: Trains,
    pub(crate) frozen: FxHashSet<SeatId>,
    pub(crate) power_ups: SeatMap<PowerUpInventory>,
    pub(crate) turn: TurnState,
}

impl TableState {
    /// Deal round `round`: shuffle a fresh set, give each seat
    /// [`HAND_SIZE`] tiles from the front and leave the rest as boneyard.
    ///
    /// Panics if `round` is past the last round.
    #[must_use]
    pub fn deal(round: usize, power_ups: SeatMap<PowerUpInventory>, rng: &mut GameRng) -> Self {
        let engine = ENGINE_SEQUENCE[round];

        let mut boneyard = double_twelve_set();
        rng.shuffle(&mut boneyard);

        let mut hands: SeatMap<Vec<Tile>> = SeatMap::with_default();
        for seat in SeatId::all() {
            hands[seat] = boneyard.drain(..HAND_SIZE).collect();
        }

        Self {
            round,
            engine,
            boneyard,
            hands,
            trains: Trains::new(),
            frozen: FxHashSet::default(),
            power_ups,
            turn: TurnState::start(SeatId::HUMAN),
        }
    }

    /// Zero-based round index.
    #[must_use]
    pub fn round(&self) -> usize {
        self.round
    }

    /// This round's engine value.
    #[must_use]
    pub fn engine(&self) -> u8 {
        self.engine
    }

    /// Draw pile; the next tile drawn is the last element.
    #[must_use]
    pub fn boneyard(&self) -> &[Tile] {
        &self.boneyard
    }

    #[must_use]
    pub fn hand(&self, seat: SeatId) -> &[Tile] {
        &self.hands[seat]
    }

    #[must_use]
    pub fn hands(&self) -> &SeatMap<Vec<Tile>> {
        &self.hands
    }

    #[must_use]
    pub fn trains(&self) -> &Trains {
        &self.trains
    }

    #[must_use]
    pub fn train(&self, id: TrainId) -> &Train {
        self.trains.get(id)
    }

    #[must_use]
    pub fn is_frozen(&self, seat: SeatId) -> bool {
        self.frozen.contains(&seat)
    }

    /// Frozen seats in seat order.
    #[must_use]
    pub fn frozen_seats(&self) -> SmallVec<[SeatId; SEAT_COUNT]> {
        SeatId::all().filter(|s| self.is_frozen(*s)).collect()
    }

    #[must_use]
    pub fn power_ups(&self, seat: SeatId) -> &PowerUpInventory {
        &self.power_ups[seat]
    }

    #[must_use]
    pub fn power_up_inventories(&self) -> &SeatMap<PowerUpInventory> {
        &self.power_ups
    }

    #[must_use]
    pub fn turn(&self) -> &TurnState {
        &self.turn
    }

    /// Hand a new turn to `seat`, clearing the per-turn flags.
    pub(crate) fn begin_turn(&mut self, seat: SeatId) {
        self.turn = TurnState::start(seat);
    }

    /// Check that each of the [`SET_SIZE`] tiles sits in exactly one place.
    ///
    /// A `false` result means a rules defect, never a player error.
    #[must_use]
    pub fn is_conserved(&self) -> bool {
        let mut seen = FxHashSet::default();
        let placed = self
            .boneyard
            .iter()
            .chain(self.hands.values().flatten())
            .chain(self.trains.iter().flat_map(|(_, train)| train.tiles().iter()));

        let mut count = 0;
        for tile in placed {
            count += 1;
            if !seen.insert(*tile) {
                return false;
            }
        }
        count == SET_SIZE
    }

    /// Serializable view of the table.
    #[must_use]
    pub fn snapshot(&self) -> TableSnapshot {
        let trains = self
            .trains
            .iter()
            .map(|(id, train)| TrainView {
                id,
                tiles: train.tiles().iter().copied().collect(),
                open_end: train.open_end(self.engine),
                public: self.trains.is_public(id),
            })
            .collect();

        TableSnapshot {
            round: self.round,
            engine: self.engine,
            boneyard_count: self.boneyard.len(),
            hands: self.hands.clone(),
            trains,
            frozen: self.frozen_seats().into_vec(),
            power_ups: self.power_ups.clone(),
            turn: self.turn,
        }
    }

    /// Build an arbitrary table for rule tests. Trains start empty.
    #[cfg(test)]
    pub(crate) fn from_parts(engine: u8, hands: [Vec<Tile>; SEAT_COUNT], boneyard: Vec<Tile>) -> Self {
        let hands = SeatMap::new(|seat| hands[seat.index()].clone());
        Self {
            round: ENGINE_SEQUENCE.iter().position(|e| *e == engine).unwrap_or(0),
            engine,
            boneyard,
            hands,
            trains: Trains::new(),
            frozen: FxHashSet::default(),
            power_ups: SeatMap::with_default(),
            turn: TurnState::start(SeatId::HUMAN),
        }
    }
}

/// One train as seen by the presentation layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainView {
    pub id: TrainId,
    pub tiles: Vec<Tile>,
    pub open_end: u8,
    pub public: bool,
}

/// Serializable table snapshot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TableSnapshot {
    pub round: usize,
    pub engine: u8,
    pub boneyard_count: usize,
    pub hands: SeatMap<Vec<Tile>>,
    /// Mexican first, then seats in order.
    pub trains: Vec<TrainView>,
    pub frozen: Vec<SeatId>,
    pub power_ups: SeatMap<PowerUpInventory>,
    pub turn: TurnState,
}
