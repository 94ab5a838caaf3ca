//! Trains: the five lines of tiles on the table.
//!
//! There is one shared Mexican train plus one personal train per seat. A
//! personal train starts private (only its owner may extend it) and turns
//! public for good once its owner fails to play on a turn.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::config::SEAT_COUNT;
use super::seat::{SeatId, SeatMap};
use super::tile::Tile;

/// Identifies one of the five trains.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrainId {
    /// The shared train, always public.
    Mexican,
    /// A seat's personal train.
    Seat(SeatId),
}

impl TrainId {
    /// All five trains: Mexican first, then seats in order.
    pub fn all() -> impl Iterator<Item = TrainId> {
        std::iter::once(TrainId::Mexican).chain(SeatId::all().map(TrainId::Seat))
    }

    /// The owning seat, or `None` for the Mexican train.
    #[must_use]
    pub const fn owner(self) -> Option<SeatId> {
        match self {
            TrainId::Mexican => None,
            TrainId::Seat(seat) => Some(seat),
        }
    }
}

impl From<SeatId> for TrainId {
    fn from(seat: SeatId) -> Self {
        TrainId::Seat(seat)
    }
}

impl std::fmt::Display for TrainId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrainId::Mexican => f.write_str("Mexican train"),
            TrainId::Seat(seat) => write!(f, "{seat} train"),
        }
    }
}

/// An ordered line of oriented tiles.
///
/// Every tile's left pip equals the right pip of the tile before it (or the
/// round's engine value for the first tile).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Train {
    tiles: Vector<Tile>,
}

impl Train {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn tiles(&self) -> &Vector<Tile> {
        &self.tiles
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// The pip a new tile must match: the engine when empty, else the last
    /// tile's right pip.
    #[must_use]
    pub fn open_end(&self, engine: u8) -> u8 {
        self.tiles.back().map_or(engine, |tile| tile.right)
    }

    /// Append an already-oriented tile.
    pub(crate) fn push(&mut self, tile: Tile) {
        self.tiles.push_back(tile);
    }
}

/// The five trains together with personal-train visibility.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trains {
    mexican: Train,
    seats: SeatMap<Train>,
    /// Seats whose train is public, in the order they went public.
    public_order: SmallVec<[SeatId; SEAT_COUNT]>,
}

impl Trains {
    /// Five empty trains; every personal train private.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, id: TrainId) -> &Train {
        match id {
            TrainId::Mexican => &self.mexican,
            TrainId::Seat(seat) => &self.seats[seat],
        }
    }

    pub(crate) fn get_mut(&mut self, id: TrainId) -> &mut Train {
        match id {
            TrainId::Mexican => &mut self.mexican,
            TrainId::Seat(seat) => &mut self.seats[seat],
        }
    }

    /// Can seats other than the owner play here?
    #[must_use]
    pub fn is_public(&self, id: TrainId) -> bool {
        match id {
            TrainId::Mexican => true,
            TrainId::Seat(seat) => self.public_order.contains(&seat),
        }
    }

    /// Mark a seat's train public. Returns `true` if it was private before.
    pub(crate) fn make_public(&mut self, seat: SeatId) -> bool {
        if self.public_order.contains(&seat) {
            return false;
        }
        self.public_order.push(seat);
        true
    }

    /// Seats with public trains, in the order they went public.
    pub fn public_seats(&self) -> impl Iterator<Item = SeatId> + '_ {
        self.public_order.iter().copied()
    }

    /// Iterate over all five trains, Mexican first.
    pub fn iter(&self) -> impl Iterator<Item = (TrainId, &Train)> {
        TrainId::all().map(move |id| (id, self.get(id)))
    }

    /// Total tiles laid across all trains.
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.iter().map(|(_, train)| train.len()).sum()
    }
}
