//! Seat identification and per-seat data storage.
//!
//! ## SeatId
//!
//! Type-safe seat index for the four seats at the table. Seat 0 is the
//! human-controlled seat; seats 1-3 are heuristic opponents.
//!
//! ## SeatMap
//!
//! Fixed four-entry per-seat storage backed by an array for O(1) access.
//! Supports iteration and indexing by `SeatId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::config::SEAT_COUNT;

/// Seat identifier, `0..4`.
///
/// Deserializes from a bare index and rejects anything out of range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct SeatId(u8);

/// Error returned when a raw index does not name a seat.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeatOutOfRange(pub u8);

impl std::fmt::Display for SeatOutOfRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "seat index must be below {SEAT_COUNT}, got {}", self.0)
    }
}

impl std::error::Error for SeatOutOfRange {}

impl TryFrom<u8> for SeatId {
    type Error = SeatOutOfRange;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        if (id as usize) < SEAT_COUNT {
            Ok(Self(id))
        } else {
            Err(SeatOutOfRange(id))
        }
    }
}

impl From<SeatId> for u8 {
    fn from(seat: SeatId) -> Self {
        seat.0
    }
}

impl SeatId {
    /// The human-controlled seat.
    pub const HUMAN: SeatId = SeatId(0);

    /// Create a new seat ID. Panics if `id` is not a valid seat.
    #[must_use]
    pub fn new(id: u8) -> Self {
        assert!((id as usize) < SEAT_COUNT, "Seat index must be below {SEAT_COUNT}, got {id}");
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The seat that acts after this one.
    ///
    /// ```
    /// use neon_train::core::SeatId;
    ///
    /// assert_eq!(SeatId::new(1).next(), SeatId::new(2));
    /// assert_eq!(SeatId::new(3).next(), SeatId::HUMAN);
    /// ```
    #[must_use]
    pub const fn next(self) -> Self {
        Self((self.0 + 1) % SEAT_COUNT as u8)
    }

    #[must_use]
    pub const fn is_human(self) -> bool {
        self.0 == 0
    }

    /// Iterate over all four seats in turn order.
    pub fn all() -> impl Iterator<Item = SeatId> {
        (0..SEAT_COUNT as u8).map(SeatId)
    }
}

impl std::fmt::Display for SeatId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Seat {}", self.0)
    }
}

/// Per-seat data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use neon_train::core::{SeatId, SeatMap};
///
/// let mut totals: SeatMap<u32> = SeatMap::with_value(0);
/// totals[SeatId::new(2)] += 17;
/// assert_eq!(totals[SeatId::new(2)], 17);
/// assert_eq!(totals.iter().count(), 4);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeatMap<T> {
    data: [T; SEAT_COUNT],
}

impl<T> SeatMap<T> {
    /// Create a new SeatMap with values from a factory function.
    pub fn new(factory: impl Fn(SeatId) -> T) -> Self {
        Self {
            data: std::array::from_fn(|i| factory(SeatId(i as u8))),
        }
    }

    /// Create a new SeatMap with all entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    #[must_use]
    pub fn get(&self, seat: SeatId) -> &T {
        &self.data[seat.index()]
    }

    pub fn get_mut(&mut self, seat: SeatId) -> &mut T {
        &mut self.data[seat.index()]
    }

    /// Iterate over (SeatId, &T) pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (SeatId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (SeatId(i as u8), v))
    }

    /// Iterate over (SeatId, &mut T) pairs in seat order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (SeatId, &mut T)> {
        self.data
            .iter_mut()
            .enumerate()
            .map(|(i, v)| (SeatId(i as u8), v))
    }

    /// Iterate over values in seat order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Build a new map by applying `f` to every entry.
    pub fn map<U>(&self, f: impl Fn(SeatId, &T) -> U) -> SeatMap<U> {
        SeatMap::new(|seat| f(seat, self.get(seat)))
    }

    /// First seat whose key is minimal; ties go to the lowest seat index.
    pub fn min_seat_by_key<K: Ord>(&self, key: impl Fn(&T) -> K) -> SeatId {
        let mut best = SeatId(0);
        let mut best_key = key(&self.data[0]);
        for (seat, value) in self.iter().skip(1) {
            let k = key(value);
            if k < best_key {
                best = seat;
                best_key = k;
            }
        }
        best
    }
}

impl<T: Default> Default for SeatMap<T> {
    fn default() -> Self {
        Self::with_default()
    }
}

impl<T> Index<SeatId> for SeatMap<T> {
    type Output = T;

    fn index(&self, seat: SeatId) -> &Self::Output {
        self.get(seat)
    }
}

impl<T> IndexMut<SeatId> for SeatMap<T> {
    fn index_mut(&mut self, seat: SeatId) -> &mut Self::Output {
        self.get_mut(seat)
    }
}
