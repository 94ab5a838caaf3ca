//! Domino tiles and the double-12 set.
//!
//! A [`Tile`] is an unordered pair of pip values in `0..=12`. Equality ignores
//! orientation, so `[3|5]` and `[5|3]` are the same tile; orientation only
//! matters once a tile is laid on a train, where the left pip faces the
//! train's open end.

use serde::{Deserialize, Serialize};

use super::config::{DOUBLE_BLANK_SCORE, MAX_PIP, SET_SIZE};

/// A single domino tile.
///
/// ```
/// use neon_train::core::Tile;
///
/// let tile = Tile::new(3, 5);
/// assert_eq!(tile, tile.flip());
/// assert_eq!(tile.total(), 8);
/// assert_eq!(Tile::new(0, 0).score(), 50);
/// ```
#[derive(Clone, Copy, Debug, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub left: u8,
    pub right: u8,
}

impl Tile {
    /// Create a tile. Panics if either pip exceeds [`MAX_PIP`].
    #[must_use]
    pub fn new(left: u8, right: u8) -> Self {
        assert!(
            left <= MAX_PIP && right <= MAX_PIP,
            "Pip values must be in 0..={MAX_PIP}, got [{left}|{right}]"
        );
        Self { left, right }
    }

    /// The same tile with its pips swapped.
    #[must_use]
    pub const fn flip(self) -> Self {
        Self {
            left: self.right,
            right: self.left,
        }
    }

    #[must_use]
    pub const fn total(self) -> u32 {
        self.left as u32 + self.right as u32
    }

    #[must_use]
    pub const fn is_double(self) -> bool {
        self.left == self.right
    }

    #[must_use]
    pub const fn is_double_blank(self) -> bool {
        self.left == 0 && self.right == 0
    }

    /// Does either pip equal `value`?
    #[must_use]
    pub const fn has(self, value: u8) -> bool {
        self.left == value || self.right == value
    }

    /// Penalty this tile costs when left in hand at round end.
    ///
    /// The double-blank is worth [`DOUBLE_BLANK_SCORE`]; every other tile is
    /// worth its pip total.
    #[must_use]
    pub const fn score(self) -> u32 {
        if self.is_double_blank() {
            DOUBLE_BLANK_SCORE
        } else {
            self.total()
        }
    }

    /// Orient this tile so its left pip faces `open_end`.
    ///
    /// Returns `None` if neither pip matches.
    #[must_use]
    pub const fn oriented_to(self, open_end: u8) -> Option<Self> {
        if self.left == open_end {
            Some(self)
        } else if self.right == open_end {
            Some(self.flip())
        } else {
            None
        }
    }

    /// Orientation-independent key, low pip first.
    #[must_use]
    pub fn canonical(self) -> (u8, u8) {
        (self.left.min(self.right), self.left.max(self.right))
    }
}

impl PartialEq for Tile {
    fn eq(&self, other: &Self) -> bool {
        self.canonical() == other.canonical()
    }
}

impl std::hash::Hash for Tile {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.canonical().hash(state);
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}|{}]", self.left, self.right)
    }
}

/// Build the complete, unshuffled double-12 set: one tile per unordered pair.
#[must_use]
pub fn double_twelve_set() -> Vec<Tile> {
    let mut tiles = Vec::with_capacity(SET_SIZE);
    for low in 0..=MAX_PIP {
        for high in low..=MAX_PIP {
            tiles.push(Tile::new(low, high));
        }
    }
    tiles
}
