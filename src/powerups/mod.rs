//! One-time-per-game special abilities.
//!
//! Every seat starts the game holding each of the four abilities once:
//! - **Wild Shuffle**: trade the whole hand for the same number of random
//!   boneyard tiles
//! - **Sabotage**: make another seat draw a tile
//! - **Freeze**: skip another seat's next turn
//! - **Oracle**: peek at the next boneyard tile
//!
//! Inventories survive round resets; a spent ability never comes back. A
//! seat may use at most one ability per turn.

mod effects;

pub use effects::{use_freeze, use_oracle, use_sabotage, use_wild};

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// The four abilities.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PowerUp {
    Wild,
    Sabotage,
    Freeze,
    Oracle,
}

impl PowerUp {
    pub const ALL: [PowerUp; 4] = [PowerUp::Wild, PowerUp::Sabotage, PowerUp::Freeze, PowerUp::Oracle];

    /// Does this ability act on another seat?
    #[must_use]
    pub const fn needs_target(self) -> bool {
        matches!(self, PowerUp::Sabotage | PowerUp::Freeze)
    }
}

impl std::fmt::Display for PowerUp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PowerUp::Wild => "Wild Shuffle",
            PowerUp::Sabotage => "Sabotage",
            PowerUp::Freeze => "Freeze",
            PowerUp::Oracle => "Oracle",
        };
        f.write_str(name)
    }
}

/// A seat's remaining abilities. `true` means still available.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PowerUpInventory {
    pub wild: bool,
    pub sabotage: bool,
    pub freeze: bool,
    pub oracle: bool,
}

impl PowerUpInventory {
    /// All four abilities available.
    #[must_use]
    pub const fn full() -> Self {
        Self {
            wild: true,
            sabotage: true,
            freeze: true,
            oracle: true,
        }
    }

    #[must_use]
    pub const fn is_available(&self, power: PowerUp) -> bool {
        match power {
            PowerUp::Wild => self.wild,
            PowerUp::Sabotage => self.sabotage,
            PowerUp::Freeze => self.freeze,
            PowerUp::Oracle => self.oracle,
        }
    }

    /// Available abilities in `PowerUp::ALL` order.
    #[must_use]
    pub fn available(&self) -> SmallVec<[PowerUp; 4]> {
        PowerUp::ALL.into_iter().filter(|p| self.is_available(*p)).collect()
    }

    /// Spend an ability. Returns `false` if it was already spent.
    pub(crate) fn consume(&mut self, power: PowerUp) -> bool {
        let slot = match power {
            PowerUp::Wild => &mut self.wild,
            PowerUp::Sabotage => &mut self.sabotage,
            PowerUp::Freeze => &mut self.freeze,
            PowerUp::Oracle => &mut self.oracle,
        };
        std::mem::replace(slot, false)
    }
}

impl Default for PowerUpInventory {
    fn default() -> Self {
        Self::full()
    }
}
