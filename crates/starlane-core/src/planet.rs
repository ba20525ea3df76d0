//! Planet records shared by every species that settles them.

use serde::{Deserialize, Serialize};

/// One planet record in the galaxy planet set.
///
/// Planet records are the only galaxy-wide mutable state production
/// touches, which is why the persistence gate saves the planet file only
/// when a run actually changed one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Planet {
    /// Percentage multiplier applied to a colony's raw economic base.
    pub economic_efficiency: u8,

    /// Rises as a planet is mined out; feeds back into future yields.
    pub mining_difficulty: u16,
}

impl Planet {
    pub fn new(economic_efficiency: u8, mining_difficulty: u16) -> Self {
        Self {
            economic_efficiency,
            mining_difficulty,
        }
    }
}

impl Default for Planet {
    fn default() -> Self {
        Self {
            economic_efficiency: 100,
            mining_difficulty: 0,
        }
    }
}
