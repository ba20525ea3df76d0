//! Species records: one per player in the galaxy.

use crate::colony::Colony;
use crate::id::{PlanetIndex, SpeciesId};
use crate::tech::TechVector;
use serde::{Deserialize, Serialize};

/// One player's complete record.
///
/// The `modified` flag is transient run state, not part of the durable
/// snapshot: it starts `false` on every load and is raised by the turn
/// driver once a species has actually been put through production.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Species {
    /// The species' 1-based number.
    pub id: SpeciesId,

    /// Display name, unique across the galaxy.
    pub name: String,

    /// Current technology levels.
    pub tech: TechVector,

    /// Banked economic units.
    pub econ_units: u32,

    /// The planet record of the species' homeworld.
    pub home_planet: PlanetIndex,

    /// Colonies in their canonical order. The order is load-bearing:
    /// production credits and build orders resolve against it.
    pub colonies: Vec<Colony>,

    /// Raised when this species' record diverges from the loaded snapshot.
    #[serde(skip)]
    pub modified: bool,
}

impl Species {
    pub fn new(id: SpeciesId, name: impl Into<String>, home_planet: PlanetIndex) -> Self {
        Self {
            id,
            name: name.into(),
            tech: TechVector::default(),
            econ_units: 0,
            home_planet,
            colonies: Vec::new(),
            modified: false,
        }
    }

    /// Find a colony by name, case-insensitively. Order scripts are typed
    /// by humans; nobody should lose a turn to a capitalization slip.
    pub fn find_colony(&self, name: &str) -> Option<usize> {
        self.colonies
            .iter()
            .position(|c| c.name.eq_ignore_ascii_case(name))
    }

    /// Reset every colony's per-turn transient accounting.
    pub fn reset_turn_state(&mut self) {
        for colony in &mut self.colonies {
            colony.reset_turn_state();
        }
    }
}
