//! The galaxy header record.

use serde::{Deserialize, Serialize};

/// Galaxy-wide header: how many species exist and which turn is current.
///
/// Loaded once per run and never modified by production tooling; it bounds
/// species-number validation and stamps log output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Galaxy {
    /// Number of species in the galaxy. Species numbers run 1..=num_species.
    pub num_species: u16,

    /// Current turn number.
    pub turn_number: u32,
}

impl Galaxy {
    pub fn new(num_species: u16, turn_number: u32) -> Self {
        Self {
            num_species,
            turn_number,
        }
    }

    /// Whether a 1-based species number names an existing species.
    pub fn contains_species(&self, number: u16) -> bool {
        number >= 1 && number <= self.num_species
    }
}
