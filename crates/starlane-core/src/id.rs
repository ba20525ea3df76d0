use serde::{Deserialize, Serialize};

/// Identifies a species by its 1-based number, as used in command-line
/// arguments and in order/log file names (`sp03.ord`, `sp03.log`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SpeciesId(pub u16);

impl SpeciesId {
    /// The 0-based index of this species in the galaxy species set.
    pub fn index(self) -> usize {
        (self.0 as usize).saturating_sub(1)
    }
}

impl std::fmt::Display for SpeciesId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Index of a planet record within the galaxy planet set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlanetIndex(pub u32);

impl PlanetIndex {
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}
