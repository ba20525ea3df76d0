//! Fixture builders shared by unit and integration tests.

use crate::colony::Colony;
use crate::galaxy::Galaxy;
use crate::id::{PlanetIndex, SpeciesId};
use crate::planet::Planet;
use crate::species::Species;
use crate::tech::TechVector;

/// A species with one homeworld colony sitting on planet record `planet`.
pub fn species_with_home(number: u16, name: &str, planet: u32) -> Species {
    let mut sp = Species::new(SpeciesId(number), name, PlanetIndex(planet));
    let mut home = Colony::new(format!("{name} Prime"), PlanetIndex(planet));
    home.mining_base = 50;
    home.manufacturing_base = 50;
    sp.colonies.push(home);
    sp.tech = TechVector::new([10, 10, 5, 5, 5, 5]);
    sp.econ_units = 100;
    sp
}

/// A small three-species galaxy with one planet record per species.
pub fn small_galaxy() -> (Galaxy, Vec<Option<Species>>, Vec<Planet>) {
    let galaxy = Galaxy::new(3, 7);
    let species = vec![
        Some(species_with_home(1, "Gorn", 0)),
        Some(species_with_home(2, "Tholian", 1)),
        Some(species_with_home(3, "Andorian", 2)),
    ];
    let planets = vec![Planet::default(), Planet::default(), Planet::default()];
    (galaxy, species, planets)
}
