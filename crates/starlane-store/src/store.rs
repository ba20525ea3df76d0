//! The load/save surface over one game directory.

use crate::error::StoreError;
use crate::snapshot::{decode_snapshot, encode_snapshot};
use starlane_core::galaxy::Galaxy;
use starlane_core::id::SpeciesId;
use starlane_core::planet::Planet;
use starlane_core::species::Species;
use starlane_core::transaction::Transaction;
use std::fs;
use std::path::{Path, PathBuf};

const GALAXY_FILE: &str = "galaxy.dat";
const SPECIES_FILE: &str = "species.dat";
const PLANETS_FILE: &str = "planets.dat";
const TRANSACTIONS_FILE: &str = "transactions.dat";

/// Durable storage rooted at one game directory.
///
/// Species slots are `Option`: a galaxy declares its population size up
/// front, but a species can drop out mid-game and leave an empty slot.
/// Whether an empty slot is fatal or skippable is the caller's decision.
pub struct GalaxyStore {
    dir: PathBuf,
}

impl GalaxyStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    // -- Galaxy header ------------------------------------------------------

    pub fn load_galaxy(&self) -> Result<Galaxy, StoreError> {
        self.load(GALAXY_FILE)
    }

    pub fn save_galaxy(&self, galaxy: &Galaxy) -> Result<(), StoreError> {
        self.save(GALAXY_FILE, galaxy)
    }

    // -- Species ------------------------------------------------------------

    pub fn load_species(&self) -> Result<Vec<Option<Species>>, StoreError> {
        self.load(SPECIES_FILE)
    }

    pub fn save_species(&self, species: &[Option<Species>]) -> Result<(), StoreError> {
        self.save(SPECIES_FILE, &species)
    }

    // -- Planets ------------------------------------------------------------

    pub fn load_planets(&self) -> Result<Vec<Planet>, StoreError> {
        self.load(PLANETS_FILE)
    }

    pub fn save_planets(&self, planets: &[Planet]) -> Result<(), StoreError> {
        self.save(PLANETS_FILE, &planets)
    }

    // -- Transactions -------------------------------------------------------

    pub fn load_transactions(&self) -> Result<Vec<Transaction>, StoreError> {
        self.load(TRANSACTIONS_FILE)
    }

    pub fn save_transactions(&self, transactions: &[Transaction]) -> Result<(), StoreError> {
        self.save(TRANSACTIONS_FILE, &transactions)
    }

    // -- Per-species text files ---------------------------------------------

    /// Path of a species' order script: `sp<NN>.ord`, zero-padded.
    pub fn order_path(&self, id: SpeciesId) -> PathBuf {
        self.dir.join(format!("sp{:02}.ord", id.0))
    }

    /// Path of a species' turn log: `sp<NN>.log`, zero-padded.
    pub fn log_path(&self, id: SpeciesId) -> PathBuf {
        self.dir.join(format!("sp{:02}.log", id.0))
    }

    // -- Internals ----------------------------------------------------------

    fn load<T: serde::de::DeserializeOwned>(&self, file: &str) -> Result<T, StoreError> {
        let path = self.dir.join(file);
        let bytes = fs::read(&path)?;
        let payload = decode_snapshot(&bytes)?;
        log::debug!("loaded {} ({} bytes)", path.display(), bytes.len());
        Ok(payload)
    }

    fn save<T: serde::Serialize>(&self, file: &str, payload: &T) -> Result<(), StoreError> {
        let path = self.dir.join(file);
        let bytes = encode_snapshot(payload)?;
        fs::write(&path, &bytes)?;
        log::debug!("saved {} ({} bytes)", path.display(), bytes.len());
        Ok(())
    }
}
