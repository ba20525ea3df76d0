//! The fatal-error taxonomy for a production run.
//!
//! Everything here terminates the run. Player-level problems (a skipped
//! species, a malformed order) are handled locally and never become a
//! `TurnError`.

use starlane_core::id::SpeciesId;
use starlane_core::production::EngineError;
use starlane_store::StoreError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TurnError {
    #[error("invalid species number {number}: galaxy has {max} species")]
    InvalidSpecies { number: u16, max: u16 },

    #[error("species #{0} has no data")]
    MissingData(SpeciesId),

    #[error("species #{id}: cannot open order file {}: {source}", .path.display())]
    MissingOrders {
        id: SpeciesId,
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot open log file {}: {source}", .path.display())]
    LogOpen {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("species #{id} has {count} colonies, exceeding the internal bound of {max}")]
    ColonyBoundExceeded {
        id: SpeciesId,
        count: usize,
        max: usize,
    },

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
