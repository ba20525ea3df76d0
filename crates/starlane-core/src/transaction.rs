//! Inter-species transaction log entries.
//!
//! Resolved intercepts post here; the log is appended to during a run and
//! persisted unconditionally with the species file.

use crate::id::SpeciesId;
use serde::{Deserialize, Serialize};

/// One entry in the galaxy transaction log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// The species the entry is posted against.
    pub species: SpeciesId,

    /// Economic units involved.
    pub amount: u32,

    /// Human-readable description carried into the next turn's reports.
    pub memo: String,
}

impl Transaction {
    pub fn new(species: SpeciesId, amount: u32, memo: impl Into<String>) -> Self {
        Self {
            species,
            amount,
            memo: memo.into(),
        }
    }
}
