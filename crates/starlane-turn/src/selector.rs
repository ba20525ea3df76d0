//! Run-argument selection: which species, under which flags.

use crate::error::TurnError;
use starlane_core::galaxy::Galaxy;
use starlane_core::id::SpeciesId;

/// The three run-mode flags.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunFlags {
    /// Validate first, then commit after operator confirmation.
    pub two_pass: bool,
    /// Test mode, passed through to the rule engine.
    pub test_mode: bool,
    /// Verbose output, passed through to the rule engine.
    pub verbose: bool,
}

/// The validated species selection for one run.
///
/// `process_all` is more than a convenience marker: it softens the
/// missing-data and missing-orders conditions from fatal to
/// skip-with-notice, on the grounds that a sweep over the whole galaxy
/// should not die because one species sat the turn out.
#[derive(Debug, Clone)]
pub struct Selection {
    pub species: Vec<SpeciesId>,
    pub process_all: bool,
    pub flags: RunFlags,
}

impl Selection {
    /// Validate explicit species numbers against the galaxy, or select the
    /// entire population when none are given.
    pub fn from_args(
        flags: RunFlags,
        numbers: &[u16],
        galaxy: &Galaxy,
    ) -> Result<Self, TurnError> {
        if numbers.is_empty() {
            return Ok(Self {
                species: (1..=galaxy.num_species).map(SpeciesId).collect(),
                process_all: true,
                flags,
            });
        }

        let mut species = Vec::with_capacity(numbers.len());
        for &number in numbers {
            if !galaxy.contains_species(number) {
                return Err(TurnError::InvalidSpecies {
                    number,
                    max: galaxy.num_species,
                });
            }
            species.push(SpeciesId(number));
        }
        Ok(Self {
            species,
            process_all: false,
            flags,
        })
    }
}
