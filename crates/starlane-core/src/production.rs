//! Contracts between the turn driver and its collaborators.
//!
//! The driver owns the galaxy state and the per-species call protocol; the
//! rule engine and the intercept resolver plug in behind the traits defined
//! here. The context structs hand each collaborator exactly the slices of
//! state it is allowed to touch.

use crate::colony::Colony;
use crate::dirty::RunDirty;
use crate::id::SpeciesId;
use crate::intercept::{Intercept, InterceptOverflow, InterceptQueue};
use crate::planet::Planet;
use crate::tech::TechVector;
use crate::transaction::Transaction;
use std::io::Write;
use thiserror::Error;

// ---------------------------------------------------------------------------
// OrderSource
// ---------------------------------------------------------------------------

/// A stream of order-script lines, already positioned inside the block the
/// engine should consume.
///
/// `None` is the only end signal: exhaustion and unreadable input both
/// terminate the stream. A collaborator never sees the difference, so a
/// truncated script degrades to an early end-of-orders instead of a crash.
pub trait OrderSource {
    fn next_line(&mut self) -> Option<String>;
}

// ---------------------------------------------------------------------------
// ProductionCtx / ProductionEngine
// ---------------------------------------------------------------------------

/// Everything a rule engine may read or mutate while processing one
/// species' production orders.
///
/// The technology vector arrives as a snapshot copy. The driver writes it
/// back to the species record only after the engine returns `Ok`, so an
/// engine failure can never publish a half-updated vector.
pub struct ProductionCtx<'a> {
    pub species_id: SpeciesId,
    pub species_name: &'a str,
    pub colonies: &'a mut [Colony],
    pub planets: &'a mut [Planet],
    pub tech: &'a mut TechVector,
    pub econ_units: &'a mut u32,
    pub intercepts: &'a mut InterceptQueue,
    pub dirty: &'a mut RunDirty,
    pub log: &'a mut dyn Write,
    /// Validation pass: full processing, but the operator is previewing.
    pub test_mode: bool,
    /// Chattier log output requested on the command line.
    pub verbose: bool,
}

/// The production rule engine: consumes one species' order block and
/// applies its economy rules through the context.
pub trait ProductionEngine {
    fn run(
        &mut self,
        ctx: &mut ProductionCtx<'_>,
        orders: &mut dyn OrderSource,
    ) -> Result<(), EngineError>;
}

// ---------------------------------------------------------------------------
// ResolveCtx / InterceptResolver
// ---------------------------------------------------------------------------

/// State handed to the resolver for each drained intercept.
pub struct ResolveCtx<'a> {
    pub species_id: SpeciesId,
    pub transactions: &'a mut Vec<Transaction>,
    pub log: &'a mut dyn Write,
}

/// Resolves one deferred intercept after the main production call has
/// returned for the species that scheduled it.
pub trait InterceptResolver {
    fn resolve(
        &mut self,
        intercept: &Intercept,
        ctx: &mut ResolveCtx<'_>,
    ) -> Result<(), EngineError>;
}

// ---------------------------------------------------------------------------
// EngineError
// ---------------------------------------------------------------------------

/// Failures a collaborator can surface to the driver. Player mistakes in
/// order scripts are not errors: engines log and skip those. These are the
/// faults that must stop the run for the species.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    InterceptOverflow(#[from] InterceptOverflow),
}
