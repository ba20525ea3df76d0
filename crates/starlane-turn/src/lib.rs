//! Starlane Turn -- the per-turn production run: selection, the
//! validate/commit protocol, the per-species driver, and the persistence
//! gate.
//!
//! A run is at most two passes over the same species selection. The
//! validate pass processes everything with output on the console and
//! touches nothing durable; after an explicit operator confirmation the
//! in-memory galaxy is thrown away, reloaded from disk, and the commit
//! pass repeats the identical work with output appended to per-species
//! log files. Only a completed commit pass reaches the persistence gate.
//!
//! # Key Types
//!
//! - [`selector::Selection`] -- which species to process and under which
//!   flags; carries the process-all marker that softens missing-data
//!   errors into skips.
//! - [`controller::TurnController`] -- the VALIDATE / ABORT_GATE / COMMIT /
//!   DONE state machine.
//! - [`driver::run_species`] -- one species' production call: reset,
//!   snapshot, engine, restore, drain intercepts, mark modified.
//! - [`turnlog::TurnLog`] -- console or append-file output target.
//! - [`error::TurnError`] -- the fatal-error taxonomy.

pub mod controller;
pub mod driver;
pub mod error;
pub mod selector;
pub mod turnlog;

pub use error::TurnError;
