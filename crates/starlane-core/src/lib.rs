//! Starlane Core -- the domain model for the turn-order tooling of a
//! persistent, file-driven multiplayer strategic simulation.
//!
//! This crate provides the records that a production turn operates on
//! (species, colonies, planets, transactions), the six-dimension technology
//! vector, the deferred-intercept queue, run-wide dirty tracking for the
//! persistence decision, and the collaborator seams the turn driver calls
//! through ([`production::ProductionEngine`], [`production::InterceptResolver`]).
//!
//! # Key Types
//!
//! - [`species::Species`] -- one player's complete record: tech vector,
//!   economic-unit balance, ordered colony list, modified flag.
//! - [`colony::Colony`] -- a species' settlement on a planet, carrying the
//!   per-turn transient accumulators and order-deduplication flags.
//! - [`tech::TechVector`] -- six `u8` levels, snapshotted around every
//!   production call.
//! - [`intercept::InterceptQueue`] -- bounded FIFO of deferred effects,
//!   drained in enqueue order after the main production call.
//! - [`dirty::RunDirty`] -- run-wide dirty tracker consulted once by the
//!   persistence gate.
//! - [`production`] -- the contracts between the turn driver and the
//!   external production rule engine / intercept resolver.

pub mod colony;
pub mod dirty;
pub mod galaxy;
pub mod id;
pub mod intercept;
pub mod planet;
pub mod production;
pub mod species;
pub mod tech;
pub mod transaction;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
