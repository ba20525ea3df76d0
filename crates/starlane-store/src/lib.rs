//! Starlane Store -- durable storage for galaxy state.
//!
//! Galaxy data lives in four binary files (`galaxy.dat`, `species.dat`,
//! `planets.dat`, `transactions.dat`), each a `bitcode`-encoded snapshot
//! with a versioned header validated before any payload is trusted.
//! Per-species order scripts and logs are plain text files named by the
//! species number (`sp03.ord`, `sp03.log`).
//!
//! # Key Types
//!
//! - [`store::GalaxyStore`] -- the load/save surface over one game
//!   directory.
//! - [`snapshot::SnapshotHeader`] -- magic + format version, checked on
//!   every load.
//! - [`error::StoreError`] -- everything that can go wrong on disk.

pub mod error;
pub mod snapshot;
pub mod store;

pub use error::StoreError;
pub use store::GalaxyStore;
