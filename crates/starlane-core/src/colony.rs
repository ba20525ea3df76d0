//! Colony records: a species' settlement on a planet.
//!
//! Colonies carry the per-turn transient accounting that the production
//! driver must reset before every pass: four build accumulators and the
//! per-kind "already ordered this turn" deduplication flags.

use crate::id::PlanetIndex;
use serde::{Deserialize, Serialize};

/// Upper bound on the number of colonies one species may carry through the
/// production tooling. Exceeding it is an internal error, never a
/// recoverable player mistake.
pub const MAX_COLONIES: usize = 1000;

// ---------------------------------------------------------------------------
// BuildKind
// ---------------------------------------------------------------------------

/// The two self-built unit kinds a BUILD order can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BuildKind {
    /// Infrastructure units (IUs).
    Infrastructure,
    /// Automation units (AUs).
    Automation,
}

impl BuildKind {
    /// The keyword used in order scripts and log output.
    pub fn keyword(self) -> &'static str {
        match self {
            BuildKind::Infrastructure => "IU",
            BuildKind::Automation => "AU",
        }
    }
}

// ---------------------------------------------------------------------------
// OrderedFlags
// ---------------------------------------------------------------------------

/// Per-kind "already ordered this pass" flags for one colony.
///
/// A planet never receives more than one order of a deduplicated kind
/// within a single pass; the second one is reported and skipped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderedFlags {
    pub production: bool,
    pub build_iu: bool,
    pub build_au: bool,
}

impl OrderedFlags {
    pub fn clear(&mut self) {
        *self = OrderedFlags::default();
    }

    /// Check-and-set the flag for a build kind. Returns `false` if the kind
    /// was already ordered this pass.
    pub fn try_mark_build(&mut self, kind: BuildKind) -> bool {
        let flag = match kind {
            BuildKind::Infrastructure => &mut self.build_iu,
            BuildKind::Automation => &mut self.build_au,
        };
        if *flag {
            false
        } else {
            *flag = true;
            true
        }
    }

    /// Check-and-set the production-order flag.
    pub fn try_mark_production(&mut self) -> bool {
        if self.production {
            false
        } else {
            self.production = true;
            true
        }
    }
}

// ---------------------------------------------------------------------------
// Colony
// ---------------------------------------------------------------------------

/// A species' named settlement on a planet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Colony {
    /// Display name, unique within the owning species.
    pub name: String,

    /// The planet record this colony sits on.
    pub planet: PlanetIndex,

    /// Mining base, in economic-output terms.
    pub mining_base: u32,

    /// Manufacturing base, in economic-output terms.
    pub manufacturing_base: u32,

    // -- Per-turn transient accounting, reset by the driver every pass --
    /// Infrastructure units built this turn.
    pub auto_iu: u32,

    /// Automation units built this turn.
    pub auto_au: u32,

    /// Infrastructure units still needed after this turn's builds.
    pub iu_needed: u32,

    /// Automation units still needed after this turn's builds.
    pub au_needed: u32,

    /// Order-deduplication flags for this pass.
    pub ordered: OrderedFlags,
}

impl Colony {
    pub fn new(name: impl Into<String>, planet: PlanetIndex) -> Self {
        Self {
            name: name.into(),
            planet,
            mining_base: 0,
            manufacturing_base: 0,
            auto_iu: 0,
            auto_au: 0,
            iu_needed: 0,
            au_needed: 0,
            ordered: OrderedFlags::default(),
        }
    }

    /// Reset the transient accounting to its pass-start state: all four
    /// accumulators zero, all deduplication flags clear.
    pub fn reset_turn_state(&mut self) {
        self.auto_iu = 0;
        self.auto_au = 0;
        self.iu_needed = 0;
        self.au_needed = 0;
        self.ordered.clear();
    }
}
