//! The two-phase turn commit controller.
//!
//! A two-pass run walks VALIDATE -> ABORT_GATE -> COMMIT -> DONE; a
//! commit-only run starts at COMMIT. The controller owns the in-memory
//! galaxy for the duration of the run and guarantees the commit pass never
//! sees anything the validate pass touched: the whole mutable state is
//! dropped and reloaded from disk between the passes.

use crate::driver::run_species;
use crate::error::TurnError;
use crate::selector::Selection;
use crate::turnlog::{Pass, TurnLog};
use starlane_core::dirty::RunDirty;
use starlane_core::galaxy::Galaxy;
use starlane_core::id::SpeciesId;
use starlane_core::planet::Planet;
use starlane_core::production::{InterceptResolver, ProductionEngine};
use starlane_core::species::Species;
use starlane_core::transaction::Transaction;
use starlane_orders::reader::OrderReader;
use starlane_orders::scanner::{ScanOutcome, scan_production_block};
use starlane_store::GalaxyStore;
use std::fs::File;
use std::io::{self, BufReader, Write};

// ---------------------------------------------------------------------------
// OperatorGate
// ---------------------------------------------------------------------------

/// The interactive confirmation between the validate and commit passes.
pub trait OperatorGate {
    /// Blocks until the operator answers. `true` means proceed to commit.
    fn confirm(&mut self) -> io::Result<bool>;
}

// ---------------------------------------------------------------------------
// GalaxyState
// ---------------------------------------------------------------------------

/// The mutable galaxy for one pass: everything production may touch,
/// loaded together and discarded together.
pub struct GalaxyState {
    pub galaxy: Galaxy,
    pub species: Vec<Option<Species>>,
    pub planets: Vec<Planet>,
    pub transactions: Vec<Transaction>,
    pub dirty: RunDirty,
}

impl GalaxyState {
    pub fn load(store: &GalaxyStore) -> Result<Self, TurnError> {
        Ok(Self {
            galaxy: store.load_galaxy()?,
            species: store.load_species()?,
            planets: store.load_planets()?,
            transactions: store.load_transactions()?,
            dirty: RunDirty::new(),
        })
    }
}

// ---------------------------------------------------------------------------
// TurnController
// ---------------------------------------------------------------------------

/// What a completed run did.
#[derive(Debug)]
pub struct RunSummary {
    pub processed: Vec<SpeciesId>,
    pub skipped: Vec<SpeciesId>,
    /// `false` only when the operator aborted at the gate.
    pub committed: bool,
}

#[derive(Default)]
struct PassReport {
    processed: Vec<SpeciesId>,
    skipped: Vec<SpeciesId>,
}

/// Drives a full production run against one game directory.
pub struct TurnController<'a> {
    store: &'a GalaxyStore,
    engine: &'a mut dyn ProductionEngine,
    resolver: &'a mut dyn InterceptResolver,
    gate: &'a mut dyn OperatorGate,
}

impl<'a> TurnController<'a> {
    pub fn new(
        store: &'a GalaxyStore,
        engine: &'a mut dyn ProductionEngine,
        resolver: &'a mut dyn InterceptResolver,
        gate: &'a mut dyn OperatorGate,
    ) -> Self {
        Self {
            store,
            engine,
            resolver,
            gate,
        }
    }

    /// Execute the run: validate (if two-pass), gate, commit, persist.
    pub fn run(&mut self, selection: &Selection) -> Result<RunSummary, TurnError> {
        let mut state = GalaxyState::load(self.store)?;

        if selection.flags.two_pass {
            log::info!("starting validation pass");
            self.run_pass(&mut state, selection, Pass::Validate)?;

            if !self.gate.confirm()? {
                log::info!("run aborted by operator; nothing was written");
                return Ok(RunSummary {
                    processed: Vec::new(),
                    skipped: Vec::new(),
                    committed: false,
                });
            }

            // The commit pass must start from state equivalent to a fresh
            // load; whatever validate touched is discarded here.
            state = GalaxyState::load(self.store)?;
        }

        log::info!("starting commit pass");
        let report = self.run_pass(&mut state, selection, Pass::Commit)?;
        self.persist(&state)?;

        Ok(RunSummary {
            processed: report.processed,
            skipped: report.skipped,
            committed: true,
        })
    }

    fn run_pass(
        &mut self,
        state: &mut GalaxyState,
        selection: &Selection,
        pass: Pass,
    ) -> Result<PassReport, TurnError> {
        let mut report = PassReport::default();

        for &id in &selection.species {
            let Some(species) = state.species.get_mut(id.index()).and_then(Option::as_mut)
            else {
                if selection.process_all {
                    log::warn!("species #{id} has no data; skipping");
                    report.skipped.push(id);
                    continue;
                }
                return Err(TurnError::MissingData(id));
            };

            let order_path = self.store.order_path(id);
            let file = match File::open(&order_path) {
                Ok(file) => file,
                Err(source) => {
                    if selection.process_all {
                        log::warn!("no orders for species #{id}, SP {}; skipping", species.name);
                        report.skipped.push(id);
                        continue;
                    }
                    return Err(TurnError::MissingOrders {
                        id,
                        path: order_path,
                        source,
                    });
                }
            };

            let mut orders = OrderReader::new(BufReader::new(file));
            let script_name = order_path.display().to_string();
            if scan_production_block(&mut orders, &script_name) == ScanOutcome::NotFound {
                // Never fatal, even for an explicitly named species; the
                // commit pass stays quiet about it because validate
                // already told the operator.
                if pass == Pass::Validate {
                    log::info!(
                        "no production orders for species #{id}, SP {}",
                        species.name
                    );
                }
                report.skipped.push(id);
                continue;
            }

            let mut log = match pass {
                Pass::Validate => TurnLog::console(),
                Pass::Commit => TurnLog::append_file(&self.store.log_path(id))?,
            };
            log.write_banner(species.econ_units)?;

            run_species(
                species,
                &mut state.planets,
                &mut state.transactions,
                &mut state.dirty,
                &mut *self.engine,
                &mut *self.resolver,
                &mut orders,
                &mut log,
                selection.flags,
            )?;
            log.flush()?;
            report.processed.push(id);
        }

        Ok(report)
    }

    /// The persistence gate: species and transactions unconditionally,
    /// planets only if something actually changed one.
    fn persist(&self, state: &GalaxyState) -> Result<(), TurnError> {
        self.store.save_species(&state.species)?;
        self.store.save_transactions(&state.transactions)?;
        if state.dirty.planets_dirty() {
            log::info!("planet data modified; rewriting planet file");
            self.store.save_planets(&state.planets)?;
        }
        Ok(())
    }
}
