//! End-to-end production runs against a real game directory.
//!
//! Each test seeds a three-species galaxy on disk, writes order scripts,
//! drives a full run through the controller with the standard engine, and
//! inspects what actually landed on disk afterwards.

use starlane_core::id::SpeciesId;
use starlane_core::tech::TechField;
use starlane_core::test_utils::small_galaxy;
use starlane_orders::engine::{StandardEngine, StandardResolver};
use starlane_store::GalaxyStore;
use starlane_turn::TurnError;
use starlane_turn::controller::{OperatorGate, RunSummary, TurnController};
use starlane_turn::selector::{RunFlags, Selection};
use std::fs;
use std::io;
use std::path::Path;

struct ScriptedGate {
    proceed: bool,
}

impl OperatorGate for ScriptedGate {
    fn confirm(&mut self) -> io::Result<bool> {
        Ok(self.proceed)
    }
}

fn seed_game(dir: &Path) -> GalaxyStore {
    let store = GalaxyStore::new(dir);
    let (galaxy, species, planets) = small_galaxy();
    store.save_galaxy(&galaxy).unwrap();
    store.save_species(&species).unwrap();
    store.save_planets(&planets).unwrap();
    store.save_transactions(&[]).unwrap();
    store
}

fn run_production(
    store: &GalaxyStore,
    flags: RunFlags,
    numbers: &[u16],
    proceed: bool,
) -> Result<RunSummary, TurnError> {
    let galaxy = store.load_galaxy().unwrap();
    let selection = Selection::from_args(flags, numbers, &galaxy).unwrap();
    let mut engine = StandardEngine::new();
    let mut resolver = StandardResolver::new();
    let mut gate = ScriptedGate { proceed };
    let mut controller = TurnController::new(store, &mut engine, &mut resolver, &mut gate);
    controller.run(&selection)
}

fn two_pass() -> RunFlags {
    RunFlags {
        two_pass: true,
        ..RunFlags::default()
    }
}

const GORN_SCRIPT: &str = "START PRODUCTION\nPRODUCTION PL Gorn Prime\nZZZ\n";
const ANDORIAN_SCRIPT: &str = "START PRODUCTION\nPRODUCTION PL Andorian Prime\nZZZ\n";

#[test]
fn process_all_skips_the_species_without_orders() {
    let dir = tempfile::tempdir().unwrap();
    let store = seed_game(dir.path());
    fs::write(store.order_path(SpeciesId(1)), GORN_SCRIPT).unwrap();
    fs::write(store.order_path(SpeciesId(3)), ANDORIAN_SCRIPT).unwrap();

    let summary = run_production(&store, RunFlags::default(), &[], true).unwrap();

    assert!(summary.committed);
    assert_eq!(summary.processed, vec![SpeciesId(1), SpeciesId(3)]);
    assert_eq!(summary.skipped, vec![SpeciesId(2)]);

    let species = store.load_species().unwrap();
    assert_eq!(species[0].as_ref().unwrap().econ_units, 200);
    assert_eq!(species[1].as_ref().unwrap().econ_units, 100);
    assert_eq!(species[2].as_ref().unwrap().econ_units, 200);
}

#[test]
fn naming_a_species_without_orders_fails_before_persistence() {
    let dir = tempfile::tempdir().unwrap();
    let store = seed_game(dir.path());
    let species_before = fs::read(dir.path().join("species.dat")).unwrap();
    let transactions_before = fs::read(dir.path().join("transactions.dat")).unwrap();

    let err = run_production(&store, RunFlags::default(), &[2], true).unwrap_err();

    assert!(matches!(
        err,
        TurnError::MissingOrders {
            id: SpeciesId(2),
            ..
        }
    ));
    assert_eq!(
        species_before,
        fs::read(dir.path().join("species.dat")).unwrap()
    );
    assert_eq!(
        transactions_before,
        fs::read(dir.path().join("transactions.dat")).unwrap()
    );
}

#[test]
fn aborted_run_leaves_every_file_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let store = seed_game(dir.path());
    fs::write(store.order_path(SpeciesId(1)), GORN_SCRIPT).unwrap();

    let before: Vec<(String, Vec<u8>)> = ["galaxy.dat", "species.dat", "planets.dat", "transactions.dat"]
        .iter()
        .map(|name| (name.to_string(), fs::read(dir.path().join(name)).unwrap()))
        .collect();

    let summary = run_production(&store, two_pass(), &[], false).unwrap();
    assert!(!summary.committed);

    for (name, bytes) in before {
        assert_eq!(bytes, fs::read(dir.path().join(&name)).unwrap(), "{name}");
    }
    assert!(!store.log_path(SpeciesId(1)).exists());
}

#[test]
fn validate_mutations_never_leak_into_commit() {
    let dir = tempfile::tempdir().unwrap();
    let store = seed_game(dir.path());
    fs::write(
        store.order_path(SpeciesId(1)),
        "START PRODUCTION\nRESEARCH 25 MI\nZZZ\n",
    )
    .unwrap();

    let summary = run_production(&store, two_pass(), &[1], true).unwrap();
    assert!(summary.committed);

    // One fresh application of the orders: Mining 10 -> 12, with 4 of the
    // 25 units refunded. Leftovers from the validate pass would shift both.
    let species = store.load_species().unwrap();
    let gorn = species[0].as_ref().unwrap();
    assert_eq!(gorn.tech[TechField::Mining], 12);
    assert_eq!(gorn.econ_units, 79);
}

#[test]
fn planet_file_reflects_production_mining_wear() {
    let dir = tempfile::tempdir().unwrap();
    let store = seed_game(dir.path());
    fs::write(store.order_path(SpeciesId(1)), GORN_SCRIPT).unwrap();

    run_production(&store, RunFlags::default(), &[1], true).unwrap();

    let planets = store.load_planets().unwrap();
    assert_eq!(planets[0].mining_difficulty, 1);
    assert_eq!(planets[1].mining_difficulty, 0);
}

#[test]
fn research_only_turn_changes_no_planet_data() {
    let dir = tempfile::tempdir().unwrap();
    let store = seed_game(dir.path());
    let planets_before = fs::read(dir.path().join("planets.dat")).unwrap();
    fs::write(
        store.order_path(SpeciesId(1)),
        "START PRODUCTION\nRESEARCH 10 ML\nZZZ\n",
    )
    .unwrap();

    run_production(&store, RunFlags::default(), &[1], true).unwrap();

    assert_eq!(
        planets_before,
        fs::read(dir.path().join("planets.dat")).unwrap()
    );
}

#[test]
fn production_markers_inside_messages_are_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let store = seed_game(dir.path());
    fs::write(
        store.order_path(SpeciesId(1)),
        "MESSAGE 2\nSTART PRODUCTION\nPRODUCTION PL Gorn Prime\nZZZ\n",
    )
    .unwrap();

    let summary = run_production(&store, RunFlags::default(), &[1], true).unwrap();

    assert_eq!(summary.skipped, vec![SpeciesId(1)]);
    let species = store.load_species().unwrap();
    assert_eq!(species[0].as_ref().unwrap().econ_units, 100);
}

#[test]
fn only_the_first_production_block_is_processed() {
    let dir = tempfile::tempdir().unwrap();
    let store = seed_game(dir.path());
    let script = format!("{GORN_SCRIPT}{GORN_SCRIPT}");
    fs::write(store.order_path(SpeciesId(1)), script).unwrap();

    run_production(&store, RunFlags::default(), &[1], true).unwrap();

    // A double application would also double the mining wear.
    let species = store.load_species().unwrap();
    assert_eq!(species[0].as_ref().unwrap().econ_units, 200);
    assert_eq!(store.load_planets().unwrap()[0].mining_difficulty, 1);
}

#[test]
fn ambush_orders_post_to_the_transaction_log() {
    let dir = tempfile::tempdir().unwrap();
    let store = seed_game(dir.path());
    fs::write(
        store.order_path(SpeciesId(1)),
        "START PRODUCTION\nAMBUSH 30\nZZZ\n",
    )
    .unwrap();

    run_production(&store, RunFlags::default(), &[1], true).unwrap();

    let transactions = store.load_transactions().unwrap();
    assert_eq!(transactions.len(), 1);
    assert_eq!(transactions[0].species, SpeciesId(1));
    assert_eq!(transactions[0].amount, 30);
}

#[test]
fn species_logs_append_across_runs() {
    let dir = tempfile::tempdir().unwrap();
    let store = seed_game(dir.path());
    fs::write(store.order_path(SpeciesId(1)), GORN_SCRIPT).unwrap();

    run_production(&store, RunFlags::default(), &[1], true).unwrap();
    run_production(&store, RunFlags::default(), &[1], true).unwrap();

    let log = fs::read_to_string(store.log_path(SpeciesId(1))).unwrap();
    assert_eq!(log.matches("Production orders:").count(), 2);
}
