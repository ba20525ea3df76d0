//! `starlane-prod` -- run production orders for one game turn.

use anyhow::{Context, Result};
use clap::Parser;
use starlane_orders::engine::{StandardEngine, StandardResolver};
use starlane_store::GalaxyStore;
use starlane_turn::controller::{OperatorGate, TurnController};
use starlane_turn::selector::{RunFlags, Selection};
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "starlane-prod", about = "Run production orders for one game turn", long_about = None)]
struct Args {
    /// Validate the full run first, then commit after confirmation
    #[arg(short = 'p')]
    two_pass: bool,

    /// Test mode, passed through to the rule engine
    #[arg(short = 't')]
    test_mode: bool,

    /// Verbose production logging
    #[arg(short = 'v')]
    verbose: bool,

    /// Game directory holding galaxy data and order files
    #[arg(long, default_value = ".")]
    game_dir: PathBuf,

    /// Species numbers to process (the whole galaxy when omitted)
    species: Vec<u16>,
}

/// Interactive abort gate on the operator's terminal.
struct StdinGate;

impl OperatorGate for StdinGate {
    fn confirm(&mut self) -> io::Result<bool> {
        println!("\nFinal chance to abort safely!");
        print!("Do you wish to abort this run (y/N)? ");
        io::stdout().flush()?;
        let mut answer = String::new();
        io::stdin().read_line(&mut answer)?;
        Ok(!answer.trim_start().to_ascii_lowercase().starts_with('y'))
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let store = GalaxyStore::new(&args.game_dir);
    let galaxy = store
        .load_galaxy()
        .with_context(|| format!("cannot load galaxy data from {}", args.game_dir.display()))?;

    let flags = RunFlags {
        two_pass: args.two_pass,
        test_mode: args.test_mode,
        verbose: args.verbose,
    };
    let selection = Selection::from_args(flags, &args.species, &galaxy)?;

    let mut engine = StandardEngine::new();
    let mut resolver = StandardResolver::new();
    let mut gate = StdinGate;
    let mut controller = TurnController::new(&store, &mut engine, &mut resolver, &mut gate);
    let summary = controller.run(&selection).context("production run failed")?;

    if summary.committed {
        println!(
            "\nProduction run complete: {} species processed, {} skipped.",
            summary.processed.len(),
            summary.skipped.len()
        );
    } else {
        println!("\nRun aborted; no changes were written.");
    }
    Ok(())
}
