//! The per-species production call.

use crate::error::TurnError;
use crate::selector::RunFlags;
use starlane_core::colony::MAX_COLONIES;
use starlane_core::dirty::RunDirty;
use starlane_core::intercept::InterceptQueue;
use starlane_core::planet::Planet;
use starlane_core::production::{
    InterceptResolver, OrderSource, ProductionCtx, ProductionEngine, ResolveCtx,
};
use starlane_core::species::Species;
use starlane_core::transaction::Transaction;
use std::io::Write;

/// Run one species' production block through the rule engine.
///
/// The call protocol, in order: bound-check the colony count; reset every
/// colony's transient accounting; snapshot the tech vector; run the engine
/// against the positioned order stream; copy the snapshot back; drain the
/// intercept queue FIFO into the resolver; mark the species modified.
///
/// The tech write-back happens only on a successful engine return, so a
/// failed call leaves the stored vector exactly as loaded. An engine error
/// propagates out and ends the whole run; one species' half-applied orders
/// must never survive into persistence.
#[allow(clippy::too_many_arguments)]
pub fn run_species(
    species: &mut Species,
    planets: &mut [Planet],
    transactions: &mut Vec<Transaction>,
    dirty: &mut RunDirty,
    engine: &mut dyn ProductionEngine,
    resolver: &mut dyn InterceptResolver,
    orders: &mut dyn OrderSource,
    log: &mut dyn Write,
    flags: RunFlags,
) -> Result<(), TurnError> {
    if species.colonies.len() > MAX_COLONIES {
        return Err(TurnError::ColonyBoundExceeded {
            id: species.id,
            count: species.colonies.len(),
            max: MAX_COLONIES,
        });
    }

    species.reset_turn_state();

    let mut tech = species.tech;
    let mut intercepts = InterceptQueue::new();
    {
        let mut ctx = ProductionCtx {
            species_id: species.id,
            species_name: &species.name,
            colonies: &mut species.colonies,
            planets,
            tech: &mut tech,
            econ_units: &mut species.econ_units,
            intercepts: &mut intercepts,
            dirty,
            log: &mut *log,
            test_mode: flags.test_mode,
            verbose: flags.verbose,
        };
        engine.run(&mut ctx, orders)?;
    }
    species.tech = tech;

    for intercept in intercepts.drain() {
        let mut ctx = ResolveCtx {
            species_id: species.id,
            transactions: &mut *transactions,
            log: &mut *log,
        };
        resolver.resolve(&intercept, &mut ctx)?;
    }

    species.modified = true;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use starlane_core::colony::Colony;
    use starlane_core::id::PlanetIndex;
    use starlane_core::intercept::Intercept;
    use starlane_core::production::EngineError;
    use starlane_core::tech::TechField;
    use starlane_core::test_utils::species_with_home;
    use starlane_orders::engine::{StandardEngine, StandardResolver};
    use starlane_orders::reader::OrderReader;
    use std::io::Cursor;

    fn run(
        species: &mut Species,
        planets: &mut [Planet],
        transactions: &mut Vec<Transaction>,
        dirty: &mut RunDirty,
        script: &str,
    ) -> Result<(), TurnError> {
        let mut engine = StandardEngine::new();
        let mut resolver = StandardResolver::new();
        let mut orders = OrderReader::new(Cursor::new(script.as_bytes().to_vec()));
        let mut log = Vec::new();
        run_species(
            species,
            planets,
            transactions,
            dirty,
            &mut engine,
            &mut resolver,
            &mut orders,
            &mut log,
            RunFlags::default(),
        )
    }

    #[test]
    fn leftover_accounting_is_reset_before_the_engine_runs() {
        let mut species = species_with_home(1, "Gorn", 0);
        species.colonies[0].auto_iu = 99;
        species.colonies[0].ordered.production = true;
        let mut planets = vec![Planet::default()];
        let mut transactions = Vec::new();
        let mut dirty = RunDirty::new();

        // With stale flags, this PRODUCTION order would be rejected as a
        // duplicate; a proper reset lets it through.
        run(
            &mut species,
            &mut planets,
            &mut transactions,
            &mut dirty,
            "PRODUCTION PL Gorn Prime\nZZZ\n",
        )
        .unwrap();

        assert_eq!(species.econ_units, 200);
        assert_eq!(species.colonies[0].auto_iu, 0);
        assert!(species.modified);
    }

    #[test]
    fn tech_mutations_are_written_back_on_success() {
        let mut species = species_with_home(1, "Gorn", 0);
        let mut planets = vec![Planet::default()];
        let mut transactions = Vec::new();
        let mut dirty = RunDirty::new();

        run(
            &mut species,
            &mut planets,
            &mut transactions,
            &mut dirty,
            "RESEARCH 25 MI\nZZZ\n",
        )
        .unwrap();

        assert_eq!(species.tech[TechField::Mining], 12);
    }

    #[test]
    fn intercepts_drain_into_the_transaction_log() {
        let mut species = species_with_home(1, "Gorn", 0);
        let mut planets = vec![Planet::default()];
        let mut transactions = Vec::new();
        let mut dirty = RunDirty::new();

        run(
            &mut species,
            &mut planets,
            &mut transactions,
            &mut dirty,
            "AMBUSH 10\nAMBUSH 20\nZZZ\n",
        )
        .unwrap();

        assert_eq!(transactions.len(), 2);
        assert_eq!(transactions[0].amount, 10);
        assert_eq!(transactions[1].amount, 20);
    }

    #[test]
    fn colony_bound_violation_is_fatal() {
        let mut species = species_with_home(1, "Gorn", 0);
        species.colonies = (0..=MAX_COLONIES)
            .map(|i| Colony::new(format!("C{i}"), PlanetIndex(0)))
            .collect();
        let mut planets = vec![Planet::default()];
        let mut transactions = Vec::new();
        let mut dirty = RunDirty::new();

        let err = run(
            &mut species,
            &mut planets,
            &mut transactions,
            &mut dirty,
            "ZZZ\n",
        )
        .unwrap_err();
        assert!(matches!(err, TurnError::ColonyBoundExceeded { .. }));
        assert!(!species.modified);
    }

    struct FailingEngine;

    impl ProductionEngine for FailingEngine {
        fn run(
            &mut self,
            ctx: &mut ProductionCtx<'_>,
            _orders: &mut dyn OrderSource,
        ) -> Result<(), EngineError> {
            ctx.tech[TechField::Mining] = 99;
            Err(EngineError::Io(std::io::Error::other("engine failure")))
        }
    }

    #[test]
    fn failed_engine_call_never_publishes_tech_changes() {
        let mut species = species_with_home(1, "Gorn", 0);
        let before = species.tech;
        let mut planets = vec![Planet::default()];
        let mut transactions = Vec::new();
        let mut dirty = RunDirty::new();
        let mut engine = FailingEngine;
        let mut resolver = StandardResolver::new();
        let mut orders = OrderReader::new(Cursor::new(Vec::new()));
        let mut log = Vec::new();

        let result = run_species(
            &mut species,
            &mut planets,
            &mut transactions,
            &mut dirty,
            &mut engine,
            &mut resolver,
            &mut orders,
            &mut log,
            RunFlags::default(),
        );

        assert!(result.is_err());
        assert_eq!(species.tech, before);
        assert!(!species.modified);
    }

    struct QueueOnlyEngine;

    impl ProductionEngine for QueueOnlyEngine {
        fn run(
            &mut self,
            ctx: &mut ProductionCtx<'_>,
            _orders: &mut dyn OrderSource,
        ) -> Result<(), EngineError> {
            for amount in [1, 2, 3] {
                ctx.intercepts.push(Intercept {
                    species: ctx.species_id,
                    amount,
                })?;
            }
            Ok(())
        }
    }

    #[test]
    fn intercepts_resolve_in_enqueue_order() {
        let mut species = species_with_home(1, "Gorn", 0);
        let mut planets = vec![Planet::default()];
        let mut transactions = Vec::new();
        let mut dirty = RunDirty::new();
        let mut engine = QueueOnlyEngine;
        let mut resolver = StandardResolver::new();
        let mut orders = OrderReader::new(Cursor::new(Vec::new()));
        let mut log = Vec::new();

        run_species(
            &mut species,
            &mut planets,
            &mut transactions,
            &mut dirty,
            &mut engine,
            &mut resolver,
            &mut orders,
            &mut log,
            RunFlags::default(),
        )
        .unwrap();

        let amounts: Vec<u32> = transactions.iter().map(|t| t.amount).collect();
        assert_eq!(amounts, vec![1, 2, 3]);
    }
}
