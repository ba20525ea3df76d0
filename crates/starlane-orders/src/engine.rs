//! The standard production rule engine and intercept resolver.
//!
//! The engine consumes raw order lines from a positioned stream until the
//! block terminator (or end of stream) and applies each order through the
//! driver-supplied context. Player mistakes -- unknown orders, bad
//! numbers, missing planets, duplicate orders -- are reported in the
//! player's own log and skipped; only I/O and internal-bound failures
//! propagate as errors.

use starlane_core::colony::BuildKind;
use starlane_core::intercept::Intercept;
use starlane_core::production::{
    EngineError, InterceptResolver, OrderSource, ProductionCtx, ProductionEngine, ResolveCtx,
};
use starlane_core::tech::TechField;
use starlane_core::transaction::Transaction;
use std::io::Write;
use std::num::ParseIntError;
use thiserror::Error;

// ---------------------------------------------------------------------------
// Order parsing
// ---------------------------------------------------------------------------

/// One parsed production order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Order {
    /// `PRODUCTION PL <name>` -- select a colony and credit its output.
    Production { planet: String },
    /// `BUILD <count> IU|AU` -- build units at the selected colony.
    Build { count: u32, kind: BuildKind },
    /// `RESEARCH <amount> <tech>` -- spend economic units on research.
    Research { amount: u32, field: TechField },
    /// `AMBUSH <amount>` -- commit units to ambush support, resolved after
    /// the main production call.
    Ambush { amount: u32 },
    /// `ZZZ` -- end of the production block.
    Done,
}

#[derive(Debug, Error)]
pub enum OrderParseError {
    #[error("empty order")]
    Empty,
    #[error("unknown order: {0}")]
    UnknownOrder(String),
    #[error("missing argument: {0}")]
    MissingArgument(&'static str),
    #[error("invalid integer '{value}' for {context}: {source}")]
    InvalidInteger {
        value: String,
        context: &'static str,
        source: ParseIntError,
    },
    #[error("unknown unit class '{0}'")]
    UnknownUnitClass(String),
    #[error("unknown technology '{0}'")]
    UnknownTechnology(String),
    #[error("expected 'PL' before a planet name, got '{0}'")]
    ExpectedPlanetTag(String),
}

/// Parse one order line. Comment lines (leading `;`) and blank lines are
/// the caller's problem; this expects a non-empty candidate order.
pub fn parse_order(input: &str) -> Result<Order, OrderParseError> {
    let trimmed = input.trim();
    let mut parts = trimmed.split_whitespace();
    let verb = parts
        .next()
        .map(|v| v.to_ascii_uppercase())
        .ok_or(OrderParseError::Empty)?;

    match verb.as_str() {
        "PRODUCTION" => {
            let tag = parts
                .next()
                .ok_or(OrderParseError::MissingArgument("PL"))?;
            if !tag.eq_ignore_ascii_case("PL") {
                return Err(OrderParseError::ExpectedPlanetTag(tag.to_string()));
            }
            let name = parts.collect::<Vec<_>>().join(" ");
            if name.is_empty() {
                return Err(OrderParseError::MissingArgument("planet name"));
            }
            Ok(Order::Production { planet: name })
        }
        "BUILD" => {
            let count_str = parts
                .next()
                .ok_or(OrderParseError::MissingArgument("count"))?;
            let count = parse_u32(count_str, "build count")?;
            let class = parts
                .next()
                .ok_or(OrderParseError::MissingArgument("unit class"))?;
            let kind = match class.to_ascii_uppercase().as_str() {
                "IU" => BuildKind::Infrastructure,
                "AU" => BuildKind::Automation,
                other => return Err(OrderParseError::UnknownUnitClass(other.to_string())),
            };
            Ok(Order::Build { count, kind })
        }
        "RESEARCH" => {
            let amount_str = parts
                .next()
                .ok_or(OrderParseError::MissingArgument("amount"))?;
            let amount = parse_u32(amount_str, "research amount")?;
            let field_str = parts
                .next()
                .ok_or(OrderParseError::MissingArgument("technology"))?;
            let field = TechField::parse(field_str)
                .ok_or_else(|| OrderParseError::UnknownTechnology(field_str.to_string()))?;
            Ok(Order::Research { amount, field })
        }
        "AMBUSH" => {
            let amount_str = parts
                .next()
                .ok_or(OrderParseError::MissingArgument("amount"))?;
            let amount = parse_u32(amount_str, "ambush amount")?;
            Ok(Order::Ambush { amount })
        }
        "ZZZ" => Ok(Order::Done),
        other => Err(OrderParseError::UnknownOrder(other.to_string())),
    }
}

fn parse_u32(value: &str, context: &'static str) -> Result<u32, OrderParseError> {
    value
        .parse()
        .map_err(|source| OrderParseError::InvalidInteger {
            value: value.to_string(),
            context,
            source,
        })
}

// ---------------------------------------------------------------------------
// StandardEngine
// ---------------------------------------------------------------------------

/// The stock production rule engine.
///
/// Holds only the in-block cursor state (which colony is currently
/// selected); everything durable lives in the context.
#[derive(Debug, Default)]
pub struct StandardEngine {
    current: Option<usize>,
}

impl StandardEngine {
    pub fn new() -> Self {
        Self::default()
    }

    fn apply(
        &mut self,
        order: Order,
        ctx: &mut ProductionCtx<'_>,
    ) -> Result<(), EngineError> {
        match order {
            Order::Production { planet } => self.select_colony(ctx, &planet),
            Order::Build { count, kind } => self.build_units(ctx, count, kind),
            Order::Research { amount, field } => research(ctx, amount, field),
            Order::Ambush { amount } => ambush(ctx, amount),
            // Handled by the run loop before apply is reached.
            Order::Done => Ok(()),
        }
    }

    fn select_colony(
        &mut self,
        ctx: &mut ProductionCtx<'_>,
        name: &str,
    ) -> Result<(), EngineError> {
        let Some(idx) = ctx
            .colonies
            .iter()
            .position(|c| c.name.eq_ignore_ascii_case(name))
        else {
            writeln!(ctx.log, "!!! Order ignored: no colony named '{name}'.")?;
            return Ok(());
        };

        let colony = &mut ctx.colonies[idx];
        if !colony.ordered.try_mark_production() {
            writeln!(
                ctx.log,
                "!!! Order ignored: PL {} already received a PRODUCTION order.",
                colony.name
            )?;
            return Ok(());
        }

        let planet = &mut ctx.planets[colony.planet.as_usize()];
        let raw_output = colony.mining_base + colony.manufacturing_base;
        let credit = raw_output * u32::from(planet.economic_efficiency) / 100;
        *ctx.econ_units += credit;

        if colony.mining_base > 0 {
            planet.mining_difficulty = planet.mining_difficulty.saturating_add(1);
            ctx.dirty.mark_planets();
        }

        self.current = Some(idx);
        writeln!(
            ctx.log,
            "  Start of production on PL {} (+{} EUs, {} total).",
            colony.name, credit, *ctx.econ_units
        )?;
        Ok(())
    }

    fn build_units(
        &mut self,
        ctx: &mut ProductionCtx<'_>,
        count: u32,
        kind: BuildKind,
    ) -> Result<(), EngineError> {
        let Some(idx) = self.current else {
            writeln!(
                ctx.log,
                "!!! Order ignored: BUILD before any PRODUCTION order."
            )?;
            return Ok(());
        };

        let colony = &mut ctx.colonies[idx];
        if !colony.ordered.try_mark_build(kind) {
            writeln!(
                ctx.log,
                "!!! Order ignored: PL {} already received a BUILD {} order.",
                colony.name,
                kind.keyword()
            )?;
            return Ok(());
        }

        let built = count.min(*ctx.econ_units);
        let still_needed = count - built;
        *ctx.econ_units -= built;
        match kind {
            BuildKind::Infrastructure => {
                colony.auto_iu += built;
                colony.iu_needed += still_needed;
            }
            BuildKind::Automation => {
                colony.auto_au += built;
                colony.au_needed += still_needed;
            }
        }

        writeln!(
            ctx.log,
            "  Built {} {} on PL {} ({} still needed).",
            built,
            kind.keyword(),
            colony.name,
            still_needed
        )?;
        Ok(())
    }
}

fn research(
    ctx: &mut ProductionCtx<'_>,
    amount: u32,
    field: TechField,
) -> Result<(), EngineError> {
    let spend = amount.min(*ctx.econ_units);
    *ctx.econ_units -= spend;

    // Advancing from level L costs max(L, 1) units; the unspendable
    // remainder goes back into the bank.
    let mut budget = spend;
    let mut level = ctx.tech[field];
    let mut gained = 0u32;
    loop {
        let cost = u32::from(level.max(1));
        if budget < cost || level == u8::MAX {
            break;
        }
        budget -= cost;
        level += 1;
        gained += 1;
    }
    ctx.tech[field] = level;
    *ctx.econ_units += budget;

    writeln!(
        ctx.log,
        "  Research in {}: {} level(s) gained, now {}.",
        field.name(),
        gained,
        level
    )?;
    Ok(())
}

fn ambush(ctx: &mut ProductionCtx<'_>, amount: u32) -> Result<(), EngineError> {
    let spend = amount.min(*ctx.econ_units);
    *ctx.econ_units -= spend;
    ctx.intercepts.push(Intercept {
        species: ctx.species_id,
        amount: spend,
    })?;
    writeln!(ctx.log, "  {spend} EUs committed to ambush support.")?;
    Ok(())
}

impl ProductionEngine for StandardEngine {
    fn run(
        &mut self,
        ctx: &mut ProductionCtx<'_>,
        orders: &mut dyn OrderSource,
    ) -> Result<(), EngineError> {
        self.current = None;

        while let Some(line) = orders.next_line() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with(';') {
                continue;
            }
            if ctx.verbose {
                writeln!(ctx.log, "  > {trimmed}")?;
            }
            match parse_order(trimmed) {
                Ok(Order::Done) => break,
                Ok(order) => self.apply(order, ctx)?,
                Err(err) => {
                    writeln!(ctx.log, "!!! Order ignored: {err}")?;
                    writeln!(ctx.log, "!!!   {trimmed}")?;
                }
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// StandardResolver
// ---------------------------------------------------------------------------

/// Posts each drained ambush intercept to the galaxy transaction log.
#[derive(Debug, Default)]
pub struct StandardResolver;

impl StandardResolver {
    pub fn new() -> Self {
        Self
    }
}

impl InterceptResolver for StandardResolver {
    fn resolve(
        &mut self,
        intercept: &Intercept,
        ctx: &mut ResolveCtx<'_>,
    ) -> Result<(), EngineError> {
        ctx.transactions.push(Transaction::new(
            intercept.species,
            intercept.amount,
            format!("{} EUs committed to ambush support", intercept.amount),
        ));
        writeln!(
            ctx.log,
            "  Ambush support in place ({} EUs).",
            intercept.amount
        )?;
        Ok(())
    }
}
