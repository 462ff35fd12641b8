//! Command runners
//!
//! Each runner takes the resolved parameter store and returns a serializable
//! report; `run` renders it as pretty JSON for stdout.

use carbon_market_core::config::{MarketTables, ParameterStore, TargetOverrides};
use carbon_market_core::market::{price_grid, simulate_at_price, sweep_prices};
use carbon_market_core::model::{MarketOutcome, MarketSummary};
use carbon_market_core::scenario::{ComparisonMetrics, PolicyScenario, compare};
use carbon_market_core::solver::{ConvergenceSample, find_equilibrium, find_equilibrium_with_tracking};
use carbon_market_core::strategy::{SectorStrategies, StrategyMatrix, analyze_strategies};
use color_eyre::eyre::{WrapErr, eyre};
use serde::Serialize;

use crate::cli::{Cli, Command};
use crate::params::{collect_overrides, load_tables};

/// A market outcome with its headline figures
#[derive(Debug, Clone, Serialize)]
pub struct OutcomeReport {
    #[serde(flatten)]
    pub outcome: MarketOutcome,
    pub summary: MarketSummary,
}

impl From<MarketOutcome> for OutcomeReport {
    fn from(outcome: MarketOutcome) -> Self {
        let summary = outcome.summary();
        Self { outcome, summary }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct EquilibriumReport {
    #[serde(flatten)]
    pub report: OutcomeReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub convergence: Option<Vec<ConvergenceSample>>,
}

/// One row of a price sweep
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SweepPoint {
    pub carbon_price: f64,
    pub total_credit_balance: f64,
    pub total_emissions_reduced: f64,
    pub total_profit_change: f64,
}

/// Strategy quadrants for one sector, with the best picks named by label
#[derive(Debug, Clone, Serialize)]
pub struct StrategyReport {
    #[serde(flatten)]
    pub strategies: SectorStrategies,
    pub most_profitable: Option<&'static str>,
    pub greenest: Option<&'static str>,
}

impl From<SectorStrategies> for StrategyReport {
    fn from(strategies: SectorStrategies) -> Self {
        Self {
            most_profitable: strategies.most_profitable().map(|o| o.quadrant.label()),
            greenest: strategies.greenest().map(|o| o.quadrant.label()),
            strategies,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ComparisonReport {
    pub scenarios: Vec<ScenarioRow>,
    pub metrics: Option<ComparisonMetrics>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScenarioRow {
    pub name: String,
    pub carbon_price: f64,
    pub summary: MarketSummary,
    pub total_emissions_reduced: f64,
    pub total_credit_balance: f64,
}

/// Resolve the parameter store for a command line: file or baseline, plus overrides
pub fn resolve_store(cli: &Cli) -> color_eyre::Result<(ParameterStore, TargetOverrides)> {
    let tables = load_tables(cli.params.as_deref())?;
    let overrides = collect_overrides(&cli.targets);
    let store = ParameterStore::with_target_overrides(tables, &overrides);
    Ok((store, overrides))
}

/// Execute the parsed command line and return the text to print
pub fn run(cli: &Cli) -> color_eyre::Result<String> {
    let (store, overrides) = resolve_store(cli)?;

    match &cli.command {
        Command::Simulate { price } => to_json(&simulate(&store, *price)?),
        Command::Equilibrium { min, max, track } => {
            to_json(&equilibrium(&store, *min, *max, *track)?)
        }
        Command::Sweep { min, max, steps } => to_json(&sweep(&store, *min, *max, *steps)?),
        Command::Strategy { price } => to_json(&strategy(&store, *price)?),
        Command::Compare { prices } => {
            to_json(&compare_prices(store.defaults(), &overrides, prices)?)
        }
        Command::Defaults => {
            serde_saphyr::to_string(store.tables())
                .map_err(|e| eyre!("Failed to serialize market tables: {e}"))
        }
    }
}

fn to_json<T: Serialize>(value: &T) -> color_eyre::Result<String> {
    serde_json::to_string_pretty(value).wrap_err("Failed to serialize report")
}

pub fn simulate(store: &ParameterStore, price: f64) -> color_eyre::Result<OutcomeReport> {
    let snapshot = store.snapshot().wrap_err("Invalid market parameters")?;
    let outcome = simulate_at_price(&snapshot, price);
    tracing::info!(
        price,
        balance = outcome.total_credit_balance,
        "Simulated market"
    );
    Ok(outcome.into())
}

pub fn equilibrium(
    store: &ParameterStore,
    min: f64,
    max: f64,
    track: bool,
) -> color_eyre::Result<EquilibriumReport> {
    let snapshot = store.snapshot().wrap_err("Invalid market parameters")?;

    let (outcome, convergence) = if track {
        let (outcome, history) = find_equilibrium_with_tracking(&snapshot, min, max)?;
        (outcome, Some(history.into_iter().collect()))
    } else {
        (find_equilibrium(&snapshot, min, max)?, None)
    };

    if outcome.equilibrium_found {
        tracing::info!(
            price = outcome.carbon_price,
            iterations = ?outcome.iterations,
            "Equilibrium found"
        );
    } else {
        tracing::warn!(
            price = outcome.carbon_price,
            balance = outcome.total_credit_balance,
            "Balance not within tolerance at reported price"
        );
    }

    Ok(EquilibriumReport {
        report: outcome.into(),
        convergence,
    })
}

pub fn sweep(
    store: &ParameterStore,
    min: f64,
    max: f64,
    steps: usize,
) -> color_eyre::Result<Vec<SweepPoint>> {
    let snapshot = store.snapshot().wrap_err("Invalid market parameters")?;
    let prices = price_grid(min, max, steps)?;

    Ok(sweep_prices(&snapshot, &prices)
        .into_iter()
        .map(|outcome| SweepPoint {
            carbon_price: outcome.carbon_price,
            total_credit_balance: outcome.total_credit_balance,
            total_emissions_reduced: outcome.total_emissions_reduced,
            total_profit_change: outcome.summary().total_profit_change,
        })
        .collect())
}

pub fn strategy(store: &ParameterStore, price: f64) -> color_eyre::Result<Vec<StrategyReport>> {
    let snapshot = store.snapshot().wrap_err("Invalid market parameters")?;
    Ok(analyze_strategies(&snapshot, &StrategyMatrix::default(), price)
        .into_iter()
        .map(StrategyReport::from)
        .collect())
}

pub fn compare_prices(
    tables: &MarketTables,
    overrides: &TargetOverrides,
    prices: &[f64],
) -> color_eyre::Result<ComparisonReport> {
    let scenarios = prices
        .iter()
        .map(|&price| {
            PolicyScenario::run(format!("P = {price}"), tables, price, overrides.clone())
        })
        .collect::<Result<Vec<_>, _>>()
        .wrap_err("Invalid market parameters")?;

    Ok(ComparisonReport {
        metrics: compare(&scenarios),
        scenarios: scenarios
            .into_iter()
            .map(|s| ScenarioRow {
                summary: s.outcome.summary(),
                total_emissions_reduced: s.outcome.total_emissions_reduced,
                total_credit_balance: s.outcome.total_credit_balance,
                name: s.name,
                carbon_price: s.carbon_price,
            })
            .collect(),
    })
}
