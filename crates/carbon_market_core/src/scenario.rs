//! Policy scenarios
//!
//! A scenario is a named carbon price plus a set of target intensity overrides,
//! together with the market outcome they produce. Scenarios are plain values;
//! keeping or discarding them is up to the caller.

use serde::{Deserialize, Serialize};

use crate::config::{MarketTables, ParameterStore, TargetOverrides};
use crate::error::ConfigError;
use crate::market::simulate_at_price;
use crate::model::MarketOutcome;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyScenario {
    pub name: String,
    pub carbon_price: f64,
    #[serde(default)]
    pub target_overrides: TargetOverrides,
    pub outcome: MarketOutcome,
}

impl PolicyScenario {
    /// Run `base` with `target_overrides` applied at `carbon_price`
    pub fn run(
        name: impl Into<String>,
        base: &MarketTables,
        carbon_price: f64,
        target_overrides: TargetOverrides,
    ) -> Result<Self, ConfigError> {
        let store = ParameterStore::with_target_overrides(base.clone(), &target_overrides);
        let snapshot = store.snapshot()?;

        Ok(Self {
            name: name.into(),
            carbon_price,
            outcome: simulate_at_price(&snapshot, carbon_price),
            target_overrides,
        })
    }

    /// Copy of this scenario under a new name
    #[must_use]
    pub fn duplicate(&self) -> Self {
        Self {
            name: format!("{} (Copy)", self.name),
            ..self.clone()
        }
    }
}

/// Aggregate figures across a set of scenarios
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComparisonMetrics {
    pub average_price: f64,
    pub average_emissions_reduced: f64,
    /// Highest minus lowest carbon price
    pub price_range: f64,
}

/// Compare scenarios; `None` when there is nothing to compare
#[must_use]
pub fn compare(scenarios: &[PolicyScenario]) -> Option<ComparisonMetrics> {
    if scenarios.is_empty() {
        return None;
    }

    let n = scenarios.len() as f64;
    let prices = scenarios.iter().map(|s| s.outcome.carbon_price);
    let max = prices.clone().fold(f64::NEG_INFINITY, f64::max);
    let min = prices.clone().fold(f64::INFINITY, f64::min);

    Some(ComparisonMetrics {
        average_price: prices.sum::<f64>() / n,
        average_emissions_reduced: scenarios
            .iter()
            .map(|s| s.outcome.total_emissions_reduced)
            .sum::<f64>()
            / n,
        price_range: max - min,
    })
}
