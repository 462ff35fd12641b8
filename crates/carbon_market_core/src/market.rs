//! Market aggregation at a single carbon price
//!
//! `simulate_at_price` is the black-box `B(P)` the equilibrium solver drives to
//! zero. Sweeps over many prices evaluate points independently, so they run in
//! parallel when the `parallel` feature is enabled.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::config::MarketSnapshot;
use crate::error::ConfigError;
use crate::model::{MarketOutcome, SectorOutcome};
use crate::response::respond;

/// Evaluate every sector at `carbon_price` and aggregate the market totals
#[must_use]
pub fn simulate_at_price(snapshot: &MarketSnapshot, carbon_price: f64) -> MarketOutcome {
    let calibration = snapshot.calibration();
    let k = calibration.abatement_coefficient;

    let sectors: Vec<SectorOutcome> = snapshot
        .sectors()
        .map(|(id, inputs)| respond(carbon_price, id, inputs, k))
        .collect();

    // Sequential folds in sector order, so totals are reproducible bit for bit.
    let total_emissions_reduced = sectors.iter().fold(0.0, |acc, s| acc + s.emissions_reduced);
    let total_credit_balance = sectors.iter().fold(0.0, |acc, s| acc + s.credit_balance);

    MarketOutcome {
        carbon_price,
        sectors,
        total_emissions_reduced,
        total_credit_balance,
        equilibrium_found: total_credit_balance.abs() < calibration.tolerance,
        iterations: None,
    }
}

/// Aggregate credit balance `B(P)`: positive is net surplus, negative net deficit
#[must_use]
pub fn market_balance(snapshot: &MarketSnapshot, carbon_price: f64) -> f64 {
    simulate_at_price(snapshot, carbon_price).total_credit_balance
}

/// Evenly spaced prices from `min` to `max` inclusive
pub fn price_grid(min: f64, max: f64, steps: usize) -> Result<Vec<f64>, ConfigError> {
    if !(min.is_finite() && max.is_finite()) || max <= min || steps < 2 {
        return Err(ConfigError::InvalidSweep { min, max, steps });
    }

    let step = (max - min) / (steps - 1) as f64;
    Ok((0..steps)
        .map(|i| {
            if i == steps - 1 {
                max
            } else {
                min + step * i as f64
            }
        })
        .collect())
}

/// Evaluate the market at each price. Output order matches `prices`.
#[must_use]
pub fn sweep_prices(snapshot: &MarketSnapshot, prices: &[f64]) -> Vec<MarketOutcome> {
    #[cfg(feature = "parallel")]
    let outcomes: Vec<MarketOutcome> = prices
        .par_iter()
        .map(|&price| simulate_at_price(snapshot, price))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let outcomes: Vec<MarketOutcome> = prices
        .iter()
        .map(|&price| simulate_at_price(snapshot, price))
        .collect();

    outcomes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NetPosition;

    #[test]
    fn test_total_balance_is_exact_sum() {
        let snapshot = MarketSnapshot::baseline();
        for price in [0.0, 12.5, 50.0, 137.0, 200.0] {
            let outcome = simulate_at_price(&snapshot, price);
            let mut sum = 0.0;
            for sector in &outcome.sectors {
                sum += sector.credit_balance;
            }
            assert_eq!(outcome.total_credit_balance, sum);
            assert_eq!(outcome.iterations, None);
        }
    }

    #[test]
    fn test_one_outcome_per_sector_in_snapshot_order() {
        let snapshot = MarketSnapshot::baseline();
        let outcome = simulate_at_price(&snapshot, 30.0);
        let expected: Vec<_> = snapshot.sectors().map(|(id, _)| id.clone()).collect();
        let actual: Vec<_> = outcome.sectors.iter().map(|s| s.sector.clone()).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_zero_price_everyone_below_target_is_buyer() {
        let snapshot = MarketSnapshot::baseline();
        let outcome = simulate_at_price(&snapshot, 0.0);

        assert!(outcome.total_credit_balance < 0.0);
        assert_eq!(outcome.total_emissions_reduced, 0.0);
        for sector in &outcome.sectors {
            assert_eq!(sector.new_intensity, sector.baseline_intensity);
            assert_eq!(sector.net_position, NetPosition::Buyer, "{}", sector.sector);
        }
        assert!(!outcome.equilibrium_found);
    }

    #[test]
    fn test_price_grid_endpoints() {
        let grid = price_grid(0.0, 200.0, 5).unwrap();
        assert_eq!(grid, vec![0.0, 50.0, 100.0, 150.0, 200.0]);

        assert!(price_grid(10.0, 10.0, 5).is_err());
        assert!(price_grid(0.0, 10.0, 1).is_err());
        assert!(price_grid(f64::NAN, 10.0, 3).is_err());
    }

    #[test]
    fn test_sweep_matches_pointwise() {
        let snapshot = MarketSnapshot::baseline();
        let prices = price_grid(0.0, 200.0, 21).unwrap();
        let swept = sweep_prices(&snapshot, &prices);

        assert_eq!(swept.len(), prices.len());
        for (outcome, price) in swept.iter().zip(&prices) {
            assert_eq!(outcome, &simulate_at_price(&snapshot, *price));
        }
    }
}
