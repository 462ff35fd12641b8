//! Sector response to a carbon price
//!
//! Each sector reacts to the price on its own: it abates linearly in price,
//! expands or contracts output with its marginal profitability, and ends up
//! with a credit surplus or deficit against its target intensity. The
//! functions here are pure; identical inputs give bit-identical outputs.

use crate::config::SectorInputs;
use crate::model::{NetPosition, SectorId, SectorOutcome};

/// Profits are reported in millions of currency units
pub const PROFIT_SCALE: f64 = 1_000_000.0;

/// Marginal profit is divided by this before scaling by elasticity
pub const OUTPUT_RESPONSE_SCALE: f64 = 1_000.0;

/// Emissions intensity after abatement at `carbon_price`, floored at zero
#[must_use]
#[inline]
pub fn abated_intensity(carbon_price: f64, baseline_intensity: f64, k: f64) -> f64 {
    (baseline_intensity - carbon_price / (2.0 * k)).max(0.0)
}

/// Per-unit margin net of the carbon position at the new intensity
///
/// `price - variable_cost - P * (e - tau) + P * (e0 - e)`
#[must_use]
#[inline]
pub fn marginal_net_profit(carbon_price: f64, new_intensity: f64, inputs: &SectorInputs) -> f64 {
    let SectorInputs {
        parameters, cost, ..
    } = inputs;
    cost.unit_margin() - carbon_price * (new_intensity - parameters.target)
        + carbon_price * (parameters.intensity - new_intensity)
}

/// Output after the elasticity response, floored at zero
#[must_use]
#[inline]
pub fn adjusted_output(marginal_net_profit: f64, inputs: &SectorInputs) -> f64 {
    (inputs.parameters.production + inputs.elasticity * marginal_net_profit / OUTPUT_RESPONSE_SCALE)
        .max(0.0)
}

fn operating_profit(output: f64, inputs: &SectorInputs) -> f64 {
    output * inputs.cost.price - output * inputs.cost.variable_cost - inputs.cost.fixed_cost
}

/// Profit including credit trading: deficits are bought and surpluses sold at `carbon_price`
#[must_use]
pub fn profit_with_credits(
    output: f64,
    credit_balance: f64,
    carbon_price: f64,
    inputs: &SectorInputs,
) -> f64 {
    let carbon_cost = (-credit_balance).max(0.0) * carbon_price;
    let carbon_revenue = credit_balance.max(0.0) * carbon_price;
    operating_profit(output, inputs) - carbon_cost + carbon_revenue
}

/// Profit at baseline output with no carbon market
#[must_use]
pub fn baseline_profit(inputs: &SectorInputs) -> f64 {
    operating_profit(inputs.parameters.production, inputs)
}

/// Full response of one sector at `carbon_price` with abatement coefficient `k`
#[must_use]
pub fn respond(carbon_price: f64, sector: &SectorId, inputs: &SectorInputs, k: f64) -> SectorOutcome {
    let e0 = inputs.parameters.intensity;
    let tau = inputs.parameters.target;

    let new_intensity = abated_intensity(carbon_price, e0, k);
    let mnp = marginal_net_profit(carbon_price, new_intensity, inputs);
    let output = adjusted_output(mnp, inputs);

    let credit_balance = (tau - new_intensity) * output;
    let emissions_reduced = (e0 - new_intensity) * output;

    let new_profit = profit_with_credits(output, credit_balance, carbon_price, inputs);
    let profit_change = new_profit - baseline_profit(inputs);

    SectorOutcome {
        sector: sector.clone(),
        baseline_intensity: e0,
        new_intensity,
        baseline_production: inputs.parameters.production,
        adjusted_production: output,
        emissions_reduced,
        credit_balance,
        net_position: NetPosition::classify(credit_balance),
        profit_change: profit_change / PROFIT_SCALE,
        total_profit: new_profit / PROFIT_SCALE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CostParameters, SectorParameters};

    fn steel() -> (SectorId, SectorInputs) {
        (
            SectorId::new("Steel").unwrap(),
            SectorInputs {
                parameters: SectorParameters {
                    baseline_emissions: 297.0,
                    production: 120.0,
                    intensity: 2.48,
                    target: 2.25,
                },
                cost: CostParameters {
                    fixed_cost: 17_500.0,
                    variable_cost: 40_000.0,
                    price: 62_500.0,
                },
                elasticity: 0.4,
            },
        )
    }

    fn close(actual: f64, expected: f64, tol: f64) {
        assert!(
            (actual - expected).abs() < tol,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_steel_at_fifty() {
        let (id, inputs) = steel();
        let e = abated_intensity(50.0, 2.48, 50.0);
        close(e, 1.98, 1e-12);
        close(marginal_net_profit(50.0, e, &inputs), 22_538.5, 1e-9);

        let outcome = respond(50.0, &id, &inputs, 50.0);
        close(outcome.new_intensity, 1.98, 1e-12);
        close(outcome.adjusted_production, 129.0154, 1e-9);
        close(outcome.credit_balance, 34.834158, 1e-6);
        close(outcome.emissions_reduced, 64.5077, 1e-9);
        assert_eq!(outcome.net_position, NetPosition::Seller);
    }

    #[test]
    fn test_steel_profit_in_millions() {
        let (id, inputs) = steel();
        let outcome = respond(50.0, &id, &inputs, 50.0);

        // Baseline: 120 * 22_500 - 17_500 = 2_682_500
        close(baseline_profit(&inputs), 2_682_500.0, 1e-6);
        let expected_total = 129.0154 * 22_500.0 - 17_500.0 + 34.834158 * 50.0;
        close(outcome.total_profit, expected_total / PROFIT_SCALE, 1e-6);
        close(
            outcome.profit_change,
            (expected_total - 2_682_500.0) / PROFIT_SCALE,
            1e-6,
        );
    }

    #[test]
    fn test_zero_price_is_baseline() {
        let (id, inputs) = steel();
        let outcome = respond(0.0, &id, &inputs, 50.0);

        assert_eq!(outcome.new_intensity, 2.48);
        assert_eq!(outcome.emissions_reduced, 0.0);
        // Output still responds to the ordinary unit margin.
        let q = 120.0 + 0.4 * 22_500.0 / 1_000.0;
        close(outcome.adjusted_production, q, 1e-12);
        close(outcome.credit_balance, (2.25 - 2.48) * q, 1e-12);
        assert_eq!(outcome.net_position, NetPosition::Buyer);
    }

    #[test]
    fn test_intensity_clamped_at_zero() {
        assert_eq!(abated_intensity(1_000.0, 2.48, 50.0), 0.0);
        assert_eq!(abated_intensity(248.0, 2.48, 50.0), 0.0);
    }

    #[test]
    fn test_output_clamped_at_zero() {
        let (id, mut inputs) = steel();
        inputs.cost.price = 0.0;
        inputs.elasticity = 100.0;

        let outcome = respond(0.0, &id, &inputs, 50.0);
        assert_eq!(outcome.adjusted_production, 0.0);
        assert_eq!(outcome.credit_balance, 0.0);
        assert_eq!(outcome.net_position, NetPosition::Neutral);
    }

    #[test]
    fn test_respond_is_deterministic() {
        let (id, inputs) = steel();
        let a = respond(73.125, &id, &inputs, 50.0);
        let b = respond(73.125, &id, &inputs, 50.0);
        assert_eq!(a.credit_balance.to_bits(), b.credit_balance.to_bits());
        assert_eq!(a.total_profit.to_bits(), b.total_profit.to_bits());
        assert_eq!(a, b);
    }
}
