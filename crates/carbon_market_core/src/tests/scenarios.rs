//! Worked examples
//!
//! These tests pin the model's numbers on hand-checked cases:
//! - The single-sector Steel market at a carbon price of 50
//! - The zero-price boundary across the baseline dataset
//! - Market totals and summaries on the baseline dataset

use crate::config::{MarketSnapshot, MarketSnapshotBuilder, ParameterStore, TargetOverrides};
use crate::market::simulate_at_price;
use crate::model::{CostParameters, NetPosition, SectorId, SectorParameters};

fn steel_only() -> MarketSnapshot {
    MarketSnapshotBuilder::new()
        .sector(
            "Steel",
            SectorParameters {
                baseline_emissions: 297.0,
                production: 120.0,
                intensity: 2.48,
                target: 2.25,
            },
            CostParameters {
                fixed_cost: 17_500.0,
                variable_cost: 40_000.0,
                price: 62_500.0,
            },
            0.4,
        )
        .abatement_coefficient(50.0)
        .build()
        .unwrap()
}

/// Steel at P = 50: e = 1.98, MNP = 22538.5, Q = 129.0154, S = 34.83, reduced = 64.51
#[test]
fn test_steel_worked_example() {
    let outcome = simulate_at_price(&steel_only(), 50.0);
    assert_eq!(outcome.sectors.len(), 1);
    let steel = &outcome.sectors[0];

    assert!((steel.new_intensity - 1.98).abs() < 1e-9);
    assert!((steel.adjusted_production - 129.015).abs() < 1e-3);
    assert!((steel.credit_balance - 34.83).abs() < 1e-2);
    assert!((steel.emissions_reduced - 64.51).abs() < 1e-2);
    assert_eq!(steel.net_position, NetPosition::Seller);

    assert_eq!(outcome.total_credit_balance, steel.credit_balance);
    assert_eq!(outcome.total_emissions_reduced, steel.emissions_reduced);
    assert!(!outcome.equilibrium_found);
}

/// At P = 0 nobody abates and every balance is (tau - e0) * Q
#[test]
fn test_zero_price_boundary() {
    let snapshot = MarketSnapshot::baseline();
    let outcome = simulate_at_price(&snapshot, 0.0);

    for (sector, (id, inputs)) in outcome.sectors.iter().zip(snapshot.sectors()) {
        assert_eq!(&sector.sector, id);
        assert_eq!(sector.new_intensity, inputs.parameters.intensity);
        assert_eq!(
            sector.credit_balance,
            (inputs.parameters.target - inputs.parameters.intensity) * sector.adjusted_production
        );
        assert_eq!(sector.emissions_reduced, 0.0);
    }
}

/// With no elasticity, output stays at Q0 and the boundary balance is exactly (tau - e0) * Q0
#[test]
fn test_zero_price_boundary_without_elasticity() {
    let mut store = ParameterStore::default();
    let flat = store
        .elasticities()
        .keys()
        .map(|id| (id.clone(), 0.0))
        .collect();
    store.set_elasticities(flat);
    let snapshot = store.snapshot().unwrap();

    let outcome = simulate_at_price(&snapshot, 0.0);
    for (sector, (_, inputs)) in outcome.sectors.iter().zip(snapshot.sectors()) {
        let p = &inputs.parameters;
        assert_eq!(sector.adjusted_production, p.production);
        assert_eq!(sector.credit_balance, (p.target - p.intensity) * p.production);
    }
}

#[test]
fn test_high_price_turns_market_to_surplus() {
    let snapshot = MarketSnapshot::baseline();
    let outcome = simulate_at_price(&snapshot, 200.0);

    assert!(outcome.total_credit_balance > 0.0);
    assert!(outcome.total_emissions_reduced > 0.0);

    let summary = outcome.summary();
    assert_eq!(summary.buyers + summary.sellers + summary.neutral, snapshot.len());
    assert!(summary.sellers > summary.buyers);
    assert!(
        (summary.credits_supplied - summary.credits_demanded - outcome.total_credit_balance).abs()
            < 2.0 * summary.neutral as f64 + 1e-9
    );
}

#[test]
fn test_intensity_floors_at_zero_for_low_intensity_sectors() {
    let snapshot = MarketSnapshot::baseline();
    // Petroleum Refining (e0 = 0.28) hits zero at P = 28 with k = 50.
    let outcome = simulate_at_price(&snapshot, 150.0);
    let refining = outcome
        .sector(&SectorId::new("Petroleum Refining").unwrap())
        .unwrap();
    assert_eq!(refining.new_intensity, 0.0);
    assert!((refining.credit_balance - 0.25 * refining.adjusted_production).abs() < 1e-9);
}

#[test]
fn test_target_override_moves_clearing_balance() {
    let steel = SectorId::new("Steel").unwrap();
    let base = ParameterStore::default().snapshot().unwrap();
    let tightened = ParameterStore::with_target_overrides(
        Default::default(),
        &TargetOverrides::from([(steel, 2.0)]),
    )
    .snapshot()
    .unwrap();

    let before = simulate_at_price(&base, 60.0).total_credit_balance;
    let after = simulate_at_price(&tightened, 60.0).total_credit_balance;
    assert!(after < before);
}
