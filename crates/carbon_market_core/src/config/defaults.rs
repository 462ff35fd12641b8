//! Baseline dataset
//!
//! Nine industrial sectors covered by the compliance market, with production in
//! Mt of product, intensity in tCO2 per tonne and costs in rupees per tonne.
//! The arrays are the single source of truth: `MarketTables::baseline()` builds a
//! fresh owned copy from them every time it is called.

use crate::model::{CalibrationConstants, CostParameters, SectorParameters};

const fn sector(
    baseline_emissions: f64,
    production: f64,
    intensity: f64,
    target: f64,
) -> SectorParameters {
    SectorParameters {
        baseline_emissions,
        production,
        intensity,
        target,
    }
}

const fn cost(fixed_cost: f64, variable_cost: f64, price: f64) -> CostParameters {
    CostParameters {
        fixed_cost,
        variable_cost,
        price,
    }
}

pub(crate) const BASELINE_SECTORS: [(&str, SectorParameters); 9] = [
    ("Steel", sector(297.0, 120.0, 2.48, 2.25)),
    ("Aluminium", sector(77.0, 3.6, 20.88, 18.79)),
    ("Cement", sector(218.0, 337.0, 0.65, 0.59)),
    ("Fertiliser", sector(25.0, 43.0, 0.58, 0.52)),
    ("Textile", sector(25.0, 9.5, 2.63, 2.37)),
    ("Paper & Pulp", sector(30.5, 19.3, 1.58, 1.4)),
    ("Petrochemicals", sector(94.87, 26.5, 3.58, 3.22)),
    ("Petroleum Refining", sector(70.0, 243.0, 0.28, 0.25)),
    ("Chlor Alkali", sector(12.0, 4.54, 2.63, 2.36)),
];

pub(crate) const BASELINE_COSTS: [(&str, CostParameters); 9] = [
    ("Steel", cost(17_500.0, 40_000.0, 62_500.0)),
    ("Aluminium", cost(70_000.0, 140_000.0, 230_000.0)),
    ("Cement", cost(1_400.0, 4_100.0, 6_000.0)),
    ("Fertiliser", cost(5_000.0, 18_000.0, 25_000.0)),
    ("Textile", cost(60_000.0, 155_000.0, 250_000.0)),
    ("Paper & Pulp", cost(17_500.0, 40_000.0, 62_500.0)),
    ("Petrochemicals", cost(25_000.0, 70_000.0, 105_000.0)),
    ("Petroleum Refining", cost(20_000.0, 60_000.0, 90_000.0)),
    ("Chlor Alkali", cost(12_000.0, 20_000.0, 35_000.0)),
];

pub(crate) const BASELINE_ELASTICITIES: [(&str, f64); 9] = [
    ("Steel", 0.4),
    ("Aluminium", 0.35),
    ("Cement", 0.25),
    ("Fertiliser", 0.3),
    ("Textile", 0.45),
    ("Paper & Pulp", 0.4),
    ("Petrochemicals", 0.35),
    ("Petroleum Refining", 0.2),
    ("Chlor Alkali", 0.3),
];

pub(crate) const BASELINE_CALIBRATION: CalibrationConstants = CalibrationConstants::BASELINE;
