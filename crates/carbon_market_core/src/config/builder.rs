//! Snapshot Builder
//!
//! Fluent construction of a `MarketSnapshot` for tests, benchmarks and callers
//! that assemble markets in code rather than from a parameter file.
//!
//! # Example
//!
//! ```ignore
//! use carbon_market_core::config::MarketSnapshotBuilder;
//! use carbon_market_core::model::{CostParameters, SectorParameters};
//!
//! let snapshot = MarketSnapshotBuilder::new()
//!     .sector(
//!         "Steel",
//!         SectorParameters { baseline_emissions: 297.0, production: 120.0, intensity: 2.48, target: 2.25 },
//!         CostParameters { fixed_cost: 17_500.0, variable_cost: 40_000.0, price: 62_500.0 },
//!         0.4,
//!     )
//!     .abatement_coefficient(50.0)
//!     .tolerance(1e-4)
//!     .build()?;
//! ```

use crate::error::ConfigError;
use crate::model::{CalibrationConstants, CostParameters, SectorId, SectorParameters};

use super::{MarketSnapshot, MarketTables, TargetOverrides};

#[derive(Debug, Clone)]
struct PendingSector {
    name: String,
    parameters: SectorParameters,
    cost: CostParameters,
    elasticity: f64,
}

/// Builder for `MarketSnapshot` with name-based sector registration
#[derive(Debug, Clone, Default)]
pub struct MarketSnapshotBuilder {
    pending: Vec<PendingSector>,
    calibration: CalibrationConstants,
    targets: Vec<(String, f64)>,
}

impl MarketSnapshotBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from the baseline dataset
    #[must_use]
    pub fn baseline() -> Self {
        let tables = MarketTables::baseline();
        let pending = tables
            .sectors
            .iter()
            .filter_map(|(id, parameters)| {
                Some(PendingSector {
                    name: id.to_string(),
                    parameters: *parameters,
                    cost: *tables.costs.get(id)?,
                    elasticity: *tables.elasticities.get(id)?,
                })
            })
            .collect();

        Self {
            pending,
            calibration: tables.calibration,
            targets: Vec::new(),
        }
    }

    /// Add a sector. Registering the same name twice keeps the last definition.
    #[must_use]
    pub fn sector(
        mut self,
        name: impl Into<String>,
        parameters: SectorParameters,
        cost: CostParameters,
        elasticity: f64,
    ) -> Self {
        self.pending.push(PendingSector {
            name: name.into(),
            parameters,
            cost,
            elasticity,
        });
        self
    }

    /// Override the target intensity of a sector registered before or after this call
    #[must_use]
    pub fn target(mut self, name: impl Into<String>, target: f64) -> Self {
        self.targets.push((name.into(), target));
        self
    }

    #[must_use]
    pub fn calibration(mut self, calibration: CalibrationConstants) -> Self {
        self.calibration = calibration;
        self
    }

    #[must_use]
    pub fn abatement_coefficient(mut self, k: f64) -> Self {
        self.calibration.abatement_coefficient = k;
        self
    }

    #[must_use]
    pub fn tolerance(mut self, epsilon: f64) -> Self {
        self.calibration.tolerance = epsilon;
        self
    }

    #[must_use]
    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        self.calibration.max_iterations = max_iterations;
        self
    }

    /// Build the raw tables without validating values
    pub fn build_tables(self) -> Result<MarketTables, ConfigError> {
        let mut tables = MarketTables {
            sectors: Default::default(),
            costs: Default::default(),
            elasticities: Default::default(),
            calibration: self.calibration,
        };

        for pending in self.pending {
            let id = SectorId::new(&pending.name)?;
            tables.sectors.insert(id.clone(), pending.parameters);
            tables.costs.insert(id.clone(), pending.cost);
            tables.elasticities.insert(id, pending.elasticity);
        }

        let overrides = self
            .targets
            .into_iter()
            .map(|(name, target)| Ok((SectorId::new(name)?, target)))
            .collect::<Result<TargetOverrides, ConfigError>>()?;
        tables.apply_target_overrides(&overrides);

        Ok(tables)
    }

    pub fn build(self) -> Result<MarketSnapshot, ConfigError> {
        MarketSnapshot::new(&self.build_tables()?)
    }
}
