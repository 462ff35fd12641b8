use std::sync::Arc;

use serde::Serialize;

use crate::error::ConfigError;
use crate::model::{
    CalibrationConstants, CostParameters, SectorId, SectorParameters, validate_elasticity,
};

use super::MarketTables;

/// Everything the response model needs for one sector
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SectorInputs {
    pub parameters: SectorParameters,
    pub cost: CostParameters,
    /// Demand elasticity `alpha`
    pub elasticity: f64,
}

/// Validated, immutable market inputs for a simulation run
///
/// Sectors are held behind an `Arc`, so cloning a snapshot to hand it to another
/// run (or thread) is cheap and never aliases mutable state. Iteration order is
/// the `SectorId` ordering and does not change for the lifetime of the snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketSnapshot {
    sectors: Arc<[(SectorId, SectorInputs)]>,
    calibration: CalibrationConstants,
}

impl MarketSnapshot {
    /// Validate `tables` and freeze them into a snapshot.
    ///
    /// The three tables must share exactly the same key set; a sector missing
    /// from any of them, or a cost/elasticity entry with no sector, is an error.
    pub fn new(tables: &MarketTables) -> Result<Self, ConfigError> {
        tables.calibration.validate()?;

        if tables.sectors.is_empty() {
            return Err(ConfigError::NoSectors);
        }

        for (sector, params) in &tables.sectors {
            params.validate(sector)?;

            let cost = tables
                .costs
                .get(sector)
                .ok_or_else(|| ConfigError::MissingCostParameters(sector.clone()))?;
            cost.validate(sector)?;

            let alpha = tables
                .elasticities
                .get(sector)
                .ok_or_else(|| ConfigError::MissingElasticity(sector.clone()))?;
            validate_elasticity(sector, *alpha)?;
        }

        if let Some(orphan) = tables
            .costs
            .keys()
            .find(|k| !tables.sectors.contains_key(*k))
        {
            return Err(ConfigError::OrphanCostParameters(orphan.clone()));
        }
        if let Some(orphan) = tables
            .elasticities
            .keys()
            .find(|k| !tables.sectors.contains_key(*k))
        {
            return Err(ConfigError::OrphanElasticity(orphan.clone()));
        }

        Ok(Self::assemble(tables))
    }

    /// Snapshot of the built-in baseline dataset
    #[must_use]
    pub fn baseline() -> Self {
        Self::assemble(&MarketTables::baseline())
    }

    /// Join the three tables on sector. Callers guarantee the key sets match.
    fn assemble(tables: &MarketTables) -> Self {
        let sectors: Vec<(SectorId, SectorInputs)> = tables
            .sectors
            .iter()
            .filter_map(|(sector, parameters)| {
                let cost = tables.costs.get(sector)?;
                let elasticity = tables.elasticities.get(sector)?;
                Some((
                    sector.clone(),
                    SectorInputs {
                        parameters: *parameters,
                        cost: *cost,
                        elasticity: *elasticity,
                    },
                ))
            })
            .collect();

        Self {
            sectors: sectors.into(),
            calibration: tables.calibration,
        }
    }

    /// Copy of this snapshot with different calibration constants
    pub fn with_calibration(&self, calibration: CalibrationConstants) -> Result<Self, ConfigError> {
        calibration.validate()?;
        Ok(Self {
            sectors: Arc::clone(&self.sectors),
            calibration,
        })
    }

    pub fn sectors(&self) -> impl ExactSizeIterator<Item = (&SectorId, &SectorInputs)> {
        self.sectors.iter().map(|(id, inputs)| (id, inputs))
    }

    #[must_use]
    pub fn sector(&self, id: &SectorId) -> Option<&SectorInputs> {
        self.sectors
            .iter()
            .find(|(sector, _)| sector == id)
            .map(|(_, inputs)| inputs)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sectors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sectors.is_empty()
    }

    #[must_use]
    pub fn calibration(&self) -> &CalibrationConstants {
        &self.calibration
    }

    /// Rebuild raw tables from this snapshot (for export or further editing)
    #[must_use]
    pub fn to_tables(&self) -> MarketTables {
        MarketTables {
            sectors: self
                .sectors()
                .map(|(id, i)| (id.clone(), i.parameters))
                .collect(),
            costs: self.sectors().map(|(id, i)| (id.clone(), i.cost)).collect(),
            elasticities: self
                .sectors()
                .map(|(id, i)| (id.clone(), i.elasticity))
                .collect(),
            calibration: self.calibration,
        }
    }
}
