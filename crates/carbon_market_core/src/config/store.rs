use crate::error::ConfigError;
use crate::model::CalibrationConstants;

use super::{CostTable, ElasticityTable, MarketSnapshot, MarketTables, SectorTable, TargetOverrides};

/// Mutable holder for the current parameter tables
///
/// Setters replace a whole table; there is no per-field merge and no
/// validation here. Validation happens in `snapshot()`, which is also the only
/// way simulation code reads the tables, so a run never sees later edits.
#[derive(Debug, Clone)]
pub struct ParameterStore {
    defaults: MarketTables,
    current: MarketTables,
}

impl Default for ParameterStore {
    fn default() -> Self {
        Self::new(MarketTables::baseline())
    }
}

impl ParameterStore {
    /// Create a store whose `reset()` target is `defaults`
    #[must_use]
    pub fn new(defaults: MarketTables) -> Self {
        Self {
            current: defaults.clone(),
            defaults,
        }
    }

    /// Create a store with some target intensities replaced on top of `defaults`.
    ///
    /// The overrides only affect the current tables; `reset()` still returns to
    /// the untouched `defaults`.
    #[must_use]
    pub fn with_target_overrides(defaults: MarketTables, overrides: &TargetOverrides) -> Self {
        let mut store = Self::new(defaults);
        store.update_targets(overrides);
        store
    }

    #[must_use]
    pub fn sector_parameters(&self) -> &SectorTable {
        &self.current.sectors
    }

    pub fn set_sector_parameters(&mut self, sectors: SectorTable) {
        self.current.sectors = sectors;
    }

    #[must_use]
    pub fn cost_parameters(&self) -> &CostTable {
        &self.current.costs
    }

    pub fn set_cost_parameters(&mut self, costs: CostTable) {
        self.current.costs = costs;
    }

    #[must_use]
    pub fn elasticities(&self) -> &ElasticityTable {
        &self.current.elasticities
    }

    pub fn set_elasticities(&mut self, elasticities: ElasticityTable) {
        self.current.elasticities = elasticities;
    }

    #[must_use]
    pub fn calibration(&self) -> &CalibrationConstants {
        &self.current.calibration
    }

    pub fn set_calibration(&mut self, calibration: CalibrationConstants) {
        self.current.calibration = calibration;
    }

    /// Replace target intensities of known sectors in the current tables
    pub fn update_targets(&mut self, overrides: &TargetOverrides) -> usize {
        self.current.apply_target_overrides(overrides)
    }

    #[must_use]
    pub fn tables(&self) -> &MarketTables {
        &self.current
    }

    #[must_use]
    pub fn defaults(&self) -> &MarketTables {
        &self.defaults
    }

    /// Restore every table to the injected defaults
    pub fn reset(&mut self) {
        self.current = self.defaults.clone();
    }

    /// Validate the current tables and take an independent snapshot of them
    pub fn snapshot(&self) -> Result<MarketSnapshot, ConfigError> {
        MarketSnapshot::new(&self.current)
    }
}
