//! Market configuration
//!
//! Raw parameter tables live in `MarketTables`; `ParameterStore` holds the
//! current tables alongside an injected default; `MarketSnapshot` is the
//! validated, immutable view every simulation run works from.
//!
//! ```ignore
//! use carbon_market_core::config::{ParameterStore, MarketSnapshotBuilder};
//!
//! let mut store = ParameterStore::default();
//! let snapshot = store.snapshot()?;           // validated copy of the baseline
//! store.set_elasticities(Default::default()); // does not affect `snapshot`
//!
//! let custom = MarketSnapshotBuilder::new()
//!     .sector("Steel", steel_params, steel_costs, 0.4)
//!     .abatement_coefficient(50.0)
//!     .build()?;
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::{CalibrationConstants, CostParameters, SectorId, SectorParameters};

mod builder;
mod defaults;
mod snapshot;
mod store;

pub use builder::MarketSnapshotBuilder;
pub use snapshot::{MarketSnapshot, SectorInputs};
pub use store::ParameterStore;

pub type SectorTable = BTreeMap<SectorId, SectorParameters>;
pub type CostTable = BTreeMap<SectorId, CostParameters>;
pub type ElasticityTable = BTreeMap<SectorId, f64>;
/// Partial map of sector -> replacement target intensity
pub type TargetOverrides = BTreeMap<SectorId, f64>;

/// Raw, unvalidated parameter tables
///
/// This is the shape parameter files deserialize into. Nothing here is checked
/// until the tables are turned into a `MarketSnapshot`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketTables {
    pub sectors: SectorTable,
    pub costs: CostTable,
    pub elasticities: ElasticityTable,
    #[serde(default)]
    pub calibration: CalibrationConstants,
}

impl MarketTables {
    /// The built-in baseline dataset
    #[must_use]
    pub fn baseline() -> Self {
        fn table<T: Copy>(rows: &[(&'static str, T)]) -> BTreeMap<SectorId, T> {
            rows.iter()
                .map(|(name, value)| (SectorId::from_static(name), *value))
                .collect()
        }

        Self {
            sectors: table(&defaults::BASELINE_SECTORS),
            costs: table(&defaults::BASELINE_COSTS),
            elasticities: table(&defaults::BASELINE_ELASTICITIES),
            calibration: defaults::BASELINE_CALIBRATION,
        }
    }

    /// Replace target intensities for the named sectors.
    ///
    /// Sectors not present in the sector table are skipped. Returns the number
    /// of targets actually replaced.
    pub fn apply_target_overrides(&mut self, overrides: &TargetOverrides) -> usize {
        let mut applied = 0;
        for (sector, target) in overrides {
            match self.sectors.get_mut(sector) {
                Some(params) => {
                    params.target = *target;
                    applied += 1;
                }
                None => {
                    tracing::warn!(sector = %sector, target, "Ignoring target override for unknown sector");
                }
            }
        }
        applied
    }
}

impl Default for MarketTables {
    fn default() -> Self {
        Self::baseline()
    }
}
