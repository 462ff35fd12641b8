//! Per-sector input records and global calibration constants

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

use super::ids::SectorId;

/// Physical baseline of a sector
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectorParameters {
    /// Baseline emissions in Mt CO2. Informational only, never used by the model.
    #[serde(default, alias = "emissions")]
    pub baseline_emissions: f64,

    /// Baseline production `Q0` (must be > 0)
    pub production: f64,

    /// Baseline emissions intensity `e0` in tCO2/unit
    pub intensity: f64,

    /// Target (benchmark) intensity `tau` in tCO2/unit
    pub target: f64,
}

impl SectorParameters {
    pub(crate) fn validate(&self, sector: &SectorId) -> Result<(), ConfigError> {
        if !(self.production.is_finite() && self.production > 0.0) {
            return Err(invalid(sector, "production", self.production));
        }
        non_negative(sector, "intensity", self.intensity)?;
        non_negative(sector, "target", self.target)?;
        if !self.baseline_emissions.is_finite() {
            return Err(invalid(sector, "baseline_emissions", self.baseline_emissions));
        }
        Ok(())
    }
}

/// Unit economics of a sector, in currency units per unit of output
/// (fixed cost is per period)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostParameters {
    pub fixed_cost: f64,
    pub variable_cost: f64,
    /// Product price per unit
    pub price: f64,
}

impl CostParameters {
    pub(crate) fn validate(&self, sector: &SectorId) -> Result<(), ConfigError> {
        non_negative(sector, "fixed_cost", self.fixed_cost)?;
        non_negative(sector, "variable_cost", self.variable_cost)?;
        non_negative(sector, "price", self.price)
    }

    /// Per-unit margin before any carbon cost
    #[must_use]
    pub fn unit_margin(&self) -> f64 {
        self.price - self.variable_cost
    }
}

pub(crate) fn validate_elasticity(sector: &SectorId, alpha: f64) -> Result<(), ConfigError> {
    // Elasticities outside 0..1 are unusual but legal; only garbage is rejected.
    if alpha.is_finite() {
        Ok(())
    } else {
        Err(invalid(sector, "elasticity", alpha))
    }
}

fn non_negative(sector: &SectorId, field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(invalid(sector, field, value))
    }
}

fn invalid(sector: &SectorId, field: &'static str, value: f64) -> ConfigError {
    ConfigError::InvalidParameter {
        sector: sector.clone(),
        field,
        value,
    }
}

fn default_abatement_coefficient() -> f64 {
    CalibrationConstants::BASELINE.abatement_coefficient
}

fn default_tolerance() -> f64 {
    CalibrationConstants::BASELINE.tolerance
}

fn default_max_iterations() -> usize {
    CalibrationConstants::BASELINE.max_iterations
}

/// Global calibration shared by every sector and by the equilibrium search
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalibrationConstants {
    /// Abatement cost coefficient `k`. Intensity falls by `P / (2k)` at carbon price `P`.
    #[serde(default = "default_abatement_coefficient")]
    pub abatement_coefficient: f64,

    /// Convergence tolerance `epsilon` on the market balance and on the bracket width
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,

    /// Maximum bisection iterations
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,
}

impl CalibrationConstants {
    pub const BASELINE: Self = Self {
        abatement_coefficient: 50.0,
        tolerance: 1e-4,
        max_iterations: 100,
    };

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.abatement_coefficient.is_finite() && self.abatement_coefficient > 0.0) {
            return Err(ConfigError::NonPositiveAbatementCoefficient(
                self.abatement_coefficient,
            ));
        }
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(ConfigError::NonPositiveTolerance(self.tolerance));
        }
        Ok(())
    }
}

impl Default for CalibrationConstants {
    fn default() -> Self {
        Self::BASELINE
    }
}
