use std::fmt;

use crate::model::SectorId;

/// Errors raised when market inputs or solver bounds are misconfigured.
///
/// These are the only failures the engine reports. A price bracket without a
/// sign change or an exhausted iteration budget is communicated through
/// `MarketOutcome::equilibrium_found` instead.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Search interval upper bound is not strictly greater than the lower bound,
    /// or one of the bounds is not finite
    InvalidBounds { min: f64, max: f64 },
    NonPositiveAbatementCoefficient(f64),
    NonPositiveTolerance(f64),
    /// Sector name was empty or whitespace only
    InvalidSectorName(String),
    /// A per-sector value was negative, non-finite or otherwise out of range
    InvalidParameter {
        sector: SectorId,
        field: &'static str,
        value: f64,
    },
    MissingCostParameters(SectorId),
    MissingElasticity(SectorId),
    /// Cost entry present for a sector with no sector parameters
    OrphanCostParameters(SectorId),
    /// Elasticity entry present for a sector with no sector parameters
    OrphanElasticity(SectorId),
    NoSectors,
    /// Price grid requested with invalid bounds or too few steps
    InvalidSweep { min: f64, max: f64, steps: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidBounds { min, max } => {
                write!(
                    f,
                    "invalid price bounds [{min}, {max}]: upper bound must exceed lower bound"
                )
            }
            ConfigError::NonPositiveAbatementCoefficient(k) => {
                write!(f, "abatement cost coefficient must be positive (got {k})")
            }
            ConfigError::NonPositiveTolerance(eps) => {
                write!(f, "convergence tolerance must be positive (got {eps})")
            }
            ConfigError::InvalidSectorName(name) => write!(f, "invalid sector name {name:?}"),
            ConfigError::InvalidParameter {
                sector,
                field,
                value,
            } => write!(f, "sector {sector}: invalid {field} ({value})"),
            ConfigError::MissingCostParameters(sector) => {
                write!(f, "sector {sector} has no cost parameters")
            }
            ConfigError::MissingElasticity(sector) => {
                write!(f, "sector {sector} has no elasticity")
            }
            ConfigError::OrphanCostParameters(sector) => {
                write!(f, "cost parameters given for unknown sector {sector}")
            }
            ConfigError::OrphanElasticity(sector) => {
                write!(f, "elasticity given for unknown sector {sector}")
            }
            ConfigError::NoSectors => write!(f, "market has no sectors"),
            ConfigError::InvalidSweep { min, max, steps } => {
                write!(
                    f,
                    "invalid price sweep: [{min}, {max}] with {steps} steps (need min < max and at least 2 steps)"
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_sector() {
        let err = ConfigError::MissingElasticity(SectorId::new("Steel").unwrap());
        assert_eq!(err.to_string(), "sector Steel has no elasticity");
    }

    #[test]
    fn test_display_bounds() {
        let err = ConfigError::InvalidBounds {
            min: 10.0,
            max: 5.0,
        };
        assert!(err.to_string().contains("[10, 5]"));
    }
}
