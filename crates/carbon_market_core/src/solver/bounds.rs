use serde::Serialize;

use crate::error::ConfigError;

/// Closed carbon price interval `[min, max]` to search for the clearing price
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SearchBounds {
    min: f64,
    max: f64,
}

impl SearchBounds {
    pub const DEFAULT_MIN: f64 = 0.0;
    pub const DEFAULT_MAX: f64 = 200.0;

    /// Both bounds must be finite and `max` strictly greater than `min`
    pub fn new(min: f64, max: f64) -> Result<Self, ConfigError> {
        if !(min.is_finite() && max.is_finite()) || max <= min {
            return Err(ConfigError::InvalidBounds { min, max });
        }
        Ok(Self { min, max })
    }

    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    #[must_use]
    pub fn midpoint(&self) -> f64 {
        f64::midpoint(self.min, self.max)
    }
}

impl Default for SearchBounds {
    fn default() -> Self {
        Self {
            min: Self::DEFAULT_MIN,
            max: Self::DEFAULT_MAX,
        }
    }
}
