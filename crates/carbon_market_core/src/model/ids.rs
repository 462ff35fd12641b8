//! Sector identifiers
//!
//! Sector tables are keyed by `SectorId` rather than raw strings so that every
//! lookup goes through a name that was validated once, at construction.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Validated name of an industrial sector (non-empty, no surrounding whitespace)
///
/// Names are not normalised: `"Steel"` and `" Steel "` would otherwise collapse
/// into one table key and silently replace each other.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SectorId(String);

impl SectorId {
    pub fn new(name: impl AsRef<str>) -> Result<Self, ConfigError> {
        let name = name.as_ref();
        if name.trim().is_empty() || name.trim() != name {
            return Err(ConfigError::InvalidSectorName(name.to_string()));
        }
        Ok(Self(name.to_string()))
    }

    /// Names baked into the crate's own tables are known to be valid.
    pub(crate) fn from_static(name: &'static str) -> Self {
        Self(name.to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SectorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for SectorId {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for SectorId {
    type Error = ConfigError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SectorId> for String {
    fn from(id: SectorId) -> Self {
        id.0
    }
}

impl AsRef<str> for SectorId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
