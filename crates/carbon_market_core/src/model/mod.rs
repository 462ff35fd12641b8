mod ids;
mod outcome;
mod sector;

pub use ids::SectorId;
pub use outcome::{MarketOutcome, MarketSummary, NEUTRAL_BAND, NetPosition, SectorOutcome};
pub use sector::{CalibrationConstants, CostParameters, SectorParameters};

pub(crate) use sector::validate_elasticity;
