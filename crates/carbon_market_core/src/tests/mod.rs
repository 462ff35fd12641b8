//! Integration tests for the carbon market engine
//!
//! Tests are organized by topic:
//! - `scenarios` - Worked single-sector and baseline market cases
//! - `equilibrium` - Solver termination, degenerate brackets and idempotence
//! - `properties` - Seeded sweeps over random sector parameters

mod scenarios;
