//! Carbon credit market equilibrium library
//!
//! This crate models a cap-and-trade (baseline-and-credit) carbon market over a
//! set of industrial sectors. It supports:
//! - Per-sector response to a carbon price (abatement, output, credits, profit)
//! - Market-wide aggregation of credit surplus and deficit
//! - Bisection search for the market-clearing carbon price, with optional tracking
//! - Price sweeps, a what-if strategy matrix and scenario comparison
//!
//! # Example
//!
//! ```ignore
//! use carbon_market_core::config::ParameterStore;
//! use carbon_market_core::market::simulate_at_price;
//! use carbon_market_core::solver::find_equilibrium;
//!
//! let store = ParameterStore::default();
//! let snapshot = store.snapshot()?;
//!
//! let at_fifty = simulate_at_price(&snapshot, 50.0);
//! let clearing = find_equilibrium(&snapshot, 0.0, 200.0)?;
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod error;
pub mod market;
pub mod response;
pub mod solver;

// ============================================================================
// Analysis modules
// ============================================================================

pub mod scenario;
pub mod strategy;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod config;
pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use config::{MarketSnapshot, MarketSnapshotBuilder, MarketTables, ParameterStore};
pub use error::ConfigError;
pub use market::simulate_at_price;
pub use model::{MarketOutcome, NetPosition, SectorId, SectorOutcome};
pub use solver::{SearchBounds, find_equilibrium, find_equilibrium_with_tracking};
