//! Equilibrium price search
//!
//! Finds the carbon price at which aggregate credit surplus equals aggregate
//! deficit. There is one bisection implementation; tracking is done by passing
//! an observer.
//!
//! # Example
//!
//! ```ignore
//! use carbon_market_core::config::MarketSnapshot;
//! use carbon_market_core::solver::{find_equilibrium, find_equilibrium_with_tracking};
//!
//! let snapshot = MarketSnapshot::baseline();
//! let outcome = find_equilibrium(&snapshot, 0.0, 200.0)?;
//! println!("clearing price: {:.2}", outcome.carbon_price);
//!
//! let (outcome, history) = find_equilibrium_with_tracking(&snapshot, 0.0, 200.0)?;
//! for sample in history {
//!     println!("{} {:.4} {:.4}", sample.iteration, sample.price, sample.balance);
//! }
//! ```

mod bisection;
mod bounds;
mod history;

pub use bisection::{SolveReport, SolverState, solve};
pub use bounds::SearchBounds;
pub use history::{ConvergenceHistory, ConvergenceSample, SolverObserver};

use crate::config::MarketSnapshot;
use crate::error::ConfigError;
use crate::model::MarketOutcome;

/// Search `[p_min, p_max]` for the clearing price.
///
/// Errors only for an invalid interval; see `solve` for the non-error outcomes.
pub fn find_equilibrium(
    snapshot: &MarketSnapshot,
    p_min: f64,
    p_max: f64,
) -> Result<MarketOutcome, ConfigError> {
    let bounds = SearchBounds::new(p_min, p_max)?;
    Ok(solve(snapshot, bounds, &mut |_: ConvergenceSample| {}).outcome)
}

/// Like `find_equilibrium`, also returning every evaluated price point
pub fn find_equilibrium_with_tracking(
    snapshot: &MarketSnapshot,
    p_min: f64,
    p_max: f64,
) -> Result<(MarketOutcome, ConvergenceHistory), ConfigError> {
    let bounds = SearchBounds::new(p_min, p_max)?;
    let mut history = ConvergenceHistory::new();
    let report = solve(snapshot, bounds, &mut history);
    Ok((report.outcome, history))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_bounds_rejected_before_evaluation() {
        let snapshot = MarketSnapshot::baseline();
        assert_eq!(
            find_equilibrium(&snapshot, 100.0, 100.0),
            Err(ConfigError::InvalidBounds {
                min: 100.0,
                max: 100.0
            })
        );
        assert!(find_equilibrium_with_tracking(&snapshot, 5.0, 1.0).is_err());
    }

    #[test]
    fn test_tracking_does_not_change_result() {
        let snapshot = MarketSnapshot::baseline();
        let plain = find_equilibrium(&snapshot, 0.0, 200.0).unwrap();
        let (tracked, history) = find_equilibrium_with_tracking(&snapshot, 0.0, 200.0).unwrap();

        assert_eq!(plain, tracked);

        // Two endpoints, one sample per narrowing, plus the accepted midpoint if any.
        let report = solve(&snapshot, SearchBounds::default(), &mut |_: ConvergenceSample| {});
        let iterations = tracked.iterations.unwrap();
        let accepted = usize::from(report.state == SolverState::Converged);
        assert_eq!(history.len(), 2 + iterations + accepted);
    }
}
