//! Bisection search for the market-clearing carbon price
//!
//! The search assumes the market balance moves from deficit to surplus as the
//! price rises: a surplus at the midpoint lowers the ceiling and a deficit
//! raises the floor. Parameter sets where that does not hold can bracket a
//! root the search never reaches; that is a limitation of the model.

use serde::{Deserialize, Serialize};

use crate::config::MarketSnapshot;
use crate::market::simulate_at_price;
use crate::model::MarketOutcome;

use super::bounds::SearchBounds;
use super::history::{ConvergenceSample, SolverObserver};

/// Solver progress. Only the last four are ever reported as a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SolverState {
    NotStarted,
    BracketChecked,
    /// Balance has the same sign at both bounds
    NotBracketed,
    Iterating,
    /// A midpoint balance fell within tolerance
    Converged,
    /// Bracket narrowed below tolerance without an accepted midpoint
    IntervalBelowTolerance,
    MaxIterationsReached,
}

impl SolverState {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            SolverState::NotBracketed
                | SolverState::Converged
                | SolverState::IntervalBelowTolerance
                | SolverState::MaxIterationsReached
        )
    }
}

/// Outcome of a solver run together with the state it terminated in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolveReport {
    pub outcome: MarketOutcome,
    pub state: SolverState,
}

/// Run the bisection search, reporting every evaluated price to `observer`.
///
/// Never fails: an unbracketed interval or an exhausted iteration budget is
/// reported through `outcome.equilibrium_found` and `state`.
pub fn solve<O>(snapshot: &MarketSnapshot, bounds: SearchBounds, observer: &mut O) -> SolveReport
where
    O: SolverObserver + ?Sized,
{
    let epsilon = snapshot.calibration().tolerance;
    let max_iterations = snapshot.calibration().max_iterations;
    let mut low = bounds.min();
    let mut high = bounds.max();
    let mut state = SolverState::NotStarted;

    let low_balance = simulate_at_price(snapshot, low).total_credit_balance;
    let high_balance = simulate_at_price(snapshot, high).total_credit_balance;
    observer.observe(ConvergenceSample {
        iteration: 0,
        price: low,
        balance: low_balance,
    });
    observer.observe(ConvergenceSample {
        iteration: 1,
        price: high,
        balance: high_balance,
    });
    advance(&mut state, SolverState::BracketChecked);

    tracing::debug!(
        p_min = low,
        p_max = high,
        b_min = low_balance,
        b_max = high_balance,
        "Checked equilibrium bracket"
    );

    if low_balance * high_balance > 0.0 {
        advance(&mut state, SolverState::NotBracketed);
        let mut outcome = simulate_at_price(snapshot, bounds.midpoint());
        outcome.equilibrium_found = false;
        outcome.iterations = Some(0);
        return SolveReport { outcome, state };
    }

    advance(&mut state, SolverState::Iterating);
    let mut iterations = 0;

    while (high - low) > epsilon && iterations < max_iterations {
        let mid = f64::midpoint(low, high);
        let mut outcome = simulate_at_price(snapshot, mid);
        let balance = outcome.total_credit_balance;

        observer.observe(ConvergenceSample {
            iteration: iterations + 2,
            price: mid,
            balance,
        });
        tracing::trace!(iteration = iterations, price = mid, balance, "Bisection step");

        if balance.abs() < epsilon {
            advance(&mut state, SolverState::Converged);
            outcome.equilibrium_found = true;
            outcome.iterations = Some(iterations);
            return SolveReport { outcome, state };
        }

        if balance > 0.0 {
            // Net surplus: price too high
            high = mid;
        } else {
            // Net deficit: price too low
            low = mid;
        }
        iterations += 1;
    }

    let terminal = if (high - low) <= epsilon {
        SolverState::IntervalBelowTolerance
    } else {
        SolverState::MaxIterationsReached
    };
    advance(&mut state, terminal);

    // simulate_at_price already sets equilibrium_found from the tolerance check.
    let mut outcome = simulate_at_price(snapshot, f64::midpoint(low, high));
    outcome.iterations = Some(iterations);
    SolveReport { outcome, state }
}

fn advance(state: &mut SolverState, next: SolverState) {
    debug_assert!(!state.is_terminal(), "solver already finished in {state:?}");
    if next.is_terminal() {
        tracing::debug!(from = ?state, to = ?next, "Equilibrium search finished");
    }
    *state = next;
}
