//! Convergence tracking for the equilibrium search

use serde::{Deserialize, Serialize};

/// One evaluated price point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConvergenceSample {
    /// 0 and 1 are the bracket endpoints; interior midpoints follow from 2
    pub iteration: usize,
    pub price: f64,
    /// Market credit balance `B(price)`
    pub balance: f64,
}

/// Receives every price point the solver evaluates, in evaluation order.
///
/// Observers see the search but cannot influence it.
pub trait SolverObserver {
    fn observe(&mut self, sample: ConvergenceSample);
}

impl<F> SolverObserver for F
where
    F: FnMut(ConvergenceSample),
{
    fn observe(&mut self, sample: ConvergenceSample) {
        self(sample);
    }
}

/// Recorded samples of one solver run
///
/// Consuming it with `into_iter()` yields the samples once, in evaluation order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConvergenceHistory {
    samples: Vec<ConvergenceSample>,
}

impl ConvergenceHistory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn samples(&self) -> &[ConvergenceSample] {
        &self.samples
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

impl SolverObserver for ConvergenceHistory {
    fn observe(&mut self, sample: ConvergenceSample) {
        self.samples.push(sample);
    }
}

impl IntoIterator for ConvergenceHistory {
    type Item = ConvergenceSample;
    type IntoIter = std::vec::IntoIter<ConvergenceSample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.into_iter()
    }
}
