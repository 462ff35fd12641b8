//! Strategy matrix
//!
//! What-if analysis at a fixed carbon price: instead of letting each sector
//! respond through the abatement and elasticity model, apply four hand-picked
//! combinations of output and intensity changes and compare where each leaves
//! the sector's credit position and profit.

use serde::{Deserialize, Serialize};

use crate::config::{MarketSnapshot, SectorInputs};
use crate::model::{NetPosition, SectorId};
use crate::response::{PROFIT_SCALE, baseline_profit, profit_with_credits};

/// Fractional adjustments applied to baseline output and intensity.
///
/// `output_factor = 0.1` means output is 110% of baseline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrategyAdjustment {
    pub output_factor: f64,
    pub intensity_factor: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quadrant {
    LowerOutputLowerIntensity,
    HigherOutputLowerIntensity,
    LowerOutputHigherIntensity,
    HigherOutputHigherIntensity,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [
        Quadrant::LowerOutputLowerIntensity,
        Quadrant::HigherOutputLowerIntensity,
        Quadrant::LowerOutputHigherIntensity,
        Quadrant::HigherOutputHigherIntensity,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Quadrant::LowerOutputLowerIntensity => "↓ Output, ↓ Intensity",
            Quadrant::HigherOutputLowerIntensity => "↑ Output, ↓ Intensity",
            Quadrant::LowerOutputHigherIntensity => "↓ Output, ↑ Intensity",
            Quadrant::HigherOutputHigherIntensity => "↑ Output, ↑ Intensity",
        }
    }
}

/// Adjustments for each of the four quadrants
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrategyMatrix {
    pub lower_output_lower_intensity: StrategyAdjustment,
    pub higher_output_lower_intensity: StrategyAdjustment,
    pub lower_output_higher_intensity: StrategyAdjustment,
    pub higher_output_higher_intensity: StrategyAdjustment,
}

impl Default for StrategyMatrix {
    fn default() -> Self {
        let adj = |output_factor, intensity_factor| StrategyAdjustment {
            output_factor,
            intensity_factor,
        };
        Self {
            lower_output_lower_intensity: adj(-0.1, -0.1),
            higher_output_lower_intensity: adj(0.1, -0.1),
            lower_output_higher_intensity: adj(-0.1, 0.1),
            higher_output_higher_intensity: adj(0.1, 0.1),
        }
    }
}

impl StrategyMatrix {
    #[must_use]
    pub fn adjustment(&self, quadrant: Quadrant) -> StrategyAdjustment {
        match quadrant {
            Quadrant::LowerOutputLowerIntensity => self.lower_output_lower_intensity,
            Quadrant::HigherOutputLowerIntensity => self.higher_output_lower_intensity,
            Quadrant::LowerOutputHigherIntensity => self.lower_output_higher_intensity,
            Quadrant::HigherOutputHigherIntensity => self.higher_output_higher_intensity,
        }
    }
}

/// Result of one quadrant for one sector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyOutcome {
    pub quadrant: Quadrant,
    pub adjusted_output: f64,
    pub adjusted_intensity: f64,
    pub credit_balance: f64,
    pub net_position: NetPosition,
    pub emissions_reduced: f64,
    /// In millions
    pub profit_change: f64,
    /// In millions
    pub total_profit: f64,
}

/// All four quadrants for one sector, in `Quadrant::ALL` order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorStrategies {
    pub sector: SectorId,
    pub outcomes: Vec<StrategyOutcome>,
}

impl SectorStrategies {
    /// Quadrant with the largest profit change
    #[must_use]
    pub fn most_profitable(&self) -> Option<&StrategyOutcome> {
        self.outcomes
            .iter()
            .max_by(|a, b| a.profit_change.total_cmp(&b.profit_change))
    }

    /// Quadrant with the most emissions reduced
    #[must_use]
    pub fn greenest(&self) -> Option<&StrategyOutcome> {
        self.outcomes
            .iter()
            .max_by(|a, b| a.emissions_reduced.total_cmp(&b.emissions_reduced))
    }
}

/// Evaluate one quadrant for one sector at `carbon_price`
#[must_use]
pub fn evaluate_strategy(
    quadrant: Quadrant,
    adjustment: StrategyAdjustment,
    inputs: &SectorInputs,
    carbon_price: f64,
) -> StrategyOutcome {
    let params = &inputs.parameters;
    let adjusted_output = (params.production * (1.0 + adjustment.output_factor)).max(0.0);
    let adjusted_intensity = (params.intensity * (1.0 + adjustment.intensity_factor)).max(0.0);

    let credit_balance = (params.target - adjusted_intensity) * adjusted_output;
    let emissions_reduced = (params.intensity - adjusted_intensity) * adjusted_output;

    let profit = profit_with_credits(adjusted_output, credit_balance, carbon_price, inputs);
    let profit_change = profit - baseline_profit(inputs);

    StrategyOutcome {
        quadrant,
        adjusted_output,
        adjusted_intensity,
        credit_balance,
        net_position: NetPosition::classify(credit_balance),
        emissions_reduced,
        profit_change: profit_change / PROFIT_SCALE,
        total_profit: profit / PROFIT_SCALE,
    }
}

/// Evaluate every quadrant for every sector in the snapshot
#[must_use]
pub fn analyze_strategies(
    snapshot: &MarketSnapshot,
    matrix: &StrategyMatrix,
    carbon_price: f64,
) -> Vec<SectorStrategies> {
    snapshot
        .sectors()
        .map(|(id, inputs)| SectorStrategies {
            sector: id.clone(),
            outcomes: Quadrant::ALL
                .iter()
                .map(|&q| evaluate_strategy(q, matrix.adjustment(q), inputs, carbon_price))
                .collect(),
        })
        .collect()
}
