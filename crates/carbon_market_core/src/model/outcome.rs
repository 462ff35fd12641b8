//! Market outcome types
//!
//! `MarketOutcome` is the complete contract handed to presentation and export
//! layers. Everything they display must be derivable from these fields.

use serde::{Deserialize, Serialize};

use super::ids::SectorId;

/// Credit balance magnitude (Mt) below which a sector is labelled `Neutral`
pub const NEUTRAL_BAND: f64 = 1.0;

/// Direction of a sector's participation in the credit market
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NetPosition {
    /// Surplus credits to sell
    Seller,
    /// Deficit to cover by buying credits
    Buyer,
    Neutral,
}

impl NetPosition {
    /// Classify a signed credit balance, with a +/-1 Mt dead band around zero
    #[must_use]
    pub fn classify(credit_balance: f64) -> Self {
        if credit_balance > NEUTRAL_BAND {
            NetPosition::Seller
        } else if credit_balance < -NEUTRAL_BAND {
            NetPosition::Buyer
        } else {
            NetPosition::Neutral
        }
    }
}

/// Response of a single sector at one carbon price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorOutcome {
    pub sector: SectorId,
    pub baseline_intensity: f64,
    pub new_intensity: f64,
    pub baseline_production: f64,
    pub adjusted_production: f64,
    pub emissions_reduced: f64,
    /// Signed credit position: positive = surplus, negative = deficit
    pub credit_balance: f64,
    pub net_position: NetPosition,
    /// Profit change versus baseline, in millions of currency units
    pub profit_change: f64,
    /// Profit at the new operating point, in millions of currency units
    pub total_profit: f64,
}

/// Market-wide result at one carbon price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketOutcome {
    pub carbon_price: f64,
    /// One entry per sector, in snapshot iteration order
    pub sectors: Vec<SectorOutcome>,
    pub total_emissions_reduced: f64,
    pub total_credit_balance: f64,
    pub equilibrium_found: bool,
    /// Bisection iterations; only set when the outcome came from the solver
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iterations: Option<usize>,
}

impl MarketOutcome {
    #[must_use]
    pub fn sector(&self, id: &SectorId) -> Option<&SectorOutcome> {
        self.sectors.iter().find(|s| &s.sector == id)
    }

    #[must_use]
    pub fn summary(&self) -> MarketSummary {
        MarketSummary::from_outcome(self)
    }
}

/// Headline figures derived from a `MarketOutcome`
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketSummary {
    pub buyers: usize,
    pub sellers: usize,
    pub neutral: usize,
    /// Sum of sector profit changes, in millions
    pub total_profit_change: f64,
    /// Credits offered by net sellers
    pub credits_supplied: f64,
    /// Credits needed by net buyers (reported as a positive quantity)
    pub credits_demanded: f64,
}

impl MarketSummary {
    #[must_use]
    pub fn from_outcome(outcome: &MarketOutcome) -> Self {
        outcome
            .sectors
            .iter()
            .fold(Self::default(), |mut acc, s| {
                match s.net_position {
                    NetPosition::Seller => {
                        acc.sellers += 1;
                        acc.credits_supplied += s.credit_balance;
                    }
                    NetPosition::Buyer => {
                        acc.buyers += 1;
                        acc.credits_demanded -= s.credit_balance;
                    }
                    NetPosition::Neutral => acc.neutral += 1,
                }
                acc.total_profit_change += s.profit_change;
                acc
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sector(name: &str, balance: f64, profit_change: f64) -> SectorOutcome {
        SectorOutcome {
            sector: SectorId::new(name).unwrap(),
            baseline_intensity: 1.0,
            new_intensity: 1.0,
            baseline_production: 10.0,
            adjusted_production: 10.0,
            emissions_reduced: 0.0,
            credit_balance: balance,
            net_position: NetPosition::classify(balance),
            profit_change,
            total_profit: 0.0,
        }
    }

    #[test]
    fn test_classify_dead_band() {
        assert_eq!(NetPosition::classify(1.0), NetPosition::Neutral);
        assert_eq!(NetPosition::classify(-1.0), NetPosition::Neutral);
        assert_eq!(NetPosition::classify(0.0), NetPosition::Neutral);
        assert_eq!(NetPosition::classify(1.0001), NetPosition::Seller);
        assert_eq!(NetPosition::classify(-1.0001), NetPosition::Buyer);
    }

    #[test]
    fn test_summary_counts_and_flows() {
        let outcome = MarketOutcome {
            carbon_price: 40.0,
            sectors: vec![
                sector("A", 12.0, 1.5),
                sector("B", -7.0, -0.5),
                sector("C", 0.3, 0.0),
            ],
            total_emissions_reduced: 0.0,
            total_credit_balance: 5.3,
            equilibrium_found: false,
            iterations: None,
        };

        let summary = outcome.summary();
        assert_eq!(summary.sellers, 1);
        assert_eq!(summary.buyers, 1);
        assert_eq!(summary.neutral, 1);
        assert!((summary.credits_supplied - 12.0).abs() < 1e-12);
        assert!((summary.credits_demanded - 7.0).abs() < 1e-12);
        assert!((summary.total_profit_change - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_iterations_omitted_when_absent() {
        let outcome = MarketOutcome {
            carbon_price: 0.0,
            sectors: vec![],
            total_emissions_reduced: 0.0,
            total_credit_balance: 0.0,
            equilibrium_found: true,
            iterations: None,
        };
        let json = serde_json::to_string(&outcome).unwrap();
        assert!(!json.contains("iterations"));
    }
}
