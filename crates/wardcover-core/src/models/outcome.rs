use serde::{Deserialize, Serialize};

/// Probability of meeting cover and the mean shortfall per period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoverOutcome {
    pub probability_meets_cover: f64,
    pub expected_shortfall_per_period: f64,
}

impl CoverOutcome {
    /// Outcome when nothing is required.
    pub const TRIVIAL: Self = Self {
        probability_meets_cover: 1.0,
        expected_shortfall_per_period: 0.0,
    };

    /// Outcome when no capacity exists: cover is never met and the whole
    /// requirement is short every period.
    pub fn no_capacity(required_units: f64) -> Self {
        Self {
            probability_meets_cover: 0.0,
            expected_shortfall_per_period: required_units.max(0.0),
        }
    }

    /// Annualize the shortfall over `periods_per_cycle` periods.
    pub fn forecast(&self, periods_per_cycle: f64) -> DemandForecast {
        DemandForecast {
            expected_shortfall_per_period: self.expected_shortfall_per_period,
            periods_per_cycle,
            expected_cover_demand: self.expected_shortfall_per_period * periods_per_cycle,
        }
    }
}

/// Expected temporary-cover demand over a planning cycle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DemandForecast {
    pub expected_shortfall_per_period: f64,
    pub periods_per_cycle: f64,
    /// `expected_shortfall_per_period × periods_per_cycle`, e.g. locum shifts per year.
    pub expected_cover_demand: f64,
}

/// How a cover outcome was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EstimationMethod {
    /// Closed-form binomial kernel.
    Exact,
    /// Monte-Carlo estimate.
    Simulated,
}
