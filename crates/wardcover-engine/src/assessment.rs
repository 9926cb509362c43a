use serde::{Deserialize, Serialize};
use wardcover_core::models::{
    CoverOutcome, DemandForecast, EstimationMethod, Population, Probability, SearchOutcome,
};

use crate::roster::RosterSummary;

/// The two population shapes the facade accepts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PopulationInput {
    /// `pool_size` weight-1 units sharing one availability probability.
    Pool {
        pool_size: u32,
        probability: Probability,
    },
    /// Per-unit weights and probabilities.
    Units { population: Population },
}

/// Pool size needed for the reliability target and the gap to it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CapacityAssessment {
    /// Pool size the search was measured against.
    pub current_pool: u32,
    /// Availability probability used by the search.
    pub probability: Probability,
    pub search: SearchOutcome,
    /// `max(0, required − current)`; `None` when the target is unreachable
    /// within the search ceiling.
    pub gap: Option<u32>,
    /// True when the search ran on a pooled `(n, p_eff)` approximation of a
    /// heterogeneous population rather than on the population itself.
    pub approximate: bool,
}

impl CapacityAssessment {
    pub fn target_reachable(&self) -> bool {
        self.search.is_found()
    }
}

/// Everything the facade reports for one population and requirement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoverAssessment {
    pub method: EstimationMethod,
    pub outcome: CoverOutcome,
    pub forecast: DemandForecast,
    pub capacity: CapacityAssessment,
    /// Standard error of the cover probability; zero for exact answers.
    pub standard_error: f64,
}

/// Roster totals alongside the cover assessment derived from them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterAssessment {
    pub summary: RosterSummary,
    pub assessment: CoverAssessment,
}
