use wardcover_core::models::{
    CoverOutcome, CoverRequirement, EstimationMethod, PooledSummary, Probability,
};
use wardcover_core::traits::ICoverModel;

use crate::kernel::Binomial;

/// Homogeneous pool evaluated with the exact kernel.
#[derive(Debug, Clone)]
pub struct BinomialModel {
    distribution: Binomial,
}

impl BinomialModel {
    pub fn new(pool_size: u32, probability: impl Into<Probability>) -> Self {
        Self {
            distribution: Binomial::new(pool_size, probability),
        }
    }

    pub fn from_summary(summary: PooledSummary) -> Self {
        Self::new(summary.pool_size, summary.probability)
    }

    pub fn distribution(&self) -> &Binomial {
        &self.distribution
    }

    /// Cover probability and shortfall for `requirement`.
    ///
    /// Cover needs `ceil(required_units)` staff; the shortfall is measured
    /// against the real requirement, so 8.5 required with 8 present is 0.5 short.
    pub fn outcome(&self, requirement: &CoverRequirement) -> CoverOutcome {
        if requirement.is_trivial() {
            return CoverOutcome::TRIVIAL;
        }
        CoverOutcome {
            probability_meets_cover: self.distribution.prob_at_least(requirement.threshold()),
            expected_shortfall_per_period: self
                .distribution
                .expected_deficit(requirement.required_units),
        }
    }
}

impl ICoverModel for BinomialModel {
    fn estimate(&self, requirement: &CoverRequirement) -> CoverOutcome {
        self.outcome(requirement)
    }

    fn method(&self) -> EstimationMethod {
        EstimationMethod::Exact
    }
}
