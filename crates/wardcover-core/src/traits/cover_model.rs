use crate::models::{CoverOutcome, CoverRequirement, EstimationMethod};

/// A population model able to answer "how likely is cover, and how short
/// are we on average" for a given requirement.
///
/// Degenerate inputs resolve to outcomes, so estimation cannot fail.
pub trait ICoverModel: Send + Sync {
    /// Probability of meeting `requirement` and the expected shortfall per period.
    fn estimate(&self, requirement: &CoverRequirement) -> CoverOutcome;

    /// Whether the model answers exactly or statistically.
    fn method(&self) -> EstimationMethod;

    /// Standard error of `outcome.probability_meets_cover`. Zero for exact models.
    fn standard_error(&self, _outcome: &CoverOutcome) -> f64 {
        0.0
    }
}
