use serde::{Deserialize, Serialize};
use wardcover_core::constants::CAPACITY_ROUNDING_EPSILON;
use wardcover_core::models::CoverOutcome;

/// Running totals over simulated periods.
///
/// Tallies from independently seeded runs merge by summing, which is the
/// trial-weighted average of their estimates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationTally {
    pub trials: u64,
    pub periods_met: u64,
    pub shortfall_sum: f64,
}

impl SimulationTally {
    /// Record one simulated period with `capacity` present against `required`.
    ///
    /// Capacity within `CAPACITY_ROUNDING_EPSILON` of the requirement meets
    /// cover with no shortfall; summed WTE weights carry float roundoff.
    pub fn record(&mut self, capacity: f64, required: f64) {
        self.trials += 1;
        if capacity + CAPACITY_ROUNDING_EPSILON >= required {
            self.periods_met += 1;
        } else {
            self.shortfall_sum += required - capacity;
        }
    }

    /// Tally for `trials` periods that all met cover without shortfall.
    pub fn always_met(trials: u64) -> Self {
        Self {
            trials,
            periods_met: trials,
            shortfall_sum: 0.0,
        }
    }

    /// Tally for `trials` periods with no capacity at all.
    pub fn never_met(trials: u64, required: f64) -> Self {
        Self {
            trials,
            periods_met: 0,
            shortfall_sum: required.max(0.0) * trials as f64,
        }
    }

    pub fn merge(mut self, other: Self) -> Self {
        self.trials += other.trials;
        self.periods_met += other.periods_met;
        self.shortfall_sum += other.shortfall_sum;
        self
    }

    pub fn probability_meets_cover(&self) -> f64 {
        if self.trials == 0 {
            return 0.0;
        }
        self.periods_met as f64 / self.trials as f64
    }

    pub fn expected_shortfall(&self) -> f64 {
        if self.trials == 0 {
            return 0.0;
        }
        self.shortfall_sum / self.trials as f64
    }

    /// Standard error of the cover probability estimate, `sqrt(p̂(1 − p̂)/trials)`.
    pub fn standard_error(&self) -> f64 {
        if self.trials == 0 {
            return 0.0;
        }
        let p = self.probability_meets_cover();
        (p * (1.0 - p) / self.trials as f64).sqrt()
    }

    pub fn outcome(&self) -> CoverOutcome {
        CoverOutcome {
            probability_meets_cover: self.probability_meets_cover(),
            expected_shortfall_per_period: self.expected_shortfall(),
        }
    }
}

impl std::iter::Sum for SimulationTally {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Self::merge)
    }
}
