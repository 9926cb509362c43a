use serde::{Deserialize, Serialize};
use std::fmt;

/// Availability probability clamped to [0.0, 1.0].
///
/// Upstream ratios can drift slightly outside the unit interval through
/// floating-point roundoff, so construction clamps instead of failing.
/// NaN maps to 0.0.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Probability(f64);

impl Probability {
    pub const ZERO: Self = Self(0.0);
    pub const ONE: Self = Self(1.0);

    /// Create a new Probability, clamping to [0.0, 1.0].
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::ZERO;
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// Get the raw f64 value.
    pub fn value(self) -> f64 {
        self.0
    }

    /// Probability of the complementary event.
    pub fn complement(self) -> Self {
        Self(1.0 - self.0)
    }

    /// Ratio of two non-negative quantities as a probability.
    /// A non-positive denominator yields 0.
    pub fn from_ratio(numerator: f64, denominator: f64) -> Self {
        if denominator > 0.0 {
            Self::new(numerator / denominator)
        } else {
            Self::ZERO
        }
    }
}

impl Default for Probability {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Probability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}", self.0)
    }
}

impl From<f64> for Probability {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Probability> for f64 {
    fn from(p: Probability) -> Self {
        p.0
    }
}
