use serde::{Deserialize, Serialize};

use crate::constants::CAPACITY_ROUNDING_EPSILON;
use crate::errors::{CoverError, CoverResult};

/// Capacity that must be present in a period for cover to be met.
///
/// May be a head count or a WTE-equivalent real number. Zero or negative
/// means "no cover required" and is trivially satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoverRequirement {
    pub required_units: f64,
}

impl CoverRequirement {
    /// Build a requirement. NaN and infinite values are rejected.
    pub fn new(required_units: f64) -> CoverResult<Self> {
        if !required_units.is_finite() {
            return Err(CoverError::InvalidInput {
                field: "required_units",
                value: required_units,
                reason: "must be finite",
            });
        }
        Ok(Self { required_units })
    }

    /// Requirement of a whole number of units.
    pub fn units(required_units: u32) -> Self {
        Self {
            required_units: f64::from(required_units),
        }
    }

    /// True when nothing is required.
    pub fn is_trivial(&self) -> bool {
        self.required_units <= 0.0
    }

    /// Whole weight-1 units needed to meet the requirement: `ceil(required_units)`.
    /// Non-positive requirements map to 0.
    pub fn threshold(&self) -> i64 {
        if self.is_trivial() {
            return 0;
        }
        (self.required_units - CAPACITY_ROUNDING_EPSILON).ceil() as i64
    }
}

/// Minimum acceptable probability of meeting cover and the search range
/// considered when looking for the pool size that achieves it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReliabilityTarget {
    pub target_probability: f64,
    pub search_ceiling: u32,
}
