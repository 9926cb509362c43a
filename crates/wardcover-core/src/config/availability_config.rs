use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

/// Assumptions used to derive per-person availability from a roster.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AvailabilityConfig {
    /// Fraction of scheduled days lost to sickness, in [0, 1).
    pub sickness_rate: f64,
    /// Working days per year that development days are measured against.
    pub development_day_basis: f64,
}

impl AvailabilityConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..1.0).contains(&self.sickness_rate) {
            return Err(ConfigError::SicknessRateOutOfRange {
                value: self.sickness_rate,
            });
        }
        if !(self.development_day_basis > 0.0) {
            return Err(ConfigError::NonPositive {
                field: "availability.development_day_basis",
                value: self.development_day_basis,
            });
        }
        Ok(())
    }
}

impl Default for AvailabilityConfig {
    fn default() -> Self {
        Self {
            sickness_rate: defaults::DEFAULT_SICKNESS_RATE,
            development_day_basis: defaults::DEFAULT_DEVELOPMENT_DAY_BASIS,
        }
    }
}
