use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;
use crate::models::PoolSizing;

/// Demand forecast configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastConfig {
    /// Periods per planning cycle (weekday day shifts per year).
    pub periods_per_cycle: f64,
    /// How aggregate scheduled capacity becomes an integer pool size.
    pub pool_sizing: PoolSizing,
}

impl ForecastConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.periods_per_cycle > 0.0) || !self.periods_per_cycle.is_finite() {
            return Err(ConfigError::NonPositive {
                field: "forecast.periods_per_cycle",
                value: self.periods_per_cycle,
            });
        }
        Ok(())
    }
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            periods_per_cycle: defaults::DEFAULT_PERIODS_PER_CYCLE,
            pool_sizing: PoolSizing::default(),
        }
    }
}
