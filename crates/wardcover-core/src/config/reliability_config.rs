use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;
use crate::models::ReliabilityTarget;

/// Reliability search configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReliabilityConfig {
    /// Minimum acceptable probability of meeting cover, in (0, 1).
    pub target_probability: f64,
    /// Largest pool size the search considers.
    pub search_ceiling: u32,
}

impl ReliabilityConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.target_probability > 0.0 && self.target_probability < 1.0) {
            return Err(ConfigError::TargetOutOfRange {
                value: self.target_probability,
            });
        }
        if self.search_ceiling == 0 {
            return Err(ConfigError::ZeroValue {
                field: "reliability.search_ceiling",
            });
        }
        Ok(())
    }

    /// The target as a model value.
    pub fn target(&self) -> ReliabilityTarget {
        ReliabilityTarget {
            target_probability: self.target_probability,
            search_ceiling: self.search_ceiling,
        }
    }
}

impl Default for ReliabilityConfig {
    fn default() -> Self {
        Self {
            target_probability: defaults::DEFAULT_TARGET_PROBABILITY,
            search_ceiling: defaults::DEFAULT_SEARCH_CEILING,
        }
    }
}
