pub mod availability_config;
pub mod defaults;
pub mod forecast_config;
pub mod observability_config;
pub mod reliability_config;
pub mod simulation_config;

pub use availability_config::AvailabilityConfig;
pub use forecast_config::ForecastConfig;
pub use observability_config::ObservabilityConfig;
pub use reliability_config::ReliabilityConfig;
pub use simulation_config::SimulationConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{ConfigError, CoverResult};

/// Top-level configuration aggregating every subsystem config.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WardCoverConfig {
    pub reliability: ReliabilityConfig,
    pub simulation: SimulationConfig,
    pub forecast: ForecastConfig,
    pub availability: AvailabilityConfig,
    pub observability: ObservabilityConfig,
}

impl WardCoverConfig {
    /// Parse a TOML string. Missing sections and fields fall back to defaults.
    /// The parsed config is validated before it is returned.
    pub fn from_toml(input: &str) -> CoverResult<Self> {
        let config: Self = toml::from_str(input).map_err(|e| ConfigError::Parse {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize back to TOML.
    pub fn to_toml(&self) -> CoverResult<String> {
        toml::to_string(self).map_err(|e| {
            ConfigError::Serialize {
                reason: e.to_string(),
            }
            .into()
        })
    }

    /// Check every subsystem config for out-of-range values.
    pub fn validate(&self) -> CoverResult<()> {
        self.reliability.validate()?;
        self.simulation.validate()?;
        self.forecast.validate()?;
        self.availability.validate()?;
        Ok(())
    }
}
