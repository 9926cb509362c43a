use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

/// Monte-Carlo simulator configuration.
///
/// Results are a pure function of the population, the requirement,
/// `trial_count`, `seed` and `trials_per_shard`. Whether shards run on the
/// thread pool (`parallel`) never changes the numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of simulated periods.
    pub trial_count: u64,
    /// Base seed. Each shard draws from its own ChaCha stream of this seed.
    pub seed: u64,
    /// Simulated periods per shard.
    pub trials_per_shard: u64,
    /// Run shards on the rayon pool.
    pub parallel: bool,
}

impl SimulationConfig {
    /// Config with an explicit trial count and seed, other fields at defaults.
    pub fn new(trial_count: u64, seed: u64) -> Self {
        Self {
            trial_count,
            seed,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.trial_count == 0 {
            return Err(ConfigError::ZeroValue {
                field: "simulation.trial_count",
            });
        }
        if self.trials_per_shard == 0 {
            return Err(ConfigError::ZeroValue {
                field: "simulation.trials_per_shard",
            });
        }
        Ok(())
    }

    /// Number of shards the trial count splits into. The last shard may be short.
    pub fn shard_count(&self) -> u64 {
        if self.trials_per_shard == 0 {
            return 0;
        }
        self.trial_count.div_ceil(self.trials_per_shard)
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            trial_count: defaults::DEFAULT_TRIAL_COUNT,
            seed: defaults::DEFAULT_SEED,
            trials_per_shard: defaults::DEFAULT_TRIALS_PER_SHARD,
            parallel: defaults::DEFAULT_PARALLEL,
        }
    }
}
