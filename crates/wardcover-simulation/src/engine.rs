use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use tracing::debug;

use wardcover_core::config::SimulationConfig;
use wardcover_core::errors::{CoverResult, SimulationError};
use wardcover_core::models::{CapacityUnit, CoverRequirement, Population};

use crate::tally::SimulationTally;

/// Seeded Monte-Carlo simulator for heterogeneous populations.
#[derive(Debug, Clone)]
pub struct MonteCarloSimulator {
    config: SimulationConfig,
}

impl MonteCarloSimulator {
    /// Create a simulator, rejecting a zero trial count or shard size.
    pub fn new(config: SimulationConfig) -> CoverResult<Self> {
        if config.trial_count == 0 {
            return Err(SimulationError::NoTrials.into());
        }
        if config.trials_per_shard == 0 {
            return Err(SimulationError::EmptyShard.into());
        }
        Ok(Self { config })
    }

    /// Simulator with `trial_count` periods and an explicit seed.
    pub fn with_seed(trial_count: u64, seed: u64) -> CoverResult<Self> {
        Self::new(SimulationConfig::new(trial_count, seed))
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Simulate `trial_count` periods and tally cover and shortfall.
    ///
    /// A trivial requirement is met every period and an empty population
    /// meets none; neither case draws any random numbers.
    pub fn simulate(
        &self,
        population: &Population,
        requirement: &CoverRequirement,
    ) -> SimulationTally {
        let trials = self.config.trial_count;
        let required = requirement.required_units;
        if requirement.is_trivial() {
            return SimulationTally::always_met(trials);
        }
        if population.is_empty() {
            return SimulationTally::never_met(trials, required);
        }

        let shard_count = self.config.shard_count();
        let _span = tracing::info_span!(
            "wardcover.simulate",
            units = population.len(),
            trials,
            shards = shard_count,
            seed = self.config.seed,
        )
        .entered();

        let units = population.units();
        let run = |shard: u64| self.run_shard(units, required, shard);
        let tally: SimulationTally = if self.config.parallel {
            let tallies: Vec<SimulationTally> =
                (0..shard_count).into_par_iter().map(run).collect();
            tallies.into_iter().sum()
        } else {
            (0..shard_count).map(run).sum()
        };

        debug!(
            probability = tally.probability_meets_cover(),
            shortfall = tally.expected_shortfall(),
            standard_error = tally.standard_error(),
            "simulation complete"
        );
        tally
    }

    /// Periods simulated by `shard`; only the last shard can be short.
    fn shard_trials(&self, shard: u64) -> u64 {
        let start = shard * self.config.trials_per_shard;
        self.config
            .trials_per_shard
            .min(self.config.trial_count.saturating_sub(start))
    }

    fn run_shard(&self, units: &[CapacityUnit], required: f64, shard: u64) -> SimulationTally {
        let mut rng = ChaCha8Rng::seed_from_u64(self.config.seed);
        rng.set_stream(shard);

        let mut tally = SimulationTally::default();
        for _ in 0..self.shard_trials(shard) {
            let capacity: f64 = units
                .iter()
                .filter(|unit| rng.gen::<f64>() < unit.availability_probability().value())
                .map(CapacityUnit::weight)
                .sum();
            tally.record(capacity, required);
        }
        tally
    }
}
