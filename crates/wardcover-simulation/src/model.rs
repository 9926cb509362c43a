use wardcover_core::models::{CoverOutcome, CoverRequirement, EstimationMethod, Population};
use wardcover_core::traits::ICoverModel;

use crate::engine::MonteCarloSimulator;

/// Heterogeneous population evaluated by simulation.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedModel<'a> {
    population: &'a Population,
    simulator: &'a MonteCarloSimulator,
}

impl<'a> SimulatedModel<'a> {
    pub fn new(population: &'a Population, simulator: &'a MonteCarloSimulator) -> Self {
        Self {
            population,
            simulator,
        }
    }

    pub fn population(&self) -> &Population {
        self.population
    }
}

impl ICoverModel for SimulatedModel<'_> {
    fn estimate(&self, requirement: &CoverRequirement) -> CoverOutcome {
        self.simulator
            .simulate(self.population, requirement)
            .outcome()
    }

    fn method(&self) -> EstimationMethod {
        EstimationMethod::Simulated
    }

    /// `sqrt(p̂(1 − p̂)/trial_count)`, as reported by the run's tally.
    fn standard_error(&self, outcome: &CoverOutcome) -> f64 {
        let p = outcome.probability_meets_cover;
        (p * (1.0 - p) / self.simulator.config().trial_count as f64).sqrt()
    }
}
