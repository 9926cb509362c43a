//! CoverEngine: picks a cover model for the population, forecasts demand,
//! and reports the capacity gap to the reliability target.

use tracing::{debug, info, warn};

use wardcover_binomial::{required_pool_size_with, BinomialModel, SearchStrategy};
use wardcover_core::config::WardCoverConfig;
use wardcover_core::errors::CoverResult;
use wardcover_core::models::{
    CoverOutcome, CoverRequirement, DemandForecast, Population, PooledSummary, Probability,
};
use wardcover_core::staff::StaffGroupRecord;
use wardcover_core::traits::ICoverModel;
use wardcover_simulation::{MonteCarloSimulator, SimulatedModel};

use crate::assessment::{CapacityAssessment, CoverAssessment, PopulationInput, RosterAssessment};
use crate::roster::{roster_population, RosterSummary};

/// Cover reliability facade.
#[derive(Debug, Clone)]
pub struct CoverEngine {
    config: WardCoverConfig,
    simulator: MonteCarloSimulator,
    strategy: SearchStrategy,
}

impl CoverEngine {
    /// Create an engine from a validated config.
    pub fn new(config: WardCoverConfig) -> CoverResult<Self> {
        config.validate()?;
        let simulator = MonteCarloSimulator::new(config.simulation.clone())?;
        Ok(Self {
            config,
            simulator,
            strategy: SearchStrategy::default(),
        })
    }

    /// Use a different reliability search strategy.
    pub fn with_search_strategy(mut self, strategy: SearchStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn config(&self) -> &WardCoverConfig {
        &self.config
    }

    /// Assess either population shape.
    pub fn assess(
        &self,
        input: &PopulationInput,
        requirement: &CoverRequirement,
    ) -> CoverAssessment {
        match input {
            PopulationInput::Pool {
                pool_size,
                probability,
            } => self.assess_pool(*pool_size, *probability, requirement),
            PopulationInput::Units { population } => {
                self.assess_population(population, requirement)
            }
        }
    }

    /// Exact assessment of `pool_size` weight-1 units with availability `probability`.
    pub fn assess_pool(
        &self,
        pool_size: u32,
        probability: impl Into<Probability>,
        requirement: &CoverRequirement,
    ) -> CoverAssessment {
        let summary = PooledSummary {
            pool_size,
            probability: probability.into(),
        };
        let _span = tracing::info_span!(
            "wardcover.assess",
            method = "exact",
            pool_size,
            probability = summary.probability.value(),
            required = requirement.required_units,
        )
        .entered();

        let model = BinomialModel::from_summary(summary);
        self.finish(&model, summary, false, requirement)
    }

    /// Assess a population: exactly when it is homogeneous, by simulation otherwise.
    ///
    /// For heterogeneous populations the capacity search runs on the pooled
    /// `(n, p_eff)` approximation and is flagged as approximate.
    pub fn assess_population(
        &self,
        population: &Population,
        requirement: &CoverRequirement,
    ) -> CoverAssessment {
        if let Some(summary) = population.as_homogeneous() {
            debug!(pool_size = summary.pool_size, "population is homogeneous");
            return self.assess_pool(summary.pool_size, summary.probability, requirement);
        }

        let summary = population.pooled_summary(self.config.forecast.pool_sizing);
        let _span = tracing::info_span!(
            "wardcover.assess",
            method = "simulated",
            units = population.len(),
            required = requirement.required_units,
        )
        .entered();

        let model = SimulatedModel::new(population, &self.simulator);
        self.finish(&model, summary, true, requirement)
    }

    /// Pooled homogeneous assessment of a roster: `n` from scheduled ward WTE
    /// under the configured pool sizing, `p` from expected over scheduled WTE.
    pub fn assess_roster(
        &self,
        records: &[StaffGroupRecord],
        requirement: &CoverRequirement,
    ) -> RosterAssessment {
        let summary = RosterSummary::from_records(records, &self.config.availability);
        let pooled = summary.pooled_summary(self.config.forecast.pool_sizing);
        info!(
            headcount = summary.totals.headcount,
            scheduled_wte = summary.totals.scheduled_ward_wte,
            expected_wte = summary.totals.expected_ward_wte,
            pool_size = pooled.pool_size,
            probability = pooled.probability.value(),
            "roster pooled"
        );
        let assessment = self.assess_pool(pooled.pool_size, pooled.probability, requirement);
        RosterAssessment {
            summary,
            assessment,
        }
    }

    /// Simulated assessment of a roster with one unit per person, keeping
    /// each group's own WTE and availability.
    pub fn assess_roster_heterogeneous(
        &self,
        records: &[StaffGroupRecord],
        requirement: &CoverRequirement,
    ) -> RosterAssessment {
        let summary = RosterSummary::from_records(records, &self.config.availability);
        let population = roster_population(records, &self.config.availability);
        let assessment = self.assess_population(&population, requirement);
        RosterAssessment {
            summary,
            assessment,
        }
    }

    /// Shortfall per period scaled to the configured planning cycle.
    pub fn forecast(&self, outcome: &CoverOutcome) -> DemandForecast {
        outcome.forecast(self.config.forecast.periods_per_cycle)
    }

    /// Pool size needed to meet the configured reliability target, and the
    /// gap from `current`.
    pub fn capacity_for(
        &self,
        current: PooledSummary,
        requirement: &CoverRequirement,
    ) -> CapacityAssessment {
        let target = self.config.reliability.target();
        let _span = tracing::info_span!(
            "wardcover.search",
            target = target.target_probability,
            ceiling = target.search_ceiling,
        )
        .entered();

        let search = required_pool_size_with(
            self.strategy,
            requirement.threshold(),
            current.probability,
            &target,
        );
        let gap = search.capacity_gap(current.pool_size);
        if gap.is_none() {
            warn!(
                ceiling = target.search_ceiling,
                probability = current.probability.value(),
                "reliability target unreachable within search ceiling"
            );
        }
        CapacityAssessment {
            current_pool: current.pool_size,
            probability: current.probability,
            search,
            gap,
            approximate: false,
        }
    }

    fn finish(
        &self,
        model: &dyn ICoverModel,
        summary: PooledSummary,
        approximate: bool,
        requirement: &CoverRequirement,
    ) -> CoverAssessment {
        let outcome = model.estimate(requirement);
        let forecast = self.forecast(&outcome);
        let capacity = CapacityAssessment {
            approximate,
            ..self.capacity_for(summary, requirement)
        };
        debug!(
            probability = outcome.probability_meets_cover,
            shortfall = outcome.expected_shortfall_per_period,
            demand = forecast.expected_cover_demand,
            "assessment complete"
        );
        CoverAssessment {
            method: model.method(),
            outcome,
            forecast,
            capacity,
            standard_error: model.standard_error(&outcome),
        }
    }
}
