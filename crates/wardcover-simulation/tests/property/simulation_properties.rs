use proptest::prelude::*;
use wardcover_core::config::SimulationConfig;
use wardcover_core::models::{CapacityUnit, CoverRequirement, Population};
use wardcover_simulation::MonteCarloSimulator;

fn arb_unit() -> impl Strategy<Value = CapacityUnit> {
    (0.0f64..2.0, 0.0f64..=1.0).prop_map(|(w, p)| CapacityUnit::new(w, p))
}

fn arb_population() -> impl Strategy<Value = Population> {
    prop::collection::vec(arb_unit(), 0..20).prop_map(Population::new)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn estimates_stay_in_range(
        population in arb_population(),
        required in 0.1f64..20.0,
        seed in any::<u64>(),
    ) {
        let tally = MonteCarloSimulator::with_seed(500, seed)
            .unwrap()
            .simulate(&population, &CoverRequirement::new(required).unwrap());
        let p = tally.probability_meets_cover();
        prop_assert!((0.0..=1.0).contains(&p));
        prop_assert!(tally.expected_shortfall() >= 0.0);
        prop_assert!(tally.expected_shortfall() <= required + 1e-9);
    }

    #[test]
    fn reruns_are_identical(
        population in arb_population(),
        required in 0.1f64..20.0,
        seed in any::<u64>(),
        shard in 1u64..300,
    ) {
        let mut config = SimulationConfig::new(700, seed);
        config.trials_per_shard = shard;
        let sim = MonteCarloSimulator::new(config).unwrap();
        let requirement = CoverRequirement::new(required).unwrap();
        prop_assert_eq!(
            sim.simulate(&population, &requirement),
            sim.simulate(&population, &requirement)
        );
    }

    #[test]
    fn shortfall_at_least_gap_to_full_capacity(
        population in arb_population(),
        required in 0.1f64..20.0,
        seed in any::<u64>(),
    ) {
        let tally = MonteCarloSimulator::with_seed(300, seed)
            .unwrap()
            .simulate(&population, &CoverRequirement::new(required).unwrap());
        // Shortfall can't be smaller than what is missing with everyone present.
        let floor = (required - population.scheduled_capacity()).max(0.0);
        prop_assert!(tally.expected_shortfall() + 1e-9 >= floor);
    }
}
