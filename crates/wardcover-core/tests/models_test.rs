use wardcover_core::models::*;

#[test]
fn probability_clamps_out_of_range_values() {
    assert_eq!(Probability::new(1.0000001).value(), 1.0);
    assert_eq!(Probability::new(-0.01).value(), 0.0);
    assert_eq!(Probability::new(f64::NAN).value(), 0.0);
    assert_eq!(Probability::new(0.25).complement().value(), 0.75);
}

#[test]
fn probability_from_ratio_handles_zero_denominator() {
    assert_eq!(Probability::from_ratio(3.0, 0.0), Probability::ZERO);
    assert_eq!(Probability::from_ratio(9.5, 10.0).value(), 0.95);
    assert_eq!(Probability::from_ratio(11.0, 10.0), Probability::ONE);
}

#[test]
fn probability_deserializes_with_clamping() {
    let p: Probability = serde_json::from_str("1.2").unwrap();
    assert_eq!(p, Probability::ONE);
}

#[test]
fn capacity_unit_never_has_negative_weight() {
    let unit = CapacityUnit::new(-2.0, 0.5);
    assert_eq!(unit.weight(), 0.0);
    let unit = CapacityUnit::new(f64::NAN, 0.5);
    assert_eq!(unit.weight(), 0.0);

    let unit: CapacityUnit =
        serde_json::from_str(r#"{"weight": -1.0, "availability_probability": 1.5}"#).unwrap();
    assert_eq!(unit.weight(), 0.0);
    assert_eq!(unit.availability_probability(), Probability::ONE);
}

#[test]
fn homogeneous_population_collapses_to_pool() {
    let population = Population::homogeneous(9, 0.9);
    let pooled = population.as_homogeneous().unwrap();
    assert_eq!(pooled.pool_size, 9);
    assert_eq!(pooled.probability.value(), 0.9);
    assert!((population.expected_capacity() - 8.1).abs() < 1e-12);
}

#[test]
fn mixed_population_is_not_homogeneous() {
    let population: Population = [CapacityUnit::whole(0.9), CapacityUnit::whole(0.8)]
        .into_iter()
        .collect();
    assert!(!population.is_homogeneous());

    let weighted = Population::new(vec![CapacityUnit::new(0.6, 0.9), CapacityUnit::new(0.6, 0.9)]);
    assert!(!weighted.is_homogeneous());
}

#[test]
fn empty_population_is_homogeneous_with_no_pool() {
    let pooled = Population::default().as_homogeneous().unwrap();
    assert_eq!(pooled.pool_size, 0);
}

#[test]
fn pooled_summary_uses_expected_over_scheduled() {
    let population = Population::new(vec![
        CapacityUnit::new(1.0, 0.9),
        CapacityUnit::new(1.0, 0.7),
        CapacityUnit::new(0.5, 1.0),
    ]);
    let pooled = population.pooled_summary(PoolSizing::Floor);
    assert_eq!(pooled.pool_size, 2);
    assert!((pooled.probability.value() - 2.1 / 2.5).abs() < 1e-12);

    let nearest = population.pooled_summary(PoolSizing::Nearest);
    assert_eq!(nearest.pool_size, 3);
}

#[test]
fn pool_sizing_floor_tolerates_roundoff() {
    assert_eq!(PoolSizing::Floor.pool_size(8.999_999_999_9), 9);
    assert_eq!(PoolSizing::Floor.pool_size(9.7), 9);
    assert_eq!(PoolSizing::Nearest.pool_size(9.5), 10);
    assert_eq!(PoolSizing::Nearest.pool_size(9.4), 9);
    assert_eq!(PoolSizing::Floor.pool_size(-3.0), 0);
    assert_eq!(PoolSizing::Floor.pool_size(f64::NAN), 0);
}

#[test]
fn requirement_threshold_is_whole_units_needed() {
    assert_eq!(CoverRequirement::units(9).threshold(), 9);
    assert_eq!(CoverRequirement::new(8.5).unwrap().threshold(), 9);
    assert_eq!(CoverRequirement::new(9.000_000_000_1).unwrap().threshold(), 9);
    assert_eq!(CoverRequirement::new(0.0).unwrap().threshold(), 0);
    assert_eq!(CoverRequirement::new(-4.0).unwrap().threshold(), 0);
    assert!(CoverRequirement::new(f64::NAN).is_err());
}

#[test]
fn search_outcome_gap_is_distinguishable_when_exhausted() {
    let found = SearchOutcome::Found { pool_size: 12 };
    assert_eq!(found.capacity_gap(10), Some(2));
    assert_eq!(found.capacity_gap(15), Some(0));

    let exhausted = SearchOutcome::NotFoundWithinCeiling { ceiling: 200 };
    assert_eq!(exhausted.pool_size(), None);
    assert_eq!(exhausted.capacity_gap(10), None);
    assert!(exhausted.to_string().contains("unreachable"));
}

#[test]
fn search_outcome_serializes_with_status_tag() {
    let json = serde_json::to_value(SearchOutcome::NotFoundWithinCeiling { ceiling: 200 }).unwrap();
    assert_eq!(json["status"], "not_found_within_ceiling");
    assert_eq!(json["ceiling"], 200);
}

#[test]
fn outcome_forecast_annualizes_shortfall() {
    let outcome = CoverOutcome {
        probability_meets_cover: 0.7,
        expected_shortfall_per_period: 0.4,
    };
    let forecast = outcome.forecast(260.0);
    assert!((forecast.expected_cover_demand - 104.0).abs() < 1e-9);
    assert_eq!(CoverOutcome::no_capacity(9.0).expected_shortfall_per_period, 9.0);
}
