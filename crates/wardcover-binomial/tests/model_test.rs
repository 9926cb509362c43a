use wardcover_binomial::BinomialModel;
use wardcover_core::models::{CoverRequirement, EstimationMethod};
use wardcover_core::traits::ICoverModel;

#[test]
fn model_reports_exact_method() {
    let model = BinomialModel::new(10, 0.9);
    assert_eq!(model.method(), EstimationMethod::Exact);
}

#[test]
fn model_outcome_matches_kernel() {
    let model = BinomialModel::new(10, 0.9);
    let outcome = model.estimate(&CoverRequirement::units(9));
    assert!((outcome.probability_meets_cover - 0.736_098_929_1).abs() < 1e-9);
    assert!((outcome.expected_shortfall_per_period - 0.348_678_440_1).abs() < 1e-9);
}

#[test]
fn trivial_requirement_is_always_met() {
    let model = BinomialModel::new(0, 0.0);
    let outcome = model.estimate(&CoverRequirement::units(0));
    assert_eq!(outcome.probability_meets_cover, 1.0);
    assert_eq!(outcome.expected_shortfall_per_period, 0.0);
}

#[test]
fn empty_pool_never_meets_cover() {
    let model = BinomialModel::new(0, 0.9);
    let outcome = model.estimate(&CoverRequirement::new(7.5).unwrap());
    assert_eq!(outcome.probability_meets_cover, 0.0);
    assert_eq!(outcome.expected_shortfall_per_period, 7.5);
}

#[test]
fn fractional_requirement_rounds_threshold_up() {
    let model = BinomialModel::new(10, 1.0);
    // 9.5 WTE needs 10 whole staff; with everyone present it is met.
    let outcome = model.estimate(&CoverRequirement::new(9.5).unwrap());
    assert_eq!(outcome.probability_meets_cover, 1.0);
    assert_eq!(outcome.expected_shortfall_per_period, 0.0);

    let short = BinomialModel::new(9, 1.0).estimate(&CoverRequirement::new(9.5).unwrap());
    assert_eq!(short.probability_meets_cover, 0.0);
    assert!((short.expected_shortfall_per_period - 0.5).abs() < 1e-12);
}
