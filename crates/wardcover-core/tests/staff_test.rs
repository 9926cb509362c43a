use wardcover_core::config::AvailabilityConfig;
use wardcover_core::staff::*;

fn record(group: &str, oncall_loss: f64, development_days: f64) -> StaffGroupRecord {
    StaffGroupRecord {
        staff_group: group.to_string(),
        headcount: 4,
        base_wte: 1.0,
        pattern_factor: 1.0,
        days_factor: 0.8,
        leave_factor: 0.9,
        oncall_loss,
        development_days,
    }
}

#[test]
fn staff_groups_map_to_closed_categories() {
    assert_eq!(StaffCategory::classify("FY1"), StaffCategory::Foundation);
    assert_eq!(StaffCategory::classify("FY2"), StaffCategory::Foundation);
    for group in ["IMT", "LIMT", "CEF", "CFn", "CFoc", "GPST"] {
        assert_eq!(StaffCategory::classify(group), StaffCategory::SeniorHouseOfficer);
    }
    assert_eq!(StaffCategory::classify(" ACP "), StaffCategory::AdvancedPractitioner);
    assert_eq!(StaffCategory::classify("Consultant"), StaffCategory::Unclassified);
    assert_eq!(StaffCategory::classify("imt"), StaffCategory::Unclassified);
}

#[test]
fn category_labels_are_stable() {
    let labels: Vec<_> = StaffCategory::ALL.iter().map(|c| c.to_string()).collect();
    assert_eq!(labels, ["Foundation-grade", "SHO-grade", "ACP", "Other"]);
}

#[test]
fn scheduled_wte_multiplies_factors() {
    let r = record("IMT", 0.25, 0.0);
    assert!((r.scheduled_establishment_wte_per_person() - 0.72).abs() < 1e-12);
    assert!((r.scheduled_ward_wte_per_person() - 0.54).abs() < 1e-12);
    assert!((r.scheduled_ward_wte_total() - 2.16).abs() < 1e-12);
}

#[test]
fn availability_factor_combines_sickness_and_development_days() {
    let assumptions = AvailabilityConfig::default();
    let r = record("IMT", 0.0, 10.0);
    let expected = 0.95 * (1.0 - 10.0 / 260.0);
    assert!((r.availability_factor(&assumptions).value() - expected).abs() < 1e-12);
    assert!(
        (r.expected_ward_wte_total(&assumptions) - r.scheduled_ward_wte_total() * expected).abs()
            < 1e-12
    );
}

#[test]
fn availability_factor_is_clamped() {
    let assumptions = AvailabilityConfig {
        sickness_rate: 0.0,
        development_day_basis: 260.0,
    };
    let r = record("FY1", 0.0, 400.0);
    assert_eq!(r.availability_factor(&assumptions).value(), 0.0);
}

#[test]
fn oncall_figures_only_apply_with_oncall_loss() {
    let with_oncall = record("FY1", 0.2, 0.0);
    assert!((with_oncall.oncall_commitment_wte() - 2.88).abs() < 1e-12);
    assert!((with_oncall.oncall_lost_wte() - 0.576).abs() < 1e-12);

    let without = record("ACP", 0.0, 0.0);
    assert_eq!(without.oncall_commitment_wte(), 0.0);
    assert_eq!(without.oncall_lost_wte(), 0.0);
}

#[test]
fn record_deserializes_roster_column_names() {
    let json = r#"{
        "staff_group": "GPST",
        "headcount": 2,
        "base_WTE": 1.0,
        "pattern_factor": 1.0,
        "days_factor": 1.0,
        "leave_factor": 0.88
    }"#;
    let r: StaffGroupRecord = serde_json::from_str(json).unwrap();
    assert_eq!(r.category(), StaffCategory::SeniorHouseOfficer);
    assert_eq!(r.oncall_loss, 0.0);
    assert_eq!(r.development_days, 0.0);
}
