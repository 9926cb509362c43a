//! Test fixture loader for wardcover rosters and golden cover scenarios.
//!
//! Provides typed deserialization of the JSON files under `test-fixtures/`
//! for use in tests across crates.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::PathBuf;

use wardcover_core::staff::StaffGroupRecord;

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").join("rosters").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// The sample geriatrics ward roster.
pub fn geriatrics_roster() -> Vec<StaffGroupRecord> {
    load_fixture("rosters/geriatrics_roster.json")
}

/// A homogeneous pool scenario with its hand-checked answers.
#[derive(Debug, Clone, Deserialize)]
pub struct CoverScenario {
    pub name: String,
    pub pool_size: u32,
    pub probability: f64,
    pub required_units: f64,
    pub probability_meets_cover: f64,
    pub expected_shortfall_per_period: f64,
    /// Smallest pool meeting a 0.95 target within a ceiling of 200, or `None`
    /// when unreachable.
    pub required_pool_for_95: Option<u32>,
}

/// Golden scenarios for the exact kernel.
pub fn cover_scenarios() -> Vec<CoverScenario> {
    load_fixture("scenarios/cover_scenarios.json")
}
