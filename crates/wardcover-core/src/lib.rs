//! # wardcover-core
//!
//! Foundation crate for the wardcover staffing model.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod staff;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::WardCoverConfig;
pub use errors::{CoverError, CoverResult};
pub use models::{
    CapacityUnit, CoverOutcome, CoverRequirement, DemandForecast, Population, Probability,
    ReliabilityTarget, SearchOutcome,
};
pub use staff::{StaffCategory, StaffGroupRecord};
