pub mod capacity;
pub mod outcome;
pub mod pool_sizing;
pub mod probability;
pub mod requirement;
pub mod search;

pub use capacity::{CapacityUnit, Population, PooledSummary};
pub use outcome::{CoverOutcome, DemandForecast, EstimationMethod};
pub use pool_sizing::PoolSizing;
pub use probability::Probability;
pub use requirement::{CoverRequirement, ReliabilityTarget};
pub use search::SearchOutcome;
