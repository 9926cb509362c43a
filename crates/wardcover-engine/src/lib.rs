//! # wardcover-engine
//!
//! The facade external callers use. It turns a roster or a population into
//! a cover assessment:
//!
//! 1. derive an effective availability probability and a pool size
//!    (under a named [`PoolSizing`](wardcover_core::models::PoolSizing) policy),
//! 2. dispatch to the exact binomial kernel for homogeneous pools or to the
//!    Monte-Carlo simulator for heterogeneous populations,
//! 3. annualize the expected shortfall into a cover-demand forecast,
//! 4. search for the pool size that meets the reliability target and report
//!    the gap to it.
//!
//! No I/O happens here; records arrive as values and results leave as values.

pub mod assessment;
pub mod engine;
pub mod roster;
pub mod tracing_setup;

pub use assessment::{CapacityAssessment, CoverAssessment, PopulationInput, RosterAssessment};
pub use engine::CoverEngine;
pub use roster::{roster_population, CategoryTotals, RosterSummary};
pub use tracing_setup::init_tracing;
