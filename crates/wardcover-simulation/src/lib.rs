//! # wardcover-simulation
//!
//! Monte-Carlo estimate of cover probability and expected shortfall for
//! populations whose units differ in weight and availability. The sum of
//! such units is Poisson-binomial (or weighted), not binomial, so the exact
//! kernel does not apply.
//!
//! ## Sharding
//!
//! The trial count is split into fixed-size shards. Shard `i` draws from
//! stream `i` of a ChaCha8 generator keyed by the configured seed, so every
//! shard has its own sub-stream and no seed is ever reused. Shards may run
//! on the rayon pool; their tallies are merged in shard order, which keeps
//! results bit-identical with or without parallelism.

pub mod engine;
pub mod model;
pub mod tally;

pub use engine::MonteCarloSimulator;
pub use model::SimulatedModel;
pub use tally::SimulationTally;
