//! # wardcover-binomial
//!
//! Closed-form cover arithmetic for a homogeneous pool of `n` staff, each
//! present independently with probability `p`.
//!
//! | Function | Answers |
//! |----------|---------|
//! | [`pmf`] | `P(X = k)` |
//! | [`prob_at_least`] | `P(X ≥ r)`, the probability of meeting cover |
//! | [`expected_shortfall`] | `E[max(0, r − X)]`, mean staff short per period |
//! | [`required_pool_size`] | smallest `n` with `P(X ≥ r) ≥ target` |
//!
//! Pools up to [`EXACT_COEFFICIENT_MAX_N`](wardcover_core::constants::EXACT_COEFFICIENT_MAX_N)
//! use exact integer binomial coefficients; larger pools switch to log space.
//! Shortfall and cover probability are both linear functionals of the same
//! [`Binomial::pmf`], so they can never disagree about the distribution.

pub mod kernel;
pub mod model;
pub mod search;
pub mod shortfall;

pub use kernel::{binomial_coefficient, pmf, prob_at_least, Binomial};
pub use model::BinomialModel;
pub use search::{required_pool_size, required_pool_size_with, SearchStrategy};
pub use shortfall::expected_shortfall;
