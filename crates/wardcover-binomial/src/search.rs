use serde::{Deserialize, Serialize};
use wardcover_core::models::{Probability, ReliabilityTarget, SearchOutcome};

use crate::kernel::prob_at_least;

/// How the search walks the candidate pool sizes.
///
/// `prob_at_least(n, r, p)` never decreases as `n` grows, so both strategies
/// return the same answer; `Linear` is the reference, `Bisection` needs
/// `O(log ceiling)` kernel evaluations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchStrategy {
    #[default]
    Linear,
    Bisection,
}

/// Smallest pool size `n ≥ r` with `P(X ≥ r) ≥ target`, scanning upward from `r`.
///
/// `r ≤ 0` needs no pool at all. When no `n ≤ ceiling` meets the target the
/// result is [`SearchOutcome::NotFoundWithinCeiling`], never the ceiling
/// dressed up as an answer.
pub fn required_pool_size(
    r: i64,
    p: impl Into<Probability>,
    target: f64,
    ceiling: u32,
) -> SearchOutcome {
    required_pool_size_with(
        SearchStrategy::Linear,
        r,
        p,
        &ReliabilityTarget {
            target_probability: target,
            search_ceiling: ceiling,
        },
    )
}

/// [`required_pool_size`] with an explicit strategy and a [`ReliabilityTarget`].
pub fn required_pool_size_with(
    strategy: SearchStrategy,
    r: i64,
    p: impl Into<Probability>,
    target: &ReliabilityTarget,
) -> SearchOutcome {
    let p = p.into();
    let ceiling = target.search_ceiling;
    if r <= 0 {
        return SearchOutcome::Found { pool_size: 0 };
    }
    let not_found = SearchOutcome::NotFoundWithinCeiling { ceiling };
    let Ok(start) = u32::try_from(r) else {
        return not_found;
    };
    if start > ceiling {
        return not_found;
    }
    let meets = |n: u32| prob_at_least(n, r, p) >= target.target_probability;

    match strategy {
        SearchStrategy::Linear => (start..=ceiling)
            .find(|&n| meets(n))
            .map_or(not_found, |pool_size| SearchOutcome::Found { pool_size }),
        SearchStrategy::Bisection => {
            if !meets(ceiling) {
                return not_found;
            }
            let (mut lo, mut hi) = (start, ceiling);
            while lo < hi {
                let mid = lo + (hi - lo) / 2;
                if meets(mid) {
                    hi = mid;
                } else {
                    lo = mid + 1;
                }
            }
            SearchOutcome::Found { pool_size: lo }
        }
    }
}
