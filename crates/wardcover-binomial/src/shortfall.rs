use wardcover_core::models::Probability;

use crate::kernel::Binomial;

/// Expected number of units short per period, `E[max(0, r − X)]` with
/// `X ~ Binomial(n, p)`.
///
/// `r ≤ 0` yields 0. An empty pool (`n = 0`) is short by the whole
/// requirement every period. Otherwise the sum
/// `Σ_{k=0}^{min(r,n)} (r − k)·pmf(n, k, p)` runs over the same pmf as
/// [`prob_at_least`](crate::kernel::prob_at_least).
pub fn expected_shortfall(n: u32, r: i64, p: impl Into<Probability>) -> f64 {
    Binomial::new(n, p).expected_shortfall(r)
}
