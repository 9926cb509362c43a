use wardcover_core::constants::EXACT_COEFFICIENT_MAX_N;
use wardcover_core::models::Probability;

/// `C(n, k)` as an exact integer, or `None` if it does not fit in a `u128`.
/// Returns `Some(0)` when `k > n`.
pub fn binomial_coefficient(n: u32, k: u32) -> Option<u128> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k);
    let mut c: u128 = 1;
    for i in 0..k {
        // C(n, i + 1) = C(n, i) * (n - i) / (i + 1), exact at every step.
        c = c.checked_mul(u128::from(n - i))? / u128::from(i + 1);
    }
    Some(c)
}

/// Binomial(n, p) distribution of the number of staff present.
#[derive(Debug, Clone)]
pub struct Binomial {
    n: u32,
    p: Probability,
    /// `ln(i!)` for `i` in `0..=n`, filled only for pools evaluated in log space.
    ln_factorials: Vec<f64>,
}

impl Binomial {
    pub fn new(n: u32, p: impl Into<Probability>) -> Self {
        let ln_factorials = if n > EXACT_COEFFICIENT_MAX_N {
            let mut table = Vec::with_capacity(n as usize + 1);
            let mut acc = 0.0_f64;
            table.push(acc);
            for i in 1..=n {
                acc += f64::from(i).ln();
                table.push(acc);
            }
            table
        } else {
            Vec::new()
        };
        Self {
            n,
            p: p.into(),
            ln_factorials,
        }
    }

    pub fn pool_size(&self) -> u32 {
        self.n
    }

    pub fn probability(&self) -> Probability {
        self.p
    }

    /// True when this pool is evaluated in log space.
    pub fn uses_log_space(&self) -> bool {
        !self.ln_factorials.is_empty()
    }

    /// `P(X = k)`. Zero for `k` outside `0..=n`.
    pub fn pmf(&self, k: i64) -> f64 {
        let Ok(k) = u32::try_from(k) else {
            return 0.0;
        };
        if k > self.n {
            return 0.0;
        }
        let p = self.p.value();
        // Degenerate pools put all mass on one point; the log path cannot take ln(0).
        if p == 0.0 {
            return if k == 0 { 1.0 } else { 0.0 };
        }
        if p == 1.0 {
            return if k == self.n { 1.0 } else { 0.0 };
        }
        let absent = self.n - k;
        if !self.uses_log_space() {
            if let Some(c) = binomial_coefficient(self.n, k) {
                return c as f64 * p.powi(k as i32) * (1.0 - p).powi(absent as i32);
            }
        }
        let ln_c = self.ln_coefficient(k);
        (ln_c + f64::from(k) * p.ln() + f64::from(absent) * (-p).ln_1p()).exp()
    }

    fn ln_coefficient(&self, k: u32) -> f64 {
        if self.ln_factorials.is_empty() {
            // Exact coefficient overflowed below the crossover; sum directly.
            let k = k.min(self.n - k);
            return (0..k)
                .map(|i| f64::from(self.n - i).ln() - f64::from(i + 1).ln())
                .sum();
        }
        let n = self.n as usize;
        let k = k as usize;
        self.ln_factorials[n] - self.ln_factorials[k] - self.ln_factorials[n - k]
    }

    /// `P(X ≥ r)`: exactly 1 for `r ≤ 0`, exactly 0 for `r > n`.
    pub fn prob_at_least(&self, r: i64) -> f64 {
        if r <= 0 {
            return 1.0;
        }
        if r > i64::from(self.n) {
            return 0.0;
        }
        let tail: f64 = (r..=i64::from(self.n)).map(|k| self.pmf(k)).sum();
        tail.clamp(0.0, 1.0)
    }

    /// `E[max(0, r − X)]` for a whole-unit requirement.
    pub fn expected_shortfall(&self, r: i64) -> f64 {
        if r <= 0 {
            return 0.0;
        }
        if self.n == 0 {
            return r as f64;
        }
        let upper = r.min(i64::from(self.n));
        (0..=upper).map(|k| (r - k) as f64 * self.pmf(k)).sum()
    }

    /// `E[max(0, required − X)]` for a real-valued requirement.
    pub fn expected_deficit(&self, required: f64) -> f64 {
        if !(required > 0.0) {
            return 0.0;
        }
        if self.n == 0 {
            return required;
        }
        (0..=i64::from(self.n))
            .take_while(|&k| (k as f64) < required)
            .map(|k| (required - k as f64) * self.pmf(k))
            .sum()
    }

    /// Mean number of staff present.
    pub fn mean(&self) -> f64 {
        f64::from(self.n) * self.p.value()
    }
}

/// Probability that exactly `k` of `n` independent units with availability
/// `p` are present. Zero for `k` outside `0..=n`.
pub fn pmf(n: u32, k: i64, p: impl Into<Probability>) -> f64 {
    Binomial::new(n, p).pmf(k)
}

/// Probability that at least `r` of `n` independent units with availability
/// `p` are present.
///
/// `r ≤ 0` is trivially satisfied (exactly 1.0) and `r > n` is impossible
/// (exactly 0.0) regardless of `p`.
pub fn prob_at_least(n: u32, r: i64, p: impl Into<Probability>) -> f64 {
    Binomial::new(n, p).prob_at_least(r)
}
