use proptest::prelude::*;
use wardcover_binomial::*;
use wardcover_core::models::ReliabilityTarget;

// ── Normalization ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn pmf_sums_to_one(n in 0u32..400, p in 0.0f64..=1.0) {
        let dist = Binomial::new(n, p);
        let total: f64 = (0..=i64::from(n)).map(|k| dist.pmf(k)).sum();
        prop_assert!((total - 1.0).abs() < 1e-9, "n={} p={} total={}", n, p, total);
    }
}

// ── Monotonicity ───────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn prob_at_least_non_decreasing_in_pool_size(
        n in 0u32..250,
        r in 0i64..120,
        p in 0.0f64..=1.0,
    ) {
        let smaller = prob_at_least(n, r, p);
        let larger = prob_at_least(n + 1, r, p);
        prop_assert!(larger + 1e-12 >= smaller, "n={} r={} p={}: {} > {}", n, r, p, smaller, larger);
    }

    #[test]
    fn prob_at_least_non_decreasing_in_probability(
        n in 0u32..250,
        r in 0i64..120,
        p in 0.0f64..=1.0,
        dp in 0.0f64..=1.0,
    ) {
        let q = (p + dp).min(1.0);
        prop_assert!(prob_at_least(n, r, q) + 1e-12 >= prob_at_least(n, r, p));
    }
}

// ── Boundaries ─────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn zero_requirement_and_impossible_requirement(
        n in 0u32..300,
        extra in 1i64..50,
        p in 0.0f64..=1.0,
    ) {
        prop_assert_eq!(prob_at_least(n, 0, p), 1.0);
        prop_assert_eq!(prob_at_least(n, i64::from(n) + extra, p), 0.0);
    }
}

// ── Consistency ────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn shortfall_is_linear_functional_of_pmf(
        n in 0u32..200,
        r in 0i64..200,
        p in 0.0f64..=1.0,
    ) {
        let independent: f64 = if r <= 0 {
            0.0
        } else if n == 0 {
            r as f64
        } else {
            (0..=r.min(i64::from(n)))
                .map(|k| (r - k) as f64 * pmf(n, k, p))
                .sum()
        };
        prop_assert!((expected_shortfall(n, r, p) - independent).abs() < 1e-9);
    }

    #[test]
    fn shortfall_bounded_by_requirement(n in 0u32..200, r in 1i64..100, p in 0.0f64..=1.0) {
        let s = expected_shortfall(n, r, p);
        prop_assert!(s >= 0.0);
        prop_assert!(s <= r as f64 + 1e-9);
    }
}

// ── Search correctness ─────────────────────────────────────────────────────

proptest! {
    #[test]
    fn found_pool_meets_target_and_predecessor_does_not(
        r in 1i64..40,
        p in 0.3f64..=1.0,
        target in 0.5f64..0.99,
    ) {
        let ceiling = 200;
        if let Some(n) = required_pool_size(r, p, target, ceiling).pool_size() {
            prop_assert!(prob_at_least(n, r, p) >= target);
            if i64::from(n) > r {
                prop_assert!(prob_at_least(n - 1, r, p) < target);
            }
        }
    }

    #[test]
    fn strategies_agree(r in 1i64..40, p in 0.3f64..=1.0, target in 0.5f64..0.99) {
        let target = ReliabilityTarget { target_probability: target, search_ceiling: 150 };
        prop_assert_eq!(
            required_pool_size_with(SearchStrategy::Linear, r, p, &target),
            required_pool_size_with(SearchStrategy::Bisection, r, p, &target)
        );
    }
}
