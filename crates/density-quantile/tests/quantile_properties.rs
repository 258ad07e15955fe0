//! Property tests for the linear-interpolation quantile estimator

use density_quantile::{estimators::linear, QuantileEstimator};
use proptest::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

proptest! {
    // Property: quantiles are monotone in p and bounded by the sample extremes
    #[test]
    fn prop_monotone_and_bounded(
        data in prop::collection::vec(-1e6f64..1e6, 1..200),
        p1 in 0.0f64..=1.0,
        p2 in 0.0f64..=1.0,
    ) {
        let mut data = data;
        let est = linear();
        let (lo_p, hi_p) = if p1 <= p2 { (p1, p2) } else { (p2, p1) };
        let qs = est.quantiles(&mut data, &[lo_p, hi_p]).unwrap();

        prop_assert!(qs[0] <= qs[1] + 1e-9);
        prop_assert!(qs[0] >= data[0] - 1e-9);
        prop_assert!(qs[1] <= data[data.len() - 1] + 1e-9);
    }

    // Property: shifting every sample shifts every quantile by the same amount
    #[test]
    fn prop_location_equivariant(
        data in prop::collection::vec(-100.0f64..100.0, 2..100),
        shift in -50.0f64..50.0,
        p in 0.0f64..=1.0,
    ) {
        let est = linear();
        let mut base = data.clone();
        let mut shifted: Vec<f64> = data.iter().map(|x| x + shift).collect();

        let q = est.quantile(&mut base, p).unwrap();
        let q_shifted = est.quantile(&mut shifted, p).unwrap();
        prop_assert!((q_shifted - (q + shift)).abs() < 1e-9);
    }
}

#[test]
fn test_median_of_odd_sample_is_middle_order_statistic() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let est = linear();

    for _ in 0..20 {
        let n = 2 * rng.gen_range(1..50) + 1;
        let mut data: Vec<f64> = (0..n).map(|_| rng.gen_range(-10.0..10.0)).collect();
        let median = est.quantile(&mut data, 0.5).unwrap();
        assert_eq!(median, data[n / 2]);
    }
}
