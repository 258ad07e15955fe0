//! Layout checks on generated bimodal samples

use density_chart::{render, ChartConfig, ChartSession};
use density_core::{Dataset, Error};
use density_sampling::{GaussianMixture, SampleGenerator};
use rand::rngs::mock::StepRng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[test]
fn test_bars_inside_plot_area() {
    let config = ChartConfig::default();
    let data = SampleGenerator::seeded(11).generate(config.sample_count);
    let chart = render(&data, &config).unwrap();

    let (left, right) = config.x_range();
    let (bottom, top) = config.y_range();
    assert_eq!(chart.bars.len(), 18);
    for bar in &chart.bars {
        assert!(bar.x >= left && bar.x + bar.width <= right + 1e-9);
        assert!(bar.y >= top - 1e-9 && bar.y + bar.height <= bottom + 1e-9);
        assert!(bar.width >= 0.0 && bar.height >= 0.0);
    }
    for p in &chart.curve {
        assert!(p.x >= left - 1e-9 && p.x <= right + 1e-9);
        assert!(p.y >= top - 1e-9 && p.y <= bottom + 1e-9);
    }
    assert_eq!(chart.curve.len(), 451);
    assert_eq!(chart.sample_count, 3000);
}

#[test]
fn test_stub_rng_chart() {
    // A constant RNG puts every sample exactly on a component mean
    let mut generator = SampleGenerator::new(GaussianMixture::bimodal(), StepRng::new(0, 0));
    let data = generator.generate(1000);
    assert_eq!(data.len(), 3000);

    let chart = render(&data, &ChartConfig::default()).unwrap();
    let counts: Vec<usize> = chart.bars.iter().map(|b| b.count).collect();
    // -1.0 opens bin [-1, -0.5); 2.0 opens bin [2, 2.5)
    assert_eq!(counts[4], 1000);
    assert_eq!(counts[10], 2000);
    assert_eq!(counts.iter().sum::<usize>(), 3000);
    assert!(chart.bandwidth.value() > 0.0);
}

#[test]
fn test_session_keeps_sample_across_bin_widths() {
    let mut session = ChartSession::new(ChartConfig::default());
    let mut generator =
        SampleGenerator::new(GaussianMixture::bimodal(), ChaCha8Rng::seed_from_u64(1));
    let original = session.regenerate(&mut generator).clone();

    let fresh = SampleGenerator::seeded(99).generate(1000);
    let drawn = session.submit(fresh.clone(), 0.2).unwrap();
    assert_eq!(drawn, &original);

    let drawn = session.submit(fresh.clone(), 0.2).unwrap();
    assert_eq!(drawn, &fresh);

    let chart = session.render().unwrap();
    assert_eq!(chart.bars.len(), 45);
}

#[test]
fn test_nothing_to_draw() {
    let outside = Dataset::new(vec![-10.0, 10.0, 12.5]);
    assert!(matches!(
        render(&outside, &ChartConfig::default()),
        Err(Error::InvalidInput(_))
    ));
    assert!(matches!(
        render(&Dataset::empty(), &ChartConfig::default()),
        Err(Error::EmptyDataset)
    ));
}
