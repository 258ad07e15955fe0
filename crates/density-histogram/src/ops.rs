//! Operations on histograms

use crate::types::Histogram;

/// Comparisons between histograms defined over the same bins
pub trait HistogramOps {
    /// Overlap of relative frequencies, `Σ min(p_i, q_i)` (1.0 for identical shapes)
    fn intersection(&self, other: &Self) -> f64;

    /// Total variation distance of relative frequencies, `½ Σ |p_i - q_i|`
    fn total_variation(&self, other: &Self) -> f64;

    /// Compare against per-bin probabilities from some other model
    fn total_variation_to(&self, probabilities: &[f64]) -> f64;
}

impl HistogramOps for Histogram {
    fn intersection(&self, other: &Self) -> f64 {
        self.frequencies()
            .iter()
            .zip(other.frequencies())
            .map(|(p, q)| p.min(q))
            .sum()
    }

    fn total_variation(&self, other: &Self) -> f64 {
        self.total_variation_to(&other.frequencies())
    }

    fn total_variation_to(&self, probabilities: &[f64]) -> f64 {
        0.5 * self
            .frequencies()
            .iter()
            .zip(probabilities)
            .map(|(p, q)| (p - q).abs())
            .sum::<f64>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::bin;
    use approx::assert_relative_eq;
    use density_core::Domain;

    #[test]
    fn test_identical_histograms() {
        let domain = Domain::new(0.0, 4.0).unwrap();
        let a = bin(&[0.5, 1.5, 1.5, 3.5], domain, 1.0).unwrap();
        assert_relative_eq!(a.intersection(&a), 1.0);
        assert_relative_eq!(a.total_variation(&a), 0.0);
    }

    #[test]
    fn test_disjoint_histograms() {
        let domain = Domain::new(0.0, 2.0).unwrap();
        let a = bin(&[0.5, 0.5], domain, 1.0).unwrap();
        let b = bin(&[1.5, 1.5], domain, 1.0).unwrap();
        assert_relative_eq!(a.intersection(&b), 0.0);
        assert_relative_eq!(a.total_variation(&b), 1.0);
    }

    #[test]
    fn test_against_model_probabilities() {
        let domain = Domain::new(0.0, 2.0).unwrap();
        let a = bin(&[0.5, 1.5, 1.5, 1.5], domain, 1.0).unwrap();
        assert_relative_eq!(a.total_variation_to(&[0.25, 0.75]), 0.0);
        assert_relative_eq!(a.total_variation_to(&[0.5, 0.5]), 0.25);
    }
}
