/// Classification confidence: the peak probability minus the population
/// standard deviation of the full distribution, clamped to `0.0..=1.0`.
///
/// The deviation is taken over every catalog archetype, zeros included, not
/// just the survivors.
pub fn confidence(probabilities: &[f64]) -> f64 {
    if probabilities.is_empty() {
        return 0.0;
    }
    let peak = probabilities.iter().copied().fold(0.0, f64::max);
    (peak - population_std_dev(probabilities)).clamp(0.0, 1.0)
}

fn population_std_dev(values: &[f64]) -> f64 {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    variance.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn padded(head: &[f64]) -> Vec<f64> {
        let mut values = head.to_vec();
        values.resize(12, 0.0);
        values
    }

    #[test]
    fn single_certain_archetype() {
        // std of [1, 0 x 11] is sqrt(11/144).
        let expected = 1.0 - (11.0f64 / 144.0).sqrt();
        assert!((confidence(&padded(&[1.0])) - expected).abs() < 1e-12);
    }

    #[test]
    fn all_zero_distribution_has_zero_confidence() {
        assert_eq!(confidence(&padded(&[])), 0.0);
        assert_eq!(confidence(&[]), 0.0);
    }

    #[test]
    fn zeros_count_towards_deviation() {
        // Over the two survivors alone the deviation would be zero.
        let expected = 0.5 - (5.0f64 / 144.0).sqrt();
        assert!((confidence(&padded(&[0.5, 0.5])) - expected).abs() < 1e-12);
    }

    #[test]
    fn uniform_distribution_keeps_peak() {
        let uniform = vec![1.0 / 12.0; 12];
        assert!((confidence(&uniform) - 1.0 / 12.0).abs() < 1e-12);
    }

    #[test]
    fn result_is_clamped() {
        let value = confidence(&padded(&[0.5, 0.5]));
        assert!((0.0..=1.0).contains(&value));
    }
}
