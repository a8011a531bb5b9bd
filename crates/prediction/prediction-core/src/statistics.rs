//! Summary statistics over a predicted series

use prediction_spi::{PredictionError, Result, Statistics};

/// Compute mean, min and max of `values`
///
/// Fails with [`PredictionError::EmptyInput`] instead of producing NaN for an
/// empty slice. The mean is clamped to `[min, max]`: summation rounding can
/// otherwise leave it one ulp outside the range (e.g. three copies of `0.1`).
pub fn compute(values: &[f64]) -> Result<Statistics> {
    if values.is_empty() {
        return Err(PredictionError::EmptyInput);
    }

    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    // f64::clamp panics when min > max, which an all-NaN input produces
    let mean = if mean > max {
        max
    } else if mean < min {
        min
    } else {
        mean
    };

    Ok(Statistics { mean, min, max })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_value() {
        let stats = compute(&[5.0]).unwrap();
        assert_eq!(
            stats,
            Statistics {
                mean: 5.0,
                min: 5.0,
                max: 5.0
            }
        );
    }

    #[test]
    fn test_empty_input_fails() {
        assert_eq!(compute(&[]), Err(PredictionError::EmptyInput));
    }

    #[test]
    fn test_known_values() {
        let stats = compute(&[2.0, 4.0, 9.0, -3.0]).unwrap();
        assert_eq!(stats.mean, 3.0);
        assert_eq!(stats.min, -3.0);
        assert_eq!(stats.max, 9.0);
    }

    #[test]
    fn test_repeated_value_mean_stays_in_range() {
        let stats = compute(&[0.1, 0.1, 0.1]).unwrap();
        assert_eq!(stats.mean, 0.1);
        assert_eq!(stats.min, 0.1);
        assert_eq!(stats.max, 0.1);

        for n in 1..200 {
            let stats = compute(&vec![0.7; n]).unwrap();
            assert!(stats.min <= stats.mean && stats.mean <= stats.max, "n={}", n);
        }
    }

    #[test]
    fn test_all_nan_input_does_not_panic() {
        let stats = compute(&[f64::NAN, f64::NAN]).unwrap();
        assert!(stats.mean.is_nan());
    }

    #[test]
    fn test_mean_between_bounds() {
        let series: Vec<Vec<f64>> = vec![
            vec![100.0, 101.5, 99.2],
            vec![-1e9, 1e9],
            vec![0.1; 17],
            (0..365).map(|i| 100.0 + 0.5 * i as f64).collect(),
        ];

        for values in series {
            let stats = compute(&values).unwrap();
            assert!(stats.min <= stats.mean, "{:?}", stats);
            assert!(stats.mean <= stats.max, "{:?}", stats);
        }
    }
}
