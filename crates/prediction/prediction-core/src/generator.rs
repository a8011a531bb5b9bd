//! Series generators
//!
//! [`DriftNoiseGenerator`] is the reference placeholder: a linear drift from
//! a base level plus bounded uniform noise. It is not a forecasting model; a
//! real model plugs in behind the same [`SeriesGenerator`] contract.

use prediction_spi::{PredictionError, Result, SeriesGenerator};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Starting level of the reference series
pub const DEFAULT_BASE: f64 = 100.0;
/// Per-step drift of the reference series
pub const DEFAULT_TREND: f64 = 0.5;
/// Half-width of the uniform noise band
pub const DEFAULT_NOISE_AMPLITUDE: f64 = 5.0;

/// `value[i] = base + trend * i + U[-amplitude, amplitude)`
#[derive(Debug, Clone)]
pub struct DriftNoiseGenerator<R = StdRng> {
    base: f64,
    trend: f64,
    noise_amplitude: f64,
    rng: R,
}

impl DriftNoiseGenerator<StdRng> {
    /// Reference parameters, noise seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Reference parameters, reproducible noise
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> DriftNoiseGenerator<R> {
    /// Reference parameters with a caller-supplied random source
    pub fn with_rng(rng: R) -> Self {
        Self {
            base: DEFAULT_BASE,
            trend: DEFAULT_TREND,
            noise_amplitude: DEFAULT_NOISE_AMPLITUDE,
            rng,
        }
    }

    /// Override the drift parameters
    pub fn with_params(mut self, base: f64, trend: f64, noise_amplitude: f64) -> Result<Self> {
        if !base.is_finite() {
            return Err(PredictionError::invalid_argument("base", "must be finite"));
        }
        if !trend.is_finite() {
            return Err(PredictionError::invalid_argument("trend", "must be finite"));
        }
        if !noise_amplitude.is_finite() || noise_amplitude < 0.0 {
            return Err(PredictionError::invalid_argument(
                "noise_amplitude",
                "must be finite and non-negative",
            ));
        }
        self.base = base;
        self.trend = trend;
        self.noise_amplitude = noise_amplitude;
        Ok(self)
    }

    pub fn base(&self) -> f64 {
        self.base
    }

    pub fn trend(&self) -> f64 {
        self.trend
    }

    pub fn noise_amplitude(&self) -> f64 {
        self.noise_amplitude
    }

    fn noise(&mut self) -> f64 {
        // gen_range panics on an empty range
        if self.noise_amplitude == 0.0 {
            return 0.0;
        }
        self.rng.gen_range(-self.noise_amplitude..self.noise_amplitude)
    }
}

impl<R: Rng + Send> SeriesGenerator for DriftNoiseGenerator<R> {
    fn name(&self) -> &str {
        "drift-noise"
    }

    fn generate(&mut self, periods: usize) -> Result<Vec<f64>> {
        if periods == 0 {
            return Err(PredictionError::invalid_argument(
                "periods",
                "must be at least 1",
            ));
        }

        Ok((0..periods)
            .map(|i| self.base + self.trend * i as f64 + self.noise())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_length() {
        let mut generator = DriftNoiseGenerator::seeded(7);
        for periods in [1, 2, 30, 365, 1000] {
            assert_eq!(generator.generate(periods).unwrap().len(), periods);
        }
    }

    #[test]
    fn test_generate_zero_periods_fails() {
        let mut generator = DriftNoiseGenerator::seeded(7);
        assert!(matches!(
            generator.generate(0),
            Err(PredictionError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_values_stay_in_noise_band() {
        let mut generator = DriftNoiseGenerator::seeded(42);
        let values = generator.generate(365).unwrap();

        for (i, value) in values.iter().enumerate() {
            let center = DEFAULT_BASE + DEFAULT_TREND * i as f64;
            assert!(*value >= center - DEFAULT_NOISE_AMPLITUDE);
            assert!(*value < center + DEFAULT_NOISE_AMPLITUDE);
        }
    }

    #[test]
    fn test_same_seed_same_series() {
        let a = DriftNoiseGenerator::seeded(1234).generate(50).unwrap();
        let b = DriftNoiseGenerator::seeded(1234).generate(50).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = DriftNoiseGenerator::seeded(1).generate(50).unwrap();
        let b = DriftNoiseGenerator::seeded(2).generate(50).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_zero_amplitude_is_pure_drift() {
        let mut generator = DriftNoiseGenerator::seeded(0)
            .with_params(10.0, 2.0, 0.0)
            .unwrap();
        assert_eq!(generator.generate(4).unwrap(), vec![10.0, 12.0, 14.0, 16.0]);
    }

    #[test]
    fn test_invalid_params_rejected() {
        assert!(DriftNoiseGenerator::seeded(0)
            .with_params(f64::NAN, 0.5, 5.0)
            .is_err());
        assert!(DriftNoiseGenerator::seeded(0)
            .with_params(100.0, f64::INFINITY, 5.0)
            .is_err());
        assert!(DriftNoiseGenerator::seeded(0)
            .with_params(100.0, 0.5, -1.0)
            .is_err());
    }

    #[test]
    fn test_defaults() {
        let generator = DriftNoiseGenerator::from_entropy();
        assert_eq!(generator.base(), 100.0);
        assert_eq!(generator.trend(), 0.5);
        assert_eq!(generator.noise_amplitude(), 5.0);
        assert_eq!(generator.name(), "drift-noise");
    }
}
