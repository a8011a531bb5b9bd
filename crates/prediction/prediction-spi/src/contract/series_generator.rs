//! Trait for forecast series generation

use crate::error::Result;

/// Produces a forecasted series for a requested horizon
///
/// Implementations own their random source (if any), so repeated calls on
/// the same instance advance it. Callers that need isolation between
/// requests build one generator per request.
///
/// # Example
///
/// ```rust,ignore
/// use prediction_spi::SeriesGenerator;
///
/// fn horizon_of<G: SeriesGenerator>(generator: &mut G) -> prediction_spi::Result<usize> {
///     Ok(generator.generate(30)?.len())
/// }
/// ```
pub trait SeriesGenerator: Send {
    /// Short identifier of the generation strategy
    fn name(&self) -> &str;

    /// Generate exactly `periods` future values
    ///
    /// # Errors
    ///
    /// `InvalidArgument` when `periods` is zero.
    fn generate(&mut self, periods: usize) -> Result<Vec<f64>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PredictionError;

    /// Mock implementation: constant series
    struct ConstantGenerator(f64);

    impl SeriesGenerator for ConstantGenerator {
        fn name(&self) -> &str {
            "constant"
        }

        fn generate(&mut self, periods: usize) -> Result<Vec<f64>> {
            if periods == 0 {
                return Err(PredictionError::invalid_argument(
                    "periods",
                    "must be at least 1",
                ));
            }
            Ok(vec![self.0; periods])
        }
    }

    #[test]
    fn test_generator_returns_requested_length() {
        let mut generator = ConstantGenerator(7.0);
        assert_eq!(generator.generate(12).unwrap().len(), 12);
    }

    #[test]
    fn test_generator_rejects_zero_periods() {
        let mut generator = ConstantGenerator(7.0);
        assert!(matches!(
            generator.generate(0),
            Err(PredictionError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_generator_as_trait_object() {
        let mut boxed: Box<dyn SeriesGenerator> = Box::new(ConstantGenerator(1.5));
        assert_eq!(boxed.name(), "constant");
        assert_eq!(boxed.generate(3).unwrap(), vec![1.5, 1.5, 1.5]);
    }
}
