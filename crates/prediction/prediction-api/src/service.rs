//! Prediction service entry point
//!
//! Validates requests against a [`ServiceConfig`] and drives
//! generator -> statistics -> assembler. Every call builds its own
//! generator, so one service can be shared across concurrent requests.

use crate::config::ServiceConfig;
use prediction_core::{assembler, catalog, statistics, DriftNoiseGenerator};
use prediction_spi::{
    AppInfo, HistoricalData, ModelDescriptor, PredictionError, PredictionRequest,
    PredictionResponse, Result, SeriesGenerator,
};
use tracing::{debug, info};

/// Stateless prediction service
#[derive(Debug, Clone, Default)]
pub struct PredictionService {
    config: ServiceConfig,
}

impl PredictionService {
    /// Create a service after validating `config`.
    pub fn new(config: ServiceConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    pub fn app_info(&self) -> AppInfo {
        catalog::app_info()
    }

    pub fn list_models(&self) -> Vec<ModelDescriptor> {
        catalog::list_models()
    }

    /// Look up a dataset's history. No store is wired in, so the record list
    /// is always empty.
    pub fn historical_data(&self, dataset_id: &str) -> Result<HistoricalData> {
        if dataset_id.trim().is_empty() {
            return Err(PredictionError::invalid_argument(
                "dataset_id",
                "must not be empty",
            ));
        }
        Ok(HistoricalData {
            dataset_id: dataset_id.to_string(),
            records: Vec::new(),
            timestamp: assembler::now_timestamp(),
        })
    }

    /// Generate a forecast with the reference generator.
    ///
    /// Uses the configured seed when present, OS entropy otherwise.
    pub fn predict(&self, request: &PredictionRequest) -> Result<PredictionResponse> {
        let mut generator = match self.config.seed {
            Some(seed) => DriftNoiseGenerator::seeded(seed),
            None => DriftNoiseGenerator::from_entropy(),
        };
        self.predict_with(request, &mut generator)
    }

    /// Generate a forecast with a caller-supplied generator.
    pub fn predict_with(
        &self,
        request: &PredictionRequest,
        generator: &mut dyn SeriesGenerator,
    ) -> Result<PredictionResponse> {
        let periods = self.validate_periods(request.periods)?;
        let model = request.model_or_default();
        if catalog::find_model(model).is_none() {
            return Err(PredictionError::invalid_argument(
                "model",
                format!("unknown model '{}'", model),
            ));
        }

        debug!(periods, model, generator = generator.name(), "generating prediction");
        let values = generator.generate(periods)?;
        let stats = statistics::compute(&values)?;
        let response = assembler::assemble(periods, Some(model), values, stats);

        info!(
            periods,
            model,
            mean = response.statistics.mean,
            "prediction generated"
        );
        Ok(response)
    }

    /// Resolve the requested horizon against the configured bounds.
    pub fn validate_periods(&self, periods: Option<i64>) -> Result<usize> {
        let periods = match periods {
            None => return Ok(self.config.default_periods),
            Some(p) => p,
        };

        if periods < 1 {
            return Err(PredictionError::invalid_argument(
                "periods",
                format!("must be at least 1, got {}", periods),
            ));
        }

        let max = self.config.max_periods;
        match usize::try_from(periods) {
            Ok(p) if p <= max => Ok(p),
            _ => Err(PredictionError::invalid_argument(
                "periods",
                format!("must be at most {}, got {}", max, periods),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServiceConfigBuilder;

    fn seeded_service(seed: u64) -> PredictionService {
        PredictionService::new(ServiceConfigBuilder::new().seed(seed).build().unwrap()).unwrap()
    }

    #[test]
    fn test_predict_length_and_defaults() {
        let service = seeded_service(3);
        let response = service.predict(&PredictionRequest::new(12)).unwrap();

        assert_eq!(response.model, "auto");
        assert_eq!(response.periods, 12);
        assert_eq!(response.predictions.len(), 12);
    }

    #[test]
    fn test_missing_periods_uses_default() {
        let service = seeded_service(3);
        let response = service.predict(&PredictionRequest::default()).unwrap();
        assert_eq!(response.periods, 30);
        assert_eq!(response.predictions.len(), 30);
    }

    #[test]
    fn test_non_positive_periods_rejected() {
        let service = seeded_service(3);
        for periods in [0, -1, i64::MIN] {
            let result = service.predict(&PredictionRequest::new(periods));
            assert!(
                matches!(result, Err(PredictionError::InvalidArgument { ref name, .. }) if name == "periods"),
                "periods={} gave {:?}",
                periods,
                result
            );
        }
    }

    #[test]
    fn test_upper_bound_enforced() {
        let service = seeded_service(3);
        assert!(service.predict(&PredictionRequest::new(365)).is_ok());
        assert!(service.predict(&PredictionRequest::new(366)).is_err());
        assert!(service.predict(&PredictionRequest::new(i64::MAX)).is_err());
    }

    #[test]
    fn test_unknown_model_rejected() {
        let service = seeded_service(3);
        let result = service.predict(&PredictionRequest::new(5).with_model("xgboost"));
        assert!(matches!(
            result,
            Err(PredictionError::InvalidArgument { ref name, .. }) if name == "model"
        ));
    }

    #[test]
    fn test_catalog_models_accepted() {
        let service = seeded_service(3);
        for model in service.list_models() {
            let response = service
                .predict(&PredictionRequest::new(3).with_model(model.id.to_string()))
                .unwrap();
            assert_eq!(response.model, model.id);
        }
    }

    #[test]
    fn test_seeded_service_is_deterministic() {
        let a = seeded_service(11).predict(&PredictionRequest::new(8)).unwrap();
        let b = seeded_service(11).predict(&PredictionRequest::new(8)).unwrap();
        assert_eq!(a.predictions, b.predictions);
        assert_eq!(a.statistics, b.statistics);
    }

    #[test]
    fn test_predict_with_custom_generator() {
        let service = PredictionService::default();
        let mut generator = DriftNoiseGenerator::seeded(0)
            .with_params(1.0, 1.0, 0.0)
            .unwrap();

        let response = service
            .predict_with(&PredictionRequest::new(3), &mut generator)
            .unwrap();
        assert_eq!(response.predictions, vec![1.0, 2.0, 3.0]);
        assert_eq!(response.statistics.mean, 2.0);
    }

    #[test]
    fn test_historical_data_stub() {
        let service = PredictionService::default();
        let data = service.historical_data("sales-2024").unwrap();
        assert_eq!(data.dataset_id, "sales-2024");
        assert!(data.records.is_empty());
        assert!(service.historical_data("  ").is_err());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = ServiceConfig {
            max_periods: 0,
            ..ServiceConfig::default()
        };
        assert!(matches!(
            PredictionService::new(config),
            Err(PredictionError::InvalidConfig(_))
        ));
    }
}
