//! Prediction Consumer API
//!
//! Consumer configuration and the service entry point for predictions.
//!
//! This crate provides:
//! - [`ServiceConfig`] and its builder
//! - [`PredictionService`], which validates requests and drives the core
//! - Re-exports from SPI and core for convenience

pub mod config;
pub mod service;

pub use config::{
    ServiceConfig, ServiceConfigBuilder, DEFAULT_BASE_PATH, DEFAULT_MAX_PERIODS, DEFAULT_PERIODS,
    DEFAULT_TIMEOUT_MS,
};
pub use service::PredictionService;

// Re-export from core
pub use prediction_core::{
    assembler, catalog, generator, statistics, summary, DriftNoiseGenerator, LabeledValue,
    PredictionSummary, APP_INFO, MODEL_CATALOG,
};

// Re-export traits from SPI
pub use prediction_spi::{
    AppInfo, ErrorBody, HistoricalData, ModelDescriptor, PredictionError, PredictionRequest,
    PredictionResponse, PredictionStatus, Result, SeriesGenerator, Statistics, DEFAULT_MODEL,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{PredictionService, ServiceConfig, ServiceConfigBuilder};
    pub use prediction_core::{DriftNoiseGenerator, PredictionSummary};
    pub use prediction_spi::{
        PredictionError, PredictionRequest, PredictionResponse, Result, SeriesGenerator,
        Statistics,
    };
}
