//! Prediction Core
//!
//! Core implementations for series generation, summary statistics,
//! response assembly and the static catalogs.

pub mod assembler;
pub mod catalog;
pub mod generator;
pub mod statistics;
pub mod summary;

// Re-export SPI traits for implementations
pub use prediction_spi::{
    AppInfo, ErrorBody, HistoricalData, ModelDescriptor, PredictionError, PredictionRequest,
    PredictionResponse, PredictionStatus, Result, SeriesGenerator, Statistics, DEFAULT_MODEL,
};

// Re-export main types
pub use catalog::{APP_INFO, MODEL_CATALOG};
pub use generator::DriftNoiseGenerator;
pub use summary::{LabeledValue, PredictionSummary};
