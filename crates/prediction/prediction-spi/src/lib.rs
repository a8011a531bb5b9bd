//! Prediction Service Provider Interface
//!
//! Defines the series generator contract, the request/response models and
//! the error taxonomy shared by every prediction crate.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::SeriesGenerator;
pub use error::{PredictionError, Result};
pub use model::{
    AppInfo, ErrorBody, HistoricalData, ModelDescriptor, PredictionRequest, PredictionResponse,
    PredictionStatus, Statistics, DEFAULT_MODEL,
};
