//! Prediction request and response models

use crate::model::Statistics;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Model identifier used when a request does not name one
pub const DEFAULT_MODEL: &str = "auto";

/// Request for a forecast
///
/// `periods` is signed so that zero and negative horizons reach validation
/// and are reported as invalid arguments instead of decoding failures.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionRequest {
    /// Horizon; the service default applies when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub periods: Option<i64>,
    /// Model identifier; `"auto"` when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

impl PredictionRequest {
    /// Request with an explicit horizon and the default model
    pub fn new(periods: i64) -> Self {
        Self {
            periods: Some(periods),
            model: None,
        }
    }

    /// Set the model identifier
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Model identifier with the default applied
    pub fn model_or_default(&self) -> &str {
        self.model.as_deref().unwrap_or(DEFAULT_MODEL)
    }
}

/// Outcome marker carried in every response body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PredictionStatus {
    Success,
    Error,
}

impl fmt::Display for PredictionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Completed forecast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub model: String,
    pub periods: usize,
    /// Forecasted values, `predictions.len() == periods`
    pub predictions: Vec<f64>,
    pub statistics: Statistics,
    /// ISO-8601 UTC time of assembly
    pub timestamp: String,
    pub status: PredictionStatus,
}
