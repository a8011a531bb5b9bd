//! Response assembly

use chrono::{DateTime, SecondsFormat, Utc};
use prediction_spi::{PredictionResponse, PredictionStatus, Statistics, DEFAULT_MODEL};

/// Format a UTC instant the way the API reports timestamps
/// (`2024-05-01T12:00:00.000Z`)
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Current UTC time as an API timestamp
pub fn now_timestamp() -> String {
    iso_timestamp(Utc::now())
}

/// Wrap generated values and their statistics into a successful response
pub fn assemble(
    periods: usize,
    model: Option<&str>,
    values: Vec<f64>,
    statistics: Statistics,
) -> PredictionResponse {
    PredictionResponse {
        model: model.unwrap_or(DEFAULT_MODEL).to_string(),
        periods,
        predictions: values,
        statistics,
        timestamp: now_timestamp(),
        status: PredictionStatus::Success,
    }
}
