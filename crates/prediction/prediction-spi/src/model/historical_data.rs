//! Historical dataset model

use serde::{Deserialize, Serialize};

/// Historical records of a dataset
///
/// No dataset store exists yet, so `records` is always empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoricalData {
    pub dataset_id: String,
    pub records: Vec<f64>,
    /// ISO-8601 UTC time of the lookup
    pub timestamp: String,
}
