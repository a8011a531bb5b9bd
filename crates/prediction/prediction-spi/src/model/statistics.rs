//! Summary statistics model

use serde::{Deserialize, Serialize};

/// Summary aggregates over a predicted sequence
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    /// Arithmetic mean
    pub mean: f64,
    /// Smallest value
    pub min: f64,
    /// Largest value
    pub max: f64,
}

impl Statistics {
    /// Width of the observed range
    pub fn range(&self) -> f64 {
        self.max - self.min
    }
}
