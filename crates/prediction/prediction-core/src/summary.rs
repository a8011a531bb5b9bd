//! Condensed, human-readable view of a prediction

use prediction_spi::PredictionResponse;
use std::fmt;

/// Number of leading/trailing values shown by default
pub const DEFAULT_SAMPLE_SIZE: usize = 5;

/// A forecast value with its 1-based step offset (`T+step`)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabeledValue {
    pub step: usize,
    pub value: f64,
}

/// Head and tail sample of a [`PredictionResponse`]
#[derive(Debug, Clone)]
pub struct PredictionSummary<'a> {
    response: &'a PredictionResponse,
    first: Vec<LabeledValue>,
    last: Vec<LabeledValue>,
}

impl<'a> PredictionSummary<'a> {
    /// `first` holds up to `sample_size` leading values; `last` holds the
    /// trailing `sample_size` values only when the series is longer than the
    /// sample, so short series are never shown twice.
    pub fn new(response: &'a PredictionResponse, sample_size: usize) -> Self {
        let values = &response.predictions;
        let sample = sample_size.min(values.len());

        let first = values[..sample]
            .iter()
            .enumerate()
            .map(|(i, &value)| LabeledValue { step: i + 1, value })
            .collect();

        let last = if values.len() > sample {
            let start = values.len() - sample;
            values[start..]
                .iter()
                .enumerate()
                .map(|(i, &value)| LabeledValue {
                    step: start + i + 1,
                    value,
                })
                .collect()
        } else {
            Vec::new()
        };

        Self {
            response,
            first,
            last,
        }
    }

    pub fn first(&self) -> &[LabeledValue] {
        &self.first
    }

    pub fn last(&self) -> &[LabeledValue] {
        &self.last
    }
}

impl fmt::Display for PredictionSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.response;
        // Drop sub-second precision: "2024-05-01T12:00:00"
        let timestamp = r.timestamp.get(..19).unwrap_or(&r.timestamp);

        writeln!(f, "Model:     {}", r.model)?;
        writeln!(f, "Periods:   {}", r.periods)?;
        writeln!(f, "Timestamp: {}", timestamp)?;
        writeln!(f)?;
        writeln!(f, "Statistics:")?;
        writeln!(f, "  Mean: {:.2}", r.statistics.mean)?;
        writeln!(f, "  Min:  {:.2}", r.statistics.min)?;
        writeln!(f, "  Max:  {:.2}", r.statistics.max)?;
        writeln!(f)?;
        writeln!(f, "First {} values:", self.first.len())?;
        for v in &self.first {
            writeln!(f, "  T+{}: {:.2}", v.step, v.value)?;
        }
        if !self.last.is_empty() {
            writeln!(f)?;
            writeln!(f, "Last {} values:", self.last.len())?;
            for v in &self.last {
                writeln!(f, "  T+{}: {:.2}", v.step, v.value)?;
            }
        }
        Ok(())
    }
}
