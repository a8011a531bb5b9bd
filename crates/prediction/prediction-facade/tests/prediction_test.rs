//! Unit tests for the prediction facade
//!
//! Exercise each component through the public re-exports.

use prediction_facade::{
    assembler, catalog, statistics, DriftNoiseGenerator, PredictionError, SeriesGenerator,
    Statistics,
};

// ============================================================================
// Statistics
// ============================================================================

#[test]
fn test_compute_single_value() {
    let stats = statistics::compute(&[5.0]).unwrap();
    assert_eq!(
        stats,
        Statistics {
            mean: 5.0,
            min: 5.0,
            max: 5.0
        }
    );
}

#[test]
fn test_compute_empty_fails() {
    assert!(matches!(
        statistics::compute(&[]),
        Err(PredictionError::EmptyInput)
    ));
}

// ============================================================================
// Generator
// ============================================================================

#[test]
fn test_generate_returns_exact_length() {
    let mut generator = DriftNoiseGenerator::seeded(2024);
    for periods in 1..=60 {
        assert_eq!(generator.generate(periods).unwrap().len(), periods);
    }
}

#[test]
fn test_generated_series_drifts_upward() {
    let values = DriftNoiseGenerator::seeded(5).generate(365).unwrap();
    // Drift over 364 steps is 182; noise can move each end by at most 5
    assert!(values[364] - values[0] > 170.0);
}

// ============================================================================
// Assembler and catalog
// ============================================================================

#[test]
fn test_assemble_defaults_model() {
    let values = vec![1.0, 2.0, 3.0];
    let stats = statistics::compute(&values).unwrap();
    let response = assembler::assemble(30, None, values, stats);
    assert_eq!(response.model, "auto");
}

#[test]
fn test_list_models_fixed_order() {
    let models = catalog::list_models();
    assert_eq!(models.len(), 4);
    let ids: Vec<&str> = models.iter().map(|m| &*m.id).collect();
    assert_eq!(ids, ["auto", "arima", "prophet", "lstm"]);
}
