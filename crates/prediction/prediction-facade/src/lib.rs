//! Prediction Facade
//!
//! High-level API for Nostradamus predictions. Re-exports all public types
//! from the prediction stack for convenient usage.

// Re-export everything from API (which includes SPI and core)
pub use prediction_api::*;

// Explicit re-exports for documentation
pub use prediction_api::prelude;

// Re-export core modules for direct access
pub use prediction_core::{assembler, catalog, generator, statistics, summary};

// Re-export SPI contract
pub use prediction_spi::SeriesGenerator;
