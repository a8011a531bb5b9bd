//! Contract module containing trait definitions for prediction operations

mod series_generator;

pub use series_generator::SeriesGenerator;
