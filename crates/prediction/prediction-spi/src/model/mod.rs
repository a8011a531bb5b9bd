//! Model module containing data structures

mod app_info;
mod error_body;
mod historical_data;
mod model_descriptor;
mod prediction;
mod statistics;

pub use app_info::AppInfo;
pub use error_body::ErrorBody;
pub use historical_data::HistoricalData;
pub use model_descriptor::ModelDescriptor;
pub use prediction::{PredictionRequest, PredictionResponse, PredictionStatus, DEFAULT_MODEL};
pub use statistics::Statistics;
