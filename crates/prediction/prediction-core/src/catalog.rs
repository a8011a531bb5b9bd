//! Static catalogs: application metadata and the model list

use prediction_spi::{AppInfo, ModelDescriptor};
use std::borrow::Cow;

/// Process-wide application metadata
pub const APP_INFO: AppInfo = AppInfo {
    version: Cow::Borrowed("0.1.0"),
    author: Cow::Borrowed("Federico Ronzi"),
    license: Cow::Borrowed("MIT"),
    status: Cow::Borrowed("active"),
};

/// Known model identifiers, in display order
pub static MODEL_CATALOG: [ModelDescriptor; 4] = [
    ModelDescriptor::new("auto", "Auto", "Automatic model selection"),
    ModelDescriptor::new(
        "arima",
        "ARIMA",
        "AutoRegressive Integrated Moving Average",
    ),
    ModelDescriptor::new("prophet", "Prophet", "Facebook Prophet"),
    ModelDescriptor::new("lstm", "LSTM", "Long Short-Term Memory"),
];

pub fn app_info() -> AppInfo {
    APP_INFO
}

pub fn list_models() -> Vec<ModelDescriptor> {
    MODEL_CATALOG.to_vec()
}

/// Look up a catalog entry by exact id
pub fn find_model(id: &str) -> Option<&'static ModelDescriptor> {
    MODEL_CATALOG.iter().find(|m| m.id == id)
}
