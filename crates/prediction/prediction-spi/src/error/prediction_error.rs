//! Prediction error types

use thiserror::Error;

/// Errors that can occur while serving a prediction request
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PredictionError {
    /// A request parameter is out of range or malformed
    #[error("Invalid argument '{name}': {reason}")]
    InvalidArgument { name: String, reason: String },

    /// Statistics were requested over zero samples
    #[error("Empty input: statistics need at least one sample")]
    EmptyInput,

    /// Network failure or timeout between client and service
    #[error("Transport failure: {0}")]
    TransportFailure(String),

    /// Service configuration is inconsistent
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl PredictionError {
    /// Shorthand for [`PredictionError::InvalidArgument`]
    pub fn invalid_argument(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Stable identifier used on the wire
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidArgument { .. } => "invalid_argument",
            Self::EmptyInput => "empty_input",
            Self::TransportFailure(_) => "transport_failure",
            Self::InvalidConfig(_) => "invalid_config",
        }
    }

    /// Rebuild an error from its wire identifier and message.
    ///
    /// Unknown kinds are reported as transport failures since the peer
    /// answered with something this side cannot interpret.
    pub fn from_kind(kind: &str, message: &str) -> Self {
        match kind {
            "invalid_argument" => Self::invalid_argument("request", message),
            "empty_input" => Self::EmptyInput,
            "invalid_config" => Self::InvalidConfig(message.to_string()),
            _ => Self::TransportFailure(message.to_string()),
        }
    }
}
