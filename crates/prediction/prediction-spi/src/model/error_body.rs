//! Wire form of a failed request

use crate::error::PredictionError;
use crate::model::PredictionStatus;
use serde::{Deserialize, Serialize};

/// Error payload returned by the HTTP surface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Always [`PredictionStatus::Error`]
    pub status: PredictionStatus,
    /// Stable error identifier, see [`PredictionError::kind`]
    pub kind: String,
    /// Human-readable message
    pub message: String,
}

impl From<&PredictionError> for ErrorBody {
    fn from(error: &PredictionError) -> Self {
        Self {
            status: PredictionStatus::Error,
            kind: error.kind().to_string(),
            message: error.to_string(),
        }
    }
}

impl From<ErrorBody> for PredictionError {
    fn from(body: ErrorBody) -> Self {
        PredictionError::from_kind(&body.kind, &body.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body_from_error() {
        let body = ErrorBody::from(&PredictionError::EmptyInput);
        assert_eq!(body.status, PredictionStatus::Error);
        assert_eq!(body.kind, "empty_input");
        assert!(body.message.starts_with("Empty input"));
    }

    #[test]
    fn test_error_body_json_shape() {
        let error = PredictionError::invalid_argument("periods", "must be at least 1");
        let json = serde_json::to_value(ErrorBody::from(&error)).unwrap();
        assert_eq!(json["status"], "error");
        assert_eq!(json["kind"], "invalid_argument");
    }
}
