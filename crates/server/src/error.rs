//! HTTP mapping of prediction errors

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use prediction_facade::{ErrorBody, PredictionError};

/// Error returned by API handlers
#[derive(Debug)]
pub struct ApiError(pub PredictionError);

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self.0 {
            PredictionError::InvalidArgument { .. } => StatusCode::BAD_REQUEST,
            PredictionError::EmptyInput => StatusCode::UNPROCESSABLE_ENTITY,
            PredictionError::TransportFailure(_) => StatusCode::BAD_GATEWAY,
            PredictionError::InvalidConfig(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<PredictionError> for ApiError {
    fn from(error: PredictionError) -> Self {
        Self(error)
    }
}

/// Malformed bodies (e.g. non-numeric `periods`) are invalid arguments.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(PredictionError::invalid_argument(
            "body",
            rejection.body_text(),
        ))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self.0, "request failed");
        } else {
            tracing::warn!(error = %self.0, "request rejected");
        }
        (status, Json(ErrorBody::from(&self.0))).into_response()
    }
}
