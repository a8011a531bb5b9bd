//! API route handlers

use crate::{ApiError, AppState};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use prediction_facade::{
    AppInfo, HistoricalData, ModelDescriptor, PredictionRequest, PredictionResponse,
};

/// Routes relative to the API base path
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/info", get(app_info))
        .route("/predict", post(predict))
        .route("/models", get(list_models))
        .route("/data/:dataset_id", get(historical_data))
}

pub async fn app_info(State(state): State<AppState>) -> Json<AppInfo> {
    Json(state.service.app_info())
}

pub async fn predict(
    State(state): State<AppState>,
    payload: Result<Json<PredictionRequest>, JsonRejection>,
) -> Result<Json<PredictionResponse>, ApiError> {
    let Json(request) = payload?;
    let response = state.service.predict(&request)?;
    Ok(Json(response))
}

pub async fn list_models(State(state): State<AppState>) -> Json<Vec<ModelDescriptor>> {
    Json(state.service.list_models())
}

pub async fn historical_data(
    State(state): State<AppState>,
    Path(dataset_id): Path<String>,
) -> Result<Json<HistoricalData>, ApiError> {
    Ok(Json(state.service.historical_data(&dataset_id)?))
}
