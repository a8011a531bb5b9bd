//! # server
//!
//! REST API for the Nostradamus prediction service. The router is built by
//! [`app`] so tests and the client crate can run it in-process.

use axum::{routing::get, Json, Router};
use prediction_facade::{PredictionService, ServiceConfig};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

pub mod error;
pub mod routes;

pub use error::ApiError;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<PredictionService>,
}

impl AppState {
    pub fn new(service: PredictionService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }

    pub fn config(&self) -> &ServiceConfig {
        self.service.config()
    }
}

/// Liveness probe - is the server running?
async fn liveness() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "alive",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Readiness probe - can the service produce a prediction?
async fn readiness(
    axum::extract::State(state): axum::extract::State<AppState>,
) -> Json<serde_json::Value> {
    let check = state
        .service
        .predict(&prediction_facade::PredictionRequest::new(1));
    let (status, check_status, message) = match check {
        Ok(_) => ("ready", "Healthy", None),
        Err(e) => ("degraded", "Unhealthy", Some(e.to_string())),
    };

    Json(serde_json::json!({
        "status": status,
        "version": env!("CARGO_PKG_VERSION"),
        "checks": [{
            "name": "prediction",
            "status": check_status,
            "message": message
        }]
    }))
}

/// Build the full router: health probes at the root, the API under the
/// configured base path.
pub fn app(state: AppState) -> Router {
    let config = state.config().clone();

    let api = routes::router();
    let base = config.normalized_base_path();
    let router = Router::new()
        // Health endpoints (Kubernetes-compatible)
        .route("/health/live", get(liveness))
        .route("/health/ready", get(readiness))
        // Legacy health endpoint
        .route("/health", get(liveness));

    // axum refuses to nest at the root
    let router = if base.is_empty() {
        router.merge(api)
    } else {
        router.nest(base, api)
    };

    with_middleware(router, &config).with_state(state)
}

/// Apply the timeout, trace and CORS layers shared by every route
pub fn with_middleware(router: Router<AppState>, config: &ServiceConfig) -> Router<AppState> {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    router
        // Middleware layers
        .layer(TimeoutLayer::new(config.request_timeout()))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
