//! # client
//!
//! Typed HTTP client for the Nostradamus prediction API.
//!
//! Every call is bounded by the configured request timeout. Network errors
//! and timeouts surface as [`PredictionError::TransportFailure`]; error
//! bodies returned by the server are rebuilt into their original variant.

use prediction_facade::{
    AppInfo, ErrorBody, HistoricalData, ModelDescriptor, PredictionError, PredictionRequest,
    PredictionResponse, Result, DEFAULT_TIMEOUT_MS,
};
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Default API location used by the mobile client.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";

/// Client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API root including the base path, e.g. `http://host:8080/api`
    pub base_url: String,
    pub timeout_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            ..Self::default()
        }
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }
}

/// Async client for the prediction API
#[derive(Debug, Clone)]
pub struct PredictionClient {
    http: Client,
    base_url: Url,
}

impl PredictionClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        if config.timeout_ms == 0 {
            return Err(PredictionError::InvalidConfig(
                "timeout_ms must be positive".to_string(),
            ));
        }

        let base_url = Url::parse(&config.base_url).map_err(|e| {
            PredictionError::InvalidConfig(format!("invalid base url '{}': {}", config.base_url, e))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(PredictionError::InvalidConfig(format!(
                "base url '{}' cannot carry a path",
                config.base_url
            )));
        }

        let http = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .user_agent(concat!("nostradamus-client/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| PredictionError::TransportFailure(e.to_string()))?;

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Fetch application metadata
    pub async fn app_info(&self) -> Result<AppInfo> {
        let url = self.endpoint(&["info"]);
        self.send(self.http.get(url)).await
    }

    /// Request a prediction
    pub async fn predict(&self, request: &PredictionRequest) -> Result<PredictionResponse> {
        let url = self.endpoint(&["predict"]);
        self.send(self.http.post(url).json(request)).await
    }

    /// Fetch the model catalog
    pub async fn list_models(&self) -> Result<Vec<ModelDescriptor>> {
        let url = self.endpoint(&["models"]);
        self.send(self.http.get(url)).await
    }

    /// Fetch a dataset's historical records
    pub async fn historical_data(&self, dataset_id: &str) -> Result<HistoricalData> {
        // An empty id would hit `/data/`, which no route serves
        if dataset_id.trim().is_empty() {
            return Err(PredictionError::invalid_argument(
                "dataset_id",
                "must not be empty",
            ));
        }
        let url = self.endpoint(&["data", dataset_id]);
        self.send(self.http.get(url)).await
    }

    /// Append percent-encoded path segments to the base url
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // cannot_be_a_base urls are rejected in `new`
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn send<T: DeserializeOwned>(&self, request: reqwest::RequestBuilder) -> Result<T> {
        let response = request.send().await.map_err(transport_failure)?;
        decode(response).await
    }
}

fn transport_failure(error: reqwest::Error) -> PredictionError {
    let message = if error.is_timeout() {
        format!("request timed out: {}", error)
    } else {
        error.to_string()
    };
    tracing::error!(error = %message, "prediction api unreachable");
    PredictionError::TransportFailure(message)
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    let bytes = response.bytes().await.map_err(transport_failure)?;

    if status.is_success() {
        return parse_body(&bytes);
    }

    match parse_body::<ErrorBody>(&bytes) {
        Ok(body) => {
            tracing::warn!(%status, kind = %body.kind, "prediction api returned an error");
            Err(body.into())
        }
        Err(_) => Err(PredictionError::TransportFailure(format!(
            "unexpected HTTP status {}",
            status
        ))),
    }
}

fn parse_body<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    serde_json::from_slice(bytes)
        .map_err(|e| PredictionError::TransportFailure(format!("invalid response body: {}", e)))
}
