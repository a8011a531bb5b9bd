//! Service configuration types.

use prediction_spi::{PredictionError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Largest horizon accepted by default.
pub const DEFAULT_MAX_PERIODS: usize = 365;
/// Horizon used when a request omits `periods`.
pub const DEFAULT_PERIODS: usize = 30;
/// Uniform request timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;
/// Path prefix of the HTTP API.
pub const DEFAULT_BASE_PATH: &str = "/api";

/// Configuration of the prediction service and its HTTP surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Upper bound on `periods`
    pub max_periods: usize,
    /// Horizon applied when a request has none
    pub default_periods: usize,
    /// Request timeout enforced by server and client
    pub request_timeout_ms: u64,
    /// API path prefix, e.g. `/api`
    pub base_path: String,
    /// Fixed noise seed; entropy-seeded per request when `None`
    pub seed: Option<u64>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            max_periods: DEFAULT_MAX_PERIODS,
            default_periods: DEFAULT_PERIODS,
            request_timeout_ms: DEFAULT_TIMEOUT_MS,
            base_path: DEFAULT_BASE_PATH.to_string(),
            seed: None,
        }
    }
}

impl ServiceConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from `NOSTRADAMUS_*` environment variables; unset variables keep
    /// their defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup (used by [`ServiceConfig::from_env`]).
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(v) = lookup("NOSTRADAMUS_MAX_PERIODS") {
            config.max_periods = parse_var("NOSTRADAMUS_MAX_PERIODS", &v)?;
        }
        if let Some(v) = lookup("NOSTRADAMUS_DEFAULT_PERIODS") {
            config.default_periods = parse_var("NOSTRADAMUS_DEFAULT_PERIODS", &v)?;
        }
        if let Some(v) = lookup("NOSTRADAMUS_TIMEOUT_MS") {
            config.request_timeout_ms = parse_var("NOSTRADAMUS_TIMEOUT_MS", &v)?;
        }
        if let Some(v) = lookup("NOSTRADAMUS_BASE_PATH") {
            config.base_path = v;
        }
        if let Some(v) = lookup("NOSTRADAMUS_SEED") {
            config.seed = Some(parse_var("NOSTRADAMUS_SEED", &v)?);
        }

        config.validate()?;
        Ok(config)
    }

    /// Check that the values are mutually consistent.
    pub fn validate(&self) -> Result<()> {
        if self.max_periods == 0 {
            return Err(PredictionError::InvalidConfig(
                "max_periods must be positive".to_string(),
            ));
        }
        if self.default_periods == 0 {
            return Err(PredictionError::InvalidConfig(
                "default_periods must be positive".to_string(),
            ));
        }
        if self.default_periods > self.max_periods {
            return Err(PredictionError::InvalidConfig(format!(
                "default_periods ({}) cannot exceed max_periods ({})",
                self.default_periods, self.max_periods
            )));
        }
        if self.request_timeout_ms == 0 {
            return Err(PredictionError::InvalidConfig(
                "request_timeout_ms must be positive".to_string(),
            ));
        }
        if !self.base_path.starts_with('/') {
            return Err(PredictionError::InvalidConfig(format!(
                "base_path '{}' must start with '/'",
                self.base_path
            )));
        }
        if self.base_path.contains(['*', ':', '{', '}']) {
            return Err(PredictionError::InvalidConfig(format!(
                "base_path '{}' must not contain route wildcards or parameters",
                self.base_path
            )));
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    /// Base path without a trailing slash (`/api/` -> `/api`, `/` -> ``).
    pub fn normalized_base_path(&self) -> &str {
        self.base_path.trim_end_matches('/')
    }
}

fn parse_var<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| PredictionError::InvalidConfig(format!("{}: invalid value '{}'", key, value)))
}

/// Builder for ServiceConfig.
#[derive(Debug, Default)]
pub struct ServiceConfigBuilder {
    config: ServiceConfig,
}

impl ServiceConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the largest accepted horizon.
    pub fn max_periods(mut self, max_periods: usize) -> Self {
        self.config.max_periods = max_periods;
        self
    }

    /// Set the horizon used when a request omits it.
    pub fn default_periods(mut self, default_periods: usize) -> Self {
        self.config.default_periods = default_periods;
        self
    }

    /// Set the request timeout in milliseconds.
    pub fn request_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.config.request_timeout_ms = timeout_ms;
        self
    }

    /// Set the API path prefix.
    pub fn base_path(mut self, base_path: &str) -> Self {
        self.config.base_path = base_path.to_string();
        self
    }

    /// Fix the noise seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Build and validate the configuration.
    pub fn build(self) -> Result<ServiceConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
