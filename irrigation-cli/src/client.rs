//! Prediction Service Client
//!
//! Typed HTTP client for the irrigation server. Wire shapes come from
//! `irrigation-engine`, so the CLI decodes exactly what the server encodes.

use std::time::Duration;

use reqwest::Client;
use serde_json::{json, Value};
use thiserror::Error;
use url::Url;

use irrigation_engine::{ErrorResponse, HealthStatus, PredictResponse};

/// Client configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the prediction service.
    pub base_url: Url,

    /// Request timeout.
    pub timeout: Duration,
}

impl ApiConfig {
    /// Build a config from the CLI's global flags.
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self, ApiClientError> {
        Ok(Self {
            base_url: Url::parse(base_url)
                .map_err(|e| ApiClientError::Configuration(e.to_string()))?,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

/// Errors from client operations.
#[derive(Debug, Error)]
pub enum ApiClientError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Request error: {0}")]
    Request(String),

    #[error("Response decode error: {0}")]
    Decode(String),

    #[error("Service error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Request timed out")]
    Timeout,
}

impl From<reqwest::Error> for ApiClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiClientError::Timeout
        } else if err.is_connect() {
            ApiClientError::Connection(err.to_string())
        } else if err.is_decode() {
            ApiClientError::Decode(err.to_string())
        } else {
            ApiClientError::Request(err.to_string())
        }
    }
}

/// HTTP client for the irrigation prediction service.
pub struct ApiClient {
    http: Client,
    config: ApiConfig,
}

impl ApiClient {
    /// Create a client with the given configuration.
    pub fn new(config: ApiConfig) -> Result<Self, ApiClientError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ApiClientError::Configuration(e.to_string()))?;

        Ok(Self { http, config })
    }

    /// POST a sensor reading to `/predict`.
    ///
    /// Values are forwarded untouched; validation happens server-side so the
    /// CLI reports exactly what any other client would see.
    pub async fn predict(&self, sensor_values: Vec<Value>) -> Result<PredictResponse, ApiClientError> {
        let url = self.join("/predict")?;
        let response = self
            .http
            .post(url)
            .json(&json!({ "sensor_values": sensor_values }))
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            Ok(response.json::<PredictResponse>().await?)
        } else {
            Err(self.api_error(status.as_u16(), response).await)
        }
    }

    /// GET `/health`.
    pub async fn health(&self) -> Result<HealthStatus, ApiClientError> {
        let url = self.join("/health")?;
        let response = self.http.get(url).send().await?;

        let status = response.status();
        if status.is_success() {
            Ok(response.json::<HealthStatus>().await?)
        } else {
            Err(self.api_error(status.as_u16(), response).await)
        }
    }

    fn join(&self, path: &str) -> Result<Url, ApiClientError> {
        self.config
            .base_url
            .join(path)
            .map_err(|e| ApiClientError::Configuration(e.to_string()))
    }

    /// Extract the server's `{"error": ...}` message, falling back to the
    /// raw status when the body is not the uniform failure shape.
    async fn api_error(&self, status: u16, response: reqwest::Response) -> ApiClientError {
        let message = match response.json::<ErrorResponse>().await {
            Ok(body) => body.error,
            Err(_) => format!("unexpected response with status {}", status),
        };
        ApiClientError::Api { status, message }
    }
}
