use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;
use std::sync::Arc;
use tracing::error;

use crate::storage::{TokenStore, TOKEN_KEY};

/// Normalized request failure crossing the service boundary. Raw transport
/// errors never leave this module.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("Network error")]
    Network,
    #[error("Unexpected response shape")]
    Decode,
}

impl ApiError {
    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::Status {
            status: 404,
            message: message.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Status { status: 404, .. })
    }

    /// User-facing message, suitable for a slice's error field.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// Request/response boundary the services talk through. Payloads are plain
/// JSON values; typed decoding happens in the services.
#[async_trait]
pub trait ApiClient: Send + Sync {
    async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<Value, ApiError>;
    async fn post(&self, path: &str, body: Value) -> Result<Value, ApiError>;
    async fn put(&self, path: &str, body: Value) -> Result<Value, ApiError>;
    async fn delete(&self, path: &str) -> Result<Value, ApiError>;
}

/// Decodes a JSON payload into the type the caller expects.
pub(crate) fn decode<T: serde::de::DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|e| {
        error!(error = %e, "decoding response payload failed");
        ApiError::Decode
    })
}

/// Production client. Attaches the persisted session token as a bearer
/// header on every request.
pub struct HttpApi {
    http: reqwest::Client,
    base_url: String,
    tokens: Arc<dyn TokenStore>,
}

impl HttpApi {
    pub fn new(
        base_url: &str,
        timeout: std::time::Duration,
        tokens: Arc<dyn TokenStore>,
    ) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            tokens,
        })
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<Value>,
    ) -> Result<Value, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.http.request(method, &url);

        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(&body);
        }
        if let Ok(Some(token)) = self.tokens.get(TOKEN_KEY) {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|e| {
            error!(error = %e, %url, "request failed");
            ApiError::Network
        })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| {
            error!(error = %e, %url, "reading response body failed");
            ApiError::Network
        })?;

        if !status.is_success() {
            // Prefer the backend's own {message} shape; fall back to the
            // status description.
            let message = serde_json::from_str::<Value>(&text)
                .ok()
                .and_then(|v| v.get("message").and_then(Value::as_str).map(String::from))
                .unwrap_or_else(|| {
                    status
                        .canonical_reason()
                        .unwrap_or("Request failed")
                        .to_string()
                });
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        if text.is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&text).map_err(|e| {
            error!(error = %e, %url, "response was not valid json");
            ApiError::Decode
        })
    }
}

#[async_trait]
impl ApiClient for HttpApi {
    async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<Value, ApiError> {
        self.send(Method::GET, path, query, None).await
    }

    async fn post(&self, path: &str, body: Value) -> Result<Value, ApiError> {
        self.send(Method::POST, path, &[], Some(body)).await
    }

    async fn put(&self, path: &str, body: Value) -> Result<Value, ApiError> {
        self.send(Method::PUT, path, &[], Some(body)).await
    }

    async fn delete(&self, path: &str) -> Result<Value, ApiError> {
        self.send(Method::DELETE, path, &[], None).await
    }
}
