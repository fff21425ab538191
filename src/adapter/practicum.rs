//! HTTP client for the Practicum homework status API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client as HttpClient, StatusCode};
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::HttpConfig;
use crate::error::ApiError;
use crate::port::SubmissionSource;

/// Client for `GET <endpoint>?from_date=<unix seconds>` with an
/// `Authorization: OAuth <token>` header.
pub struct PracticumClient {
    http: HttpClient,
    endpoint: String,
    token: String,
}

impl PracticumClient {
    /// Create a client with explicit request and connect timeouts.
    #[must_use]
    pub fn new(endpoint: String, token: String, http_config: &HttpConfig) -> Self {
        let http = HttpClient::builder()
            .timeout(Duration::from_millis(http_config.timeout_ms))
            .connect_timeout(Duration::from_millis(http_config.connect_timeout_ms))
            .build()
            .unwrap_or_else(|err| {
                warn!(error = %err, "Failed to build HTTP client, using defaults");
                HttpClient::new()
            });

        Self {
            http,
            endpoint,
            token,
        }
    }
}

#[async_trait]
impl SubmissionSource for PracticumClient {
    async fn fetch(&self, from_date: i64) -> Result<Value, ApiError> {
        // The token stays out of the logs.
        debug!(endpoint = %self.endpoint, from_date, "Requesting homework statuses");

        let response = self
            .http
            .get(&self.endpoint)
            .header("Authorization", format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await
            .map_err(|source| ApiError::EndpointUnreachable {
                endpoint: self.endpoint.clone(),
                source,
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(ApiError::UnexpectedStatusCode {
                endpoint: self.endpoint.clone(),
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("unknown").to_string(),
            });
        }

        response.json().await.map_err(ApiError::Decode)
    }
}
