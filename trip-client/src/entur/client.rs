//! Entur journey planner HTTP client.
//!
//! Sends GraphQL query strings and returns the unwrapped `data` payload.
//! No retries: a failed request is reported to the caller as-is.

use std::future::Future;

use reqwest::header::{HeaderMap, HeaderValue};
use serde_json::Value;
use tracing::debug;

use super::error::EnturError;
use super::types::{GraphQlResponse, QueryBody};

/// Default endpoint of the journey planner API (v3).
pub const DEFAULT_ENDPOINT: &str = "https://api.entur.io/journey-planner/v3/graphql";

/// Default value for the `ET-Client-Name` header.
pub const DEFAULT_CLIENT_NAME: &str = "trip-client";

/// Header Entur asks every client to identify itself with.
const CLIENT_NAME_HEADER: &str = "et-client-name";

/// Sends a query and hands back the response's `data` payload.
///
/// This is the only point where a request blocks; everything before and
/// after it is pure.
pub trait Transport {
    /// Send `query` and return the unwrapped `data` field of the response.
    fn send(&self, query: &str) -> impl Future<Output = Result<Value, EnturError>> + Send;
}

/// Configuration for the Entur client.
#[derive(Debug, Clone)]
pub struct EnturConfig {
    /// GraphQL endpoint URL
    pub endpoint: String,
    /// Value of the `ET-Client-Name` header
    pub client_name: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl EnturConfig {
    /// Create a config with the given client name and default endpoint.
    pub fn new(client_name: impl Into<String>) -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            client_name: client_name.into(),
            timeout_secs: 30,
        }
    }

    /// Set a custom endpoint (for testing).
    pub fn with_endpoint(mut self, url: impl Into<String>) -> Self {
        self.endpoint = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for EnturConfig {
    fn default() -> Self {
        Self::new(DEFAULT_CLIENT_NAME)
    }
}

/// Entur journey planner client.
#[derive(Debug, Clone)]
pub struct EnturClient {
    http: reqwest::Client,
    endpoint: String,
}

impl EnturClient {
    /// Create a new client with the given configuration.
    pub fn new(config: EnturConfig) -> Result<Self, EnturError> {
        let mut headers = HeaderMap::new();

        let client_name = HeaderValue::from_str(&config.client_name).map_err(|_| {
            EnturError::NotConfigured(format!("invalid client name: {:?}", config.client_name))
        })?;
        headers.insert(CLIENT_NAME_HEADER, client_name);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            endpoint: config.endpoint,
        })
    }

    /// The endpoint queries are sent to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// POST a query and return the raw GraphQL envelope.
    pub async fn post_query(&self, query: &str) -> Result<GraphQlResponse, EnturError> {
        debug!(endpoint = %self.endpoint, bytes = query.len(), "sending query");

        let response = self
            .http
            .post(&self.endpoint)
            .json(&QueryBody { query })
            .send()
            .await?;

        let status = response.status();
        debug!(status = status.as_u16(), "received response");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(EnturError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| EnturError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(500).collect()),
        })
    }
}

impl Transport for EnturClient {
    async fn send(&self, query: &str) -> Result<Value, EnturError> {
        self.post_query(query).await?.into_data()
    }
}
