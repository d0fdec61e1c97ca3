//! Mock Entur client for running without network access.
//!
//! Serves one recorded GraphQL response for every query.

use std::path::Path;

use serde_json::Value;
use tracing::debug;

use super::client::Transport;
use super::error::EnturError;
use super::types::GraphQlResponse;

/// Mock client that answers every query with the same envelope.
#[derive(Debug, Clone)]
pub struct MockEnturClient {
    body: String,
}

impl MockEnturClient {
    /// Serve the given response body (a full GraphQL envelope).
    pub fn from_json(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }

    /// Load the response body from a file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, EnturError> {
        let body = std::fs::read_to_string(path)?;
        Ok(Self::from_json(body))
    }
}

impl Transport for MockEnturClient {
    async fn send(&self, query: &str) -> Result<Value, EnturError> {
        debug!(bytes = query.len(), "mock transport ignoring query");
        let envelope: GraphQlResponse =
            serde_json::from_str(&self.body).map_err(|e| EnturError::Json {
                message: e.to_string(),
                body: Some(self.body.chars().take(500).collect()),
            })?;
        envelope.into_data()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn serves_data_payload() {
        let client = MockEnturClient::from_json(r#"{"data": {"trip": {"tripPatterns": []}}}"#);
        let data = client.send("{ trip }").await.unwrap();
        assert!(data["trip"]["tripPatterns"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn null_data_is_missing() {
        let client = MockEnturClient::from_json(r#"{"data": null}"#);
        assert!(matches!(
            client.send("{ trip }").await,
            Err(EnturError::MissingData)
        ));
    }

    #[tokio::test]
    async fn invalid_body_is_json_error() {
        let client = MockEnturClient::from_json("<html>");
        assert!(matches!(
            client.send("{ trip }").await,
            Err(EnturError::Json { .. })
        ));
    }

    #[tokio::test]
    async fn loads_sample_fixture() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/sample_trip.json");
        let client = MockEnturClient::from_file(path).unwrap();
        let data = client.send("{ trip }").await.unwrap();
        assert_eq!(data["trip"]["tripPatterns"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn missing_fixture_is_io_error() {
        assert!(matches!(
            MockEnturClient::from_file("/nonexistent/response.json"),
            Err(EnturError::Io(_))
        ));
    }
}
