//! Entur client error types.

/// Errors from sending a query to the journey planner.
#[derive(Debug, thiserror::Error)]
pub enum EnturError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Service returned a non-success status code
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Response body was not a GraphQL envelope
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        body: Option<String>,
    },

    /// Service rejected the query and returned no data
    #[error("query rejected: {}", .0.join("; "))]
    GraphQl(Vec<String>),

    /// Envelope had no `data` and no explanation
    #[error("response contains no data")]
    MissingData,

    /// Client is not usable with the given settings
    #[error("not configured: {0}")]
    NotConfigured(String),

    /// Mock fixture could not be read
    #[error("failed to read fixture: {0}")]
    Io(#[from] std::io::Error),
}
