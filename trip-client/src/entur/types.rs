//! Journey planner response DTOs.
//!
//! These types map directly to the JSON the service returns for the
//! `trip` query. Only the fields the client consumes are declared; the
//! service may send more.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::EnturError;

/// The GraphQL envelope around every response.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlResponse {
    /// Query result. Absent or null when the query failed outright.
    pub data: Option<Value>,

    /// Errors reported by the service, possibly alongside partial data.
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

impl GraphQlResponse {
    /// Unwrap the `data` payload.
    ///
    /// Fails with the service's error messages if there is no data.
    pub fn into_data(self) -> Result<Value, EnturError> {
        match self.data {
            Some(data) if !data.is_null() => Ok(data),
            _ if !self.errors.is_empty() => Err(EnturError::GraphQl(
                self.errors.into_iter().map(|e| e.message).collect(),
            )),
            _ => Err(EnturError::MissingData),
        }
    }
}

/// One entry of the envelope's `errors` array.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

/// Request body for a GraphQL POST.
#[derive(Debug, Serialize)]
pub(crate) struct QueryBody<'a> {
    pub query: &'a str,
}

/// One element of `trip.tripPatterns`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripPatternDto {
    /// Expected departure, `YYYY-MM-DDTHH:MM:SS±HH:MM`.
    pub expected_start_time: String,

    /// Total duration in seconds.
    pub duration: u64,

    /// Total walking distance in meters.
    pub walk_distance: f64,

    /// Legs in travel order.
    pub legs: Vec<LegDto>,
}

/// One element of `tripPattern.legs`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegDto {
    /// Transport mode, e.g. "rail", "foot", "metro".
    pub mode: String,

    /// Distance in meters.
    pub distance: f64,

    /// Line info; null for walking legs.
    pub line: Option<LineDto>,
}

/// Line info of a scheduled leg.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineDto {
    pub id: Option<String>,
    pub public_code: Option<String>,
}
