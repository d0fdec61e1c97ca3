//! End-to-end trip planning: request → query → service → itinerary.

use tracing::info;

use crate::domain::Trip;
use crate::entur::{EnturError, ParseError, Transport, parse_trip};
use crate::query::{QueryBuilder, QueryError, TripRequest};
use crate::stops::StopError;

/// Errors from planning a trip.
#[derive(Debug, thiserror::Error)]
pub enum PlannerError {
    /// Query could not be built; nothing was sent
    #[error(transparent)]
    Query(#[from] QueryError),

    /// Sending the query failed
    #[error(transparent)]
    Transport(#[from] EnturError),

    /// Response did not have the expected shape
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Itinerary could not be turned into text
    #[error("failed to render trip: {0}")]
    Render(#[from] askama::Error),
}

impl PlannerError {
    /// Short, user-facing category of the failure.
    pub fn reason(&self) -> &'static str {
        match self {
            PlannerError::Query(QueryError::Stop(StopError::NotFound { .. })) => "stop not found",
            PlannerError::Query(QueryError::Stop(StopError::Ambiguous { .. })) => "ambiguous stop",
            PlannerError::Query(_) => "invalid configuration",
            PlannerError::Transport(EnturError::MissingData | EnturError::GraphQl(_))
            | PlannerError::Parse(ParseError::MissingField(_)) => "service returned no trip data",
            PlannerError::Transport(_) => "transport failure",
            PlannerError::Parse(_) => "malformed response",
            PlannerError::Render(_) => "rendering failure",
        }
    }
}

/// A parsed itinerary together with the query that produced it.
#[derive(Debug, Clone)]
pub struct PlannedTrip {
    pub query: String,
    pub trip: Trip,
}

/// Build, send and parse one trip query.
///
/// Stops are resolved before anything is sent, so an unknown stop never
/// reaches the service. Any failure aborts the whole request.
pub async fn plan_trip<T: Transport>(
    transport: &T,
    builder: &QueryBuilder<'_>,
    request: &TripRequest,
    template_name: &str,
) -> Result<PlannedTrip, PlannerError> {
    let query = builder.build(request, template_name)?;
    let data = transport.send(&query).await?;
    let trip = parse_trip(&data)?;

    info!(
        origin = %request.origin,
        destination = %request.destination,
        patterns = trip.len(),
        "planned trip"
    );
    Ok(PlannedTrip { query, trip })
}
