//! Conversion from journey planner responses to domain types.
//!
//! Parsing is all-or-nothing: any failure at any depth aborts the whole
//! trip, so no partially built itinerary ever escapes.

use serde::Deserialize;
use serde_json::Value;

use crate::domain::{Leg, Line, Trip, TripPattern, parse_timestamp};

use super::types::{LegDto, TripPatternDto};

/// Error during response to domain conversion.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    /// A value had the wrong JSON type
    #[error("type mismatch: expected {0}")]
    TypeMismatch(&'static str),

    /// A required field was absent or null
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// A trip pattern's start time is not `YYYY-MM-DDTHH:MM:SS±HH:MM`
    #[error("malformed timestamp in trip pattern {index}: '{value}'")]
    MalformedTimestamp { index: usize, value: String },

    /// A trip pattern or one of its legs lacks a field or has a wrong type
    #[error("invalid trip pattern {index}: {message}")]
    InvalidPattern { index: usize, message: String },
}

/// Parse the unwrapped `data` payload of a `trip` query.
///
/// `raw` must be an object with a non-null `trip` object holding a
/// non-null `tripPatterns` array. An empty array is a valid trip with no
/// itineraries.
pub fn parse_trip(raw: &Value) -> Result<Trip, ParseError> {
    let response = raw
        .as_object()
        .ok_or(ParseError::TypeMismatch("response object"))?;

    let trip = present(response.get("trip")).ok_or(ParseError::MissingField("trip"))?;
    let trip = trip
        .as_object()
        .ok_or(ParseError::TypeMismatch("trip object"))?;

    let patterns =
        present(trip.get("tripPatterns")).ok_or(ParseError::MissingField("tripPatterns"))?;
    let patterns = patterns
        .as_array()
        .ok_or(ParseError::TypeMismatch("tripPatterns array"))?;

    let patterns = patterns
        .iter()
        .enumerate()
        .map(|(index, value)| convert_pattern(index, value))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Trip::new(patterns))
}

/// Treat JSON null the same as an absent field.
fn present(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| !v.is_null())
}

/// Convert one element of `tripPatterns`.
fn convert_pattern(index: usize, value: &Value) -> Result<TripPattern, ParseError> {
    let dto = TripPatternDto::deserialize(value).map_err(|e| ParseError::InvalidPattern {
        index,
        message: e.to_string(),
    })?;

    let expected_start_time = parse_timestamp(&dto.expected_start_time).map_err(|_| {
        ParseError::MalformedTimestamp {
            index,
            value: dto.expected_start_time.clone(),
        }
    })?;

    if dto.legs.is_empty() {
        return Err(ParseError::InvalidPattern {
            index,
            message: "trip pattern has no legs".to_string(),
        });
    }

    Ok(TripPattern {
        expected_start_time,
        duration: dto.duration,
        walk_distance: dto.walk_distance,
        legs: dto.legs.into_iter().map(convert_leg).collect(),
    })
}

fn convert_leg(dto: LegDto) -> Leg {
    Leg {
        mode: dto.mode,
        distance: dto.distance,
        line: dto.line.map(|l| Line {
            id: l.id,
            public_code: l.public_code,
        }),
    }
}
