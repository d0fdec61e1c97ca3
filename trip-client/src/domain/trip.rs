//! Itinerary types.
//!
//! A `Trip` is the set of alternative journeys the service returned for one
//! request. Each alternative is a `TripPattern` made of chronologically
//! ordered `Leg`s.

use chrono::{DateTime, FixedOffset, TimeDelta};

/// Transport mode of walking legs.
pub const WALK_MODE: &str = "foot";

/// The public line a scheduled leg runs on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// Service identifier, e.g. "NSB:Line:L13".
    pub id: Option<String>,
    /// Code shown to passengers, e.g. "R13". Some lines have none.
    pub public_code: Option<String>,
}

/// A single-mode segment of a journey.
#[derive(Debug, Clone, PartialEq)]
pub struct Leg {
    /// Transport mode as reported by the service ("rail", "foot", "metro", ...).
    pub mode: String,
    /// Distance covered in meters.
    pub distance: f64,
    /// Line for scheduled services; `None` for walking.
    pub line: Option<Line>,
}

impl Leg {
    /// Returns true if this leg is on foot.
    pub fn is_walk(&self) -> bool {
        self.mode == WALK_MODE
    }

    /// The line's public code, if this leg runs on a line that has one.
    pub fn public_code(&self) -> Option<&str> {
        self.line.as_ref().and_then(|l| l.public_code.as_deref())
    }
}

/// One complete journey alternative.
#[derive(Debug, Clone, PartialEq)]
pub struct TripPattern {
    /// When the journey is expected to start.
    pub expected_start_time: DateTime<FixedOffset>,
    /// Total duration in seconds.
    pub duration: u64,
    /// Total walking distance in meters.
    pub walk_distance: f64,
    /// Legs in travel order. Never empty.
    pub legs: Vec<Leg>,
}

impl TripPattern {
    /// Expected arrival: start time plus duration.
    ///
    /// Returns `None` if the sum falls outside the representable date range.
    pub fn expected_end_time(&self) -> Option<DateTime<FixedOffset>> {
        let duration = TimeDelta::try_seconds(i64::try_from(self.duration).ok()?)?;
        self.expected_start_time.checked_add_signed(duration)
    }

    /// Number of vehicle changes (scheduled legs beyond the first).
    pub fn changes(&self) -> usize {
        self.legs
            .iter()
            .filter(|l| !l.is_walk())
            .count()
            .saturating_sub(1)
    }
}

/// All journey alternatives returned for one request, in service order.
///
/// An empty trip is valid: the service found no itineraries.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Trip {
    patterns: Vec<TripPattern>,
}

impl Trip {
    /// Create a trip from patterns, keeping their order.
    pub fn new(patterns: Vec<TripPattern>) -> Self {
        Self { patterns }
    }

    /// The journey alternatives.
    pub fn patterns(&self) -> &[TripPattern] {
        &self.patterns
    }

    /// Number of journey alternatives.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Returns true if the service found no itineraries.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
