//! Plain-text rendering of itineraries.
//!
//! Domain types are flattened into view models of display strings, then
//! rendered through an askama template.

use askama::Template;

use crate::domain::{Leg, Trip, TripPattern};

/// Format for start and end times.
const DISPLAY_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S %:z";

/// Shown when an end time cannot be computed.
const UNKNOWN_TIME: &str = "unknown";

/// Whole-trip text template.
#[derive(Template)]
#[template(path = "trip.txt")]
pub struct TripTemplate {
    pub patterns: Vec<PatternView>,
}

/// One journey alternative, ready for display.
#[derive(Debug, Clone)]
pub struct PatternView {
    /// 1-based position in the trip
    pub number: usize,
    pub start_time: String,
    pub end_time: String,
    pub duration: String,
    pub walk_distance: String,
    /// Vehicle changes, walks excluded
    pub changes: usize,
    pub legs: Vec<LegView>,
}

impl PatternView {
    /// Create from a domain TripPattern.
    pub fn from_pattern(number: usize, pattern: &TripPattern) -> Self {
        Self {
            number,
            start_time: pattern
                .expected_start_time
                .format(DISPLAY_TIME_FORMAT)
                .to_string(),
            end_time: pattern
                .expected_end_time()
                .map(|t| t.format(DISPLAY_TIME_FORMAT).to_string())
                .unwrap_or_else(|| UNKNOWN_TIME.to_string()),
            duration: format_duration(pattern.duration),
            walk_distance: format!("{:.2} m", pattern.walk_distance),
            changes: pattern.changes(),
            legs: pattern.legs.iter().map(LegView::from_leg).collect(),
        }
    }
}

/// One leg, ready for display.
#[derive(Debug, Clone)]
pub struct LegView {
    pub mode: String,
    pub line: Option<String>,
}

impl LegView {
    /// Create from a domain Leg.
    pub fn from_leg(leg: &Leg) -> Self {
        Self {
            mode: leg.mode.clone(),
            line: leg.public_code().map(str::to_string),
        }
    }

    /// "rail, Line: R13", or just the mode for walks and unnamed lines.
    pub fn describe(&self) -> String {
        match &self.line {
            Some(code) => format!("{}, Line: {}", self.mode, code),
            None => self.mode.clone(),
        }
    }
}

/// Seconds as e.g. "1710 s (28 min)" or "5400 s (1 h 30 min)".
fn format_duration(seconds: u64) -> String {
    let minutes = seconds / 60;
    match minutes / 60 {
        0 => format!("{seconds} s ({minutes} min)"),
        hours => format!("{seconds} s ({hours} h {} min)", minutes % 60),
    }
}

/// Render a trip as text, one block per pattern in trip order.
pub fn render_trip(trip: &Trip) -> Result<String, askama::Error> {
    let patterns = trip
        .patterns()
        .iter()
        .enumerate()
        .map(|(i, p)| PatternView::from_pattern(i + 1, p))
        .collect();
    TripTemplate { patterns }.render()
}
