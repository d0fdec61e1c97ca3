//! Wire timestamps for the journey planner API.
//!
//! The service speaks one timestamp format in both directions:
//! `YYYY-MM-DDTHH:MM:SS±HH:MM`, e.g. `2024-08-27T14:06:00+02:00`.

use chrono::{DateTime, FixedOffset, Utc};

/// `strftime`-style format of wire timestamps.
pub const WIRE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%:z";

/// Offset emitted when none is configured (Oslo summer time).
pub const DEFAULT_UTC_OFFSET: &str = "+02:00";

/// [`DEFAULT_UTC_OFFSET`] as a `FixedOffset`.
pub fn default_utc_offset() -> FixedOffset {
    // Two hours is well inside the valid ±24h range.
    FixedOffset::east_opt(2 * 3600).unwrap()
}

/// Error returned when a timestamp or offset string is malformed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid timestamp '{value}': expected YYYY-MM-DDTHH:MM:SS±HH:MM")]
pub struct TimestampError {
    value: String,
}

impl TimestampError {
    fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
        }
    }

    /// The rejected input.
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Format a timestamp for the wire. Sub-second precision is dropped.
///
/// # Examples
///
/// ```
/// use chrono::{FixedOffset, TimeZone};
/// use trip_client::domain::format_timestamp;
///
/// let offset = FixedOffset::east_opt(2 * 3600).unwrap();
/// let t = offset.with_ymd_and_hms(2024, 8, 27, 14, 6, 0).unwrap();
/// assert_eq!(format_timestamp(&t), "2024-08-27T14:06:00+02:00");
/// ```
pub fn format_timestamp(t: &DateTime<FixedOffset>) -> String {
    t.format(WIRE_FORMAT).to_string()
}

/// Parse a wire timestamp, keeping its offset.
pub fn parse_timestamp(s: &str) -> Result<DateTime<FixedOffset>, TimestampError> {
    DateTime::parse_from_str(s, WIRE_FORMAT).map_err(|_| TimestampError::new(s))
}

/// Parse a fixed UTC offset such as `+02:00` or `-05:30`.
pub fn parse_offset(s: &str) -> Result<FixedOffset, TimestampError> {
    s.parse::<FixedOffset>().map_err(|_| TimestampError::new(s))
}

/// The current instant, expressed in the given offset.
pub fn now_in(offset: FixedOffset) -> DateTime<FixedOffset> {
    Utc::now().with_timezone(&offset)
}
