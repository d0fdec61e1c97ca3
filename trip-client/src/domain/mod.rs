//! Domain types for the journey planner client.
//!
//! These types are the validated itinerary model produced from service
//! responses. Code that receives them can rely on their invariants.

mod time;
mod trip;

pub use time::{
    DEFAULT_UTC_OFFSET, TimestampError, WIRE_FORMAT, default_utc_offset, format_timestamp, now_in,
    parse_offset, parse_timestamp,
};
pub use trip::{Leg, Line, Trip, TripPattern, WALK_MODE};
