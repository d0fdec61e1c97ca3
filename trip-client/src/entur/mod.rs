//! Entur journey planner client.
//!
//! This module talks to the Entur journey planner, a GraphQL service for
//! Norwegian public transport, and turns its responses into domain types.
//!
//! Key characteristics of the service:
//! - Queries are POSTed as `{"query": "..."}`; results come back wrapped in
//!   a GraphQL envelope with a `data` field (and `errors` on failure)
//! - Clients identify themselves with the `ET-Client-Name` header
//! - Timestamps use `YYYY-MM-DDTHH:MM:SS±HH:MM`

mod client;
mod convert;
mod error;
mod mock;
mod types;

pub use client::{EnturClient, EnturConfig, Transport};
pub use convert::{ParseError, parse_trip};
pub use error::EnturError;
pub use mock::MockEnturClient;
pub use types::{GraphQlError, GraphQlResponse, LegDto, LineDto, TripPatternDto};
