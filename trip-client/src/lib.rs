//! Journey planner client.
//!
//! Turns "from here to there" into a GraphQL trip query for the Entur
//! journey planner, sends it, and parses the answer into an itinerary.

pub mod config;
pub mod domain;
pub mod entur;
pub mod planner;
pub mod query;
pub mod render;
pub mod stops;
