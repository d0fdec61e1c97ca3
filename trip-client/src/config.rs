//! Deployment configuration.

use std::num::NonZeroU32;
use std::path::PathBuf;

use chrono::FixedOffset;

use crate::domain::{TimestampError, default_utc_offset, parse_offset};
use crate::entur::EnturConfig;
use crate::query::DEFAULT_RESULT_COUNT;

/// Everything needed to run the planner, fixed per deployment.
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// Journey planner GraphQL endpoint.
    pub endpoint: String,

    /// `ET-Client-Name` header value.
    pub client_name: String,

    /// Stop catalogue CSV.
    pub stops_path: PathBuf,

    /// Directory of query templates.
    pub template_dir: PathBuf,

    /// Template used for trip queries.
    pub template_name: String,

    /// Offset stamped on outgoing timestamps. Not derived from the host
    /// clock, so every deployment emits the same offset.
    pub utc_offset: FixedOffset,

    /// Trip patterns requested per query.
    pub result_count: NonZeroU32,

    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl PlannerConfig {
    /// Set the endpoint.
    pub fn with_endpoint(mut self, url: impl Into<String>) -> Self {
        self.endpoint = url.into();
        self
    }

    /// Set the client name.
    pub fn with_client_name(mut self, name: impl Into<String>) -> Self {
        self.client_name = name.into();
        self
    }

    /// Set the stop catalogue path.
    pub fn with_stops_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.stops_path = path.into();
        self
    }

    /// Set the template directory.
    pub fn with_template_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.template_dir = dir.into();
        self
    }

    /// Set the trip template name.
    pub fn with_template_name(mut self, name: impl Into<String>) -> Self {
        self.template_name = name.into();
        self
    }

    /// Set the UTC offset from a string such as "+01:00".
    pub fn with_utc_offset(mut self, offset: &str) -> Result<Self, TimestampError> {
        self.utc_offset = parse_offset(offset)?;
        Ok(self)
    }

    /// Set the number of results.
    pub fn with_result_count(mut self, n: NonZeroU32) -> Self {
        self.result_count = n;
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Client settings for the Entur transport.
    pub fn entur(&self) -> EnturConfig {
        EnturConfig::new(&self.client_name)
            .with_endpoint(&self.endpoint)
            .with_timeout(self.timeout_secs)
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        let entur = EnturConfig::default();
        Self {
            endpoint: entur.endpoint,
            client_name: entur.client_name,
            stops_path: PathBuf::from("data/stops.csv"),
            template_dir: PathBuf::from("query_templates"),
            template_name: "trip".to_string(),
            utc_offset: default_utc_offset(),
            result_count: DEFAULT_RESULT_COUNT,
            timeout_secs: entur.timeout_secs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = PlannerConfig::default();

        assert_eq!(
            config.endpoint,
            "https://api.entur.io/journey-planner/v3/graphql"
        );
        assert_eq!(config.stops_path, PathBuf::from("data/stops.csv"));
        assert_eq!(config.template_dir, PathBuf::from("query_templates"));
        assert_eq!(config.template_name, "trip");
        assert_eq!(config.utc_offset, FixedOffset::east_opt(7200).unwrap());
        assert_eq!(config.result_count.get(), 3);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn custom_config() {
        let config = PlannerConfig::default()
            .with_endpoint("http://localhost:9000/graphql")
            .with_client_name("acme-journeys")
            .with_template_name("trip_v2")
            .with_result_count(NonZeroU32::new(5).unwrap())
            .with_utc_offset("+01:00")
            .unwrap();

        assert_eq!(config.utc_offset, FixedOffset::east_opt(3600).unwrap());
        assert_eq!(config.result_count.get(), 5);

        let entur = config.entur();
        assert_eq!(entur.endpoint, "http://localhost:9000/graphql");
        assert_eq!(entur.client_name, "acme-journeys");
    }

    #[test]
    fn invalid_offset_rejected() {
        assert!(PlannerConfig::default().with_utc_offset("CEST").is_err());
    }
}
