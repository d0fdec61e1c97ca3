//! Placeholder substitution for trip queries.

use std::num::NonZeroU32;

use chrono::{DateTime, FixedOffset};
use tracing::{debug, warn};

use crate::domain::{format_timestamp, now_in};
use crate::stops::{StopDirectory, StopError};

use super::error::QueryError;
use super::template::{Template, TemplateStore};

/// Number of trip patterns requested when the caller does not say.
pub const DEFAULT_RESULT_COUNT: NonZeroU32 = NonZeroU32::new(3).unwrap();

/// Tokens replaced by [`build_query`]. Anything else in braces is left as-is.
pub const PLACEHOLDERS: [&str; 6] = [
    "{start_id}",
    "{start_name}",
    "{end_id}",
    "{end_name}",
    "{n}",
    "{datetime}",
];

/// A single trip query: where from, where to, how many results, and when.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripRequest {
    /// Informal origin name, e.g. "Lillestrøm stasjon".
    pub origin: String,
    /// Informal destination name.
    pub destination: String,
    /// Number of trip patterns to ask for.
    pub result_count: NonZeroU32,
    /// Departure time sent to the service.
    pub timestamp: DateTime<FixedOffset>,
}

impl TripRequest {
    /// Create a request departing at `timestamp`, asking for the default
    /// number of results.
    pub fn new(
        origin: impl Into<String>,
        destination: impl Into<String>,
        timestamp: DateTime<FixedOffset>,
    ) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            result_count: DEFAULT_RESULT_COUNT,
            timestamp,
        }
    }

    /// Create a request departing now, stamped in the deployment's offset.
    pub fn now(
        origin: impl Into<String>,
        destination: impl Into<String>,
        utc_offset: FixedOffset,
    ) -> Self {
        Self::new(origin, destination, now_in(utc_offset))
    }

    /// Set the number of results.
    pub fn with_result_count(mut self, n: NonZeroU32) -> Self {
        self.result_count = n;
        self
    }
}

/// Build the query for `request` from `template`.
///
/// Origin and destination are resolved first; if either fails, no query is
/// produced. Each occurrence of a known placeholder is replaced with its
/// value in a single pass, so values that happen to contain placeholder
/// text are never substituted again.
pub fn build_query(
    request: &TripRequest,
    template: &Template,
    stops: &StopDirectory,
) -> Result<String, StopError> {
    let start = stops.resolve(&request.origin)?;
    let end = stops.resolve(&request.destination)?;
    let n = request.result_count.to_string();
    let datetime = format_timestamp(&request.timestamp);

    let values = [
        start.id(),
        start.name(),
        end.id(),
        end.name(),
        n.as_str(),
        datetime.as_str(),
    ];

    let leftover = unconsumed_placeholders(template.body());
    if !leftover.is_empty() {
        warn!(
            template = template.name(),
            placeholders = ?leftover,
            "template contains placeholders that will not be substituted"
        );
    }

    debug!(
        template = template.name(),
        start = start.id(),
        end = end.id(),
        %datetime,
        "building trip query"
    );
    Ok(substitute(template.body(), &values))
}

/// Replace each known placeholder in `body` with the value at the same index.
fn substitute(body: &str, values: &[&str; 6]) -> String {
    let mut out = String::with_capacity(body.len());
    let mut rest = body;

    while let Some(pos) = rest.find('{') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];
        match PLACEHOLDERS.iter().position(|p| tail.starts_with(p)) {
            Some(i) => {
                out.push_str(values[i]);
                rest = &tail[PLACEHOLDERS[i].len()..];
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

/// Placeholder-shaped tokens (`{identifier}`) in `body` that are not among
/// [`PLACEHOLDERS`].
///
/// GraphQL selection sets such as `{ trip }` are not identifiers in braces
/// and are not reported.
pub fn unconsumed_placeholders(body: &str) -> Vec<&str> {
    let mut found = Vec::new();
    let mut rest = body;

    while let Some(open) = rest.find('{') {
        let tail = &rest[open..];
        let Some(close) = tail[1..].find(['{', '}']).map(|i| i + 1) else {
            break;
        };
        let candidate = &tail[..=close];
        if candidate.ends_with('}')
            && is_identifier(&candidate[1..close])
            && !PLACEHOLDERS.contains(&candidate)
        {
            found.push(candidate);
        }
        rest = &tail[close..];
    }

    found
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Builds queries from named templates against a stop catalogue.
///
/// Both stores are read-only, so one builder can serve any number of
/// requests.
#[derive(Debug, Clone, Copy)]
pub struct QueryBuilder<'a> {
    stops: &'a StopDirectory,
    templates: &'a TemplateStore,
}

impl<'a> QueryBuilder<'a> {
    /// Create a builder over loaded stops and templates.
    pub fn new(stops: &'a StopDirectory, templates: &'a TemplateStore) -> Self {
        Self { stops, templates }
    }

    /// Build the query for `request` from the template called `template_name`.
    pub fn build(&self, request: &TripRequest, template_name: &str) -> Result<String, QueryError> {
        let template = self
            .templates
            .get(template_name)
            .ok_or_else(|| QueryError::UnknownTemplate(template_name.to_string()))?;
        Ok(build_query(request, template, self.stops)?)
    }
}
