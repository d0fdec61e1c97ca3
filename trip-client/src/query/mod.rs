//! Query construction.
//!
//! Query templates are plain text files containing placeholder tokens such
//! as `{start_id}`. A `QueryBuilder` resolves the request's stops and
//! substitutes the tokens to produce the final GraphQL query string.

mod builder;
mod error;
mod template;

pub use builder::{
    DEFAULT_RESULT_COUNT, PLACEHOLDERS, QueryBuilder, TripRequest, build_query,
    unconsumed_placeholders,
};
pub use error::{QueryError, TemplateError};
pub use template::{Template, TemplateStore};
