//! Query construction error types.

use std::path::PathBuf;

use crate::stops::StopError;

/// Errors from loading query templates.
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    /// The template directory does not exist
    #[error("template directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    /// A template file could not be read
    #[error("failed to read template: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from building a query.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    /// Origin or destination could not be resolved
    #[error(transparent)]
    Stop(#[from] StopError),

    /// No template with the requested name was loaded
    #[error("unknown query template: {0}")]
    UnknownTemplate(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = TemplateError::DirectoryNotFound(PathBuf::from("/missing/templates"));
        assert_eq!(
            err.to_string(),
            "template directory not found: /missing/templates"
        );

        let err = QueryError::UnknownTemplate("departures".into());
        assert_eq!(err.to_string(), "unknown query template: departures");

        let err = QueryError::from(StopError::NotFound { key: "x".into() });
        assert_eq!(err.to_string(), "stop 'x' not found in catalogue");
    }
}
