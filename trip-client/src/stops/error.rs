//! Stop catalogue error types.

/// Errors that can occur when loading the catalogue or resolving a stop.
#[derive(Debug, thiserror::Error)]
pub enum StopError {
    /// No stop has the given key
    #[error("stop '{key}' not found in catalogue")]
    NotFound { key: String },

    /// More than one stop shares the given key (catalogue data problem)
    #[error("stop '{key}' is ambiguous: {count} catalogue entries match")]
    Ambiguous { key: String, count: usize },

    /// Catalogue file could not be opened
    #[error("failed to read stop catalogue: {0}")]
    Io(#[from] std::io::Error),

    /// Catalogue row could not be parsed
    #[error("malformed stop catalogue: {0}")]
    Csv(#[from] csv::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = StopError::NotFound {
            key: "nonexistent".into(),
        };
        assert_eq!(err.to_string(), "stop 'nonexistent' not found in catalogue");

        let err = StopError::Ambiguous {
            key: "oslo s".into(),
            count: 2,
        };
        assert_eq!(
            err.to_string(),
            "stop 'oslo s' is ambiguous: 2 catalogue entries match"
        );
    }
}
