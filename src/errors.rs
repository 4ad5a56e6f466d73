use thiserror::Error;

/// Main error type for a poll cycle.
#[derive(Error, Debug)]
pub enum WatchError {
    /// Transport failure, the request never completed
    #[error("homework API is unreachable: {0}")]
    Connection(#[from] reqwest::Error),

    /// Non-200 HTTP response
    #[error("homework API rejected the request with HTTP {0}")]
    InvalidRequest(u16),

    /// Response shape is not the documented one
    #[error("malformed API response: expected {expected}, got {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    /// Response object lacks a required key
    #[error("API response has no `{0}` key")]
    MissingField(&'static str),

    /// Homework record lacks a required key
    #[error("homework record has no `{0}` key")]
    UnknownField(&'static str),

    /// Review status outside the verdict set
    #[error("unknown review status `{0}`")]
    UnknownStatus(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_request_carries_the_status_code() {
        let message = format!("Сбой в работе программы: {}", WatchError::InvalidRequest(503));
        assert!(message.contains("503"));
    }

    #[test]
    fn test_unknown_status_carries_the_offending_value() {
        let err = WatchError::UnknownStatus("graded".to_string());
        assert!(err.to_string().contains("graded"));
    }

    #[test]
    fn test_distinct_failures_render_distinct_messages() {
        let a = WatchError::InvalidRequest(500).to_string();
        let b = WatchError::InvalidRequest(503).to_string();
        assert_ne!(a, b);
    }
}
