//! Errors from chat model calls.

use thiserror::Error;

/// Errors from a chat model call.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LlmError {
    /// API returned an error (5xx or an unclassified status).
    #[error("api error: {0}")]
    ApiError(String),

    /// Rate limited (429).
    #[error("rate limit: {0}")]
    RateLimit(String),

    /// Missing key or authentication rejected (401/403).
    #[error("auth failed: {0}")]
    Auth(String),

    /// Request rejected as invalid (other 4xx).
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Network or connection error.
    #[error("network error: {0}")]
    Network(String),

    /// Response body could not be decoded.
    #[error("parsing failed: {0}")]
    Parsing(String),

    /// Response decoded but contained no choices.
    #[error("response has no choices")]
    EmptyChoices,
}

impl LlmError {
    /// Maps a non-success HTTP status and its body to an error.
    pub fn from_status(status: u16, body: String) -> Self {
        match status {
            401 | 403 => LlmError::Auth(body),
            429 => LlmError::RateLimit(body),
            400..=499 => LlmError::InvalidRequest(body),
            _ => LlmError::ApiError(body),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping() {
        assert!(matches!(LlmError::from_status(401, "x".into()), LlmError::Auth(_)));
        assert!(matches!(LlmError::from_status(403, "x".into()), LlmError::Auth(_)));
        assert!(matches!(LlmError::from_status(429, "x".into()), LlmError::RateLimit(_)));
        assert!(matches!(
            LlmError::from_status(404, "x".into()),
            LlmError::InvalidRequest(_)
        ));
        assert!(matches!(LlmError::from_status(502, "x".into()), LlmError::ApiError(_)));
    }
}
