//! LLM error types

use thiserror::Error;

/// Errors that can occur during LLM operations
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("API error {status}: {message}")]
    ApiError { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Retries exhausted after {attempts} attempts (last status {status})")]
    RetriesExhausted { attempts: u32, status: u16 },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl LlmError {
    /// HTTP status carried by this error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            LlmError::ApiError { status, .. } => Some(*status),
            LlmError::RetriesExhausted { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = LlmError::ApiError {
            status: 400,
            message: "Bad request".to_string(),
        };
        assert_eq!(err.to_string(), "API error 400: Bad request");
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn test_retries_exhausted_display() {
        let err = LlmError::RetriesExhausted {
            attempts: 5,
            status: 503,
        };
        assert!(err.to_string().contains("5 attempts"));
        assert!(err.to_string().contains("503"));
        assert_eq!(err.status(), Some(503));
    }

    #[test]
    fn test_invalid_response_has_no_status() {
        let err = LlmError::InvalidResponse("no candidates".to_string());
        assert_eq!(err.status(), None);
    }
}
