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

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl LlmError {
    /// Whether this failure happened before a well-formed response arrived
    ///
    /// Transport failures are recoverable by re-invoking manually; a
    /// malformed provider response is not.
    pub fn is_transport(&self) -> bool {
        match self {
            LlmError::ApiError { .. } => true,
            LlmError::Network(_) => true,
            LlmError::InvalidResponse(_) => false,
            LlmError::Json(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_transport() {
        assert!(
            LlmError::ApiError {
                status: 503,
                message: "Service unavailable".to_string()
            }
            .is_transport()
        );
        assert!(!LlmError::InvalidResponse("no candidates".to_string()).is_transport());
    }

    #[test]
    fn test_display_includes_status() {
        let err = LlmError::ApiError {
            status: 429,
            message: "quota exceeded".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("429"));
        assert!(text.contains("quota exceeded"));
    }
}
