//! Summarization error types

use thiserror::Error;

use crate::llm::LlmError;

/// Errors that can occur while deriving an action plan
///
/// Transport failures and contract violations are distinct variants so a
/// caller can differentiate them; today both surface the same generic
/// user-facing message.
#[derive(Debug, Error)]
pub enum SummarizeError {
    /// The call to the external service failed (network, status, timeout)
    #[error("AI analysis failed: {0}")]
    Analysis(#[from] LlmError),

    /// The service responded but the payload does not match the contract
    #[error("Invalid AI response format: {0}")]
    InvalidResponse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_llm_error_converts_to_analysis() {
        let err: SummarizeError = LlmError::ApiError {
            status: 503,
            message: "overloaded".to_string(),
        }
        .into();
        assert!(matches!(err, SummarizeError::Analysis(_)));
        assert!(err.to_string().contains("analysis failed"));
    }
}
