//! LlmClient trait definition

use async_trait::async_trait;

use super::LlmError;

/// A single structured completion request
///
/// The prompt embeds the serialized feedback corpus; `response_schema`
/// constrains the response to a JSON object shape. Providers that support
/// schema-constrained output use it natively, others fold it into the
/// system prompt.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    /// System/instruction prompt
    pub system_prompt: String,

    /// User prompt carrying the corpus
    pub prompt: String,

    /// Required JSON shape of the response
    pub response_schema: serde_json::Value,

    /// Max tokens for the response
    pub max_tokens: u32,
}

/// Stateless text-generation client - each call is independent
///
/// The narrow seam between the summarization policy and the third-party
/// service: one request in, raw response text out. Parsing and contract
/// enforcement live above this trait so they are testable with a fake.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Send a single completion request and return the raw response text
    ///
    /// One outbound call per invocation, no retries; the caller may
    /// re-invoke manually on failure.
    async fn complete(&self, request: CompletionRequest) -> Result<String, LlmError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Mock LLM client for unit tests
    ///
    /// `Err` responses surface as API errors (transport tier).
    pub struct MockLlmClient {
        responses: Vec<Result<String, String>>,
        call_count: AtomicUsize,
    }

    impl MockLlmClient {
        pub fn new(responses: Vec<Result<String, String>>) -> Self {
            Self {
                responses,
                call_count: AtomicUsize::new(0),
            }
        }

        /// Single canned text response
        pub fn with_text(text: impl Into<String>) -> Self {
            Self::new(vec![Ok(text.into())])
        }

        pub fn call_count(&self) -> usize {
            self.call_count.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl LlmClient for MockLlmClient {
        async fn complete(&self, _request: CompletionRequest) -> Result<String, LlmError> {
            let idx = self.call_count.fetch_add(1, Ordering::SeqCst);
            match self.responses.get(idx) {
                Some(Ok(text)) => Ok(text.clone()),
                Some(Err(message)) => Err(LlmError::ApiError {
                    status: 500,
                    message: message.clone(),
                }),
                None => Err(LlmError::InvalidResponse("No more mock responses".to_string())),
            }
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[tokio::test]
        async fn test_mock_client_returns_responses_in_order() {
            let client = MockLlmClient::new(vec![Ok("one".to_string()), Ok("two".to_string())]);
            let request = CompletionRequest {
                system_prompt: "Test".to_string(),
                prompt: "Test".to_string(),
                response_schema: serde_json::json!({}),
                max_tokens: 100,
            };

            assert_eq!(client.complete(request.clone()).await.unwrap(), "one");
            assert_eq!(client.complete(request).await.unwrap(), "two");
            assert_eq!(client.call_count(), 2);
        }

        #[tokio::test]
        async fn test_mock_client_errors_when_exhausted() {
            let client = MockLlmClient::new(vec![]);
            let request = CompletionRequest {
                system_prompt: "Test".to_string(),
                prompt: "Test".to_string(),
                response_schema: serde_json::json!({}),
                max_tokens: 100,
            };

            assert!(client.complete(request).await.is_err());
        }
    }
}
