//! Anthropic Claude API client implementation
//!
//! Implements the LlmClient trait for the Messages API. The API has no
//! native response-schema constraint for plain text, so the required JSON
//! shape is folded into the system prompt and the response content is
//! expected to be the bare JSON object.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use super::{CompletionRequest, LlmClient, LlmError};
use crate::config::LlmConfig;

/// Anthropic Claude API client
pub struct AnthropicClient {
    model: String,
    api_key: String,
    base_url: String,
    http: Client,
    max_tokens: u32,
}

impl AnthropicClient {
    /// Create a new client from configuration
    pub fn from_config(config: &LlmConfig) -> Result<Self, LlmError> {
        debug!(model = %config.model, "AnthropicClient::from_config: called");
        let api_key = config
            .get_api_key()
            .map_err(|e| LlmError::InvalidResponse(e.to_string()))?;

        let http = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(LlmError::Network)?;

        Ok(Self {
            model: config.model.clone(),
            api_key,
            base_url: config.base_url.clone(),
            http,
            max_tokens: config.max_tokens,
        })
    }

    /// Build the Messages API request body
    fn build_request_body(&self, request: &CompletionRequest) -> serde_json::Value {
        debug!(%self.model, %request.max_tokens, "build_request_body: called");
        let system = format!(
            "{}\n\nRespond with a single JSON object matching this schema, and nothing else:\n{}",
            request.system_prompt, request.response_schema
        );

        serde_json::json!({
            "model": self.model,
            "max_tokens": request.max_tokens.min(self.max_tokens),
            "system": system,
            "messages": [{ "role": "user", "content": request.prompt }],
        })
    }

    /// Pull the text out of the first content block
    fn extract_text(api_response: AnthropicResponse) -> Result<String, LlmError> {
        let text: String = api_response
            .content
            .into_iter()
            .filter_map(|block| match block {
                AnthropicContentBlock::Text { text } => Some(text),
                AnthropicContentBlock::Unknown => None,
            })
            .collect();

        if text.is_empty() {
            return Err(LlmError::InvalidResponse("Response contains no text blocks".to_string()));
        }
        Ok(text)
    }
}

#[async_trait]
impl LlmClient for AnthropicClient {
    async fn complete(&self, request: CompletionRequest) -> Result<String, LlmError> {
        debug!(%self.model, "complete: called");
        let url = format!("{}/v1/messages", self.base_url);
        let body = self.build_request_body(&request);

        let response = self
            .http
            .post(&url)
            .header("x-api-key", self.api_key.clone())
            .header("anthropic-version", "2023-06-01")
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status().as_u16();
        if !response.status().is_success() {
            debug!(status, "complete: API error");
            let text = response.text().await.unwrap_or_default();
            return Err(LlmError::ApiError { status, message: text });
        }

        debug!("complete: success");
        let api_response: AnthropicResponse = response.json().await?;
        Self::extract_text(api_response)
    }
}

/// Messages API response shape (only the fields we read)
#[derive(Debug, Deserialize)]
struct AnthropicResponse {
    #[serde(default)]
    content: Vec<AnthropicContentBlock>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
enum AnthropicContentBlock {
    #[serde(rename = "text")]
    Text { text: String },

    // Non-text blocks are not requested; tolerate them anyway
    #[serde(other)]
    Unknown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_text() {
        let response: AnthropicResponse = serde_json::from_value(serde_json::json!({
            "content": [{ "type": "text", "text": "{\"themes\":[],\"points\":[]}" }]
        }))
        .unwrap();

        assert_eq!(
            AnthropicClient::extract_text(response).unwrap(),
            "{\"themes\":[],\"points\":[]}"
        );
    }

    #[test]
    fn test_extract_text_rejects_empty_content() {
        let response: AnthropicResponse = serde_json::from_value(serde_json::json!({ "content": [] })).unwrap();
        assert!(matches!(
            AnthropicClient::extract_text(response),
            Err(LlmError::InvalidResponse(_))
        ));
    }
}
