//! Google Gemini API client implementation
//!
//! Implements the LlmClient trait for the generateContent endpoint with
//! a fixed retry policy for transient HTTP statuses.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

use super::retry::RetryPolicy;
use super::{
    CompletionRequest, CompletionResponse, LlmClient, LlmError, Message, Role, StopReason, TokenUsage, ToolCall,
};
use crate::config::LlmConfig;

/// Google Gemini API client
pub struct GeminiClient {
    model: String,
    api_key: String,
    base_url: String,
    http: Client,
    max_tokens: u32,
    retry: RetryPolicy,
}

impl GeminiClient {
    /// Create a new client from configuration
    ///
    /// Reads the API key from the environment variable named in config.
    pub fn from_config(config: &LlmConfig) -> Result<Self, LlmError> {
        debug!(?config, "from_config: called");
        let api_key = config
            .get_api_key()
            .map_err(|e| LlmError::InvalidResponse(e.to_string()))?;

        let timeout = Duration::from_millis(config.timeout_ms);

        let http = Client::builder().timeout(timeout).build().map_err(LlmError::Network)?;

        Ok(Self {
            model: config.model.clone(),
            api_key,
            base_url: config.base_url.clone(),
            http,
            max_tokens: config.max_tokens,
            retry: config.retry.clone(),
        })
    }

    /// Build the request body for the generateContent API
    fn build_request_body(&self, request: &CompletionRequest) -> serde_json::Value {
        debug!(model = %self.model, max_tokens = %request.max_tokens, "build_request_body: called");
        let mut body = serde_json::json!({
            "system_instruction": {
                "parts": [{ "text": request.system_prompt }]
            },
            "contents": self.convert_messages(&request.messages),
            "generationConfig": {
                "maxOutputTokens": request.max_tokens.min(self.max_tokens),
            },
        });

        if !request.tools.is_empty() {
            debug!("build_request_body: tools not empty, adding declarations");
            body["tools"] = serde_json::json!([{
                "functionDeclarations": request
                    .tools
                    .iter()
                    .map(|t| t.to_function_declaration())
                    .collect::<Vec<_>>()
            }]);
        } else {
            debug!("build_request_body: no tools");
        }

        body
    }

    /// Convert internal Message types to Gemini content format
    fn convert_messages(&self, messages: &[Message]) -> Vec<serde_json::Value> {
        debug!(message_count = %messages.len(), "convert_messages: called");
        messages
            .iter()
            .map(|msg| {
                let role = match msg.role {
                    Role::User => "user",
                    Role::Assistant => "model",
                };
                serde_json::json!({
                    "role": role,
                    "parts": [{ "text": msg.content }],
                })
            })
            .collect()
    }

    /// Parse the generateContent API response
    fn parse_response(&self, api_response: GenerateContentResponse) -> Result<CompletionResponse, LlmError> {
        debug!(candidate_count = %api_response.candidates.len(), "parse_response: called");
        let candidate = api_response
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| LlmError::InvalidResponse("No candidates in response".to_string()))?;

        let mut content: Option<String> = None;
        let mut tool_calls = Vec::new();

        let parts = candidate.content.map(|c| c.parts).unwrap_or_default();
        for part in parts {
            if let Some(text) = part.text {
                debug!("parse_response: text part");
                match content {
                    Some(ref mut acc) => acc.push_str(&text),
                    None => content = Some(text),
                }
            }
            if let Some(call) = part.function_call {
                debug!(name = %call.name, "parse_response: functionCall part");
                tool_calls.push(ToolCall {
                    name: call.name,
                    input: call.args,
                });
            }
        }

        // Gemini reports STOP for tool-call turns; the presence of a
        // functionCall part is what distinguishes them.
        let stop_reason = if !tool_calls.is_empty() {
            StopReason::ToolUse
        } else {
            StopReason::from_finish_reason(candidate.finish_reason.as_deref().unwrap_or("STOP"))
        };

        let usage = api_response
            .usage_metadata
            .map(|u| TokenUsage {
                input_tokens: u.prompt_token_count,
                output_tokens: u.candidates_token_count,
            })
            .unwrap_or_default();

        Ok(CompletionResponse {
            content,
            tool_calls,
            stop_reason,
            usage,
        })
    }
}

#[async_trait]
impl LlmClient for GeminiClient {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError> {
        debug!(model = %self.model, max_tokens = %request.max_tokens, "complete: called");
        let url = format!("{}/v1beta/models/{}:generateContent", self.base_url, self.model);
        let body = self.build_request_body(&request);

        let mut last_status = 0u16;
        for attempt in 1..=self.retry.attempts {
            if attempt > 1 {
                let delay = self.retry.delay_for(attempt - 1);
                warn!(
                    attempt,
                    delay_ms = delay.as_millis() as u64,
                    "complete: retrying after transient status"
                );
                tokio::time::sleep(delay).await;
            }

            // Transport errors are not retried; only the configured
            // statuses are considered transient.
            let response = self
                .http
                .post(url.clone())
                .header("x-goog-api-key", self.api_key.clone())
                .header("content-type", "application/json")
                .json(&body)
                .send()
                .await?;

            let status = response.status().as_u16();

            if self.retry.should_retry(status) {
                last_status = status;
                if attempt < self.retry.attempts {
                    let text = response.text().await.unwrap_or_default();
                    debug!(attempt, status, body = %text, "complete: transient status");
                    continue;
                }
                debug!(attempt, status, "complete: transient status on final attempt");
                break;
            }

            if !response.status().is_success() {
                let text = response.text().await.unwrap_or_default();
                debug!(status, "complete: API error");
                return Err(LlmError::ApiError { status, message: text });
            }

            debug!("complete: success");
            let api_response: GenerateContentResponse = response.json().await?;
            return self.parse_response(api_response);
        }

        Err(LlmError::RetriesExhausted {
            attempts: self.retry.attempts,
            status: last_status,
        })
    }
}

// Gemini API response types

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
    #[serde(rename = "usageMetadata")]
    usage_metadata: Option<GeminiUsage>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: Option<GeminiContent>,
    #[serde(rename = "finishReason")]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeminiContent {
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Deserialize)]
struct GeminiPart {
    text: Option<String>,
    #[serde(rename = "functionCall")]
    function_call: Option<GeminiFunctionCall>,
}

#[derive(Debug, Deserialize)]
struct GeminiFunctionCall {
    name: String,
    #[serde(default)]
    args: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct GeminiUsage {
    #[serde(rename = "promptTokenCount", default)]
    prompt_token_count: u64,
    #[serde(rename = "candidatesTokenCount", default)]
    candidates_token_count: u64,
}
