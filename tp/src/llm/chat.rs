//! Chat Completions API client
//!
//! Works with OpenAI-compatible `/v1/chat/completions` endpoints (Mistral by
//! default). One POST per call, no retries.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use super::{CompletionRequest, CompletionResponse, LlmClient, LlmError, TokenUsage};
use crate::config::LlmConfig;

/// Chat Completions client
pub struct ChatCompletionsClient {
    model: String,
    api_key: Option<String>,
    api_key_env: String,
    base_url: String,
    http: Client,
    max_tokens: u32,
}

impl ChatCompletionsClient {
    /// Create a new client from configuration
    ///
    /// A missing API key is not an error here; calls fail with
    /// [`LlmError::MissingApiKey`] instead.
    pub fn from_config(config: &LlmConfig) -> Result<Self, LlmError> {
        debug!(model = %config.model, "from_config: called");
        let mut builder = Client::builder();
        if let Some(timeout_ms) = config.timeout_ms {
            builder = builder.timeout(Duration::from_millis(timeout_ms));
        }
        let http = builder.build().map_err(LlmError::Network)?;

        Ok(Self {
            model: config.model.clone(),
            api_key: config.get_api_key(),
            api_key_env: config.api_key_env.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http,
            max_tokens: config.max_tokens,
        })
    }

    /// Build the request body for the API
    fn build_request_body(&self, request: &CompletionRequest) -> serde_json::Value {
        debug!(%self.model, %request.max_tokens, "build_request_body: called");
        serde_json::json!({
            "model": self.model,
            "messages": request.messages,
            "max_tokens": request.max_tokens.min(self.max_tokens),
        })
    }

    /// Parse the API response
    fn parse_response(&self, api_response: ChatResponse) -> Result<CompletionResponse, LlmError> {
        let choice = api_response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| LlmError::InvalidResponse("Response contained no choices".to_string()))?;

        let usage = api_response
            .usage
            .map(|u| TokenUsage {
                input_tokens: u.prompt_tokens,
                output_tokens: u.completion_tokens,
            })
            .unwrap_or_default();

        Ok(CompletionResponse {
            content: choice.message.content.map(|c| c.trim().to_string()),
            usage,
        })
    }
}

#[async_trait]
impl LlmClient for ChatCompletionsClient {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError> {
        debug!(%self.model, %request.max_tokens, "complete: called");
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| LlmError::MissingApiKey(self.api_key_env.clone()))?;

        let url = format!("{}/v1/chat/completions", self.base_url);
        let body = self.build_request_body(&request);

        let response = self
            .http
            .post(&url)
            .header("Authorization", format!("Bearer {}", api_key))
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            debug!(%status, "complete: API error");
            let text = response.text().await.unwrap_or_default();
            return Err(LlmError::ApiError {
                status: status.as_u16(),
                message: text,
            });
        }

        debug!("complete: success");
        let api_response: ChatResponse = response.json().await?;
        self.parse_response(api_response)
    }
}

// Chat Completions response types

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
    usage: Option<ChatUsage>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChatUsage {
    prompt_tokens: u64,
    completion_tokens: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::Message;
    use crate::testing::start_single_response_server;

    fn client(base_url: &str, api_key: Option<&str>) -> ChatCompletionsClient {
        ChatCompletionsClient {
            model: "mistral-medium".to_string(),
            api_key: api_key.map(str::to_string),
            api_key_env: "MISTRAL_API_KEY".to_string(),
            base_url: base_url.to_string(),
            http: Client::new(),
            max_tokens: 200,
        }
    }

    fn request(max_tokens: u32) -> CompletionRequest {
        CompletionRequest {
            messages: vec![Message::user("Is Kyoto walkable?")],
            max_tokens,
        }
    }

    #[test]
    fn test_build_request_body() {
        let body = client("https://api.mistral.ai", Some("k")).build_request_body(&request(200));

        assert_eq!(body["model"], "mistral-medium");
        assert_eq!(body["max_tokens"], 200);
        assert_eq!(body["messages"][0]["role"], "user");
        assert_eq!(body["messages"][0]["content"], "Is Kyoto walkable?");
        assert_eq!(body["messages"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_max_tokens_capped() {
        let body = client("https://api.mistral.ai", Some("k")).build_request_body(&request(5000));
        assert_eq!(body["max_tokens"], 200);
    }

    #[test]
    fn test_parse_response_trims_content() {
        let api_response: ChatResponse = serde_json::from_str(
            r#"{"choices":[{"message":{"role":"assistant","content":"  Yes, very.\n"}}],
                "usage":{"prompt_tokens":12,"completion_tokens":3,"total_tokens":15}}"#,
        )
        .unwrap();

        let response = client("x", None).parse_response(api_response).unwrap();
        assert_eq!(response.content.as_deref(), Some("Yes, very."));
        assert_eq!(response.usage.input_tokens, 12);
        assert_eq!(response.usage.output_tokens, 3);
    }

    #[test]
    fn test_parse_response_without_choices_is_invalid() {
        let api_response: ChatResponse = serde_json::from_str(r#"{"choices":[]}"#).unwrap();
        let result = client("x", None).parse_response(api_response);
        assert!(matches!(result, Err(LlmError::InvalidResponse(_))));
    }

    #[tokio::test]
    async fn test_complete_without_api_key_fails_before_sending() {
        let result = client("http://127.0.0.1:9", None).complete(request(100)).await;
        assert!(matches!(result, Err(LlmError::MissingApiKey(name)) if name == "MISTRAL_API_KEY"));
    }

    #[tokio::test]
    async fn test_complete_posts_bearer_request() {
        let Some((base_url, server)) = start_single_response_server(
            "200 OK",
            r#"{"choices":[{"message":{"content":"Take the bus."}}]}"#,
        )
        .await
        else {
            return;
        };

        let response = client(&base_url, Some("secret")).complete(request(100)).await.unwrap();
        assert_eq!(response.content.as_deref(), Some("Take the bus."));

        let raw = server.await.unwrap();
        assert!(raw.starts_with("POST /v1/chat/completions"));
        assert!(raw.to_lowercase().contains("authorization: bearer secret"));
        assert!(raw.contains("\"model\":\"mistral-medium\""));
    }

    #[tokio::test]
    async fn test_complete_non_success_status_is_api_error() {
        let Some((base_url, _server)) =
            start_single_response_server("401 Unauthorized", r#"{"message":"Unauthorized"}"#).await
        else {
            return;
        };

        let result = client(&base_url, Some("bad")).complete(request(100)).await;
        match result {
            Err(LlmError::ApiError { status, message }) => {
                assert_eq!(status, 401);
                assert!(message.contains("Unauthorized"));
            }
            other => panic!("expected ApiError, got {:?}", other.map(|r| r.content)),
        }
    }
}
