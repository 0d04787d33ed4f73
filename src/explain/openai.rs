//! OpenAI-compatible explainer
//!
//! Sends one chat completion request describing the check outcome and
//! captures a short diagnosis

use crate::config::ExplainerConfig;
use crate::error::{ExplainError, Result};
use crate::health::CheckResult;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Explainer trait
#[async_trait]
pub trait Explainer: Send + Sync {
    /// Produce a one-paragraph diagnosis of a non-OK check result
    ///
    /// # Arguments
    /// * `result` - classified check outcome
    ///
    /// # Returns
    /// * `Result<String>` - diagnosis text, or an error the caller is
    ///   expected to swallow
    async fn explain(&self, result: &CheckResult) -> Result<String>;
}

/// Chat completion request body
#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_completion_tokens: u32,
}

/// A single chat message
#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

/// Chat completion response body
#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: Option<ChatResponseMessage>,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: Option<String>,
}

/// Explainer backed by an OpenAI-compatible chat completions endpoint
pub struct OpenAiExplainer {
    /// HTTP client
    client: Client,
    /// API key
    api_key: String,
    /// Completions endpoint
    endpoint: String,
    /// Model name
    model: String,
    /// Completion token budget
    max_completion_tokens: u32,
}

impl OpenAiExplainer {
    /// Create an explainer from configuration
    ///
    /// Returns `None` when no API key is available; the caller then uses the
    /// fallback explanation instead of calling the API.
    pub fn from_config(config: &ExplainerConfig) -> Result<Option<Self>> {
        let api_key = match &config.api_key {
            Some(key) if !key.trim().is_empty() => key.clone(),
            _ => return Ok(None),
        };

        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(format!("{}/{}", crate::APP_NAME, crate::VERSION))
            .build()
            .map_err(ExplainError::RequestError)?;

        Ok(Some(Self {
            client,
            api_key,
            endpoint: config.endpoint.clone(),
            model: config.model.clone(),
            max_completion_tokens: config.max_completion_tokens,
        }))
    }

    /// Build the prompt embedding URL, status, HTTP code and error text
    fn build_prompt(result: &CheckResult) -> String {
        let code = result
            .http_code
            .map(|c| c.to_string())
            .unwrap_or_else(|| "-".to_string());

        let mut prompt = format!(
            "The website {} returned status '{}' with HTTP code {}.",
            result.url, result.status, code
        );

        if let Some(ref error_message) = result.error_message {
            prompt.push_str(&format!(" The reported error was: {}.", error_message));
        }

        prompt.push_str(" Write a short, clear summary explaining what this means.");
        prompt
    }
}

#[async_trait]
impl Explainer for OpenAiExplainer {
    async fn explain(&self, result: &CheckResult) -> Result<String> {
        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: Self::build_prompt(result),
            }],
            max_completion_tokens: self.max_completion_tokens,
        };

        debug!(endpoint = %self.endpoint, model = %self.model, "requesting explanation");

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(ExplainError::RequestError)?;

        if !response.status().is_success() {
            return Err(ExplainError::ApiStatus {
                status: response.status().as_u16(),
            }
            .into());
        }

        let completion: ChatCompletionResponse =
            response.json().await.map_err(ExplainError::RequestError)?;

        let content = completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty());

        content.ok_or_else(|| ExplainError::EmptyCompletion.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::health::CheckStatus;

    fn explainer_for(server_url: &str) -> OpenAiExplainer {
        let config = ExplainerConfig {
            api_key: Some("sk-test".to_string()),
            endpoint: format!("{}/v1/chat/completions", server_url),
            ..Default::default()
        };
        OpenAiExplainer::from_config(&config).unwrap().unwrap()
    }

    fn warn_result() -> CheckResult {
        CheckResult::new("https://example.com/".to_string(), CheckStatus::Warn)
            .with_http_code(404)
            .with_error("HTTP 404 Not Found".to_string())
    }

    #[test]
    fn test_from_config_without_key() {
        let config = ExplainerConfig::default();
        assert!(OpenAiExplainer::from_config(&config).unwrap().is_none());

        let config = ExplainerConfig {
            api_key: Some("  ".to_string()),
            ..Default::default()
        };
        assert!(OpenAiExplainer::from_config(&config).unwrap().is_none());
    }

    #[test]
    fn test_prompt_contents() {
        let prompt = OpenAiExplainer::build_prompt(&warn_result());
        assert!(prompt.contains("https://example.com/"));
        assert!(prompt.contains("'WARN'"));
        assert!(prompt.contains("404"));
        assert!(prompt.contains("HTTP 404 Not Found"));
    }

    #[test]
    fn test_prompt_without_http_code() {
        let result = CheckResult::new("https://example.com/".to_string(), CheckStatus::Fail)
            .with_error("DNS resolution failed".to_string());

        let prompt = OpenAiExplainer::build_prompt(&result);
        assert!(prompt.contains("HTTP code -"));
        assert!(prompt.contains("DNS resolution failed"));
    }

    #[tokio::test]
    async fn test_successful_completion() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/chat/completions")
            .match_header("authorization", "Bearer sk-test")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"choices":[{"message":{"content":" The page was not found. "}}]}"#,
            )
            .create_async()
            .await;

        let explainer = explainer_for(&server.url());
        let text = explainer.explain(&warn_result()).await.unwrap();

        mock.assert_async().await;
        assert_eq!(text, "The page was not found.");
    }

    #[tokio::test]
    async fn test_auth_failure_is_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/v1/chat/completions")
            .with_status(401)
            .create_async()
            .await;

        let explainer = explainer_for(&server.url());
        let result = explainer.explain(&warn_result()).await;

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("401"));
    }

    #[tokio::test]
    async fn test_empty_completion_is_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/v1/chat/completions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"choices":[{"message":{"content":""}}]}"#)
            .create_async()
            .await;

        let explainer = explainer_for(&server.url());
        let result = explainer.explain(&warn_result()).await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_missing_choices_is_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/v1/chat/completions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"choices":[]}"#)
            .create_async()
            .await;

        let explainer = explainer_for(&server.url());
        assert!(explainer.explain(&warn_result()).await.is_err());
    }
}
