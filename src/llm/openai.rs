//! OpenAI-compatible client implementation.

use super::{map_send_error, read_completion, LanguageModel, LlmError};
use crate::llm::types::{ChatCompletionRequest, CompletionRequest};
use async_trait::async_trait;
use reqwest::Client;
use std::sync::Arc;

/// OpenAI-compatible client.
///
/// Chat completion via `POST {base_url}/v1/chat/completions` with a Bearer
/// token and the model id in the request body.
pub struct OpenAiClient {
    name: String,
    /// Base URL (e.g., "https://api.openai.com")
    base_url: String,
    model: String,
    /// API key for Bearer authentication
    api_key: String,
    /// Shared HTTP client for connection pooling
    client: Arc<Client>,
}

impl OpenAiClient {
    pub fn new(base_url: String, model: String, api_key: String, client: Arc<Client>) -> Self {
        Self {
            name: format!("openai/{}", model),
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
            api_key,
            client,
        }
    }
}

#[async_trait]
impl LanguageModel for OpenAiClient {
    fn name(&self) -> &str {
        &self.name
    }

    async fn complete(&self, request: CompletionRequest) -> Result<String, LlmError> {
        let url = format!("{}/v1/chat/completions", self.base_url);
        let body = ChatCompletionRequest::from_completion(&request, Some(self.model.clone()));

        let response = self
            .client
            .post(&url)
            .header("authorization", format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .await
            .map_err(map_send_error)?;

        read_completion(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};

    fn test_client(base_url: String) -> OpenAiClient {
        OpenAiClient::new(
            base_url,
            "gpt-4o-mini".to_string(),
            "sk-test123".to_string(),
            Arc::new(Client::new()),
        )
    }

    #[tokio::test]
    async fn test_complete_with_bearer_auth() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/chat/completions")
            .match_header("authorization", "Bearer sk-test123")
            .match_body(Matcher::PartialJson(serde_json::json!({"model": "gpt-4o-mini"})))
            .with_status(200)
            .with_body(r#"{"id":"cmpl-1","choices":[{"index":0,"message":{"role":"assistant","content":"Hi"},"finish_reason":"stop"}]}"#)
            .create_async()
            .await;

        let client = test_client(server.url());
        let reply = client
            .complete(CompletionRequest::new("sys", "hello"))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(reply, "Hi");
    }

    #[tokio::test]
    async fn test_complete_unauthorized() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/v1/chat/completions")
            .with_status(401)
            .with_body(r#"{"error":{"message":"bad key"}}"#)
            .create_async()
            .await;

        let client = test_client(server.url());
        let result = client.complete(CompletionRequest::new("sys", "hello")).await;
        assert!(matches!(result, Err(LlmError::Upstream { status: 401, .. })));
    }
}
