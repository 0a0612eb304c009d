//! Azure OpenAI client implementation.

use super::{map_send_error, read_completion, LanguageModel, LlmError};
use crate::llm::types::{ChatCompletionRequest, CompletionRequest};
use async_trait::async_trait;
use reqwest::Client;
use std::sync::Arc;

/// Azure OpenAI deployment client.
///
/// Chat completion via
/// `POST {endpoint}/openai/deployments/{deployment}/chat/completions?api-version=...`
/// with the key in the `api-key` header.
pub struct AzureOpenAiClient {
    /// Label used in logs
    name: String,
    /// Resource endpoint (e.g., "https://my-resource.openai.azure.com")
    endpoint: String,
    deployment: String,
    api_version: String,
    api_key: String,
    /// Shared HTTP client for connection pooling
    client: Arc<Client>,
}

impl AzureOpenAiClient {
    pub fn new(
        endpoint: String,
        deployment: String,
        api_version: String,
        api_key: String,
        client: Arc<Client>,
    ) -> Self {
        Self {
            name: format!("azure-openai/{}", deployment),
            endpoint: endpoint.trim_end_matches('/').to_string(),
            deployment,
            api_version,
            api_key,
            client,
        }
    }

    fn completions_url(&self) -> String {
        format!(
            "{}/openai/deployments/{}/chat/completions",
            self.endpoint, self.deployment
        )
    }
}

#[async_trait]
impl LanguageModel for AzureOpenAiClient {
    fn name(&self) -> &str {
        &self.name
    }

    async fn complete(&self, request: CompletionRequest) -> Result<String, LlmError> {
        let body = ChatCompletionRequest::from_completion(&request, None);

        tracing::debug!(
            model = %self.name,
            temperature = request.temperature,
            max_tokens = request.max_tokens,
            "Sending chat completion"
        );

        let response = self
            .client
            .post(self.completions_url())
            .query(&[("api-version", self.api_version.as_str())])
            .header("api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(map_send_error)?;

        read_completion(response).await
    }
}
