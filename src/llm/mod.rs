//! Language model abstraction layer.
//!
//! The pipeline talks to language models only through the [`LanguageModel`]
//! trait. Concrete clients speak the chat-completions protocol over HTTP;
//! tests substitute scripted fakes.

use async_trait::async_trait;

pub mod azure_openai;
pub mod error;
pub mod factory;
pub mod openai;
pub mod types;

pub use azure_openai::AzureOpenAiClient;
pub use error::LlmError;
pub use factory::create_language_model;
pub use openai::OpenAiClient;
pub use types::{ChatCompletionRequest, ChatCompletionResponse, CompletionRequest};

/// A text-in, text-out language model.
///
/// # Object Safety
///
/// This trait is object-safe and designed to be used as `Arc<dyn LanguageModel>`.
///
/// # Timeouts and retries
///
/// Implementations make exactly one attempt and enforce no deadline of their
/// own. Callers that need a request-level timeout wrap the whole pipeline.
#[async_trait]
pub trait LanguageModel: Send + Sync + 'static {
    /// Human-readable name for logging (e.g., "azure-openai/gpt-4o").
    fn name(&self) -> &str;

    /// Send one system prompt plus one user turn and return the reply text.
    ///
    /// The returned text is trimmed. An empty string means the model answered
    /// with no content; interpreting that is up to the caller.
    async fn complete(&self, request: CompletionRequest) -> Result<String, LlmError>;
}

/// Map a reqwest send failure to an [`LlmError`].
pub(crate) fn map_send_error(e: reqwest::Error) -> LlmError {
    LlmError::Network(e.to_string())
}

/// Turn a chat-completions HTTP response into reply text.
pub(crate) async fn read_completion(response: reqwest::Response) -> Result<String, LlmError> {
    let status = response.status();
    if !status.is_success() {
        let error_body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(LlmError::Upstream {
            status: status.as_u16(),
            message: error_body,
        });
    }

    let completion: ChatCompletionResponse = response.json().await.map_err(|e| {
        LlmError::InvalidResponse(format!("Failed to parse completion response: {}", e))
    })?;

    if let Some(usage) = &completion.usage {
        tracing::debug!(
            prompt_tokens = usage.prompt_tokens,
            completion_tokens = usage.completion_tokens,
            "Language model usage"
        );
    }

    Ok(completion.first_content())
}
