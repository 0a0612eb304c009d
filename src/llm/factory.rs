//! Language model factory for creating `LanguageModel` trait objects from configuration.

use super::{AzureOpenAiClient, LanguageModel, LlmError, OpenAiClient};
use crate::config::{read_secret, LlmConfig, LlmProvider};
use reqwest::Client;
use std::sync::Arc;

/// Create a language model client from configuration.
///
/// The API key is read from the environment variable named by
/// `config.api_key_env`.
///
/// # Examples
///
/// ```
/// use infraquery::config::LlmConfig;
/// use infraquery::llm::create_language_model;
/// use std::sync::Arc;
///
/// std::env::set_var("DOCTEST_OPENAI_KEY", "key");
/// let config = LlmConfig {
///     endpoint: "https://example.openai.azure.com".to_string(),
///     deployment: "gpt-4o".to_string(),
///     api_key_env: "DOCTEST_OPENAI_KEY".to_string(),
///     ..LlmConfig::default()
/// };
/// let model = create_language_model(&config, Arc::new(reqwest::Client::new())).unwrap();
/// assert_eq!(model.name(), "azure-openai/gpt-4o");
/// ```
pub fn create_language_model(
    config: &LlmConfig,
    client: Arc<Client>,
) -> Result<Arc<dyn LanguageModel>, LlmError> {
    let api_key = read_secret(&config.api_key_env)
        .map_err(|e| LlmError::Configuration(e.to_string()))?;

    if config.endpoint.trim().is_empty() {
        return Err(LlmError::Configuration(
            "llm.endpoint must be set".to_string(),
        ));
    }

    match config.provider {
        LlmProvider::AzureOpenai => Ok(Arc::new(AzureOpenAiClient::new(
            config.endpoint.clone(),
            config.deployment.clone(),
            config.api_version.clone(),
            api_key,
            client,
        ))),
        LlmProvider::Openai => Ok(Arc::new(OpenAiClient::new(
            config.endpoint.clone(),
            config.model.clone(),
            api_key,
            client,
        ))),
    }
}
