//! Language model configuration

use serde::{Deserialize, Serialize};

/// Which chat-completions dialect the language model speaks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LlmProvider {
    /// Azure OpenAI deployment (`api-key` header, deployment in the path)
    #[default]
    AzureOpenai,
    /// OpenAI-compatible endpoint (`Bearer` token, model in the body)
    Openai,
}

/// Language model configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    pub provider: LlmProvider,
    /// Base URL, e.g. `https://my-resource.openai.azure.com`
    pub endpoint: String,
    /// Azure deployment name (azure_openai provider)
    pub deployment: String,
    /// Azure REST API version (azure_openai provider)
    pub api_version: String,
    /// Model id sent in the request body (openai provider)
    pub model: String,
    /// Environment variable holding the API key
    pub api_key_env: String,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: LlmProvider::AzureOpenai,
            endpoint: String::new(),
            deployment: String::new(),
            api_version: "2024-02-01".to_string(),
            model: "gpt-4o-mini".to_string(),
            api_key_env: "AZURE_OPENAI_API_KEY".to_string(),
        }
    }
}
