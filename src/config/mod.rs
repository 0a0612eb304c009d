//! Configuration module for infraquery
//!
//! Provides layered configuration loading from files, environment variables, and defaults.
//!
//! # Configuration Precedence
//!
//! 1. CLI arguments (highest priority)
//! 2. Environment variables (`INFRAQUERY_*` plus the conventional `AZURE_*` names)
//! 3. Configuration file (TOML)
//! 4. Default values (lowest priority)
//!
//! Secrets never live in the file: `llm.api_key_env` and
//! `azure.client_secret_env` name the variables that hold them.
//!
//! # Example
//!
//! ```rust
//! use infraquery::config::InfraQueryConfig;
//!
//! let toml = r#"
//! [server]
//! port = 9000
//!
//! [azure]
//! resource_groups = "rg-prod,rg-shared"
//! "#;
//! let config: InfraQueryConfig = toml::from_str(toml).unwrap();
//! assert_eq!(config.server.port, 9000);
//! assert_eq!(config.azure.resource_groups.as_deref(), Some("rg-prod,rg-shared"));
//! ```

pub mod azure;
pub mod error;
pub mod llm;
pub mod logging;
pub mod prompts;
pub mod server;

pub use azure::AzureConfig;
pub use error::ConfigError;
pub use llm::{LlmConfig, LlmProvider};
pub use logging::{LogFormat, LoggingConfig};
pub use prompts::PromptsConfig;
pub use server::ServerConfig;

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Unified configuration for the query service and CLI.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct InfraQueryConfig {
    /// HTTP server configuration
    pub server: ServerConfig,
    /// Language model endpoint
    pub llm: LlmConfig,
    /// Azure subscription, credentials and resource group scope
    pub azure: AzureConfig,
    /// Prompt template location
    pub prompts: PromptsConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

impl InfraQueryConfig {
    /// Load configuration from a TOML file
    ///
    /// If path is None, returns default configuration.
    /// If path doesn't exist, returns NotFound error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => {
                if !p.exists() {
                    return Err(ConfigError::NotFound(p.to_path_buf()));
                }
                let content = std::fs::read_to_string(p)?;
                toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
            }
            None => Ok(Self::default()),
        }
    }

    /// Apply environment variable overrides
    ///
    /// Invalid values are ignored and the previous value is kept.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(port) = std::env::var("INFRAQUERY_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }
        if let Ok(host) = std::env::var("INFRAQUERY_HOST") {
            self.server.host = host;
        }
        if let Ok(level) = std::env::var("INFRAQUERY_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("INFRAQUERY_LOG_FORMAT") {
            if let Ok(f) = format.parse() {
                self.logging.format = f;
            }
        }

        // Language model
        if let Ok(endpoint) = std::env::var("AZURE_OPENAI_ENDPOINT") {
            self.llm.endpoint = endpoint;
        }
        if let Ok(deployment) = std::env::var("AZURE_OPENAI_DEPLOYMENT_NAME") {
            self.llm.deployment = deployment;
        }
        if let Ok(version) = std::env::var("AZURE_OPENAI_API_VERSION") {
            self.llm.api_version = version;
        }

        // Azure Resource Manager
        if let Ok(subscription) = std::env::var("AZURE_SUBSCRIPTION_ID") {
            self.azure.subscription_id = subscription;
        }
        if let Ok(tenant) = std::env::var("AZURE_TENANT_ID") {
            self.azure.tenant_id = tenant;
        }
        if let Ok(client) = std::env::var("AZURE_CLIENT_ID") {
            self.azure.client_id = client;
        }
        if let Ok(groups) = std::env::var("RESOURCE_GROUPS") {
            self.azure.resource_groups = Some(groups);
        }

        self
    }

    /// Validate settings every command needs
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation {
                field: "server.port".to_string(),
                message: "port must be non-zero".to_string(),
            });
        }
        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::Validation {
                field: "logging.level".to_string(),
                message: "level cannot be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Validate the settings needed to answer questions end to end
    pub fn validate_for_queries(&self) -> Result<(), ConfigError> {
        self.validate()?;

        if self.llm.endpoint.trim().is_empty() {
            return Err(ConfigError::Validation {
                field: "llm.endpoint".to_string(),
                message: "endpoint cannot be empty".to_string(),
            });
        }
        match self.llm.provider {
            LlmProvider::AzureOpenai if self.llm.deployment.trim().is_empty() => {
                return Err(ConfigError::Validation {
                    field: "llm.deployment".to_string(),
                    message: "deployment cannot be empty for the azure_openai provider"
                        .to_string(),
                });
            }
            LlmProvider::Openai if self.llm.model.trim().is_empty() => {
                return Err(ConfigError::Validation {
                    field: "llm.model".to_string(),
                    message: "model cannot be empty for the openai provider".to_string(),
                });
            }
            _ => {}
        }

        self.validate_for_directory()
    }

    /// Validate the settings needed to talk to Azure Resource Manager
    pub fn validate_for_directory(&self) -> Result<(), ConfigError> {
        if self.azure.subscription_id.trim().is_empty() {
            return Err(ConfigError::Validation {
                field: "azure.subscription_id".to_string(),
                message: "subscription id cannot be empty".to_string(),
            });
        }
        Ok(())
    }
}

/// Read a secret from the environment variable named by configuration.
pub fn read_secret(env_var: &str) -> Result<String, ConfigError> {
    match std::env::var(env_var) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(ConfigError::MissingSecret(env_var.to_string())),
    }
}
