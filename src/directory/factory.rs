//! Builds the Resource Manager directories from configuration.

use super::{ArmClient, ClientSecretCredential, CloudDirectories};
use crate::config::{read_secret, AzureConfig, ConfigError};
use reqwest::Client;
use std::sync::Arc;

/// Create directories backed by one [`ArmClient`] using service principal
/// credentials.
///
/// The client secret is read from the variable named by
/// `config.client_secret_env`.
pub fn create_directories(
    config: &AzureConfig,
    client: Arc<Client>,
) -> Result<CloudDirectories, ConfigError> {
    for (field, value) in [
        ("azure.subscription_id", &config.subscription_id),
        ("azure.tenant_id", &config.tenant_id),
        ("azure.client_id", &config.client_id),
    ] {
        if value.trim().is_empty() {
            return Err(ConfigError::Validation {
                field: field.to_string(),
                message: "must be set".to_string(),
            });
        }
    }
    let secret = read_secret(&config.client_secret_env)?;

    let credential = ClientSecretCredential::new(
        &config.authority_host,
        &config.tenant_id,
        config.client_id.clone(),
        secret,
        client.clone(),
    );
    let arm = ArmClient::new(
        config.management_endpoint.clone(),
        config.subscription_id.clone(),
        Arc::new(credential),
        client,
    );

    Ok(CloudDirectories::uniform(Arc::new(arm)))
}
