//! Azure Resource Manager configuration

use serde::{Deserialize, Serialize};

/// Azure subscription, credentials and search scope
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AzureConfig {
    pub subscription_id: String,
    pub tenant_id: String,
    pub client_id: String,
    /// Environment variable holding the service principal secret
    pub client_secret_env: String,
    /// Comma-separated resource group allow-list. When unset every visible
    /// resource group is searched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_groups: Option<String>,
    pub management_endpoint: String,
    pub authority_host: String,
}

impl Default for AzureConfig {
    fn default() -> Self {
        Self {
            subscription_id: String::new(),
            tenant_id: String::new(),
            client_id: String::new(),
            client_secret_env: "AZURE_CLIENT_SECRET".to_string(),
            resource_groups: None,
            management_endpoint: "https://management.azure.com".to_string(),
            authority_host: "https://login.microsoftonline.com".to_string(),
        }
    }
}
