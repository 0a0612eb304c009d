//! Azure Resource Manager REST client.
//!
//! Implements every directory trait against `management.azure.com` (or a
//! configured endpoint). List calls follow `nextLink` until exhausted.

use super::credential::TokenCredential;
use super::wire::{
    ErrorEnvelope, Page, WireResource, WireResourceGroup, WireSqlDatabase, WireSqlServer,
    WireStorageAccount, WireVirtualMachine, WireVirtualNetwork,
};
use super::{
    ComputeDirectory, DatabaseDirectory, DirectoryError, NetworkDirectory, Resource,
    ResourceDirectory, ResourceGroup, SqlDatabase, SqlServer, StorageAccount, StorageDirectory,
    VirtualMachine, VirtualNetwork,
};
use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use std::sync::Arc;

const RESOURCES_API_VERSION: &str = "2021-04-01";
const COMPUTE_API_VERSION: &str = "2023-03-01";
const NETWORK_API_VERSION: &str = "2023-05-01";
const STORAGE_API_VERSION: &str = "2023-01-01";
const SQL_API_VERSION: &str = "2021-11-01";

/// Resource Manager client scoped to one subscription.
pub struct ArmClient {
    /// Management endpoint (e.g., "https://management.azure.com")
    endpoint: String,
    subscription_id: String,
    credential: Arc<dyn TokenCredential>,
    /// Shared HTTP client for connection pooling
    client: Arc<Client>,
}

impl ArmClient {
    pub fn new(
        endpoint: String,
        subscription_id: String,
        credential: Arc<dyn TokenCredential>,
        client: Arc<Client>,
    ) -> Self {
        Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            subscription_id,
            credential,
            client,
        }
    }

    /// Build a request URL from raw path segments.
    ///
    /// Each segment is percent-encoded on its own, so names cannot add
    /// segments, a query or a fragment. `.` and `..` cannot be expressed as
    /// a single segment and are reported as not found.
    fn url(&self, segments: &[&str], resource: &str) -> Result<Url, DirectoryError> {
        if segments.iter().any(|s| matches!(s.trim(), "" | "." | "..")) {
            return Err(DirectoryError::not_found(resource));
        }

        let mut url = Url::parse(&self.endpoint).map_err(|e| {
            DirectoryError::Network(format!("Invalid management endpoint: {}", e))
        })?;
        url.path_segments_mut()
            .map_err(|_| {
                DirectoryError::Network(format!(
                    "Invalid management endpoint: {}",
                    self.endpoint
                ))
            })?
            .pop_if_empty()
            .push("subscriptions")
            .push(&self.subscription_id)
            .extend(segments);
        Ok(url)
    }

    /// GET a URL, mapping error statuses onto [`DirectoryError`].
    async fn fetch<T: DeserializeOwned>(
        &self,
        url: Url,
        query: &[(&str, &str)],
        resource: &str,
    ) -> Result<T, DirectoryError> {
        let token = self.credential.token().await?;

        let response = self
            .client
            .get(url)
            .query(query)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| DirectoryError::Network(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            tracing::trace!(resource, "Resource Manager returned 404");
            return Err(DirectoryError::not_found(resource));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let envelope: ErrorEnvelope = serde_json::from_str(&body).unwrap_or_default();
            let (code, message) = match envelope.error {
                Some(err) => (err.code, err.message),
                None => (String::new(), body),
            };
            return Err(DirectoryError::Api {
                status: status.as_u16(),
                code,
                message,
            });
        }

        response.json::<T>().await.map_err(|e| {
            DirectoryError::InvalidResponse(format!("Failed to parse {}: {}", resource, e))
        })
    }

    async fn get<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        api_version: &str,
        extra_query: &[(&str, &str)],
        resource: &str,
    ) -> Result<T, DirectoryError> {
        let url = self.url(segments, resource)?;
        let mut query = vec![("api-version", api_version)];
        query.extend_from_slice(extra_query);
        self.fetch(url, &query, resource).await
    }

    async fn list<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        api_version: &str,
        resource: &str,
    ) -> Result<Vec<T>, DirectoryError> {
        let mut page: Page<T> = self.get(segments, api_version, &[], resource).await?;
        let mut items = Vec::new();

        loop {
            items.append(&mut page.value);
            match page.next_link.take() {
                // nextLink already carries api-version and skip tokens
                Some(link) => {
                    let url = Url::parse(&link).map_err(|e| {
                        DirectoryError::InvalidResponse(format!("Invalid nextLink: {}", e))
                    })?;
                    page = self.fetch(url, &[], resource).await?;
                }
                None => break,
            }
        }

        Ok(items)
    }
}

#[async_trait]
impl ResourceDirectory for ArmClient {
    async fn get_resource_group(&self, name: &str) -> Result<ResourceGroup, DirectoryError> {
        let group: WireResourceGroup = self
            .get(
                &["resourcegroups", name],
                RESOURCES_API_VERSION,
                &[],
                &format!("Resource group '{}'", name),
            )
            .await?;
        Ok(group.into())
    }

    async fn list_resource_groups(&self) -> Result<Vec<ResourceGroup>, DirectoryError> {
        let groups: Vec<WireResourceGroup> = self
            .list(&["resourcegroups"], RESOURCES_API_VERSION, "Resource groups")
            .await?;
        Ok(groups.into_iter().map(Into::into).collect())
    }

    async fn list_resources_in_group(&self, group: &str) -> Result<Vec<Resource>, DirectoryError> {
        let resources: Vec<WireResource> = self
            .list(
                &["resourceGroups", group, "resources"],
                RESOURCES_API_VERSION,
                &format!("Resource group '{}'", group),
            )
            .await?;
        Ok(resources.into_iter().map(Into::into).collect())
    }
}

#[async_trait]
impl ComputeDirectory for ArmClient {
    async fn get_virtual_machine(
        &self,
        group: &str,
        name: &str,
    ) -> Result<VirtualMachine, DirectoryError> {
        let vm: WireVirtualMachine = self
            .get(
                &[
                    "resourceGroups",
                    group,
                    "providers",
                    "Microsoft.Compute",
                    "virtualMachines",
                    name,
                ],
                COMPUTE_API_VERSION,
                &[("$expand", "instanceView")],
                &format!("Virtual machine '{}'", name),
            )
            .await?;
        Ok(vm.into())
    }
}

#[async_trait]
impl NetworkDirectory for ArmClient {
    async fn get_virtual_network(
        &self,
        group: &str,
        name: &str,
    ) -> Result<VirtualNetwork, DirectoryError> {
        let vnet: WireVirtualNetwork = self
            .get(
                &[
                    "resourceGroups",
                    group,
                    "providers",
                    "Microsoft.Network",
                    "virtualNetworks",
                    name,
                ],
                NETWORK_API_VERSION,
                &[],
                &format!("Virtual network '{}'", name),
            )
            .await?;
        Ok(vnet.into())
    }

    async fn list_virtual_networks(
        &self,
        group: &str,
    ) -> Result<Vec<VirtualNetwork>, DirectoryError> {
        let vnets: Vec<WireVirtualNetwork> = self
            .list(
                &[
                    "resourceGroups",
                    group,
                    "providers",
                    "Microsoft.Network",
                    "virtualNetworks",
                ],
                NETWORK_API_VERSION,
                &format!("Virtual networks in '{}'", group),
            )
            .await?;
        Ok(vnets.into_iter().map(Into::into).collect())
    }
}

#[async_trait]
impl StorageDirectory for ArmClient {
    async fn get_storage_account(
        &self,
        group: &str,
        name: &str,
    ) -> Result<StorageAccount, DirectoryError> {
        let account: WireStorageAccount = self
            .get(
                &[
                    "resourceGroups",
                    group,
                    "providers",
                    "Microsoft.Storage",
                    "storageAccounts",
                    name,
                ],
                STORAGE_API_VERSION,
                &[],
                &format!("Storage account '{}'", name),
            )
            .await?;
        Ok(account.into())
    }
}

#[async_trait]
impl DatabaseDirectory for ArmClient {
    async fn list_servers(&self, group: &str) -> Result<Vec<SqlServer>, DirectoryError> {
        let servers: Vec<WireSqlServer> = self
            .list(
                &["resourceGroups", group, "providers", "Microsoft.Sql", "servers"],
                SQL_API_VERSION,
                &format!("SQL servers in '{}'", group),
            )
            .await?;
        Ok(servers.into_iter().map(Into::into).collect())
    }

    async fn list_databases(
        &self,
        group: &str,
        server: &str,
    ) -> Result<Vec<SqlDatabase>, DirectoryError> {
        let databases: Vec<WireSqlDatabase> = self
            .list(
                &[
                    "resourceGroups",
                    group,
                    "providers",
                    "Microsoft.Sql",
                    "servers",
                    server,
                    "databases",
                ],
                SQL_API_VERSION,
                &format!("Databases on server '{}'", server),
            )
            .await?;
        Ok(databases.into_iter().map(Into::into).collect())
    }
}
