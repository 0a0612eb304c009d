//! Shared test utilities for infraquery integration tests.
//!
//! Provides a scripted language model, an in-memory directory that records
//! every probe, and builders for directory records.

#![allow(dead_code)]

use async_trait::async_trait;
use infraquery::directory::{
    CloudDirectories, ComputeDirectory, DatabaseDirectory, DirectoryError, InstanceStatus,
    NetworkDirectory, Resource, ResourceDirectory, ResourceGroup, SqlDatabase, SqlServer,
    StorageAccount, StorageDirectory, Subnet, VirtualMachine, VirtualNetwork,
};
use infraquery::llm::{CompletionRequest, LanguageModel, LlmError};
use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::{Arc, Mutex};

// =============================================================================
// Language Model
// =============================================================================

/// Language model that replays queued replies and records every request.
#[derive(Default)]
pub struct FakeLanguageModel {
    replies: Mutex<VecDeque<Result<String, LlmError>>>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl FakeLanguageModel {
    pub fn replying(replies: Vec<Result<String, LlmError>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// An intent JSON reply followed by a synthesized answer.
    pub fn intent_then_answer(intent_json: &str, answer: &str) -> Self {
        Self::replying(vec![Ok(intent_json.to_string()), Ok(answer.to_string())])
    }

    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl LanguageModel for FakeLanguageModel {
    fn name(&self) -> &str {
        "fake/model"
    }

    async fn complete(&self, request: CompletionRequest) -> Result<String, LlmError> {
        self.requests.lock().unwrap().push(request);
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(LlmError::Network("no scripted reply".to_string())))
    }
}

// =============================================================================
// Directory
// =============================================================================

/// In-memory directory covering every surface.
///
/// Each call is recorded as `"<operation>:<group>"`. A group registered with
/// [`FakeDirectory::failing`] answers every call with the given error.
#[derive(Default)]
pub struct FakeDirectory {
    groups: Vec<ResourceGroup>,
    vms: Vec<(String, VirtualMachine)>,
    vnets: Vec<(String, VirtualNetwork)>,
    storage: Vec<(String, StorageAccount)>,
    servers: Vec<(String, String, Vec<SqlDatabase>)>,
    resources: Vec<(String, Resource)>,
    failures: HashMap<String, DirectoryError>,
    server_failures: HashSet<(String, String)>,
    probes: Mutex<Vec<String>>,
}

impl FakeDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_group(mut self, name: &str) -> Self {
        self.groups.push(make_group(name));
        self
    }

    pub fn with_groups(self, names: &[&str]) -> Self {
        names.iter().fold(self, |dir, name| dir.with_group(name))
    }

    pub fn with_vm(mut self, group: &str, vm: VirtualMachine) -> Self {
        self.vms.push((group.to_string(), vm));
        self
    }

    pub fn with_vnet(mut self, group: &str, vnet: VirtualNetwork) -> Self {
        self.vnets.push((group.to_string(), vnet));
        self
    }

    pub fn with_storage(mut self, group: &str, account: StorageAccount) -> Self {
        self.storage.push((group.to_string(), account));
        self
    }

    pub fn with_server(mut self, group: &str, server: &str, databases: Vec<SqlDatabase>) -> Self {
        self.servers
            .push((group.to_string(), server.to_string(), databases));
        self
    }

    pub fn with_resource(mut self, group: &str, resource: Resource) -> Self {
        self.resources.push((group.to_string(), resource));
        self
    }

    /// Every call scoped to `group` fails with `error`.
    pub fn failing(mut self, group: &str, error: DirectoryError) -> Self {
        self.failures.insert(group.to_string(), error);
        self
    }

    /// Listing the databases of one server fails.
    pub fn failing_server(mut self, group: &str, server: &str) -> Self {
        self.server_failures
            .insert((group.to_string(), server.to_string()));
        self
    }

    pub fn into_directories(self) -> (Arc<Self>, CloudDirectories) {
        let dir = Arc::new(self);
        (dir.clone(), CloudDirectories::uniform(dir))
    }

    pub fn probes(&self) -> Vec<String> {
        self.probes.lock().unwrap().clone()
    }

    /// Number of recorded calls of `operation`, in any group.
    pub fn count(&self, operation: &str) -> usize {
        let prefix = format!("{}:", operation);
        self.probes()
            .iter()
            .filter(|p| p.starts_with(&prefix))
            .count()
    }

    fn record(&self, operation: &str, group: &str) -> Result<(), DirectoryError> {
        self.probes
            .lock()
            .unwrap()
            .push(format!("{}:{}", operation, group));
        match self.failures.get(group) {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }

    fn group_exists(&self, group: &str) -> bool {
        self.groups.iter().any(|g| g.name.eq_ignore_ascii_case(group))
    }
}

fn same(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}

#[async_trait]
impl ResourceDirectory for FakeDirectory {
    async fn get_resource_group(&self, name: &str) -> Result<ResourceGroup, DirectoryError> {
        self.record("get_resource_group", name)?;
        self.groups
            .iter()
            .find(|g| same(&g.name, name))
            .cloned()
            .ok_or_else(|| DirectoryError::not_found(name))
    }

    async fn list_resource_groups(&self) -> Result<Vec<ResourceGroup>, DirectoryError> {
        self.record("list_resource_groups", "*")?;
        Ok(self.groups.clone())
    }

    async fn list_resources_in_group(&self, group: &str) -> Result<Vec<Resource>, DirectoryError> {
        self.record("list_resources", group)?;
        if !self.group_exists(group) {
            return Err(DirectoryError::not_found(group));
        }
        Ok(self
            .resources
            .iter()
            .filter(|(g, _)| same(g, group))
            .map(|(_, r)| r.clone())
            .collect())
    }
}

#[async_trait]
impl ComputeDirectory for FakeDirectory {
    async fn get_virtual_machine(
        &self,
        group: &str,
        name: &str,
    ) -> Result<VirtualMachine, DirectoryError> {
        self.record("get_virtual_machine", group)?;
        self.vms
            .iter()
            .find(|(g, vm)| same(g, group) && same(&vm.name, name))
            .map(|(_, vm)| vm.clone())
            .ok_or_else(|| DirectoryError::not_found(name))
    }
}

#[async_trait]
impl NetworkDirectory for FakeDirectory {
    async fn get_virtual_network(
        &self,
        group: &str,
        name: &str,
    ) -> Result<VirtualNetwork, DirectoryError> {
        self.record("get_virtual_network", group)?;
        self.vnets
            .iter()
            .find(|(g, v)| same(g, group) && same(&v.name, name))
            .map(|(_, v)| v.clone())
            .ok_or_else(|| DirectoryError::not_found(name))
    }

    async fn list_virtual_networks(
        &self,
        group: &str,
    ) -> Result<Vec<VirtualNetwork>, DirectoryError> {
        self.record("list_virtual_networks", group)?;
        Ok(self
            .vnets
            .iter()
            .filter(|(g, _)| same(g, group))
            .map(|(_, v)| v.clone())
            .collect())
    }
}

#[async_trait]
impl StorageDirectory for FakeDirectory {
    async fn get_storage_account(
        &self,
        group: &str,
        name: &str,
    ) -> Result<StorageAccount, DirectoryError> {
        self.record("get_storage_account", group)?;
        self.storage
            .iter()
            .find(|(g, s)| same(g, group) && same(&s.name, name))
            .map(|(_, s)| s.clone())
            .ok_or_else(|| DirectoryError::not_found(name))
    }
}

#[async_trait]
impl DatabaseDirectory for FakeDirectory {
    async fn list_servers(&self, group: &str) -> Result<Vec<SqlServer>, DirectoryError> {
        self.record("list_servers", group)?;
        Ok(self
            .servers
            .iter()
            .filter(|(g, _, _)| same(g, group))
            .map(|(_, server, _)| SqlServer {
                name: server.clone(),
            })
            .collect())
    }

    async fn list_databases(
        &self,
        group: &str,
        server: &str,
    ) -> Result<Vec<SqlDatabase>, DirectoryError> {
        self.record("list_databases", group)?;
        if self
            .server_failures
            .contains(&(group.to_string(), server.to_string()))
        {
            return Err(api_error(403, "AuthorizationFailed"));
        }
        Ok(self
            .servers
            .iter()
            .find(|(g, s, _)| same(g, group) && same(s, server))
            .map(|(_, _, dbs)| dbs.clone())
            .unwrap_or_default())
    }
}

// =============================================================================
// Record Builders
// =============================================================================

pub fn make_group(name: &str) -> ResourceGroup {
    ResourceGroup {
        id: format!("/subscriptions/sub-1/resourceGroups/{}", name),
        name: name.to_string(),
        location: "westeurope".to_string(),
        provisioning_state: Some("Succeeded".to_string()),
        tags: None,
    }
}

pub fn make_vm(name: &str, power_state: &str) -> VirtualMachine {
    VirtualMachine {
        name: name.to_string(),
        location: "westeurope".to_string(),
        vm_size: Some("Standard_D2s_v3".to_string()),
        os_type: Some("Linux".to_string()),
        provisioning_state: Some("Succeeded".to_string()),
        tags: None,
        statuses: vec![
            InstanceStatus {
                code: "ProvisioningState/succeeded".to_string(),
                display_status: Some("Provisioning succeeded".to_string()),
            },
            InstanceStatus {
                code: format!(
                    "PowerState/{}",
                    power_state.trim_start_matches("VM ").to_lowercase()
                ),
                display_status: Some(power_state.to_string()),
            },
        ],
    }
}

pub fn make_database(name: &str) -> SqlDatabase {
    SqlDatabase {
        name: name.to_string(),
        location: "westeurope".to_string(),
        status: Some("Online".to_string()),
        sku_name: Some("S0".to_string()),
        tier: Some("Standard".to_string()),
        capacity: Some(10),
        max_size_bytes: Some(268_435_456_000),
        collation: Some("SQL_Latin1_General_CP1_CI_AS".to_string()),
    }
}

pub fn make_vnet(name: &str, subnets: &[(&str, &str, usize)]) -> VirtualNetwork {
    VirtualNetwork {
        name: name.to_string(),
        location: "westeurope".to_string(),
        address_prefixes: vec!["10.0.0.0/16".to_string()],
        subnets: subnets
            .iter()
            .map(|(name, prefix, ips)| Subnet {
                name: name.to_string(),
                address_prefix: Some(prefix.to_string()),
                ip_configuration_count: *ips,
            })
            .collect(),
    }
}

pub fn make_storage(name: &str) -> StorageAccount {
    StorageAccount {
        name: name.to_string(),
        location: "westeurope".to_string(),
        kind: Some("StorageV2".to_string()),
        sku_name: Some("Standard_LRS".to_string()),
        provisioning_state: Some("Succeeded".to_string()),
        access_tier: Some("Hot".to_string()),
        https_only: Some(true),
    }
}

pub fn make_resource(group: &str, name: &str, resource_type: &str) -> Resource {
    Resource {
        id: format!(
            "/subscriptions/sub-1/resourceGroups/{}/providers/{}/{}",
            group, resource_type, name
        ),
        name: name.to_string(),
        resource_type: resource_type.to_string(),
        location: "westeurope".to_string(),
    }
}

pub fn api_error(status: u16, code: &str) -> DirectoryError {
    DirectoryError::Api {
        status,
        code: code.to_string(),
        message: format!("{} from fake directory", code),
    }
}
