//! Azure Resource Manager JSON shapes and their conversion into directory records.

use super::types::{
    InstanceStatus, Resource, ResourceGroup, SqlDatabase, SqlServer, StorageAccount, Subnet, Tags,
    VirtualMachine, VirtualNetwork,
};
use serde::Deserialize;

/// One page of a list response.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Page<T> {
    #[serde(default = "Vec::new")]
    pub value: Vec<T>,
    #[serde(default)]
    pub next_link: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorEnvelope {
    #[serde(default)]
    pub error: Option<ErrorBody>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireResourceGroup {
    #[serde(default)]
    id: String,
    name: String,
    #[serde(default)]
    location: String,
    #[serde(default)]
    tags: Tags,
    #[serde(default)]
    properties: Option<ProvisioningProperties>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProvisioningProperties {
    #[serde(default)]
    provisioning_state: Option<String>,
}

impl From<WireResourceGroup> for ResourceGroup {
    fn from(w: WireResourceGroup) -> Self {
        Self {
            id: w.id,
            name: w.name,
            location: w.location,
            provisioning_state: w.properties.and_then(|p| p.provisioning_state),
            tags: w.tags,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireResource {
    #[serde(default)]
    id: String,
    name: String,
    #[serde(rename = "type", default)]
    resource_type: String,
    #[serde(default)]
    location: String,
}

impl From<WireResource> for Resource {
    fn from(w: WireResource) -> Self {
        Self {
            id: w.id,
            name: w.name,
            resource_type: w.resource_type,
            location: w.location,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireVirtualMachine {
    name: String,
    #[serde(default)]
    location: String,
    #[serde(default)]
    tags: Tags,
    #[serde(default)]
    properties: VmProperties,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VmProperties {
    #[serde(default)]
    provisioning_state: Option<String>,
    #[serde(default)]
    hardware_profile: Option<HardwareProfile>,
    #[serde(default)]
    storage_profile: Option<StorageProfile>,
    #[serde(default)]
    instance_view: Option<InstanceView>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct HardwareProfile {
    #[serde(default)]
    vm_size: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StorageProfile {
    #[serde(default)]
    os_disk: Option<OsDisk>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OsDisk {
    #[serde(default)]
    os_type: Option<String>,
}

#[derive(Debug, Deserialize)]
struct InstanceView {
    #[serde(default)]
    statuses: Vec<WireStatus>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireStatus {
    #[serde(default)]
    code: String,
    #[serde(default)]
    display_status: Option<String>,
}

impl From<WireVirtualMachine> for VirtualMachine {
    fn from(w: WireVirtualMachine) -> Self {
        let props = w.properties;
        Self {
            name: w.name,
            location: w.location,
            vm_size: props.hardware_profile.and_then(|h| h.vm_size),
            os_type: props
                .storage_profile
                .and_then(|s| s.os_disk)
                .and_then(|d| d.os_type),
            provisioning_state: props.provisioning_state,
            tags: w.tags,
            statuses: props
                .instance_view
                .map(|v| v.statuses)
                .unwrap_or_default()
                .into_iter()
                .map(|s| InstanceStatus {
                    code: s.code,
                    display_status: s.display_status,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireSqlServer {
    name: String,
}

impl From<WireSqlServer> for SqlServer {
    fn from(w: WireSqlServer) -> Self {
        Self { name: w.name }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireSqlDatabase {
    name: String,
    #[serde(default)]
    location: String,
    #[serde(default)]
    sku: Option<WireSku>,
    #[serde(default)]
    properties: SqlDatabaseProperties,
}

#[derive(Debug, Deserialize)]
struct WireSku {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    tier: Option<String>,
    #[serde(default)]
    capacity: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SqlDatabaseProperties {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    max_size_bytes: Option<u64>,
    #[serde(default)]
    collation: Option<String>,
}

impl From<WireSqlDatabase> for SqlDatabase {
    fn from(w: WireSqlDatabase) -> Self {
        let (sku_name, tier, capacity) = match w.sku {
            Some(sku) => (sku.name, sku.tier, sku.capacity),
            None => (None, None, None),
        };
        Self {
            name: w.name,
            location: w.location,
            status: w.properties.status,
            sku_name,
            tier,
            capacity,
            max_size_bytes: w.properties.max_size_bytes,
            collation: w.properties.collation,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireVirtualNetwork {
    name: String,
    #[serde(default)]
    location: String,
    #[serde(default)]
    properties: VnetProperties,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VnetProperties {
    #[serde(default)]
    address_space: Option<AddressSpace>,
    #[serde(default)]
    subnets: Vec<WireSubnet>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AddressSpace {
    #[serde(default)]
    address_prefixes: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct WireSubnet {
    name: String,
    #[serde(default)]
    properties: SubnetProperties,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SubnetProperties {
    #[serde(default)]
    address_prefix: Option<String>,
    #[serde(default)]
    ip_configurations: Vec<serde_json::Value>,
}

impl From<WireVirtualNetwork> for VirtualNetwork {
    fn from(w: WireVirtualNetwork) -> Self {
        Self {
            name: w.name,
            location: w.location,
            address_prefixes: w
                .properties
                .address_space
                .map(|a| a.address_prefixes)
                .unwrap_or_default(),
            subnets: w
                .properties
                .subnets
                .into_iter()
                .map(|s| Subnet {
                    name: s.name,
                    address_prefix: s.properties.address_prefix,
                    ip_configuration_count: s.properties.ip_configurations.len(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireStorageAccount {
    name: String,
    #[serde(default)]
    location: String,
    #[serde(default)]
    kind: Option<String>,
    #[serde(default)]
    sku: Option<WireSku>,
    #[serde(default)]
    properties: StorageProperties,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StorageProperties {
    #[serde(default)]
    provisioning_state: Option<String>,
    #[serde(default)]
    access_tier: Option<String>,
    #[serde(default)]
    supports_https_traffic_only: Option<bool>,
}

impl From<WireStorageAccount> for StorageAccount {
    fn from(w: WireStorageAccount) -> Self {
        Self {
            name: w.name,
            location: w.location,
            kind: w.kind,
            sku_name: w.sku.and_then(|s| s.name),
            provisioning_state: w.properties.provisioning_state,
            access_tier: w.properties.access_tier,
            https_only: w.properties.supports_https_traffic_only,
        }
    }
}
