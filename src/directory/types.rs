//! Resource records returned by the cloud directories.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Resource tags; `None` when the resource carries no tag block at all.
pub type Tags = Option<BTreeMap<String, String>>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceGroup {
    pub id: String,
    pub name: String,
    pub location: String,
    pub provisioning_state: Option<String>,
    pub tags: Tags,
}

/// Any resource, as listed inside a resource group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub id: String,
    pub name: String,
    /// Provider type, e.g. `Microsoft.Compute/virtualMachines`
    pub resource_type: String,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstanceStatus {
    pub code: String,
    pub display_status: Option<String>,
}

/// A virtual machine fetched together with its instance view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VirtualMachine {
    pub name: String,
    pub location: String,
    pub vm_size: Option<String>,
    pub os_type: Option<String>,
    pub provisioning_state: Option<String>,
    pub tags: Tags,
    pub statuses: Vec<InstanceStatus>,
}

impl VirtualMachine {
    /// Display text of the first `PowerState/*` status, or "Unknown".
    pub fn power_state(&self) -> String {
        self.statuses
            .iter()
            .find(|s| s.code.starts_with("PowerState/"))
            .and_then(|s| s.display_status.clone())
            .unwrap_or_else(|| "Unknown".to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SqlServer {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SqlDatabase {
    pub name: String,
    pub location: String,
    pub status: Option<String>,
    pub sku_name: Option<String>,
    pub tier: Option<String>,
    pub capacity: Option<u32>,
    pub max_size_bytes: Option<u64>,
    pub collation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subnet {
    pub name: String,
    pub address_prefix: Option<String>,
    /// Number of NIC IP configurations attached to the subnet
    pub ip_configuration_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VirtualNetwork {
    pub name: String,
    pub location: String,
    pub address_prefixes: Vec<String>,
    pub subnets: Vec<Subnet>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageAccount {
    pub name: String,
    pub location: String,
    pub kind: Option<String>,
    pub sku_name: Option<String>,
    pub provisioning_state: Option<String>,
    pub access_tier: Option<String>,
    pub https_only: Option<bool>,
}
