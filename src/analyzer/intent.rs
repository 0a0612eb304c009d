//! Structured query intent produced by the analyzer.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Sentinel resource name used when the model names no resource.
pub const UNKNOWN_RESOURCE: &str = "unknown";

/// Resource name that, with [`Intent::ListAll`], requests an aggregate listing.
pub const ALL_RESOURCES: &str = "all";

/// What the user wants to know.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Intent {
    GetStatus,
    GetConfiguration,
    ListResources,
    CountResources,
    ListAll,
    GetCost,
    /// Any intent the model invents; routed like a plain lookup.
    Other(String),
}

impl Intent {
    pub fn as_str(&self) -> &str {
        match self {
            Intent::GetStatus => "get_status",
            Intent::GetConfiguration => "get_configuration",
            Intent::ListResources => "list_resources",
            Intent::CountResources => "count_resources",
            Intent::ListAll => "list_all",
            Intent::GetCost => "get_cost",
            Intent::Other(s) => s,
        }
    }
}

impl From<String> for Intent {
    fn from(s: String) -> Self {
        match s.as_str() {
            "get_status" => Intent::GetStatus,
            "get_configuration" => Intent::GetConfiguration,
            "list_resources" => Intent::ListResources,
            "count_resources" => Intent::CountResources,
            "list_all" => Intent::ListAll,
            "get_cost" => Intent::GetCost,
            _ => Intent::Other(s),
        }
    }
}

impl From<&str> for Intent {
    fn from(s: &str) -> Self {
        Intent::from(s.to_string())
    }
}

impl From<Intent> for String {
    fn from(intent: Intent) -> Self {
        intent.as_str().to_string()
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of resource the question is about.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ResourceType {
    VirtualMachine,
    Database,
    VirtualNetwork,
    Subnet,
    StorageAccount,
    ResourceGroup,
    Generic,
    /// Unrecognized type name, kept verbatim.
    Other(String),
}

impl ResourceType {
    pub fn as_str(&self) -> &str {
        match self {
            ResourceType::VirtualMachine => "virtualMachine",
            ResourceType::Database => "database",
            ResourceType::VirtualNetwork => "virtualNetwork",
            ResourceType::Subnet => "subnet",
            ResourceType::StorageAccount => "storageAccount",
            ResourceType::ResourceGroup => "resourceGroup",
            ResourceType::Generic => "generic",
            ResourceType::Other(s) => s,
        }
    }

    pub fn is_generic(&self) -> bool {
        matches!(self, ResourceType::Generic)
    }
}

impl From<String> for ResourceType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "virtualMachine" => ResourceType::VirtualMachine,
            "database" => ResourceType::Database,
            "virtualNetwork" => ResourceType::VirtualNetwork,
            "subnet" => ResourceType::Subnet,
            "storageAccount" => ResourceType::StorageAccount,
            "resourceGroup" => ResourceType::ResourceGroup,
            "generic" => ResourceType::Generic,
            _ => ResourceType::Other(s),
        }
    }
}

impl From<&str> for ResourceType {
    fn from(s: &str) -> Self {
        ResourceType::from(s.to_string())
    }
}

impl From<ResourceType> for String {
    fn from(resource_type: ResourceType) -> Self {
        resource_type.as_str().to_string()
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated, normalized query intent.
///
/// Built once per question by the analyzer and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryIntent {
    pub intent: Intent,
    pub resource_type: ResourceType,
    pub resource_name: String,
    #[serde(default)]
    pub parameters: BTreeMap<String, String>,
}

impl QueryIntent {
    pub fn new(
        intent: impl Into<Intent>,
        resource_type: impl Into<ResourceType>,
        resource_name: impl Into<String>,
    ) -> Self {
        Self {
            intent: intent.into(),
            resource_type: resource_type.into(),
            resource_name: resource_name.into(),
            parameters: BTreeMap::new(),
        }
    }

    pub fn with_parameter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.insert(key.into(), value.into());
        self
    }

    /// Resource group named explicitly in the question, if any.
    pub fn resource_group_override(&self) -> Option<&str> {
        self.parameters
            .get("resourceGroup")
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
    }

    pub fn is_list_all(&self) -> bool {
        self.intent == Intent::ListAll && self.resource_name == ALL_RESOURCES
    }

    /// Whether routing this intent searches across resource groups.
    ///
    /// Cost placeholders and direct resource-group lookups never do.
    pub fn scans_resource_groups(&self) -> bool {
        if self.is_list_all() {
            return true;
        }
        self.intent != Intent::GetCost && self.resource_type != ResourceType::ResourceGroup
    }
}
