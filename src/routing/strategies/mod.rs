//! Per-resource-type lookup strategies.
//!
//! A strategy answers one question: is the requested resource in this
//! resource group, and if so what does it look like? The router owns the
//! iteration over groups; strategies only ever see a single group.

use crate::analyzer::{QueryIntent, ResourceType};
use crate::directory::{CloudDirectories, DirectoryError};
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::sync::Arc;

mod database;
mod generic;
mod network;
mod storage;
mod vm;

pub use database::DatabaseLookup;
pub use generic::GenericLookup;
pub use network::{SubnetLookup, VirtualNetworkLookup};
pub use storage::StorageAccountLookup;
pub use vm::VirtualMachineLookup;

/// Result payload handed to the synthesizer.
pub type ResultData = Map<String, Value>;

/// Looks up one kind of resource inside a single resource group.
///
/// Returns `Ok(None)` when the resource is not in `group` and the scan should
/// move on. An `Err` stops the scan.
#[async_trait]
pub trait LookupStrategy: Send + Sync + 'static {
    /// Human-readable resource label used in messages (e.g., "Virtual Machine").
    fn label(&self) -> &'static str;

    async fn locate(
        &self,
        directories: &CloudDirectories,
        group: &str,
        intent: &QueryIntent,
    ) -> Result<Option<ResultData>, DirectoryError>;
}

/// Maps resource types to strategies, with a fallback for everything else.
#[derive(Clone)]
pub struct StrategyTable {
    strategies: HashMap<ResourceType, Arc<dyn LookupStrategy>>,
    fallback: Arc<dyn LookupStrategy>,
}

impl StrategyTable {
    pub fn new(fallback: Arc<dyn LookupStrategy>) -> Self {
        Self {
            strategies: HashMap::new(),
            fallback,
        }
    }

    pub fn register(mut self, resource_type: ResourceType, strategy: Arc<dyn LookupStrategy>) -> Self {
        self.strategies.insert(resource_type, strategy);
        self
    }

    pub fn get(&self, resource_type: &ResourceType) -> Arc<dyn LookupStrategy> {
        self.strategies
            .get(resource_type)
            .cloned()
            .unwrap_or_else(|| self.fallback.clone())
    }
}

impl Default for StrategyTable {
    fn default() -> Self {
        Self::new(Arc::new(GenericLookup))
            .register(ResourceType::VirtualMachine, Arc::new(VirtualMachineLookup))
            .register(ResourceType::Database, Arc::new(DatabaseLookup))
            .register(ResourceType::VirtualNetwork, Arc::new(VirtualNetworkLookup))
            .register(ResourceType::Subnet, Arc::new(SubnetLookup))
            .register(ResourceType::StorageAccount, Arc::new(StorageAccountLookup))
    }
}

/// Turn a `json!` object literal into its map.
pub(crate) fn into_object(value: Value) -> ResultData {
    match value {
        Value::Object(map) => map,
        other => {
            let mut map = Map::new();
            map.insert("value".to_string(), other);
            map
        }
    }
}

/// Fold a single-resource GET into the scan protocol.
pub(crate) fn found_or_missing<T>(
    result: Result<T, DirectoryError>,
) -> Result<Option<T>, DirectoryError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.is_not_found() => Ok(None),
        Err(e) => Err(e),
    }
}

pub(crate) fn same_name(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}
