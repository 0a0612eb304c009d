//! Cloud resource directories.
//!
//! Each trait covers one management surface (resources, compute, network,
//! storage, SQL). [`CloudDirectories`] bundles one implementation of each and
//! is what the router receives; production wires every slot to the same
//! [`ArmClient`], tests wire in-memory fakes.
//!
//! Every lookup reports a missing resource as [`DirectoryError::NotFound`]
//! so callers can tell "not here" apart from "could not ask".

use async_trait::async_trait;
use std::sync::Arc;

pub mod arm;
pub mod credential;
pub mod error;
pub mod factory;
pub mod types;
mod wire;

pub use arm::ArmClient;
pub use credential::{ClientSecretCredential, StaticToken, TokenCredential};
pub use error::DirectoryError;
pub use factory::create_directories;
pub use types::{
    InstanceStatus, Resource, ResourceGroup, SqlDatabase, SqlServer, StorageAccount, Subnet,
    Tags, VirtualMachine, VirtualNetwork,
};

/// Resource groups and their generic contents.
#[async_trait]
pub trait ResourceDirectory: Send + Sync + 'static {
    async fn get_resource_group(&self, name: &str) -> Result<ResourceGroup, DirectoryError>;

    /// Every resource group visible to the current credentials, in API order.
    async fn list_resource_groups(&self) -> Result<Vec<ResourceGroup>, DirectoryError>;

    async fn list_resources_in_group(&self, group: &str) -> Result<Vec<Resource>, DirectoryError>;
}

#[async_trait]
pub trait ComputeDirectory: Send + Sync + 'static {
    /// Fetch a VM with its instance view (runtime statuses) expanded.
    async fn get_virtual_machine(
        &self,
        group: &str,
        name: &str,
    ) -> Result<VirtualMachine, DirectoryError>;
}

#[async_trait]
pub trait NetworkDirectory: Send + Sync + 'static {
    async fn get_virtual_network(
        &self,
        group: &str,
        name: &str,
    ) -> Result<VirtualNetwork, DirectoryError>;

    async fn list_virtual_networks(&self, group: &str)
        -> Result<Vec<VirtualNetwork>, DirectoryError>;
}

#[async_trait]
pub trait StorageDirectory: Send + Sync + 'static {
    async fn get_storage_account(
        &self,
        group: &str,
        name: &str,
    ) -> Result<StorageAccount, DirectoryError>;
}

#[async_trait]
pub trait DatabaseDirectory: Send + Sync + 'static {
    async fn list_servers(&self, group: &str) -> Result<Vec<SqlServer>, DirectoryError>;

    async fn list_databases(
        &self,
        group: &str,
        server: &str,
    ) -> Result<Vec<SqlDatabase>, DirectoryError>;
}

/// One handle per directory surface.
#[derive(Clone)]
pub struct CloudDirectories {
    pub resources: Arc<dyn ResourceDirectory>,
    pub compute: Arc<dyn ComputeDirectory>,
    pub network: Arc<dyn NetworkDirectory>,
    pub storage: Arc<dyn StorageDirectory>,
    pub database: Arc<dyn DatabaseDirectory>,
}

impl CloudDirectories {
    /// Use a single implementation for every surface.
    pub fn uniform<T>(directory: Arc<T>) -> Self
    where
        T: ResourceDirectory
            + ComputeDirectory
            + NetworkDirectory
            + StorageDirectory
            + DatabaseDirectory,
    {
        Self {
            resources: directory.clone(),
            compute: directory.clone(),
            network: directory.clone(),
            storage: directory.clone(),
            database: directory,
        }
    }
}
