//! Fakes shared by unit tests.

use crate::directory::{
    CloudDirectories, ComputeDirectory, DatabaseDirectory, DirectoryError, NetworkDirectory,
    Resource, ResourceDirectory, ResourceGroup, SqlDatabase, SqlServer, StorageAccount,
    StorageDirectory, VirtualMachine, VirtualNetwork,
};
use crate::llm::{CompletionRequest, LanguageModel, LlmError};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Replies with queued results in order and records every request.
///
/// Once the queue is empty every further call fails with a network error.
#[derive(Default)]
pub struct ScriptedModel {
    replies: Mutex<VecDeque<Result<String, LlmError>>>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl ScriptedModel {
    pub fn replying(replies: Vec<Result<String, LlmError>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl LanguageModel for ScriptedModel {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn complete(&self, request: CompletionRequest) -> Result<String, LlmError> {
        self.requests.lock().unwrap().push(request);
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(LlmError::Network("no scripted reply left".to_string())))
    }
}

/// Directory with no resources at all.
pub struct EmptyDirectory;

#[async_trait]
impl ResourceDirectory for EmptyDirectory {
    async fn get_resource_group(&self, name: &str) -> Result<ResourceGroup, DirectoryError> {
        Err(DirectoryError::not_found(name))
    }

    async fn list_resource_groups(&self) -> Result<Vec<ResourceGroup>, DirectoryError> {
        Ok(Vec::new())
    }

    async fn list_resources_in_group(&self, _group: &str) -> Result<Vec<Resource>, DirectoryError> {
        Ok(Vec::new())
    }
}

#[async_trait]
impl ComputeDirectory for EmptyDirectory {
    async fn get_virtual_machine(
        &self,
        _group: &str,
        name: &str,
    ) -> Result<VirtualMachine, DirectoryError> {
        Err(DirectoryError::not_found(name))
    }
}

#[async_trait]
impl NetworkDirectory for EmptyDirectory {
    async fn get_virtual_network(
        &self,
        _group: &str,
        name: &str,
    ) -> Result<VirtualNetwork, DirectoryError> {
        Err(DirectoryError::not_found(name))
    }

    async fn list_virtual_networks(
        &self,
        _group: &str,
    ) -> Result<Vec<VirtualNetwork>, DirectoryError> {
        Ok(Vec::new())
    }
}

#[async_trait]
impl StorageDirectory for EmptyDirectory {
    async fn get_storage_account(
        &self,
        _group: &str,
        name: &str,
    ) -> Result<StorageAccount, DirectoryError> {
        Err(DirectoryError::not_found(name))
    }
}

#[async_trait]
impl DatabaseDirectory for EmptyDirectory {
    async fn list_servers(&self, _group: &str) -> Result<Vec<SqlServer>, DirectoryError> {
        Ok(Vec::new())
    }

    async fn list_databases(
        &self,
        _group: &str,
        _server: &str,
    ) -> Result<Vec<SqlDatabase>, DirectoryError> {
        Ok(Vec::new())
    }
}

pub fn empty_directories() -> CloudDirectories {
    CloudDirectories::uniform(Arc::new(EmptyDirectory))
}
