//! Resource group resolution.
//!
//! Decides which resource groups a lookup searches, in priority order:
//! a group named in the question, the configured allow-list, or every group
//! the credentials can see.

use crate::directory::{DirectoryError, ResourceDirectory};
use std::sync::Arc;

/// Ordered list of resource group names to search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceGroupSet(Vec<String>);

impl ResourceGroupSet {
    pub fn new(groups: Vec<String>) -> Self {
        Self(groups)
    }

    pub fn single(group: impl Into<String>) -> Self {
        Self(vec![group.into()])
    }

    /// Parse a comma-separated list, trimming entries and dropping empty ones.
    pub fn from_list(list: &str) -> Self {
        Self(
            list.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }

    pub fn names(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

pub struct ResourceGroupResolver {
    directory: Arc<dyn ResourceDirectory>,
    configured: Option<String>,
}

impl ResourceGroupResolver {
    pub fn new(directory: Arc<dyn ResourceDirectory>, configured: Option<String>) -> Self {
        Self {
            directory,
            configured,
        }
    }

    pub async fn resolve(&self, explicit: Option<&str>) -> Result<ResourceGroupSet, DirectoryError> {
        if let Some(group) = explicit.map(str::trim).filter(|g| !g.is_empty()) {
            tracing::debug!(resource_group = group, "Using resource group from query");
            return Ok(ResourceGroupSet::single(group));
        }

        if let Some(list) = &self.configured {
            let groups = ResourceGroupSet::from_list(list);
            if !groups.is_empty() {
                tracing::debug!(count = groups.len(), "Using configured resource groups");
                return Ok(groups);
            }
        }

        let groups = self.directory.list_resource_groups().await?;
        tracing::debug!(count = groups.len(), "Enumerated resource groups");
        Ok(ResourceGroupSet::new(
            groups.into_iter().map(|g| g.name).collect(),
        ))
    }
}
