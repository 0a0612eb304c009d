//! Error types for routing failures

use crate::directory::DirectoryError;
use thiserror::Error;

/// Code reported when a lookup exhausts every candidate group.
pub const RESOURCE_NOT_FOUND: &str = "RESOURCE_NOT_FOUND";

/// Errors that can occur while locating a resource.
///
/// The router never returns these directly; they are folded into a
/// [`QueryResult::Failure`](super::QueryResult::Failure).
#[derive(Debug, Clone, Error)]
pub enum RoutingError {
    /// Every candidate group was searched without a match
    #[error("{label} '{name}' not found in any accessible resource group")]
    NotFound { label: &'static str, name: String },

    /// A directly named resource group does not exist
    #[error("Resource Group '{name}' not found")]
    GroupNotFound { name: String },

    /// The directory failed in a way that stops the search
    #[error("Failed to query {label}: {source}")]
    Transport {
        label: &'static str,
        #[source]
        source: DirectoryError,
    },

    /// The candidate groups themselves could not be determined
    #[error("Failed to resolve resource groups: {0}")]
    Groups(#[source] DirectoryError),
}

impl RoutingError {
    pub fn code(&self) -> String {
        match self {
            RoutingError::NotFound { .. } | RoutingError::GroupNotFound { .. } => {
                RESOURCE_NOT_FOUND.to_string()
            }
            RoutingError::Transport { source, .. } | RoutingError::Groups(source) => source.code(),
        }
    }

    /// Metric label for this outcome.
    pub fn outcome(&self) -> &'static str {
        match self {
            RoutingError::NotFound { .. } | RoutingError::GroupNotFound { .. } => "not_found",
            RoutingError::Transport { .. } | RoutingError::Groups(_) => "error",
        }
    }
}
