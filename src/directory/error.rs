//! Error types for cloud directory lookups.

use thiserror::Error;

/// Errors that can occur while querying a cloud directory.
///
/// `NotFound` is kept apart from every other failure: lookups that scan
/// several resource groups move on after a miss but stop on anything else.
#[derive(Debug, Clone, Error)]
pub enum DirectoryError {
    /// The requested resource does not exist in the queried scope.
    #[error("{resource} not found")]
    NotFound { resource: String },

    /// The management API answered with an error status.
    #[error("Azure API error {status} ({code}): {message}")]
    Api {
        status: u16,
        code: String,
        message: String,
    },

    /// Connectivity failure before a response was received.
    #[error("Network error: {0}")]
    Network(String),

    /// Token acquisition failed.
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// Response body didn't match the expected shape.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl DirectoryError {
    pub fn not_found(resource: impl Into<String>) -> Self {
        DirectoryError::NotFound {
            resource: resource.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, DirectoryError::NotFound { .. })
    }

    /// Opaque error code surfaced to callers alongside the message.
    pub fn code(&self) -> String {
        match self {
            DirectoryError::NotFound { .. } => "ResourceNotFound".to_string(),
            DirectoryError::Api { code, .. } if !code.is_empty() => code.clone(),
            DirectoryError::Api { .. } => "UNKNOWN_ERROR".to_string(),
            DirectoryError::Network(_) => "NETWORK_ERROR".to_string(),
            DirectoryError::Auth(_) => "AUTH_ERROR".to_string(),
            DirectoryError::InvalidResponse(_) => "INVALID_RESPONSE".to_string(),
        }
    }
}
