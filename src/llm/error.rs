//! Error types for language model calls.

use thiserror::Error;

/// Errors that can occur while calling a language model.
#[derive(Error, Debug)]
pub enum LlmError {
    /// Network connectivity error (DNS, connection refused, reset).
    #[error("Network error: {0}")]
    Network(String),

    /// The service answered with a non-success status (quota, auth, 5xx).
    #[error("Language model error {status}: {message}")]
    Upstream { status: u16, message: String },

    /// The response body doesn't match the chat-completions format.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Client configuration error (missing key, bad endpoint).
    #[error("Configuration error: {0}")]
    Configuration(String),
}
