//! Prompt template configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where prompt templates are read from
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptsConfig {
    /// Directory of `<name>.txt` templates. Built-in templates are used for
    /// any name not found here.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}
