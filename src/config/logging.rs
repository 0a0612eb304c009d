//! `[logging]` section

use super::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Pretty,
    /// One JSON object per event, for log shippers
    Json,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(ConfigError::Validation {
                field: "logging.format".to_string(),
                message: format!("expected 'pretty' or 'json', got '{}'", other),
            }),
        }
    }
}

/// Where and how much the server and CLI log.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Base `tracing` level for every module
    pub level: String,
    pub format: LogFormat,
    /// Levels for single pipeline stages, keyed by module name under
    /// `infraquery::` (`routing`, `analyzer`, `directory`, ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component_levels: Option<BTreeMap<String, String>>,
    /// Log question text instead of only its length.
    /// Questions can name internal hosts and projects; leave off outside debugging.
    pub enable_content_logging: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
            component_levels: None,
            enable_content_logging: false,
        }
    }
}
