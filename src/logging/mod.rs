//! Structured logging helpers
//!
//! Filter construction for `tracing-subscriber`, request ID generation and
//! privacy-safe field helpers.

pub mod fields;

pub use fields::question_preview;

use uuid::Uuid;

/// Correlation id for one query, echoed in logs and response metadata.
pub fn generate_request_id() -> String {
    Uuid::new_v4().to_string()
}

/// Build filter directives string from LoggingConfig
///
/// Combines the base log level with any per-component levels, scoped to this
/// crate's modules.
///
/// # Examples
///
/// ```
/// use infraquery::config::logging::{LogFormat, LoggingConfig};
/// use infraquery::logging::build_filter_directives;
/// use std::collections::BTreeMap;
///
/// let mut component_levels = BTreeMap::new();
/// component_levels.insert("routing".to_string(), "debug".to_string());
///
/// let config = LoggingConfig {
///     level: "info".to_string(),
///     format: LogFormat::Pretty,
///     component_levels: Some(component_levels),
///     enable_content_logging: false,
/// };
///
/// let filter_str = build_filter_directives(&config);
/// assert_eq!(filter_str, "info,infraquery::routing=debug");
/// ```
pub fn build_filter_directives(config: &crate::config::LoggingConfig) -> String {
    let mut filter_str = config.level.clone();

    if let Some(component_levels) = &config.component_levels {
        for (component, level) in component_levels {
            filter_str.push_str(&format!(",infraquery::{}={}", component, level));
        }
    }

    filter_str
}
