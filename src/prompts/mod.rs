//! Prompt template store.
//!
//! Templates are looked up by name, first as `<dir>/<name>.txt` and then
//! among the built-in templates. Parameters are substituted wherever
//! `{key}` appears.

pub mod templates;

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

/// Template used by the query analyzer as its system prompt.
pub const QUERY_ANALYZER: &str = "query-analyzer";

/// Template used by the response synthesizer; takes `{originalQuery}`.
pub const RESPONSE_GENERATOR: &str = "response-generator";

/// Errors that can occur while loading a template.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("Failed to load prompt: {0}")]
    NotFound(String),

    #[error("Failed to read prompt '{name}': {source}")]
    Io {
        name: String,
        #[source]
        source: std::io::Error,
    },
}

/// Loads prompt templates and fills in their parameters.
#[derive(Debug, Clone, Default)]
pub struct PromptStore {
    dir: Option<PathBuf>,
}

impl PromptStore {
    /// Store that reads overrides from `dir` before falling back to built-ins.
    pub fn new(dir: Option<PathBuf>) -> Self {
        Self { dir }
    }

    /// Store backed only by the built-in templates.
    pub fn builtin() -> Self {
        Self { dir: None }
    }

    /// Load the template `name` and substitute every `{key}` in `variables`.
    pub fn load(&self, name: &str, variables: &[(&str, &str)]) -> Result<String, PromptError> {
        let template = self.raw(name)?;
        Ok(substitute(&template, variables))
    }

    fn raw(&self, name: &str) -> Result<String, PromptError> {
        if let Some(dir) = &self.dir {
            let path = dir.join(format!("{}.txt", name));
            match std::fs::read_to_string(&path) {
                Ok(content) => {
                    tracing::trace!(path = %path.display(), "Loaded prompt template from file");
                    return Ok(content);
                }
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(source) => {
                    return Err(PromptError::Io {
                        name: name.to_string(),
                        source,
                    })
                }
            }
        }

        templates::builtin(name)
            .map(str::to_string)
            .ok_or_else(|| PromptError::NotFound(name.to_string()))
    }
}

fn substitute(template: &str, variables: &[(&str, &str)]) -> String {
    variables
        .iter()
        .fold(template.to_string(), |acc, (key, value)| {
            acc.replace(&format!("{{{}}}", key), value)
        })
}
