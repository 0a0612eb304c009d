//! Error types for query analysis.

use crate::llm::LlmError;
use crate::prompts::PromptError;
use thiserror::Error;

/// Errors that can occur while turning a question into a [`QueryIntent`].
///
/// Any of these ends the pipeline for the current question.
///
/// [`QueryIntent`]: super::QueryIntent
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Query analysis failed: {0}")]
    Model(#[from] LlmError),

    #[error("Query analysis failed: language model returned an empty response")]
    EmptyResponse,

    #[error("Query analysis failed: Failed to parse query analysis: {message} (raw response: {raw})")]
    Parse { message: String, raw: String },

    #[error("Query analysis failed: Invalid analysis result: missing required field '{0}'")]
    MissingField(&'static str),

    #[error("Query analysis failed: {0}")]
    Prompt(#[from] PromptError),
}
