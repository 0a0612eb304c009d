//! Query analyzer.
//!
//! Sends the user's question to the language model together with the
//! `query-analyzer` system prompt and turns the JSON reply into a validated
//! [`QueryIntent`].

pub mod error;
pub mod intent;
pub mod parse;

pub use error::AnalysisError;
pub use intent::{Intent, QueryIntent, ResourceType, ALL_RESOURCES, UNKNOWN_RESOURCE};
pub use parse::{parse_intent, strip_code_fences};

use crate::llm::{CompletionRequest, LanguageModel};
use crate::prompts::{PromptStore, QUERY_ANALYZER};
use std::sync::Arc;

/// Low temperature keeps the JSON output stable.
pub const ANALYSIS_TEMPERATURE: f32 = 0.1;
pub const ANALYSIS_MAX_TOKENS: u32 = 500;

/// Turns questions into intents with a single model call.
#[derive(Clone)]
pub struct QueryAnalyzer {
    model: Arc<dyn LanguageModel>,
    prompts: Arc<PromptStore>,
}

impl QueryAnalyzer {
    pub fn new(model: Arc<dyn LanguageModel>, prompts: Arc<PromptStore>) -> Self {
        Self { model, prompts }
    }

    pub async fn analyze(&self, question: &str) -> Result<QueryIntent, AnalysisError> {
        let system_prompt = self.prompts.load(QUERY_ANALYZER, &[])?;
        let request = CompletionRequest::new(system_prompt, question)
            .with_temperature(ANALYSIS_TEMPERATURE)
            .with_max_tokens(ANALYSIS_MAX_TOKENS);

        let reply = self.model.complete(request).await?;
        if reply.trim().is_empty() {
            return Err(AnalysisError::EmptyResponse);
        }

        let intent = parse_intent(&reply)?;
        tracing::debug!(
            model = %self.model.name(),
            intent = %intent.intent,
            resource_type = %intent.resource_type,
            resource_name = %intent.resource_name,
            "Query analyzed"
        );
        Ok(intent)
    }
}
