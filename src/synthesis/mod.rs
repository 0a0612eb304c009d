//! Response synthesis.
//!
//! Turns a routing result into the text shown to the user. Failures are
//! phrased directly; successful lookups are narrated by the language model,
//! falling back to [`format_basic_response`] if that call does not produce
//! an answer.

pub mod format;

pub use format::{format_basic_response, FALLBACK_HEADER, NO_DATA};

use crate::analyzer::QueryIntent;
use crate::llm::{CompletionRequest, LanguageModel, LlmError};
use crate::prompts::{PromptError, PromptStore, RESPONSE_GENERATOR};
use crate::routing::{QueryResult, ResultData};
use std::sync::Arc;
use thiserror::Error;

pub const SYNTHESIS_TEMPERATURE: f32 = 0.7;
pub const SYNTHESIS_MAX_TOKENS: u32 = 800;

/// Prepended to every routing failure message.
pub const FAILURE_PREFIX: &str = "I couldn't find the information you requested. ";

const DATA_PREAMBLE: &str = "Here is the data from Azure:\n";

/// Why the narrated answer was replaced by the plain-text rendering.
///
/// Logged and counted, never returned to callers.
#[derive(Debug, Error)]
pub enum SynthesisDegraded {
    #[error("language model call failed: {0}")]
    Model(#[from] LlmError),

    #[error("language model returned an empty response")]
    EmptyResponse,

    #[error(transparent)]
    Prompt(#[from] PromptError),

    #[error("failed to serialize result data: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Clone)]
pub struct ResponseSynthesizer {
    model: Arc<dyn LanguageModel>,
    prompts: Arc<PromptStore>,
}

impl ResponseSynthesizer {
    pub fn new(model: Arc<dyn LanguageModel>, prompts: Arc<PromptStore>) -> Self {
        Self { model, prompts }
    }

    /// Produce the answer text. Never fails.
    pub async fn render(&self, question: &str, intent: &QueryIntent, result: &QueryResult) -> String {
        let data = match result {
            QueryResult::Failure { message, .. } => return format!("{}{}", FAILURE_PREFIX, message),
            QueryResult::Success { data } => data,
        };

        match self.narrate(question, data).await {
            Ok(text) => text,
            Err(reason) => {
                tracing::warn!(
                    intent = %intent.intent,
                    resource_type = %intent.resource_type,
                    reason = %reason,
                    "Response synthesis degraded, using plain formatting"
                );
                metrics::counter!("infraquery_synthesis_fallbacks_total").increment(1);
                format_basic_response(Some(data))
            }
        }
    }

    async fn narrate(&self, question: &str, data: &ResultData) -> Result<String, SynthesisDegraded> {
        let system_prompt = self
            .prompts
            .load(RESPONSE_GENERATOR, &[("originalQuery", question)])?;
        let user_content = format!("{}{}", DATA_PREAMBLE, serde_json::to_string_pretty(data)?);

        let request = CompletionRequest::new(system_prompt, user_content)
            .with_temperature(SYNTHESIS_TEMPERATURE)
            .with_max_tokens(SYNTHESIS_MAX_TOKENS);

        let reply = self.model.complete(request).await?;
        if reply.trim().is_empty() {
            return Err(SynthesisDegraded::EmptyResponse);
        }
        Ok(reply)
    }
}
