//! End-to-end question answering.
//!
//! [`QueryContext`] holds every collaborator the pipeline needs and is built
//! once, either from configuration or by tests with fakes. [`QueryPipeline`]
//! runs analyze → resolve → route → render for each question.

use crate::analyzer::{QueryAnalyzer, QueryIntent};
use crate::config::{ConfigError, InfraQueryConfig};
use crate::directory::{create_directories, CloudDirectories};
use crate::llm::{create_language_model, LanguageModel, LlmError};
use crate::prompts::PromptStore;
use crate::resolver::{ResourceGroupResolver, ResourceGroupSet};
use crate::routing::{QueryResult, ResourceRouter, RoutingError};
use crate::synthesis::ResponseSynthesizer;
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;

/// Answer source when the directories were consulted.
pub const SOURCE_DIRECTORY: &str = "Azure Resource Manager";
/// Answer source when analysis failed.
pub const SOURCE_ERROR_HANDLER: &str = "Error Handler";

/// Errors that can occur while building a [`QueryContext`] from configuration.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to create language model client: {0}")]
    Llm(#[from] LlmError),

    #[error("Failed to create HTTP client: {0}")]
    Http(#[from] reqwest::Error),
}

/// Collaborators shared by every question.
#[derive(Clone)]
pub struct QueryContext {
    pub model: Arc<dyn LanguageModel>,
    pub directories: CloudDirectories,
    pub prompts: Arc<PromptStore>,
    /// Comma-separated resource group allow-list
    pub resource_groups: Option<String>,
}

impl QueryContext {
    /// Context with built-in prompts and no resource group allow-list.
    pub fn new(model: Arc<dyn LanguageModel>, directories: CloudDirectories) -> Self {
        Self {
            model,
            directories,
            prompts: Arc::new(PromptStore::builtin()),
            resource_groups: None,
        }
    }

    pub fn with_prompts(mut self, prompts: PromptStore) -> Self {
        self.prompts = Arc::new(prompts);
        self
    }

    pub fn with_resource_groups(mut self, groups: Option<String>) -> Self {
        self.resource_groups = groups;
        self
    }

    /// Build production clients from validated configuration.
    pub fn from_config(config: &InfraQueryConfig) -> Result<Self, SetupError> {
        config.validate_for_queries()?;

        let client = Arc::new(reqwest::Client::builder().build()?);
        let model = create_language_model(&config.llm, client.clone())?;
        let directories = create_directories(&config.azure, client)?;

        tracing::debug!(model = %model.name(), "Query context ready");

        Ok(Self::new(model, directories)
            .with_prompts(PromptStore::new(config.prompts.dir.clone()))
            .with_resource_groups(config.azure.resource_groups.clone()))
    }
}

/// Final answer for one question.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedAnswer {
    pub text: String,
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intent: Option<QueryIntent>,
    /// Set only when analysis failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

pub struct QueryPipeline {
    analyzer: QueryAnalyzer,
    resolver: ResourceGroupResolver,
    router: ResourceRouter,
    synthesizer: ResponseSynthesizer,
}

impl QueryPipeline {
    pub fn new(context: QueryContext) -> Self {
        Self {
            analyzer: QueryAnalyzer::new(context.model.clone(), context.prompts.clone()),
            resolver: ResourceGroupResolver::new(
                context.directories.resources.clone(),
                context.resource_groups.clone(),
            ),
            router: ResourceRouter::new(context.directories),
            synthesizer: ResponseSynthesizer::new(context.model, context.prompts),
        }
    }

    /// Answer a question. Always produces text.
    pub async fn answer(&self, question: &str) -> RenderedAnswer {
        let start = Instant::now();
        let answer = self.run(question).await;

        let outcome = if answer.error_message.is_some() {
            "analysis_failed"
        } else {
            "answered"
        };
        metrics::counter!("infraquery_queries_total", "outcome" => outcome).increment(1);
        metrics::histogram!("infraquery_query_duration_seconds")
            .record(start.elapsed().as_secs_f64());

        answer
    }

    async fn run(&self, question: &str) -> RenderedAnswer {
        let intent = match self.analyzer.analyze(question).await {
            Ok(intent) => intent,
            Err(e) => {
                tracing::warn!(error = %e, "Query analysis failed");
                metrics::counter!("infraquery_analysis_failures_total").increment(1);
                let message = e.to_string();
                return RenderedAnswer {
                    text: format!(
                        "I encountered an error while processing your query: {}. Please try rephrasing your question or check if the resource name is correct.",
                        message
                    ),
                    source: SOURCE_ERROR_HANDLER.to_string(),
                    intent: None,
                    error_message: Some(message),
                };
            }
        };

        let result = self.lookup(&intent).await;
        let text = self.synthesizer.render(question, &intent, &result).await;

        RenderedAnswer {
            text,
            source: SOURCE_DIRECTORY.to_string(),
            intent: Some(intent),
            error_message: None,
        }
    }

    async fn lookup(&self, intent: &QueryIntent) -> QueryResult {
        let groups = if intent.scans_resource_groups() {
            match self.resolver.resolve(intent.resource_group_override()).await {
                Ok(groups) => groups,
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to resolve resource groups");
                    return QueryResult::from(RoutingError::Groups(e));
                }
            }
        } else {
            ResourceGroupSet::default()
        };

        self.router.route(intent, &groups).await
    }
}
