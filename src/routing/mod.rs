//! Resource routing.
//!
//! Sends an analyzed intent to the matching lookup and runs it over the
//! candidate resource groups. Aggregate listings, cost questions and direct
//! resource-group lookups take their own branches; everything else goes
//! through a [`LookupStrategy`] chosen by resource type.
//!
//! The per-group scan is lazy: a group is only probed after every earlier
//! group missed, and the first hit ends the scan.

use crate::analyzer::{Intent, QueryIntent, ResourceType};
use crate::directory::CloudDirectories;
use crate::resolver::ResourceGroupSet;
use futures::stream::{self, StreamExt, TryStreamExt};
use serde::Serialize;

mod direct;
pub mod error;
pub mod strategies;

pub use error::{RoutingError, RESOURCE_NOT_FOUND};
pub use strategies::{LookupStrategy, ResultData, StrategyTable};

/// Outcome of routing one intent.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum QueryResult {
    Success { data: ResultData },
    Failure { message: String, code: String },
}

impl QueryResult {
    pub fn is_success(&self) -> bool {
        matches!(self, QueryResult::Success { .. })
    }
}

impl From<RoutingError> for QueryResult {
    fn from(err: RoutingError) -> Self {
        QueryResult::Failure {
            code: err.code(),
            message: err.to_string(),
        }
    }
}

/// Model-invented type names share one label to bound metric cardinality.
fn metric_label(resource_type: &ResourceType) -> String {
    match resource_type {
        ResourceType::Other(_) => "other".to_string(),
        known => known.to_string(),
    }
}

/// Routes intents to directory lookups.
#[derive(Clone)]
pub struct ResourceRouter {
    directories: CloudDirectories,
    strategies: StrategyTable,
}

impl ResourceRouter {
    /// Router with the built-in strategy for every known resource type.
    pub fn new(directories: CloudDirectories) -> Self {
        Self::with_strategies(directories, StrategyTable::default())
    }

    pub fn with_strategies(directories: CloudDirectories, strategies: StrategyTable) -> Self {
        Self {
            directories,
            strategies,
        }
    }

    /// Run the lookup for `intent` over `groups`. Never fails; errors come
    /// back as [`QueryResult::Failure`].
    pub async fn route(&self, intent: &QueryIntent, groups: &ResourceGroupSet) -> QueryResult {
        let outcome = if intent.is_list_all() {
            Ok(direct::list_all(&self.directories, intent, groups).await)
        } else if intent.intent == Intent::GetCost {
            Ok(direct::cost_placeholder(intent))
        } else if intent.resource_type == ResourceType::ResourceGroup {
            direct::resource_group(&self.directories, intent).await
        } else {
            self.scan(intent, groups).await
        };

        let result = match &outcome {
            Ok(_) => "found",
            Err(e) => e.outcome(),
        };
        metrics::counter!(
            "infraquery_routing_results_total",
            "resource_type" => metric_label(&intent.resource_type),
            "result" => result
        )
        .increment(1);

        match outcome {
            Ok(data) => QueryResult::Success { data },
            Err(e) => {
                tracing::info!(
                    resource_type = %intent.resource_type,
                    resource_name = %intent.resource_name,
                    code = %e.code(),
                    error = %e,
                    "Routing produced no data"
                );
                QueryResult::from(e)
            }
        }
    }

    /// Probe groups in order until the strategy finds the resource.
    async fn scan(
        &self,
        intent: &QueryIntent,
        groups: &ResourceGroupSet,
    ) -> Result<ResultData, RoutingError> {
        let strategy = self.strategies.get(&intent.resource_type);
        let strategy: &dyn LookupStrategy = strategy.as_ref();
        let directories = &self.directories;

        let probes = stream::iter(groups.iter()).then(move |group| async move {
            tracing::debug!(
                resource_group = group,
                strategy = strategy.label(),
                resource_name = %intent.resource_name,
                "Probing resource group"
            );
            strategy.locate(directories, group, intent).await
        });
        let mut hits = std::pin::pin!(probes.try_filter_map(|found| async move { Ok(found) }));

        match hits.try_next().await {
            Ok(Some(data)) => Ok(data),
            Ok(None) => Err(RoutingError::NotFound {
                label: strategy.label(),
                name: intent.resource_name.clone(),
            }),
            Err(source) => Err(RoutingError::Transport {
                label: strategy.label(),
                source,
            }),
        }
    }
}
