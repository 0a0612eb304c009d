//! Routing branches that do not run a per-group lookup strategy.

use super::error::RoutingError;
use super::strategies::{into_object, ResultData};
use crate::analyzer::{Intent, QueryIntent};
use crate::directory::{CloudDirectories, DirectoryError, Resource};
use crate::resolver::ResourceGroupSet;
use serde_json::{json, Value};

const COST_MESSAGE: &str = "Cost data retrieval requires additional configuration";
const COST_NOTE: &str =
    "Please configure Cost Management API access and implement time-range queries";

/// Aggregate listing across every candidate group.
///
/// Groups that cannot be listed are logged and left out of the result.
pub(super) async fn list_all(
    directories: &CloudDirectories,
    intent: &QueryIntent,
    groups: &ResourceGroupSet,
) -> ResultData {
    let type_filter = (!intent.resource_type.is_generic())
        .then(|| intent.resource_type.as_str().to_lowercase());

    let mut resources: Vec<Value> = Vec::new();
    for group in groups.iter() {
        let listed = match directories.resources.list_resources_in_group(group).await {
            Ok(listed) => listed,
            Err(e) => {
                tracing::warn!(resource_group = group, error = %e, "Failed to list resources");
                continue;
            }
        };

        resources.extend(
            listed
                .iter()
                .filter(|r| matches_type(r, type_filter.as_deref()))
                .map(|r| {
                    json!({
                        "name": r.name,
                        "type": r.resource_type,
                        "resourceGroup": group,
                        "location": r.location,
                        "id": r.id,
                    })
                }),
        );
    }

    let label = if intent.resource_type.is_generic() {
        "all resources"
    } else {
        intent.resource_type.as_str()
    };

    into_object(json!({
        "resourceType": label,
        "count": resources.len(),
        "resources": resources,
    }))
}

fn matches_type(resource: &Resource, filter: Option<&str>) -> bool {
    match filter {
        Some(wanted) => resource.resource_type.to_lowercase().contains(wanted),
        None => true,
    }
}

/// Placeholder answer for cost questions; no cost data is fetched.
pub(super) fn cost_placeholder(intent: &QueryIntent) -> ResultData {
    let time_period = intent
        .parameters
        .get("timePeriod")
        .map(String::as_str)
        .unwrap_or("not specified");

    into_object(json!({
        "status": "not_implemented",
        "message": COST_MESSAGE,
        "note": COST_NOTE,
        "resourceName": intent.resource_name,
        "timePeriod": time_period,
    }))
}

/// Direct lookup of the resource group named by the intent.
pub(super) async fn resource_group(
    directories: &CloudDirectories,
    intent: &QueryIntent,
) -> Result<ResultData, RoutingError> {
    let name = intent.resource_name.as_str();
    let transport = |source: DirectoryError| RoutingError::Transport {
        label: "Resource Group",
        source,
    };

    let group = match directories.resources.get_resource_group(name).await {
        Ok(group) => group,
        Err(e) if e.is_not_found() => {
            return Err(RoutingError::GroupNotFound {
                name: name.to_string(),
            })
        }
        Err(e) => return Err(transport(e)),
    };

    match intent.intent {
        Intent::ListResources | Intent::CountResources => {
            let listed = directories
                .resources
                .list_resources_in_group(&group.name)
                .await
                .map_err(transport)?;

            let mut data = into_object(json!({
                "resourceGroup": group.name,
                "location": group.location,
                "resourceCount": listed.len(),
            }));
            if intent.intent == Intent::ListResources {
                let resources: Vec<Value> = listed
                    .iter()
                    .map(|r| {
                        json!({
                            "name": r.name,
                            "type": r.resource_type,
                            "location": r.location,
                        })
                    })
                    .collect();
                data.insert("resources".to_string(), Value::Array(resources));
            }
            Ok(data)
        }
        _ => Ok(into_object(json!({
            "name": group.name,
            "location": group.location,
            "provisioningState": group.provisioning_state,
            "tags": group.tags,
        }))),
    }
}
