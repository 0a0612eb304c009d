use super::{into_object, same_name, LookupStrategy, ResultData};
use crate::analyzer::QueryIntent;
use crate::directory::{CloudDirectories, DirectoryError};
use async_trait::async_trait;
use serde_json::json;

/// Any resource, matched by name among the group's listed resources.
///
/// Used for `generic` and every resource type without a dedicated strategy.
pub struct GenericLookup;

#[async_trait]
impl LookupStrategy for GenericLookup {
    fn label(&self) -> &'static str {
        "Resource"
    }

    async fn locate(
        &self,
        directories: &CloudDirectories,
        group: &str,
        intent: &QueryIntent,
    ) -> Result<Option<ResultData>, DirectoryError> {
        let resources = directories.resources.list_resources_in_group(group).await?;

        Ok(resources
            .iter()
            .find(|r| same_name(&r.name, &intent.resource_name))
            .map(|r| {
                into_object(json!({
                    "name": r.name,
                    "type": r.resource_type,
                    "resourceGroup": group,
                    "location": r.location,
                    "id": r.id,
                }))
            }))
    }
}
