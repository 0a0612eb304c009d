use super::{into_object, same_name, LookupStrategy, ResultData};
use crate::analyzer::QueryIntent;
use crate::directory::{CloudDirectories, DirectoryError, SqlDatabase};
use async_trait::async_trait;
use serde_json::json;

/// SQL databases, found by walking every server in the group.
///
/// Listing failures never abort: an unreadable group or server is logged and
/// skipped.
pub struct DatabaseLookup;

#[async_trait]
impl LookupStrategy for DatabaseLookup {
    fn label(&self) -> &'static str {
        "Database"
    }

    async fn locate(
        &self,
        directories: &CloudDirectories,
        group: &str,
        intent: &QueryIntent,
    ) -> Result<Option<ResultData>, DirectoryError> {
        let servers = match directories.database.list_servers(group).await {
            Ok(servers) => servers,
            Err(e) => {
                if !e.is_not_found() {
                    tracing::warn!(resource_group = group, error = %e, "Failed to list SQL servers");
                }
                return Ok(None);
            }
        };

        for server in servers {
            let databases = match directories.database.list_databases(group, &server.name).await {
                Ok(databases) => databases,
                Err(e) => {
                    tracing::warn!(
                        resource_group = group,
                        server = %server.name,
                        error = %e,
                        "Failed to list databases"
                    );
                    continue;
                }
            };

            if let Some(db) = databases
                .iter()
                .find(|db| same_name(&db.name, &intent.resource_name))
            {
                return Ok(Some(shape(db, &server.name, group)));
            }
        }

        Ok(None)
    }
}

fn shape(db: &SqlDatabase, server: &str, group: &str) -> ResultData {
    into_object(json!({
        "name": db.name,
        "serverName": server,
        "resourceGroup": group,
        "sku": db.sku_name,
        "tier": db.tier,
        "capacity": db.capacity,
        "status": db.status,
        "location": db.location,
        "maxSizeBytes": db.max_size_bytes,
        "collation": db.collation,
    }))
}
