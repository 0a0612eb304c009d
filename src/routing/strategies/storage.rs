use super::{found_or_missing, into_object, LookupStrategy, ResultData};
use crate::analyzer::QueryIntent;
use crate::directory::{CloudDirectories, DirectoryError};
use async_trait::async_trait;
use serde_json::json;

pub struct StorageAccountLookup;

#[async_trait]
impl LookupStrategy for StorageAccountLookup {
    fn label(&self) -> &'static str {
        "Storage Account"
    }

    async fn locate(
        &self,
        directories: &CloudDirectories,
        group: &str,
        intent: &QueryIntent,
    ) -> Result<Option<ResultData>, DirectoryError> {
        let account = found_or_missing(
            directories
                .storage
                .get_storage_account(group, &intent.resource_name)
                .await,
        )?;

        Ok(account.map(|account| {
            into_object(json!({
                "name": account.name,
                "resourceGroup": group,
                "sku": account.sku_name,
                "kind": account.kind,
                "location": account.location,
                "provisioningState": account.provisioning_state,
                "accessTier": account.access_tier,
                "enableHttpsTrafficOnly": account.https_only,
            }))
        }))
    }
}
