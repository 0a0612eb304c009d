use super::{found_or_missing, into_object, LookupStrategy, ResultData};
use crate::analyzer::{Intent, QueryIntent};
use crate::directory::{CloudDirectories, DirectoryError, VirtualMachine};
use async_trait::async_trait;
use serde_json::json;

/// Virtual machines, fetched with their instance view.
pub struct VirtualMachineLookup;

#[async_trait]
impl LookupStrategy for VirtualMachineLookup {
    fn label(&self) -> &'static str {
        "Virtual Machine"
    }

    async fn locate(
        &self,
        directories: &CloudDirectories,
        group: &str,
        intent: &QueryIntent,
    ) -> Result<Option<ResultData>, DirectoryError> {
        let vm = found_or_missing(
            directories
                .compute
                .get_virtual_machine(group, &intent.resource_name)
                .await,
        )?;
        Ok(vm.map(|vm| shape(&vm, group, &intent.intent)))
    }
}

fn shape(vm: &VirtualMachine, group: &str, intent: &Intent) -> ResultData {
    let value = match intent {
        Intent::GetStatus => json!({
            "name": vm.name,
            "resourceGroup": group,
            "powerState": vm.power_state(),
            "provisioningState": vm.provisioning_state,
            "location": vm.location,
        }),
        Intent::GetConfiguration => json!({
            "name": vm.name,
            "resourceGroup": group,
            "vmSize": vm.vm_size,
            "osType": vm.os_type,
            "location": vm.location,
            "tags": vm.tags,
        }),
        _ => json!({
            "name": vm.name,
            "resourceGroup": group,
            "vmSize": vm.vm_size,
            "location": vm.location,
            "powerState": vm.power_state(),
            "provisioningState": vm.provisioning_state,
            "osType": vm.os_type,
            "tags": vm.tags,
        }),
    };
    into_object(value)
}
