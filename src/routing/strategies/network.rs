use super::{found_or_missing, into_object, same_name, LookupStrategy, ResultData};
use crate::analyzer::{Intent, QueryIntent};
use crate::directory::{CloudDirectories, DirectoryError, VirtualNetwork};
use async_trait::async_trait;
use serde_json::{json, Value};

/// Virtual networks, fetched by exact name.
pub struct VirtualNetworkLookup;

#[async_trait]
impl LookupStrategy for VirtualNetworkLookup {
    fn label(&self) -> &'static str {
        "Virtual Network"
    }

    async fn locate(
        &self,
        directories: &CloudDirectories,
        group: &str,
        intent: &QueryIntent,
    ) -> Result<Option<ResultData>, DirectoryError> {
        let vnet = found_or_missing(
            directories
                .network
                .get_virtual_network(group, &intent.resource_name)
                .await,
        )?;

        Ok(vnet.map(|vnet| {
            if wants_subnet_detail(intent) {
                subnet_detail(&vnet, group, true)
            } else {
                summary(&vnet, group)
            }
        }))
    }
}

/// Subnets of a virtual network, found by listing the group's networks.
///
/// A group whose networks cannot be listed is logged and skipped.
pub struct SubnetLookup;

#[async_trait]
impl LookupStrategy for SubnetLookup {
    fn label(&self) -> &'static str {
        "Subnet"
    }

    async fn locate(
        &self,
        directories: &CloudDirectories,
        group: &str,
        intent: &QueryIntent,
    ) -> Result<Option<ResultData>, DirectoryError> {
        let vnets = match directories.network.list_virtual_networks(group).await {
            Ok(vnets) => vnets,
            Err(e) => {
                if !e.is_not_found() {
                    tracing::warn!(resource_group = group, error = %e, "Failed to list virtual networks");
                }
                return Ok(None);
            }
        };

        Ok(vnets
            .iter()
            .find(|vnet| same_name(&vnet.name, &intent.resource_name))
            .map(|vnet| subnet_detail(vnet, group, false)))
    }
}

fn wants_subnet_detail(intent: &QueryIntent) -> bool {
    intent.intent == Intent::CountResources
        || intent.resource_name.to_lowercase().contains("subnet")
}

fn subnet_detail(vnet: &VirtualNetwork, group: &str, with_counts: bool) -> ResultData {
    let subnets: Vec<Value> = vnet
        .subnets
        .iter()
        .map(|s| {
            if with_counts {
                json!({
                    "name": s.name,
                    "addressPrefix": s.address_prefix,
                    "resourceCount": s.ip_configuration_count,
                })
            } else {
                json!({
                    "name": s.name,
                    "addressPrefix": s.address_prefix,
                })
            }
        })
        .collect();

    into_object(json!({
        "vnetName": vnet.name,
        "resourceGroup": group,
        "subnetCount": vnet.subnets.len(),
        "subnets": subnets,
    }))
}

fn summary(vnet: &VirtualNetwork, group: &str) -> ResultData {
    let names: Vec<&str> = vnet.subnets.iter().map(|s| s.name.as_str()).collect();
    into_object(json!({
        "name": vnet.name,
        "resourceGroup": group,
        "location": vnet.location,
        "addressSpace": vnet.address_prefixes,
        "subnetCount": vnet.subnets.len(),
        "subnets": names,
    }))
}
