//! Groups command implementation

use crate::cli::output::{format_groups_json, format_groups_table, GroupView};
use crate::cli::GroupsArgs;
use crate::directory::{create_directories, DirectoryError, ResourceDirectory};
use crate::resolver::ResourceGroupSet;
use std::sync::Arc;

/// State shown for an allow-listed group the subscription doesn't have.
pub const MISSING_STATE: &str = "NotFound";

/// Resource groups a question would search.
///
/// Mirrors the resolver: a non-empty allow-list is used as given, in its own
/// order, and each entry is filled in from the subscription when a group of
/// that name (case-insensitive) exists. Entries without a match are shown
/// with [`MISSING_STATE`]. Without an allow-list every group is listed.
pub async fn groups_in_scope(
    directory: &dyn ResourceDirectory,
    allow_list: Option<&str>,
) -> Result<Vec<GroupView>, DirectoryError> {
    let groups = directory.list_resource_groups().await?;
    let allowed = allow_list
        .map(ResourceGroupSet::from_list)
        .filter(|set| !set.is_empty());

    let Some(allowed) = allowed else {
        return Ok(groups.iter().map(GroupView::from).collect());
    };

    Ok(allowed
        .iter()
        .map(
            |name| match groups.iter().find(|g| g.name.eq_ignore_ascii_case(name)) {
                Some(group) => GroupView {
                    name: name.to_string(),
                    ..GroupView::from(group)
                },
                None => GroupView {
                    name: name.to_string(),
                    location: "-".to_string(),
                    provisioning_state: MISSING_STATE.to_string(),
                    tags: 0,
                },
            },
        )
        .collect())
}

/// Handle `infraquery groups` command
pub async fn handle_groups(args: &GroupsArgs) -> Result<String, Box<dyn std::error::Error>> {
    let config = super::load_config(&args.config)?;
    config.validate_for_directory()?;

    let client = Arc::new(reqwest::Client::builder().build()?);
    let directories = create_directories(&config.azure, client)?;

    let groups =
        groups_in_scope(directories.resources.as_ref(), config.azure.resource_groups.as_deref())
            .await?;

    if args.json {
        Ok(format_groups_json(&groups)?)
    } else {
        Ok(format_groups_table(&groups))
    }
}
