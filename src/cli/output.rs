//! Output formatting helpers for CLI commands

use crate::directory::ResourceGroup;
use crate::pipeline::{RenderedAnswer, SOURCE_ERROR_HANDLER};
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};
use serde_json::json;

/// View model for resource group display
#[derive(Debug, Clone, serde::Serialize)]
pub struct GroupView {
    pub name: String,
    pub location: String,
    pub provisioning_state: String,
    pub tags: usize,
}

impl From<&ResourceGroup> for GroupView {
    fn from(group: &ResourceGroup) -> Self {
        Self {
            name: group.name.clone(),
            location: group.location.clone(),
            provisioning_state: group
                .provisioning_state
                .clone()
                .unwrap_or_else(|| "Unknown".to_string()),
            tags: group.tags.as_ref().map_or(0, |t| t.len()),
        }
    }
}

/// Format resource groups as a table
pub fn format_groups_table(groups: &[GroupView]) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Name", "Location", "State", "Tags"]);

    for g in groups {
        let state = match g.provisioning_state.as_str() {
            "Succeeded" => g.provisioning_state.green().to_string(),
            "Deleting" | "Failed" | "NotFound" => g.provisioning_state.red().to_string(),
            _ => g.provisioning_state.yellow().to_string(),
        };

        table.add_row(vec![
            Cell::new(&g.name),
            Cell::new(&g.location),
            Cell::new(state),
            Cell::new(g.tags),
        ]);
    }

    table.to_string()
}

/// Format resource groups as JSON
pub fn format_groups_json(groups: &[GroupView]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&json!({
        "resourceGroups": groups,
        "count": groups.len(),
    }))
}

/// Format an answer for the terminal, with its source on a dim trailer line
pub fn format_answer_pretty(answer: &RenderedAnswer) -> String {
    let source = if answer.source == SOURCE_ERROR_HANDLER {
        answer.source.red().to_string()
    } else {
        answer.source.dimmed().to_string()
    };
    format!("{}\n\n{} {}", answer.text, "Source:".dimmed(), source)
}

/// Format an answer as JSON
pub fn format_answer_json(answer: &RenderedAnswer) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(answer)
}
