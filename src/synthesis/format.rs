//! Deterministic plain-text rendering of result data.

use serde_json::{Map, Value};

pub const NO_DATA: &str = "No data available.";
pub const FALLBACK_HEADER: &str = "Here is the information I found:\n\n";

/// Render `data` as labelled lines without a language model.
///
/// Total over every JSON object: fields appear in insertion order, `null`
/// fields are skipped, nested objects become indented `- key: value` lines
/// and arrays become numbered lists.
pub fn format_basic_response(data: Option<&Map<String, Value>>) -> String {
    let Some(data) = data.filter(|d| !d.is_empty()) else {
        return NO_DATA.to_string();
    };

    let mut out = String::from(FALLBACK_HEADER);
    for (key, value) in data {
        match value {
            Value::Null => {}
            Value::Object(fields) => {
                out.push_str(&format!("{}:\n", key));
                for (sub_key, sub_value) in fields {
                    out.push_str(&format!("  - {}: {}\n", sub_key, inline(sub_value)));
                }
            }
            Value::Array(items) => {
                out.push_str(&format!("{}: {} items\n", key, items.len()));
                for (index, item) in items.iter().enumerate() {
                    out.push_str(&format!("  {}. {}\n", index + 1, inline(item)));
                }
            }
            scalar => out.push_str(&format!("{}: {}\n", key, inline(scalar))),
        }
    }
    out
}

/// Strings print bare; everything else as compact JSON.
fn inline(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
