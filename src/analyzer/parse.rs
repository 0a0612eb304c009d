//! Parsing of the model's JSON reply into a [`QueryIntent`].

use super::error::AnalysisError;
use super::intent::{QueryIntent, UNKNOWN_RESOURCE};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

const FENCE: &str = "```";

/// Remove a Markdown code fence around `text`, if present.
///
/// Handles "```json" and bare "```" openers, on their own line or inline.
/// Text without a fence is returned trimmed.
pub fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(start) = trimmed.find(FENCE) else {
        return trimmed;
    };

    let body = strip_language_tag(&trimmed[start + FENCE.len()..]);

    match body.find(FENCE) {
        Some(end) => body[..end].trim(),
        None => body.trim(),
    }
}

/// Drop a language tag directly after an opening fence.
///
/// A tag is a run of alphanumerics ending the line or followed by
/// whitespace or the start of a JSON value.
fn strip_language_tag(after: &str) -> &str {
    let tag_len = after
        .find(|c: char| !c.is_ascii_alphanumeric())
        .unwrap_or(after.len());
    let rest = &after[tag_len..];
    match rest.chars().next() {
        None => rest,
        Some(c) if c.is_whitespace() || c == '{' || c == '[' => rest,
        Some(_) => after,
    }
}

/// Parse and normalize a model reply.
pub fn parse_intent(reply: &str) -> Result<QueryIntent, AnalysisError> {
    let cleaned = strip_code_fences(reply);
    let value: Value = serde_json::from_str(cleaned).map_err(|e| AnalysisError::Parse {
        message: e.to_string(),
        raw: reply.to_string(),
    })?;

    let Value::Object(object) = value else {
        return Err(AnalysisError::Parse {
            message: "expected a JSON object".to_string(),
            raw: reply.to_string(),
        });
    };

    let intent = required_str(&object, "intent")?;
    let resource_type = required_str(&object, "resourceType")?;
    let mut parsed = QueryIntent::new(intent, resource_type, String::new());

    parsed.resource_name = match object.get("resourceName").and_then(Value::as_str) {
        Some(name) if !name.trim().is_empty() => name.trim().to_string(),
        _ if parsed.resource_type.is_generic() => String::new(),
        _ => UNKNOWN_RESOURCE.to_string(),
    };

    if let Some(Value::Object(params)) = object.get("parameters") {
        parsed.parameters = normalize_parameters(params);
    }

    Ok(parsed)
}

fn required_str<'a>(
    object: &'a Map<String, Value>,
    field: &'static str,
) -> Result<&'a str, AnalysisError> {
    object
        .get(field)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or(AnalysisError::MissingField(field))
}

fn normalize_parameters(params: &Map<String, Value>) -> BTreeMap<String, String> {
    params
        .iter()
        .filter_map(|(key, value)| {
            let text = match value {
                Value::Null => return None,
                Value::String(s) => s.clone(),
                Value::Bool(b) => b.to_string(),
                Value::Number(n) => n.to_string(),
                other => other.to_string(),
            };
            Some((key.clone(), text))
        })
        .collect()
}
