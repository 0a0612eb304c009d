//! Field helpers for structured logging

/// Longest question preview written to logs, in characters.
pub const PREVIEW_CHARS: usize = 100;

/// Privacy-safe preview of a user question for logging
///
/// Returns `None` unless content logging is enabled; otherwise the first
/// [`PREVIEW_CHARS`] characters of the question.
///
/// # Examples
///
/// ```
/// use infraquery::logging::question_preview;
///
/// assert_eq!(question_preview("Is vm-prod-01 running?", false), None);
/// assert_eq!(
///     question_preview("Is vm-prod-01 running?", true).as_deref(),
///     Some("Is vm-prod-01 running?")
/// );
/// ```
pub fn question_preview(question: &str, enable_content_logging: bool) -> Option<String> {
    if !enable_content_logging {
        return None;
    }
    Some(truncate_string(question, PREVIEW_CHARS))
}

/// Truncate on a character boundary, marking the cut with "..."
fn truncate_string(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &s[..cut]),
        None => s.to_string(),
    }
}
