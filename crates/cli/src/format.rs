//! Result → human/json string formatting.
//!
//! Two modes:
//! - **Human** (default): one line per item, e.g. `10..15  notes -> note`
//! - **JSON** (`--json`): `serde_json::to_string_pretty`

use autolink_core::{AutolinkError, MatchResult};
use serde::Serialize;

/// Output formatting mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
}

/// Format the matches found in a document.
pub fn format_matches(matches: &[MatchResult], mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => to_json(matches),
        OutputMode::Human => {
            if matches.is_empty() {
                return "(no matches)".to_string();
            }
            matches
                .iter()
                .map(|m| {
                    format!(
                        "{}..{}  {} -> {}",
                        m.start, m.end, m.original_keyword, m.index_keyword
                    )
                })
                .collect::<Vec<_>>()
                .join("\n")
        }
    }
}

/// Format replacement suggestions for a keyword.
pub fn format_suggestions(suggestions: &[String], mode: OutputMode) -> String {
    format_list(suggestions, mode, "(no suggestions)")
}

/// Format the distinct keyword set.
pub fn format_keywords(keywords: &[String], mode: OutputMode) -> String {
    format_list(keywords, mode, "(empty index)")
}

/// Format an error.
pub fn format_error(err: &AutolinkError, mode: OutputMode) -> String {
    format_message(&err.to_string(), mode)
}

/// Format a plain error message (argument or input errors).
pub fn format_message(message: &str, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => serde_json::to_string_pretty(&serde_json::json!({
            "error": message
        }))
        .unwrap_or_else(|_| format!("{{\"error\": \"{}\"}}", message)),
        OutputMode::Human => format!("(error) {}", message),
    }
}

fn format_list(items: &[String], mode: OutputMode, empty: &str) -> String {
    match mode {
        OutputMode::Json => to_json(items),
        OutputMode::Human if items.is_empty() => empty.to_string(),
        OutputMode::Human => items.join("\n"),
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
}
